//! Drives classic pairing, passkey confirmation, and the account-key
//! commit for a single device.

use std::sync::Arc;

use futures_lite::StreamExt;

use crate::account_key::AccountKey;
use crate::config::SeekerConfig;
use crate::crypto::messages::MessageType;
use crate::device::{FastPairDevice, Protocol};
use crate::error::PairFailure;
use crate::gatt::client::GattHandshakeClient;
use crate::handshake::Handshake;
use crate::pairing::agent::Passkey;
use crate::platform::{ClassicPairing, PairingEvent, PairingRequest};
use crate::repository::Repository;

/// What the Pairer did after classic pairing succeeded, beyond a bare
/// "paired" signal — used by the broker to decide whether to also emit an
/// account-key-write event.
///
/// Classic pairing has already completed by the time any of these is
/// returned, so none of them unwind the device's paired state: an
/// account-key failure is reported separately, not as a pairing failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostPairOutcome {
    /// v1: nothing further happens.
    Legacy,
    /// An account key was written to the device (and, for initial pairing,
    /// possibly committed to the cloud separately).
    AccountKeyWritten,
    /// No account-key write was needed or performed.
    NoAccountKeyWrite,
    /// The account key characteristic write or the cloud commit failed.
    /// The device stays paired; only the account-key side of the procedure
    /// is reported as failed.
    AccountKeyFailed(PairFailure),
}

/// Either a full v2+ handshake (reusing its GATT connection and encryptor)
/// or, for v1, just the platform's classic-pairing collaborator.
pub enum PairerEntry {
    V2Plus(Arc<Handshake>),
    V1,
}

/// Drives a single device through classic pairing to completion.
pub struct Pairer<'a> {
    config: &'a SeekerConfig,
    classic: &'a dyn ClassicPairing,
    repository: &'a dyn Repository,
}

impl<'a> Pairer<'a> {
    pub fn new(config: &'a SeekerConfig, classic: &'a dyn ClassicPairing, repository: &'a dyn Repository) -> Self {
        Self {
            config,
            classic,
            repository,
        }
    }

    /// Runs the full pairing sequence against `device`, given its handshake
    /// entry point. On success returns what post-pair action
    /// was taken.
    pub async fn pair(
        &self,
        device: &mut FastPairDevice,
        entry: PairerEntry,
    ) -> Result<PostPairOutcome, PairFailure> {
        self.classic.unpair().await;

        let deadline = tokio::time::Instant::now() + self.config.pairing_timeout;
        let mut events = tokio::time::timeout_at(deadline, self.classic.initiate_pairing())
            .await
            .map_err(|_| PairFailure::PairingTimeout)?
            .map_err(|_| PairFailure::PairingFailed)?;

        loop {
            let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
            let event = tokio::time::timeout(remaining, events.next())
                .await
                .map_err(|_| PairFailure::PairingTimeout)?
                .ok_or(PairFailure::PairingFailed)?;

            match event {
                PairingEvent::Paired => break,
                PairingEvent::Error(failure) => return Err(failure),
                PairingEvent::Initiated(PairingRequest::Confirmation) => {
                    self.classic
                        .finish_pairing(None)
                        .await
                        .map_err(|_| PairFailure::PairingFailed)?;
                }
                PairingEvent::Initiated(PairingRequest::PasskeyConfirmation { passkey }) => {
                    let handshake = match &entry {
                        PairerEntry::V2Plus(h) => h,
                        // A v1 Provider has no encryptor to drive the passkey
                        // write with; a platform passkey-confirm request
                        // against a v1 entry can't be satisfied.
                        PairerEntry::V1 => return Err(PairFailure::PasskeyMismatch),
                    };
                    self.confirm_passkey(handshake, passkey).await?;
                    self.classic
                        .finish_pairing(Some(passkey))
                        .await
                        .map_err(|_| PairFailure::PairingFailed)?;
                }
            }
        }

        match entry {
            PairerEntry::V1 => Ok(PostPairOutcome::Legacy),
            PairerEntry::V2Plus(handshake) => self.post_pair(device, &handshake).await,
        }
    }

    async fn confirm_passkey(&self, handshake: &Handshake, seeker_passkey: Passkey) -> Result<(), PairFailure> {
        let client = GattHandshakeClient::new(handshake.connection.as_ref(), self.config);

        let mut plaintext = [0u8; 16];
        plaintext[0] = MessageType::SeekersPasskey.tag();
        let passkey_value: u32 = seeker_passkey.into();
        plaintext[1..4].copy_from_slice(&passkey_value.to_be_bytes()[1..4]);
        rand::RngCore::fill_bytes(&mut rand::thread_rng(), &mut plaintext[4..16]);

        let ciphertext = handshake.encryptor.encrypt(&plaintext);
        let response = client.exchange_passkey(&ciphertext).await?;

        let decrypted = handshake
            .encryptor
            .parse_passkey(&response)
            .ok_or(PairFailure::PasskeyResponseDecrypt)?;
        if decrypted.message_type != MessageType::ProvidersPasskey {
            return Err(PairFailure::PasskeyResponseDecrypt);
        }
        if decrypted.passkey != passkey_value {
            return Err(PairFailure::PasskeyMismatch);
        }
        Ok(())
    }

    /// Runs the account-key side of a completed pairing. Never returns
    /// `Err`: classic pairing already succeeded by the time this runs, so an
    /// account-key failure is reported as [`PostPairOutcome::AccountKeyFailed`]
    /// rather than unwinding the pairing itself.
    async fn post_pair(
        &self,
        device: &mut FastPairDevice,
        handshake: &Handshake,
    ) -> Result<PostPairOutcome, PairFailure> {
        match device.protocol() {
            Protocol::SubsequentPairing => Ok(PostPairOutcome::NoAccountKeyWrite),
            Protocol::InitialPairing => {
                let opted_in = matches!(
                    self.repository.get_user_saved_devices().await,
                    Ok((crate::repository::OptInStatus::OptedIn, _))
                );
                if !opted_in {
                    return Ok(PostPairOutcome::NoAccountKeyWrite);
                }
                let Some(public_address) = device.public_address() else {
                    return Err(PairFailure::NoHandshakeForDevice);
                };
                let already_saved = self
                    .repository
                    .is_device_saved_to_account(public_address)
                    .await
                    .unwrap_or(false);
                if already_saved {
                    return Ok(PostPairOutcome::NoAccountKeyWrite);
                }

                let account_key = match self.write_account_key(handshake).await {
                    Ok(key) => key,
                    Err(failure) => return Ok(PostPairOutcome::AccountKeyFailed(failure)),
                };
                device.set_account_key(account_key);

                match self.repository.write_account_association(device).await {
                    Ok(()) => Ok(PostPairOutcome::AccountKeyWritten),
                    Err(_) => Ok(PostPairOutcome::AccountKeyFailed(PairFailure::WriteAccountKeyToFootprints)),
                }
            }
            Protocol::RetroactivePairing => match self.write_account_key(handshake).await {
                Ok(account_key) => {
                    device.set_account_key(account_key);
                    Ok(PostPairOutcome::AccountKeyWritten)
                }
                Err(failure) => Ok(PostPairOutcome::AccountKeyFailed(failure)),
            },
        }
    }

    /// Generates a fresh account key, writes it to the account-key
    /// characteristic, and returns it: a successful write hands the key
    /// back upward rather than requiring the caller to have precomputed it.
    async fn write_account_key(&self, handshake: &Handshake) -> Result<AccountKey, PairFailure> {
        let client = GattHandshakeClient::new(handshake.connection.as_ref(), self.config);
        let account_key = AccountKey::random_for_write();
        let ciphertext = handshake.encryptor.encrypt(account_key.as_bytes());
        client.write_account_key(&ciphertext).await?;
        Ok(account_key)
    }
}
