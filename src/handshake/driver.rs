//! Sequences GATT initialization, encryptor construction, and the
//! single key-based-pairing write.

use std::sync::Arc;

use crate::account_key::AccountKey;
use crate::address::Address;
use crate::config::SeekerConfig;
use crate::crypto::messages::MessageType;
use crate::device::Protocol;
use crate::encryptor::DataEncryptor;
use crate::error::PairFailure;
use crate::gatt::client::GattHandshakeClient;
use crate::platform::GattConnection;

/// Bit set in the key-based-pairing request flags byte for retroactive
/// pairing; clear for initial and subsequent pairing.
const RETROACTIVE_PAIRING_FLAG: u8 = 0x40;

/// The materials needed to construct the key-based-pairing request and the
/// encryptor that will decrypt its response.
pub enum HandshakeSecret<'a> {
    /// Initial or retroactive pairing: derive a fresh session key from the
    /// Provider's anti-spoofing public key.
    AntiSpoofingKey(&'a [u8]),
    /// Subsequent pairing: reuse a previously saved account key directly.
    AccountKey(&'a AccountKey),
}

/// The outcome of a successful handshake: the encryptor to reuse for the
/// passkey and account-key writes, the GATT connection it ran over, and the
/// Provider's resolved classic public address.
pub struct Handshake {
    pub connection: Arc<dyn GattConnection>,
    pub encryptor: DataEncryptor,
    pub public_address: Address,
    pub(crate) completed_successfully: bool,
}

impl Handshake {
    pub fn completed_successfully(&self) -> bool {
        self.completed_successfully
    }
}

/// Runs the full handshake against `connection`: connects with retry,
/// builds the encryptor, and performs the key-based-pairing exchange.
pub async fn run_handshake(
    connection: Arc<dyn GattConnection>,
    config: &SeekerConfig,
    secret: HandshakeSecret<'_>,
    protocol: Protocol,
    provider_ble_address: Address,
    seeker_address: Option<Address>,
) -> Result<Handshake, PairFailure> {
    let client = GattHandshakeClient::new(connection.as_ref(), config);
    client.connect_with_retry().await?;

    let encryptor = match secret {
        HandshakeSecret::AntiSpoofingKey(key) => DataEncryptor::from_anti_spoofing_key(key)
            .ok_or(PairFailure::KeyBasedPairingResponseDecrypt)?,
        HandshakeSecret::AccountKey(key) => DataEncryptor::from_account_key(*key.as_bytes()),
    };

    let mut plaintext = [0u8; 16];
    plaintext[0] = MessageType::KeyBasedPairingRequest.tag();
    plaintext[1] = if matches!(protocol, Protocol::RetroactivePairing) {
        RETROACTIVE_PAIRING_FLAG
    } else {
        0x00
    };
    plaintext[2..8].copy_from_slice(provider_ble_address.as_bytes());
    match seeker_address {
        Some(addr) => plaintext[8..14].copy_from_slice(addr.as_bytes()),
        None => rand::RngCore::fill_bytes(&mut rand::thread_rng(), &mut plaintext[8..14]),
    }
    rand::RngCore::fill_bytes(&mut rand::thread_rng(), &mut plaintext[14..16]);

    let ciphertext = encryptor.encrypt(&plaintext);
    let mut request = ciphertext.to_vec();
    if let Some(public_key) = encryptor.public_key() {
        request.extend_from_slice(public_key);
    }

    let response = client.exchange_key_based_pairing(&request).await?;
    let decrypted = encryptor
        .parse_response(&response)
        .ok_or(PairFailure::KeyBasedPairingResponseDecrypt)?;

    let public_address = Address::from_bytes(decrypted.address_bytes);

    Ok(Handshake {
        connection,
        encryptor,
        public_address,
        completed_successfully: true,
    })
}
