//! Multiplexes concurrent per-device pairings keyed by model id, retrying
//! handshake and pair failures up to three times each with a one-second
//! backoff, and fanning results out to observers.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::address::Address;
use crate::config::SeekerConfig;
use crate::device::{DeviceFastPairVersion, FastPairDevice};
use crate::error::PairFailure;
use crate::handshake::{run_handshake, Handshake, HandshakeCache, HandshakeKey, HandshakeSecret};
use crate::pairing::pairer::{Pairer, PairerEntry, PostPairOutcome};
use crate::platform::{ClassicPairing, GattConnection};
use crate::repository::Repository;

/// What observers are told about a model id's pairing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrokerEvent {
    PairingComplete,
    PairFailure(PairFailure),
    AccountKeyWrite(Result<(), PairFailure>),
}

pub trait BrokerObserver: Send + Sync {
    fn on_event(&self, model_id: &str, event: BrokerEvent);
}

struct ModelState {
    ble_address: Address,
    handshake_attempts: u32,
    pair_attempts: u32,
}

/// Per-process coordinator. Cheap to clone; state is reference-counted.
#[derive(Clone)]
pub struct PairerBroker {
    config: SeekerConfig,
    cache: HandshakeCache,
    states: Arc<Mutex<HashMap<String, ModelState>>>,
    observers: Arc<Mutex<Vec<Arc<dyn BrokerObserver>>>>,
}

impl PairerBroker {
    pub fn new(config: SeekerConfig) -> Self {
        Self {
            config,
            cache: HandshakeCache::new(),
            states: Arc::new(Mutex::new(HashMap::new())),
            observers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn add_observer(&self, observer: Arc<dyn BrokerObserver>) {
        self.observers.lock().await.push(observer);
    }

    async fn notify(&self, model_id: &str, event: BrokerEvent) {
        // Clone the list so a deregistration triggered from within a
        // callback doesn't deadlock or invalidate this iteration.
        let observers = self.observers.lock().await.clone();
        for observer in observers {
            observer.on_event(model_id, event.clone());
        }
    }

    async fn drop_model(&self, model_id: &str, ble_address: Address, public_address: Option<Address>) {
        self.states.lock().await.remove(model_id);
        self.cache.erase(HandshakeKey::Ble(ble_address)).await;
        if let Some(addr) = public_address {
            self.cache.erase(HandshakeKey::Public(addr)).await;
        }
    }

    /// Starts pairing `device`. If a Pairer is already active for this
    /// model id, the request is dropped.
    pub async fn start_pairing(
        &self,
        mut device: FastPairDevice,
        connection: Arc<dyn GattConnection>,
        classic: Arc<dyn ClassicPairing>,
        repository: Arc<dyn Repository>,
        anti_spoofing_public_key: Option<Vec<u8>>,
        seeker_address: Option<Address>,
    ) {
        let model_id = device.model_id().to_string();
        {
            let mut states = self.states.lock().await;
            if states.contains_key(&model_id) {
                return;
            }
            states.insert(
                model_id.clone(),
                ModelState {
                    ble_address: device.ble_address(),
                    handshake_attempts: 0,
                    pair_attempts: 0,
                },
            );
        }

        self.run(
            &mut device,
            connection,
            classic,
            repository,
            anti_spoofing_public_key.as_deref(),
            seeker_address,
        )
        .await;
    }

    async fn run(
        &self,
        device: &mut FastPairDevice,
        connection: Arc<dyn GattConnection>,
        classic: Arc<dyn ClassicPairing>,
        repository: Arc<dyn Repository>,
        anti_spoofing_public_key: Option<&[u8]>,
        seeker_address: Option<Address>,
    ) {
        let model_id = device.model_id().to_string();

        loop {
            let entry = if device.is_legacy_v1() {
                PairerEntry::V1
            } else {
                match self
                    .ensure_handshake(device, Arc::clone(&connection), anti_spoofing_public_key, seeker_address)
                    .await
                {
                    Ok(handshake) => PairerEntry::V2Plus(handshake),
                    Err(failure) => {
                        if self.record_handshake_failure(&model_id).await {
                            self.give_up(device, failure).await;
                            return;
                        }
                        tracing::debug!(model_id, %failure, "handshake attempt failed, retrying");
                        tokio::time::sleep(self.config.retry_delay).await;
                        continue;
                    }
                }
            };

            let pairer = Pairer::new(&self.config, classic.as_ref(), repository.as_ref());
            match pairer.pair(device, entry).await {
                Ok(outcome) => {
                    self.on_procedure_complete(device, outcome).await;
                    return;
                }
                Err(failure) => {
                    if self.record_pair_failure(&model_id).await {
                        self.give_up(device, failure).await;
                        return;
                    }
                    tracing::debug!(model_id, %failure, "pair attempt failed, retrying");
                    classic.cancel_pairing().await;
                    tokio::time::sleep(self.config.retry_delay).await;
                }
            }
        }
    }

    /// Returns `true` if the handshake-attempt budget for `model_id` is now
    /// exhausted.
    async fn record_handshake_failure(&self, model_id: &str) -> bool {
        let mut states = self.states.lock().await;
        match states.get_mut(model_id) {
            Some(state) => {
                state.handshake_attempts += 1;
                state.handshake_attempts >= self.config.max_handshake_attempts
            }
            None => true,
        }
    }

    /// Returns `true` if the pair-attempt budget for `model_id` is now
    /// exhausted.
    async fn record_pair_failure(&self, model_id: &str) -> bool {
        let mut states = self.states.lock().await;
        match states.get_mut(model_id) {
            Some(state) => {
                state.pair_attempts += 1;
                state.pair_attempts >= self.config.max_pair_attempts
            }
            None => true,
        }
    }

    async fn give_up(&self, device: &FastPairDevice, failure: PairFailure) {
        let model_id = device.model_id().to_string();
        tracing::warn!(model_id, %failure, "giving up on device after exhausting retry budget");
        self.drop_model(&model_id, device.ble_address(), device.public_address()).await;
        self.notify(&model_id, BrokerEvent::PairFailure(failure)).await;
    }

    async fn ensure_handshake(
        &self,
        device: &mut FastPairDevice,
        connection: Arc<dyn GattConnection>,
        anti_spoofing_public_key: Option<&[u8]>,
        seeker_address: Option<Address>,
    ) -> Result<Arc<Handshake>, PairFailure> {
        if let Some(handshake) = self.cache.get_or_evict(device.ble_address()).await {
            device.set_public_address(handshake.public_address);
            return Ok(handshake);
        }
        // The BLE address can rotate between scans; a device whose public
        // address we already know from an earlier handshake may still have
        // a live cache entry reachable only by that address.
        if let Some(public_address) = device.public_address() {
            if let Some(handshake) = self.cache.get_by_public_address(public_address).await {
                device.set_public_address(handshake.public_address);
                return Ok(handshake);
            }
        }

        let secret = match (device.protocol(), device.account_key(), anti_spoofing_public_key) {
            (crate::device::Protocol::SubsequentPairing, Some(key), _) => HandshakeSecret::AccountKey(key),
            (_, _, Some(key)) => HandshakeSecret::AntiSpoofingKey(key),
            _ => return Err(PairFailure::KeyBasedPairingResponseDecrypt),
        };

        let handshake = run_handshake(
            connection,
            &self.config,
            secret,
            device.protocol(),
            device.ble_address(),
            seeker_address,
        )
        .await?;

        device.set_public_address(handshake.public_address);
        device.set_version(DeviceFastPairVersion::V2Plus);

        let handshake = Arc::new(handshake);
        self.cache.insert(device.ble_address(), Arc::clone(&handshake)).await;
        Ok(handshake)
    }

    /// Classic pairing already succeeded by the time this runs, for every
    /// `outcome` variant including `AccountKeyFailed` — an account-key
    /// failure does not unpair the device, so `PairingComplete` is always
    /// notified here, with a separate `AccountKeyWrite` event carrying the
    /// account-key-specific result when one happened.
    async fn on_procedure_complete(&self, device: &FastPairDevice, outcome: PostPairOutcome) {
        let model_id = device.model_id().to_string();
        let ble_address = device.ble_address();
        self.drop_model(&model_id, ble_address, device.public_address()).await;
        self.notify(&model_id, BrokerEvent::PairingComplete).await;

        match outcome {
            PostPairOutcome::AccountKeyWritten => {
                self.notify(&model_id, BrokerEvent::AccountKeyWrite(Ok(()))).await;
            }
            PostPairOutcome::AccountKeyFailed(failure) => {
                tracing::warn!(model_id, %failure, "account key write failed, device remains paired");
                self.notify(&model_id, BrokerEvent::AccountKeyWrite(Err(failure))).await;
            }
            PostPairOutcome::Legacy | PostPairOutcome::NoAccountKeyWrite => {}
        }
    }
}

