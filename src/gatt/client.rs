//! Drives the three Fast Pair GATT characteristics over a platform
//! [`GattConnection`]: connect with retry, discover each
//! characteristic (v2 UUID preferred, v1 fallback), then subscribe/write/
//! await-notification for the key-based-pairing and passkey exchanges, or a
//! bare write for the account key.

use futures_lite::StreamExt;

use crate::config::SeekerConfig;
use crate::error::PairFailure;
use crate::gatt::uuids::FastPairCharacteristic;
use crate::platform::{BoxStream, GattCharacteristic, GattConnection};

/// Discovers `characteristic`, retrying up to
/// `config.max_service_discovery_attempts` times with `config.gatt_step_timeout`
/// bounding each attempt, so a Provider that never answers discovery can't
/// wedge the single cooperative task driving every handshake.
async fn discover_with_retry(
    connection: &dyn GattConnection,
    config: &SeekerConfig,
    characteristic: FastPairCharacteristic,
    discovery_failure: PairFailure,
) -> Result<Box<dyn GattCharacteristic>, PairFailure> {
    let candidates = characteristic.candidates();
    for attempt in 0..config.max_service_discovery_attempts {
        let discovery = connection.discover_characteristic(&candidates);
        match tokio::time::timeout(config.gatt_step_timeout, discovery).await {
            Ok(Ok(gatt_char)) => return Ok(gatt_char),
            Ok(Err(_)) | Err(_) => {
                if attempt + 1 < config.max_service_discovery_attempts {
                    tokio::time::sleep(config.retry_delay).await;
                }
            }
        }
    }
    Err(discovery_failure)
}

/// A single characteristic exchange: subscribe, write, await one
/// notification.
async fn exchange(
    connection: &dyn GattConnection,
    config: &SeekerConfig,
    characteristic: FastPairCharacteristic,
    request: &[u8],
    subscribe_failure: PairFailure,
    write_failure: PairFailure,
    response_timeout_failure: PairFailure,
    discovery_failure: PairFailure,
) -> Result<Vec<u8>, PairFailure> {
    let gatt_char = discover_with_retry(connection, config, characteristic, discovery_failure).await?;

    let mut notifications: BoxStream<'static, Vec<u8>> =
        tokio::time::timeout(config.gatt_step_timeout, gatt_char.subscribe())
            .await
            .map_err(|_| subscribe_failure)?
            .map_err(|_| subscribe_failure)?;

    tokio::time::timeout(config.gatt_step_timeout, gatt_char.write(request))
        .await
        .map_err(|_| write_failure)?
        .map_err(|_| write_failure)?;

    let response = tokio::time::timeout(config.gatt_step_timeout, notifications.next())
        .await
        .map_err(|_| response_timeout_failure)?
        .ok_or(response_timeout_failure)?;

    Ok(response)
}

/// Drives the GATT side of a single handshake attempt against one
/// connection. Owns connect-with-retry; callers own reconnecting between
/// attempts if they choose to retry the handshake as a whole.
pub struct GattHandshakeClient<'c> {
    connection: &'c dyn GattConnection,
    config: &'c SeekerConfig,
}

impl<'c> GattHandshakeClient<'c> {
    pub fn new(connection: &'c dyn GattConnection, config: &'c SeekerConfig) -> Self {
        Self { connection, config }
    }

    /// Establishes the GATT connection, retrying up to
    /// `config.max_gatt_connect_attempts` times with `config.retry_delay`
    /// between attempts.
    pub async fn connect_with_retry(&self) -> Result<(), PairFailure> {
        let mut last_err = PairFailure::CreateGattConnection;
        for attempt in 0..self.config.max_gatt_connect_attempts {
            match self.connection.connect().await {
                Ok(()) => return Ok(()),
                Err(err) => {
                    last_err = err;
                    self.connection.disconnect().await;
                    if attempt + 1 < self.config.max_gatt_connect_attempts {
                        tokio::time::sleep(self.config.retry_delay).await;
                    }
                }
            }
        }
        Err(last_err)
    }

    /// Writes the encrypted key-based-pairing request (optionally with the
    /// appended ephemeral public key for initial pairing) and returns the
    /// encrypted response bytes.
    pub async fn exchange_key_based_pairing(
        &self,
        request: &[u8],
    ) -> Result<Vec<u8>, PairFailure> {
        exchange(
            self.connection,
            self.config,
            FastPairCharacteristic::KeyBasedPairing,
            request,
            PairFailure::KeyBasedPairingCharacteristicSubscriptionTimeout,
            PairFailure::KeyBasedPairingCharacteristicWrite,
            PairFailure::KeyBasedPairingResponseTimeout,
            PairFailure::KeyBasedPairingCharacteristicDiscovery,
        )
        .await
    }

    /// Writes the encrypted seeker's-passkey request and returns the
    /// encrypted provider's-passkey response bytes.
    pub async fn exchange_passkey(&self, request: &[u8]) -> Result<Vec<u8>, PairFailure> {
        exchange(
            self.connection,
            self.config,
            FastPairCharacteristic::Passkey,
            request,
            PairFailure::PasskeyCharacteristicSubscriptionTimeout,
            PairFailure::PasskeyCharacteristicWrite,
            PairFailure::PasskeyResponseTimeout,
            PairFailure::PasskeyCharacteristicDiscovery,
        )
        .await
    }

    /// Writes the encrypted account key block. No response is expected.
    pub async fn write_account_key(&self, encrypted: &[u8]) -> Result<(), PairFailure> {
        let gatt_char = discover_with_retry(
            self.connection,
            self.config,
            FastPairCharacteristic::AccountKey,
            PairFailure::AccountKeyCharacteristicDiscovery,
        )
        .await?;

        tokio::time::timeout(self.config.gatt_step_timeout, gatt_char.write(encrypted))
            .await
            .map_err(|_| PairFailure::AccountKeyCharacteristicWrite)?
            .map_err(|_| PairFailure::AccountKeyCharacteristicWrite)
    }
}
