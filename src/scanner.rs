//! Scanner adapter layer: dispatches found/lost events into the
//! handshake/pairing pipeline. Translates a raw platform [`ScanEvent`] into
//! either a discoverable-pairing or a subsequent-pairing
//! [`FastPairDevice`] and hands it to the broker.
//!
//! Discrimination: only service data under the Fast Pair service UUID
//! reaches this layer at all (the platform scanner already filters on
//! that); this layer additionally drops the reserved Nearby Share model id
//! and any non-discoverable advertisement whose Bloom filter doesn't match
//! one of the signed-in user's saved account keys.

use std::sync::Arc;

use crate::address::Address;
use crate::advertisement::{is_reserved_model_id, parse_discoverable, parse_non_discoverable, NonDiscoverableAdvertisement};
use crate::battery::{BatteryNotification, BatteryUiType};
use crate::bloom::AccountKeyFilter;
use crate::device::{FastPairDevice, Protocol};
use crate::pairing::PairerBroker;
use crate::platform::{ClassicPairing, GattConnection, ScanEvent};
use crate::repository::Repository;

/// Builds a GATT connection and a classic-pairing collaborator for a
/// discovered BLE address. Supplied by the host application, since both
/// are platform bindings this crate has no way to construct itself.
#[async_trait::async_trait]
pub trait PlatformFactory: Send + Sync {
    async fn gatt_connection(&self, ble_address: Address) -> Arc<dyn GattConnection>;
    async fn classic_pairing(&self, ble_address: Address) -> Arc<dyn ClassicPairing>;
}

/// Handles one [`ScanEvent`], dispatching to the broker when it resolves
/// to a pairable device. Unknown model ids, the reserved Nearby Share
/// model id, and non-matching Bloom filters are logged and dropped rather
/// than surfaced as an error.
pub async fn handle_scan_event(
    event: ScanEvent,
    broker: &PairerBroker,
    repository: &Arc<dyn Repository>,
    platform: &dyn PlatformFactory,
) {
    let ScanEvent::Found {
        ble_address,
        service_data,
    } = event
    else {
        return;
    };

    if let Some(model_id) = parse_discoverable(&service_data) {
        if is_reserved_model_id(&model_id) {
            tracing::debug!(model_id, "dropping reserved Nearby Share model id");
            return;
        }
        dispatch_discoverable(model_id, ble_address, broker, repository, platform).await;
        return;
    }

    if let Some(advertisement) = parse_non_discoverable(&service_data, ble_address.as_bytes()) {
        dispatch_non_discoverable(advertisement, ble_address, broker, repository, platform).await;
    }
}

async fn dispatch_discoverable(
    model_id: String,
    ble_address: Address,
    broker: &PairerBroker,
    repository: &Arc<dyn Repository>,
    platform: &dyn PlatformFactory,
) {
    let metadata = match repository.get_device_metadata(&model_id).await {
        Ok(Some(metadata)) => metadata,
        Ok(None) => {
            tracing::debug!(model_id, "dropping advertisement for unknown model id");
            return;
        }
        Err(err) => {
            tracing::warn!(model_id, ?err, "repository lookup failed");
            return;
        }
    };

    let mut device = FastPairDevice::new(model_id, ble_address, Protocol::InitialPairing);
    device.set_display_name(metadata.display_name);

    start(
        device,
        ble_address,
        broker,
        repository,
        platform,
        Some(metadata.anti_spoofing_public_key),
    )
    .await;
}

async fn dispatch_non_discoverable(
    advertisement: NonDiscoverableAdvertisement,
    ble_address: Address,
    broker: &PairerBroker,
    repository: &Arc<dyn Repository>,
    platform: &dyn PlatformFactory,
) {
    let filter = AccountKeyFilter::from_bytes(advertisement.account_key_filter);
    let salt = extend_salt_with_battery(&advertisement.salt, &advertisement.battery);

    let matched = match repository
        .check_if_associated_with_current_account(&filter, &salt)
        .await
    {
        Ok(Some(matched)) => matched,
        Ok(None) => {
            tracing::debug!("non-discoverable advertisement matched no saved account key");
            return;
        }
        Err(err) => {
            tracing::warn!(?err, "repository account-key check failed");
            return;
        }
    };

    let (account_key, model_id) = matched;
    let mut device = FastPairDevice::new(model_id, ble_address, Protocol::SubsequentPairing);
    device.set_account_key(account_key);

    start(device, ble_address, broker, repository, platform, None).await;
}

/// Extends the filter's salt stream with the battery TLV header byte and
/// value byte(s), transparent to the repository.
fn extend_salt_with_battery(salt: &[u8], battery: &Option<(BatteryUiType, BatteryNotification)>) -> Vec<u8> {
    let mut extended = salt.to_vec();
    if let Some((ui_type, notification)) = battery {
        let header = match ui_type {
            BatteryUiType::ShowUi => 0x33u8,
            BatteryUiType::HideUi => 0x34u8,
        };
        extended.push(header);
        match notification {
            BatteryNotification::Single(info) => extended.push(info.to_byte()),
            BatteryNotification::Tws { left, right, case } => {
                extended.push(left.to_byte());
                extended.push(right.to_byte());
                extended.push(case.to_byte());
            }
        }
    }
    extended
}

async fn start(
    device: FastPairDevice,
    ble_address: Address,
    broker: &PairerBroker,
    repository: &Arc<dyn Repository>,
    platform: &dyn PlatformFactory,
    anti_spoofing_public_key: Option<Vec<u8>>,
) {
    let connection = platform.gatt_connection(ble_address).await;
    let classic = platform.classic_pairing(ble_address).await;
    broker
        .start_pairing(
            device,
            connection,
            classic,
            Arc::clone(repository),
            anti_spoofing_public_key,
            None,
        )
        .await;
}
