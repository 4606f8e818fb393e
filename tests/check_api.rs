#![allow(clippy::let_unit_value, dead_code)]

use std::sync::Arc;

use fastpair_seeker::account_key::AccountKey;
use fastpair_seeker::address::Address;
use fastpair_seeker::device::FastPairDevice;
use fastpair_seeker::error::PairFailure;
use fastpair_seeker::pairing::Passkey;
use fastpair_seeker::platform::{
    BoxStream, ClassicPairing, GattCharacteristic, GattConnection, PairingEvent, ScanEvent,
};
use fastpair_seeker::repository::{DeviceMetadata, Observer, OptInStatus, Repository, SavedDevice};
use fastpair_seeker::scanner::{handle_scan_event, PlatformFactory};
use fastpair_seeker::PairerBroker;

fn assert_send<T: Send>(t: T) -> T {
    t
}

async fn check_gatt_connection_apis(
    connection: Arc<dyn GattConnection>,
) -> Result<(), PairFailure> {
    let _connect: Result<(), PairFailure> = assert_send(connection.connect()).await;
    assert_send(connection.disconnect()).await;
    let characteristic: Box<dyn GattCharacteristic> =
        assert_send(connection.discover_characteristic(&[])).await?;
    let _sub: BoxStream<'static, Vec<u8>> = assert_send(characteristic.subscribe()).await?;
    let _write: Result<(), PairFailure> = assert_send(characteristic.write(&[0u8])).await;
    Ok(())
}

async fn check_classic_pairing_apis(classic: Arc<dyn ClassicPairing>) -> Result<(), PairFailure> {
    let _address: Address = classic.address();
    let _is_paired: bool = assert_send(classic.is_paired()).await;
    assert_send(classic.unpair()).await;
    let mut events: BoxStream<'static, PairingEvent> =
        assert_send(classic.initiate_pairing()).await?;
    let _event: Option<PairingEvent> = assert_send(futures_lite::StreamExt::next(&mut events)).await;
    assert_send(classic.cancel_pairing()).await;
    let passkey = Passkey::new(123_456).unwrap();
    let _finish: Result<(), PairFailure> = assert_send(classic.finish_pairing(Some(passkey))).await;
    Ok(())
}

struct NullObserver;

impl Observer for NullObserver {
    fn on_saved_devices_updated(&self, _opt_in_status: OptInStatus, _devices: &[SavedDevice]) {}
}

async fn check_repository_apis(repository: &dyn Repository, device: &FastPairDevice) {
    assert_send(repository.add_observer(Arc::new(NullObserver))).await;
    let _metadata: Result<Option<DeviceMetadata>, _> =
        assert_send(repository.get_device_metadata("abc123")).await;
    let _saved: Result<bool, _> =
        assert_send(repository.is_device_saved_to_account(Address::from_bytes([0; 6]))).await;
    let _written: Result<(), _> = assert_send(repository.write_account_association(device)).await;
    let _deleted: Result<(), _> =
        assert_send(repository.delete_associated_device(AccountKey::random())).await;
    let _devices: Result<(OptInStatus, Vec<SavedDevice>), _> =
        assert_send(repository.get_user_saved_devices()).await;
}

async fn check_broker_apis(
    broker: &PairerBroker,
    device: FastPairDevice,
    connection: Arc<dyn GattConnection>,
    classic: Arc<dyn ClassicPairing>,
    repository: Arc<dyn Repository>,
) {
    assert_send(broker.start_pairing(device, connection, classic, repository, None, None)).await;
}

async fn check_scanner_apis(
    event: ScanEvent,
    broker: &PairerBroker,
    repository: &Arc<dyn Repository>,
    platform: &dyn PlatformFactory,
) {
    assert_send(handle_scan_event(event, broker, repository, platform)).await;
}

fn main() {}
