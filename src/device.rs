//! The Fast Pair device record.

use crate::account_key::AccountKey;
use crate::address::Address;

/// Which pairing flow this device is going through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// The Seeker has never paired this account key to this Provider before.
    InitialPairing,
    /// The account key was already known (e.g. synced from another device).
    SubsequentPairing,
    /// The Provider was paired out-of-band; only the account-key
    /// association needs to be recorded.
    RetroactivePairing,
}

/// Legacy v1 Providers skip the handshake/account-key machinery entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceFastPairVersion {
    V1,
    /// Grounded in `fastpair/common/fast_pair_device.h`'s `kHigherThanV1`:
    /// anything from v2 onward is handled identically by this crate.
    V2Plus,
}

/// A Fast Pair device record.
///
/// Model id, BLE address, and protocol are fixed at construction; public
/// address, display name, version, and account key are filled in as the
/// handshake and pairing pipeline progresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastPairDevice {
    model_id: String,
    ble_address: Address,
    protocol: Protocol,
    public_address: Option<Address>,
    display_name: Option<String>,
    version: Option<DeviceFastPairVersion>,
    account_key: Option<AccountKey>,
}

impl FastPairDevice {
    pub fn new(model_id: impl Into<String>, ble_address: Address, protocol: Protocol) -> Self {
        FastPairDevice {
            model_id: model_id.into(),
            ble_address,
            protocol,
            public_address: None,
            display_name: None,
            version: None,
            account_key: None,
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn ble_address(&self) -> Address {
        self.ble_address
    }

    /// BLE addresses rotate; this updates the scan-surfaced address without
    /// touching any other field.
    pub fn set_ble_address(&mut self, address: Address) {
        self.ble_address = address;
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn public_address(&self) -> Option<Address> {
        self.public_address
    }

    pub fn set_public_address(&mut self, address: Address) {
        self.public_address = Some(address);
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn set_display_name(&mut self, name: impl Into<String>) {
        self.display_name = Some(name.into());
    }

    pub fn version(&self) -> Option<DeviceFastPairVersion> {
        self.version
    }

    pub fn set_version(&mut self, version: DeviceFastPairVersion) {
        self.version = Some(version);
    }

    pub fn account_key(&self) -> Option<&AccountKey> {
        self.account_key.as_ref()
    }

    pub fn set_account_key(&mut self, key: AccountKey) {
        self.account_key = Some(key);
    }

    /// Legacy v1 devices have no account-key handshake; the Pairer's entry
    /// condition for v1 is that the BLE address already equals the public
    /// address.
    pub fn is_legacy_v1(&self) -> bool {
        matches!(self.version, Some(DeviceFastPairVersion::V1))
            || self.public_address == Some(self.ble_address)
    }
}
