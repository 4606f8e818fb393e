//! The remote key-value repository collaborator: account
//! devices, device metadata, and the cloud commit path. An external
//! system; this module only defines the contract and the small amount of
//! arithmetic (the address hash, the forget pattern) that sits at its
//! boundary.

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::account_key::AccountKey;
use crate::address::Address;
use crate::device::FastPairDevice;
use crate::error::Error;

/// Anti-spoofing public key and display metadata for a model id, as
/// returned by `get_device_metadata`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceMetadata {
    pub model_id: String,
    pub display_name: String,
    pub anti_spoofing_public_key: Vec<u8>,
}

/// Whether the signed-in user has opted in to saving devices, paired with
/// whatever the query returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptInStatus {
    OptedIn,
    OptedOut,
}

/// The bit of a saved-device record the core needs: its account key and
/// the server-side hash used to detect the forget pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedDevice {
    pub device: FastPairDevice,
    pub sha256_account_key_public_address: [u8; 32],
}

impl SavedDevice {
    /// A record whose hash begins `F0F0F0F0` is server-side marked for
    /// deletion and must be treated as not-saved regardless of other
    /// fields.
    pub fn is_forgotten(&self) -> bool {
        self.sha256_account_key_public_address[..4] == [0xF0, 0xF0, 0xF0, 0xF0]
    }
}

/// Observer of `get_user_saved_devices`-style pushes. Implementations must
/// tolerate being dropped/deregistered from within a callback.
pub trait Observer: Send + Sync {
    fn on_saved_devices_updated(&self, opt_in_status: OptInStatus, devices: &[SavedDevice]);
}

/// The remote repository contract.
#[async_trait]
pub trait Repository: Send + Sync {
    /// Registers an observer for `get_user_saved_devices`-style pushes.
    /// Implementations that only support the pull form of that call may
    /// leave this a no-op.
    async fn add_observer(&self, _observer: std::sync::Arc<dyn Observer>) {}

    async fn get_device_metadata(&self, hex_model_id: &str) -> Result<Option<DeviceMetadata>, Error>;

    /// Checks a Bloom filter match against the signed-in user's saved
    /// devices, returning the matched account key and model id if any.
    async fn check_if_associated_with_current_account(
        &self,
        filter: &crate::bloom::AccountKeyFilter,
        salt: &[u8],
    ) -> Result<Option<(AccountKey, String)>, Error>;

    async fn is_device_saved_to_account(&self, public_address: Address) -> Result<bool, Error>;

    async fn write_account_association(&self, device: &FastPairDevice) -> Result<(), Error>;

    async fn delete_associated_device(&self, account_key: AccountKey) -> Result<(), Error>;

    async fn get_user_saved_devices(&self) -> Result<(OptInStatus, Vec<SavedDevice>), Error>;
}

/// SHA-256 of `account_key || public_address` (6 bytes), used to index a
/// device on the server and to compute the forget-pattern hash.
pub fn sha256_of_account_key_and_address(account_key: &AccountKey, public_address: Address) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(account_key.as_bytes());
    hasher.update(public_address.as_bytes());
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forget_pattern_detected() {
        let mut hash = [0u8; 32];
        hash[..4].copy_from_slice(&[0xF0, 0xF0, 0xF0, 0xF0]);
        let record = SavedDevice {
            device: FastPairDevice::new(
                "abc123".into(),
                Address::from_bytes([0; 6]),
                crate::device::Protocol::SubsequentPairing,
            ),
            sha256_account_key_public_address: hash,
        };
        assert!(record.is_forgotten());
    }

    #[test]
    fn ordinary_hash_not_forgotten() {
        let record = SavedDevice {
            device: FastPairDevice::new(
                "abc123".into(),
                Address::from_bytes([0; 6]),
                crate::device::Protocol::SubsequentPairing,
            ),
            sha256_account_key_public_address: [1u8; 32],
        };
        assert!(!record.is_forgotten());
    }

    #[test]
    fn hash_is_deterministic() {
        let key = AccountKey::from_bytes([1u8; 16]);
        let addr = Address::from_bytes([2u8; 6]);
        assert_eq!(
            sha256_of_account_key_and_address(&key, addr),
            sha256_of_account_key_and_address(&key, addr)
        );
    }
}
