//! The 16-byte Seeker-generated secret stored on a Provider.

use rand::RngCore;

use crate::error::{Error, ErrorKind};

/// A 16-byte Fast Pair account key.
///
/// Created by the Seeker during initial pairing (random), supplied by the
/// repository during subsequent pairing, or derived by the Provider during
/// retroactive pairing.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccountKey([u8; 16]);

impl AccountKey {
    /// Generates a new random account key.
    pub fn random() -> Self {
        let mut bytes = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut bytes);
        AccountKey(bytes)
    }

    /// Generates the random account key written to the account-key
    /// characteristic: byte 0 forced to `0x04`, the rest random. The write
    /// itself and the value returned to the caller are the same bytes.
    pub fn random_for_write() -> Self {
        let mut bytes = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut bytes);
        bytes[0] = 0x04;
        AccountKey(bytes)
    }

    /// Builds an account key from exactly 16 bytes.
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        AccountKey(bytes)
    }

    /// Builds an account key from a byte slice, rejecting any length but 16.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self, Error> {
        let array: [u8; 16] = bytes
            .try_into()
            .map_err(|_| Error::from(ErrorKind::InvalidAccountKey))?;
        Ok(AccountKey(array))
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl std::fmt::Debug for AccountKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AccountKey({})", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_length() {
        assert!(AccountKey::try_from_slice(&[0u8; 15]).is_err());
        assert!(AccountKey::try_from_slice(&[0u8; 17]).is_err());
        assert!(AccountKey::try_from_slice(&[0u8; 16]).is_ok());
    }

    #[test]
    fn random_keys_differ() {
        assert_ne!(AccountKey::random(), AccountKey::random());
    }
}
