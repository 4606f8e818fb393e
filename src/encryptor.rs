//! Data encryptor: the session key holder used throughout a
//! handshake and pairing attempt.

use crate::crypto::aes::{encrypt_block, AES_BLOCK_BYTE_SIZE};
use crate::crypto::ecdh::{generate_keys_with_ecdh_key_agreement, PUBLIC_KEY_BYTE_SIZE};
use crate::crypto::messages::{parse_decrypt_passkey, parse_decrypt_response, DecryptedPasskey, DecryptedResponse};

/// Holds the 16-byte session key derived for a handshake, and (for
/// initial/retroactive pairing) the Seeker's ephemeral public key that must
/// be sent alongside the key-based pairing request.
#[derive(Clone, PartialEq, Eq)]
pub struct DataEncryptor {
    session_key: [u8; 16],
    public_key: Option<[u8; PUBLIC_KEY_BYTE_SIZE]>,
}

impl std::fmt::Debug for DataEncryptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataEncryptor")
            .field("has_public_key", &self.public_key.is_some())
            .finish()
    }
}

impl DataEncryptor {
    /// Builds an encryptor via ECDH against the Provider's anti-spoofing
    /// public key, for initial or retroactive pairing.
    pub fn from_anti_spoofing_key(anti_spoofing_public_key: &[u8]) -> Option<Self> {
        let keys = generate_keys_with_ecdh_key_agreement(anti_spoofing_public_key)?;
        Some(DataEncryptor {
            session_key: keys.shared_secret_key,
            public_key: Some(keys.public_key),
        })
    }

    /// Builds an encryptor directly from an already-known account key, for
    /// subsequent pairing. The account key itself *is* the session key in
    /// this flow; no public key is sent.
    pub fn from_account_key(session_key: [u8; 16]) -> Self {
        DataEncryptor {
            session_key,
            public_key: None,
        }
    }

    pub fn encrypt(&self, block: &[u8; AES_BLOCK_BYTE_SIZE]) -> [u8; AES_BLOCK_BYTE_SIZE] {
        encrypt_block(&self.session_key, block)
    }

    pub fn session_key(&self) -> &[u8; 16] {
        &self.session_key
    }

    pub fn public_key(&self) -> Option<&[u8; PUBLIC_KEY_BYTE_SIZE]> {
        self.public_key.as_ref()
    }

    pub fn parse_response(&self, bytes: &[u8]) -> Option<DecryptedResponse> {
        let block: &[u8; 16] = bytes.try_into().ok()?;
        parse_decrypt_response(&self.session_key, block)
    }

    pub fn parse_passkey(&self, bytes: &[u8]) -> Option<DecryptedPasskey> {
        let block: &[u8; 16] = bytes.try_into().ok()?;
        parse_decrypt_passkey(&self.session_key, block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_response_rejects_wrong_length() {
        let enc = DataEncryptor::from_account_key([1u8; 16]);
        assert!(enc.parse_response(&[0u8; 15]).is_none());
        assert!(enc.parse_response(&[0u8; 17]).is_none());
    }

    #[test]
    fn parse_passkey_rejects_wrong_length() {
        let enc = DataEncryptor::from_account_key([1u8; 16]);
        assert!(enc.parse_passkey(&[0u8; 15]).is_none());
    }

    #[test]
    fn subsequent_pairing_has_no_public_key() {
        let enc = DataEncryptor::from_account_key([1u8; 16]);
        assert!(enc.public_key().is_none());
    }
}
