//! Decrypted message shapes and the message-type tag byte.
//!
//! Grounded in `fastpair/crypto/decrypted_response.h`,
//! `decrypted_passkey.h`, and `fast_pair_message_type.h`.

use super::aes::{decrypt_block, AES_BLOCK_BYTE_SIZE};

/// The message-type tag carried in byte 0 of every decrypted block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum MessageType {
    KeyBasedPairingRequest,
    KeyBasedPairingResponse,
    SeekersPasskey,
    ProvidersPasskey,
}

impl MessageType {
    pub fn tag(self) -> u8 {
        match self {
            MessageType::KeyBasedPairingRequest => 0x04,
            MessageType::KeyBasedPairingResponse => 0x01,
            MessageType::SeekersPasskey => 0x02,
            MessageType::ProvidersPasskey => 0x03,
        }
    }

    fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0x01 => Some(MessageType::KeyBasedPairingResponse),
            0x02 => Some(MessageType::SeekersPasskey),
            0x03 => Some(MessageType::ProvidersPasskey),
            0x04 => Some(MessageType::KeyBasedPairingRequest),
            _ => None,
        }
    }
}

/// The decrypted key-based pairing response: the Provider's classic public
/// address plus the salt it used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecryptedResponse {
    pub message_type: MessageType,
    pub address_bytes: [u8; 6],
    pub salt: [u8; 9],
}

/// Decrypts a 16-byte key-based pairing response and parses it. Fails
/// unless the decrypted message type tag is `0x01`.
pub fn parse_decrypt_response(
    aes_key_bytes: &[u8; 16],
    encrypted_response_bytes: &[u8; AES_BLOCK_BYTE_SIZE],
) -> Option<DecryptedResponse> {
    let plaintext = decrypt_block(aes_key_bytes, encrypted_response_bytes);
    if plaintext[0] != MessageType::KeyBasedPairingResponse.tag() {
        return None;
    }
    let mut address_bytes = [0u8; 6];
    address_bytes.copy_from_slice(&plaintext[1..7]);
    let mut salt = [0u8; 9];
    salt.copy_from_slice(&plaintext[7..16]);
    Some(DecryptedResponse {
        message_type: MessageType::KeyBasedPairingResponse,
        address_bytes,
        salt,
    })
}

/// The decrypted passkey block: either the seeker's own passkey, the
/// provider's passkey, or (on the key-based characteristic) a pairing
/// request, plus the salt used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecryptedPasskey {
    pub message_type: MessageType,
    pub passkey: u32,
    pub salt: [u8; 12],
}

/// Decrypts a 16-byte passkey block and parses it. Fails unless the
/// decrypted message type tag is `0x02`, `0x03`, or `0x04`.
pub fn parse_decrypt_passkey(
    aes_key_bytes: &[u8; 16],
    encrypted_passkey_bytes: &[u8; AES_BLOCK_BYTE_SIZE],
) -> Option<DecryptedPasskey> {
    let plaintext = decrypt_block(aes_key_bytes, encrypted_passkey_bytes);
    let message_type = MessageType::from_tag(plaintext[0]).filter(|mt| {
        matches!(
            mt,
            MessageType::SeekersPasskey | MessageType::ProvidersPasskey | MessageType::KeyBasedPairingRequest
        )
    })?;
    let passkey = u32::from_be_bytes([0, plaintext[1], plaintext[2], plaintext[3]]);
    let mut salt = [0u8; 12];
    salt.copy_from_slice(&plaintext[4..16]);
    Some(DecryptedPasskey {
        message_type,
        passkey,
        salt,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::aes::encrypt_block;

    #[test]
    fn response_round_trip_requires_tag_0x01() {
        let key = [7u8; 16];
        for (tag, expect_some) in [(0x01u8, true), (0x02, false), (0x00, false)] {
            let mut plaintext = [0u8; 16];
            plaintext[0] = tag;
            plaintext[1..7].copy_from_slice(&[0xBA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
            let ciphertext = encrypt_block(&key, &plaintext);
            let parsed = parse_decrypt_response(&key, &ciphertext);
            assert_eq!(parsed.is_some(), expect_some);
            if expect_some {
                let parsed = parsed.unwrap();
                assert_eq!(parsed.address_bytes, [0xBA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
            }
        }
    }

    #[test]
    fn passkey_round_trip_requires_valid_tag() {
        let key = [9u8; 16];
        for (tag, expect_some) in [(0x02u8, true), (0x03, true), (0x04, true), (0x01, false)] {
            let mut plaintext = [0u8; 16];
            plaintext[0] = tag;
            plaintext[1..4].copy_from_slice(&[0x00, 0x54, 0x21]); // 21537 big-endian 24-bit
            let ciphertext = encrypt_block(&key, &plaintext);
            let parsed = parse_decrypt_passkey(&key, &ciphertext);
            assert_eq!(parsed.is_some(), expect_some);
            if expect_some {
                assert_eq!(parsed.unwrap().passkey, 0x005421);
            }
        }
    }
}
