//! Single-block AES-128 encryption.
//!
//! ECB mode is correct here, not a mistake: callers always supply a full
//! block of random salt in the plaintext, so there's no cross-block pattern
//! to leak.

use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::Aes128;

pub const AES_BLOCK_BYTE_SIZE: usize = 16;

/// Encrypts a single 16-byte block with a 16-byte key.
pub fn encrypt_block(key: &[u8; 16], block: &[u8; AES_BLOCK_BYTE_SIZE]) -> [u8; AES_BLOCK_BYTE_SIZE] {
    let cipher = Aes128::new_from_slice(key).expect("key is exactly 16 bytes");
    let mut buf = aes::cipher::generic_array::GenericArray::clone_from_slice(block);
    cipher.encrypt_block(&mut buf);
    let mut out = [0u8; AES_BLOCK_BYTE_SIZE];
    out.copy_from_slice(&buf);
    out
}

/// Decrypts a single 16-byte block with a 16-byte key. The GATT notify
/// payloads from the Provider are decrypted with this before parsing.
pub fn decrypt_block(key: &[u8; 16], block: &[u8; AES_BLOCK_BYTE_SIZE]) -> [u8; AES_BLOCK_BYTE_SIZE] {
    let cipher = Aes128::new_from_slice(key).expect("key is exactly 16 bytes");
    let mut buf = aes::cipher::generic_array::GenericArray::clone_from_slice(block);
    cipher.decrypt_block(&mut buf);
    let mut out = [0u8; AES_BLOCK_BYTE_SIZE];
    out.copy_from_slice(&buf);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encrypt_bytes_success() {
        // known vector from fast_pair_encryption_test.cc
        let key: [u8; 16] = [
            0xA0, 0xBA, 0xF0, 0xBB, 0x95, 0x1F, 0xF7, 0xB6, 0xCF, 0x5E, 0x3F, 0x45, 0x61, 0xC3,
            0x32, 0x1D,
        ];
        let input: [u8; 16] = [
            0xF3, 0x0F, 0x4E, 0x78, 0x6C, 0x59, 0xA7, 0xBB, 0xF3, 0x87, 0x3B, 0x5A, 0x49, 0xBA,
            0x97, 0xEA,
        ];
        let expected: [u8; 16] = [
            0xAC, 0x9A, 0x16, 0xF0, 0x95, 0x3A, 0x3F, 0x22, 0x3D, 0xD1, 0x0C, 0xF5, 0x36, 0xE0,
            0x9E, 0x9C,
        ];
        assert_eq!(encrypt_block(&key, &input), expected);
    }

    #[test]
    fn decrypt_reverses_encrypt() {
        let key: [u8; 16] = [1; 16];
        let input: [u8; 16] = [
            0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D,
            0x0E, 0x0F,
        ];
        let ciphertext = encrypt_block(&key, &input);
        assert_eq!(decrypt_block(&key, &ciphertext), input);
    }
}
