//! Cryptographic primitives: ECDH key agreement, AES-128-ECB block
//! encryption, and the two decrypted-message shapes the handshake parses.

pub mod aes;
pub mod ecdh;
pub mod messages;

pub use aes::encrypt_block;
pub use ecdh::{generate_keys_with_ecdh_key_agreement, KeyPair};
pub use messages::{DecryptedPasskey, DecryptedResponse, MessageType};
