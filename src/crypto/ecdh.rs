//! NIST P-256 ECDH key agreement.
//!
//! Grounded in `fastpair/crypto/fast_pair_key_pair.h` and
//! `fast_pair_encryption_test.cc`'s `GenerateKeysWithEcdhKeyAgreement` cases.

use p256::ecdh::EphemeralSecret;
use p256::elliptic_curve::sec1::FromEncodedPoint;
use p256::{AffinePoint, EncodedPoint, PublicKey};
use sha2::{Digest, Sha256};

pub const SHARED_SECRET_KEY_BYTE_SIZE: usize = 16;
pub const PUBLIC_KEY_BYTE_SIZE: usize = 64;

/// The derived session key plus the Seeker's own ephemeral public key.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub shared_secret_key: [u8; SHARED_SECRET_KEY_BYTE_SIZE],
    pub public_key: [u8; PUBLIC_KEY_BYTE_SIZE],
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("shared_secret_key", &hex::encode(self.shared_secret_key))
            .field("public_key", &hex::encode(self.public_key))
            .finish()
    }
}

/// Generates an ephemeral P-256 keypair, performs ECDH against the
/// Provider's anti-spoofing public key, and derives a 16-byte session key
/// from the first 16 bytes of `SHA-256(shared_secret)`.
///
/// `anti_spoofing_public_key` must be the 64-byte uncompressed point (two
/// 32-byte big-endian coordinates, no `0x04` prefix) as published in device
/// metadata. Returns `None` if the input isn't 64 bytes or isn't a valid
/// point on the curve.
pub fn generate_keys_with_ecdh_key_agreement(anti_spoofing_public_key: &[u8]) -> Option<KeyPair> {
    if anti_spoofing_public_key.len() != PUBLIC_KEY_BYTE_SIZE {
        return None;
    }

    let mut uncompressed = [0u8; 65];
    uncompressed[0] = 0x04;
    uncompressed[1..].copy_from_slice(anti_spoofing_public_key);
    let encoded = EncodedPoint::from_bytes(uncompressed).ok()?;

    let affine = Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))?;
    let provider_public_key = PublicKey::from_affine(affine).ok()?;

    let ephemeral_secret = EphemeralSecret::random(&mut rand::rngs::OsRng);
    let ephemeral_public = ephemeral_secret.public_key();
    let ephemeral_point = ephemeral_public.to_encoded_point(false);
    let ephemeral_bytes = ephemeral_point.as_bytes();
    // ephemeral_bytes is [0x04, x(32), y(32)]; drop the prefix for our 64-byte wire form.
    let mut public_key = [0u8; PUBLIC_KEY_BYTE_SIZE];
    public_key.copy_from_slice(&ephemeral_bytes[1..]);

    let shared_secret = ephemeral_secret.diffie_hellman(&provider_public_key);
    let digest = Sha256::digest(shared_secret.raw_secret_bytes());
    let mut shared_secret_key = [0u8; SHARED_SECRET_KEY_BYTE_SIZE];
    shared_secret_key.copy_from_slice(&digest[..SHARED_SECRET_KEY_BYTE_SIZE]);

    Some(KeyPair {
        shared_secret_key,
        public_key,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;

    fn decode(b64: &str) -> Vec<u8> {
        base64::engine::general_purpose::STANDARD.decode(b64).unwrap()
    }

    #[test]
    fn empty_key_fails() {
        assert!(generate_keys_with_ecdh_key_agreement(&[]).is_none());
    }

    #[test]
    fn short_key_fails() {
        assert!(generate_keys_with_ecdh_key_agreement(b"too_short").is_none());
    }

    #[test]
    fn invalid_key_fails() {
        // One byte off from the valid test vector below (differs in the
        // decoded point, not just base64 padding), so it decodes to 64
        // bytes but isn't a valid curve point.
        let key = decode(
            "U2PWc3FHTxah/o0YT9n1VRvtm57SNIRSXOEBXm4fdtMo+06tNoFlt8D0/\
             2BsN8auolz5ikwLRvQh+MiQ6oYveg==",
        );
        assert!(generate_keys_with_ecdh_key_agreement(&key).is_none());
    }

    #[test]
    fn valid_key_succeeds() {
        let key = decode(
            "U2PWc3FHTxah/o0YU9n1VRvtm57SNIRSXOEBXm4fdtMo+06tNoFlt8D0/\
             2BsN8auolz5ikwLRvQh+MiQ6oYveg==",
        );
        let result = generate_keys_with_ecdh_key_agreement(&key);
        assert!(result.is_some());
        assert_eq!(result.unwrap().shared_secret_key.len(), 16);
    }
}
