//! Account-key Bloom filter matcher.
//!
//! Grounded in `fastpair/common/account_key_filter.{h,cc}`.

use sha2::{Digest, Sha256};

use crate::account_key::AccountKey;

/// The salt-and-extras suffix hashed alongside an account key, assembled by
/// the caller from the parsed non-discoverable advertisement: salt, then
/// battery-header nibble + battery bytes if present.
pub type FilterSalt<'a> = &'a [u8];

/// A fixed-size Bloom filter over account keys, as broadcast in a
/// non-discoverable advertisement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountKeyFilter {
    bits: Vec<u8>,
}

const SASS_RECENTLY_USED: u8 = 0x05;
const SASS_IN_USE: u8 = 0x06;

impl AccountKeyFilter {
    pub fn from_bytes(bits: Vec<u8>) -> Self {
        AccountKeyFilter { bits }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    /// Tests whether `key` (or a SASS-modified variant of it) is possibly a
    /// member, given `salt`. Checks the unmodified key first, then the
    /// `0x05` ("recently used") and `0x06` ("in use") SASS variants,
    /// short-circuiting on the first match.
    pub fn is_possibly_in_set(&self, key: &AccountKey, salt: FilterSalt<'_>) -> bool {
        if self.test(key.as_bytes(), salt) {
            return true;
        }
        for sass_tag in [SASS_RECENTLY_USED, SASS_IN_USE] {
            let mut variant = *key.as_bytes();
            variant[0] = sass_tag;
            if self.test(&variant, salt) {
                return true;
            }
        }
        false
    }

    /// Adds `key` to the filter (used by tests and by callers constructing
    /// a filter to advertise).
    pub fn add(&mut self, key: &[u8; 16], salt: FilterSalt<'_>) {
        for n in self.bit_positions(key, salt) {
            let byte = n / 8;
            let bit = n % 8;
            if byte < self.bits.len() {
                self.bits[byte] |= 1 << bit;
            }
        }
    }

    fn test(&self, key: &[u8; 16], salt: FilterSalt<'_>) -> bool {
        self.bit_positions(key, salt)
            .all(|n| self.bits.get(n / 8).map(|b| b & (1 << (n % 8)) != 0).unwrap_or(false))
    }

    fn bit_positions(&self, key: &[u8; 16], salt: FilterSalt<'_>) -> impl Iterator<Item = usize> + '_ {
        let mut hasher = Sha256::new();
        hasher.update(key);
        hasher.update(salt);
        let digest = hasher.finalize();
        let total_bits = self.bits.len() * 8;
        digest
            .chunks_exact(4)
            .map(move |chunk| {
                let h = u32::from_be_bytes(chunk.try_into().unwrap());
                (h as usize) % total_bits.max(1)
            })
            .collect::<Vec<_>>()
            .into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vector_matches() {
        let filter = AccountKeyFilter::from_bytes(vec![0x02, 0x0C, 0x80, 0x2A]);
        let salt: [u8; 2] = [0xC7, 0xC8];
        let key = AccountKey::from_bytes([
            0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE,
            0xFF, 0xFF,
        ]);
        assert!(filter.is_possibly_in_set(&key, &salt));
    }

    #[test]
    fn added_keys_are_found() {
        let mut filter = AccountKeyFilter::from_bytes(vec![0u8; 32]);
        let key = AccountKey::random();
        let salt = [1u8, 2, 3];
        filter.add(key.as_bytes(), &salt);
        assert!(filter.is_possibly_in_set(&key, &salt));
    }

    #[test]
    fn sass_variant_matches_original_key() {
        let mut filter = AccountKeyFilter::from_bytes(vec![0u8; 32]);
        let mut sass_variant = [9u8; 16];
        sass_variant[0] = SASS_IN_USE;
        filter.add(&sass_variant, b"salt");

        let original = AccountKey::from_bytes([9u8; 16]);
        assert!(filter.is_possibly_in_set(&original, b"salt"));
    }

    #[test]
    fn unrelated_key_does_not_match() {
        let filter = AccountKeyFilter::from_bytes(vec![0u8; 4]);
        let key = AccountKey::from_bytes([0xAA; 16]);
        assert!(!filter.is_possibly_in_set(&key, b"salt"));
    }
}
