//! Bluetooth classic/BLE address parsing and canonical formatting.
//!
//! Grounded in `internal/base/bluetooth_address.{h,cc}`: accept either a
//! bare 12 hex digit string or a 17-character string with a uniform `:` or
//! `-` separator between byte pairs, and render the canonical uppercase
//! colon-separated form.

use crate::error::{Error, ErrorKind};

/// A 6-byte Bluetooth device address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address([u8; 6]);

impl Address {
    pub fn from_bytes(bytes: [u8; 6]) -> Self {
        Address(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }

    /// Parses either a bare 12-hex-digit string or a 17-character string
    /// with a uniform separator (`:` or `-`) every two hex digits.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let invalid = || Error::from(ErrorKind::InvalidAddress);

        let hex_only: String = if s.len() == 12 {
            s.to_string()
        } else if s.len() == 17 {
            let sep = s.as_bytes()[2];
            if sep != b':' && sep != b'-' {
                return Err(invalid());
            }
            let mut out = String::with_capacity(12);
            for (i, chunk) in s.as_bytes().chunks(3).enumerate() {
                if i == 5 {
                    if chunk.len() != 2 {
                        return Err(invalid());
                    }
                } else {
                    if chunk.len() != 3 || chunk[2] != sep {
                        return Err(invalid());
                    }
                }
                out.push_str(std::str::from_utf8(&chunk[..2]).map_err(|_| invalid())?);
            }
            out
        } else {
            return Err(invalid());
        };

        let raw = hex::decode(&hex_only).map_err(|_| invalid())?;
        let bytes: [u8; 6] = raw.try_into().map_err(|_| invalid())?;
        Ok(Address(bytes))
    }

    /// Renders the canonical uppercase `XX:XX:XX:XX:XX:XX` form.
    pub fn canonical(&self) -> String {
        self.0
            .iter()
            .map(|b| format!("{:02X}", b))
            .collect::<Vec<_>>()
            .join(":")
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl std::fmt::Debug for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Address({})", self.canonical())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_hex() {
        let addr = Address::parse("babbccddeeff").unwrap();
        assert_eq!(addr.canonical(), "BA:BB:CC:DD:EE:FF");
    }

    #[test]
    fn parses_colon_separated() {
        let addr = Address::parse("BA:BB:CC:DD:EE:FF").unwrap();
        assert_eq!(addr.as_bytes(), &[0xBA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
    }

    #[test]
    fn parses_dash_separated() {
        let addr = Address::parse("ba-bb-cc-dd-ee-ff").unwrap();
        assert_eq!(addr.canonical(), "BA:BB:CC:DD:EE:FF");
    }

    #[test]
    fn rejects_mixed_separators() {
        assert!(Address::parse("BA:BB-CC:DD:EE:FF").is_err());
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(Address::parse("BA:BB:CC:DD:EE").is_err());
        assert!(Address::parse("babbccddee").is_err());
    }
}
