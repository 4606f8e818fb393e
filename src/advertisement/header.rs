//! The Mediums BLE frame: the envelope exchanged when a Fast Pair socket is
//! set up.
//!
//! Grounded in
//! `connections/implementation/mediums/ble_v2/ble_advertisement.{h,cc}`.

const VERSION_MASK: u8 = 0x0E0;
const SOCKET_VERSION_MASK: u8 = 0x01C;
const FAST_FLAG_MASK: u8 = 0x002;

const SERVICE_ID_HASH_LEN: usize = 3;
const DEVICE_TOKEN_LEN: usize = 2;
const STANDARD_DATA_SIZE_LEN: usize = 4;
const FAST_DATA_SIZE_LEN: usize = 1;
const MIN_STANDARD_LEN: usize = 1 + SERVICE_ID_HASH_LEN + STANDARD_DATA_SIZE_LEN;
const MAX_STANDARD_LEN: usize = 512;
const MIN_FAST_LEN: usize = 1 + FAST_DATA_SIZE_LEN;
const MAX_FAST_LEN: usize = 27;

const PSM_FIELD_MASK: u8 = 0x01;
const PSM_VALUE_LEN: usize = 2;

/// Supported advertisement wire versions. Only 1 and 2 exist on the wire
/// (3 bits are reserved for up to 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireVersion {
    V1 = 1,
    V2 = 2,
}

impl WireVersion {
    fn from_u8(v: u8) -> Option<Self> {
        match v {
            1 => Some(WireVersion::V1),
            2 => Some(WireVersion::V2),
            _ => None,
        }
    }
}

/// A Mediums BLE advertisement. Construction through [`MediumsBleAdvertisement::new`]
/// validates every invariant in; an invalid instance fails
/// [`is_valid`][Self::is_valid] and must not be serialized or otherwise used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediumsBleAdvertisement {
    version: WireVersion,
    socket_version: WireVersion,
    fast_advertisement: bool,
    service_id_hash: Vec<u8>,
    data: Vec<u8>,
    device_token: Vec<u8>,
    psm: Option<u16>,
    valid: bool,
}

impl MediumsBleAdvertisement {
    /// Builds and validates a new advertisement. `service_id_hash` being
    /// empty selects fast-advertisement mode; any other length but 3 is
    /// invalid in standard mode.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        version: u8,
        socket_version: u8,
        service_id_hash: Vec<u8>,
        data: Vec<u8>,
        device_token: Vec<u8>,
        psm: Option<u16>,
    ) -> Self {
        let fast_advertisement = service_id_hash.is_empty();

        let mut valid = true;
        let version = match WireVersion::from_u8(version) {
            Some(v) => v,
            None => {
                valid = false;
                WireVersion::V1
            }
        };
        let socket_version = match WireVersion::from_u8(socket_version) {
            Some(v) => v,
            None => {
                valid = false;
                WireVersion::V1
            }
        };
        if !fast_advertisement && service_id_hash.len() != SERVICE_ID_HASH_LEN {
            valid = false;
        }
        if !device_token.is_empty() && device_token.len() != DEVICE_TOKEN_LEN {
            valid = false;
        }

        let total_len = if fast_advertisement {
            MIN_FAST_LEN + data.len() + device_token.len()
        } else {
            MIN_STANDARD_LEN + data.len() + device_token.len()
        };
        let max_len = if fast_advertisement { MAX_FAST_LEN } else { MAX_STANDARD_LEN };
        if total_len > max_len {
            valid = false;
        }

        MediumsBleAdvertisement {
            version,
            socket_version,
            fast_advertisement,
            service_id_hash,
            data,
            device_token,
            psm,
            valid,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn version(&self) -> WireVersion {
        self.version
    }

    pub fn socket_version(&self) -> WireVersion {
        self.socket_version
    }

    pub fn is_fast_advertisement(&self) -> bool {
        self.fast_advertisement
    }

    pub fn service_id_hash(&self) -> &[u8] {
        &self.service_id_hash
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn device_token(&self) -> &[u8] {
        &self.device_token
    }

    pub fn psm(&self) -> Option<u16> {
        self.psm
    }

    /// Serializes without the extra-fields (PSM) suffix. Returns an empty
    /// vector for an invalid advertisement.
    pub fn to_bytes(&self) -> Vec<u8> {
        if !self.valid {
            return Vec::new();
        }
        let mut out = Vec::new();
        out.push(self.version_byte());
        if !self.fast_advertisement {
            out.extend_from_slice(&self.service_id_hash);
        }
        if self.fast_advertisement {
            out.push(self.data.len() as u8);
        } else {
            out.extend_from_slice(&(self.data.len() as u32).to_be_bytes());
        }
        out.extend_from_slice(&self.data);
        out.extend_from_slice(&self.device_token);
        out
    }

    /// Serializes with the extra-fields suffix appended: a field-mask byte
    /// followed by the 2-byte big-endian PSM, guarded by bit 0 of the mask.
    pub fn to_bytes_with_extra_fields(&self) -> Vec<u8> {
        let mut out = self.to_bytes();
        if self.valid {
            if let Some(psm) = self.psm {
                out.push(PSM_FIELD_MASK);
                out.extend_from_slice(&psm.to_be_bytes());
            }
        }
        out
    }

    fn version_byte(&self) -> u8 {
        let mut byte = ((self.version as u8) << 5) & VERSION_MASK;
        byte |= ((self.socket_version as u8) << 2) & SOCKET_VERSION_MASK;
        byte |= (u8::from(self.fast_advertisement) << 1) & FAST_FLAG_MASK;
        byte
    }

    /// Parses a serialized advertisement (with or without the extra-fields
    /// suffix; device token and extra fields are both optional tails).
    /// Returns an invalid instance (never panics) if any check fails.
    pub fn parse(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return Self::invalid();
        }
        let version_byte = bytes[0];
        // The decoder masks out and tolerates bit 0 (reserved) being set by
        // a peer even though the encoder never writes it.
        let version = WireVersion::from_u8((version_byte & VERSION_MASK) >> 5);
        let socket_version = WireVersion::from_u8((version_byte & SOCKET_VERSION_MASK) >> 2);
        let (version, socket_version) = match (version, socket_version) {
            (Some(v), Some(s)) => (v, s),
            _ => return Self::invalid(),
        };
        let fast_advertisement = (version_byte & FAST_FLAG_MASK) != 0;

        let mut cursor = 1usize;
        let service_id_hash = if fast_advertisement {
            Vec::new()
        } else {
            if bytes.len() < cursor + SERVICE_ID_HASH_LEN {
                return Self::invalid();
            }
            let hash = bytes[cursor..cursor + SERVICE_ID_HASH_LEN].to_vec();
            cursor += SERVICE_ID_HASH_LEN;
            hash
        };

        let data_size = if fast_advertisement {
            if bytes.len() < cursor + FAST_DATA_SIZE_LEN {
                return Self::invalid();
            }
            let size = bytes[cursor] as usize;
            cursor += FAST_DATA_SIZE_LEN;
            size
        } else {
            if bytes.len() < cursor + STANDARD_DATA_SIZE_LEN {
                return Self::invalid();
            }
            let size = u32::from_be_bytes(bytes[cursor..cursor + STANDARD_DATA_SIZE_LEN].try_into().unwrap()) as usize;
            cursor += STANDARD_DATA_SIZE_LEN;
            size
        };

        if bytes.len() < cursor + data_size {
            return Self::invalid();
        }
        let data = bytes[cursor..cursor + data_size].to_vec();
        cursor += data_size;

        // A device token, if any bytes remain at all, must be exactly
        // DEVICE_TOKEN_LEN bytes; a sender that wants the extra-fields tail
        // (PSM) without a real device token must still put a placeholder
        // token in, or its extra fields get consumed as a bogus token.
        let device_token = if bytes.len() >= cursor + DEVICE_TOKEN_LEN {
            let token = bytes[cursor..cursor + DEVICE_TOKEN_LEN].to_vec();
            cursor += DEVICE_TOKEN_LEN;
            token
        } else {
            return MediumsBleAdvertisement::new(version as u8, socket_version as u8, service_id_hash, data, Vec::new(), None);
        };

        let psm = if bytes.len() >= cursor + 1 + PSM_VALUE_LEN {
            let mask = bytes[cursor];
            if mask & PSM_FIELD_MASK != 0 {
                Some(u16::from_be_bytes(
                    bytes[cursor + 1..cursor + 1 + PSM_VALUE_LEN].try_into().unwrap(),
                ))
            } else {
                None
            }
        } else {
            None
        };

        MediumsBleAdvertisement::new(version as u8, socket_version as u8, service_id_hash, data, device_token, psm)
    }

    fn invalid() -> Self {
        MediumsBleAdvertisement {
            version: WireVersion::V1,
            socket_version: WireVersion::V1,
            fast_advertisement: false,
            service_id_hash: Vec::new(),
            data: Vec::new(),
            device_token: Vec::new(),
            psm: None,
            valid: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_standard() {
        let adv = MediumsBleAdvertisement::new(
            2,
            1,
            vec![0xAA, 0xBB, 0xCC],
            vec![1, 2, 3, 4],
            vec![0xDE, 0xAD],
            Some(0x1234),
        );
        assert!(adv.is_valid());
        let bytes = adv.to_bytes_with_extra_fields();
        let parsed = MediumsBleAdvertisement::parse(&bytes);
        assert_eq!(adv, parsed);
    }

    #[test]
    fn round_trip_fast() {
        let adv = MediumsBleAdvertisement::new(1, 2, vec![], vec![9, 9], vec![], None);
        assert!(adv.is_valid());
        let bytes = adv.to_bytes();
        let parsed = MediumsBleAdvertisement::parse(&bytes);
        assert_eq!(adv, parsed);
    }

    #[test]
    fn rejects_wrong_service_id_hash_length() {
        let adv = MediumsBleAdvertisement::new(1, 1, vec![0x01, 0x02], vec![], vec![], None);
        assert!(!adv.is_valid());
    }

    #[test]
    fn rejects_fast_payload_over_max() {
        let adv = MediumsBleAdvertisement::new(1, 1, vec![], vec![0u8; 30], vec![], None);
        assert!(!adv.is_valid());
    }

    #[test]
    fn rejects_unsupported_version() {
        let adv = MediumsBleAdvertisement::new(3, 1, vec![0x01, 0x02, 0x03], vec![], vec![], None);
        assert!(!adv.is_valid());
    }

    #[test]
    fn decoder_tolerates_reserved_bit_set() {
        let adv = MediumsBleAdvertisement::new(2, 1, vec![0xAA, 0xBB, 0xCC], vec![1], vec![], None);
        let mut bytes = adv.to_bytes();
        bytes[0] |= 0x01; // set the reserved bit the encoder never writes
        let parsed = MediumsBleAdvertisement::parse(&bytes);
        assert!(parsed.is_valid());
        assert_eq!(parsed.version(), WireVersion::V2);
    }
}
