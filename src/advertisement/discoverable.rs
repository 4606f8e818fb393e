//! The discoverable advertisement frame: a bare 3-byte
//! model id carried as GAP service data under the Fast Pair service UUID.

/// The Nearby Share model id, which reuses the Fast Pair service UUID for a
/// different protocol. Payloads carrying it must be filtered out.
pub const RESERVED_NEARBY_SHARE_MODEL_ID: &str = "fc128e";

/// Extracts the hex model id from a discoverable frame's service-data
/// payload: the model id is the last 3 bytes, with any leading bytes (e.g.
/// framing carried by the platform's advertisement plumbing) ignored.
pub fn parse_discoverable(service_data: &[u8]) -> Option<String> {
    if service_data.len() < 3 {
        return None;
    }
    Some(hex::encode(&service_data[service_data.len() - 3..]))
}

/// Whether a model id is the reserved Nearby Share id that must be silently
/// dropped.
pub fn is_reserved_model_id(model_id: &str) -> bool {
    model_id.eq_ignore_ascii_case(RESERVED_NEARBY_SHARE_MODEL_ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_three_byte_model_id() {
        let model_id = parse_discoverable(&[0x71, 0x8C, 0x17]).unwrap();
        assert_eq!(model_id, "718c17");
    }

    #[test]
    fn reserved_nearby_share_model_id_is_flagged() {
        let model_id = parse_discoverable(&[0xFC, 0x12, 0x8E]).unwrap();
        assert!(is_reserved_model_id(&model_id));
    }

    #[test]
    fn too_short_is_none() {
        assert!(parse_discoverable(&[0x01, 0x02]).is_none());
    }

    #[test]
    fn leading_byte_is_ignored() {
        let model_id = parse_discoverable(&[0x06, 0x71, 0x8C, 0x17]).unwrap();
        assert_eq!(model_id, "718c17");
    }
}
