//! The non-discoverable advertisement parser.
//!
//! Grounded in `fastpair/common/non_discoverable_advertisement.h`.
//! Field `TYPE` nibble values: `0`
//! account-key filter, `1` salt, `3` battery show-UI, `4` battery hide-UI
//! (the battery type values are `BatteryNotification::Type::kShowUi`/
//! `kHideUi` from `battery_notification.h`, reused directly as the TLV
//! type). Unknown types are skipped, not rejected, so the format can grow
//! fields this parser doesn't yet know.

use crate::battery::{BatteryNotification, BatteryUiType};

const TYPE_ACCOUNT_KEY_FILTER: u8 = 0;
const TYPE_SALT: u8 = 1;
const TYPE_BATTERY_SHOW_UI: u8 = 3;
const TYPE_BATTERY_HIDE_UI: u8 = 4;

/// Show/hide-UI intent carried in the header nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonDiscoverableType {
    ShowUi,
    HideUi,
}

/// A parsed non-discoverable advertisement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonDiscoverableAdvertisement {
    pub account_key_filter: Vec<u8>,
    pub ui_type: NonDiscoverableType,
    pub salt: Vec<u8>,
    pub battery: Option<(BatteryUiType, BatteryNotification)>,
}

/// Parses a non-discoverable advertisement. `seeker_address_fallback` is
/// used as the salt when the advertisement omits a salt field (it must be
/// the 6-byte Seeker BLE address).
pub fn parse_non_discoverable(
    bytes: &[u8],
    seeker_address_fallback: &[u8; 6],
) -> Option<NonDiscoverableAdvertisement> {
    if bytes.is_empty() {
        return None;
    }

    let ui_type = match bytes[0] & 0xF0 {
        0b0000_0000 => NonDiscoverableType::ShowUi,
        0b0010_0000 => NonDiscoverableType::HideUi,
        _ => return None,
    };

    let mut account_key_filter: Option<Vec<u8>> = None;
    let mut salt: Option<Vec<u8>> = None;
    let mut battery: Option<(BatteryUiType, BatteryNotification)> = None;

    let mut cursor = 1usize;
    while cursor < bytes.len() {
        let field_byte = bytes[cursor];
        cursor += 1;
        let len = (field_byte >> 4) as usize;
        let ty = field_byte & 0x0F;
        if len == 0 {
            return None;
        }
        if bytes.len() < cursor + len {
            return None;
        }
        let value = &bytes[cursor..cursor + len];
        cursor += len;

        match ty {
            TYPE_ACCOUNT_KEY_FILTER => {
                if account_key_filter.is_some() {
                    return None;
                }
                account_key_filter = Some(value.to_vec());
            }
            TYPE_SALT => {
                if len != 1 && len != 2 {
                    return None;
                }
                salt = Some(value.to_vec());
            }
            TYPE_BATTERY_SHOW_UI | TYPE_BATTERY_HIDE_UI => {
                if len != 1 && len != 3 {
                    return None;
                }
                let notif = BatteryNotification::from_bytes(value)?;
                let battery_ui = if ty == TYPE_BATTERY_SHOW_UI {
                    BatteryUiType::ShowUi
                } else {
                    BatteryUiType::HideUi
                };
                battery = Some((battery_ui, notif));
            }
            _ => {
                tracing::debug!(ty, len, "ignoring unknown non-discoverable TLV field type");
            }
        }
    }

    let account_key_filter = account_key_filter?;
    let salt = salt.unwrap_or_else(|| seeker_address_fallback.to_vec());

    Some(NonDiscoverableAdvertisement {
        account_key_filter,
        ui_type,
        salt,
        battery,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_account_key_salt_and_battery_tlvs() {
        let mut bytes = vec![0x06u8];
        bytes.push(0x60);
        bytes.extend_from_slice(&[0x11, 0x22, 0x33, 0x44, 0x55, 0x66]);
        bytes.push(0x11);
        bytes.push(0x01);
        bytes.push(0x33);
        bytes.extend_from_slice(&[0x01, 0x04, 0x8F]);

        let fallback = [0u8; 6];
        let parsed = parse_non_discoverable(&bytes, &fallback).unwrap();
        assert_eq!(parsed.ui_type, NonDiscoverableType::ShowUi);
        assert_eq!(parsed.salt, vec![0x01]);
        assert_eq!(
            parsed.account_key_filter,
            vec![0x11, 0x22, 0x33, 0x44, 0x55, 0x66]
        );
        let (battery_ui, notif) = parsed.battery.unwrap();
        assert_eq!(battery_ui, BatteryUiType::ShowUi);
        assert!(matches!(notif, BatteryNotification::Tws { .. }));
    }

    #[test]
    fn missing_salt_uses_seeker_address_fallback() {
        let mut bytes = vec![0x00u8];
        bytes.push(0x60);
        bytes.extend_from_slice(&[1, 2, 3, 4, 5, 6]);
        let fallback = [0xAA; 6];
        let parsed = parse_non_discoverable(&bytes, &fallback).unwrap();
        assert_eq!(parsed.salt, fallback.to_vec());
    }

    #[test]
    fn requires_exactly_one_account_key_filter() {
        let bytes = vec![0x00u8, 0x11, 0x01];
        assert!(parse_non_discoverable(&bytes, &[0; 6]).is_none());
    }

    #[test]
    fn rejects_unsupported_header_nibble() {
        let bytes = vec![0x40u8, 0x60, 1, 2, 3, 4, 5, 6];
        assert!(parse_non_discoverable(&bytes, &[0; 6]).is_none());
    }

    #[test]
    fn rejects_zero_length_field() {
        let bytes = vec![0x00u8, 0x00];
        assert!(parse_non_discoverable(&bytes, &[0; 6]).is_none());
    }

    #[test]
    fn rejects_field_declaring_more_than_remaining() {
        let bytes = vec![0x00u8, 0xF0];
        assert!(parse_non_discoverable(&bytes, &[0; 6]).is_none());
    }
}
