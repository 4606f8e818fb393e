//! Fast Pair GATT service and characteristic UUIDs.
//!
//! Grounded in `fastpair/common/constant.h`. Each characteristic has a
//! legacy 16-bit (v1) form and a full 128-bit (v2) form; the client must
//! prefer v2 and fall back to v1.

use uuid::Uuid;

use crate::btuuid::BluetoothUuidExt;

pub const FAST_PAIR_SERVICE_UUID: u16 = 0xFE2C;

pub fn fast_pair_service_uuid() -> Uuid {
    Uuid::from_u16(FAST_PAIR_SERVICE_UUID)
}

/// The three Fast Pair GATT characteristics, in both their v1 and v2 forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FastPairCharacteristic {
    KeyBasedPairing,
    Passkey,
    AccountKey,
}

impl FastPairCharacteristic {
    pub fn v1_uuid(self) -> Uuid {
        Uuid::from_u16(match self {
            FastPairCharacteristic::KeyBasedPairing => 0x1234,
            FastPairCharacteristic::Passkey => 0x1235,
            FastPairCharacteristic::AccountKey => 0x1236,
        })
    }

    pub fn v2_uuid(self) -> Uuid {
        let s = match self {
            FastPairCharacteristic::KeyBasedPairing => "FE2C1234-8366-4814-8EB0-01DE32100BEA",
            FastPairCharacteristic::Passkey => "FE2C1235-8366-4814-8EB0-01DE32100BEA",
            FastPairCharacteristic::AccountKey => "FE2C1236-8366-4814-8EB0-01DE32100BEA",
        };
        Uuid::parse_str(s).expect("constant UUID string is valid")
    }

    /// Both forms, v2 first: the client prefers v2 and falls back to v1.
    pub fn candidates(self) -> [Uuid; 2] {
        [self.v2_uuid(), self.v1_uuid()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_uuid_matches_16_bit_form() {
        assert_eq!(fast_pair_service_uuid().to_string()[4..8].to_uppercase(), "FE2C");
    }

    #[test]
    fn v2_preferred_before_v1() {
        let candidates = FastPairCharacteristic::KeyBasedPairing.candidates();
        assert_eq!(candidates[0], FastPairCharacteristic::KeyBasedPairing.v2_uuid());
        assert_eq!(candidates[1], FastPairCharacteristic::KeyBasedPairing.v1_uuid());
    }
}
