//! The GATT handshake client: connect, discover, and drive the
//! key-based-pairing / passkey / account-key characteristics.

pub mod client;
pub mod uuids;

pub use client::GattHandshakeClient;
pub use uuids::{fast_pair_service_uuid, FastPairCharacteristic, FAST_PAIR_SERVICE_UUID};
