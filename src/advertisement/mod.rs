//! BLE advertisement codecs: the discoverable frame, the
//! Mediums BLE envelope, and the non-discoverable TLV stream.

pub mod discoverable;
pub mod header;
pub mod non_discoverable;

pub use discoverable::{is_reserved_model_id, parse_discoverable, RESERVED_NEARBY_SHARE_MODEL_ID};
pub use header::{MediumsBleAdvertisement, WireVersion};
pub use non_discoverable::{parse_non_discoverable, NonDiscoverableAdvertisement, NonDiscoverableType};
