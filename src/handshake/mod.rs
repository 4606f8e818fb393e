//! The handshake driver and its process-wide cache.

pub mod cache;
pub mod driver;

pub use cache::{HandshakeCache, HandshakeKey};
pub use driver::{run_handshake, Handshake, HandshakeSecret};
