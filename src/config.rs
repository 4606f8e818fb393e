//! Tunable timeouts and retry budgets.
//!
//! Nothing here is read from global/environment state, so tests can
//! exercise the state machines without real-time waits by overriding a
//! config.

use std::time::Duration;

/// Seeker-wide timing and retry configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeekerConfig {
    /// Timeout for each individual GATT step: connect, discovery, subscribe,
    /// write, response. 15s.
    pub gatt_step_timeout: Duration,
    /// Deadline for the whole classic-pairing sequence once initiated. 20s.
    pub pairing_timeout: Duration,
    /// Delay the broker waits before retrying a failed handshake or pair
    /// attempt. 1s.
    pub retry_delay: Duration,
    /// Maximum GATT connect attempts before giving up. 3.
    pub max_gatt_connect_attempts: u32,
    /// Maximum service-discovery timeout retries (same attempt budget as
    /// GATT connect). 3.
    pub max_service_discovery_attempts: u32,
    /// Maximum broker-level handshake attempts. 3.
    pub max_handshake_attempts: u32,
    /// Maximum broker-level pair attempts. 3.
    pub max_pair_attempts: u32,
}

impl Default for SeekerConfig {
    fn default() -> Self {
        SeekerConfig {
            gatt_step_timeout: Duration::from_secs(15),
            pairing_timeout: Duration::from_secs(20),
            retry_delay: Duration::from_secs(1),
            max_gatt_connect_attempts: 3,
            max_service_discovery_attempts: 3,
            max_handshake_attempts: 3,
            max_pair_attempts: 3,
        }
    }
}
