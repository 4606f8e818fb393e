//! Classic pairing orchestration: the per-device state machine and the
//! per-model-id broker that multiplexes and retries it.

pub mod agent;
pub mod broker;
pub mod pairer;

pub use agent::{InvalidPasskey, Passkey};
pub use broker::{BrokerEvent, BrokerObserver, PairerBroker};
pub use pairer::{PairerEntry, PostPairOutcome};
