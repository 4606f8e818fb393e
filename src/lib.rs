//! A Seeker-side implementation of Google's Fast Pair protocol: scanning
//! for and pairing with Fast Pair Providers over Bluetooth Low Energy,
//! then handing classic pairing and account-key provisioning off to the
//! platform.
//!
//! This crate does not talk to a Bluetooth adapter itself. It expects a
//! host application to feed it scan events and to supply GATT and
//! classic-pairing collaborators (see [`platform`]) for whatever BLE stack
//! the host runs on; in exchange it owns the protocol state machine:
//! advertisement parsing, the account-key Bloom filter, the encrypted GATT
//! handshake, passkey confirmation, and account-key provisioning to both
//! the paired device and a cloud [`repository::Repository`].
//!
//! # Overview
//!
//! A scan event reaches [`scanner::handle_scan_event`], which parses the
//! Fast Pair service data ([`advertisement`]) and, for a match, builds a
//! [`device::FastPairDevice`] and hands it to a [`pairing::PairerBroker`].
//! The broker runs the encrypted handshake ([`handshake`], [`gatt`]) and
//! then classic pairing ([`pairing::pairer::Pairer`]), retrying each stage
//! up to its configured attempt budget before giving up and notifying
//! observers.
//!
//! Everything above is expected to run on a single cooperative task; see
//! [`executor`] for the channel-based driver that marshals platform-thread
//! callbacks onto it.
//!
//! # Feature flags
//!
//! - `serde`: derives [`serde::Serialize`] and [`serde::Deserialize`] for
//!   the wire-adjacent types ([`address::Address`], [`account_key::AccountKey`])
//!   where it is safe to do so.

pub mod account_key;
pub mod address;
pub mod advertisement;
pub mod battery;
pub mod bloom;
pub mod btuuid;
pub mod config;
pub mod crypto;
pub mod device;
pub mod encryptor;
pub mod error;
pub mod executor;
pub mod gatt;
pub mod handshake;
pub mod pairing;
pub mod platform;
pub mod repository;
pub mod scanner;

pub use account_key::AccountKey;
pub use address::Address;
pub use btuuid::BluetoothUuidExt;
pub use config::SeekerConfig;
pub use device::{DeviceFastPairVersion, FastPairDevice, Protocol};
pub use error::{Error, PairFailure, PairResult};
pub use executor::{Executor, ExecutorHandle};
pub use pairing::{BrokerEvent, BrokerObserver, PairerBroker};
pub use repository::Repository;
pub use scanner::PlatformFactory;
