//! External collaborators: the platform BLE stack and the
//! classic-pairing agent. Both are specified purely by operation set; the
//! core treats them as opaque objects referenced by the caller.
//!
//! Modeled the way the host crate models its own platform boundary
//! (`pairing::PairingAgent`): a `Send + Sync` async trait the application
//! provides an implementation of, rather than a concrete platform binding.

use async_trait::async_trait;
use futures_core::Stream;
use std::pin::Pin;

use crate::address::Address;
use crate::error::PairFailure;
use crate::pairing::Passkey;

pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = T> + Send + 'a>>;

/// A single GATT characteristic on the Provider, as exposed by the platform
/// BLE stack. One instance per (characteristic, connection).
#[async_trait]
pub trait GattCharacteristic: Send + Sync {
    /// Subscribes to notifications, returning a stream of raw notification
    /// payloads.
    async fn subscribe(&self) -> Result<BoxStream<'static, Vec<u8>>, PairFailure>;

    /// Writes `value` with "write with response" semantics.
    async fn write(&self, value: &[u8]) -> Result<(), PairFailure>;
}

/// A GATT connection to a single Provider, as exposed by the platform BLE
/// stack.
#[async_trait]
pub trait GattConnection: Send + Sync {
    /// Establishes (or re-establishes) the underlying connection.
    async fn connect(&self) -> Result<(), PairFailure>;

    /// Tears down the connection. Called between GATT-connect retry
    /// attempts and whenever the handshake or pairer is done with it.
    async fn disconnect(&self);

    /// Discovers the Fast Pair service and resolves `uuid`  to a
    /// characteristic, trying each candidate UUID (v2 first, then v1) in
    /// order and returning the first that resolves.
    async fn discover_characteristic(
        &self,
        candidates: &[uuid::Uuid],
    ) -> Result<Box<dyn GattCharacteristic>, PairFailure>;
}

/// What the platform is asking the Seeker to do during classic pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairingRequest {
    /// A bare yes/no confirmation, no passkey involved.
    Confirmation,
    /// The platform displayed `passkey`; the Seeker must confirm it matches
    /// what the Provider reports over GATT.
    PasskeyConfirmation { passkey: Passkey },
}

/// Events delivered while a classic pairing attempt is in flight: pairing
/// completed, pairing failed, or the platform is asking the Seeker to
/// confirm or supply a passkey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairingEvent {
    Paired,
    Error(PairFailure),
    Initiated(PairingRequest),
}

/// The classic (BR/EDR) pairing collaborator for a single public address.
#[async_trait]
pub trait ClassicPairing: Send + Sync {
    fn address(&self) -> Address;

    async fn is_paired(&self) -> bool;

    async fn unpair(&self);

    /// Begins pairing, returning a stream of [`PairingEvent`]s.
    async fn initiate_pairing(&self) -> Result<BoxStream<'static, PairingEvent>, PairFailure>;

    async fn cancel_pairing(&self);

    /// Resolves a pending confirmation/passkey-confirmation request.
    /// `passkey` confirms a `PasskeyConfirmation` request with the value the
    /// Seeker verified; `None` accepts a bare `Confirmation` or rejects
    /// outright.
    async fn finish_pairing(&self, passkey: Option<Passkey>) -> Result<(), PairFailure>;
}

/// A scan event surfaced by the platform scanner: a Provider candidate
/// found or lost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    Found {
        ble_address: Address,
        service_data: Vec<u8>,
    },
    Lost {
        ble_address: Address,
    },
}
