//! Error types.
//!
//! `PairFailure` is the closed taxonomy a pairing attempt can end in; every
//! fallible operation in the handshake and pairing state machines returns
//! one of its variants. `Error`/`ErrorKind` is for everything else
//! (configuration, repository access) that isn't itself a pairing failure.

/// The closed set of ways a Fast Pair handshake or pairing attempt can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, displaydoc::Display)]
#[non_exhaustive]
pub enum PairFailure {
    /// GATT connection could not be established
    CreateGattConnection,
    /// GATT service discovery timed out
    GattServiceDiscoveryTimeout,
    /// key-based pairing characteristic could not be discovered
    KeyBasedPairingCharacteristicDiscovery,
    /// passkey characteristic could not be discovered
    PasskeyCharacteristicDiscovery,
    /// account key characteristic could not be discovered
    AccountKeyCharacteristicDiscovery,
    /// subscribing to the key-based pairing characteristic timed out
    KeyBasedPairingCharacteristicSubscriptionTimeout,
    /// subscribing to the passkey characteristic timed out
    PasskeyCharacteristicSubscriptionTimeout,
    /// writing the key-based pairing characteristic timed out or failed
    KeyBasedPairingCharacteristicWrite,
    /// writing the passkey characteristic timed out or failed
    PasskeyCharacteristicWrite,
    /// writing the account key characteristic timed out or failed
    AccountKeyCharacteristicWrite,
    /// waiting for the key-based pairing response timed out
    KeyBasedPairingResponseTimeout,
    /// waiting for the passkey response timed out
    PasskeyResponseTimeout,
    /// the key-based pairing response could not be decrypted or had the wrong message type
    KeyBasedPairingResponseDecrypt,
    /// the passkey response could not be decrypted or had the wrong message type
    PasskeyResponseDecrypt,
    /// the seeker and provider passkeys did not match
    PasskeyMismatch,
    /// the device was lost (no handshake entry) mid-pairing
    DeviceLost,
    /// classic Bluetooth pairing failed
    PairingFailed,
    /// the initiate-pairing deadline elapsed
    PairingTimeout,
    /// pairing was cancelled
    PairingCancelled,
    /// writing the account association to the cloud repository failed
    WriteAccountKeyToFootprints,
    /// no handshake or public address available to pair against
    NoHandshakeForDevice,
}

impl std::error::Error for PairFailure {}

/// An error not covered by the pairing-failure taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", &self.kind)
        } else {
            write!(f, "{}: {}", &self.kind, &self.message)
        }
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Clone, PartialEq, Eq, Hash, displaydoc::Display)]
#[non_exhaustive]
pub enum ErrorKind {
    /// invalid account key (must be 16 bytes)
    InvalidAccountKey,
    /// invalid anti-spoofing public key
    InvalidPublicKey,
    /// invalid or unparseable advertisement
    InvalidAdvertisement,
    /// invalid Bluetooth address
    InvalidAddress,
    /// repository operation failed
    RepositoryError,
    /// no metadata available for this model id
    MetadataNotFound,
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error {
            kind,
            message: String::new(),
        }
    }
}

/// Convenience alias for a result with [`PairFailure`].
pub type PairResult<T> = core::result::Result<T, PairFailure>;

/// Convenience alias for a result with [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;
