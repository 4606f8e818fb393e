//! The process-wide handshake registry: create-or-reuse keyed
//! by BLE address or public address, guarded by a single lock.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::address::Address;
use crate::handshake::driver::Handshake;

/// A key a caller may look an entry up or erase it by. A handshake is
/// reachable by its BLE address from the moment it's created, and by its
/// public address once it completes successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandshakeKey {
    Ble(Address),
    Public(Address),
}

struct Entry {
    ble_address: Address,
    public_address: Option<Address>,
    handshake: Arc<Handshake>,
}

/// The registry. Cheap to clone; the inner map is reference-counted.
#[derive(Clone, Default)]
pub struct HandshakeCache {
    inner: Arc<Mutex<HashMap<Address, Entry>>>,
}

impl HandshakeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the handshake for `ble_address` if one exists and completed
    /// successfully. A handshake that exists but didn't complete is evicted
    /// so the caller can create a fresh one.
    pub async fn get_or_evict(&self, ble_address: Address) -> Option<Arc<Handshake>> {
        let mut map = self.inner.lock().await;
        match map.get(&ble_address) {
            Some(entry) if entry.handshake.completed_successfully() => {
                Some(Arc::clone(&entry.handshake))
            }
            Some(_) => {
                map.remove(&ble_address);
                None
            }
            None => None,
        }
    }

    /// Returns the handshake registered under `public_address`, if its
    /// handshake has completed successfully. Mirrors [`get_or_evict`] but
    /// looks the entry up by the Provider's public address rather than its
    /// BLE address, for callers (subsequent pairing) that only learn the
    /// former.
    ///
    /// [`get_or_evict`]: Self::get_or_evict
    pub async fn get_by_public_address(&self, public_address: Address) -> Option<Arc<Handshake>> {
        let map = self.inner.lock().await;
        map.values()
            .find(|entry| entry.public_address == Some(public_address))
            .filter(|entry| entry.handshake.completed_successfully())
            .map(|entry| Arc::clone(&entry.handshake))
    }

    /// Inserts a newly completed handshake, indexed by both its BLE address
    /// and (once known) its resolved public address.
    pub async fn insert(&self, ble_address: Address, handshake: Arc<Handshake>) {
        let public_address = Some(handshake.public_address);
        let mut map = self.inner.lock().await;
        map.insert(
            ble_address,
            Entry {
                ble_address,
                public_address,
                handshake,
            },
        );
    }

    /// Erases the entry matching `key`, by whichever identifier it names.
    pub async fn erase(&self, key: HandshakeKey) {
        let mut map = self.inner.lock().await;
        let found = match key {
            HandshakeKey::Ble(addr) => map.contains_key(&addr).then_some(addr),
            HandshakeKey::Public(addr) => map
                .iter()
                .find(|(_, e)| e.public_address == Some(addr))
                .map(|(k, _)| *k),
        };
        if let Some(k) = found {
            map.remove(&k);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::Protocol;
    use crate::encryptor::DataEncryptor;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn fake_handshake(public_address: Address) -> Arc<Handshake> {
        struct NoopConn;
        #[async_trait::async_trait]
        impl crate::platform::GattConnection for NoopConn {
            async fn connect(&self) -> Result<(), crate::error::PairFailure> {
                Ok(())
            }
            async fn disconnect(&self) {}
            async fn discover_characteristic(
                &self,
                _candidates: &[uuid::Uuid],
            ) -> Result<Box<dyn crate::platform::GattCharacteristic>, crate::error::PairFailure>
            {
                unreachable!()
            }
        }
        let _ = Protocol::InitialPairing;
        let _ = AtomicBool::new(false);
        Arc::new(Handshake {
            connection: Arc::new(NoopConn),
            encryptor: DataEncryptor::from_account_key([0u8; 16]),
            public_address,
            completed_successfully: true,
        })
    }

    #[tokio::test]
    async fn reuses_completed_handshake() {
        let cache = HandshakeCache::new();
        let ble = Address::from_bytes([1, 2, 3, 4, 5, 6]);
        let public = Address::from_bytes([9, 9, 9, 9, 9, 9]);
        cache.insert(ble, fake_handshake(public)).await;
        assert!(cache.get_or_evict(ble).await.is_some());
    }

    #[tokio::test]
    async fn looks_up_by_public_address() {
        let cache = HandshakeCache::new();
        let ble = Address::from_bytes([1, 2, 3, 4, 5, 6]);
        let public = Address::from_bytes([9, 9, 9, 9, 9, 9]);
        cache.insert(ble, fake_handshake(public)).await;
        assert!(cache.get_by_public_address(public).await.is_some());
        assert!(cache.get_by_public_address(ble).await.is_none());
    }

    #[tokio::test]
    async fn erase_by_public_address() {
        let cache = HandshakeCache::new();
        let ble = Address::from_bytes([1, 2, 3, 4, 5, 6]);
        let public = Address::from_bytes([9, 9, 9, 9, 9, 9]);
        cache.insert(ble, fake_handshake(public)).await;
        cache.erase(HandshakeKey::Public(public)).await;
        assert!(cache.get_or_evict(ble).await.is_none());
    }
}
