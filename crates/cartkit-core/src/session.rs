//! Cart session: the store wired to its persistence bridge.

use cartkit_kv::KvStore;
use tracing::{debug, warn};

use crate::cart::{CartCommand, CartSnapshot, CartStore};
use crate::error::CartError;
use crate::persist::CartPersistence;

/// A live cart: the reducer plus its persisted mirror.
///
/// Opening a session hydrates the store from storage; every accepted
/// command is followed synchronously by a save, so the slot always
/// mirrors the last committed snapshot. Commands are processed one at
/// a time to completion; rejected commands write nothing.
pub struct CartSession<S: KvStore> {
    store: CartStore,
    persistence: CartPersistence<S>,
}

impl<S: KvStore> CartSession<S> {
    /// Open a session over a storage backend, restoring any previously
    /// persisted cart.
    ///
    /// A slot that cannot be restored (unparseable or invariant
    /// violating) is logged, discarded, and the session starts empty.
    pub fn open(kv_store: S) -> Self {
        let persistence = CartPersistence::new(kv_store);
        let mut store = CartStore::new();

        match persistence.load() {
            Ok(Some(snapshot)) => {
                debug!(items = snapshot.len(), "restored persisted cart");
                store.hydrate(snapshot);
            }
            Ok(None) => debug!("no persisted cart, starting empty"),
            Err(err) => warn!(%err, "discarding persisted cart, starting empty"),
        }

        Self { store, persistence }
    }

    /// Apply one command and mirror the result to storage.
    ///
    /// On acceptance, returns the new snapshot. On rejection, returns
    /// the typed error and neither the snapshot nor the slot changes.
    /// A failed save is logged and swallowed: the in-memory snapshot
    /// stays authoritative for the session and the write is not
    /// retried.
    pub fn dispatch(&mut self, command: CartCommand) -> Result<&CartSnapshot, CartError> {
        debug!(?command, "dispatching cart command");

        match self.store.apply(command) {
            Ok(()) => {
                if let Err(err) = self.persistence.save(self.store.snapshot()) {
                    warn!(%err, "cart save failed, in-memory state remains authoritative");
                }
                Ok(self.store.snapshot())
            }
            Err(err) => {
                warn!(%err, "cart command rejected");
                Err(err)
            }
        }
    }

    /// Read-only view of the current snapshot, for rendering.
    pub fn snapshot(&self) -> &CartSnapshot {
        self.store.snapshot()
    }

    /// Borrow the storage backend.
    pub fn store_backend(&self) -> &S {
        self.persistence.store()
    }
}
