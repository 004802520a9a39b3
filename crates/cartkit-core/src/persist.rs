//! Persistence bridge between the cart and a key-value slot.
//!
//! Side effects only; no business logic. The bridge reads and writes
//! whole snapshots and never mutates them.

use cartkit_kv::{Kv, KvError, KvStore};

use crate::cart::CartSnapshot;
use crate::error::CartError;

/// The fixed slot the cart snapshot is persisted under.
pub const CART_SLOT_KEY: &str = "cart";

/// Reads and writes cart snapshots in a single key-value slot.
pub struct CartPersistence<S: KvStore> {
    kv: Kv<S>,
}

impl<S: KvStore> CartPersistence<S> {
    /// Wrap a storage backend.
    pub fn new(store: S) -> Self {
        Self { kv: Kv::new(store) }
    }

    /// Load the persisted snapshot, if any.
    ///
    /// Returns `Ok(None)` when the slot has never been written. A slot
    /// that is present but unparseable, unreadable, or in violation of
    /// the cart invariants is reported as `CorruptPersistedState`; the
    /// caller decides whether to fail open.
    pub fn load(&self) -> Result<Option<CartSnapshot>, CartError> {
        let snapshot: Option<CartSnapshot> =
            self.kv.get(CART_SLOT_KEY).map_err(corrupt)?;
        match snapshot {
            Some(snapshot) => {
                snapshot.validate()?;
                Ok(Some(snapshot))
            }
            None => Ok(None),
        }
    }

    /// Write the snapshot to the slot, replacing any previous value.
    ///
    /// The empty snapshot is written like any other, so an explicitly
    /// emptied cart round-trips as empty rather than as "never saved".
    pub fn save(&self, snapshot: &CartSnapshot) -> Result<(), CartError> {
        self.kv
            .set(CART_SLOT_KEY, snapshot)
            .map_err(|e| CartError::PersistenceWrite(e.to_string()))
    }

    /// Borrow the underlying backend.
    pub fn store(&self) -> &S {
        self.kv.store()
    }
}

fn corrupt(err: KvError) -> CartError {
    CartError::CorruptPersistedState(err.to_string())
}
