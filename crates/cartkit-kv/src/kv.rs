//! Typed wrapper with automatic serialization.

use serde::{de::DeserializeOwned, Serialize};

use crate::error::KvResult;
use crate::store::KvStore;

/// Type-safe view over a raw [`KvStore`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
pub struct Kv<S: KvStore> {
    store: S,
}

impl<S: KvStore> Kv<S> {
    /// Wrap a raw backend.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a value by key.
    ///
    /// Returns `None` if the key doesn't exist.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cart: Option<Cart> = kv.get("cart")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> KvResult<Option<T>> {
        match self.store.get(key)? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value by key.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// kv.set("cart", &cart)?;
    /// ```
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> KvResult<()> {
        let bytes = serde_json::to_vec(value)?;
        self.store.set(key, &bytes)
    }

    /// Delete a value by key. Returns `true` if the key existed.
    pub fn delete(&self, key: &str) -> KvResult<bool> {
        self.store.delete(key)
    }

    /// Check if a key exists.
    pub fn exists(&self, key: &str) -> KvResult<bool> {
        self.store.exists(key)
    }

    /// Borrow the underlying backend.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume and return the underlying backend.
    pub fn into_inner(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Payload {
        name: String,
        count: u32,
    }

    #[test]
    fn test_get_missing_key() {
        let kv = Kv::new(MemoryStore::new());
        let value: Option<Payload> = kv.get("absent").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_set_then_get() {
        let kv = Kv::new(MemoryStore::new());
        let payload = Payload {
            name: "widget".to_string(),
            count: 3,
        };

        kv.set("slot", &payload).unwrap();
        let loaded: Option<Payload> = kv.get("slot").unwrap();
        assert_eq!(loaded, Some(payload));
    }

    #[test]
    fn test_set_overwrites() {
        let kv = Kv::new(MemoryStore::new());
        kv.set("slot", &Payload { name: "a".into(), count: 1 }).unwrap();
        kv.set("slot", &Payload { name: "b".into(), count: 2 }).unwrap();

        let loaded: Option<Payload> = kv.get("slot").unwrap();
        assert_eq!(loaded.unwrap().name, "b");
    }

    #[test]
    fn test_get_malformed_bytes_is_serialize_error() {
        let store = MemoryStore::new();
        store.set("slot", b"not json").unwrap();

        let kv = Kv::new(store);
        let result: KvResult<Option<Payload>> = kv.get("slot");
        assert!(matches!(result, Err(crate::KvError::Serialize(_))));
    }

    #[test]
    fn test_delete() {
        let kv = Kv::new(MemoryStore::new());
        kv.set("slot", &Payload { name: "a".into(), count: 1 }).unwrap();

        assert!(kv.delete("slot").unwrap());
        assert!(!kv.delete("slot").unwrap());
        assert!(!kv.exists("slot").unwrap());
    }
}
