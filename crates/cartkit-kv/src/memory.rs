//! In-memory backend.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::KvResult;
use crate::store::KvStore;

/// In-memory, HashMap-based key-value store.
///
/// Intended for tests and embedding. Values are held behind a `RwLock`
/// for safe concurrent access and cloned on read.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.slots.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.slots.read().expect("lock poisoned").is_empty()
    }

    /// Remove all keys from the store.
    pub fn clear(&self) {
        self.slots.write().expect("lock poisoned").clear();
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> KvResult<Option<Vec<u8>>> {
        let slots = self.slots.read().expect("lock poisoned");
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> KvResult<()> {
        let mut slots = self.slots.write().expect("lock poisoned");
        slots.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> KvResult<bool> {
        let mut slots = self.slots.write().expect("lock poisoned");
        Ok(slots.remove(key).is_some())
    }

    fn exists(&self, key: &str) -> KvResult<bool> {
        let slots = self.slots.read().expect("lock poisoned");
        Ok(slots.contains_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn test_set_get_roundtrip() {
        let store = MemoryStore::new();
        store.set("key", b"value").unwrap();

        assert_eq!(store.get("key").unwrap(), Some(b"value".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_reports_presence() {
        let store = MemoryStore::new();
        store.set("key", b"value").unwrap();

        assert!(store.delete("key").unwrap());
        assert!(!store.delete("key").unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear() {
        let store = MemoryStore::new();
        store.set("a", b"1").unwrap();
        store.set("b", b"2").unwrap();
        store.clear();
        assert!(store.is_empty());
    }
}
