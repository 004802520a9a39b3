//! Raw key-value backend trait.

use crate::error::KvResult;

/// A key-value storage backend over raw bytes.
///
/// All implementations must satisfy these invariants:
/// - `get` after `set` for the same key returns the bytes last written.
/// - A missing key is `Ok(None)`, never an error.
/// - The backend never interprets stored bytes; serialization lives in
///   the [`Kv`](crate::Kv) wrapper.
/// - All I/O errors are propagated, never silently ignored.
pub trait KvStore: Send + Sync {
    /// Read the bytes stored under `key`.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    fn get(&self, key: &str) -> KvResult<Option<Vec<u8>>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &[u8]) -> KvResult<()>;

    /// Delete the value under `key`. Returns `true` if the key existed.
    fn delete(&self, key: &str) -> KvResult<bool>;

    /// Check whether `key` exists.
    ///
    /// Default implementation reads the value. Backends may override
    /// to avoid copying the bytes.
    fn exists(&self, key: &str) -> KvResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}
