//! Storage error types.

use thiserror::Error;

/// Errors that can occur when using a key-value store.
#[derive(Error, Debug)]
pub enum KvError {
    /// Failed to open the store.
    #[error("Failed to open store: {0}")]
    Open(String),

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// I/O failure in the underlying backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key is not usable by this backend.
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

/// Result alias for store operations.
pub type KvResult<T> = Result<T, KvError>;
