//! Cart error types.

use thiserror::Error;

/// Errors that can occur in cart operations.
///
/// Every variant is a plain rejection value. None of them abort the
/// session: a rejected command leaves the snapshot exactly as it was.
#[derive(Error, Debug)]
pub enum CartError {
    /// Requested quantity is zero or negative on an add.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// The aggregate quantity would exceed the cart limit.
    ///
    /// `total` is the baseline the request was checked against: the
    /// full cart total for an add, the others-total for an update.
    #[error("Cart limit exceeded: {total} item(s) held plus {requested} requested is over {limit}")]
    LimitExceeded {
        requested: i64,
        total: i64,
        limit: i64,
    },

    /// The persisted snapshot exists but cannot be restored.
    #[error("Corrupt persisted cart state: {0}")]
    CorruptPersistedState(String),

    /// Writing the snapshot to storage failed.
    #[error("Cart persistence write failed: {0}")]
    PersistenceWrite(String),
}
