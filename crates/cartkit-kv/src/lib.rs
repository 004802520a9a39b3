//! Type-safe key-value storage layer for cartkit.
//!
//! Provides a simple, ergonomic API for storing data in a key-value slot
//! with automatic JSON serialization.
//!
//! # Example
//!
//! ```rust,ignore
//! use cartkit_kv::{Kv, MemoryStore};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Cart {
//!     items: Vec<CartItem>,
//! }
//!
//! let kv = Kv::new(MemoryStore::new());
//!
//! // Store a value
//! kv.set("cart", &cart)?;
//!
//! // Retrieve a value
//! let cart: Option<Cart> = kv.get("cart")?;
//!
//! // Delete a value
//! kv.delete("cart")?;
//! ```

mod error;
mod file;
mod kv;
mod memory;
mod store;

pub use error::{KvError, KvResult};
pub use file::FileStore;
pub use kv::Kv;
pub use memory::MemoryStore;
pub use store::KvStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FileStore, Kv, KvError, KvResult, KvStore, MemoryStore};
}
