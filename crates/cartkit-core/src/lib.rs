//! Shopping-cart state engine for cartkit.
//!
//! This crate provides the cart domain core:
//!
//! - **Catalog**: product records and an async provider seam
//! - **Cart**: line items, snapshots, and the `CartStore` reducer with a
//!   global quantity ceiling and duplicate-add merging
//! - **Persist**: a bridge that mirrors every accepted mutation into a
//!   single key-value slot
//! - **Session**: the wiring of store + persistence (hydrate on open,
//!   save after every accepted command)
//!
//! # Example
//!
//! ```rust,ignore
//! use cartkit_core::prelude::*;
//! use cartkit_kv::MemoryStore;
//!
//! let mut session = CartSession::open(MemoryStore::new());
//!
//! let product = Product::new(ProductId::new(1), "Product 1", 10.0);
//! session.dispatch(CartCommand::Add { product, quantity: 2 })?;
//!
//! let snapshot = session.snapshot();
//! println!("{} items, subtotal {}", snapshot.total_quantity(), snapshot.subtotal());
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod persist;
pub mod session;

pub use error::CartError;
pub use ids::ProductId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CartError;
    pub use crate::ids::ProductId;

    // Catalog
    pub use crate::catalog::{CatalogError, CatalogProvider, Product, StaticCatalog};

    // Cart
    pub use crate::cart::{CartCommand, CartSnapshot, CartStore, LineItem, CART_LIMIT};

    // Persistence
    pub use crate::persist::{CartPersistence, CART_SLOT_KEY};
    pub use crate::session::CartSession;
}
