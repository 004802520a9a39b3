//! Product catalog module.
//!
//! Contains the product record and the async provider seam the cart
//! consumes products through.

mod product;
mod provider;

pub use product::Product;
pub use provider::{CatalogError, CatalogProvider, StaticCatalog};
