//! Inbound cart commands.

use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A mutation command produced by the UI layer.
///
/// Commands arrive one at a time and are applied to completion before
/// the next is accepted; there is no queueing or batching.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CartCommand {
    /// Add `quantity` units of a product, merging into an existing
    /// line for the same product id.
    Add { product: Product, quantity: i64 },
    /// Set a line's quantity absolutely; zero or below removes it.
    UpdateQuantity { id: ProductId, quantity: i64 },
    /// Remove a line entirely.
    Remove { id: ProductId },
}
