//! Cart snapshot and the reducer over it.

use crate::cart::{CartCommand, LineItem};
use crate::catalog::Product;
use crate::error::CartError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Maximum aggregate quantity across all line items.
pub const CART_LIMIT: i64 = 200;

/// The entire observable cart state: an ordered sequence of line items.
///
/// Order is insertion order. It carries no semantics beyond stable
/// display and round-trip serialization. The wire form is
/// `{"items":[{id,name,price,quantity},...]}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CartSnapshot {
    /// Items in the cart, oldest first.
    pub items: Vec<LineItem>,
}

impl CartSnapshot {
    /// Create an empty snapshot.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sum of quantities across all line items.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of line subtotals.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(|i| i.subtotal()).sum()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a line item by product id.
    pub fn get(&self, id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product_id() == id)
    }

    /// Check the cart invariants on externally sourced data.
    ///
    /// A snapshot built through [`CartStore`] always satisfies these;
    /// one parsed from storage may not, so the load path validates
    /// before hydrating.
    pub fn validate(&self) -> Result<(), CartError> {
        if self.total_quantity() > CART_LIMIT {
            return Err(CartError::CorruptPersistedState(format!(
                "aggregate quantity {} exceeds limit {}",
                self.total_quantity(),
                CART_LIMIT
            )));
        }
        for item in &self.items {
            if item.quantity < 1 {
                return Err(CartError::CorruptPersistedState(format!(
                    "product {} has non-positive quantity {}",
                    item.product_id(),
                    item.quantity
                )));
            }
        }
        for (n, item) in self.items.iter().enumerate() {
            if self.items[..n].iter().any(|i| i.product_id() == item.product_id()) {
                return Err(CartError::CorruptPersistedState(format!(
                    "duplicate line item for product {}",
                    item.product_id()
                )));
            }
        }
        Ok(())
    }
}

/// The cart reducer.
///
/// Holds the current snapshot and exposes pure transition operations.
/// Every operation either commits a new snapshot or leaves the current
/// one untouched while returning a typed rejection; there is no
/// partial mutation.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    snapshot: CartSnapshot,
}

impl CartStore {
    /// Create a store with an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the current snapshot.
    pub fn snapshot(&self) -> &CartSnapshot {
        &self.snapshot
    }

    /// Sum of quantities currently in the cart.
    pub fn total_quantity(&self) -> i64 {
        self.snapshot.total_quantity()
    }

    /// Add `quantity` units of a product.
    ///
    /// Returns a rejection if:
    /// - `quantity` is zero or negative (`InvalidQuantity`; the UI is
    ///   expected to have filtered these already, re-checked here)
    /// - the aggregate quantity would exceed [`CART_LIMIT`]
    ///   (`LimitExceeded`)
    ///
    /// A line for the same product id absorbs the quantity; otherwise
    /// a new line is appended at the end, preserving insertion order.
    pub fn add(&mut self, product: Product, quantity: i64) -> Result<(), CartError> {
        if quantity <= 0 {
            return Err(CartError::InvalidQuantity(quantity));
        }

        // The limit is checked against the full requested delta, which
        // equals the post-merge increase whether or not a line exists.
        let total = self.snapshot.total_quantity();
        let projected = total.checked_add(quantity);
        if !matches!(projected, Some(p) if p <= CART_LIMIT) {
            return Err(CartError::LimitExceeded {
                requested: quantity,
                total,
                limit: CART_LIMIT,
            });
        }

        if let Some(existing) = self
            .snapshot
            .items
            .iter_mut()
            .find(|i| i.product_id() == product.id)
        {
            existing.quantity += quantity;
        } else {
            self.snapshot.items.push(LineItem::new(product, quantity));
        }
        Ok(())
    }

    /// Set a line's quantity to exactly `quantity`.
    ///
    /// Unknown ids are a no-op, not an error. A quantity of zero or
    /// below removes the line. The limit check excludes the line being
    /// updated from the baseline, so a line can be lowered or raised
    /// freely up to the headroom left by every other item.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) -> Result<(), CartError> {
        if self.snapshot.get(id).is_none() {
            return Ok(());
        }

        if quantity <= 0 {
            self.remove(id);
            return Ok(());
        }

        let others_total: i64 = self
            .snapshot
            .items
            .iter()
            .filter(|i| i.product_id() != id)
            .map(|i| i.quantity)
            .sum();
        let projected = others_total.checked_add(quantity);
        if !matches!(projected, Some(p) if p <= CART_LIMIT) {
            return Err(CartError::LimitExceeded {
                requested: quantity,
                total: others_total,
                limit: CART_LIMIT,
            });
        }

        if let Some(item) = self
            .snapshot
            .items
            .iter_mut()
            .find(|i| i.product_id() == id)
        {
            item.quantity = quantity;
        }
        Ok(())
    }

    /// Remove the line with the given id. Returns `true` if it existed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let len_before = self.snapshot.items.len();
        self.snapshot.items.retain(|i| i.product_id() != id);
        self.snapshot.items.len() < len_before
    }

    /// Replace the entire snapshot. Used at startup to restore a
    /// persisted cart; callers are responsible for validating
    /// externally sourced snapshots first.
    pub fn hydrate(&mut self, snapshot: CartSnapshot) {
        self.snapshot = snapshot;
    }

    /// Apply one inbound command.
    pub fn apply(&mut self, command: CartCommand) -> Result<(), CartError> {
        match command {
            CartCommand::Add { product, quantity } => self.add(product, quantity),
            CartCommand::UpdateQuantity { id, quantity } => self.update_quantity(id, quantity),
            CartCommand::Remove { id } => {
                self.remove(id);
                Ok(())
            }
        }
    }
}
