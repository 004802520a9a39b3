//! Cart line item.

use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// One distinct product's presence in the cart.
///
/// At most one line item per product id exists at any time; duplicate
/// adds merge into the existing line. The product fields are flattened
/// so the wire form is `{id, name, price, quantity}`, matching
/// snapshots persisted by earlier sessions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// The product held.
    #[serde(flatten)]
    pub product: Product,
    /// How many units are held. Always >= 1 while stored.
    pub quantity: i64,
}

impl LineItem {
    /// Create a new line item.
    pub fn new(product: Product, quantity: i64) -> Self {
        Self { product, quantity }
    }

    /// The id of the product this line holds.
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Line subtotal (unit price times quantity).
    pub fn subtotal(&self) -> f64 {
        self.product.price * self.quantity as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_wire_form_is_flat() {
        let item = LineItem::new(Product::new(ProductId::new(2), "Product 2", 20.0), 3);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 2, "name": "Product 2", "price": 20.0, "quantity": 3})
        );
    }

    #[test]
    fn test_line_item_parses_flat_wire_form() {
        let item: LineItem =
            serde_json::from_str(r#"{"id":2,"name":"Product 2","price":20.0,"quantity":3}"#)
                .unwrap();
        assert_eq!(item.product_id(), ProductId::new(2));
        assert_eq!(item.quantity, 3);
    }

    #[test]
    fn test_subtotal() {
        let item = LineItem::new(Product::new(ProductId::new(1), "Product 1", 10.0), 4);
        assert_eq!(item.subtotal(), 40.0);
    }
}
