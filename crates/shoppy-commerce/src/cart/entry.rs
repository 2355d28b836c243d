//! Cart entry types.

use crate::catalog::ProductSummary;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Cart entries keyed by product id, in the order they were first added.
pub type CartItems = IndexMap<ProductId, CartEntry>;

/// A product projection and how many of it are in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartEntry {
    /// Product being purchased.
    pub product: ProductSummary,
    /// Quantity; at least 1 for entries created by the store.
    pub quantity: u32,
}

impl CartEntry {
    /// Create an entry with quantity 1.
    pub fn new(product: ProductSummary) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Create an entry with an explicit quantity.
    pub fn with_quantity(product: ProductSummary, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// Unit price times quantity. None on overflow.
    pub fn line_total(&self, currency: Currency) -> Option<Money> {
        self.product
            .unit_price(currency)
            .try_multiply(i64::from(self.quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let entry =
            CartEntry::with_quantity(ProductSummary::new(ProductId::new(1), "Mug", 4.25), 3);
        assert_eq!(entry.line_total(Currency::INR).unwrap().amount_minor, 1275);
    }

    #[test]
    fn test_items_serialize_keyed_by_id() {
        let mut items = CartItems::new();
        items.insert(
            ProductId::new(7),
            CartEntry::new(ProductSummary::new(ProductId::new(7), "Pen", 1.0)),
        );
        let json = serde_json::to_value(&items).unwrap();
        assert_eq!(json["7"]["quantity"], 1);
        assert_eq!(json["7"]["product"]["title"], "Pen");

        let back: CartItems = serde_json::from_value(json).unwrap();
        assert_eq!(back, items);
    }
}
