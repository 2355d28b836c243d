//! Cart and search store.

use crate::cart::{CartAction, CartEntry, CartItems};
use crate::catalog::ProductSummary;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything the cart store holds.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartState {
    /// Entries keyed by product id, in display order.
    #[serde(default)]
    pub items: CartItems,
    /// Current catalog search text.
    #[serde(default)]
    pub search_query: String,
}

impl CartState {
    /// Get the entry for a product.
    pub fn get(&self, id: ProductId) -> Option<&CartEntry> {
        self.items.get(&id)
    }

    /// Iterate entries in display order.
    pub fn entries(&self) -> impl Iterator<Item = &CartEntry> {
        self.items.values()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart has no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Owner of the [`CartState`].
///
/// The state only changes through the operations below. Each one runs to
/// completion before returning, and malformed input (a product without an
/// id, an id that is not in the cart) leaves the state untouched without
/// reporting an error.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    state: CartState,
}

impl CartStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> CartState {
        self.state.clone()
    }

    /// Current search query.
    pub fn search_query(&self) -> &str {
        &self.state.search_query
    }

    /// Apply an action.
    pub fn dispatch(&mut self, action: CartAction) {
        debug!(action = action.name(), "cart dispatch");
        match action {
            CartAction::AddToCart(product) => self.add_to_cart(product),
            CartAction::RemoveFromCart(id) => self.remove_from_cart(id),
            CartAction::IncrementQuantity(id) => self.increment_quantity(id),
            CartAction::DecrementQuantity(id) => self.decrement_quantity(id),
            CartAction::ClearCart => self.clear_cart(),
            CartAction::SetSearchQuery(query) => self.set_search_query(query.as_deref()),
            CartAction::SetCart(items) => self.set_cart(items),
        }
    }

    /// Add one of a product: a new entry starts at quantity 1, an existing
    /// one goes up by 1. Payloads without an id are ignored.
    pub fn add_to_cart(&mut self, product: ProductSummary) {
        if !product.id.is_present() {
            debug!("ignoring add_to_cart payload without a product id");
            return;
        }
        match self.state.items.get_mut(&product.id) {
            Some(entry) => entry.quantity = entry.quantity.saturating_add(1),
            None => {
                self.state.items.insert(product.id, CartEntry::new(product));
            }
        }
    }

    /// Remove a product's entry if present.
    pub fn remove_from_cart(&mut self, id: ProductId) {
        if self.state.items.shift_remove(&id).is_none() {
            debug!(%id, "remove_from_cart: not in cart");
        }
    }

    /// Add one to a product's quantity if it is in the cart.
    pub fn increment_quantity(&mut self, id: ProductId) {
        match self.state.items.get_mut(&id) {
            Some(entry) => entry.quantity = entry.quantity.saturating_add(1),
            None => debug!(%id, "increment_quantity: not in cart"),
        }
    }

    /// Subtract one from a product's quantity, never going below 1.
    ///
    /// An entry at quantity 1 stays in the cart; use
    /// [`remove_from_cart`](Self::remove_from_cart) to drop it.
    pub fn decrement_quantity(&mut self, id: ProductId) {
        match self.state.items.get_mut(&id) {
            Some(entry) => entry.quantity = entry.quantity.saturating_sub(1).max(1),
            None => debug!(%id, "decrement_quantity: not in cart"),
        }
    }

    /// Remove every entry. The search query is kept.
    pub fn clear_cart(&mut self) {
        self.state.items.clear();
    }

    /// Replace the search query; `None` or an empty string clears it.
    pub fn set_search_query(&mut self, query: Option<&str>) {
        self.state.search_query = query.unwrap_or_default().to_string();
    }

    /// Replace all entries at once, e.g. when restoring a saved cart.
    ///
    /// The entries are taken as given; `None` empties the cart.
    pub fn set_cart(&mut self, items: Option<CartItems>) {
        self.state.items = items.unwrap_or_default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, price: f64) -> ProductSummary {
        ProductSummary::new(ProductId::new(id), format!("Product {}", id), price)
    }

    fn quantity(store: &CartStore, id: u64) -> Option<u32> {
        store.state().get(ProductId::new(id)).map(|e| e.quantity)
    }

    #[test]
    fn test_store_starts_empty() {
        let store = CartStore::new();
        assert!(store.state().is_empty());
        assert_eq!(store.search_query(), "");
    }

    #[test]
    fn test_add_new_product_starts_at_one() {
        let mut store = CartStore::new();
        store.add_to_cart(product(1, 10.0));
        assert_eq!(quantity(&store, 1), Some(1));
    }

    #[test]
    fn test_add_twice_increases_quantity() {
        let mut store = CartStore::new();
        store.add_to_cart(product(5, 3.0));
        store.add_to_cart(product(5, 3.0));
        assert_eq!(quantity(&store, 5), Some(2));
        assert_eq!(store.state().len(), 1);
    }

    #[test]
    fn test_add_then_increment_matches_two_adds() {
        let mut a = CartStore::new();
        a.add_to_cart(product(5, 3.0));
        a.increment_quantity(ProductId::new(5));

        let mut b = CartStore::new();
        b.add_to_cart(product(5, 3.0));
        b.add_to_cart(product(5, 3.0));

        assert_eq!(quantity(&a, 5), quantity(&b, 5));
    }

    #[test]
    fn test_add_without_id_is_ignored() {
        let mut store = CartStore::new();
        store.add_to_cart(ProductSummary::default());
        assert!(store.state().is_empty());
    }

    #[test]
    fn test_add_keeps_first_projection() {
        let mut store = CartStore::new();
        store.add_to_cart(product(1, 10.0));
        store.add_to_cart(ProductSummary::new(ProductId::new(1), "Renamed", 99.0));
        let entry = store.state().get(ProductId::new(1)).unwrap();
        assert_eq!(entry.product.title, "Product 1");
        assert_eq!(entry.quantity, 2);
    }

    #[test]
    fn test_decrement_stops_at_one() {
        let mut store = CartStore::new();
        store.add_to_cart(product(1, 10.0));
        store.decrement_quantity(ProductId::new(1));
        store.decrement_quantity(ProductId::new(1));
        assert_eq!(quantity(&store, 1), Some(1));
    }

    #[test]
    fn test_decrement_from_three() {
        let mut store = CartStore::new();
        store.add_to_cart(product(1, 10.0));
        store.increment_quantity(ProductId::new(1));
        store.increment_quantity(ProductId::new(1));
        store.decrement_quantity(ProductId::new(1));
        assert_eq!(quantity(&store, 1), Some(2));
    }

    #[test]
    fn test_missing_ids_are_noops() {
        let mut store = CartStore::new();
        store.add_to_cart(product(1, 10.0));
        let before = store.snapshot();

        store.increment_quantity(ProductId::new(9));
        store.decrement_quantity(ProductId::new(9));
        store.remove_from_cart(ProductId::new(9));

        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store = CartStore::new();
        store.add_to_cart(product(1, 10.0));
        store.remove_from_cart(ProductId::new(1));
        store.remove_from_cart(ProductId::new(1));
        assert!(store.state().get(ProductId::new(1)).is_none());
        assert!(store.state().is_empty());
    }

    #[test]
    fn test_remove_preserves_display_order() {
        let mut store = CartStore::new();
        for id in [3, 1, 2] {
            store.add_to_cart(product(id, 1.0));
        }
        store.remove_from_cart(ProductId::new(1));
        let order: Vec<u64> = store.state().items.keys().map(|id| id.get()).collect();
        assert_eq!(order, vec![3, 2]);
    }

    #[test]
    fn test_clear_cart() {
        let mut store = CartStore::new();
        store.add_to_cart(product(1, 10.0));
        store.add_to_cart(product(2, 5.0));
        store.set_search_query(Some("shirt"));

        store.clear_cart();
        assert!(store.state().is_empty());
        assert_eq!(store.search_query(), "shirt");

        store.clear_cart();
        assert!(store.state().is_empty());
    }

    #[test]
    fn test_set_search_query() {
        let mut store = CartStore::new();
        store.set_search_query(Some("shirt"));
        assert_eq!(store.search_query(), "shirt");

        store.set_search_query(None);
        assert_eq!(store.search_query(), "");
    }

    #[test]
    fn test_set_cart_round_trip() {
        let mut items = CartItems::new();
        items.insert(
            ProductId::new(4),
            CartEntry::with_quantity(product(4, 2.0), 3),
        );
        items.insert(ProductId::new(8), CartEntry::new(product(8, 1.0)));

        let mut store = CartStore::new();
        store.add_to_cart(product(1, 10.0));
        store.set_cart(Some(items.clone()));
        assert_eq!(store.state().items, items);

        store.set_cart(None);
        assert!(store.state().is_empty());
    }

    #[test]
    fn test_set_cart_does_not_validate() {
        let mut items = CartItems::new();
        items.insert(
            ProductId::new(4),
            CartEntry::with_quantity(product(99, 2.0), 0),
        );
        let mut store = CartStore::new();
        store.set_cart(Some(items.clone()));
        assert_eq!(store.state().items, items);
    }

    #[test]
    fn test_dispatch_applies_in_order() {
        let mut store = CartStore::new();
        let actions = vec![
            CartAction::AddToCart(product(1, 10.0)),
            CartAction::AddToCart(product(2, 5.0)),
            CartAction::IncrementQuantity(ProductId::new(1)),
            CartAction::RemoveFromCart(ProductId::new(2)),
            CartAction::SetSearchQuery(Some("lamp".into())),
        ];
        for action in actions {
            store.dispatch(action);
        }
        assert_eq!(quantity(&store, 1), Some(2));
        assert_eq!(quantity(&store, 2), None);
        assert_eq!(store.search_query(), "lamp");

        store.dispatch(CartAction::SetSearchQuery(None));
        store.dispatch(CartAction::ClearCart);
        assert_eq!(store.snapshot(), CartState::default());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut store = CartStore::new();
        store.add_to_cart(product(1, 10.0));
        let snapshot = store.snapshot();
        store.clear_cart();
        assert_eq!(snapshot.len(), 1);
    }
}
