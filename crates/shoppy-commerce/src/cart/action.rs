//! Named operations accepted by the cart store.

use crate::cart::CartItems;
use crate::catalog::ProductSummary;
use crate::ids::ProductId;

/// A single cart store operation.
///
/// Dispatching an action is equivalent to calling the store method of the
/// same name.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Insert the product with quantity 1, or bump its quantity.
    AddToCart(ProductSummary),
    /// Delete the entry for a product.
    RemoveFromCart(ProductId),
    /// Add one to an entry's quantity.
    IncrementQuantity(ProductId),
    /// Subtract one from an entry's quantity, stopping at 1.
    DecrementQuantity(ProductId),
    /// Drop every entry.
    ClearCart,
    /// Replace the search query; `None` clears it.
    SetSearchQuery(Option<String>),
    /// Replace every entry; `None` empties the cart.
    SetCart(Option<CartItems>),
}

impl CartAction {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            CartAction::AddToCart(_) => "add_to_cart",
            CartAction::RemoveFromCart(_) => "remove_from_cart",
            CartAction::IncrementQuantity(_) => "increment_quantity",
            CartAction::DecrementQuantity(_) => "decrement_quantity",
            CartAction::ClearCart => "clear_cart",
            CartAction::SetSearchQuery(_) => "set_search_query",
            CartAction::SetCart(_) => "set_cart",
        }
    }
}
