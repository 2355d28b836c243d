//! Shopping cart module.
//!
//! Contains the cart and search store, the actions it accepts, and the
//! totals derived from its state.

mod action;
mod entry;
mod store;
mod totals;

pub use action::CartAction;
pub use entry::{CartEntry, CartItems};
pub use store::{CartState, CartStore};
pub use totals::{total_price, total_quantity, CartTotals};
