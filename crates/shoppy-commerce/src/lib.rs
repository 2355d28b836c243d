//! Storefront domain types and logic for ShoppyGlobe.
//!
//! This crate holds everything the storefront decides on its own, without
//! talking to the network:
//!
//! - **Catalog**: the product record served by the catalog API and the
//!   projection copied into cart entries
//! - **Cart**: the cart and search store, its actions and derived totals
//! - **Search**: filtering a product list by the current search query
//! - **Checkout**: form validation and order summaries
//!
//! # Example
//!
//! ```rust
//! use shoppy_commerce::prelude::*;
//!
//! let mut store = CartStore::new();
//! store.add_to_cart(ProductSummary::new(ProductId::new(1), "Red Shirt", 10.0));
//! store.add_to_cart(ProductSummary::new(ProductId::new(2), "Blue Hat", 5.0));
//! store.increment_quantity(ProductId::new(1));
//!
//! let totals = CartTotals::from_state(store.state(), Currency::INR).unwrap();
//! assert_eq!(totals.quantity, 3);
//! assert_eq!(totals.price.display(), "\u{20b9}25.00");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;
pub mod checkout;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Product, ProductPage, ProductSummary};

    // Cart
    pub use crate::cart::{CartAction, CartEntry, CartItems, CartState, CartStore, CartTotals};

    // Checkout
    pub use crate::checkout::{CheckoutForm, OrderConfirmation, OrderLine, OrderSummary};

    // Search
    pub use crate::search::{filter_products, matches_query};
}
