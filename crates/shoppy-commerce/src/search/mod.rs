//! Search module.
//!
//! Filters the catalog by the store's search query.

mod filter;

pub use filter::{filter_products, matches_query};
