//! Product catalog module.
//!
//! Contains the product record served by the catalog API and the projection
//! stored in cart entries.

mod product;

pub use product::{Product, ProductPage, ProductSummary};
