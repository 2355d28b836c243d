//! Product catalog loader with stale-request tracking.
//!
//! This crate provides:
//! - `CatalogLoader` - list and single-product fetches against the catalog API
//! - `CatalogConfig` - base URL, timeout and page size for the loader
//! - `LoadState` - loading / ready / failed result exposed to views
//! - `LoadSlot` - generation-counted slot that drops superseded results

mod config;
mod loader;
mod slot;
mod state;

pub use config::*;
pub use loader::*;
pub use slot::*;
pub use state::*;
