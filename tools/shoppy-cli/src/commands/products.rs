//! Product list command.

use anyhow::{Context as _, Result};
use shoppy_catalog::{LoadSlot, LoadState};
use shoppy_commerce::prelude::*;

use super::ProductsArgs;
use crate::context::Context;
use crate::views;

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &mut Context) -> Result<()> {
    if args.search.is_some() {
        ctx.store.set_search_query(args.search.as_deref());
    }
    show(ctx).await
}

/// Load the catalog and print the products matching the current query.
pub async fn show(ctx: &Context) -> Result<()> {
    let loader = ctx.loader()?;
    let slot = LoadSlot::new();

    let spinner = ctx.output.spinner("Loading products...");
    loader.load_products(&slot).await;
    spinner.finish_and_clear();

    let state = slot.state();
    let query = ctx.store.search_query();

    if ctx.output.is_json() {
        if let LoadState::Ready(products) = &state {
            ctx.output.json(&serde_json::json!({
                "search_query": query,
                "products": filter_products(products, query),
            }));
        }
    } else {
        ctx.output.view(&views::header(ctx.store.state()));
        ctx.output.view(&views::product_list(&state, query, ctx.currency()));
    }

    match state.error() {
        Some(err) => Err(err.clone()).context("Failed to load products"),
        None => Ok(()),
    }
}
