//! Product detail command.

use anyhow::{Context as _, Result};
use shoppy_catalog::LoadSlot;
use shoppy_commerce::catalog::Product;
use shoppy_commerce::ProductId;

use super::ProductArgs;
use crate::context::Context;
use crate::views;

/// Run the product command.
pub async fn run(args: ProductArgs, ctx: &mut Context) -> Result<()> {
    let slot = show(args.id, ctx).await?;

    if args.add {
        if let Some(product) = slot.state().ready() {
            ctx.store.add_to_cart(product.summary());
            ctx.persist_cart()?;
            ctx.output.success(&format!("Added {} to cart", product.title));
        }
    }

    Ok(())
}

/// Load one product and print its page. The slot holding the result is
/// returned so callers can act on the product.
pub async fn show(id: ProductId, ctx: &Context) -> Result<LoadSlot<Product>> {
    let loader = ctx.loader()?;
    let slot = LoadSlot::new();

    let spinner = ctx.output.spinner("Loading product...");
    loader.load_product(&slot, id).await;
    spinner.finish_and_clear();

    let state = slot.state();
    if let Some(err) = state.error() {
        return Err(err.clone()).with_context(|| format!("Failed to load product {}", id));
    }

    if ctx.output.is_json() {
        if let Some(product) = state.ready() {
            ctx.output.json(product);
        }
    } else {
        ctx.output.view(&views::header(ctx.store.state()));
        ctx.output.view(&views::product_detail(&state, ctx.currency()));
    }

    Ok(slot)
}
