//! Cart commands.

use anyhow::{Context as _, Result};
use dialoguer::Confirm;
use shoppy_commerce::cart::CartTotals;
use shoppy_commerce::ProductId;

use super::{CartArgs, CartCommand};
use crate::context::Context;
use crate::views;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &mut Context) -> Result<()> {
    match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => return show(ctx),
        CartCommand::Add { id } => add(id, ctx).await?,
        CartCommand::Remove { id } => {
            if !require_entry(id, ctx) {
                return Ok(());
            }
            ctx.store.remove_from_cart(id);
            ctx.output.success(&format!("Removed product {} from cart", id));
        }
        CartCommand::Inc { id } => {
            if !require_entry(id, ctx) {
                return Ok(());
            }
            ctx.store.increment_quantity(id);
        }
        CartCommand::Dec { id } => {
            if !require_entry(id, ctx) {
                return Ok(());
            }
            ctx.store.decrement_quantity(id);
        }
        CartCommand::Clear { yes } => {
            if !yes && ctx.output.is_interactive() && !ctx.store.state().is_empty() {
                let confirmed = Confirm::new()
                    .with_prompt("Remove every item from the cart?")
                    .default(false)
                    .interact()?;

                if !confirmed {
                    ctx.output.warn("Cart left as it was");
                    return Ok(());
                }
            }
            ctx.store.clear_cart();
            ctx.output.success("Cart cleared");
        }
    }

    ctx.persist_cart()?;
    show(ctx)
}

/// Print the cart page.
pub fn show(ctx: &Context) -> Result<()> {
    let state = ctx.store.state();

    if ctx.output.is_json() {
        let totals = CartTotals::from_state(state, ctx.currency())?;
        ctx.output.json(&serde_json::json!({
            "items": state.entries().collect::<Vec<_>>(),
            "total_quantity": totals.quantity,
            "total_price": totals.price,
        }));
        return Ok(());
    }

    ctx.output.view(&views::header(state));
    ctx.output.view(&views::cart(state, ctx.currency())?);
    Ok(())
}

async fn add(id: ProductId, ctx: &mut Context) -> Result<()> {
    let loader = ctx.loader()?;

    let spinner = ctx.output.spinner("Fetching product...");
    let product = loader.get_product(id).await;
    spinner.finish_and_clear();

    let product = product.with_context(|| format!("Failed to load product {}", id))?;
    ctx.store.add_to_cart(product.summary());
    ctx.output.success(&format!("Added {} to cart", product.title));
    Ok(())
}

fn require_entry(id: ProductId, ctx: &Context) -> bool {
    if ctx.store.state().get(id).is_some() {
        return true;
    }
    ctx.output.warn(&format!("Product {} is not in the cart", id));
    false
}
