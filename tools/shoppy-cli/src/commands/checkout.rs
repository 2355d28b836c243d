//! Checkout command.

use anyhow::Result;
use dialoguer::Input;
use shoppy_commerce::checkout::complete_order;
use shoppy_commerce::prelude::*;

use super::CheckoutArgs;
use crate::context::Context;
use crate::views;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &mut Context) -> Result<()> {
    let currency = ctx.currency();

    if ctx.store.state().is_empty() {
        if ctx.output.is_json() {
            return Err(CommerceError::EmptyCart.into());
        }
        ctx.output.view(&views::checkout(ctx.store.state(), currency)?);
        return Ok(());
    }

    ctx.output.view(&views::header(ctx.store.state()));
    ctx.output.view(&views::checkout(ctx.store.state(), currency)?);
    if args.dry_run {
        return Ok(());
    }

    let form = collect_form(args, ctx)?;
    form.validate()?;

    let spinner = ctx.output.spinner("Placing order...");
    tokio::time::sleep(ctx.config.checkout.delay()).await;
    let confirmation = complete_order(&mut ctx.store, &form, currency);
    spinner.finish_and_clear();

    let confirmation = confirmation?;
    ctx.persist_cart()?;

    if ctx.output.is_json() {
        ctx.output.json(&confirmation);
        return Ok(());
    }

    ctx.output.success("Order placed successfully!");
    ctx.output.view("\n");
    ctx.output.view(&views::order_confirmation(&confirmation));
    Ok(())
}

/// Fill the form from flags, prompting for whatever is missing when a
/// terminal is attached.
fn collect_form(args: CheckoutArgs, ctx: &Context) -> Result<CheckoutForm> {
    let mut form = CheckoutForm::new(
        args.name.unwrap_or_default(),
        args.email.unwrap_or_default(),
        args.address.unwrap_or_default(),
    );

    if !ctx.output.is_interactive() {
        return Ok(form);
    }

    if form.name.trim().is_empty() {
        form.name = prompt("Full name")?;
    }
    if form.email.trim().is_empty() {
        form.email = prompt("Email")?;
    }
    if form.address.trim().is_empty() {
        form.address = prompt("Shipping address")?;
    }
    Ok(form)
}

fn prompt(label: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}
