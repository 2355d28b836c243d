//! Text renderings of the storefront views.
//!
//! Views only read: they take the catalog load state or a cart snapshot and
//! return the text to print.

use std::fmt::Write as _;

use console::style;
use shoppy_catalog::LoadState;
use shoppy_commerce::cart::{total_quantity, CartTotals};
use shoppy_commerce::prelude::*;

/// Site header with the cart item count.
pub fn header(state: &CartState) -> String {
    format!(
        "{}{}   {}\n\n",
        style("Shoppy").bold(),
        style("Globe").magenta().bold(),
        style(format!("Cart ({})", total_quantity(state))).dim()
    )
}

/// Product grid filtered by the search query.
pub fn product_list(state: &LoadState<Vec<Product>>, query: &str, currency: Currency) -> String {
    let products = match state {
        LoadState::Loading => return "Loading products...\n".to_string(),
        LoadState::Failed(err) => return format!("{} {}\n", style("Error:").red(), err),
        LoadState::Ready(products) => products,
    };

    let filtered = filter_products(products, query);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}  {}",
        style("Products").bold().underlined(),
        style(format!("{} results", filtered.len())).dim()
    );
    for product in filtered {
        let _ = writeln!(
            out,
            "  {:>4}  {:<40}  {}",
            style(format!("#{}", product.id)).dim(),
            truncate(&product.title, 40),
            product.unit_price(currency)
        );
    }
    out
}

/// Single product page.
pub fn product_detail(state: &LoadState<Product>, currency: Currency) -> String {
    let product = match state {
        LoadState::Loading => return "Loading product...\n".to_string(),
        LoadState::Failed(err) => return format!("{} {}\n", style("Error:").red(), err),
        LoadState::Ready(product) => product,
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", style(&product.title).bold().underlined());
    let _ = writeln!(out, "{}", style(product.unit_price(currency)).green());
    if !product.description.is_empty() {
        let _ = writeln!(out, "{}", product.description);
    }
    let _ = writeln!(out, "Brand: {} \u{2022} Stock: {}", product.brand, product.stock);
    let image = product.display_image();
    if !image.is_empty() {
        let _ = writeln!(out, "{}", style(image).dim());
    }
    out
}

/// Cart page.
pub fn cart(state: &CartState, currency: Currency) -> Result<String, CommerceError> {
    if state.is_empty() {
        return Ok("Your cart is empty\nAdd some products to see them here.\n".to_string());
    }

    let totals = CartTotals::from_state(state, currency)?;
    let mut out = String::new();
    let _ = writeln!(out, "{}", style("Cart").bold().underlined());
    for entry in state.entries() {
        let _ = writeln!(
            out,
            "  {:>4}  {:<40}  {:>10}  \u{00d7} {}",
            style(format!("#{}", entry.product.id)).dim(),
            truncate(&entry.product.title, 40),
            entry.product.unit_price(currency).display(),
            entry.quantity
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", style("Summary").bold());
    let _ = writeln!(out, "Items: {}", totals.quantity);
    let _ = writeln!(out, "Total: {}", totals.price);
    Ok(out)
}

/// Order summary shown before placing an order.
pub fn checkout(state: &CartState, currency: Currency) -> Result<String, CommerceError> {
    let summary = match OrderSummary::from_state(state, currency) {
        Ok(summary) => summary,
        Err(CommerceError::EmptyCart) => {
            return Ok("Your cart is empty\nAdd items to proceed to checkout.\n".to_string())
        }
        Err(e) => return Err(e),
    };
    Ok(order_summary(&summary))
}

fn order_summary(summary: &OrderSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", style("Order Summary").bold().underlined());
    for line in &summary.lines {
        let _ = writeln!(
            out,
            "  {} \u{00d7} {} \u{2014} {}",
            line.title, line.quantity, line.line_total
        );
    }
    let _ = writeln!(out, "{}", style(format!("Total: {}", summary.total)).bold());
    out
}

/// Receipt for a placed order.
pub fn order_confirmation(confirmation: &OrderConfirmation) -> String {
    let mut out = order_summary(&confirmation.summary);
    let _ = writeln!(out);
    let _ = writeln!(out, "Order:   {}", confirmation.order_id);
    let _ = writeln!(
        out,
        "Placed:  {}",
        confirmation.placed_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(
        out,
        "Ship to: {} <{}>",
        confirmation.customer.name.trim(),
        confirmation.customer.email.trim()
    );
    let _ = writeln!(out, "         {}", confirmation.customer.address.trim());
    out
}

/// Page for unmatched paths.
pub fn not_found(path: &str) -> String {
    format!(
        "{}\nNothing lives at {}. Try / for the product list.\n",
        style("404 \u{2014} Page not found").bold(),
        path
    )
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('\u{2026}');
    out
}
