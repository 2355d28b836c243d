//! CLI command implementations.

pub mod cart;
pub mod checkout;
pub mod config;
pub mod open;
pub mod product;
pub mod products;

use clap::{Args, Subcommand};
use shoppy_commerce::ProductId;

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Only show products whose title or description contains this text.
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product id.
    pub id: ProductId,

    /// Add the product to the cart after showing it.
    #[arg(short, long)]
    pub add: bool,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart (default).
    Show,
    /// Fetch a product and add it to the cart.
    Add {
        /// Product id.
        id: ProductId,
    },
    /// Remove a product from the cart.
    Remove {
        /// Product id.
        id: ProductId,
    },
    /// Increase a product's quantity by one.
    Inc {
        /// Product id.
        id: ProductId,
    },
    /// Decrease a product's quantity by one, never below one.
    Dec {
        /// Product id.
        id: ProductId,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Full name.
    #[arg(long)]
    pub name: Option<String>,

    /// Contact email.
    #[arg(long)]
    pub email: Option<String>,

    /// Shipping address.
    #[arg(long)]
    pub address: Option<String>,

    /// Show the order summary without placing the order.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the open command.
#[derive(Args)]
pub struct OpenArgs {
    /// Storefront path, e.g. `/product/3` or `/cart`.
    #[arg(default_value = "/")]
    pub path: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Write a default shoppy.toml in the current directory.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
