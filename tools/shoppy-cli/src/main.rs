//! Shoppy CLI - Terminal storefront for the ShoppyGlobe catalog.
//!
//! Commands:
//! - `shoppy products` - List products, optionally filtered by a search
//! - `shoppy product <id>` - Show one product
//! - `shoppy cart` - Show or change the cart
//! - `shoppy checkout` - Place an order for the cart
//! - `shoppy open <path>` - Render the view for a storefront path
//! - `shoppy config` - Manage configuration

mod cart_file;
mod commands;
mod config;
mod context;
mod output;
mod router;
mod views;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CartArgs, CheckoutArgs, ConfigArgs, OpenArgs, ProductArgs, ProductsArgs};

/// Shoppy CLI - Browse the ShoppyGlobe catalog and manage a cart
#[derive(Parser)]
#[command(name = "shoppy")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products(ProductsArgs),

    /// Show a product
    Product(ProductArgs),

    /// Show or change the cart
    Cart(CartArgs),

    /// Place an order for the cart
    Checkout(CheckoutArgs),

    /// Render the view for a storefront path
    Open(OpenArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn setup_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("shoppy=debug,shoppy_catalog=debug,shoppy_commerce=debug,warn")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    let mut ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &mut ctx).await,
        Commands::Product(args) => commands::product::run(args, &mut ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &mut ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &mut ctx).await,
        Commands::Open(args) => commands::open::run(args, &mut ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
