//! Shopfront CLI - a terminal storefront over the Shopfront stores.
//!
//! Commands:
//! - `shopfront catalog` - Browse, filter and inspect products
//! - `shopfront cart` - Manage the shopping cart
//! - `shopfront wishlist` - Manage saved products
//! - `shopfront currency` - Choose the display currency
//! - `shopfront checkout` - Place an order from the cart
//! - `shopfront blog` - Read the journal
//! - `shopfront config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BlogArgs, CartArgs, CatalogArgs, CheckoutArgs, ConfigArgs, CurrencyArgs, WishlistArgs};

/// Shopfront CLI - browse the catalog, fill a cart and check out
#[derive(Parser)]
#[command(name = "shopfront")]
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
    /// Browse products
    Catalog(CatalogArgs),

    /// Manage the shopping cart
    Cart(CartArgs),

    /// Manage the wishlist
    Wishlist(WishlistArgs),

    /// Choose the display currency
    Currency(CurrencyArgs),

    /// Place an order from the cart
    Checkout(CheckoutArgs),

    /// Read blog posts
    Blog(BlogArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Wishlist(args) => commands::wishlist::run(args, &ctx),
        Commands::Currency(args) => commands::currency::run(args, &ctx),
        Commands::Checkout(args) => commands::checkout::run(args, &ctx),
        Commands::Blog(args) => commands::blog::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    ctx.flush_toasts();

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
