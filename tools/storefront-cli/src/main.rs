//! Storefront CLI - browse, shop and track orders from the terminal.
//!
//! Commands:
//! - `storefront home` - Hero, featured products and categories
//! - `storefront products` - Filterable product listing
//! - `storefront product <id>` - Product detail
//! - `storefront categories` - Category listing
//! - `storefront cart` - Cart contents and totals
//! - `storefront checkout` - Shipping, payment and review wizard
//! - `storefront orders` - Order history
//! - `storefront order <id>` - Order tracking
//! - `storefront seller` - Seller application
//! - `storefront config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    CartArgs, CheckoutArgs, ConfigArgs, HomeArgs, OrderArgs, OrdersArgs, ProductArgs,
    ProductsArgs, SellerArgs,
};

/// Storefront CLI - Browse the catalog, check out and track orders
#[derive(Parser)]
#[command(name = "storefront")]
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
    /// Show the home page
    Home(HomeArgs),

    /// List products, optionally filtered
    Products(ProductsArgs),

    /// Show a single product
    Product(ProductArgs),

    /// List categories
    Categories,

    /// Show the cart and its totals
    Cart(CartArgs),

    /// Check out the cart
    Checkout(CheckoutArgs),

    /// List past orders
    Orders(OrdersArgs),

    /// Track a single order
    Order(OrderArgs),

    /// Apply to become a seller
    Seller(SellerArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "storefront_commerce=debug,storefront_cli=debug"
    } else {
        "warn"
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into());

    // Logs go to stderr so --json output stays parseable.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Home(args) => commands::home::run(args, &ctx).await,
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Product(args) => commands::product::run(args, &ctx).await,
        Commands::Categories => commands::categories::run(&ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Orders(args) => commands::orders::run(args, &ctx).await,
        Commands::Order(args) => commands::order::run(args, &ctx).await,
        Commands::Seller(args) => commands::seller::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
