//! CLI command implementations.

pub mod cart;
pub mod categories;
pub mod checkout;
pub mod config;
pub mod home;
pub mod order;
pub mod orders;
pub mod product;
pub mod products;
pub mod seller;

use clap::{Args, Subcommand};
use rust_decimal::Decimal;
use storefront_commerce::cart::Cart;

use crate::config::CartLineSpec;
use crate::context::Context;

/// Arguments for the home command.
#[derive(Args)]
pub struct HomeArgs {
    /// Rotate the featured spotlight this many times before exiting.
    #[arg(long, default_value_t = 0)]
    pub rotate: usize,

    /// Milliseconds between spotlight rotations (overrides config).
    #[arg(long)]
    pub interval_ms: Option<u64>,
}

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Match against product name or description.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only show products in this category.
    #[arg(short, long)]
    pub category: Option<String>,

    /// Lowest price to include.
    #[arg(long)]
    pub min_price: Option<Decimal>,

    /// Highest price to include.
    #[arg(long)]
    pub max_price: Option<Decimal>,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID.
    pub id: String,
}

/// Cart lines shared by the cart and checkout commands.
#[derive(Args)]
pub struct CartLinesArgs {
    /// Starting cart line as product:quantity (repeatable; default from config).
    #[arg(short, long = "line", value_name = "PRODUCT:QTY")]
    pub lines: Vec<CartLineSpec>,
}

impl CartLinesArgs {
    /// Build the session cart from the flags, or the configured default.
    pub fn to_cart(&self, ctx: &Context) -> Cart {
        let lines = if self.lines.is_empty() {
            &ctx.config.cart.lines
        } else {
            &self.lines
        };
        Cart::from_lines(lines.iter().map(|l| (l.product.clone(), l.quantity)))
    }
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(flatten)]
    pub start: CartLinesArgs,

    /// Set a line's quantity as product:quantity; zero or less removes it.
    #[arg(long = "set", value_name = "PRODUCT:QTY")]
    pub updates: Vec<CartLineSpec>,

    /// Remove a product from the cart.
    #[arg(long = "remove", value_name = "PRODUCT")]
    pub removals: Vec<String>,

    /// Empty the cart.
    #[arg(long)]
    pub clear: bool,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    #[command(flatten)]
    pub cart: CartLinesArgs,

    /// Read shipping and payment details from a JSON file instead of prompting.
    #[arg(long)]
    pub details: Option<String>,

    /// Place the order without the final confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the orders command.
#[derive(Args)]
pub struct OrdersArgs {
    /// Only show orders with this status.
    #[arg(short, long)]
    pub status: Option<String>,
}

/// Arguments for the order command.
#[derive(Args)]
pub struct OrderArgs {
    /// Order ID, e.g. ORD-12345.
    pub id: String,
}

/// Arguments for the seller command.
#[derive(Args)]
pub struct SellerArgs {
    /// Read the application from a JSON file instead of prompting.
    #[arg(long)]
    pub details: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the active configuration.
    Show,
    /// Write a default storefront.toml in the current directory.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}
