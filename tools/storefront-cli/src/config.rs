//! CLI configuration.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use storefront_commerce::{HomeConfig, PricingConfig, ProductId, StorefrontConfig};

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Shipping, tax and currency.
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Home page settings.
    #[serde(default)]
    pub home: HomeConfig,

    /// Cart the session starts with.
    #[serde(default)]
    pub cart: CartConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Settings handed to the domain crate.
    pub fn storefront(&self) -> StorefrontConfig {
        StorefrontConfig {
            pricing: self.pricing.clone(),
            home: self.home.clone(),
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Starting cart contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartConfig {
    #[serde(default = "default_cart_lines")]
    pub lines: Vec<CartLineSpec>,
}

fn default_cart_lines() -> Vec<CartLineSpec> {
    vec![CartLineSpec::new("1", 1), CartLineSpec::new("4", 2)]
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            lines: default_cart_lines(),
        }
    }
}

/// A `product:quantity` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineSpec {
    pub product: ProductId,
    pub quantity: i64,
}

impl CartLineSpec {
    pub fn new(product: impl Into<ProductId>, quantity: i64) -> Self {
        Self {
            product: product.into(),
            quantity,
        }
    }
}

impl FromStr for CartLineSpec {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (product, quantity) = match s.split_once(':') {
            Some((product, quantity)) => {
                let quantity = quantity
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid quantity in '{}'", s))?;
                (product.trim(), quantity)
            }
            None => (s.trim(), 1),
        };
        if product.is_empty() {
            bail!("Missing product id in '{}'", s);
        }
        Ok(Self::new(product, quantity))
    }
}

impl fmt::Display for CartLineSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.product, self.quantity)
    }
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    r#"# Storefront configuration

[pricing]
shipping_flat_rate = "5.99"
tax_rate = "0.07"
currency = "USD"

[home]
featured_count = 4
rotation_interval_ms = 5000

[cart]
lines = [
    { product = "1", quantity = 1 },
    { product = "4", quantity = 2 },
]
"#
    .to_string()
}
