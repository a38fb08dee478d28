//! Pricing and storefront configuration.

use crate::money::{Currency, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Rates applied when computing cart totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Flat shipping charged on any non-empty cart.
    #[serde(default = "default_shipping_flat_rate")]
    pub shipping_flat_rate: Money,

    /// Tax rate applied to the subtotal (0.07 = 7%).
    #[serde(default = "default_tax_rate")]
    pub tax_rate: Decimal,

    /// Currency used for display.
    #[serde(default)]
    pub currency: Currency,
}

fn default_shipping_flat_rate() -> Money {
    Money::from_cents(599)
}

fn default_tax_rate() -> Decimal {
    Decimal::new(7, 2)
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            shipping_flat_rate: default_shipping_flat_rate(),
            tax_rate: default_tax_rate(),
            currency: Currency::default(),
        }
    }
}

impl PricingConfig {
    /// Shipping for a given subtotal: the flat rate when anything is being
    /// bought, otherwise zero.
    pub fn shipping_for(&self, subtotal: Money) -> Money {
        if subtotal.is_positive() {
            self.shipping_flat_rate
        } else {
            Money::zero()
        }
    }

    /// Tax on a subtotal, unrounded.
    pub fn tax_for(&self, subtotal: Money) -> Money {
        subtotal.multiply_rate(self.tax_rate)
    }

    /// Display an amount in the configured currency.
    pub fn display(&self, amount: Money) -> String {
        amount.display(self.currency)
    }
}

/// Home page settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeConfig {
    /// Number of featured products on the home page.
    #[serde(default = "default_featured_count")]
    pub featured_count: usize,

    /// Milliseconds between hero slide rotations.
    #[serde(default = "default_rotation_interval_ms")]
    pub rotation_interval_ms: u64,
}

fn default_featured_count() -> usize {
    4
}

fn default_rotation_interval_ms() -> u64 {
    5000
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            featured_count: default_featured_count(),
            rotation_interval_ms: default_rotation_interval_ms(),
        }
    }
}

impl HomeConfig {
    pub fn rotation_interval(&self) -> Duration {
        Duration::from_millis(self.rotation_interval_ms)
    }
}

/// Top-level storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub pricing: PricingConfig,

    #[serde(default)]
    pub home: HomeConfig,
}
