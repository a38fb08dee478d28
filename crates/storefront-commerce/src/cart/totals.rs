//! Cart totals snapshot.

use crate::catalog::Product;
use crate::config::PricingConfig;
use crate::ids::ProductId;
use crate::money::Money;
use serde::Serialize;

/// A cart line resolved against the catalog.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub product_id: ProductId,
    pub name: String,
    pub image: String,
    pub quantity: i64,
    pub unit_price: Money,
    /// `unit_price * quantity`.
    pub line_total: Money,
}

impl CartLineView {
    pub fn new(product: &Product, quantity: i64) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            image: product.image.clone(),
            quantity,
            unit_price: product.price,
            line_total: product.price.multiply(quantity),
        }
    }
}

/// Complete pricing breakdown for a cart.
///
/// All amounts are unrounded; round only when displaying.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Resolved lines in cart order.
    pub lines: Vec<CartLineView>,
    /// Sum of line totals.
    pub subtotal: Money,
    /// Flat rate when the subtotal is positive, otherwise zero.
    pub shipping: Money,
    /// `subtotal * tax_rate`.
    pub tax: Money,
    /// `subtotal + shipping + tax`.
    pub total: Money,
}

impl CartTotals {
    /// Derive shipping, tax and total from a subtotal.
    pub fn from_subtotal(lines: Vec<CartLineView>, subtotal: Money, pricing: &PricingConfig) -> Self {
        let shipping = pricing.shipping_for(subtotal);
        let tax = pricing.tax_for(subtotal);
        Self {
            lines,
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }

    /// Totals for an empty cart.
    pub fn empty(pricing: &PricingConfig) -> Self {
        Self::from_subtotal(Vec::new(), Money::zero(), pricing)
    }

    /// Units across the displayed lines.
    pub fn item_count(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |acc, l| acc.saturating_add(l.quantity))
    }

    /// True when no line resolved to a product.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
