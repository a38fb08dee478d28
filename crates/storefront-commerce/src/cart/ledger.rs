//! The session cart.

use crate::cart::{CartLineView, CartTotals};
use crate::catalog::Catalog;
use crate::config::PricingConfig;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One (product, quantity) pair in the cart.
///
/// `quantity` is always positive; a line that would drop to zero is removed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// What a cart mutation did to a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineChange {
    Inserted,
    Updated,
    Removed,
    /// Nothing changed (e.g. removing a line that was not there).
    Unchanged,
}

/// A shopping cart for one browsing session.
///
/// Product ids are not checked on write; unknown ids are dropped when the
/// totals are computed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from existing lines, folding duplicates and dropping
    /// non-positive quantities.
    pub fn from_lines(lines: impl IntoIterator<Item = (ProductId, i64)>) -> Self {
        let mut cart = Self::new();
        for (product_id, quantity) in lines {
            cart.add(product_id, quantity);
        }
        cart
    }

    /// Set a line's quantity, inserting the line if needed.
    ///
    /// A quantity of zero or less removes the line.
    pub fn add_or_update(&mut self, product_id: ProductId, quantity: i64) -> LineChange {
        if quantity <= 0 {
            return self.remove(&product_id);
        }

        let change = if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity;
            LineChange::Updated
        } else {
            self.lines.push(CartLine {
                product_id: product_id.clone(),
                quantity,
            });
            LineChange::Inserted
        };

        tracing::debug!(product_id = %product_id, quantity, ?change, "cart line set");
        change
    }

    /// Add `quantity` units of a product on top of whatever is already in
    /// the cart. Non-positive quantities are ignored.
    pub fn add(&mut self, product_id: ProductId, quantity: i64) -> LineChange {
        if quantity <= 0 {
            return LineChange::Unchanged;
        }
        let current = self.quantity_of(&product_id);
        self.add_or_update(product_id, current.saturating_add(quantity))
    }

    /// Add one unit.
    pub fn increment(&mut self, product_id: &ProductId) -> LineChange {
        self.add(product_id.clone(), 1)
    }

    /// Take one unit away; the line disappears when it reaches zero.
    pub fn decrement(&mut self, product_id: &ProductId) -> LineChange {
        match self.quantity_of(product_id) {
            0 => LineChange::Unchanged,
            current => self.add_or_update(product_id.clone(), current - 1),
        }
    }

    /// Remove a line. Removing an absent line is a no-op.
    pub fn remove(&mut self, product_id: &ProductId) -> LineChange {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.product_id != product_id);
        if self.lines.len() < len_before {
            tracing::debug!(product_id = %product_id, "cart line removed");
            LineChange::Removed
        } else {
            LineChange::Unchanged
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        tracing::debug!(lines = self.lines.len(), "cart cleared");
        self.lines.clear();
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Quantity of a product in the cart, zero when absent.
    pub fn quantity_of(&self, product_id: &ProductId) -> i64 {
        self.lines
            .iter()
            .find(|l| &l.product_id == product_id)
            .map(|l| l.quantity)
            .unwrap_or(0)
    }

    /// Total units across all lines (the navbar badge).
    pub fn item_count(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |acc, l| acc.saturating_add(l.quantity))
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Compute the totals snapshot against a catalog.
    ///
    /// Lines whose product is missing from the catalog contribute nothing
    /// and are left out of the line views.
    pub fn compute_totals(&self, catalog: &Catalog, pricing: &PricingConfig) -> CartTotals {
        let mut lines = Vec::with_capacity(self.lines.len());
        for line in &self.lines {
            match catalog.product(&line.product_id) {
                Some(product) => lines.push(CartLineView::new(product, line.quantity)),
                None => {
                    tracing::warn!(product_id = %line.product_id, "dropping cart line for unknown product");
                }
            }
        }

        let subtotal: Money = lines.iter().map(|l| l.line_total).sum();
        CartTotals::from_subtotal(lines, subtotal, pricing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ProductId {
        ProductId::new(s)
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_or_update_inserts_then_overwrites() {
        let mut cart = Cart::new();
        assert_eq!(cart.add_or_update(id("1"), 2), LineChange::Inserted);
        assert_eq!(cart.add_or_update(id("1"), 5), LineChange::Updated);
        assert_eq!(cart.quantity_of(&id("1")), 5);
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_non_positive_quantity_removes_line() {
        for q in [0, -1, -100] {
            let mut cart = Cart::from_lines([(id("1"), 3)]);
            assert_eq!(cart.add_or_update(id("1"), q), LineChange::Removed);
            assert!(cart.is_empty(), "quantity {q}");
        }
    }

    #[test]
    fn test_non_positive_quantity_on_absent_line_is_noop() {
        let mut cart = Cart::new();
        assert_eq!(cart.add_or_update(id("1"), 0), LineChange::Unchanged);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_unknown_product_is_accepted() {
        let mut cart = Cart::new();
        assert_eq!(cart.add_or_update(id("nope"), 1), LineChange::Inserted);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_add_accumulates() {
        let mut cart = Cart::new();
        cart.add(id("4"), 1);
        cart.add(id("4"), 2);
        assert_eq!(cart.quantity_of(&id("4")), 3);
        assert_eq!(cart.add(id("4"), 0), LineChange::Unchanged);
        assert_eq!(cart.quantity_of(&id("4")), 3);
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut cart = Cart::from_lines([(id("1"), 1)]);
        cart.increment(&id("1"));
        assert_eq!(cart.quantity_of(&id("1")), 2);
        cart.decrement(&id("1"));
        cart.decrement(&id("1"));
        assert!(cart.is_empty());
        assert_eq!(cart.decrement(&id("1")), LineChange::Unchanged);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::from_lines([(id("1"), 1), (id("2"), 1)]);
        assert_eq!(cart.remove(&id("1")), LineChange::Removed);
        assert_eq!(cart.remove(&id("1")), LineChange::Unchanged);
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_item_count_saturates() {
        let mut cart = Cart::from_lines([(id("1"), i64::MAX - 1), (id("4"), 2)]);
        assert_eq!(cart.item_count(), i64::MAX);

        let totals = cart.compute_totals(Catalog::sample(), &PricingConfig::default());
        assert_eq!(totals.item_count(), i64::MAX);

        cart.clear();
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::from_lines([(id("1"), 1), (id("2"), 4)]);
        assert_eq!(cart.item_count(), 5);
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_line_order_is_insertion_order() {
        let mut cart = Cart::new();
        cart.add_or_update(id("4"), 1);
        cart.add_or_update(id("1"), 1);
        cart.add_or_update(id("4"), 3);
        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ids, vec!["4", "1"]);
    }
}
