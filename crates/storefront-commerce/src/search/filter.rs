//! Product listing filter.

use crate::catalog::Product;
use crate::ids::CategoryId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Upper bound of the price slider, in whole dollars.
pub const PRICE_SLIDER_MAX: i64 = 1500;

/// Filter over the product listing.
///
/// A product matches when its name or description contains the search term
/// (case-insensitive), it is in the selected category (if any), and its
/// price lies within the inclusive range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    pub search: String,
    pub category: Option<CategoryId>,
    pub price_min: Money,
    pub price_max: Money,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            price_min: Money::zero(),
            price_max: Money::from_cents(PRICE_SLIDER_MAX * 100),
        }
    }
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<CategoryId>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_price_range(mut self, min: Money, max: Money) -> Self {
        self.price_min = min;
        self.price_max = max;
        self
    }

    /// Select a category, or deselect it if it is already selected.
    pub fn toggle_category(&mut self, category: &CategoryId) {
        if self.category.as_ref() == Some(category) {
            self.category = None;
        } else {
            self.category = Some(category.clone());
        }
    }

    /// Restore the unfiltered state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether anything narrows the listing beyond the defaults.
    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }

    pub fn matches(&self, product: &Product) -> bool {
        product.matches_text(&self.search)
            && self.category.as_ref().map_or(true, |c| &product.category == c)
            && product.price >= self.price_min
            && product.price <= self.price_max
    }

    /// Matching products, in their original order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let matched: Vec<&Product> = products.iter().filter(|p| self.matches(p)).collect();
        tracing::debug!(
            search = %self.search,
            category = ?self.category.as_ref().map(CategoryId::as_str),
            matched = matched.len(),
            total = products.len(),
            "product filter applied"
        );
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn names(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_default_matches_everything() {
        let catalog = Catalog::sample();
        let filter = ProductFilter::default();
        assert!(!filter.is_active());
        assert_eq!(filter.apply(catalog.products()).len(), catalog.products().len());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = Catalog::sample();
        let filter = ProductFilter::new().with_search("laptop");
        assert_eq!(names(&filter.apply(catalog.products())), vec!["Modern Laptop Pro"]);

        let upper = ProductFilter::new().with_search("LAPTOP");
        assert_eq!(upper.apply(catalog.products()).len(), 1);
    }

    #[test]
    fn test_search_covers_description() {
        let catalog = Catalog::sample();
        let filter = ProductFilter::new().with_search("noise cancellation");
        assert_eq!(
            names(&filter.apply(catalog.products())),
            vec!["Wireless Noise-Cancelling Headphones"]
        );
    }

    #[test]
    fn test_category_and_price_combine() {
        let catalog = Catalog::sample();
        let filter = ProductFilter::new()
            .with_category("electronics")
            .with_price_range(Money::from_cents(20_000), Money::from_cents(40_000));
        let ids: Vec<&str> = filter
            .apply(catalog.products())
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let catalog = Catalog::sample();
        let exact = Money::from_cents(8_999);
        let filter = ProductFilter::new().with_price_range(exact, exact);
        assert_eq!(names(&filter.apply(catalog.products())), vec!["Modern Floor Lamp"]);
    }

    #[test]
    fn test_empty_result_is_valid() {
        let catalog = Catalog::sample();
        let filter = ProductFilter::new().with_search("submarine");
        assert!(filter.apply(catalog.products()).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let catalog = Catalog::sample();
        let filter = ProductFilter::new()
            .with_search("modern")
            .with_price_range(Money::zero(), Money::from_cents(100_000));
        let once: Vec<Product> = filter
            .apply(catalog.products())
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<&Product> = filter.apply(&once);
        assert_eq!(once.iter().collect::<Vec<_>>(), twice);
    }

    #[test]
    fn test_toggle_and_clear() {
        let electronics = CategoryId::new("electronics");
        let mut filter = ProductFilter::new();

        filter.toggle_category(&electronics);
        assert_eq!(filter.category.as_ref(), Some(&electronics));
        assert!(filter.is_active());

        filter.toggle_category(&electronics);
        assert_eq!(filter.category, None);

        filter.toggle_category(&CategoryId::new("home"));
        filter.search = "lamp".to_string();
        filter.clear();
        assert_eq!(filter, ProductFilter::default());
    }
}
