//! Product types.

use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Highest rating a product can carry.
pub const MAX_RATING: f64 = 5.0;

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Category this product belongs to.
    pub category: CategoryId,
    /// Unit price.
    pub price: Money,
    /// Image URL.
    pub image: String,
    /// Full description.
    pub description: String,
    /// Average rating, 0 to 5.
    pub rating: f64,
    /// Whether the product can currently be bought.
    pub in_stock: bool,
}

impl Product {
    /// Create a new in-stock product with no rating.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<CategoryId>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
            image: String::new(),
            description: String::new(),
            rating: 0.0,
            in_stock: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the rating, clamped to `0..=5`.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating.clamp(0.0, MAX_RATING);
        self
    }

    pub fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    /// Check if the product can be added to a cart.
    pub fn can_purchase(&self) -> bool {
        self.in_stock
    }

    /// Stock badge text.
    pub fn stock_label(&self) -> &'static str {
        if self.in_stock {
            "In Stock"
        } else {
            "Out of Stock"
        }
    }

    /// Number of whole stars to fill when rendering the rating.
    pub fn filled_stars(&self) -> u8 {
        self.rating.clamp(0.0, MAX_RATING).floor() as u8
    }

    /// Case-insensitive substring match against name or description.
    ///
    /// An empty term matches everything.
    pub fn matches_text(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lamp() -> Product {
        Product::new("5", "Modern Floor Lamp", "home", Money::from_cents(8999))
            .with_description("Elegant floor lamp with adjustable brightness for your living space.")
            .with_rating(4.3)
    }

    #[test]
    fn test_product_creation() {
        let product = lamp();
        assert_eq!(product.id.as_str(), "5");
        assert_eq!(product.category.as_str(), "home");
        assert!(product.can_purchase());
        assert_eq!(product.stock_label(), "In Stock");
    }

    #[test]
    fn test_out_of_stock() {
        let product = lamp().with_in_stock(false);
        assert!(!product.can_purchase());
        assert_eq!(product.stock_label(), "Out of Stock");
    }

    #[test]
    fn test_rating_is_clamped() {
        assert_eq!(lamp().with_rating(7.5).rating, 5.0);
        assert_eq!(lamp().with_rating(-1.0).rating, 0.0);
        assert_eq!(lamp().filled_stars(), 4);
    }

    #[test]
    fn test_text_match_is_case_insensitive() {
        let product = lamp();
        assert!(product.matches_text("LAMP"));
        assert!(product.matches_text("brightness"));
        assert!(product.matches_text(""));
        assert!(!product.matches_text("laptop"));
    }
}
