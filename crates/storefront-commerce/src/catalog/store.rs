//! Read-only catalog store and the sample data set.

use crate::catalog::{Category, Product};
use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use std::sync::OnceLock;

/// The product catalog.
///
/// Built once and never mutated; lookups borrow from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// The process-wide sample catalog.
    pub fn sample() -> &'static Catalog {
        static SAMPLE: OnceLock<Catalog> = OnceLock::new();
        SAMPLE.get_or_init(|| Catalog::new(sample_products(), sample_categories()))
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All categories in catalog order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a product by id.
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a category by id.
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Display name of a product's category, falling back to the raw id.
    pub fn category_name<'a>(&'a self, id: &'a CategoryId) -> &'a str {
        self.category(id).map(|c| c.name.as_str()).unwrap_or(id.as_str())
    }

    /// The first `limit` products, as shown on the home page.
    pub fn featured(&self, limit: usize) -> &[Product] {
        &self.products[..limit.min(self.products.len())]
    }

    /// Other products in the same category, in catalog order.
    pub fn related(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect()
    }

    /// Number of products in a category.
    pub fn category_size(&self, id: &CategoryId) -> usize {
        self.products.iter().filter(|p| &p.category == id).count()
    }
}

fn sample_products() -> Vec<Product> {
    vec![
        Product::new("1", "Modern Laptop Pro", "electronics", Money::from_cents(129_999))
            .with_image("https://images.unsplash.com/photo-1496181133206-80ce9b88a853?q=80&w=500")
            .with_description("High-performance laptop with the latest technology for professionals.")
            .with_rating(4.8),
        Product::new("2", "Wireless Noise-Cancelling Headphones", "electronics", Money::from_cents(24_999))
            .with_image("https://images.unsplash.com/photo-1505740420928-5e560c06d30e?q=80&w=500")
            .with_description("Premium headphones with active noise cancellation for immersive sound experience.")
            .with_rating(4.6),
        Product::new("3", "Smart Watch Series 5", "electronics", Money::from_cents(34_999))
            .with_image("https://images.unsplash.com/photo-1579586337278-3befd40fd17a?q=80&w=500")
            .with_description("Advanced smartwatch with health tracking, GPS and smartphone connectivity.")
            .with_rating(4.5),
        Product::new("4", "Premium Coffee Maker", "home", Money::from_cents(12_999))
            .with_image("https://images.unsplash.com/photo-1510017803434-a899398421b3?q=80&w=500")
            .with_description("Programmable coffee maker that brews the perfect cup every time.")
            .with_rating(4.4),
        Product::new("5", "Modern Floor Lamp", "home", Money::from_cents(8_999))
            .with_image("https://images.unsplash.com/photo-1513506003901-1e6a229e2d15?q=80&w=500")
            .with_description("Elegant floor lamp with adjustable brightness for your living space.")
            .with_rating(4.3),
        Product::new("6", "Cotton Lounge Chair", "furniture", Money::from_cents(49_999))
            .with_image("https://images.unsplash.com/photo-1598300042247-d088f8ab3a91?q=80&w=500")
            .with_description("Comfortable lounge chair with ergonomic design and premium materials.")
            .with_rating(4.7)
            .with_in_stock(false),
        Product::new("7", "Designer Dining Table", "furniture", Money::from_cents(79_999))
            .with_image("https://images.unsplash.com/photo-1577140917170-285929fb55b7?q=80&w=500")
            .with_description("Modern dining table that seats up to 6 people, perfect for family gatherings.")
            .with_rating(4.5),
        Product::new("8", "Casual Cotton T-Shirt", "clothing", Money::from_cents(2_999))
            .with_image("https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?q=80&w=500")
            .with_description("Comfortable cotton t-shirt, perfect for everyday wear.")
            .with_rating(4.2),
    ]
}

fn sample_categories() -> Vec<Category> {
    vec![
        Category::new(
            "electronics",
            "Electronics",
            "https://images.unsplash.com/photo-1526738549149-8e07eca6c147?q=80&w=500",
        ),
        Category::new(
            "home",
            "Home & Kitchen",
            "https://images.unsplash.com/photo-1551298370-9d3d53740c72?q=80&w=500",
        ),
        Category::new(
            "furniture",
            "Furniture",
            "https://images.unsplash.com/photo-1555041469-a586c61ea9bc?q=80&w=500",
        ),
        Category::new(
            "clothing",
            "Clothing",
            "https://images.unsplash.com/photo-1523381294911-8d3cead13475?q=80&w=500",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_shape() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.products().len(), 8);
        assert_eq!(catalog.categories().len(), 4);
        for product in catalog.products() {
            assert!(catalog.category(&product.category).is_some(), "{}", product.id);
        }
    }

    #[test]
    fn test_product_lookup() {
        let catalog = Catalog::sample();
        let laptop = catalog.product(&ProductId::new("1")).unwrap();
        assert_eq!(laptop.name, "Modern Laptop Pro");
        assert_eq!(laptop.price, Money::from_cents(129_999));
        assert!(catalog.product(&ProductId::new("99")).is_none());
    }

    #[test]
    fn test_featured_is_catalog_prefix() {
        let catalog = Catalog::sample();
        let ids: Vec<&str> = catalog.featured(4).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
        assert_eq!(catalog.featured(100).len(), 8);
    }

    #[test]
    fn test_related_excludes_self() {
        let catalog = Catalog::sample();
        let watch = catalog.product(&ProductId::new("3")).unwrap();
        let ids: Vec<&str> = catalog.related(watch, 4).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);

        let shirt = catalog.product(&ProductId::new("8")).unwrap();
        assert!(catalog.related(shirt, 4).is_empty());
    }

    #[test]
    fn test_category_name_falls_back_to_id() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.category_name(&CategoryId::new("home")), "Home & Kitchen");
        let unknown = CategoryId::new("garden");
        assert_eq!(catalog.category_name(&unknown), "garden");
    }

    #[test]
    fn test_only_the_lounge_chair_is_out_of_stock() {
        let out: Vec<&str> = Catalog::sample()
            .products()
            .iter()
            .filter(|p| !p.in_stock)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(out, vec!["6"]);
    }
}
