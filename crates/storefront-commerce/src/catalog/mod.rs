//! Product catalog module.
//!
//! Contains types for products and categories, plus the read-only store.

mod category;
mod product;
mod store;

pub use category::Category;
pub use product::{Product, MAX_RATING};
pub use store::Catalog;
