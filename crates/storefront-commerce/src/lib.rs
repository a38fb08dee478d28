//! Storefront domain types and logic.
//!
//! This crate holds everything behind the storefront screens, with no I/O:
//!
//! - **Catalog**: Products and categories, with a static sample data set
//! - **Cart**: Session cart ledger and derived totals
//! - **Checkout**: Shipping, payment and review steps, order placement
//! - **Orders**: Order history, status notices and progress tracking
//! - **Search**: Product listing filter
//! - **Seller**: Seller application form
//! - **Carousel**: Timed rotation for the home page hero
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let catalog = Catalog::sample();
//! let pricing = PricingConfig::default();
//!
//! let mut cart = Cart::new();
//! cart.add_or_update(ProductId::new("1"), 1);
//! cart.add_or_update(ProductId::new("4"), 2);
//!
//! let totals = cart.compute_totals(catalog, &pricing);
//! assert_eq!(totals.subtotal.display_amount(), "1559.97");
//! assert_eq!(totals.total.display_amount(), "1675.16");
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;
pub mod validation;

pub mod carousel;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod orders;
pub mod search;
pub mod seller;

pub use config::{HomeConfig, PricingConfig, StorefrontConfig};
pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{HomeConfig, PricingConfig, StorefrontConfig};
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::validation::{Field, FieldErrorKind, ValidationErrors};

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product};

    // Cart
    pub use crate::cart::{Cart, CartLine, CartLineView, CartTotals, LineChange};

    // Checkout
    pub use crate::checkout::{
        BankTransferInstructions, CardDetails, CheckoutFlow, CheckoutStep, OrderPlaced,
        PaymentForm, PaymentMethod, PaymentSummary, ShippingForm, StepIndicator, StepState,
    };

    // Orders
    pub use crate::orders::{
        Order, OrderItem, OrderProgress, OrderRegistry, OrderStatus, StatusNotice,
    };

    // Search
    pub use crate::search::ProductFilter;

    // Seller
    pub use crate::seller::{ApplicationSubmitted, SellerApplication};

    // Carousel
    pub use crate::carousel::{Rotation, RotationTimer};
}
