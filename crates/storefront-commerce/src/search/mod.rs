//! Search module.
//!
//! Contains the product listing filter.

mod filter;

pub use filter::{ProductFilter, PRICE_SLIDER_MAX};
