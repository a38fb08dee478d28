//! Commerce error types.
//!
//! Unknown product or order ids are not errors: lookups return `Option`
//! and callers render a fallback.

use crate::validation::ValidationErrors;
use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// A form failed validation; the step did not change.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition {
        from: &'static str,
        to: &'static str,
    },

    /// Order placement attempted with nothing in the cart.
    #[error("Cannot place an order with an empty cart")]
    EmptyCart,

    /// Unrecognised order status string.
    #[error("Invalid order status: {0}")]
    InvalidStatus(String),
}

impl From<ValidationErrors> for CommerceError {
    fn from(errors: ValidationErrors) -> Self {
        CommerceError::Validation(errors)
    }
}

impl CommerceError {
    /// Field errors carried by a validation failure.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            CommerceError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
