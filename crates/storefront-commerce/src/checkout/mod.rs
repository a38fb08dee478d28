//! Checkout module.
//!
//! Contains the checkout forms and the step-by-step flow.

mod flow;
mod forms;

pub use flow::{CheckoutFlow, CheckoutStep, OrderPlaced, StepIndicator, StepState};
pub use forms::{
    BankTransferInstructions, CardDetails, PaymentForm, PaymentMethod, PaymentSummary,
    ShippingForm,
};
