//! Checkout flow state machine.

use crate::cart::{Cart, CartTotals};
use crate::catalog::Catalog;
use crate::checkout::{PaymentForm, PaymentSummary, ShippingForm};
use crate::config::PricingConfig;
use crate::validation::ValidationErrors;
use crate::CommerceError;
use serde::{Deserialize, Serialize};

/// Steps in the checkout flow.
///
/// Declaration order is flow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutStep {
    /// Shipping address and contact details.
    #[default]
    Shipping,
    /// Payment method.
    Payment,
    /// Order review before submission.
    Review,
}

impl CheckoutStep {
    pub const ALL: [CheckoutStep; 3] = [
        CheckoutStep::Shipping,
        CheckoutStep::Payment,
        CheckoutStep::Review,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "shipping",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Review => "review",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "Shipping",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Review => "Review",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Shipping => 1,
            CheckoutStep::Payment => 2,
            CheckoutStep::Review => 3,
        }
    }

    /// The step after this one, if any.
    pub fn next(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Shipping => Some(CheckoutStep::Payment),
            CheckoutStep::Payment => Some(CheckoutStep::Review),
            CheckoutStep::Review => None,
        }
    }

    /// The step before this one, if any.
    pub fn previous(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Shipping => None,
            CheckoutStep::Payment => Some(CheckoutStep::Shipping),
            CheckoutStep::Review => Some(CheckoutStep::Payment),
        }
    }
}

/// How a step is drawn in the progress header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    Complete,
    Current,
    Upcoming,
}

/// One entry of the progress header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepIndicator {
    pub step: CheckoutStep,
    pub state: StepState,
}

/// Confirmation emitted when the customer places the order.
///
/// Creating the order and navigating away are left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPlaced {
    pub totals: CartTotals,
    pub shipping: ShippingForm,
    pub payment: PaymentSummary,
    pub title: &'static str,
    pub description: &'static str,
}

/// Checkout flow state.
///
/// The flow only moves forward one step at a time, and only when the form
/// for the current step validates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutFlow {
    step: CheckoutStep,
    shipping: ShippingForm,
    payment: PaymentForm,
}

impl CheckoutFlow {
    /// Create a new checkout flow at the shipping step.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn shipping(&self) -> &ShippingForm {
        &self.shipping
    }

    pub fn payment(&self) -> &PaymentForm {
        &self.payment
    }

    /// Replace the shipping form. Only allowed on the shipping step.
    pub fn set_shipping(&mut self, form: ShippingForm) -> Result<(), CommerceError> {
        self.expect_step(CheckoutStep::Shipping, CheckoutStep::Shipping)?;
        self.shipping = form;
        Ok(())
    }

    /// Replace the payment form. Only allowed on the payment step.
    pub fn set_payment(&mut self, form: PaymentForm) -> Result<(), CommerceError> {
        self.expect_step(CheckoutStep::Payment, CheckoutStep::Payment)?;
        self.payment = form;
        Ok(())
    }

    /// Field errors for the form on the current step.
    pub fn current_errors(&self) -> ValidationErrors {
        match self.step {
            CheckoutStep::Shipping => self.shipping.validate(),
            CheckoutStep::Payment => self.payment.validate(),
            CheckoutStep::Review => ValidationErrors::new(),
        }
    }

    /// Submit the shipping form and move to payment.
    ///
    /// On validation failure the step does not change.
    pub fn submit_shipping(&mut self) -> Result<CheckoutStep, CommerceError> {
        self.expect_step(CheckoutStep::Shipping, CheckoutStep::Payment)?;
        self.advance_if_valid(self.shipping.validate(), CheckoutStep::Payment)
    }

    /// Submit the payment form and move to review.
    ///
    /// On validation failure the step does not change.
    pub fn submit_payment(&mut self) -> Result<CheckoutStep, CommerceError> {
        self.expect_step(CheckoutStep::Payment, CheckoutStep::Review)?;
        self.advance_if_valid(self.payment.validate(), CheckoutStep::Review)
    }

    /// Go back to an earlier step to edit it.
    ///
    /// Only strictly earlier steps are allowed.
    pub fn edit(&mut self, target: CheckoutStep) -> Result<CheckoutStep, CommerceError> {
        if target >= self.step {
            return Err(self.invalid_transition(target));
        }
        tracing::debug!(from = self.step.as_str(), to = target.as_str(), "checkout step edited");
        self.step = target;
        Ok(target)
    }

    /// Go back one step.
    pub fn back(&mut self) -> Result<CheckoutStep, CommerceError> {
        match self.step.previous() {
            Some(previous) => self.edit(previous),
            None => Err(CommerceError::InvalidCheckoutTransition {
                from: self.step.as_str(),
                to: "none",
            }),
        }
    }

    /// Progress header state for each step.
    pub fn step_indicators(&self) -> [StepIndicator; 3] {
        CheckoutStep::ALL.map(|step| StepIndicator {
            step,
            state: match step.cmp(&self.step) {
                std::cmp::Ordering::Less => StepState::Complete,
                std::cmp::Ordering::Equal => StepState::Current,
                std::cmp::Ordering::Greater => StepState::Upcoming,
            },
        })
    }

    /// Order summary computed from the live cart.
    pub fn summary(&self, cart: &Cart, catalog: &Catalog, pricing: &PricingConfig) -> CartTotals {
        cart.compute_totals(catalog, pricing)
    }

    /// Place the order from the review step.
    ///
    /// This does not change the step; the caller hands the confirmation to
    /// whatever creates the order and navigates away.
    pub fn place_order(
        &self,
        cart: &Cart,
        catalog: &Catalog,
        pricing: &PricingConfig,
    ) -> Result<OrderPlaced, CommerceError> {
        if self.step != CheckoutStep::Review {
            return Err(CommerceError::InvalidCheckoutTransition {
                from: self.step.as_str(),
                to: "submit",
            });
        }

        let totals = self.summary(cart, catalog, pricing);
        if totals.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        tracing::info!(
            items = totals.item_count(),
            total = %totals.total.display_amount(),
            payment = self.payment.method.as_str(),
            "order placed"
        );

        Ok(OrderPlaced {
            totals,
            shipping: self.shipping.clone(),
            payment: self.payment.summary(),
            title: "Order placed successfully!",
            description: "Check your email for order confirmation.",
        })
    }

    fn expect_step(&self, expected: CheckoutStep, to: CheckoutStep) -> Result<(), CommerceError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(self.invalid_transition(to))
        }
    }

    fn invalid_transition(&self, to: CheckoutStep) -> CommerceError {
        CommerceError::InvalidCheckoutTransition {
            from: self.step.as_str(),
            to: to.as_str(),
        }
    }

    fn advance_if_valid(
        &mut self,
        errors: ValidationErrors,
        next: CheckoutStep,
    ) -> Result<CheckoutStep, CommerceError> {
        if !errors.is_empty() {
            tracing::debug!(step = self.step.as_str(), errors = errors.len(), "checkout step rejected");
            return Err(CommerceError::Validation(errors));
        }
        tracing::debug!(from = self.step.as_str(), to = next.as_str(), "checkout step advanced");
        self.step = next;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::PaymentMethod;
    use crate::ids::ProductId;
    use crate::validation::Field;

    fn valid_shipping() -> ShippingForm {
        ShippingForm::new()
            .with_first_name("Jane")
            .with_last_name("Doe")
            .with_address("123 Main St")
            .with_city("Springfield")
            .with_state("IL")
            .with_zip_code("62701")
            .with_phone("555-0100")
            .with_email("jane@example.com")
    }

    fn flow_at_review() -> CheckoutFlow {
        let mut flow = CheckoutFlow::new();
        flow.set_shipping(valid_shipping()).unwrap();
        flow.submit_shipping().unwrap();
        flow.set_payment(PaymentForm::new().with_method(PaymentMethod::BankTransfer))
            .unwrap();
        flow.submit_payment().unwrap();
        flow
    }

    #[test]
    fn test_checkout_starts_at_shipping() {
        let flow = CheckoutFlow::new();
        assert_eq!(flow.step(), CheckoutStep::Shipping);
    }

    #[test]
    fn test_invalid_shipping_keeps_step() {
        let mut flow = CheckoutFlow::new();
        flow.set_shipping(valid_shipping().with_city("")).unwrap();

        let err = flow.submit_shipping().unwrap_err();
        let errors = err.validation_errors().unwrap();
        assert!(errors.contains(Field::City));
        assert_eq!(errors.len(), 1);
        assert_eq!(flow.step(), CheckoutStep::Shipping);
    }

    #[test]
    fn test_current_errors_follow_step() {
        let mut flow = CheckoutFlow::new();
        flow.set_shipping(valid_shipping().with_email("")).unwrap();
        assert!(flow.current_errors().contains(Field::Email));

        flow.set_shipping(valid_shipping()).unwrap();
        assert!(flow.current_errors().is_empty());
        flow.submit_shipping().unwrap();

        flow.set_payment(PaymentForm::new()).unwrap();
        assert!(flow.current_errors().contains(Field::CardNumber));

        assert!(flow_at_review().current_errors().is_empty());
    }

    #[test]
    fn test_happy_path_reaches_review() {
        let flow = flow_at_review();
        assert_eq!(flow.step(), CheckoutStep::Review);
    }

    #[test]
    fn test_card_payment_requires_details() {
        let mut flow = CheckoutFlow::new();
        flow.set_shipping(valid_shipping()).unwrap();
        flow.submit_shipping().unwrap();

        assert!(flow.submit_payment().is_err());
        assert_eq!(flow.step(), CheckoutStep::Payment);

        let card = PaymentForm::new()
            .with_card_number("4242 4242 4242 4242")
            .with_name_on_card("Jane Doe")
            .with_expiry("12/30")
            .with_cvc("123");
        flow.set_payment(card).unwrap();
        assert_eq!(flow.submit_payment().unwrap(), CheckoutStep::Review);
    }

    #[test]
    fn test_cannot_skip_forward() {
        let mut flow = CheckoutFlow::new();
        assert!(matches!(
            flow.submit_payment(),
            Err(CommerceError::InvalidCheckoutTransition { .. })
        ));
        assert!(flow.set_payment(PaymentForm::new()).is_err());
        assert!(flow.edit(CheckoutStep::Review).is_err());
        assert_eq!(flow.step(), CheckoutStep::Shipping);
    }

    #[test]
    fn test_back_from_payment() {
        let mut flow = CheckoutFlow::new();
        assert!(flow.back().is_err());
        flow.set_shipping(valid_shipping()).unwrap();
        flow.submit_shipping().unwrap();
        assert_eq!(flow.back().unwrap(), CheckoutStep::Shipping);
        // Form data survives going back.
        assert_eq!(flow.shipping().first_name, "Jane");
    }

    #[test]
    fn test_edit_from_review() {
        let mut flow = flow_at_review();
        assert_eq!(flow.edit(CheckoutStep::Payment).unwrap(), CheckoutStep::Payment);

        let mut flow = flow_at_review();
        assert_eq!(flow.edit(CheckoutStep::Shipping).unwrap(), CheckoutStep::Shipping);
        // Review again requires passing through payment.
        flow.submit_shipping().unwrap();
        assert_eq!(flow.step(), CheckoutStep::Payment);
    }

    #[test]
    fn test_forms_are_locked_outside_their_step() {
        let mut flow = flow_at_review();
        assert!(flow.set_shipping(ShippingForm::new()).is_err());
        assert_eq!(flow.shipping(), &valid_shipping());
    }

    #[test]
    fn test_step_indicators() {
        let mut flow = CheckoutFlow::new();
        flow.set_shipping(valid_shipping()).unwrap();
        flow.submit_shipping().unwrap();

        let states: Vec<StepState> = flow.step_indicators().iter().map(|i| i.state).collect();
        assert_eq!(
            states,
            vec![StepState::Complete, StepState::Current, StepState::Upcoming]
        );
    }

    #[test]
    fn test_place_order_uses_live_cart() {
        let flow = flow_at_review();
        let cart = Cart::from_lines([(ProductId::new("8"), 2)]);
        let placed = flow
            .place_order(&cart, Catalog::sample(), &PricingConfig::default())
            .unwrap();
        assert_eq!(placed.totals.subtotal.display_amount(), "59.98");
        assert_eq!(placed.payment, PaymentSummary::BankTransfer);
        assert_eq!(placed.title, "Order placed successfully!");
    }

    #[test]
    fn test_place_order_rejects_empty_cart() {
        let flow = flow_at_review();
        let err = flow
            .place_order(&Cart::new(), Catalog::sample(), &PricingConfig::default())
            .unwrap_err();
        assert_eq!(err, CommerceError::EmptyCart);
    }

    #[test]
    fn test_place_order_only_from_review() {
        let flow = CheckoutFlow::new();
        let cart = Cart::from_lines([(ProductId::new("1"), 1)]);
        assert!(flow
            .place_order(&cart, Catalog::sample(), &PricingConfig::default())
            .is_err());
    }
}
