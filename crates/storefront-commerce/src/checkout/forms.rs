//! Checkout form records.
//!
//! Forms are immutable values: every setter consumes the record and returns
//! an updated copy, and validation is a pure function of the record.

use crate::validation::{Field, ValidationErrors};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shipping details collected in the first checkout step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShippingForm {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    /// Apartment, suite, etc. Optional.
    pub apartment: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: String,
    pub email: String,
}

impl ShippingForm {
    /// Fields in on-screen order.
    pub const FIELDS: [Field; 9] = [
        Field::FirstName,
        Field::LastName,
        Field::Address,
        Field::Apartment,
        Field::City,
        Field::State,
        Field::ZipCode,
        Field::Phone,
        Field::Email,
    ];

    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a field may be left blank.
    pub fn is_optional(field: Field) -> bool {
        field == Field::Apartment
    }

    /// Return a copy with one field replaced.
    ///
    /// Fields that do not belong to this form leave it unchanged.
    pub fn with_field(mut self, field: Field, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Address => self.address = value,
            Field::Apartment => self.apartment = value,
            Field::City => self.city = value,
            Field::State => self.state = value,
            Field::ZipCode => self.zip_code = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            _ => {}
        }
        self
    }

    /// Current value of a field on this form.
    pub fn value(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Address => &self.address,
            Field::Apartment => &self.apartment,
            Field::City => &self.city,
            Field::State => &self.state,
            Field::ZipCode => &self.zip_code,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            _ => return None,
        };
        Some(value.as_str())
    }

    pub fn with_first_name(self, value: impl Into<String>) -> Self {
        self.with_field(Field::FirstName, value)
    }

    pub fn with_last_name(self, value: impl Into<String>) -> Self {
        self.with_field(Field::LastName, value)
    }

    pub fn with_address(self, value: impl Into<String>) -> Self {
        self.with_field(Field::Address, value)
    }

    pub fn with_apartment(self, value: impl Into<String>) -> Self {
        self.with_field(Field::Apartment, value)
    }

    pub fn with_city(self, value: impl Into<String>) -> Self {
        self.with_field(Field::City, value)
    }

    pub fn with_state(self, value: impl Into<String>) -> Self {
        self.with_field(Field::State, value)
    }

    pub fn with_zip_code(self, value: impl Into<String>) -> Self {
        self.with_field(Field::ZipCode, value)
    }

    pub fn with_phone(self, value: impl Into<String>) -> Self {
        self.with_field(Field::Phone, value)
    }

    pub fn with_email(self, value: impl Into<String>) -> Self {
        self.with_field(Field::Email, value)
    }

    /// Validate every required field.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.require(Field::FirstName, &self.first_name);
        errors.require(Field::LastName, &self.last_name);
        errors.require(Field::Address, &self.address);
        errors.require(Field::City, &self.city);
        errors.require(Field::State, &self.state);
        errors.require(Field::ZipCode, &self.zip_code);
        errors.require(Field::Phone, &self.phone);
        errors.require_email(Field::Email, &self.email);
        errors
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Address block for the review step.
    pub fn address_lines(&self) -> Vec<String> {
        let mut lines = vec![self.full_name(), self.address.clone()];
        if !self.apartment.trim().is_empty() {
            lines.push(self.apartment.clone());
        }
        lines.push(format!("{}, {} {}", self.city, self.state, self.zip_code));
        lines.push(self.phone.clone());
        lines.push(self.email.clone());
        lines
    }
}

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    BankTransfer,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::CreditCard, PaymentMethod::BankTransfer];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit-card",
            PaymentMethod::BankTransfer => "bank-transfer",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit / Debit Card",
            PaymentMethod::BankTransfer => "Bank Transfer",
        }
    }
}

/// Card fields, only required when paying by card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardDetails {
    pub number: String,
    pub name: String,
    pub expiry: String,
    pub cvc: String,
}

impl CardDetails {
    pub const FIELDS: [Field; 4] = [Field::CardNumber, Field::NameOnCard, Field::Expiry, Field::Cvc];

    /// Return a copy with one field replaced.
    ///
    /// Fields that do not belong to the card leave it unchanged.
    pub fn with_field(mut self, field: Field, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            Field::CardNumber => self.number = value,
            Field::NameOnCard => self.name = value,
            Field::Expiry => self.expiry = value,
            Field::Cvc => self.cvc = value,
            _ => {}
        }
        self
    }

    pub fn value(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::CardNumber => &self.number,
            Field::NameOnCard => &self.name,
            Field::Expiry => &self.expiry,
            Field::Cvc => &self.cvc,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Last four characters of the card number, ignoring spaces.
    pub fn last_four(&self) -> String {
        let compact: Vec<char> = self.number.chars().filter(|c| !c.is_whitespace()).collect();
        let start = compact.len().saturating_sub(4);
        compact[start..].iter().collect()
    }

    fn validate_into(&self, errors: &mut ValidationErrors) {
        errors.require(Field::CardNumber, &self.number);
        errors.require(Field::NameOnCard, &self.name);
        errors.require(Field::Expiry, &self.expiry);
        errors.require(Field::Cvc, &self.cvc);
    }
}

/// Payment step form.
///
/// Card details are kept when switching to bank transfer so switching back
/// does not lose them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentForm {
    pub method: PaymentMethod,
    pub card: CardDetails,
}

impl PaymentForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_method(mut self, method: PaymentMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_card_field(mut self, field: Field, value: impl Into<String>) -> Self {
        self.card = self.card.with_field(field, value);
        self
    }

    pub fn with_card_number(self, value: impl Into<String>) -> Self {
        self.with_card_field(Field::CardNumber, value)
    }

    pub fn with_name_on_card(self, value: impl Into<String>) -> Self {
        self.with_card_field(Field::NameOnCard, value)
    }

    pub fn with_expiry(self, value: impl Into<String>) -> Self {
        self.with_card_field(Field::Expiry, value)
    }

    pub fn with_cvc(self, value: impl Into<String>) -> Self {
        self.with_card_field(Field::Cvc, value)
    }

    /// Fields the selected method requires.
    pub fn required_fields(&self) -> &'static [Field] {
        match self.method {
            PaymentMethod::CreditCard => &CardDetails::FIELDS,
            PaymentMethod::BankTransfer => &[],
        }
    }

    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        match self.method {
            PaymentMethod::CreditCard => self.card.validate_into(&mut errors),
            PaymentMethod::BankTransfer => {}
        }
        errors
    }

    /// What the review step shows for the chosen method.
    pub fn summary(&self) -> PaymentSummary {
        match self.method {
            PaymentMethod::CreditCard => PaymentSummary::CreditCard {
                last_four: self.card.last_four(),
            },
            PaymentMethod::BankTransfer => PaymentSummary::BankTransfer,
        }
    }
}

/// Payment line on the review step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "kebab-case")]
pub enum PaymentSummary {
    CreditCard { last_four: String },
    BankTransfer,
}

impl fmt::Display for PaymentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentSummary::CreditCard { last_four } => {
                write!(f, "Credit Card ending in {}", last_four)
            }
            PaymentSummary::BankTransfer => f.write_str("Bank Transfer"),
        }
    }
}

/// Details shown when bank transfer is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BankTransferInstructions {
    pub account_number: &'static str,
    pub bank: &'static str,
    /// The customer's email address.
    pub reference: String,
}

impl BankTransferInstructions {
    pub fn for_shipping(shipping: &ShippingForm) -> Self {
        Self {
            account_number: "1234567890",
            bank: "Example Bank",
            reference: shipping.email.clone(),
        }
    }
}
