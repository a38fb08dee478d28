//! Field-level validation outcomes shared by every form.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A form field that can fail validation.
///
/// Variants are declared in on-screen order so errors iterate the way a
/// form reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    // Shipping
    FirstName,
    LastName,
    Address,
    Apartment,
    City,
    State,
    ZipCode,
    Phone,
    Email,
    // Payment
    CardNumber,
    NameOnCard,
    Expiry,
    Cvc,
    // Seller application
    Name,
    BusinessName,
    Website,
    Categories,
    ProductDescription,
}

impl Field {
    /// Label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Address => "Address",
            Field::Apartment => "Apartment, suite, etc.",
            Field::City => "City",
            Field::State => "State",
            Field::ZipCode => "ZIP Code",
            Field::Phone => "Phone",
            Field::Email => "Email",
            Field::CardNumber => "Card Number",
            Field::NameOnCard => "Name on Card",
            Field::Expiry => "Expiry Date",
            Field::Cvc => "CVC",
            Field::Name => "Your Name",
            Field::BusinessName => "Business Name",
            Field::Website => "Website",
            Field::Categories => "Product Categories",
            Field::ProductDescription => "Product Description",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// The field is required but empty.
    Required,
    /// The field has a value of the wrong shape.
    InvalidFormat,
}

impl FieldErrorKind {
    pub fn describe(&self) -> &'static str {
        match self {
            FieldErrorKind::Required => "is required",
            FieldErrorKind::InvalidFormat => "is not valid",
        }
    }
}

/// The set of field errors produced by validating one form.
///
/// An empty set means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, FieldErrorKind>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error; the first error recorded for a field wins.
    pub fn add(&mut self, field: Field, kind: FieldErrorKind) {
        self.0.entry(field).or_insert(kind);
    }

    /// Record `Required` when `value` is empty or whitespace.
    pub fn require(&mut self, field: Field, value: &str) {
        if is_blank(value) {
            self.add(field, FieldErrorKind::Required);
        }
    }

    /// Require an email-shaped value.
    pub fn require_email(&mut self, field: Field, value: &str) {
        if is_blank(value) {
            self.add(field, FieldErrorKind::Required);
        } else if !looks_like_email(value) {
            self.add(field, FieldErrorKind::InvalidFormat);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn get(&self, field: Field) -> Option<FieldErrorKind> {
        self.0.get(&field).copied()
    }

    /// Errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldErrorKind)> + '_ {
        self.0.iter().map(|(field, kind)| (*field, *kind))
    }

    /// Convert into a `Result`, `Ok` when no errors were recorded.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, kind)| format!("{} {}", field.label(), kind.describe()))
            .collect();
        f.write_str(&parts.join(", "))
    }
}

/// True when the value is empty or only whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// A loose `local@domain.tld` check, the same bar a browser email input sets.
fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .map(|(host, tld)| !host.is_empty() && !tld.is_empty())
                    .unwrap_or(false)
        }
        None => false,
    }
}
