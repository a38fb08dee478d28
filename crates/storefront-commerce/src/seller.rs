//! Seller application form.

use crate::validation::{Field, ValidationErrors};
use crate::CommerceError;
use serde::{Deserialize, Serialize};

/// Application to sell on the storefront.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SellerApplication {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub business_name: String,
    /// Optional.
    pub website: String,
    /// Free text, e.g. "Electronics, Clothing, Home".
    pub categories: String,
    pub product_description: String,
}

/// Confirmation shown once an application is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationSubmitted {
    pub title: &'static str,
    pub description: &'static str,
}

impl SellerApplication {
    /// Fields in form order.
    pub const FIELDS: [Field; 7] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::BusinessName,
        Field::Website,
        Field::Categories,
        Field::ProductDescription,
    ];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_optional(field: Field) -> bool {
        field == Field::Website
    }

    /// Set a field by key. Fields outside this form are ignored.
    pub fn with_field(mut self, field: Field, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::BusinessName => self.business_name = value,
            Field::Website => self.website = value,
            Field::Categories => self.categories = value,
            Field::ProductDescription => self.product_description = value,
            _ => {}
        }
        self
    }

    pub fn value(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => Some(&self.name),
            Field::Email => Some(&self.email),
            Field::Phone => Some(&self.phone),
            Field::BusinessName => Some(&self.business_name),
            Field::Website => Some(&self.website),
            Field::Categories => Some(&self.categories),
            Field::ProductDescription => Some(&self.product_description),
            _ => None,
        }
    }

    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.require(Field::Name, &self.name);
        errors.require_email(Field::Email, &self.email);
        errors.require(Field::Phone, &self.phone);
        errors.require(Field::BusinessName, &self.business_name);
        errors.require(Field::Categories, &self.categories);
        errors.require(Field::ProductDescription, &self.product_description);
        errors
    }

    /// Submit the application.
    pub fn submit(&self) -> Result<ApplicationSubmitted, CommerceError> {
        self.validate().into_result()?;
        tracing::info!(business = %self.business_name, "seller application submitted");
        Ok(ApplicationSubmitted {
            title: "Application submitted successfully!",
            description: "We'll review your application and get back to you shortly.",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldErrorKind;

    fn complete() -> SellerApplication {
        SellerApplication::new()
            .with_field(Field::Name, "Ada Lovelace")
            .with_field(Field::Email, "ada@example.com")
            .with_field(Field::Phone, "555-0199")
            .with_field(Field::BusinessName, "Analytical Goods")
            .with_field(Field::Categories, "Electronics")
            .with_field(Field::ProductDescription, "Calculating engines.")
    }

    #[test]
    fn test_website_is_optional() {
        let app = complete();
        assert!(app.website.is_empty());
        assert!(app.validate().is_empty());
        assert!(SellerApplication::is_optional(Field::Website));
    }

    #[test]
    fn test_details_without_website_parse() {
        let json = r#"{
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": "555-0199",
            "businessName": "Analytical Goods",
            "categories": "Electronics",
            "productDescription": "Calculating engines."
        }"#;
        let app: SellerApplication = serde_json::from_str(json).unwrap();
        assert_eq!(app, complete());
        assert!(app.submit().is_ok());
    }

    #[test]
    fn test_partial_details_reach_validation() {
        let app: SellerApplication = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();
        assert!(app.validate().contains(Field::Email));
    }

    #[test]
    fn test_blank_fields_are_required() {
        let app = complete().with_field(Field::BusinessName, "   ");
        let errors = app.validate();
        assert_eq!(errors.get(Field::BusinessName), Some(FieldErrorKind::Required));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_email_shape_checked() {
        let app = complete().with_field(Field::Email, "ada-at-example");
        assert_eq!(
            app.validate().get(Field::Email),
            Some(FieldErrorKind::InvalidFormat)
        );
    }

    #[test]
    fn test_foreign_fields_ignored() {
        let app = complete().with_field(Field::CardNumber, "4242");
        assert_eq!(app, complete());
        assert_eq!(app.value(Field::CardNumber), None);
    }

    #[test]
    fn test_submit() {
        let submitted = complete().submit().unwrap();
        assert_eq!(submitted.title, "Application submitted successfully!");

        let err = SellerApplication::new().submit().unwrap_err();
        assert_eq!(err.validation_errors().map(|e| e.len()), Some(6));
    }
}
