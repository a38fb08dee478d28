//! Seller application.

use std::path::Path;

use anyhow::{Context as _, Result};
use dialoguer::Input;
use serde_json::json;
use storefront_commerce::seller::SellerApplication;
use storefront_commerce::CommerceError;

use super::SellerArgs;
use crate::context::Context;

/// Run the seller command.
pub async fn run(args: SellerArgs, ctx: &Context) -> Result<()> {
    ctx.output.header("Become a Seller");

    let submitted = match &args.details {
        Some(path) => {
            let result = load_application(Path::new(path))?.submit();
            if let Err(CommerceError::Validation(errors)) = &result {
                ctx.output.field_errors(errors);
            }
            result?
        }
        None => {
            let mut application = SellerApplication::new();
            loop {
                application = prompt_application(application)?;
                match application.submit() {
                    Ok(submitted) => break submitted,
                    Err(CommerceError::Validation(errors)) => {
                        ctx.output.warn("Please fix the following fields:");
                        ctx.output.field_errors(&errors);
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }
    };

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "submitted": submitted }));
        return Ok(());
    }

    ctx.output.success(submitted.title);
    ctx.output.line(submitted.description);
    Ok(())
}

fn load_application(path: &Path) -> Result<SellerApplication> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read application: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse application: {}", path.display()))
}

fn prompt_application(mut application: SellerApplication) -> Result<SellerApplication> {
    for field in SellerApplication::FIELDS {
        let label = if SellerApplication::is_optional(field) {
            format!("{} (optional)", field.label())
        } else {
            field.label().to_string()
        };
        let current = application.value(field).unwrap_or_default().to_string();
        let value = Input::<String>::new()
            .with_prompt(label)
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text()?;
        application = application.with_field(field, value);
    }
    Ok(application)
}
