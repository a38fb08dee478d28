//! Checkout wizard: shipping, payment, review.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context as _, Result};
use console::style;
use dialoguer::{Confirm, Input, Select};
use serde::Deserialize;
use serde_json::json;
use storefront_commerce::cart::Cart;
use storefront_commerce::checkout::{
    BankTransferInstructions, CheckoutFlow, CheckoutStep, PaymentForm, PaymentMethod,
    ShippingForm, StepState,
};
use storefront_commerce::validation::Field;
use storefront_commerce::CommerceError;

use super::cart::render_summary;
use super::CheckoutArgs;
use crate::context::Context;

/// Pause between placing the order and handing it off.
const HANDOFF_DELAY: Duration = Duration::from_millis(1500);

/// Shipping and payment details read from a file.
#[derive(Debug, Deserialize)]
struct CheckoutDetails {
    shipping: ShippingForm,
    #[serde(default)]
    payment: PaymentForm,
}

/// What the customer chose on the review step.
enum ReviewChoice {
    Place,
    Edit(CheckoutStep),
    Cancel,
}

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let cart = args.cart.to_cart(ctx);
    if cart.compute_totals(ctx.catalog, ctx.pricing()).is_empty() {
        return Err(CommerceError::EmptyCart.into());
    }

    let mut flow = CheckoutFlow::new();

    match &args.details {
        Some(path) => {
            let details = load_details(Path::new(path))?;
            fill_from_details(&mut flow, details, ctx)?;
            render_review(ctx, &flow, &cart);
            if !args.yes
                && !Confirm::new()
                    .with_prompt("Place order?")
                    .default(true)
                    .interact()?
            {
                ctx.output.warn("Checkout cancelled");
                return Ok(());
            }
        }
        None => {
            if !run_wizard(&mut flow, &cart, ctx)? {
                ctx.output.warn("Checkout cancelled");
                return Ok(());
            }
        }
    }

    place_order(&flow, &cart, ctx).await
}

fn load_details(path: &Path) -> Result<CheckoutDetails> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read checkout details: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse checkout details: {}", path.display()))
}

fn fill_from_details(flow: &mut CheckoutFlow, details: CheckoutDetails, ctx: &Context) -> Result<()> {
    flow.set_shipping(details.shipping)?;
    submit_or_report(ctx, flow.submit_shipping())?;
    flow.set_payment(details.payment)?;
    submit_or_report(ctx, flow.submit_payment())?;
    Ok(())
}

/// Print field errors before passing a failed submission on.
fn submit_or_report(
    ctx: &Context,
    result: Result<CheckoutStep, CommerceError>,
) -> Result<CheckoutStep> {
    if let Err(CommerceError::Validation(errors)) = &result {
        ctx.output.field_errors(errors);
    }
    Ok(result?)
}

/// Drive the flow interactively. Returns false if the customer cancels.
fn run_wizard(flow: &mut CheckoutFlow, cart: &Cart, ctx: &Context) -> Result<bool> {
    loop {
        if !ctx.output.is_json() {
            eprintln!("\n{}", step_header(flow));
        }

        match flow.step() {
            CheckoutStep::Shipping => {
                let form = prompt_shipping(flow.shipping().clone())?;
                flow.set_shipping(form)?;
                retry_on_invalid(ctx, flow.submit_shipping())?;
            }
            CheckoutStep::Payment => {
                let form = prompt_payment(flow.payment().clone(), flow.shipping(), ctx)?;
                flow.set_payment(form)?;
                if retry_on_invalid(ctx, flow.submit_payment())?.is_none() {
                    let back = Confirm::new()
                        .with_prompt("Go back to shipping?")
                        .default(false)
                        .interact()?;
                    if back {
                        flow.back()?;
                    }
                }
            }
            CheckoutStep::Review => {
                render_review(ctx, flow, cart);
                match prompt_review()? {
                    ReviewChoice::Place => return Ok(true),
                    ReviewChoice::Edit(step) => {
                        flow.edit(step)?;
                    }
                    ReviewChoice::Cancel => return Ok(false),
                }
            }
        }
    }
}

/// Field errors keep the customer on the step; anything else is fatal.
fn retry_on_invalid(
    ctx: &Context,
    result: Result<CheckoutStep, CommerceError>,
) -> Result<Option<CheckoutStep>> {
    match result {
        Ok(step) => Ok(Some(step)),
        Err(CommerceError::Validation(errors)) => {
            ctx.output.warn("Please fix the following fields:");
            ctx.output.field_errors(&errors);
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn prompt_field(field: Field, current: &str, optional: bool) -> Result<String> {
    let prompt = if optional {
        format!("{} (optional)", field.label())
    } else {
        field.label().to_string()
    };
    let value = Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

fn prompt_shipping(mut form: ShippingForm) -> Result<ShippingForm> {
    for field in ShippingForm::FIELDS {
        let current = form.value(field).unwrap_or_default().to_string();
        let value = prompt_field(field, &current, ShippingForm::is_optional(field))?;
        form = form.with_field(field, value);
    }
    Ok(form)
}

fn prompt_payment(mut form: PaymentForm, shipping: &ShippingForm, ctx: &Context) -> Result<PaymentForm> {
    let names: Vec<&str> = PaymentMethod::ALL.iter().map(|m| m.display_name()).collect();
    let current = PaymentMethod::ALL
        .iter()
        .position(|m| *m == form.method)
        .unwrap_or(0);
    let selection = Select::new()
        .with_prompt("Payment method")
        .items(&names)
        .default(current)
        .interact()?;
    form = form.with_method(PaymentMethod::ALL[selection]);

    for field in form.required_fields() {
        let current = form.card.value(*field).unwrap_or_default().to_string();
        let value = prompt_field(*field, &current, false)?;
        form = form.with_card_field(*field, value);
    }

    if form.method == PaymentMethod::BankTransfer {
        let instructions = BankTransferInstructions::for_shipping(shipping);
        ctx.output.info("Transfer the total to:");
        ctx.output.kv("Account", instructions.account_number);
        ctx.output.kv("Bank", instructions.bank);
        ctx.output.kv("Reference", &instructions.reference);
    }

    Ok(form)
}

fn prompt_review() -> Result<ReviewChoice> {
    let choices = ["Place Order", "Edit shipping", "Edit payment", "Cancel"];
    let selection = Select::new()
        .with_prompt("Review your order")
        .items(&choices)
        .default(0)
        .interact()?;
    Ok(match selection {
        0 => ReviewChoice::Place,
        1 => ReviewChoice::Edit(CheckoutStep::Shipping),
        2 => ReviewChoice::Edit(CheckoutStep::Payment),
        _ => ReviewChoice::Cancel,
    })
}

/// Progress header, e.g. `✓ Shipping  ● Payment  ○ Review`.
fn step_header(flow: &CheckoutFlow) -> String {
    flow.step_indicators()
        .iter()
        .map(|indicator| {
            let name = indicator.step.display_name();
            match indicator.state {
                StepState::Complete => format!("{} {}", style("✓").green(), name),
                StepState::Current => format!("{} {}", style("●").cyan(), style(name).bold()),
                StepState::Upcoming => format!("{} {}", style("○").dim(), style(name).dim()),
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn render_review(ctx: &Context, flow: &CheckoutFlow, cart: &Cart) {
    if ctx.output.is_json() {
        return;
    }
    let totals = flow.summary(cart, ctx.catalog, ctx.pricing());

    ctx.output.header("Shipping Information");
    for line in flow.shipping().address_lines() {
        ctx.output.line(&format!("  {}", line));
    }

    ctx.output.header("Payment Method");
    ctx.output.line(&format!("  {}", flow.payment().summary()));

    ctx.output.header("Order Items");
    for line in &totals.lines {
        ctx.output.table_row(
            &[
                &line.name,
                &format!("× {}", line.quantity),
                &ctx.money(line.line_total),
            ],
            &[40, 6, 12],
        );
    }
    render_summary(ctx, &totals);
}

async fn place_order(flow: &CheckoutFlow, cart: &Cart, ctx: &Context) -> Result<()> {
    let placed = flow.place_order(cart, ctx.catalog, ctx.pricing())?;
    let order_id = ctx.orders.next_order_id();

    let spinner = ctx.output.spinner("Placing order...");
    tokio::time::sleep(HANDOFF_DELAY).await;
    spinner.finish_and_clear();

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "orderId": order_id, "order": placed }));
        return Ok(());
    }

    ctx.output.success(placed.title);
    ctx.output.line(placed.description);
    ctx.output.kv("Order", order_id.as_str());
    ctx.output.kv("Total", &ctx.money(placed.totals.total));
    Ok(())
}
