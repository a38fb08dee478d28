//! Cart contents and totals.

use anyhow::Result;
use storefront_commerce::cart::{Cart, CartTotals, LineChange};
use storefront_commerce::ids::ProductId;

use super::CartArgs;
use crate::context::Context;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut cart = args.start.to_cart(ctx);

    for update in &args.updates {
        let change = cart.add_or_update(update.product.clone(), update.quantity);
        report_change(ctx, &update.product, change);
    }
    for id in &args.removals {
        let id = ProductId::new(id.as_str());
        let change = cart.remove(&id);
        report_change(ctx, &id, change);
    }
    if args.clear {
        cart.clear();
        ctx.output.debug("Cart cleared");
    }

    let totals = cart.compute_totals(ctx.catalog, ctx.pricing());

    if ctx.output.is_json() {
        ctx.output.json(&totals);
        return Ok(());
    }

    render_totals(ctx, &cart, &totals);
    Ok(())
}

fn report_change(ctx: &Context, id: &ProductId, change: LineChange) {
    match change {
        LineChange::Inserted => ctx.output.debug(&format!("Added product {}", id)),
        LineChange::Updated => ctx.output.debug(&format!("Updated product {}", id)),
        LineChange::Removed => ctx.output.debug(&format!("Removed product {}", id)),
        LineChange::Unchanged => ctx.output.warn(&format!("Product {} is not in the cart", id)),
    }
}

/// Print the cart lines and the order summary.
pub fn render_totals(ctx: &Context, cart: &Cart, totals: &CartTotals) {
    ctx.output.header("Shopping Cart");

    if totals.is_empty() {
        ctx.output.info("Your cart is empty");
        ctx.output
            .line("Looks like you haven't added any products to your cart yet.");
        return;
    }

    for line in &totals.lines {
        ctx.output.table_row(
            &[
                line.product_id.as_str(),
                &line.name,
                &format!("{} × {}", ctx.money(line.unit_price), line.quantity),
                &ctx.money(line.line_total),
            ],
            &[3, 40, 18, 12],
        );
    }

    let dropped = cart.lines().len() - totals.lines.len();
    if dropped > 0 {
        ctx.output
            .warn(&format!("{} line(s) refer to products that no longer exist", dropped));
    }

    render_summary(ctx, totals);
}

/// Print subtotal, shipping, tax and total.
pub fn render_summary(ctx: &Context, totals: &CartTotals) {
    ctx.output.header("Order Summary");
    ctx.output.kv("Subtotal", &ctx.money(totals.subtotal));
    ctx.output.kv("Shipping", &ctx.money(totals.shipping));
    ctx.output.kv("Tax", &ctx.money(totals.tax));
    ctx.output.kv("Total", &ctx.money(totals.total));
}
