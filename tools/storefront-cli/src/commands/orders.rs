//! Order history.

use anyhow::Result;
use serde_json::json;
use storefront_commerce::orders::{card_footer, display_date, OrderStatus};

use super::OrdersArgs;
use crate::context::Context;
use crate::output::status_badge;

/// Run the orders command.
pub async fn run(args: OrdersArgs, ctx: &Context) -> Result<()> {
    let status: Option<OrderStatus> = args.status.as_deref().map(str::parse).transpose()?;

    let orders: Vec<_> = ctx
        .orders
        .all()
        .iter()
        .filter(|o| status.map_or(true, |s| o.status == s))
        .collect();

    if ctx.output.is_json() {
        let rows: Vec<_> = orders
            .iter()
            .map(|o| {
                json!({
                    "order": o,
                    "itemCount": o.item_count(),
                    "coverImage": o.cover_image(ctx.catalog),
                    "footer": card_footer(o),
                })
            })
            .collect();
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header("Your Orders");

    if orders.is_empty() {
        ctx.output.info("No orders yet");
        ctx.output
            .line("When you place orders, they will appear here for you to track.");
        return Ok(());
    }

    for order in orders {
        ctx.output.table_row(
            &[
                order.id.as_str(),
                &display_date(order.date),
                &order.item_count_label(),
                &status_badge(order.status),
                &ctx.money(order.total),
            ],
            &[10, 10, 8, 10, 10],
        );
        if let Some(footer) = card_footer(order) {
            ctx.output.line(&format!("    {}", footer));
        }
    }

    Ok(())
}
