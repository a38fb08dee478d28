//! Order tracking detail.

use anyhow::Result;
use console::style;
use serde_json::json;
use storefront_commerce::ids::OrderId;
use storefront_commerce::orders::{display_date, OrderProgress, StatusNotice};

use super::OrderArgs;
use crate::context::Context;

/// Width of the text progress bar.
const BAR_WIDTH: usize = 30;

/// Run the order command.
pub async fn run(args: OrderArgs, ctx: &Context) -> Result<()> {
    let id = OrderId::new(args.id);
    let Some(order) = ctx.orders.find_by_id(&id) else {
        if ctx.output.is_json() {
            ctx.output.json(&json!({ "order": null }));
        } else {
            ctx.output.header("Order Not Found");
            ctx.output.line("We couldn't find the order you're looking for.");
        }
        return Ok(());
    };

    let notice = StatusNotice::for_order(order);
    let progress = OrderProgress::for_order(order);
    let lines = order.lines(ctx.catalog);

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "order": order,
            "notice": notice.as_ref().map(|n| json!({
                "heading": n.heading(),
                "message": n.message(),
                "trackingNumber": n.tracking_number(),
            })),
            "progress": progress,
            "lines": lines,
        }));
        return Ok(());
    }

    ctx.output.header(&format!("Order #{}", order.id));
    ctx.output.line(&format!("Placed on {}", display_date(order.date)));

    if let Some(notice) = &notice {
        ctx.output.header(notice.heading());
        ctx.output.line(&notice.message());
        if let Some(tracking) = notice.tracking_number() {
            ctx.output.kv("Tracking Number", tracking);
        }
    }

    if let Some(progress) = progress {
        ctx.output.line("");
        ctx.output.line(&progress_bar(progress.percent));
        let steps: Vec<String> = progress
            .steps
            .iter()
            .map(|step| {
                if step.complete {
                    format!("{} {}", style("✓").green(), step.name)
                } else {
                    format!("{} {}", style("○").dim(), style(step.name).dim())
                }
            })
            .collect();
        ctx.output.line(&steps.join("   "));
    }

    ctx.output.header("Order Items");
    for line in &lines {
        ctx.output.table_row(
            &[
                &line.name,
                &format!("{} × {}", ctx.money(line.unit_price), line.quantity),
                &ctx.money(line.line_total),
            ],
            &[40, 18, 12],
        );
    }

    ctx.output.line("");
    ctx.output.kv("Total", &ctx.money(order.total));

    Ok(())
}

fn progress_bar(percent: u8) -> String {
    let filled = BAR_WIDTH * usize::from(percent.min(100)) / 100;
    format!(
        "[{}{}] {}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        percent
    )
}
