//! Category listing.

use anyhow::Result;
use serde_json::json;

use crate::context::Context;

/// Run the categories command.
pub async fn run(ctx: &Context) -> Result<()> {
    let categories = ctx.catalog.categories();

    if ctx.output.is_json() {
        let rows: Vec<_> = categories
            .iter()
            .map(|c| {
                json!({
                    "category": c,
                    "productCount": ctx.catalog.category_size(&c.id),
                })
            })
            .collect();
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header("Categories");
    for category in categories {
        let count = ctx.catalog.category_size(&category.id);
        ctx.output.table_row(
            &[
                category.id.as_str(),
                &category.name,
                &format!("{} product{}", count, if count == 1 { "" } else { "s" }),
            ],
            &[12, 18, 12],
        );
    }

    Ok(())
}
