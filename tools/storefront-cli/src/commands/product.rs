//! Product detail.

use anyhow::Result;
use serde_json::json;
use storefront_commerce::ids::ProductId;

use super::ProductArgs;
use crate::context::Context;
use crate::output::stars;

/// Related products shown under a product.
const RELATED_LIMIT: usize = 4;

/// Run the product command.
pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let id = ProductId::new(args.id);
    let Some(product) = ctx.catalog.product(&id) else {
        if ctx.output.is_json() {
            ctx.output.json(&json!({ "product": null }));
        } else {
            ctx.output.header("Product Not Found");
            ctx.output
                .line("The product you're looking for doesn't exist or has been removed.");
        }
        return Ok(());
    };

    let related = ctx.catalog.related(product, RELATED_LIMIT);

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "product": product,
            "categoryName": ctx.catalog.category_name(&product.category),
            "canPurchase": product.can_purchase(),
            "related": related,
        }));
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("Category", ctx.catalog.category_name(&product.category));
    ctx.output.kv("Rating", &stars(product.filled_stars(), product.rating));
    ctx.output.kv("Price", &ctx.money(product.price));
    ctx.output.kv("Availability", product.stock_label());
    ctx.output.line("");
    ctx.output.line(&product.description);

    if !product.can_purchase() {
        ctx.output.warn("This product is out of stock and cannot be added to the cart");
    }

    if !related.is_empty() {
        ctx.output.header("You may also like");
        for other in related {
            ctx.output.table_row(
                &[other.id.as_str(), &other.name, &ctx.money(other.price)],
                &[3, 40, 10],
            );
        }
    }

    Ok(())
}
