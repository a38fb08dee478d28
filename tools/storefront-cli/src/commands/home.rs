//! Home page: hero, featured products and categories.

use std::time::Duration;

use anyhow::{Context as _, Result};
use serde_json::json;
use storefront_commerce::carousel::RotationTimer;
use storefront_commerce::catalog::Product;

use super::HomeArgs;
use crate::context::Context;
use crate::output::stars;

const HERO_TITLE: &str = "Summer Tech Collection";
const HERO_TAGLINE: &str =
    "Discover the latest tech gadgets for your digital lifestyle. Limited time offers available.";

/// Run the home command.
pub async fn run(args: HomeArgs, ctx: &Context) -> Result<()> {
    let home = &ctx.config.home;
    let featured = ctx.catalog.featured(home.featured_count);

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "hero": { "title": HERO_TITLE, "tagline": HERO_TAGLINE },
            "featured": featured,
            "categories": ctx.catalog.categories(),
        }));
    } else {
        ctx.output.header(HERO_TITLE);
        ctx.output.line(HERO_TAGLINE);

        ctx.output.header("Featured Products");
        for product in featured {
            ctx.output.table_row(
                &[
                    product.id.as_str(),
                    &product.name,
                    &ctx.money(product.price),
                    &stars(product.filled_stars(), product.rating),
                ],
                &[3, 40, 10, 12],
            );
        }

        ctx.output.header("Shop by Category");
        for category in ctx.catalog.categories() {
            ctx.output.list_item(&category.name);
        }
    }

    // A single slide never changes.
    if args.rotate > 0 && featured.len() > 1 {
        let period = args
            .interval_ms
            .map(Duration::from_millis)
            .unwrap_or_else(|| home.rotation_interval());
        spotlight(ctx, featured, period, args.rotate).await?;
    }

    Ok(())
}

/// Cycle the spotlight through the featured products.
async fn spotlight(
    ctx: &Context,
    featured: &[Product],
    period: Duration,
    rotations: usize,
) -> Result<()> {
    let len = featured.len();
    let timer = RotationTimer::spawn(len, period);
    let mut index = timer.subscribe();

    ctx.output.header("Spotlight");
    for _ in 0..rotations {
        index
            .changed()
            .await
            .context("Spotlight rotation stopped unexpectedly")?;
        let current = *index.borrow_and_update();
        if let Some(product) = featured.get(current) {
            if ctx.output.is_json() {
                println!("{}", json!({ "spotlight": current, "product": product.id }));
            } else {
                ctx.output.info(&format!("[{}/{}] {}", current + 1, len, product.name));
            }
        }
    }

    timer.stop();
    Ok(())
}
