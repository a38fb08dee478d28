//! Product listing with search, category and price filters.

use anyhow::Result;
use storefront_commerce::ids::CategoryId;
use storefront_commerce::search::ProductFilter;
use storefront_commerce::Money;

use super::ProductsArgs;
use crate::context::Context;
use crate::output::stars;

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let filter = build_filter(&args);

    if let Some(category) = &filter.category {
        if ctx.catalog.category(category).is_none() {
            ctx.output.warn(&format!("Unknown category: {}", category));
        }
    }

    let products = filter.apply(ctx.catalog.products());

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header("Products");
    if filter.is_active() {
        ctx.output.debug(&format!(
            "search={:?} category={} price={}..{}",
            filter.search,
            filter.category.as_ref().map(CategoryId::as_str).unwrap_or("all"),
            ctx.money(filter.price_min),
            ctx.money(filter.price_max),
        ));
    }

    if products.is_empty() {
        ctx.output.info("No products found");
        ctx.output.line("Try adjusting your search or filters");
        return Ok(());
    }

    for product in &products {
        ctx.output.table_row(
            &[
                product.id.as_str(),
                &product.name,
                ctx.catalog.category_name(&product.category),
                &ctx.money(product.price),
                product.stock_label(),
                &stars(product.filled_stars(), product.rating),
            ],
            &[3, 38, 16, 10, 12, 12],
        );
    }
    ctx.output.line("");
    ctx.output.info(&format!(
        "Showing {} of {} products",
        products.len(),
        ctx.catalog.products().len()
    ));

    Ok(())
}

fn build_filter(args: &ProductsArgs) -> ProductFilter {
    let defaults = ProductFilter::default();
    let mut filter = defaults.clone().with_price_range(
        args.min_price.map(Money::from).unwrap_or(defaults.price_min),
        args.max_price.map(Money::from).unwrap_or(defaults.price_max),
    );
    if let Some(search) = &args.search {
        filter = filter.with_search(search.as_str());
    }
    if let Some(category) = &args.category {
        filter = filter.with_category(category.as_str());
    }
    filter
}
