//! Configuration management commands.

use anyhow::{bail, Result};
use serde_json::json;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let storefront = ctx.storefront();

    // Pricing section
    ctx.output.info("");
    ctx.output.info("[pricing]");
    ctx.output
        .kv("shipping_flat_rate", &ctx.money(storefront.pricing.shipping_flat_rate));
    ctx.output.kv("tax_rate", &storefront.pricing.tax_rate.to_string());
    ctx.output.kv("currency", storefront.pricing.currency.code());

    // Home section
    ctx.output.info("");
    ctx.output.info("[home]");
    ctx.output
        .kv("featured_count", &storefront.home.featured_count.to_string());
    ctx.output.kv(
        "rotation_interval_ms",
        &storefront.home.rotation_interval_ms.to_string(),
    );

    // Cart section
    ctx.output.info("");
    ctx.output.info("[cart]");
    for line in &ctx.config.cart.lines {
        ctx.output.list_item(&line.to_string());
    }

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let name = if ctx.output.is_json() {
        CONFIG_NAMES[2]
    } else {
        CONFIG_NAMES[0]
    };
    let config_path = ctx.cwd.join(name);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    if ctx.output.is_json() {
        CliConfig::default().save(&config_path)?;
        ctx.output.json(&json!({ "created": config_path }));
    } else {
        std::fs::write(&config_path, generate_default_config())?;
        ctx.output
            .success(&format!("Created {}", config_path.display()));
    }

    Ok(())
}
