//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_commerce::catalog::Catalog;
use storefront_commerce::orders::OrderRegistry;
use storefront_commerce::{PricingConfig, StorefrontConfig};

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names searched for, in order.
pub const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    pub catalog: &'static Catalog,
    pub orders: &'static OrderRegistry,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = PathBuf::from(path);
            (CliConfig::load(&path)?, Some(path))
        } else {
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        match &config_path {
            Some(path) => output.debug(&format!("Using config: {}", path.display())),
            None => output.debug("No config file found, using defaults"),
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            catalog: Catalog::sample(),
            orders: OrderRegistry::sample(),
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(&config_path) {
                        Ok(config) => return Some((config, config_path)),
                        Err(e) => tracing::warn!(
                            path = %config_path.display(),
                            error = %format!("{:#}", e),
                            "skipping unreadable config"
                        ),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    pub fn pricing(&self) -> &PricingConfig {
        &self.config.pricing
    }

    pub fn storefront(&self) -> StorefrontConfig {
        self.config.storefront()
    }

    /// Format an amount in the configured currency.
    pub fn money(&self, amount: storefront_commerce::Money) -> String {
        self.config.pricing.display(amount)
    }
}
