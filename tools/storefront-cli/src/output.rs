//! Output formatting for the CLI.

use console::{pad_str, style, Alignment};
use indicatif::{ProgressBar, ProgressStyle};
use storefront_commerce::catalog::MAX_RATING;
use storefront_commerce::orders::OrderStatus;
use storefront_commerce::validation::ValidationErrors;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a plain line.
    pub fn line(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{}", msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        println!("  {}", format_row(cols, widths));
    }

    /// Print field errors, one per line.
    pub fn field_errors(&self, errors: &ValidationErrors) {
        if self.json {
            return;
        }
        for (field, kind) in errors.iter() {
            eprintln!(
                "  {} {} {}",
                style("✗").red(),
                style(field.label()).bold(),
                kind.describe()
            );
        }
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

fn format_row(cols: &[&str], widths: &[usize]) -> String {
    cols.iter()
        .zip(widths.iter())
        .map(|(col, width)| pad_str(col, *width, Alignment::Left, None).into_owned())
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Status badge for order states.
pub fn status_badge(status: OrderStatus) -> String {
    let label = status.display_name();
    match status {
        OrderStatus::Processing => style(label).blue().to_string(),
        OrderStatus::Shipped => style(label).yellow().to_string(),
        OrderStatus::Delivered => style(label).green().to_string(),
        OrderStatus::Cancelled => style(label).red().to_string(),
    }
}

/// Star rating, e.g. `★★★★☆ 4.4`.
pub fn stars(filled: u8, rating: f64) -> String {
    let filled = usize::from(filled).min(MAX_RATING as usize);
    format!(
        "{}{} {:.1}",
        "★".repeat(filled),
        "☆".repeat(MAX_RATING as usize - filled),
        rating
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars() {
        assert_eq!(stars(4, 4.4), "★★★★☆ 4.4");
        assert_eq!(stars(9, 5.0), "★★★★★ 5.0");
    }

    #[test]
    fn test_format_row_pads_columns() {
        assert_eq!(format_row(&["1", "Lamp", "$89.99"], &[3, 6, 8]), "1    Lamp    $89.99");
    }
}
