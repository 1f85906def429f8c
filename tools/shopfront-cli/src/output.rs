//! Output formatting for the CLI.

use console::{style, Term};
use shopfront_commerce::catalog::Product;
use shopfront_commerce::notify::{Severity, Toast};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
    term: Term,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            verbose,
            json,
            term: Term::stdout(),
        }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
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

    /// Print a plain line.
    pub fn line(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{}", msg);
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

    /// Print a table row, truncating the first column to fit the terminal.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", console::truncate_str(col, *width, "…"), width = width))
            .collect();
        let row = format!("  {}", formatted.join("  "));
        println!("{}", console::truncate_str(&row, self.term_width(), "…"));
    }

    /// Print a toast notification.
    pub fn toast(&self, toast: &Toast) {
        if self.json {
            return;
        }
        let badge = match toast.severity {
            Severity::Success => style("✓").green(),
            Severity::Error => style("✗").red(),
            Severity::Info => style("ℹ").blue(),
            Severity::Warning => style("⚠").yellow(),
        };
        println!("{} {}", badge, style(&toast.message).italic());
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Get terminal width, with a fallback when not attached to a terminal.
    pub fn term_width(&self) -> usize {
        match self.term.size_checked() {
            Some((_, cols)) => cols as usize,
            None => 120,
        }
    }
}

/// Stock badge for a product.
pub fn stock_badge(product: &Product) -> String {
    match product.inventory {
        0 => style("sold out").red().to_string(),
        1..=5 => style(format!("only {} left", product.inventory)).yellow().to_string(),
        _ => style("in stock").green().to_string(),
    }
}

/// Sale badge with the discount percentage.
pub fn sale_badge(product: &Product) -> Option<String> {
    product
        .discount_percentage()
        .map(|pct| style(format!("-{}%", pct)).magenta().to_string())
}
