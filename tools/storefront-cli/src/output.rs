//! Output formatting for the CLI.

use console::style;
use storefront_core::cart::CartSummary;
use storefront_core::catalog::Product;

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
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Print a product listing with its match count.
    pub fn products(&self, products: &[&Product]) {
        if self.json {
            self.json(&products);
            return;
        }

        println!("Found {} products", style(products.len()).bold());
        if products.is_empty() {
            self.info("No products match. Try changing the filters.");
            return;
        }

        const WIDTHS: [usize; 7] = [4, 26, 12, 11, 10, 10, 12];
        self.table_row(&["ID", "NAME", "CATEGORY", "COLOR", "SIZE", "PRICE", "STOCK"], &WIDTHS);
        for product in products {
            let id = product.id.to_string();
            let price = product.price.display();
            let stock = stock_badge(product.in_stock);
            self.table_row(
                &[
                    id.as_str(),
                    product.name.as_str(),
                    product.category.label(),
                    product.color.label(),
                    product.size.as_str(),
                    price.as_str(),
                    stock.as_str(),
                ],
                &WIDTHS,
            );
        }
    }

    /// Print cart lines and totals.
    pub fn summary(&self, summary: &CartSummary) {
        if self.json {
            self.json(summary);
            return;
        }

        self.header("Cart");
        if summary.is_empty() {
            self.info("Cart is empty");
            return;
        }

        for line in &summary.lines {
            self.list_item(&format!(
                "{} × {} = {}",
                line.product.name,
                line.quantity,
                style(line.line_total).bold()
            ));
        }
        self.kv("Items", &summary.item_count.to_string());
        self.kv("Total", &style(summary.grand_total).bold().to_string());
    }
}

/// Availability badge.
pub fn stock_badge(in_stock: bool) -> String {
    if in_stock {
        style("in stock").green().to_string()
    } else {
        style("sold out").dim().to_string()
    }
}
