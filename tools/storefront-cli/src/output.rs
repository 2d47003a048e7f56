//! Output formatting for the CLI.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use storefront_catalog::{Category, Pagination, Product};

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
        println!("  {}", formatted.join("  ").trim_end());
    }

    /// Print one row per product.
    pub fn product_table(&self, products: &[Product]) {
        if products.is_empty() {
            self.info("Aucun produit trouvé.");
            return;
        }

        self.table_row(&["SLUG", "NOM", "ORDRE", "BADGES"], &SLUG_WIDTHS);
        for product in products {
            let order = product
                .sort_order
                .map_or_else(|| "-".to_string(), |n| n.to_string());
            self.table_row(
                &[&product.slug, &product.name, &order, &badges(product)],
                &SLUG_WIDTHS,
            );
        }
    }

    /// Print one row per category.
    pub fn category_table(&self, categories: &[Category]) {
        self.table_row(&["SLUG", "NOM", "PARENT"], &[16, 20, 16]);
        for category in categories {
            let parent = category.parent_id.as_ref().map_or("-", |id| id.as_str());
            self.table_row(&[&category.slug, &category.name, parent], &[16, 20, 16]);
        }
    }

    /// Print a listing footer.
    pub fn pagination(&self, pagination: &Pagination) {
        if self.json {
            return;
        }
        println!(
            "\n  {}",
            style(format!(
                "Page {}/{} · {}-{} sur {}",
                pagination.page,
                pagination.total_pages,
                pagination.start_item(),
                pagination.end_item(),
                count_label(pagination.total, "produit", "produits"),
            ))
            .dim()
        );
    }

    /// Create a spinner shown while a query is pending.
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

const SLUG_WIDTHS: [usize; 4] = [24, 30, 6, 16];

/// "1 produit", "3 produits", "0 produit".
pub fn count_label(count: usize, singular: &str, plural: &str) -> String {
    if count > 1 {
        format!("{} {}", count, plural)
    } else {
        format!("{} {}", count, singular)
    }
}

/// Featured/new/hidden markers for a product row.
pub fn badges(product: &Product) -> String {
    let mut badges = Vec::new();
    if product.is_featured() {
        badges.push(style("vedette").yellow().to_string());
    }
    if product.is_new() {
        badges.push(style("nouveau").green().to_string());
    }
    if !product.is_visible {
        badges.push(style("masqué").dim().to_string());
    }
    badges.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0, "produit", "produits"), "0 produit");
        assert_eq!(count_label(1, "produit", "produits"), "1 produit");
        assert_eq!(count_label(12, "produit", "produits"), "12 produits");
    }

    #[test]
    fn test_badges() {
        console::set_colors_enabled(false);

        let mut product = Product::new("p-1", "Bande LED RGB", "bande-led-rgb");
        assert_eq!(badges(&product), "");

        product.is_featured = Some(true);
        product.is_new = Some(true);
        product.is_visible = false;
        assert_eq!(badges(&product), "vedette nouveau masqué");
    }
}
