//! Terminal output formatting for the cadence-recipes CLI.
//!
//! Provides consistent, colored output using the [`console`] crate.

use console::style;

/// Print a bold cyan header with an underline separator.
pub fn print_header(text: &str) {
    println!("\n{}", style(text).bold().cyan());
    println!("{}", style("=".repeat(text.len())).dim());
}

/// Print a success message prefixed with green `[OK]`.
pub fn print_success(text: &str) {
    println!("{} {}", style("[OK]").green().bold(), text);
}

/// Print a missing-file line prefixed with yellow `[MISSING]`.
pub fn print_missing(text: &str) {
    println!("{} {}", style("[MISSING]").yellow().bold(), text);
}

/// Print an error message prefixed with red `[ERROR]`.
pub fn print_error(text: &str) {
    println!("{} {}", style("[ERROR]").red().bold(), text);
}

/// Print a key-value pair with dimmed key formatting.
pub fn print_key_value(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Print a slug/title row for listings.
pub fn print_recipe_row(slug: &str, title: &str) {
    println!("  {}  {}", style(slug).bold(), title);
}
