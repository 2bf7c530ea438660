//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use dilse_core::{category, Quote};
use owo_colors::OwoColorize;
use serde::Serialize;

/// Output format selected with `--format`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// One JSON document on stdout
    Json,
}

impl OutputFormat {
    /// Whether JSON output was requested
    #[must_use]
    pub fn is_json(self) -> bool {
        self == Self::Json
    }
}

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(console::measure_text_width(message)));
    }
}

/// Print a serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One-line summary of a quote: id, favorite marker and text
#[must_use]
pub fn quote_line(quote: &Quote) -> String {
    let marker = if quote.is_favorite { "♥" } else { " " };
    format!("{:>8} {} {}", quote.id, marker, quote.text)
}

/// Print a list of quotes, one per line with the author underneath
pub fn print_quotes(quotes: &[Quote]) {
    for quote in quotes {
        let line = quote_line(quote);
        if quote.is_favorite {
            println!("{}", line.red());
        } else {
            println!("{line}");
        }
        println!("{:>11}{}", "- ".dimmed(), quote.display_author().dimmed());
    }
}

/// Print every field of a quote
pub fn print_quote_details(quote: &Quote) {
    let category = category::find(&quote.category)
        .map_or_else(|| quote.category.clone(), |c| c.label());

    println!();
    println!("  \"{}\"", quote.text.bold());
    println!("  - {}", quote.display_author());
    println!();
    println!("  {:<10} {}", "Id".dimmed(), quote.id);
    println!("  {:<10} {}", "Category".dimmed(), category);
    println!("  {:<10} {}", "Language".dimmed(), quote.language);
    println!("  {:<10} {}", "Likes".dimmed(), quote.likes);
    println!(
        "  {:<10} {}",
        "Favorite".dimmed(),
        if quote.is_favorite { "yes" } else { "no" }
    );
    if let Some(source) = &quote.source {
        println!("  {:<10} {}", "Source".dimmed(), source);
    }
}

/// Format a duration for display
pub fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs % 60.0;
        format!("{mins}m {remaining_secs:.0}s")
    }
}

/// Format a file size for display
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}
