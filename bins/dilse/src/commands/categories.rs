//! Categories command - list the fixed category table

use crate::app::App;
use dilse_cli::output::{self, Status};
use dilse_cli::OutputFormat;
use dilse_core::preferences::language_name;
use dilse_core::{Result, CATEGORIES};
use owo_colors::OwoColorize;

/// Run categories command
pub fn run(app: &App, format: OutputFormat) -> Result<()> {
    if format.is_json() {
        output::print_json(&CATEGORIES)?;
        return Ok(());
    }

    Status::header("Categories");
    for category in &CATEGORIES {
        println!("  {:<12} {}", category.key.dimmed(), category.label());
    }

    let language = language_name(&app.language).unwrap_or(&app.language);
    println!();
    println!("  {} {}", "Language:".dimmed(), language);
    Ok(())
}
