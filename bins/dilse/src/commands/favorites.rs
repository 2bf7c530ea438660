//! Favorites commands - list and toggle

use crate::app::App;
use dilse_cli::output::{self, format_count, Status};
use dilse_cli::OutputFormat;
use dilse_core::Result;

/// List favorite quotes across every category and language
pub fn list(app: &App, format: OutputFormat) -> Result<()> {
    app.ensure_seeded()?;
    let favorites = app.repo.favorites()?;

    if format.is_json() {
        output::print_json(&favorites)?;
        return Ok(());
    }

    if favorites.is_empty() {
        Status::info("No favorites yet. Use `dilse favorite <id>` to add one");
        return Ok(());
    }

    Status::header(&format!(
        "Favorites ({})",
        format_count(favorites.len(), "quote", "quotes")
    ));
    output::print_quotes(&favorites);
    Ok(())
}

/// Flip the favorite flag of one quote
pub fn toggle(app: &App, id: i64, format: OutputFormat) -> Result<()> {
    app.ensure_seeded()?;
    let quote = app.repo.toggle_favorite(id)?;

    if format.is_json() {
        output::print_json(&quote)?;
    } else if quote.is_favorite {
        Status::success(&format!("Added quote {id} to favorites"));
    } else {
        Status::success(&format!("Removed quote {id} from favorites"));
    }
    Ok(())
}
