//! Quote commands - scope listing, details, random, quote of the day

use crate::app::App;
use dilse_cli::output::{self, format_count, Status};
use dilse_cli::{progress, OutputFormat};
use dilse_core::{Error, Quote, Result};
use dilse_store::{Feed, Origin, RefreshOutcome};
use serde::Serialize;

/// JSON output for a quote list
#[derive(Debug, Serialize)]
struct JsonQuotesOutput<'a> {
    scope: String,
    origin: String,
    total: usize,
    quotes: &'a [Quote],
}

fn origin_label(origin: &Origin) -> String {
    match origin {
        Origin::Remote => "remote".to_string(),
        Origin::LocalFallback(reason) => format!("local ({reason})"),
    }
}

/// List the quotes of a category in the selected language
pub async fn list(
    app: &App,
    category: Option<&str>,
    feed: Feed,
    format: OutputFormat,
) -> Result<()> {
    let scope = app.scope(category)?;
    app.ensure_seeded()?;

    let spinner = progress::spinner(&format!("Loading {scope}..."));
    let result = app.repo.quotes_for_scope_from(&scope, feed, app.connected).await;
    progress::clear(&spinner);
    let result = result?;

    if format.is_json() {
        output::print_json(&JsonQuotesOutput {
            scope: scope.to_string(),
            origin: origin_label(&result.origin),
            total: result.quotes.len(),
            quotes: &result.quotes,
        })?;
        return Ok(());
    }

    if let Origin::LocalFallback(reason) = &result.origin {
        Status::warning(&format!("Showing saved quotes: {reason}"));
    }
    if result.quotes.is_empty() {
        Status::info(&format!("No quotes available for {scope}"));
        return Ok(());
    }

    Status::header(&format!(
        "{scope} ({})",
        format_count(result.quotes.len(), "quote", "quotes")
    ));
    output::print_quotes(&result.quotes);
    Ok(())
}

/// Show one quote in full
pub fn show(app: &App, id: i64, format: OutputFormat) -> Result<()> {
    app.ensure_seeded()?;
    let quote = app.repo.get(id)?;

    if format.is_json() {
        output::print_json(&quote)?;
    } else {
        output::print_quote_details(&quote);
    }
    Ok(())
}

/// Print the share text of a quote
pub fn share(app: &App, id: i64) -> Result<()> {
    app.ensure_seeded()?;
    let quote = app.repo.get(id)?;
    println!("{}", quote.share_text());
    Ok(())
}

fn print_single(quote: &Quote, origin: Option<&Origin>, format: OutputFormat) -> Result<()> {
    if format.is_json() {
        output::print_json(quote)?;
        return Ok(());
    }

    if let Some(Origin::LocalFallback(reason)) = origin {
        Status::warning(&format!("Showing a saved quote: {reason}"));
    }
    output::print_quotes(std::slice::from_ref(quote));
    Ok(())
}

/// Show a random quote of the selected language
pub async fn random(app: &App, remote: bool, format: OutputFormat) -> Result<()> {
    if remote {
        if !app.connected {
            return Err(Error::validation("--remote cannot be combined with --offline"));
        }
        let quote = app.client.quotes().random().await?;
        return print_single(&quote, Some(&Origin::Remote), format);
    }

    app.ensure_seeded()?;
    match app.repo.random_quote(&app.language)? {
        Some(quote) => print_single(&quote, None, format),
        None => {
            Status::info(&format!("No saved quotes in language '{}'", app.language));
            Ok(())
        }
    }
}

/// Show the quote of the day
pub async fn today(app: &App, format: OutputFormat) -> Result<()> {
    app.ensure_seeded()?;

    let spinner = progress::spinner("Fetching quote of the day...");
    let daily = app.repo.quote_of_the_day(&app.language, app.connected).await;
    progress::clear(&spinner);

    match daily? {
        Some(daily) => print_single(&daily.quote, Some(&daily.origin), format),
        None => {
            Status::info(&format!("No quote of the day for language '{}'", app.language));
            Ok(())
        }
    }
}

/// Refresh every quote from the remote source
pub async fn refresh(app: &App, format: OutputFormat) -> Result<()> {
    let spinner = progress::spinner("Refreshing quotes...");
    let outcome = app.repo.refresh_all(app.connected).await;

    match outcome? {
        RefreshOutcome::Refreshed(count) => {
            progress::finish_success(&spinner, "Quotes refreshed");
            if format.is_json() {
                output::print_json(&serde_json::json!({ "refreshed": count }))?;
            } else {
                Status::success(&format!(
                    "Refreshed {}",
                    format_count(count, "quote", "quotes")
                ));
            }
        }
        RefreshOutcome::Skipped(reason) => {
            progress::finish_warning(&spinner, "Refresh skipped");
            if format.is_json() {
                output::print_json(&serde_json::json!({
                    "refreshed": 0,
                    "skipped": reason.to_string(),
                }))?;
            } else {
                Status::warning(&format!("Refresh skipped: {reason}"));
            }
        }
    }
    Ok(())
}

/// Delete a quote
pub fn remove(app: &App, id: i64) -> Result<()> {
    if app.repo.remove(id)? {
        Status::success(&format!("Removed quote {id}"));
        Ok(())
    } else {
        Err(Error::record_not_found(id))
    }
}

/// Insert the bundled sample quotes
pub fn seed(app: &App) -> Result<()> {
    let inserted = app.repo.seed_if_empty()?;
    if inserted == 0 {
        Status::info("Store already has quotes; nothing seeded");
    } else {
        Status::success(&format!(
            "Seeded {}",
            format_count(inserted, "sample quote", "sample quotes")
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dilse_store::FallbackReason;

    #[test]
    fn test_origin_label() {
        assert_eq!(origin_label(&Origin::Remote), "remote");
        assert_eq!(
            origin_label(&Origin::LocalFallback(FallbackReason::Offline)),
            "local (offline)"
        );
    }
}
