//! Preferences commands

use crate::app::App;
use dilse_cli::output::{self, Status};
use dilse_cli::OutputFormat;
use dilse_core::preferences::{language_name, ThemeMode, SUPPORTED_LANGUAGES};
use dilse_core::{Error, Result, ResultExt};
use owo_colors::OwoColorize;

/// Print current preferences
pub fn show(app: &App, format: OutputFormat) -> Result<()> {
    let prefs = app.prefs.load().context("While reading preferences")?;

    if format.is_json() {
        output::print_json(&prefs)?;
        return Ok(());
    }

    Status::header("Preferences");
    let language = language_name(&prefs.app_language).unwrap_or("unknown");
    println!("  {:<10} {} ({language})", "Language".dimmed(), prefs.app_language);
    println!("  {:<10} {:?}", "Theme".dimmed(), prefs.theme_mode);
    for (key, value) in &prefs.profile {
        println!("  {:<10} {value}", key.dimmed());
    }
    println!();
    println!("  {} {}", "File:".dimmed(), app.prefs.path().display());
    Ok(())
}

/// Select the app language
pub fn set_language(app: &App, code: &str) -> Result<()> {
    let code = code.trim().to_lowercase();
    let Some(name) = language_name(&code) else {
        let known: Vec<&str> = SUPPORTED_LANGUAGES.iter().map(|(c, _)| *c).collect();
        return Err(Error::validation(format!("Unsupported language: {code}"))
            .with_suggestion(format!("Use one of: {}", known.join(", "))));
    };

    app.prefs.set_language(&code).context("While saving the language")?;
    Status::success(&format!("Language set to {name} ({code})"));
    Ok(())
}

/// Select the theme mode
pub fn set_theme(app: &App, mode: &str) -> Result<()> {
    let mode: ThemeMode = mode.parse()?;
    app.prefs.set_theme(mode).context("While saving the theme")?;
    Status::success(&format!("Theme set to {mode:?}"));
    Ok(())
}

/// Set a profile field
pub fn set_profile(app: &App, key: &str, value: &str) -> Result<()> {
    app.prefs
        .set_profile_field(key, value)
        .context("While saving the profile")?;
    Status::success(&format!("Profile {key} updated"));
    Ok(())
}
