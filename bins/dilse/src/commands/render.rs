//! Render command - draw a quote card and export it

use crate::app::App;
use clap::Args;
use dilse_card::{
    encode, render_card, save_to_gallery, write_share_file, Background, CardSpec, ExportFormat,
    RasterCanvas, TextAlign,
};
use dilse_cli::output::{self, format_duration, format_size, Status};
use dilse_cli::OutputFormat;
use dilse_core::validation::validate_quote_text;
use dilse_core::{Error, Result};
use dilse_telemetry::Timer;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Arguments of the render command
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Quote text to render
    #[arg(conflicts_with = "id")]
    pub text: Option<String>,

    /// Render a stored quote instead of free text
    #[arg(long)]
    pub id: Option<i64>,

    /// Author line (Anonymous when empty)
    #[arg(short, long, default_value = "")]
    pub author: String,

    /// Background: plain, or gradient-0 .. gradient-9
    #[arg(short, long, default_value = "plain")]
    pub background: String,

    /// Text alignment: start, center or end
    #[arg(long, default_value = "center")]
    pub align: String,

    /// Base font size (defaults to card.font_size)
    #[arg(long)]
    pub font_size: Option<f32>,

    /// TrueType/OpenType font file (defaults to card.font_path)
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Save the card to the gallery directory
    #[arg(long)]
    pub save: bool,

    /// Write the card to the share cache file
    #[arg(long)]
    pub share: bool,

    /// Write the card to this file (.png or .jpg)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct JsonRenderOutput {
    lines: usize,
    duration_ms: u128,
    files: Vec<PathBuf>,
}

fn card_spec(app: &App, args: &RenderArgs) -> Result<CardSpec> {
    let (text, author) = match (args.id, &args.text) {
        (Some(id), _) => {
            app.ensure_seeded()?;
            let quote = app.repo.get(id)?;
            let author = if args.author.is_empty() { quote.author_name } else { args.author.clone() };
            (quote.text, author)
        }
        (None, Some(text)) => {
            validate_quote_text(text)?;
            (text.trim().to_string(), args.author.clone())
        }
        (None, None) => {
            return Err(Error::missing_argument("TEXT")
                .with_suggestion("Pass the quote text or --id <ID>"));
        }
    };

    let spec = CardSpec::new(text, author)
        .with_background(args.background.parse::<Background>()?)
        .with_align(args.align.parse::<TextAlign>()?)
        .with_font_size(args.font_size.unwrap_or(app.config.schema.card.font_size));
    spec.validate()?;
    Ok(spec)
}

fn export_format(path: &Path, quality: u8) -> ExportFormat {
    let is_png = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    if is_png { ExportFormat::Png } else { ExportFormat::Jpeg(quality) }
}

/// Run render command
pub fn run(app: &App, args: &RenderArgs, format: OutputFormat) -> Result<()> {
    let spec = card_spec(app, args)?;
    let card = &app.config.schema.card;

    let font = args
        .font
        .clone()
        .or_else(|| card.font_path.clone())
        .ok_or_else(|| {
            Error::missing_argument("--font")
                .with_suggestion("Set card.font_path in dilse.toml or pass --font")
        })?;
    let mut canvas = RasterCanvas::from_font_file(&font)?;

    let timer = Timer::start("card.render");
    let layout = render_card(&spec, &mut canvas);
    let elapsed = timer.stop();
    tracing::info!(
        lines = layout.quote_lines.len(),
        background = %spec.background,
        align = %spec.align,
        "Card rendered"
    );

    let save = args.save || (!args.share && args.output.is_none());
    let mut files = Vec::new();

    if let Some(path) = &args.output {
        let bytes = encode(canvas.image(), export_format(path, card.jpeg_quality))?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, bytes)
            .map_err(|e| Error::image_save(format!("Failed to write {}", path.display())).with_source(e))?;
        files.push(path.clone());
    }
    if save {
        files.push(save_to_gallery(canvas.image(), &card.pictures_dir, card.jpeg_quality)?);
    }
    if args.share {
        files.push(write_share_file(canvas.image(), &card.cache_dir, card.jpeg_quality)?);
    }

    if format.is_json() {
        output::print_json(&JsonRenderOutput {
            lines: layout.quote_lines.len(),
            duration_ms: elapsed.as_millis(),
            files,
        })?;
        return Ok(());
    }

    Status::info(&format!(
        "Rendered {} lines in {}",
        layout.quote_lines.len(),
        format_duration(elapsed)
    ));
    for file in &files {
        let size = fs::metadata(file).map(|m| m.len()).unwrap_or_default();
        Status::success(&format!("{} ({})", file.display(), format_size(size)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format_from_extension() {
        assert_eq!(export_format(Path::new("card.PNG"), 90), ExportFormat::Png);
        assert_eq!(export_format(Path::new("card.jpg"), 90), ExportFormat::Jpeg(90));
        assert_eq!(export_format(Path::new("card"), 80), ExportFormat::Jpeg(80));
    }
}
