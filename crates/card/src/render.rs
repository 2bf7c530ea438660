//! Quote card composition.

use crate::canvas::{Canvas, Color, TextAlign};
use crate::error::{CardError, Result};
use crate::layout::{
    anchor_x, wrap_budget, wrap_words, AUTHOR_SCALE, AUTHOR_TOP, LINE_SPACING, QUOTE_SCALE,
    QUOTE_TOP, WATERMARK, WATERMARK_MARGIN, WATERMARK_SIZE,
};
use crate::palette::Background;
use dilse_core::model::ANONYMOUS;
use serde::{Deserialize, Serialize};

/// Editor font size used when none is chosen
pub const DEFAULT_FONT_SIZE: f32 = 20.0;

/// Everything needed to draw one card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSpec {
    /// Quote body, drawn inside quotation marks
    pub text: String,
    /// Attribution, `Anonymous` when blank
    pub author: String,
    /// Background fill
    pub background: Background,
    /// Horizontal alignment of the text block
    pub align: TextAlign,
    /// Editor font size (scaled up for the raster)
    pub font_size: f32,
}

impl CardSpec {
    /// Card with default styling
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            background: Background::Plain,
            align: TextAlign::Center,
            font_size: DEFAULT_FONT_SIZE,
        }
    }

    /// Builder-style method to set the background
    #[must_use]
    pub fn with_background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    /// Builder-style method to set the alignment
    #[must_use]
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Builder-style method to set the font size
    #[must_use]
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Check styling values before rendering
    pub fn validate(&self) -> Result<()> {
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(CardError::InvalidFontSize(self.font_size));
        }
        self.background.validate()
    }

    /// Author for display
    #[must_use]
    pub fn display_author(&self) -> &str {
        let author = self.author.trim();
        if author.is_empty() { ANONYMOUS } else { author }
    }
}

/// Text colours for a background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextColors {
    /// Quote lines
    pub quote: Color,
    /// Author line
    pub author: Color,
    /// Watermark
    pub watermark: Color,
}

impl TextColors {
    /// Light text on gradients, dark grey on plain white
    #[must_use]
    pub fn for_background(background: Background) -> Self {
        if background.is_gradient() {
            Self {
                quote: Color::WHITE,
                author: Color::from_argb(0xE0FF_FFFF),
                watermark: Color::from_argb(0x40FF_FFFF),
            }
        } else {
            Self {
                quote: Color::rgb(0x333333),
                author: Color::rgb(0x666666),
                watermark: Color::from_argb(0x4000_0000),
            }
        }
    }
}

/// Positions chosen while rendering a card
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct CardLayout {
    pub quote_lines: Vec<String>,
    pub quote_size: f32,
    pub author_line: String,
    pub author_size: f32,
    pub anchor_x: f32,
    pub budget: f32,
}

/// Draw a card onto `canvas`.
///
/// Rendering does not fail; call [`CardSpec::validate`] first for
/// user-supplied styling.
pub fn render_card<C: Canvas + ?Sized>(spec: &CardSpec, canvas: &mut C) -> CardLayout {
    let width = canvas.width();
    let height = canvas.height();
    let colors = TextColors::for_background(spec.background);

    match spec.background.colors() {
        Some((from, to)) => canvas.fill_linear_gradient(from, to),
        None => canvas.fill(Color::WHITE),
    }

    let quote_size = spec.font_size * QUOTE_SCALE;
    let author_size = spec.font_size * AUTHOR_SCALE;
    let x = anchor_x(spec.align, width);
    let budget = wrap_budget(spec.align, width);

    let quoted = format!("\"{}\"", spec.text.trim());
    let quote_lines = wrap_words(&quoted, budget, |line| canvas.measure_text(line, quote_size));

    let mut baseline = height as f32 * QUOTE_TOP;
    for line in &quote_lines {
        canvas.draw_text(line, x, baseline, quote_size, colors.quote, spec.align);
        baseline += quote_size * LINE_SPACING;
    }

    let author_line = format!("- {}", spec.display_author());
    canvas.draw_text(
        &author_line,
        x,
        height as f32 * AUTHOR_TOP,
        author_size,
        colors.author,
        spec.align,
    );

    canvas.draw_text(
        WATERMARK,
        width as f32 - WATERMARK_MARGIN,
        height as f32 - WATERMARK_MARGIN,
        WATERMARK_SIZE,
        colors.watermark,
        TextAlign::End,
    );

    tracing::debug!(
        lines = quote_lines.len(),
        align = %spec.align,
        background = %spec.background,
        "Card rendered"
    );

    CardLayout {
        quote_lines,
        quote_size,
        author_line,
        author_size,
        anchor_x: x,
        budget,
    }
}
