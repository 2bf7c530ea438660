//! Drawing surface abstraction.

use crate::error::{CardError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 32-bit ARGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(u32);

impl Color {
    /// Opaque white
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    /// Opaque black
    pub const BLACK: Color = Color(0xFF00_0000);

    /// Colour from a packed `0xAARRGGBB` value
    #[must_use]
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    /// Opaque colour from a packed `0xRRGGBB` value
    #[must_use]
    pub const fn rgb(rgb: u32) -> Self {
        Self(0xFF00_0000 | (rgb & 0x00FF_FFFF))
    }

    /// Packed `0xAARRGGBB` value
    #[must_use]
    pub const fn argb(self) -> u32 {
        self.0
    }

    /// Alpha channel
    #[must_use]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel
    #[must_use]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel
    #[must_use]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel
    #[must_use]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Channels in RGBA order
    #[must_use]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()]
    }

    /// Linear interpolation between two colours, `t` clamped to `0..=1`
    #[must_use]
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u32 {
            let v = f32::from(a) + (f32::from(b) - f32::from(a)) * t;
            v.round().clamp(0.0, 255.0) as u32
        };

        Color(
            (mix(self.alpha(), other.alpha()) << 24)
                | (mix(self.red(), other.red()) << 16)
                | (mix(self.green(), other.green()) << 8)
                | mix(self.blue(), other.blue()),
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// Horizontal text alignment relative to an anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Text starts at the anchor
    Start,
    /// Text is centred on the anchor
    #[default]
    Center,
    /// Text ends at the anchor
    End,
}

impl TextAlign {
    /// Left edge of a run of `width` drawn at anchor `x`
    #[must_use]
    pub fn left_edge(self, x: f32, width: f32) -> f32 {
        match self {
            Self::Start => x,
            Self::Center => x - width / 2.0,
            Self::End => x - width,
        }
    }
}

impl FromStr for TextAlign {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "start" | "left" => Ok(Self::Start),
            "center" | "centre" => Ok(Self::Center),
            "end" | "right" => Ok(Self::End),
            other => Err(CardError::InvalidAlignment(format!(
                "'{other}' (expected start, center or end)"
            ))),
        }
    }
}

impl fmt::Display for TextAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        };
        f.write_str(name)
    }
}

/// A surface a card can be drawn onto.
///
/// Coordinates are in pixels with the origin at the top-left corner. Text is
/// positioned by its baseline.
pub trait Canvas {
    /// Surface width in pixels
    fn width(&self) -> u32;

    /// Surface height in pixels
    fn height(&self) -> u32;

    /// Fill the whole surface with one colour
    fn fill(&mut self, color: Color);

    /// Fill the whole surface with a linear gradient running from the
    /// top-left corner (`from`) to the bottom-right corner (`to`)
    fn fill_linear_gradient(&mut self, from: Color, to: Color);

    /// Advance width of `text` at `size` pixels
    fn measure_text(&self, text: &str, size: f32) -> f32;

    /// Draw a single line of text with its baseline at `baseline`
    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        baseline: f32,
        size: f32,
        color: Color,
        align: TextAlign,
    );
}
