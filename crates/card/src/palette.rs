//! Background palette.

use crate::canvas::Color;
use crate::error::{CardError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Two-colour gradients offered by the editor, as (top-left, bottom-right).
pub const GRADIENTS: [(Color, Color); 10] = [
    (Color::rgb(0x667eea), Color::rgb(0x764ba2)),
    (Color::rgb(0xf093fb), Color::rgb(0xf5576c)),
    (Color::rgb(0x4facfe), Color::rgb(0x00f2fe)),
    (Color::rgb(0x43e97b), Color::rgb(0x38f9d7)),
    (Color::rgb(0xfa709a), Color::rgb(0xfee140)),
    (Color::rgb(0x30cfd0), Color::rgb(0x330867)),
    (Color::rgb(0xa8edea), Color::rgb(0xfed6e3)),
    (Color::rgb(0xff9a9e), Color::rgb(0xfecfef)),
    (Color::rgb(0xffecd2), Color::rgb(0xfcb69f)),
    (Color::rgb(0xff6e7f), Color::rgb(0xbfe9ff)),
];

/// Card background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    /// Solid white
    #[default]
    Plain,
    /// Entry of [`GRADIENTS`]
    Gradient(usize),
}

impl Background {
    /// Gradient background, checking the palette bounds
    pub fn gradient(index: usize) -> Result<Self> {
        if index < GRADIENTS.len() {
            Ok(Self::Gradient(index))
        } else {
            Err(CardError::InvalidBackground(format!(
                "gradient index {index} out of range (0-{})",
                GRADIENTS.len() - 1
            )))
        }
    }

    /// Gradient endpoints, `None` for a plain background.
    ///
    /// Out-of-range indices wrap around the palette.
    #[must_use]
    pub fn colors(self) -> Option<(Color, Color)> {
        match self {
            Self::Plain => None,
            Self::Gradient(i) => Some(GRADIENTS[i % GRADIENTS.len()]),
        }
    }

    /// Whether text is drawn in light colours
    #[must_use]
    pub fn is_gradient(self) -> bool {
        matches!(self, Self::Gradient(_))
    }

    /// Check that a gradient index is inside the palette
    pub fn validate(self) -> Result<()> {
        match self {
            Self::Plain => Ok(()),
            Self::Gradient(i) => Self::gradient(i).map(|_| ()),
        }
    }
}

impl FromStr for Background {
    type Err = CardError;

    /// Accepts `plain`, `white`, `N` or `gradient-N`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().to_lowercase();
        if s == "plain" || s == "white" {
            return Ok(Self::Plain);
        }

        let index = s.strip_prefix("gradient-").unwrap_or(&s);
        index
            .parse::<usize>()
            .map_err(|_| CardError::InvalidBackground(s.clone()))
            .and_then(Self::gradient)
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => f.write_str("plain"),
            Self::Gradient(i) => write!(f, "gradient-{i}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_background() {
        assert_eq!("plain".parse::<Background>().unwrap(), Background::Plain);
        assert_eq!("3".parse::<Background>().unwrap(), Background::Gradient(3));
        assert_eq!(
            "Gradient-9".parse::<Background>().unwrap(),
            Background::Gradient(9)
        );
        assert!("10".parse::<Background>().is_err());
        assert!("sunset".parse::<Background>().is_err());
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for bg in [Background::Plain, Background::Gradient(0), Background::Gradient(7)] {
            assert_eq!(bg.to_string().parse::<Background>().unwrap(), bg);
        }
    }

    #[test]
    fn test_colors() {
        assert_eq!(Background::Plain.colors(), None);
        let (from, to) = Background::Gradient(0).colors().unwrap();
        assert_eq!(from, Color::from_argb(0xFF66_7EEA));
        assert_eq!(to, Color::from_argb(0xFF76_4BA2));
        assert!(Background::Gradient(12).validate().is_err());
    }
}
