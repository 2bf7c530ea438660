//! Error types for the card crate.

use dilse_core::ErrorCode;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for card operations.
pub type Result<T> = std::result::Result<T, CardError>;

/// Errors that can occur while preparing or exporting a card.
///
/// Rendering itself never fails; these come from font loading, input
/// validation and persistence.
#[derive(Debug, Error)]
pub enum CardError {
    /// Font file could not be read or parsed
    #[error("Failed to load font {}: {reason}", path.display())]
    FontLoad {
        /// Font path
        path: PathBuf,
        /// Underlying cause
        reason: String,
    },

    /// Background selector is not `plain` or a palette index
    #[error("Invalid background: {0}")]
    InvalidBackground(String),

    /// Alignment is not start, center or end
    #[error("Invalid alignment: {0}")]
    InvalidAlignment(String),

    /// Font size is not a positive number
    #[error("Font size must be positive, got {0}")]
    InvalidFontSize(f32),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image encoding error
    #[error("Image encoding error: {0}")]
    Encode(#[from] image::ImageError),
}

impl CardError {
    /// Error code of this error in the shared code table
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::FontLoad { .. } => ErrorCode::FontLoadFailed,
            Self::InvalidBackground(_)
            | Self::InvalidAlignment(_)
            | Self::InvalidFontSize(_) => ErrorCode::InvalidInput,
            Self::Io(_) | Self::Encode(_) => ErrorCode::ImageSaveFailed,
        }
    }
}

impl From<CardError> for dilse_core::Error {
    fn from(err: CardError) -> Self {
        let code = err.code();
        let message = err.to_string();
        let converted = match code {
            ErrorCode::ImageSaveFailed => dilse_core::Error::image_save(message),
            ErrorCode::FontLoadFailed => dilse_core::Error::new(code, message)
                .with_suggestion("Set card.font_path in dilse.toml or pass --font"),
            _ => dilse_core::Error::new(code, message),
        };
        converted.with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = CardError::FontLoad {
            path: PathBuf::from("missing.ttf"),
            reason: "not found".to_string(),
        };
        assert_eq!(err.code(), ErrorCode::FontLoadFailed);
        assert!(err.to_string().contains("missing.ttf"));

        assert_eq!(CardError::InvalidFontSize(0.0).code(), ErrorCode::InvalidInput);
    }

    #[test]
    fn test_io_error_becomes_image_save_failure() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: dilse_core::Error = CardError::from(io).into();
        assert_eq!(err.code, ErrorCode::ImageSaveFailed);
        assert!(err.suggestion.is_some());
        assert!(err.source.is_some());
    }
}
