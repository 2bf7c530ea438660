//! Error types for the store

use dilse_core::ErrorCode;
use thiserror::Error;

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// SQLite error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// No row with the requested key
    #[error("Not found: {0}")]
    NotFound(String),

    /// A thread panicked while holding the connection
    #[error("Database connection lock poisoned")]
    Poisoned,

    /// Could not prepare the database location
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Error code of this error in the shared code table
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound(_) => ErrorCode::RecordNotFound,
            Self::Io(_) => ErrorCode::IoError,
            Self::Database(_) | Self::Poisoned => ErrorCode::StorageError,
        }
    }
}

impl From<StoreError> for dilse_core::Error {
    fn from(err: StoreError) -> Self {
        let converted = dilse_core::Error::new(err.code(), err.to_string());
        let converted = if matches!(err, StoreError::NotFound(_)) {
            converted.with_suggestion("Run `dilse list` to see available ids")
        } else {
            converted
        };
        converted.with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            StoreError::NotFound("Quote 3".to_string()).code(),
            ErrorCode::RecordNotFound
        );
        assert_eq!(StoreError::Poisoned.code(), ErrorCode::StorageError);

        let core: dilse_core::Error = StoreError::NotFound("Quote 3".to_string()).into();
        assert_eq!(core.exit_code(), dilse_core::error::exit_codes::STORAGE_ERROR);
        assert!(core.suggestion.is_some());
    }
}
