//! Error types for the API client

use dilse_core::ErrorCode;
use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API client errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Source returned a non-success status
    #[error("API error ({status}): {message}")]
    ApiResponse {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an API response error
    pub fn api_response(status: u16, message: impl Into<String>) -> Self {
        Self::ApiResponse {
            status,
            message: message.into(),
        }
    }

    /// Whether the source reported that the resource does not exist
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::ApiResponse { status, .. } => *status == 404,
            Self::Request(e) => e.status().is_some_and(|s| s.as_u16() == 404),
            _ => false,
        }
    }

    /// Whether the request ran into the connect or read timeout
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_timeout())
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiResponse { status, .. } if (400..500).contains(status))
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiResponse { status, .. } if *status >= 500)
    }

    /// Short machine-friendly label, used in log fields and metric names
    #[must_use]
    pub fn kind(&self) -> &'static str {
        if self.is_not_found() {
            "not_found"
        } else if self.is_timeout() {
            "timeout"
        } else {
            match self {
                Self::Request(_) => "network",
                Self::Json(_) => "decode",
                Self::Config(_) | Self::InvalidUrl(_) => "config",
                Self::ApiResponse { .. } => "http_status",
            }
        }
    }

    /// Error code of this error in the shared code table
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        if self.is_not_found() {
            ErrorCode::RemoteNotFound
        } else if self.is_timeout() {
            ErrorCode::Timeout
        } else {
            match self {
                Self::Config(_) | Self::InvalidUrl(_) => ErrorCode::InvalidConfigValue,
                _ => ErrorCode::NetworkError,
            }
        }
    }
}

impl From<ApiError> for dilse_core::Error {
    fn from(err: ApiError) -> Self {
        dilse_core::Error::new(err.code(), err.to_string()).with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        let err = ApiError::api_response(404, "Not Found");
        assert!(err.is_not_found());
        assert!(err.is_client_error());
        assert_eq!(err.kind(), "not_found");
        assert_eq!(err.code(), ErrorCode::RemoteNotFound);
    }

    #[test]
    fn test_server_error_classification() {
        let err = ApiError::api_response(503, "Service Unavailable");
        assert!(!err.is_not_found());
        assert!(err.is_server_error());
        assert_eq!(err.kind(), "http_status");
        assert_eq!(err.code(), ErrorCode::NetworkError);
    }

    #[test]
    fn test_decode_error() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = ApiError::from(json_err);
        assert_eq!(err.kind(), "decode");

        let core: dilse_core::Error = err.into();
        assert_eq!(core.code, ErrorCode::NetworkError);
    }
}
