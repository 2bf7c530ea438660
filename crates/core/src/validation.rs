//! Input validation
//!
//! Provides validation for:
//! - Quote editor input (text length, font size)
//! - Preference values
//!
//! Lengths are counted in Unicode scalar values of the trimmed text, so a
//! Devanagari conjunct counts as its code points.
//!
//! # Example
//!
//! ```rust
//! use dilse_core::validation::Validator;
//!
//! let result = Validator::new()
//!     .required("text", "Dil se")
//!     .min_length("text", "Dil se", 10)
//!     .validate();
//!
//! assert!(!result.is_valid());
//! ```

use crate::error::{Error, ErrorCode, Result};
use serde::{Deserialize, Serialize};

/// Minimum length of a user-created quote, in characters.
pub const MIN_QUOTE_LENGTH: usize = 10;

/// Validation error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field that failed validation
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
    /// Expected value (if applicable)
    pub expected: Option<String>,
    /// Actual value (if applicable)
    pub actual: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Create a new empty result
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if validation passed
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get all errors
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Add an error
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Convert to Result type
    pub fn to_result(self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            let messages: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
            Err(Error::new(
                ErrorCode::ValidationError,
                format!("Validation failed: {}", messages.join("; ")),
            ))
        }
    }
}

/// Fluent validator builder
pub struct Validator {
    result: ValidationResult,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Create a new validator
    #[must_use]
    pub fn new() -> Self {
        Self {
            result: ValidationResult::new(),
        }
    }

    /// Validate that a field is not blank
    #[must_use]
    pub fn required(mut self, field: &str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message: "Field is required".to_string(),
                code: "REQUIRED".to_string(),
                expected: Some("non-empty value".to_string()),
                actual: Some("empty".to_string()),
            });
        }
        self
    }

    /// Validate minimum length (in characters, ignoring outer whitespace)
    #[must_use]
    pub fn min_length(mut self, field: &str, value: &str, min: usize) -> Self {
        let len = char_count(value);
        if len < min {
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message: format!("Must be at least {min} characters"),
                code: "MIN_LENGTH".to_string(),
                expected: Some(format!(">= {min} chars")),
                actual: Some(format!("{len} chars")),
            });
        }
        self
    }

    /// Validate maximum length (in characters, ignoring outer whitespace)
    #[must_use]
    pub fn max_length(mut self, field: &str, value: &str, max: usize) -> Self {
        let len = char_count(value);
        if len > max {
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message: format!("Must be at most {max} characters"),
                code: "MAX_LENGTH".to_string(),
                expected: Some(format!("<= {max} chars")),
                actual: Some(format!("{len} chars")),
            });
        }
        self
    }

    /// Validate a numeric range
    #[must_use]
    pub fn range<T: PartialOrd + std::fmt::Display>(
        mut self,
        field: &str,
        value: T,
        min: T,
        max: T,
    ) -> Self {
        if value < min || value > max {
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message: format!("Must be between {min} and {max}"),
                code: "RANGE".to_string(),
                expected: Some(format!("{min} - {max}")),
                actual: Some(value.to_string()),
            });
        }
        self
    }

    /// Complete validation and return result
    #[must_use]
    pub fn validate(self) -> ValidationResult {
        self.result
    }
}

fn char_count(value: &str) -> usize {
    value.trim().chars().count()
}

/// Validate the text of a user-created quote before rendering it.
///
/// Blank text and text shorter than [`MIN_QUOTE_LENGTH`] are rejected with
/// the prompt the editor shows to the user. There is no upper bound.
pub fn validate_quote_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(Error::new(ErrorCode::EmptyQuote, "Please enter quote text"));
    }

    let result = Validator::new()
        .min_length("text", text, MIN_QUOTE_LENGTH)
        .validate();

    match result.errors().first() {
        None => Ok(()),
        Some(e) if e.code == "MIN_LENGTH" => Err(Error::new(
            ErrorCode::QuoteTooShort,
            format!("Quote is too short (min {MIN_QUOTE_LENGTH} characters)"),
        )),
        Some(_) => result.to_result(),
    }
}
