//! Core types for DilSe Quotes
//!
//! This crate provides the pieces shared by every other crate in the workspace:
//!
//! - **Model**: the `Quote` record and the `Scope` partition key
//! - **Categories**: the fixed category table and key normalization
//! - **Validation**: editor input checks for user-created quotes
//! - **Preferences**: language, theme and profile settings
//! - **Configuration**: TOML-based configuration with defaults
//! - **Error handling**: errors with codes, context, and recovery suggestions
//!
//! # Example
//!
//! ```rust
//! use dilse_core::{Quote, Scope};
//!
//! let scope = Scope::new("Love", "en");
//! let quote = Quote::new(1, "Love all, trust a few, do wrong to none.", "love", "en");
//!
//! assert!(scope.contains(&quote));
//! assert_eq!(quote.display_author(), "Anonymous");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod category;
pub mod config;
pub mod error;
pub mod model;
pub mod preferences;
pub mod validation;

pub use category::{normalize_category_key, Category, CATEGORIES};
pub use error::{Error, ErrorCode, Result, ResultExt};
pub use model::{Quote, Scope};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::category::{normalize_category_key, Category, CATEGORIES};
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::model::{Quote, Scope};
    pub use crate::preferences::{Preferences, PreferencesStore, ThemeMode};
    pub use crate::validation::{validate_quote_text, ValidationResult, Validator};
}
