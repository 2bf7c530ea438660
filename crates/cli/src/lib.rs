//! Terminal helpers for the DilSe Quotes command line
//!
//! Provides shared CLI functionality:
//! - Status messages and quote formatting
//! - Text/JSON output selection
//! - Spinners for network operations

#![warn(missing_docs)]

pub mod output;
pub mod progress;

pub use output::{OutputFormat, Status};
