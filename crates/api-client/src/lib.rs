//! HTTP client for the DilSe Quotes JSON source
//!
//! The source is a set of static, read-only JSON files. This crate wraps
//! `reqwest` with fixed connect and read timeouts and a request ID header
//! for log correlation. Failures are returned, never retried.
//!
//! # Example
//!
//! ```rust,no_run
//! use dilse_api_client::{QuoteClient, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = QuoteClient::with_config(ClientConfig::default().with_env_overrides()?)?;
//!
//!     let quotes = client.quotes().all().await?;
//!     println!("Got {} quotes", quotes.len());
//!
//!     let today = client.quotes().today().await?;
//!     println!("{}", today.share_text());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;

pub use client::QuoteClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::QuoteClient;
    pub use crate::config::ClientConfig;
    pub use crate::endpoints::QuotesApi;
    pub use crate::error::{ApiError, ApiResult};
}
