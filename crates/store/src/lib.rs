//! Local quote storage for DilSe Quotes
//!
//! Quotes fetched from the remote JSON source are cached in SQLite so the app
//! keeps working offline. The favorite flag only ever changes locally: every
//! sync replaces quote content but carries the stored flag over by id.
//!
//! # Example
//!
//! ```rust,no_run
//! use dilse_api_client::{ClientConfig, QuoteClient};
//! use dilse_core::Scope;
//! use dilse_store::{QuoteRepository, QuoteStore};
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let store = QuoteStore::open("quotes.db".as_ref())?;
//! let repo = QuoteRepository::new(store, Arc::new(QuoteClient::with_config(ClientConfig::default())?));
//!
//! let love = repo.quotes_for_scope(&Scope::new("love", "en"), true).await?;
//! println!("{} quotes ({:?})", love.quotes.len(), love.origin);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod seed;
pub mod store;
pub mod sync;
pub mod watch;

pub use error::{StoreError, StoreResult};
pub use seed::{sample_quotes, seed_if_empty, SEED_ID_BASE};
pub use store::QuoteStore;
pub use sync::{
    filter_scope, merge_favorites, DailyQuote, FallbackReason, Feed, Origin, QuoteRepository,
    QuoteSource, RefreshOutcome, ScopeQuotes,
};
pub use watch::ScopeSubscription;
