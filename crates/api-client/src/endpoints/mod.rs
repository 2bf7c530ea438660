//! Endpoint-specific API implementations
//!
//! ## Mapping to the JSON source
//!
//! | Method | File | Description |
//! |--------|------|-------------|
//! | `QuotesApi::all` | `quotes.json` | Every quote in every language |
//! | `QuotesApi::today` | `today.json` | Quote of the day |
//! | `QuotesApi::random` | `random.json` | A random quote |
//! | `QuotesApi::by_category` | `categories/<key>.json` | Quotes of one category |

pub mod quotes;

pub use quotes::QuotesApi;
