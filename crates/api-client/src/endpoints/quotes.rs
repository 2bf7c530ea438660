//! Quote endpoints

use crate::client::QuoteClient;
use crate::error::ApiResult;
use dilse_core::{normalize_category_key, Quote};
use tracing::instrument;

/// Quote endpoints of the JSON source
#[derive(Clone)]
pub struct QuotesApi {
    client: QuoteClient,
}

impl QuotesApi {
    /// Create a new quotes API interface
    pub(crate) fn new(client: QuoteClient) -> Self {
        Self { client }
    }

    /// All quotes
    ///
    /// GET quotes.json
    #[instrument(skip(self))]
    pub async fn all(&self) -> ApiResult<Vec<Quote>> {
        self.client.get("quotes.json").await
    }

    /// Quote of the day
    ///
    /// GET today.json
    #[instrument(skip(self))]
    pub async fn today(&self) -> ApiResult<Quote> {
        self.client.get("today.json").await
    }

    /// A random quote
    ///
    /// GET random.json
    #[instrument(skip(self))]
    pub async fn random(&self) -> ApiResult<Quote> {
        self.client.get("random.json").await
    }

    /// Quotes of one category
    ///
    /// GET categories/<key>.json, with the key normalized
    #[instrument(skip(self))]
    pub async fn by_category(&self, category: &str) -> ApiResult<Vec<Quote>> {
        let path = format!("categories/{}.json", normalize_category_key(category));
        self.client.get(&path).await
    }
}
