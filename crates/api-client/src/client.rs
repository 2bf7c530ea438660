//! Main API client implementation

use crate::config::ClientConfig;
use crate::endpoints::QuotesApi;
use crate::error::{ApiError, ApiResult};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// HTTP client for the quote source.
///
/// Requests are plain GETs with fixed connect and read timeouts. Failures
/// are returned to the caller as-is; there is no retry.
#[derive(Clone)]
pub struct QuoteClient {
    inner: Client,
    config: Arc<ClientConfig>,
}

impl QuoteClient {
    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("dilse-api-client/", env!("CARGO_PKG_VERSION"))),
        );

        let inner = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Access the quote endpoints
    #[must_use]
    pub fn quotes(&self) -> QuotesApi {
        QuotesApi::new(self.clone())
    }

    /// Perform a GET request relative to the base URL
    #[instrument(skip(self), fields(request_id))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.config.url_for(path);
        self.get_url(&url).await
    }

    /// Perform a GET request to an absolute URL
    pub async fn get_url<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let request_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("request_id", request_id.as_str());

        let start = Instant::now();
        let response = self
            .inner
            .get(url)
            .header(X_REQUEST_ID, &request_id)
            .send()
            .await?;

        let result = self.handle_response(response).await;
        debug!(
            request_id = %request_id,
            url = %url,
            elapsed_ms = start.elapsed().as_millis(),
            ok = result.is_ok(),
            "Request finished"
        );
        result
    }

    /// Handle HTTP response and deserialize
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> ApiResult<T> {
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            serde_json::from_slice(&body).map_err(ApiError::Json)
        } else {
            let message = response
                .text()
                .await
                .ok()
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());
            Err(ApiError::api_response(status.as_u16(), message))
        }
    }
}
