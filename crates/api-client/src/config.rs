//! Configuration for the quote source client
//!
//! Defaults come from the `[api]` section of `dilse.toml` and can be
//! overridden through environment variables.

use crate::error::{ApiError, ApiResult};
use dilse_core::config::{ApiConfig, DEFAULT_API_URL};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Environment variable overriding the base URL
pub const ENV_API_URL: &str = "DILSE_API_URL";

/// Environment variable overriding the timeout
pub const ENV_TIMEOUT_SECS: &str = "DILSE_TIMEOUT_SECS";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the JSON files, with a trailing slash
    pub base_url: String,
    /// Connect timeout
    #[serde(with = "duration_secs")]
    pub connect_timeout: Duration,
    /// Overall request timeout (covers reading the body)
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            connect_timeout: DEFAULT_TIMEOUT,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Configuration from the `[api]` section of the config file
    #[must_use]
    pub fn from_schema(api: &ApiConfig) -> Self {
        let timeout = Duration::from_secs(api.timeout_secs);
        Self {
            base_url: normalize_base_url(&api.base_url),
            connect_timeout: timeout,
            timeout,
        }
    }

    /// Apply `DILSE_API_URL` and `DILSE_TIMEOUT_SECS` on top of this configuration
    pub fn with_env_overrides(mut self) -> ApiResult<Self> {
        if let Ok(url) = env::var(ENV_API_URL) {
            self = self.with_base_url(url);
        }

        if let Ok(raw) = env::var(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ApiError::config(format!("{ENV_TIMEOUT_SECS} must be a number of seconds, got '{raw}'"))
            })?;
            self = self.with_timeout(Duration::from_secs(secs));
        }

        Ok(self)
    }

    /// Builder-style method to set base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(&url.into());
        self
    }

    /// Builder-style method to set both timeouts
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self.timeout = timeout;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.trim_end_matches('/').is_empty() {
            return Err(ApiError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::InvalidUrl(format!(
                "{} (must start with http:// or https://)",
                self.base_url
            )));
        }

        if self.timeout.is_zero() || self.connect_timeout.is_zero() {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        Ok(())
    }

    /// Absolute URL of a file below the base URL
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.is_empty() || trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.base_url.contains("shayari-api"));
        assert!(config.base_url.ends_with('/'));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builder_pattern() {
        let config = ClientConfig::default()
            .with_base_url("http://localhost:8080/raw")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.base_url, "http://localhost:8080/raw/");
        assert_eq!(config.url_for("quotes.json"), "http://localhost:8080/raw/quotes.json");
        assert_eq!(config.url_for("/today.json"), "http://localhost:8080/raw/today.json");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_from_schema() {
        let api = ApiConfig {
            base_url: "https://example.org/q".to_string(),
            timeout_secs: 12,
        };
        let config = ClientConfig::from_schema(&api);
        assert_eq!(config.base_url, "https://example.org/q/");
        assert_eq!(config.timeout, Duration::from_secs(12));
    }

    #[test]
    fn test_validation() {
        assert!(ClientConfig::default().validate().is_ok());
        assert!(ClientConfig::default().with_base_url("").validate().is_err());
        assert!(matches!(
            ClientConfig::default().with_base_url("ftp://x").validate(),
            Err(ApiError::InvalidUrl(_))
        ));
        assert!(ClientConfig::default()
            .with_timeout(Duration::ZERO)
            .validate()
            .is_err());
    }
}
