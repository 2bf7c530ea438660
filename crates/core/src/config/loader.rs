//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, ErrorCode, Result};
use crate::validation::Validator;
use std::path::{Path, PathBuf};

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed settings
    pub schema: ConfigSchema,
    /// File the settings were read from, if any
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    ///
    /// An explicit path must exist. Without one, the standard locations are
    /// searched and defaults are used when none is present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => return Err(Error::config_not_found(p)),
            Some(p) => Some(p.to_path_buf()),
            None => find_config_file(),
        };

        let schema = if let Some(ref p) = config_path {
            load_config_file(p)?
        } else {
            ConfigSchema::default()
        };

        validate(&schema)?;

        Ok(Self {
            schema,
            path: config_path,
        })
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    let candidates = ["dilse.toml", ".dilse.toml", ".config/dilse.toml"];

    candidates
        .into_iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::config(format!("Failed to read config file {}", path.display())).with_source(e)
    })?;

    toml::from_str(&content).map_err(|e| {
        Error::new(
            ErrorCode::ConfigParseError,
            format!("Failed to parse config file {}", path.display()),
        )
        .with_source(e)
    })
}

fn validate(schema: &ConfigSchema) -> Result<()> {
    Validator::new()
        .required("api.base_url", &schema.api.base_url)
        .range("api.timeout_secs", schema.api.timeout_secs, 1, 300)
        .range("card.jpeg_quality", schema.card.jpeg_quality, 1, 100)
        .range("card.font_size", schema.card.font_size, 1.0, 200.0)
        .validate()
        .to_result()
        .map_err(|e| Error::new(ErrorCode::InvalidConfigValue, e.message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.path.is_none());
        assert_eq!(config.schema.api.timeout_secs, 30);
        assert_eq!(config.schema.card.jpeg_quality, 95);
        assert_eq!(config.schema.general.default_language, "en");
    }

    #[test]
    fn test_config_load_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dilse.toml");
        fs::write(
            &path,
            r#"
            [api]
            base_url = "http://localhost:8080/"
            timeout_secs = 5

            [card]
            jpeg_quality = 80
            "#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.schema.api.base_url, "http://localhost:8080/");
        assert_eq!(config.schema.api.timeout_secs, 5);
        assert_eq!(config.schema.card.jpeg_quality, 80);
        assert_eq!(config.schema.card.font_size, 20.0);
        assert_eq!(config.path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_config_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/nonexistent/dilse.toml"))).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigNotFound);
    }

    #[test]
    fn test_config_rejects_invalid_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dilse.toml");
        fs::write(&path, "[card]\njpeg_quality = 0\n").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidConfigValue);
    }

    #[test]
    fn test_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dilse.toml");
        fs::write(&path, "[api\nbase_url = ").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigParseError);
    }
}
