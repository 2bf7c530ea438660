//! Configuration schema definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default remote source
pub const DEFAULT_API_URL: &str =
    "https://raw.githubusercontent.com/Vishvaskhandala/shayari-api/main/raw/";

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// Remote source settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Local store settings
    #[serde(default)]
    pub store: StoreConfig,

    /// Card rendering and export settings
    #[serde(default)]
    pub card: CardConfig,

    /// Logging settings
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Language used when neither the command line nor preferences choose one
    #[serde(default = "default_language")]
    pub default_language: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

/// Remote source settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the JSON endpoints
    #[serde(default = "default_api_url")]
    pub base_url: String,

    /// Connect and read timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Local store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// SQLite database file
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// Insert the bundled sample quotes when the store is empty
    #[serde(default = "default_true")]
    pub seed_on_empty: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            seed_on_empty: true,
        }
    }
}

fn default_database_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from(".local/share"))
        .join("dilse")
        .join("quotes_database.sqlite")
}

fn default_true() -> bool {
    true
}

/// Card rendering and export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardConfig {
    /// TrueType/OpenType font used for card text
    #[serde(default)]
    pub font_path: Option<PathBuf>,

    /// Directory that receives saved cards
    #[serde(default = "default_pictures_dir")]
    pub pictures_dir: PathBuf,

    /// Directory that receives the temporary share file
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,

    /// JPEG quality (1-100)
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,

    /// Base font size used when none is given
    #[serde(default = "default_font_size")]
    pub font_size: f32,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            font_path: None,
            pictures_dir: default_pictures_dir(),
            cache_dir: default_cache_dir(),
            jpeg_quality: default_jpeg_quality(),
            font_size: default_font_size(),
        }
    }
}

fn default_pictures_dir() -> PathBuf {
    dirs::picture_dir().unwrap_or_else(|| PathBuf::from("Pictures"))
}

fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from(".cache"))
        .join("dilse")
}

fn default_jpeg_quality() -> u8 {
    95
}

fn default_font_size() -> f32 {
    20.0
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetrySettings {
    /// Default log filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Optional file that receives a copy of the log
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
