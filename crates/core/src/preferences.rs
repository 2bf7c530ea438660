//! User preferences
//!
//! A small key-value document persisted as JSON: the selected language, the
//! theme mode, and free-form profile fields.

use crate::error::{Error, ErrorCode, Result};
use crate::validation::Validator;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Languages with bundled content.
pub const SUPPORTED_LANGUAGES: [(&str, &str); 3] =
    [("en", "English"), ("hi", "हिन्दी"), ("gu", "ગુજરાતી")];

/// Theme mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Always light
    Light,
    /// Always dark
    Dark,
    /// Follow the system setting
    #[default]
    System,
}

impl FromStr for ThemeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" | "system-default" => Ok(Self::System),
            other => Err(Error::new(
                ErrorCode::InvalidInput,
                format!("Unknown theme mode: {other}"),
            )
            .with_suggestion("Use one of: light, dark, system")),
        }
    }
}

/// Stored preference values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Selected language code
    #[serde(default = "default_language")]
    pub app_language: String,
    /// Theme mode
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Profile placeholders (name, bio, ...)
    #[serde(default)]
    pub profile: BTreeMap<String, String>,
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            app_language: default_language(),
            theme_mode: ThemeMode::default(),
            profile: BTreeMap::new(),
        }
    }
}

/// Human-readable name of a language code, if it is a bundled language
#[must_use]
pub fn language_name(code: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// File-backed preferences
pub struct PreferencesStore {
    path: PathBuf,
}

impl PreferencesStore {
    /// Create a store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the platform config directory
    #[must_use]
    pub fn default_location() -> Self {
        let path = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join("dilse")
            .join("preferences.json");
        Self::new(path)
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load preferences, returning defaults when the file does not exist yet
    pub fn load(&self) -> Result<Preferences> {
        if !self.path.exists() {
            return Ok(Preferences::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let prefs = serde_json::from_str(&content)?;
        Ok(prefs)
    }

    /// Persist preferences
    pub fn save(&self, prefs: &Preferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(prefs)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Update preferences in place and persist them
    pub fn update<F>(&self, f: F) -> Result<Preferences>
    where
        F: FnOnce(&mut Preferences),
    {
        let mut prefs = self.load()?;
        f(&mut prefs);
        self.save(&prefs)?;
        Ok(prefs)
    }

    /// Set the selected language
    pub fn set_language(&self, code: &str) -> Result<Preferences> {
        let code = code.trim().to_lowercase();
        Validator::new()
            .required("app_language", &code)
            .max_length("app_language", &code, 8)
            .validate()
            .to_result()?;

        self.update(|prefs| prefs.app_language = code)
    }

    /// Set the theme mode
    pub fn set_theme(&self, mode: ThemeMode) -> Result<Preferences> {
        self.update(|prefs| prefs.theme_mode = mode)
    }

    /// Set a profile field
    pub fn set_profile_field(&self, key: &str, value: &str) -> Result<Preferences> {
        Validator::new()
            .required("key", key)
            .validate()
            .to_result()?;

        self.update(|prefs| {
            prefs.profile.insert(key.to_string(), value.to_string());
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, PreferencesStore) {
        let dir = TempDir::new().unwrap();
        let store = PreferencesStore::new(dir.path().join("nested").join("prefs.json"));
        (dir, store)
    }

    #[test]
    fn test_load_defaults_when_missing() {
        let (_dir, store) = store();
        let prefs = store.load().unwrap();
        assert_eq!(prefs.app_language, "en");
        assert_eq!(prefs.theme_mode, ThemeMode::System);
        assert!(prefs.profile.is_empty());
    }

    #[test]
    fn test_set_language_persists() {
        let (_dir, store) = store();
        store.set_language(" HI ").unwrap();
        assert_eq!(store.load().unwrap().app_language, "hi");
    }

    #[test]
    fn test_set_language_rejects_blank() {
        let (_dir, store) = store();
        assert!(store.set_language("  ").is_err());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_theme_and_profile() {
        let (_dir, store) = store();
        store.set_theme(ThemeMode::Dark).unwrap();
        store.set_profile_field("name", "Vishvas").unwrap();

        let prefs = store.load().unwrap();
        assert_eq!(prefs.theme_mode, ThemeMode::Dark);
        assert_eq!(prefs.profile.get("name").map(String::as_str), Some("Vishvas"));
    }

    #[test]
    fn test_theme_mode_from_str() {
        assert_eq!("Dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!("system".parse::<ThemeMode>().unwrap(), ThemeMode::System);
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_language_name() {
        assert_eq!(language_name("gu"), Some("ગુજરાતી"));
        assert_eq!(language_name("fr"), None);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let (_dir, store) = store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), r#"{"theme_mode":"light"}"#).unwrap();

        let prefs = store.load().unwrap();
        assert_eq!(prefs.app_language, "en");
        assert_eq!(prefs.theme_mode, ThemeMode::Light);
    }
}
