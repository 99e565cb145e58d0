// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[api]` - Search provider endpoint, access key and page size
//! - `[gallery]` - Gallery tile sizing
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `PHOTO_SEARCH_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_photo_search::app::config;
//!
//! let (mut config, _warning) = config::load();
//! config.api.per_page = Some(20);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums
// =============================================================================

/// Photo orientation filter supported by the provider.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Landscape,
    Portrait,
    Squarish,
}

impl Orientation {
    /// Returns the query parameter value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
            Orientation::Squarish => "squarish",
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Search provider settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Provider endpoint, without the `/search/photos` suffix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Provider access key. `PHOTO_SEARCH_ACCESS_KEY` overrides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,

    /// Results requested per page.
    #[serde(default = "default_per_page", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,

    /// Optional orientation filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            access_key: None,
            per_page: default_per_page(),
            orientation: None,
        }
    }
}

impl ApiConfig {
    /// Returns the configured endpoint or the provider default.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
    }

    /// Returns the page size, clamped to the range the provider accepts.
    #[must_use]
    pub fn per_page(&self) -> u32 {
        self.per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(MIN_PER_PAGE, MAX_PER_PAGE)
    }

    /// Returns the access key, preferring the environment over the file.
    #[must_use]
    pub fn resolved_access_key(&self) -> Option<String> {
        std::env::var(ENV_ACCESS_KEY)
            .ok()
            .or_else(|| self.access_key.clone())
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }
}

/// Gallery layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Target tile width in logical pixels.
    #[serde(
        default = "default_tile_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub tile_width: Option<f32>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            tile_width: default_tile_width(),
        }
    }
}

impl GalleryConfig {
    /// Returns the tile width, clamped to the supported range.
    #[must_use]
    pub fn tile_width(&self) -> f32 {
        self.tile_width
            .unwrap_or(DEFAULT_TILE_WIDTH)
            .clamp(MIN_TILE_WIDTH, MAX_TILE_WIDTH)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,
}

fn default_per_page() -> Option<u32> {
    Some(DEFAULT_PER_PAGE)
}

fn default_tile_width() -> Option<f32> {
    Some(DEFAULT_TILE_WIDTH)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::paths::tests::ENV_MUTEX;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            api: ApiConfig {
                base_url: Some("https://proxy.test".to_string()),
                access_key: Some("abc".to_string()),
                per_page: Some(20),
                orientation: Some(Orientation::Portrait),
            },
            gallery: GalleryConfig {
                tile_width: Some(300.0),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.api.per_page, Some(DEFAULT_PER_PAGE));
        assert_eq!(config.api.base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(config.api.orientation, None);
        assert_eq!(config.gallery.tile_width, Some(DEFAULT_TILE_WIDTH));
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"fr\"\n").unwrap();
        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.api, ApiConfig::default());
        assert_eq!(config.gallery, GalleryConfig::default());
    }

    #[test]
    fn orientation_uses_lowercase_names() {
        let config: Config = toml::from_str("[api]\norientation = \"squarish\"\n").unwrap();
        assert_eq!(config.api.orientation, Some(Orientation::Squarish));
        assert_eq!(Orientation::Squarish.as_str(), "squarish");
    }

    #[test]
    fn per_page_is_clamped() {
        let mut api = ApiConfig {
            per_page: Some(0),
            ..ApiConfig::default()
        };
        assert_eq!(api.per_page(), MIN_PER_PAGE);
        api.per_page = Some(500);
        assert_eq!(api.per_page(), MAX_PER_PAGE);
        api.per_page = None;
        assert_eq!(api.per_page(), DEFAULT_PER_PAGE);
    }

    #[test]
    fn tile_width_is_clamped() {
        let gallery = GalleryConfig {
            tile_width: Some(10.0),
        };
        assert_eq!(gallery.tile_width(), MIN_TILE_WIDTH);
    }

    #[test]
    fn blank_base_url_falls_back_to_default() {
        let api = ApiConfig {
            base_url: Some("  ".into()),
            ..ApiConfig::default()
        };
        assert_eq!(api.base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn access_key_env_var_takes_precedence() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let api = ApiConfig {
            access_key: Some("from-file".into()),
            ..ApiConfig::default()
        };

        std::env::remove_var(ENV_ACCESS_KEY);
        assert_eq!(api.resolved_access_key().as_deref(), Some("from-file"));

        std::env::set_var(ENV_ACCESS_KEY, " from-env ");
        assert_eq!(api.resolved_access_key().as_deref(), Some("from-env"));

        std::env::set_var(ENV_ACCESS_KEY, "   ");
        assert_eq!(api.resolved_access_key(), None);

        std::env::remove_var(ENV_ACCESS_KEY);
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = temp_dir.path().to_path_buf();
        let config = Config {
            gallery: GalleryConfig {
                tile_width: Some(180.0),
            },
            ..Config::default()
        };

        save_with_override(&config, Some(base.clone())).expect("failed to save");
        let (loaded, warning) = load_with_override(Some(base));

        assert!(warning.is_none());
        assert_eq!(loaded.gallery.tile_width, Some(180.0));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[api\nper_page = ")
            .expect("failed to write corrupted config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        save_to_path(&Config::default(), &path).expect("failed to save");

        let content = fs::read_to_string(&path).expect("failed to read");
        assert!(content.contains("[general]"));
        assert!(content.contains("[api]"));
        assert!(content.contains("[gallery]"));
        assert!(!content.contains("access_key"));
    }
}
