// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences and API credentials to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[api]` - Login and data endpoints, account, request timeout
//! - `[display]` - Which records show the detail panel
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `PET_ROSTER_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use pet_roster::config;
//!
//! let (config, _warning) = config::load();
//! let credentials = config.credentials();
//! assert!(credentials.login_url.is_empty() || credentials.login_url.starts_with("http"));
//! ```

pub mod defaults;
pub mod secrets;

pub use defaults::*;

use crate::app::paths;
use crate::domain::{Credentials, DetailPanelRule};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable that overrides `api.password`.
pub const ENV_PASSWORD: &str = "PET_ROSTER_PASSWORD";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "de").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Remote API settings.
#[derive(Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ApiConfig {
    /// Login endpoint (`POST`, returns a bearer token).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_url: Option<String>,

    /// Data endpoint (`GET`, returns the animal array).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pets_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(
        default = "default_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout_secs: Option<u64>,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("login_url", &self.login_url)
            .field("pets_url", &self.pets_url)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Record ids that show the extra detail panel.
    #[serde(
        default = "default_detail_panel_ids",
        skip_serializing_if = "Option::is_none"
    )]
    pub detail_panel_ids: Option<Vec<i64>>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            detail_panel_ids: default_detail_panel_ids(),
        }
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
    pub display: DisplayConfig,
}

impl Config {
    /// Credentials for the session, with `PET_ROSTER_PASSWORD` taking
    /// precedence over the stored password.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        let env_password = std::env::var(ENV_PASSWORD)
            .ok()
            .filter(|value| !value.is_empty());

        Credentials {
            login_url: self.api.login_url.clone().unwrap_or_default(),
            email: self.api.email.clone().unwrap_or_default(),
            password: env_password
                .or_else(|| self.api.password.clone())
                .unwrap_or_default(),
            pets_url: self.api.pets_url.clone().unwrap_or_default(),
        }
    }

    /// Request timeout clamped to the supported range.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .api
            .timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    #[must_use]
    pub fn detail_panel_rule(&self) -> DetailPanelRule {
        match &self.display.detail_panel_ids {
            Some(ids) => DetailPanelRule::new(ids.iter().copied()),
            None => DetailPanelRule::new(DEFAULT_DETAIL_PANEL_IDS),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn default_detail_panel_ids() -> Option<Vec<i64>> {
    Some(DEFAULT_DETAIL_PANEL_IDS.to_vec())
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Returns the config file path that `load()` and `save()` use.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    get_config_path_with_override(None)
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
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
                    eprintln!("Failed to load {}: {}", path.display(), err);
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
    Err(Error::Config("no config directory available".to_string()))
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
