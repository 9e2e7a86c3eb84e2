// SPDX-License-Identifier: MPL-2.0
//! This module handles the site's configuration, including loading and saving
//! settings to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language of user-visible messages
//! - `[server]` - Contact endpoint bind address and route
//! - `[timing]` - Interaction delays (transition lock, fades, intervals)
//! - `[layout]` - Pixel offsets used by navigation and reveal checks
//!
//! # Examples
//!
//! ```no_run
//! use folio::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Message language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Contact endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Socket address the endpoint listens on.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Route the contact form posts to.
    #[serde(default = "default_contact_path")]
    pub contact_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            contact_path: default_contact_path(),
        }
    }
}

/// Interaction delays, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimingConfig {
    pub transition_ms: u64,
    pub lightbox_close_ms: u64,
    pub lightbox_fade_restore_ms: u64,
    pub resize_debounce_ms: u64,
    pub loader_ms: u64,
    pub page_transition_ms: u64,
    pub reveal_throttle_ms: u64,
    pub parallax_throttle_ms: u64,
    pub initial_check_ms: u64,
    pub stagger_delay_ms: u64,
    pub music_interval_ms: u64,
    pub tech_interval_ms: u64,
    pub message_hide_ms: u64,
    pub redirect_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            transition_ms: DEFAULT_TRANSITION_MS,
            lightbox_close_ms: DEFAULT_LIGHTBOX_CLOSE_MS,
            lightbox_fade_restore_ms: DEFAULT_LIGHTBOX_FADE_RESTORE_MS,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            loader_ms: DEFAULT_LOADER_MS,
            page_transition_ms: DEFAULT_PAGE_TRANSITION_MS,
            reveal_throttle_ms: DEFAULT_REVEAL_THROTTLE_MS,
            parallax_throttle_ms: DEFAULT_PARALLAX_THROTTLE_MS,
            initial_check_ms: DEFAULT_INITIAL_CHECK_MS,
            stagger_delay_ms: DEFAULT_STAGGER_DELAY_MS,
            music_interval_ms: DEFAULT_MUSIC_INTERVAL_MS,
            tech_interval_ms: DEFAULT_TECH_INTERVAL_MS,
            message_hide_ms: DEFAULT_MESSAGE_HIDE_MS,
            redirect_ms: DEFAULT_REDIRECT_MS,
        }
    }
}

/// Pixel offsets for geometry checks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    pub header_fallback_px: f32,
    pub reveal_offset_px: f32,
    pub active_section_offset_px: f32,
    pub header_scroll_threshold_px: f32,
    pub lazy_load_margin_px: f32,
    pub parallax_rate: f32,
    pub thank_you_path: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            header_fallback_px: DEFAULT_HEADER_FALLBACK_PX,
            reveal_offset_px: DEFAULT_REVEAL_OFFSET_PX,
            active_section_offset_px: DEFAULT_ACTIVE_SECTION_OFFSET_PX,
            header_scroll_threshold_px: DEFAULT_HEADER_SCROLL_THRESHOLD_PX,
            lazy_load_margin_px: DEFAULT_LAZY_LOAD_MARGIN_PX,
            parallax_rate: DEFAULT_PARALLAX_RATE,
            thank_you_path: DEFAULT_THANK_YOU_PATH.to_string(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Site configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub layout: LayoutConfig,
}

fn default_bind() -> String {
    DEFAULT_BIND_ADDR.to_string()
}

fn default_contact_path() -> String {
    DEFAULT_CONTACT_PATH.to_string()
}

// =============================================================================
// Resolved Timings
// =============================================================================

/// [`TimingConfig`] resolved into durations for the interaction controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub transition: Duration,
    pub lightbox_close: Duration,
    pub lightbox_fade_restore: Duration,
    pub resize_debounce: Duration,
    pub loader: Duration,
    pub page_transition: Duration,
    pub reveal_throttle: Duration,
    pub parallax_throttle: Duration,
    pub initial_check: Duration,
    pub stagger_delay: Duration,
    pub music_interval: Duration,
    pub tech_interval: Duration,
    pub message_hide: Duration,
    pub redirect: Duration,
}

impl From<&TimingConfig> for Timing {
    fn from(cfg: &TimingConfig) -> Self {
        let ms = Duration::from_millis;
        Self {
            transition: ms(cfg.transition_ms),
            lightbox_close: ms(cfg.lightbox_close_ms),
            lightbox_fade_restore: ms(cfg.lightbox_fade_restore_ms),
            resize_debounce: ms(cfg.resize_debounce_ms),
            loader: ms(cfg.loader_ms),
            page_transition: ms(cfg.page_transition_ms),
            reveal_throttle: ms(cfg.reveal_throttle_ms),
            parallax_throttle: ms(cfg.parallax_throttle_ms),
            initial_check: ms(cfg.initial_check_ms),
            stagger_delay: ms(cfg.stagger_delay_ms),
            music_interval: ms(cfg.music_interval_ms),
            tech_interval: ms(cfg.tech_interval_ms),
            message_hide: ms(cfg.message_hide_ms),
            redirect: ms(cfg.redirect_ms),
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::from(&TimingConfig::default())
    }
}

// =============================================================================
// Load / Save
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
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
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration into a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        config.server.bind = "0.0.0.0:8080".to_string();
        config.timing.transition_ms = 250;

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_rejects_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn load_with_override_warns_and_falls_back_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[timing\n").expect("write failed");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_without_file_returns_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let config: Config = toml::from_str("[timing]\ntransition_ms = 600\n").expect("parse");
        assert_eq!(config.timing.transition_ms, 600);
        assert_eq!(config.timing.lightbox_close_ms, DEFAULT_LIGHTBOX_CLOSE_MS);
        assert_eq!(config.server.contact_path, DEFAULT_CONTACT_PATH);
    }

    #[test]
    fn timing_resolves_to_durations() {
        let timing = Timing::default();
        assert_eq!(timing.transition, Duration::from_millis(400));
        assert_eq!(timing.lightbox_close, Duration::from_millis(300));
        assert_eq!(timing.loader, Duration::from_millis(1200));
    }
}
