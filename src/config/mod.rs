// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration: user preferences read
//! from a `settings.toml` file. The card never writes it back.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[slideshow]` - Auto-play interval
//! - `[effects]` - Particles and heart burst
//! - `[audio]` - Music volume and whether entering the card starts the music
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `KEEPSAKE_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use keepsake::config::{self, Config};
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("settings ignored: {key}");
//! }
//! let interval = config.slideshow.autoplay_interval_secs;
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,
}

/// Slideshow behavior.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SlideshowConfig {
    /// Seconds between automatic advances.
    #[serde(default = "default_autoplay_interval_secs")]
    pub autoplay_interval_secs: Option<u32>,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_secs: default_autoplay_interval_secs(),
        }
    }
}

/// Decorative effects.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EffectsConfig {
    /// Number of floating particles.
    #[serde(default = "default_particle_count")]
    pub particle_count: Option<u32>,

    /// Whether entering the card fires the heart burst.
    #[serde(default = "default_true")]
    pub heart_burst: Option<bool>,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            particle_count: default_particle_count(),
            heart_burst: Some(true),
        }
    }
}

/// Background music settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AudioConfig {
    /// Playback volume (0.0 to 1.0).
    #[serde(default = "default_volume")]
    pub volume: Option<f32>,

    /// Start the music when the slideshow opens.
    #[serde(default = "default_true")]
    pub play_on_enter: Option<bool>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            volume: default_volume(),
            play_on_enter: Some(true),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub slideshow: SlideshowConfig,

    #[serde(default)]
    pub effects: EffectsConfig,

    #[serde(default)]
    pub audio: AudioConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_true() -> Option<bool> {
    Some(true)
}

fn default_autoplay_interval_secs() -> Option<u32> {
    Some(DEFAULT_AUTOPLAY_INTERVAL_SECS)
}

fn default_particle_count() -> Option<u32> {
    Some(DEFAULT_PARTICLE_COUNT)
}

fn default_volume() -> Option<f32> {
    Some(DEFAULT_VOLUME)
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
                    tracing::warn!(path = %path.display(), "ignoring unreadable config: {err}");
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
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn load_from_path_reads_every_section() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            r#"
[general]
language = "fr"

[slideshow]
autoplay_interval_secs = 8

[effects]
particle_count = 12
heart_burst = false

[audio]
volume = 0.5
play_on_enter = false
"#,
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(
            loaded,
            Config {
                general: GeneralConfig {
                    language: Some("fr".to_string()),
                },
                slideshow: SlideshowConfig {
                    autoplay_interval_secs: Some(8),
                },
                effects: EffectsConfig {
                    particle_count: Some(12),
                    heart_burst: Some(false),
                },
                audio: AudioConfig {
                    volume: Some(0.5),
                    play_on_enter: Some(false),
                },
            }
        );
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
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[slideshow]\nautoplay_interval_secs = 9\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.slideshow.autoplay_interval_secs, Some(9));
        assert_eq!(loaded.effects, EffectsConfig::default());
        assert_eq!(loaded.audio.volume, Some(DEFAULT_VOLUME));
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(
            config.slideshow.autoplay_interval_secs,
            Some(DEFAULT_AUTOPLAY_INTERVAL_SECS)
        );
        assert_eq!(config.effects.particle_count, Some(DEFAULT_PARTICLE_COUNT));
        assert_eq!(config.effects.heart_burst, Some(true));
        assert_eq!(config.audio.play_on_enter, Some(true));
    }

    #[test]
    fn autoplay_bounds_contain_default() {
        assert!(DEFAULT_AUTOPLAY_INTERVAL_SECS >= MIN_AUTOPLAY_INTERVAL_SECS);
        assert!(DEFAULT_AUTOPLAY_INTERVAL_SECS <= MAX_AUTOPLAY_INTERVAL_SECS);
    }

    #[test]
    fn load_with_override_reports_unreadable_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[").expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_reads_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "[general]\nlanguage = \"fr\"\n",
        )
        .expect("failed to write config");

        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(loaded.general.language, Some("fr".to_string()));
    }

    #[test]
    fn load_with_override_without_file_uses_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(loaded, Config::default());
    }
}
