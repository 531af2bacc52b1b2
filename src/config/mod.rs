// SPDX-License-Identifier: MPL-2.0
//! This module handles the control layer's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use scrub_chrome::config::{self, Config, ControlSettings};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.hide_delay_ms = Some(5_000);
//!
//! // Resolve into validated values for the controls
//! let settings = ControlSettings::from_config(&config);
//! assert_eq!(settings.hide_delay.as_millis(), 5_000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::video::{DoubleTapWindow, HideDelay, KeyboardSeekStep, QuickSeekStep};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ScrubChrome";

/// Persisted user preferences. Every field is optional so older files load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub hide_delay_ms: Option<u64>,
    #[serde(default)]
    pub double_tap_window_ms: Option<u64>,
    #[serde(default)]
    pub quick_seek_secs: Option<f64>,
    #[serde(default)]
    pub keyboard_seek_step_secs: Option<f64>,
}

/// Validated timing and step values consumed by the control components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlSettings {
    pub hide_delay: HideDelay,
    pub double_tap_window: DoubleTapWindow,
    pub quick_seek_step: QuickSeekStep,
    pub keyboard_seek_step: KeyboardSeekStep,
}

impl ControlSettings {
    /// Resolves optional config values, clamping each into its valid range.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            hide_delay: config
                .hide_delay_ms
                .map(HideDelay::from_millis)
                .unwrap_or_default(),
            double_tap_window: config
                .double_tap_window_ms
                .map(DoubleTapWindow::from_millis)
                .unwrap_or_default(),
            quick_seek_step: config
                .quick_seek_secs
                .map(QuickSeekStep::new)
                .unwrap_or_default(),
            keyboard_seek_step: config
                .keyboard_seek_step_secs
                .map(KeyboardSeekStep::new)
                .unwrap_or_default(),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads a config file. Malformed TOML falls back to defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "malformed settings, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
