//! Configuration management for dlrepro

mod keys;

pub use keys::{Action, ActionGroup, KeyBindings, key_to_string};

use crate::paths;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// How long the event loop waits for input before redrawing, in milliseconds
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,

    /// Lines moved per code scroll step
    #[serde(default = "default_scroll_step")]
    pub scroll_step: usize,

    /// Keybindings configuration
    #[serde(default)]
    pub keys: KeyBindings,
}

const fn default_poll_interval() -> u64 {
    250
}

const fn default_scroll_step() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval(),
            scroll_step: default_scroll_step(),
            keys: KeyBindings::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// A missing file yields defaults. An unreadable or invalid file is logged
    /// with a warning and also yields defaults.
    #[must_use]
    pub fn load() -> Self {
        let path = Self::default_path();
        if !path.exists() {
            debug!("Config file not found, using defaults");
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                debug!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                warn!("Failed to load config: {e:#}");
                Self::default()
            }
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        // Ensure any new default keybindings are available
        config.keys.merge_defaults();
        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn default_path() -> PathBuf {
        paths::config_path()
    }
}
