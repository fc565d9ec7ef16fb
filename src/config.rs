/// Application settings
///
/// Loaded once at startup from `settings.json` in the user's config directory:
/// - Linux: ~/.config/homework-helper/settings.json
/// - macOS: ~/Library/Application Support/homework-helper/settings.json
/// - Windows: %APPDATA%\homework-helper\settings.json
///
/// The file is optional and never written by the app.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

use crate::error::ConfigError;

/// Backend used by the development setup
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the AI service; endpoint paths are appended to it
    pub server_url: String,
    /// Give up on a submission after this many seconds
    pub request_timeout_secs: u64,
    /// How long the navigation bar stays revealed after a touch
    pub nav_auto_hide_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            request_timeout_secs: 120,
            nav_auto_hide_ms: 3000,
        }
    }
}

impl Settings {
    /// Load settings from the default location.
    ///
    /// A missing file gives defaults. A broken file is reported and
    /// also gives defaults, so a typo never keeps the app from starting.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            warn!("⚠️  Could not determine config directory, using default settings");
            return Self::default();
        };

        if !path.exists() {
            info!("⚙️  No settings at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => {
                info!("⚙️  Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                warn!("⚠️  Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse a settings file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse settings from a JSON string, filling gaps with defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.server_url = settings.server_url.trim_end_matches('/').to_string();
        Ok(settings)
    }

    /// Where the settings file lives
    fn path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("homework-helper");
        path.push("settings.json");
        Some(path)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn nav_auto_hide(&self) -> Duration {
        Duration::from_millis(self.nav_auto_hide_ms)
    }
}
