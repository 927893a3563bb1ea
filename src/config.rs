//! # Settings
//!
//! Persistent configuration stored as JSON under the platform config directory.
//! Values are resolved in order: defaults, settings file, environment, command line.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable overriding [`Settings::api_base`].
pub const API_BASE_ENV: &str = "REPOCOMPASS_API_BASE";

const APP_DIR: &str = "repocompass";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file: {0}")]
    Json(#[from] serde_json::Error),
}

/// User settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the analysis API, including the version prefix
    pub api_base: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Project preselected in the explorer
    pub default_project: String,
    /// Navigation token active when the dashboard was last closed
    pub last_route: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:8000/api/v1".to_string(),
            request_timeout_secs: 10,
            default_project: "apache/iotdb".to_string(),
            last_route: String::new(),
        }
    }
}

impl Settings {
    /// Default location of the settings file, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
    }

    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Write settings to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_api_base_override(std::env::var(API_BASE_ENV).ok());
    }

    fn apply_api_base_override(&mut self, value: Option<String>) {
        if let Some(base) = value.filter(|v| !v.trim().is_empty()) {
            self.api_base = base;
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load(&temp_dir.path().join("nope.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join(SETTINGS_FILE);

        let settings = Settings {
            last_route: "/project-explorer".to_string(),
            ..Settings::default()
        };
        settings.save(&path).unwrap();

        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(SETTINGS_FILE);
        fs::write(&path, r#"{ "api_base": "http://example.test/api/v1" }"#).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.api_base, "http://example.test/api/v1");
        assert_eq!(settings.request_timeout_secs, 10);
        assert_eq!(settings.default_project, "apache/iotdb");
    }

    #[test]
    fn test_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(SETTINGS_FILE);
        fs::write(&path, "not json").unwrap();

        assert!(matches!(Settings::load(&path), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_api_base_override() {
        let mut settings = Settings::default();
        settings.apply_api_base_override(Some("   ".to_string()));
        assert_eq!(settings.api_base, Settings::default().api_base);

        settings.apply_api_base_override(Some("http://other/api/v1".to_string()));
        assert_eq!(settings.api_base, "http://other/api/v1");
    }

    #[test]
    fn test_timeout_never_zero() {
        let settings = Settings {
            request_timeout_secs: 0,
            ..Settings::default()
        };
        assert_eq!(settings.request_timeout(), Duration::from_secs(1));
    }
}
