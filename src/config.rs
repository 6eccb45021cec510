//! Startup configuration
//!
//! Read from `startup.json` in the app config directory. Every field is
//! optional in the file; missing fields take their defaults and a missing
//! file means "all defaults".

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_HOST_ANCHOR;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path:?}: {error}")]
    Read { path: PathBuf, error: String },

    #[error("Failed to parse {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StartupConfig {
    /// Label of the window the overlay UI is mounted into
    pub host_anchor: String,
    /// Whether to ask the update server for a newer build before mounting
    pub check_updates: bool,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            host_anchor: DEFAULT_HOST_ANCHOR.to_string(),
            check_updates: true,
        }
    }
}

impl StartupConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    error: e.to_string(),
                })
            }
        };

        let config: Self = serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config.normalized())
    }

    fn normalized(mut self) -> Self {
        let anchor = self.host_anchor.trim();
        self.host_anchor = if anchor.is_empty() {
            DEFAULT_HOST_ANCHOR.to_string()
        } else {
            anchor.to_string()
        };
        self
    }
}

/// Loads the startup config from the app config directory, falling back to
/// the defaults (with a warning) when it cannot be read.
#[cfg(feature = "desktop")]
pub fn load_startup_config<R: tauri::Runtime>(app: &tauri::AppHandle<R>) -> StartupConfig {
    use rust_i18n::t;
    use tauri::Manager;

    let config_dir = match app.path().app_config_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "{}",
                t!("main.failed_to_retrieve_config_directory", error = e)
            );
            return StartupConfig::default();
        }
    };

    let path = config_dir.join(crate::constants::STARTUP_CONFIG_FILE);
    StartupConfig::load(&path).unwrap_or_else(|e| {
        log::warn!("{}", t!("startup.config_fallback", error = e));
        StartupConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("startup.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = StartupConfig::load(&dir.path().join("startup.json")).unwrap();
        assert_eq!(config, StartupConfig::default());
        assert_eq!(config.host_anchor, "overlay");
        assert!(config.check_updates);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{ "checkUpdates": false }"#);
        let config = StartupConfig::load(&path).unwrap();
        assert!(!config.check_updates);
        assert_eq!(config.host_anchor, "overlay");
    }

    #[test]
    fn custom_anchor_is_trimmed() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{ "hostAnchor": "  timer  " }"#);
        assert_eq!(StartupConfig::load(&path).unwrap().host_anchor, "timer");
    }

    #[test]
    fn blank_anchor_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{ "hostAnchor": "   " }"#);
        assert_eq!(StartupConfig::load(&path).unwrap().host_anchor, "overlay");
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "{ not json");
        assert!(matches!(
            StartupConfig::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn directory_in_place_of_file_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            StartupConfig::load(dir.path()),
            Err(ConfigError::Read { .. })
        ));
    }
}
