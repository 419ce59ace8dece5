use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Launcher settings read from `<config dir>/promanage/config.toml`.
///
/// Only the desktop window and log output are configurable; page
/// content is fixed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,

    /// `tracing` filter directive, overridden by `RUST_LOG` when set
    pub log_filter: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            log_filter: "promanage=info".to_string(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "ProManage Workspace".to_string(),
            width: 1400.0,
            height: 900.0,
        }
    }
}

impl AppConfig {
    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(AppError::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        toml::from_str(&content).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(AppError::NoConfigDir)?;
        Ok(config_dir.join("promanage").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[window]\nwidth = 1024.0\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.window.width, 1024.0);
        assert_eq!(config.window.height, 900.0);
        assert_eq!(config.window.title, "ProManage Workspace");
        assert_eq!(config.log_filter, "promanage=info");
    }

    #[test]
    fn test_full_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
log_filter = "promanage=debug"

[window]
title = "Acme Workspace"
width = 1280.0
height = 720.0
"#,
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.log_filter, "promanage=debug");
        assert_eq!(config.window.title, "Acme Workspace");
        assert_eq!(config.window.height, 720.0);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[window\nwidth = ").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, AppError::ConfigParse { .. }));
    }

    #[test]
    fn test_directory_path_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let err = AppConfig::load_from(dir.path()).unwrap_err();
        assert!(matches!(err, AppError::ConfigRead { .. }));
    }
}
