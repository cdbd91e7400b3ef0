//! Configuration management for the gallery server.
//!
//! Handles loading and validating configuration from JSON files. The
//! configuration is read once at startup and never mutated afterwards;
//! every component receives it behind an `Arc`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "/opt/photo-gallery/config.json";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Listen address ("0.0.0.0" means all interfaces)
    #[serde(default = "default_host")]
    pub host: String,

    /// Web server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum thumbnail display width in pixels
    #[serde(default = "default_thumb_width")]
    pub thumb_width: u32,

    /// Maximum thumbnail display height in pixels
    #[serde(default = "default_thumb_height")]
    pub thumb_height: u32,

    /// File name suffix for gallery candidates (exact, case-sensitive)
    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// Directory the gallery is served from
    #[serde(default = "default_gallery_root")]
    pub gallery_root: PathBuf,

    /// Enable verbose logging
    #[serde(default)]
    pub verbose: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3030
}

fn default_thumb_width() -> u32 {
    300
}

fn default_thumb_height() -> u32 {
    300
}

fn default_suffix() -> String {
    ".jpeg".to_string()
}

fn default_gallery_root() -> PathBuf {
    PathBuf::from("./jpg")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            thumb_width: default_thumb_width(),
            thumb_height: default_thumb_height(),
            suffix: default_suffix(),
            gallery_root: default_gallery_root(),
            verbose: false,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    ///
    /// Parsing only; call [`Config::validate`] once command line
    /// overrides have been applied.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::ValidationError(
                "port must be greater than 0".to_string(),
            ));
        }

        if self.thumb_width == 0 || self.thumb_height == 0 {
            return Err(ConfigError::ValidationError(
                "thumbnail bounds must be greater than 0".to_string(),
            ));
        }

        if self.suffix.is_empty() {
            return Err(ConfigError::ValidationError(
                "suffix must not be empty".to_string(),
            ));
        }

        if !self.gallery_root.is_dir() {
            return Err(ConfigError::ValidationError(format!(
                "gallery root {} is not a directory",
                self.gallery_root.display()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3030);
        assert_eq!(config.thumb_width, 300);
        assert_eq!(config.thumb_height, 300);
        assert_eq!(config.suffix, ".jpeg");
        assert_eq!(config.gallery_root, PathBuf::from("./jpg"));
    }

    #[test]
    fn load_fills_missing_fields_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"port": 8080, "suffix": ".jpg"}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.suffix, ".jpg");
        assert_eq!(config.thumb_width, 300);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(matches!(Config::load(&path), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn validate_requires_existing_root_directory() {
        let dir = tempfile::tempdir().unwrap();

        let mut config = Config {
            gallery_root: dir.path().join("missing"),
            ..Config::default()
        };
        assert!(config.validate().is_err());

        config.gallery_root = dir.path().to_path_buf();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_values() {
        let dir = tempfile::tempdir().unwrap();
        let base = Config {
            gallery_root: dir.path().to_path_buf(),
            ..Config::default()
        };

        let config = Config { port: 0, ..base.clone() };
        assert!(config.validate().is_err());

        let config = Config { thumb_height: 0, ..base.clone() };
        assert!(config.validate().is_err());

        let config = Config { suffix: String::new(), ..base };
        assert!(config.validate().is_err());
    }
}
