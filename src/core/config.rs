//! Configuration management for SafeSight.

use crate::core::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// File analysis settings
    pub file: FileConfig,
    /// Network-bound URL check settings
    pub network: NetworkConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: FileConfig::default(),
            network: NetworkConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// File analysis settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    /// Maximum file size accepted for analysis, in megabytes
    pub max_size_mb: u64,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self { max_size_mb: 25 }
    }
}

impl FileConfig {
    /// Maximum file size in bytes.
    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_mb * 1024 * 1024
    }
}

/// Network-bound URL check settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Timeout for the page content fetch, in seconds
    pub fetch_timeout_secs: u64,
    /// Maximum number of page bytes read during the content check
    pub fetch_max_bytes: u64,
    /// Timeout for each domain-age / DNS lookup, in seconds
    pub lookup_timeout_secs: u64,
    /// User-Agent header sent by the content fetcher
    pub user_agent: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: 5,
            fetch_max_bytes: 256 * 1024,
            lookup_timeout_secs: 5,
            user_agent: "Mozilla/5.0 (compatible; SafeSightScanner/1.0)".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub log_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigLoad(format!("Failed to read config file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigLoad(format!("Failed to parse config file: {}", e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::ConfigSave(format!("Failed to create config directory: {}", e)))?;
        }

        std::fs::write(path, contents)
            .map_err(|e| Error::ConfigSave(format!("Failed to write config file: {}", e)))
    }

    /// Load configuration from the default location, falling back to defaults.
    pub fn load_or_default() -> Self {
        let config_path = Self::default_config_path();

        if config_path.exists() {
            match Self::load(&config_path) {
                Ok(config) => return config,
                Err(e) => {
                    log::warn!("Failed to load config, using defaults: {}", e);
                }
            }
        }

        Self::default()
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        std::env::var_os("SAFESIGHT_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("safesight.json"))
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.file.max_size_mb == 0 {
            return Err(Error::ConfigInvalid {
                field: "file.max_size_mb".to_string(),
                message: "Must be greater than 0".to_string(),
            });
        }

        if self.network.fetch_timeout_secs == 0 || self.network.fetch_timeout_secs > 60 {
            return Err(Error::ConfigInvalid {
                field: "network.fetch_timeout_secs".to_string(),
                message: "Must be between 1 and 60".to_string(),
            });
        }

        if self.network.fetch_max_bytes == 0 {
            return Err(Error::ConfigInvalid {
                field: "network.fetch_max_bytes".to_string(),
                message: "Must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.file.max_size_bytes(), 25 * 1024 * 1024);
        assert_eq!(config.network.fetch_max_bytes, 256 * 1024);
    }

    #[test]
    fn test_validation_rejects_zero_limit() {
        let mut config = Config::default();
        config.file.max_size_mb = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.network.fetch_timeout_secs = 10;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.network.fetch_timeout_secs, 10);
    }
}
