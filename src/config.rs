//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::guess::{FormBounds, DEFAULT_STORAGE_KEY};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub form: FormBounds,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Local store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default = "default_key")]
    pub key: String,
}

fn default_data_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("guessbook").to_string_lossy().to_string())
        .unwrap_or_else(|| "./guessbook_data".to_string())
}

fn default_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            key: default_key(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("guessbook").join("config.toml")),
            Some(PathBuf::from("./guessbook.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(data_dir) = lookup("GUESSBOOK_DATA_DIR") {
            self.storage.data_dir = data_dir;
        }
        if let Some(key) = lookup("GUESSBOOK_STORAGE_KEY") {
            self.storage.key = key;
        }
        if let Some(level) = lookup("GUESSBOOK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("GUESSBOOK_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# GuessBook Configuration
#
# Environment variables override these settings:
# - GUESSBOOK_DATA_DIR
# - GUESSBOOK_STORAGE_KEY
# - GUESSBOOK_LOG_LEVEL
# - GUESSBOOK_LOG_FORMAT

[storage]
# Directory holding the guess list (default: platform data dir)
# data_dir = "/home/you/.local/share/guessbook"

# Key the guess list is stored under
key = "palpitesBebe"

[form]
# Soft bounds for the form controls. Values outside them are accepted
# with a warning.
weight_min_kg = 1.0
weight_max_kg = 6.0
weight_step_kg = 0.1
length_min_cm = 30
length_max_cm = 70

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.storage.key, "palpitesBebe");
        assert_eq!(config.form, FormBounds::default());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_sections() {
        let config: Config = toml::from_str(
            r#"
            [storage]
            data_dir = "/var/lib/guessbook"

            [form]
            weight_max_kg = 5.5
            "#,
        )
        .unwrap();

        assert_eq!(config.storage.data_dir, "/var/lib/guessbook");
        assert_eq!(config.storage.key, "palpitesBebe");
        assert_eq!(config.form.weight_max_kg, 5.5);
        assert_eq!(config.form.length_min_cm, 30);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.storage.key, "palpitesBebe");
        assert_eq!(config.form, FormBounds::default());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("GUESSBOOK_DATA_DIR", "/tmp/guesses"),
            ("GUESSBOOK_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.storage.data_dir, "/tmp/guesses");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.storage.key, "palpitesBebe");
    }

    #[test]
    fn test_load_errors() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[storage\nkey = ").unwrap();
        assert!(matches!(Config::load(&broken), Err(ConfigError::Parse { .. })));
    }
}
