//! Configuration management.
//!
//! Configuration is loaded from the platform config directory
//! (`floorplan/config.toml` on Linux) with defaults that work out of the
//! box: the API token and images directory default to `${REPLICATE_API_TOKEN}`
//! and `${IMAGES_DIR}` references, resolved from the environment at startup.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote prediction API settings
    pub api: ApiConfig,

    /// Image discovery settings
    pub scan: ScanConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Remote prediction API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API token, or a `${VAR}` reference resolved from the environment
    pub token: String,

    /// Base URL of the prediction API
    pub endpoint: String,

    /// Pinned model version identifier to run
    pub model_version: String,

    /// Delay between status polls while awaiting a prediction
    pub poll_interval_ms: u64,

    /// Overall deadline for one prediction to reach a terminal state
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            token: "${REPLICATE_API_TOKEN}".to_string(),
            endpoint: "https://api.replicate.com".to_string(),
            // yorickvp/llava-13b
            model_version: "80537f9eead1a5bfa72d5ac6ea6414379be41d4d4f6679fd776e9535d1eb58bb"
                .to_string(),
            poll_interval_ms: 1000,
            timeout_secs: 300,
        }
    }
}

/// Image discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Root directory to scan, or a `${VAR}` reference
    pub images_dir: String,

    /// File extensions treated as images (case-insensitive)
    pub extensions: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            images_dir: "${IMAGES_DIR}".to_string(),
            extensions: vec!["jpeg".to_string()],
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug", "trace"
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories, falling back to
    /// ~/.floorplan/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "floorplan", "floorplan")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".floorplan").join("config.toml")
            })
    }

    /// Resolve the configured images directory against the environment,
    /// with ~ expansion.
    pub fn images_dir(&self) -> Result<PathBuf, ConfigError> {
        let raw = resolve_env_var(&self.scan.images_dir).ok_or_else(|| {
            ConfigError::ValidationError(
                "Images directory not set. Set IMAGES_DIR env var or scan.images_dir in config."
                    .to_string(),
            )
        })?;
        let expanded = shellexpand::tilde(&raw);
        Ok(PathBuf::from(expanded.into_owned()))
    }

    /// Resolve the configured API token against the environment.
    pub fn api_token(&self) -> Result<String, ConfigError> {
        resolve_env_var(&self.api.token).ok_or_else(|| {
            ConfigError::ValidationError(
                "API token not set. Set REPLICATE_API_TOKEN env var or api.token in config."
                    .to_string(),
            )
        })
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.scan.extensions.is_empty() {
            return Err(ConfigError::ValidationError(
                "scan.extensions must not be empty".to_string(),
            ));
        }
        if self.api.poll_interval_ms == 0 {
            return Err(ConfigError::ValidationError(
                "api.poll_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.api.model_version.is_empty() {
            return Err(ConfigError::ValidationError(
                "api.model_version must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Resolve `${ENV_VAR}` references in config strings.
///
/// Plain strings pass through; an empty string or an unset variable
/// resolves to `None`.
pub fn resolve_env_var(value: &str) -> Option<String> {
    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        std::env::var(var_name).ok()
    } else if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.scan.extensions, vec!["jpeg"]);
        assert_eq!(config.api.poll_interval_ms, 1000);
        assert!(config.api.endpoint.starts_with("https://"));
    }

    #[test]
    fn test_config_to_toml() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[api]"));
        assert!(toml.contains("[scan]"));
        assert!(toml.contains("[logging]"));
    }

    #[test]
    fn test_load_from_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scan]\nextensions = [\"jpeg\", \"jpg\"]\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.scan.extensions, vec!["jpeg", "jpg"]);
        // Unspecified sections fall back to defaults
        assert_eq!(config.api.timeout_secs, 300);
    }

    #[test]
    fn test_validate_rejects_empty_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scan]\nextensions = []\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_poll_interval() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\npoll_interval_ms = 0\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_resolve_env_var() {
        // Non-env-var strings pass through
        assert_eq!(resolve_env_var("plain-token"), Some("plain-token".to_string()));
        // Empty returns None
        assert_eq!(resolve_env_var(""), None);
        // Unset env var returns None
        assert_eq!(resolve_env_var("${DEFINITELY_NOT_SET_XYZ_123}"), None);
    }
}
