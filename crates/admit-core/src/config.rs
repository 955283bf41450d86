//! Client configuration for admit (stored in ~/.config/admit/config.toml)
//!
//! Precedence, lowest to highest: built-in defaults, the config file,
//! `ADMIT_*` environment variables, then explicit CLI flags applied by the
//! caller.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::api::Session;
use crate::error::{AdmitError, Result};

const CONFIG_DIR: &str = "admit";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "ADMIT_CONFIG_DIR";

pub const API_URL_ENV_VAR: &str = "ADMIT_API_URL";
pub const TOKEN_ENV_VAR: &str = "ADMIT_TOKEN";
pub const TIMEOUT_ENV_VAR: &str = "ADMIT_TIMEOUT";

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            token: None,
        }
    }
}

impl ClientConfig {
    pub fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    AdmitError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the config file (or defaults when absent) and apply env overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_env();
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AdmitError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut config: Self = toml::from_str(&content).map_err(|e| {
            AdmitError::Other(format!(
                "failed to parse config from {}: {}",
                path.display(),
                e
            ))
        })?;
        config.timeout_seconds = clamp_timeout(config.timeout_seconds);
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_dir = path
            .parent()
            .ok_or_else(|| AdmitError::Other("invalid config path".to_string()))?;

        fs::create_dir_all(config_dir).map_err(|e| {
            AdmitError::Other(format!(
                "failed to create config directory {}: {}",
                config_dir.display(),
                e
            ))
        })?;

        let content = toml::to_string_pretty(self)
            .map_err(|e| AdmitError::Other(format!("failed to serialize config: {}", e)))?;

        fs::write(path, content).map_err(|e| {
            AdmitError::Other(format!(
                "failed to write config to {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Apply `ADMIT_API_URL`, `ADMIT_TOKEN` and `ADMIT_TIMEOUT`
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(API_URL_ENV_VAR) {
            if !url.is_empty() {
                self.api_url = url;
            }
        }

        if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
            if !token.is_empty() {
                self.token = Some(token);
            }
        }

        if let Ok(timeout) = std::env::var(TIMEOUT_ENV_VAR) {
            if let Ok(seconds) = timeout.parse::<u64>() {
                self.timeout_seconds = clamp_timeout(seconds);
            }
        }
    }

    pub fn set_timeout_seconds(&mut self, seconds: u64) {
        self.timeout_seconds = clamp_timeout(seconds);
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn session(&self) -> Session {
        Session::new(self.token.clone())
    }
}

fn clamp_timeout(seconds: u64) -> u64 {
    seconds.clamp(1, 300)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout_seconds, 30);
        assert!(config.token.is_none());
        assert!(!config.session().is_authenticated());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = ClientConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = ClientConfig {
            api_url: "https://portal.example.edu/api".to_string(),
            timeout_seconds: 12,
            token: Some("secret".to_string()),
        };
        config.save_to(&path).unwrap();

        let loaded = ClientConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "timeout_seconds = 9000\n").unwrap();

        let loaded = ClientConfig::load_from(&path).unwrap();
        assert_eq!(loaded.api_url, DEFAULT_API_URL);
        assert_eq!(loaded.timeout_seconds, 300);
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_url = [").unwrap();

        let err = ClientConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse config"));
    }

    #[test]
    fn test_timeout_is_clamped() {
        let mut config = ClientConfig::default();
        config.set_timeout_seconds(0);
        assert_eq!(config.timeout_seconds, 1);
    }
}
