//! Configuration Management
//!
//! Persistent settings for the `dialpad` command line tool, and resolution
//! of the effective [`ClientConfig`] from flags, environment and file.

use crate::api::client::{BASE_URL_ENV, DEFAULT_BASE_URL, TOKEN_ENV};
use crate::api::ClientConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// API base URL
    #[serde(default)]
    pub base_url: Option<String>,
    /// Bearer token
    #[serde(default)]
    pub token: Option<String>,
    /// Request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dialpad").join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load configuration from `path`; a missing or unreadable file yields
    /// the defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed config {:?}: {}", path, e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };
        self.save_to(&path)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).with_context(|| format!("Failed to write {:?}", path))?;

        Ok(())
    }

    /// Effective base URL (flag > environment > config > default)
    pub fn effective_base_url(&self, flag: Option<&str>) -> String {
        pick(flag, BASE_URL_ENV, self.base_url.as_deref())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Effective token (flag > environment > config); may be unset
    pub fn effective_token(&self, flag: Option<&str>) -> Option<String> {
        pick(flag, TOKEN_ENV, self.token.as_deref())
    }

    /// Build the client configuration these settings describe
    pub fn client_config(&self, base_url: Option<&str>, token: Option<&str>) -> ClientConfig {
        let mut config = ClientConfig::new(&self.effective_base_url(base_url));
        config.token = self.effective_token(token);
        config.timeout = self.timeout_secs.map(Duration::from_secs);
        config
    }
}

fn pick(flag: Option<&str>, env: &str, file: Option<&str>) -> Option<String> {
    let non_blank = |v: &str| !v.trim().is_empty();

    flag.filter(|v| non_blank(v))
        .map(str::to_string)
        .or_else(|| std::env::var(env).ok().filter(|v| non_blank(v)))
        .or_else(|| file.filter(|v| non_blank(v)).map(str::to_string))
}
