//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (GNEWS_*)
//! 2. TOML config file (if GNEWS_CONFIG_FILE set)
//! 3. Built-in defaults

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (GNEWS_*)
/// 2. TOML config file (if GNEWS_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// GNews API key used for all upstream requests.
    ///
    /// Set via GNEWS_API_KEY environment variable.
    /// Required only when a tool actually reaches the upstream API.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Directory for the persistent response cache.
    ///
    /// Set via GNEWS_CACHE_DIR environment variable. When unset the server
    /// runs with the in-memory tier only.
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,

    /// GNews API base URL.
    ///
    /// Set via GNEWS_BASE_URL environment variable.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// User-Agent string for HTTP requests.
    ///
    /// Set via GNEWS_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Upstream request timeout in milliseconds.
    ///
    /// Set via GNEWS_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "https://gnews.io/api/v4".into()
}

fn default_user_agent() -> String {
    "mcp-gnews/0.1".into()
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            cache_dir: None,
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `GNEWS_`
    /// 2. TOML file from `GNEWS_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("GNEWS_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("GNEWS_")
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// Check if the GNews API key is available (for deferred validation).
    ///
    /// Tool calls resolve the credential at use time so a server without a
    /// key can still start and serve cache hits.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if the API key is not set.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.api_key.as_deref().ok_or_else(|| ConfigError::Missing {
            field: "api_key".into(),
            hint: "Set GNEWS_API_KEY environment variable (get a key at https://gnews.io/)".into(),
        })
    }
}
