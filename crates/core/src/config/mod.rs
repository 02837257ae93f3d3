//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. `PORT` (listening port only)
//! 2. Environment variables (ALMANAC_*)
//! 3. TOML config file (if ALMANAC_CONFIG_FILE set)
//! 4. Built-in defaults

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
/// 1. `PORT`
/// 2. Environment variables (ALMANAC_*)
/// 3. TOML config file (if ALMANAC_CONFIG_FILE set)
/// 4. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address to bind the HTTP listener to.
    ///
    /// Set via ALMANAC_HOST environment variable.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    ///
    /// Set via PORT (preferred) or ALMANAC_PORT environment variable.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory of per-country festival files.
    ///
    /// Set via ALMANAC_FESTIVALS_DIR environment variable.
    #[serde(default = "default_festivals_dir")]
    pub festivals_dir: PathBuf,

    /// Base URL of the public-holiday provider; `/{year}/{country}` is appended.
    ///
    /// Set via ALMANAC_HOLIDAYS_BASE_URL environment variable.
    #[serde(default = "default_holidays_base_url")]
    pub holidays_base_url: String,

    /// Upstream request timeout in milliseconds.
    ///
    /// Set via ALMANAC_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// User-Agent string for upstream requests.
    ///
    /// Set via ALMANAC_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    8000
}

fn default_festivals_dir() -> PathBuf {
    PathBuf::from("./festivals")
}

fn default_holidays_base_url() -> String {
    "https://date.nager.at/api/v3/PublicHolidays".into()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_user_agent() -> String {
    "almanac/0.1".into()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            festivals_dir: default_festivals_dir(),
            holidays_base_url: default_holidays_base_url(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// `host:port` string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment()
            .extract()
            .map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("ALMANAC_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment
            .merge(Env::prefixed("ALMANAC_").ignore(&["config_file"]))
            .merge(Env::raw().only(&["port"]))
    }
}
