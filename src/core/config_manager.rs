// src/core/config_manager.rs
//! Configuration loading: optional YAML file per environment, then env overrides

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::core::service_client::DEFAULT_TIMEOUT_SECS;

const DEFAULT_CONFIG_FILE: &str = "job-portal.yaml";
const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("{key} must be a non-negative integer, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub tick_interval_ms: u64,
    pub recommendation_limit: usize,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            tick_interval_ms: 1_000,
            recommendation_limit: 4,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    local: Option<PortalConfig>,
    production: Option<PortalConfig>,
}

impl PortalConfig {
    /// Load configuration for the current environment
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = Self::environment();

        let path = std::env::var("JOB_PORTAL_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

        let base = if path.exists() {
            Self::load_from_file(&path, &environment)?
        } else {
            Self::default()
        };

        base.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Environment section selected by `JOB_PORTAL_ENV` or `ENVIRONMENT`.
    pub fn environment() -> String {
        std::env::var("JOB_PORTAL_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn load_from_file(path: &Path, environment: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content, environment).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn from_yaml(content: &str, environment: &str) -> Result<Self, serde_yaml::Error> {
        let file: ConfigFile = serde_yaml::from_str(content)?;
        let section = match environment {
            "production" => file.production,
            _ => file.local,
        };
        Ok(section.unwrap_or_default())
    }

    /// Layer `JOB_PORTAL_*` variables, as returned by `lookup`, over `self`.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("JOB_PORTAL_API_URL") {
            self.api_base_url = url;
        }
        if let Some(value) = lookup("JOB_PORTAL_TIMEOUT_SECS") {
            self.request_timeout_secs = parse_number("JOB_PORTAL_TIMEOUT_SECS", &value)?;
        }
        if let Some(value) = lookup("JOB_PORTAL_TICK_MS") {
            self.tick_interval_ms = parse_number("JOB_PORTAL_TICK_MS", &value)?;
        }
        if let Some(value) = lookup("JOB_PORTAL_RECOMMENDATIONS") {
            self.recommendation_limit = parse_number("JOB_PORTAL_RECOMMENDATIONS", &value)?;
        }
        if let Some(level) = lookup("JOB_PORTAL_LOG") {
            self.log_level = level;
        }
        if let Some(file) = lookup("JOB_PORTAL_LOG_FILE") {
            self.log_file = Some(PathBuf::from(file));
        }

        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("api_base_url is empty".to_string()));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidNumber {
            key,
            value: value.to_string(),
        })
}
