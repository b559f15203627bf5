// src/core/config_manager.rs
//! Layered configuration: defaults, optional YAML file, environment

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::service_client::RECOMMENDATIONS_ENDPOINT;

pub const DEFAULT_CONFIG_FILE: &str = "recommender.yaml";
const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_LOG_PATH: &str = "/tmp/job_recommender.log";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigManager {
    pub environment: String,
    pub service: ServiceConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub api_url: String,
    pub endpoint: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub path: PathBuf,
    pub filter: String,
}

/// One environment section of the YAML file. Missing keys keep defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct FileSection {
    api_url: Option<String>,
    endpoint: Option<String>,
    timeout_seconds: Option<u64>,
    log_path: Option<PathBuf>,
    log_filter: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    local: FileSection,
    production: FileSection,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self {
            environment: "local".to_string(),
            service: ServiceConfig {
                api_url: DEFAULT_API_URL.to_string(),
                endpoint: RECOMMENDATIONS_ENDPOINT.to_string(),
                timeout_seconds: DEFAULT_TIMEOUT_SECS,
            },
            logging: LoggingConfig {
                path: PathBuf::from(DEFAULT_LOG_PATH),
                filter: DEFAULT_LOG_FILTER.to_string(),
            },
        }
    }
}

impl ConfigManager {
    /// Load configuration from `config_path` (or `recommender.yaml` in the
    /// working directory when present) and the process environment
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let environment = Self::get_environment();
        let mut config = Self {
            environment,
            ..Self::default()
        };

        let path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            config
                .apply_file(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
        } else if config_path.is_some() {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    fn get_environment() -> String {
        std::env::var("RECOMMENDER_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn apply_file(&mut self, content: &str) -> Result<()> {
        let file: ConfigFile = serde_yaml::from_str(content).context("Invalid YAML")?;
        let section = match self.environment.as_str() {
            "production" => file.production,
            _ => file.local,
        };

        if let Some(url) = section.api_url {
            self.service.api_url = url;
        }
        if let Some(endpoint) = section.endpoint {
            self.service.endpoint = endpoint;
        }
        if let Some(timeout) = section.timeout_seconds {
            self.service.timeout_seconds = timeout;
        }
        if let Some(path) = section.log_path {
            self.logging.path = path;
        }
        if let Some(filter) = section.log_filter {
            self.logging.filter = filter;
        }
        Ok(())
    }

    fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("RECOMMENDER_API_URL") {
            self.service.api_url = url;
        }
        if let Some(endpoint) = lookup("RECOMMENDER_ENDPOINT") {
            self.service.endpoint = endpoint;
        }
        if let Some(timeout) = lookup("RECOMMENDER_TIMEOUT_SECS") {
            self.service.timeout_seconds = timeout.parse().map_err(|_| {
                anyhow::anyhow!("RECOMMENDER_TIMEOUT_SECS must be a number of seconds")
            })?;
        }
        if let Some(path) = lookup("RECOMMENDER_LOG_PATH") {
            self.logging.path = PathBuf::from(path);
        }
        Ok(())
    }
}
