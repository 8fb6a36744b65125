use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;
use url::Url;

use crate::analysis::prompt::PromptFormat;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Environment variable consulted when the configured API key is empty
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Response language/format for prompts and markers
    #[serde(default)]
    pub format: PromptFormat,

    /// Provider config
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Batch config
    #[serde(default)]
    pub batch: BatchConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Provider configuration wrapper
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    // @field: Model name
    #[serde(default = "default_model")]
    pub model: String,

    // @field: API key, resolved from the environment when empty
    #[serde(default = "String::new")]
    pub api_key: String,

    // @field: Service URL, empty means the public API
    #[serde(default = "String::new")]
    pub endpoint: String,

    // @field: Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key: String::new(),
            endpoint: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Batch processing configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BatchConfig {
    // @field: Fixed delay between consecutive rows, in milliseconds
    #[serde(default = "default_row_delay_ms")]
    pub row_delay_ms: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            row_delay_ms: default_row_delay_ms(),
        }
    }
}

/// Log level for application logging
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: log crate level filter equivalent
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_row_delay_ms() -> u64 {
    200
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: PromptFormat::default(),
            provider: ProviderConfig::default(),
            batch: BatchConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to open config file: {}", path.as_ref().display()))?;

        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration")?;

        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    /// Load from file when it exists, otherwise create it with defaults
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            let config = Self::default();
            config.save_to_file(&path)?;
            Ok(config)
        }
    }

    /// Resolve the API key from the process environment when unset
    ///
    /// The key is a startup secret: a value in the config file wins,
    /// otherwise OPENAI_API_KEY is consulted.
    pub fn resolve_api_key(&mut self) {
        if self.provider.api_key.is_empty() {
            if let Ok(key) = std::env::var(API_KEY_ENV) {
                self.provider.api_key = key;
            }
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.provider.model.is_empty() {
            return Err(anyhow!("Model name cannot be empty"));
        }

        if !self.provider.endpoint.is_empty() {
            Url::parse(&self.provider.endpoint)
                .map_err(|e| anyhow!("Invalid endpoint URL '{}': {}", self.provider.endpoint, e))?;
        }

        if self.provider.api_key.is_empty() {
            return Err(anyhow!(
                "No API key configured; set it in the config file or the {} environment variable",
                API_KEY_ENV
            ));
        }

        Ok(())
    }
}
