//! Configuration management for Selkey

use crate::{Error, Result};
use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Runtime configuration for the dispatch engine and its collaborators
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL the test scenarios navigate against
    pub base_url: String,

    /// Base URL of the REST resource tracker
    pub api_base_url: String,

    /// Per-command timeout in milliseconds; bounds every lookup and assertion
    pub command_timeout: u64,

    /// Polling interval in milliseconds for timeout-bounded assertions
    pub poll_interval: u64,

    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://testautomationpractice.blogspot.com".to_string(),
            api_base_url: "https://playground.mockoon.com".to_string(),
            command_timeout: 10_000,
            poll_interval: 100,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();

        if let Ok(base_url) = env::var("SELKEY_BASE_URL") {
            config.base_url = base_url;
        }

        if let Ok(api_base_url) = env::var("SELKEY_API_BASE_URL") {
            config.api_base_url = api_base_url;
        }

        if let Ok(timeout) = env::var("SELKEY_COMMAND_TIMEOUT") {
            config.command_timeout = timeout
                .parse()
                .map_err(|_| Error::configuration("Invalid SELKEY_COMMAND_TIMEOUT"))?;
        }

        if let Ok(interval) = env::var("SELKEY_POLL_INTERVAL") {
            config.poll_interval = interval
                .parse()
                .map_err(|_| Error::configuration("Invalid SELKEY_POLL_INTERVAL"))?;
        }

        if let Ok(log_level) = env::var("SELKEY_LOG_LEVEL") {
            config.log_level = log_level;
        }

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::configuration(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| Error::configuration(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Command timeout as a [`Duration`]
    pub fn command_timeout(&self) -> Duration {
        Duration::from_millis(self.command_timeout)
    }

    /// Poll interval as a [`Duration`]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.command_timeout, 10_000);
        assert_eq!(config.poll_interval, 100);
        assert_eq!(config.api_base_url, "https://playground.mockoon.com");
    }

    #[test]
    fn test_from_toml_str() {
        let config = Config::from_toml_str(
            r#"
            base_url = "http://localhost:8080"
            api_base_url = "http://localhost:3000"
            command_timeout = 500
            poll_interval = 25
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.command_timeout, 500);
        assert_eq!(config.command_timeout(), Duration::from_millis(500));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_from_toml_str_rejects_garbage() {
        assert!(Config::from_toml_str("not toml at all [").is_err());
    }
}
