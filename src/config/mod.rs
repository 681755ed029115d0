//! # Configuration Management
//!
//! Configuration for the Bolna MCP server. All values are read from the
//! environment once at startup and held in immutable structs that are passed
//! explicitly to the components that need them, so tests can substitute the
//! base URL and credential freely.

use std::time::Duration;

use crate::errors::{Error, Result};

/// Default Bolna API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.bolna.ai/v2";

/// Default per-call request timeout in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Bolna API connection configuration
///
/// Constructed once at startup and never mutated afterwards. The bearer
/// token and base URL are process-wide constants for the lifetime of the
/// server.
#[derive(Debug, Clone)]
pub struct BolnaConfig {
    /// Base URL for the Bolna API (no trailing slash)
    pub base_url: String,

    /// Bearer token for API authentication
    pub api_key: String,

    /// Per-call request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for BolnaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl BolnaConfig {
    /// Create configuration from environment variables
    ///
    /// `BOLNA_API_KEY` is required; `BOLNA_BASE_URL` and
    /// `BOLNA_TIMEOUT_SECONDS` fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("BOLNA_API_KEY")
            .map_err(|_| Error::config("BOLNA_API_KEY environment variable is not set"))?;

        let base_url =
            std::env::var("BOLNA_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_seconds = std::env::var("BOLNA_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

        let config = Self { base_url, api_key, timeout_seconds };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(Error::config("API key cannot be empty"));
        }

        let parsed = url::Url::parse(&self.base_url)
            .map_err(|e| Error::config(format!("Invalid base URL '{}': {}", self.base_url, e)))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(Error::config(format!(
                "Base URL must use http or https, got '{}'",
                parsed.scheme()
            )));
        }

        if self.timeout_seconds == 0 {
            return Err(Error::config("Timeout must be at least 1 second"));
        }

        Ok(())
    }

    /// Get the per-call timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Observability configuration for structured logging
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,

    /// Emit logs as JSON instead of human-readable text
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self { log_level: "info".to_string(), json_logs: false }
    }
}

impl ObservabilityConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Self {
        let log_level = std::env::var("BOLNA_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let json_logs = std::env::var("BOLNA_LOG_FORMAT")
            .map(|s| s.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Self { log_level, json_logs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> BolnaConfig {
        BolnaConfig { api_key: "bn-test-key".to_string(), ..Default::default() }
    }

    #[test]
    fn test_defaults() {
        let config = BolnaConfig::default();
        assert_eq!(config.base_url, "https://api.bolna.ai/v2");
        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_validate_accepts_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_api_key() {
        let config = BolnaConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_relative_base_url() {
        let config = BolnaConfig { base_url: "api.bolna.ai/v2".to_string(), ..valid_config() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_http_scheme() {
        let config = BolnaConfig { base_url: "ftp://api.bolna.ai".to_string(), ..valid_config() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = BolnaConfig { timeout_seconds: 0, ..valid_config() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_observability_defaults() {
        let config = ObservabilityConfig::default();
        assert_eq!(config.log_level, "info");
        assert!(!config.json_logs);
    }
}
