//! Configuration management for the validation server.
//!
//! This module handles loading and validating configuration from environment variables.
//! It avoids polluting stdout (which MCP uses for communication) by loading the
//! .env file through `dotenvy`, which never prints.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Public ViaCEP deployment used when `CEP_API_BASE_URL` is unset.
pub const DEFAULT_CEP_API_URL: &str = "https://viacep.com.br";

/// Configuration for the validation server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the postal code lookup service
    pub cep_api_url: String,

    /// HTTP request timeout in seconds; `None` keeps the HTTP client default
    pub request_timeout: Option<u64>,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CEP_API_BASE_URL`: Lookup service base URL (default: `https://viacep.com.br`)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: none)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let cep_api_url =
            env::var("CEP_API_BASE_URL").unwrap_or_else(|_| DEFAULT_CEP_API_URL.to_string());

        if !cep_api_url.starts_with("http://") && !cep_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "CEP_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_opt_u64("REQUEST_TIMEOUT")?;
        if request_timeout == Some(0) {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            cep_api_url,
            request_timeout,
            log_level,
        })
    }

    /// Parse an optional environment variable as u64.
    fn parse_env_opt_u64(var_name: &str) -> ConfigResult<Option<u64>> {
        match env::var(var_name) {
            Ok(val) => val
                .trim()
                .parse::<u64>()
                .map(Some)
                .map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a positive number, got: {}", val),
                }),
            Err(_) => Ok(None),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cep_api_url: DEFAULT_CEP_API_URL.to_string(),
            request_timeout: None,
            log_level: "error".to_string(),
        }
    }
}
