//! Configuration management for the Contactbook UI.
//!
//! This module handles loading and validating configuration from environment variables.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the Contactbook UI.
#[derive(Debug, Clone)]
pub struct Config {
    /// Contact store API base URL
    pub api_base_url: String,

    /// API key for authentication, if the store requires one
    pub api_key: Option<String>,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Page size used when fetching the contact list (default: 100)
    pub list_page_size: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `CONTACTS_API_BASE_URL`: Base URL for the contact store API
    ///
    /// Optional environment variables:
    /// - `CONTACTS_API_KEY`: API key, if the store requires one
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LIST_PAGE_SIZE`: Contact list page size (default: 100)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let api_base_url = env::var("CONTACTS_API_BASE_URL")
            .map_err(|_| ConfigError::MissingVar("CONTACTS_API_BASE_URL".to_string()))?;

        // Validate API URL format
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let api_key = env::var("CONTACTS_API_KEY").ok().filter(|k| !k.trim().is_empty());

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let list_page_size = Self::parse_env_usize("LIST_PAGE_SIZE", 100)?;

        if list_page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "LIST_PAGE_SIZE".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            api_base_url,
            api_key,
            request_timeout,
            list_page_size,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: String::new(),
            api_key: None,
            request_timeout: 10,
            list_page_size: 100,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.request_timeout, 10);
        assert_eq!(config.list_page_size, 100);
        assert_eq!(config.log_level, "error");
        assert!(config.api_key.is_none());
    }

    #[test]
    #[serial]
    fn test_config_from_env_minimal() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACTS_API_BASE_URL", "https://api.example.com");
        env::remove_var("CONTACTS_API_KEY");
        env::remove_var("REQUEST_TIMEOUT");
        env::remove_var("LIST_PAGE_SIZE");

        let config = Config::from_env().unwrap();
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert!(config.api_key.is_none());
        assert_eq!(config.request_timeout, 10);
        assert_eq!(config.list_page_size, 100);
    }

    #[test]
    #[serial]
    fn test_config_from_env_missing_required() {
        env::remove_var("CONTACTS_API_BASE_URL");

        let result = Config::from_env();
        match result {
            Err(ConfigError::MissingVar(var)) => {
                assert_eq!(var, "CONTACTS_API_BASE_URL");
            }
            other => panic!("Expected MissingVar error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_url_scheme() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACTS_API_BASE_URL", "ftp://api.example.com");

        let result = Config::from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "CONTACTS_API_BASE_URL");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_timeout() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACTS_API_BASE_URL", "https://api.example.com");
        guard.set("REQUEST_TIMEOUT", "not-a-number");

        let result = Config::from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "REQUEST_TIMEOUT");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_zero_page_size() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACTS_API_BASE_URL", "https://api.example.com");
        guard.set("LIST_PAGE_SIZE", "0");

        let result = Config::from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "LIST_PAGE_SIZE");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }
}
