//! Application configuration.
//!
//! Everything comes from the environment: the API base URL and the
//! feature flags. There is no config file and no persisted state.

use url::Url;

use crate::error::ConfigError;
use crate::flags::FlagStore;

/// Environment variable overriding the task API base URL.
pub const API_URL_ENV_KEY: &str = "REACT_APP_API_URL";

/// Default task API endpoint.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Resolved application configuration, passed explicitly to
/// constructors rather than read globally past startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the task API.
    pub api_base_url: String,

    /// Feature flag store.
    pub flags: FlagStore,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_base_url =
            std::env::var(API_URL_ENV_KEY).unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let config = Self {
            api_base_url,
            flags: FlagStore::from_env(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Build a configuration with an explicit URL and flag store.
    pub fn new(api_base_url: impl Into<String>, flags: FlagStore) -> Result<Self, ConfigError> {
        let config = Self {
            api_base_url: api_base_url.into(),
            flags,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the API base URL.
    fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.api_base_url).map_err(|e| ConfigError::InvalidUrl {
            url: self.api_base_url.clone(),
            message: e.to_string(),
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::InvalidUrl {
                url: self.api_base_url.clone(),
                message: format!("URL must use http or https scheme, got: {}", url.scheme()),
            });
        }

        if url.host().is_none() {
            return Err(ConfigError::InvalidUrl {
                url: self.api_base_url.clone(),
                message: "URL must have a host".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url_is_valid() {
        let config = Config::new(DEFAULT_API_URL, FlagStore::empty());
        assert!(config.is_ok());
    }

    #[test]
    fn test_rejects_non_url() {
        let result = Config::new("not-a-url", FlagStore::empty());
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_bad_scheme() {
        let result = Config::new("ftp://localhost:5000", FlagStore::empty());
        match result {
            Err(ConfigError::InvalidUrl { message, .. }) => {
                assert!(message.contains("http or https"));
            }
            _ => panic!("expected InvalidUrl"),
        }
    }

    #[test]
    fn test_accepts_https() {
        let config = Config::new("https://tasks.example.com", FlagStore::empty());
        assert!(config.is_ok());
    }
}
