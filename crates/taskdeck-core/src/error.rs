//! Core error types.

use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid API URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },
}

impl ConfigError {
    /// User-friendly message suitable for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::InvalidUrl { .. } => {
                "The configured API URL is invalid. Check REACT_APP_API_URL."
            }
        }
    }
}
