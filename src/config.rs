//! Gemini API configuration
//!
//! Explicitly constructed configuration for the text-generation endpoint,
//! passed into the client instead of read from process-wide state.

use std::time::Duration;

use thiserror::Error;

/// Environment variable for the Gemini API key
pub const API_KEY_ENV: &str = "NUTRISCORE_API_KEY";

/// Environment variable overriding the API base URL
pub const API_BASE_ENV: &str = "NUTRISCORE_API_BASE";

/// Environment variable overriding the model identifier
pub const MODEL_ENV: &str = "NUTRISCORE_MODEL";

/// Models root of the Generative Language API
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

/// Default outbound request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("NUTRISCORE_API_KEY environment variable not set")]
    MissingApiKey,
}

/// Configuration for the Gemini generateContent endpoint
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Base URL up to and including the models segment
    pub api_base: String,
    /// Model identifier appended to the base URL
    pub model: String,
    /// API key passed as a query parameter
    pub api_key: String,
    /// Transport-level timeout for one generation call
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Create a configuration with default endpoint, model and timeout
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read configuration from the environment
    ///
    /// Only the API key is mandatory; base URL and model fall back to the
    /// defaults when their variables are unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| ConfigError::MissingApiKey)?;

        let mut config = Self::new(api_key);
        if let Ok(api_base) = std::env::var(API_BASE_ENV) {
            config.api_base = api_base;
        }
        if let Ok(model) = std::env::var(MODEL_ENV) {
            config.model = model;
        }
        Ok(config)
    }

    /// Set a custom model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a custom request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
