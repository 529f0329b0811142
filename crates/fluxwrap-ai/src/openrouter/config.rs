//! OpenRouter client configuration.

use std::fmt;
use std::time::Duration;

use fluxwrap_common::OPENROUTER_BASE_URL;

use crate::AiError;

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "API_KEY";

/// OpenRouter client configuration.
#[derive(Clone)]
pub struct OpenRouterConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
    /// Sent as `X-Title` so requests show up by name in the OpenRouter dashboard.
    pub app_title: String,
}

impl fmt::Debug for OpenRouterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenRouterConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("app_title", &self.app_title)
            .finish()
    }
}

impl OpenRouterConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: OPENROUTER_BASE_URL.to_string(),
            timeout: Duration::from_secs(120),
            app_title: "fluxwrap".to_string(),
        }
    }

    /// Create config from the `API_KEY` environment variable.
    pub fn from_env() -> Result<Self, AiError> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key.trim())),
            _ => Err(AiError::ApiError(format!("{API_KEY_ENV} not set"))),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
