//! OpenRouter client struct and response parsing.

use std::time::Duration;

use crate::{AiError, AiResponse, TokenUsage};

use super::config::OpenRouterConfig;

/// OpenRouter API client.
pub struct OpenRouterClient {
    pub(crate) config: OpenRouterConfig,
    pub(crate) http: reqwest::Client,
}

impl OpenRouterClient {
    pub fn new(config: OpenRouterConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(config.timeout)
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    /// Full URL of the chat-completion endpoint.
    pub(crate) fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    /// Parse a chat-completion response body.
    ///
    /// OpenRouter reports some provider failures as a 200 with an `error`
    /// object instead of `choices`, so that case is checked first.
    pub(crate) fn parse_response(json: &serde_json::Value) -> Result<AiResponse, AiError> {
        if let Some(message) = json["error"]["message"].as_str() {
            return Err(AiError::ApiError(message.to_string()));
        }

        let content = json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                AiError::ParseError("response has no choices[0].message.content".into())
            })?
            .trim()
            .to_string();

        let usage = TokenUsage {
            input_tokens: json["usage"]["prompt_tokens"].as_u64().unwrap_or(0),
            output_tokens: json["usage"]["completion_tokens"].as_u64().unwrap_or(0),
        };

        Ok(AiResponse { content, usage })
    }
}

impl std::fmt::Debug for OpenRouterClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouterClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
