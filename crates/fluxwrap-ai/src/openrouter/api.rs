//! AiClient trait implementation for OpenRouterClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiClient, AiError, AiResponse, RequestSpec};

use super::client::OpenRouterClient;

#[async_trait]
impl AiClient for OpenRouterClient {
    async fn send_request(&self, request: &RequestSpec) -> Result<AiResponse, AiError> {
        debug!(model = %request.model(), "OpenRouter API request");

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .header("X-Title", &self.config.app_title)
            .json(request)
            .send()
            .await
            .map_err(|e| AiError::NetworkError(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        let parsed = Self::parse_response(&json)?;
        debug!(
            input_tokens = parsed.usage.input_tokens,
            output_tokens = parsed.usage.output_tokens,
            "OpenRouter API response"
        );
        Ok(parsed)
    }
}
