//! Chat engine for fluxwrap.
//!
//! Provides:
//! - the `AiClient` seam every completion backend implements
//! - an OpenRouter (OpenAI-compatible) chat-completion client
//! - the conversation `Session`: transcript, request assembly, rendering
//! - token usage tracking

pub mod openrouter;
pub mod session;
pub mod token_tracker;

use async_trait::async_trait;

pub use openrouter::{OpenRouterClient, OpenRouterConfig};
pub use session::{normalize_whitespace, CompletionResult, RequestSpec, Session, Transcript};
pub use token_tracker::TokenTracker;

/// A chat-completion backend.
///
/// Takes a fully assembled request and returns the model's answer. Transport,
/// auth and error mapping live entirely behind this trait.
#[async_trait]
pub trait AiClient: Send + Sync {
    async fn send_request(&self, request: &RequestSpec) -> Result<AiResponse, AiError>;
}

/// One turn of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl std::str::FromStr for Role {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(Role::System),
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            other => Err(SessionError::UnknownRole(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Errors raised while building up a conversation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("empty input")]
    EmptyInput,
    #[error("invalid token budget {0}: max_tokens must be a positive integer")]
    InvalidTokenBudget(i64),
    #[error("model identifier is empty")]
    EmptyModel,
    #[error("transcript has no user turn to send")]
    NoUserTurn,
    #[error("no user turn is waiting for an answer")]
    NoPendingPrompt,
    #[error("the previous user turn has not been answered yet")]
    PromptPending,
    #[error("a system turn can only open an empty transcript")]
    PersonaAfterStart,
    #[error("unknown role: {0}")]
    UnknownRole(String),
}
