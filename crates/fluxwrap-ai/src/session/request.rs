//! Request snapshot and completion outcome.

use serde::Serialize;

use crate::Message;

/// Everything needed for one completion call.
///
/// Serializes directly as the chat-completion payload
/// (`{model, messages, temperature, max_tokens}`). Only
/// [`Session::build_request`](super::Session::build_request) constructs one,
/// so `max_tokens > 0`, a non-empty model and at least one user turn always
/// hold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestSpec {
    pub(crate) model: String,
    pub(crate) messages: Vec<Message>,
    pub(crate) temperature: f64,
    pub(crate) max_tokens: u32,
}

impl RequestSpec {
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    /// Pretty-printed JSON payload for the confirmation preview.
    pub fn preview(&self) -> String {
        serde_json::to_string_pretty(self)
            .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize request: {e}\"}}"))
    }
}

/// Outcome of one completion call. There is no partial state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionResult {
    Answer(String),
    Failure(String),
}

impl CompletionResult {
    pub fn is_answer(&self) -> bool {
        matches!(self, CompletionResult::Answer(_))
    }
}
