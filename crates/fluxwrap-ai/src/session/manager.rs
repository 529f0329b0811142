//! Session struct and conversation management.

use tracing::{debug, warn};

use crate::token_tracker::TokenTracker;
use crate::{AiClient, Message, Role, SessionError};

use super::request::{CompletionResult, RequestSpec};
use super::transcript::Transcript;

/// Persona label used when no system prompt is selected.
pub const DEFAULT_PERSONA: &str = "default";

/// One conversation: its transcript, the persona it was opened with, and
/// the token usage of every call made so far.
#[derive(Debug)]
pub struct Session {
    pub(super) transcript: Transcript,
    pub(super) persona: String,
    pub(super) tracker: TokenTracker,
}

impl Session {
    pub fn new() -> Self {
        Self {
            transcript: Transcript::new(),
            persona: DEFAULT_PERSONA.to_string(),
            tracker: TokenTracker::new(),
        }
    }

    /// Rebuild a session from a fixed message list (template runs).
    pub fn from_messages(
        label: impl Into<String>,
        messages: &[Message],
    ) -> Result<Self, SessionError> {
        let mut session = Self::new();
        session.persona = label.into();
        for message in messages {
            session.transcript.push(message.role, &message.content)?;
        }
        Ok(session)
    }

    /// Select the persona for this session.
    ///
    /// A blank prompt only changes the label; otherwise the prompt opens the
    /// transcript as a `system` turn. Must happen before the first prompt.
    pub fn set_persona(&mut self, name: &str, prompt: &str) -> Result<(), SessionError> {
        if !self.transcript.is_empty() {
            return Err(SessionError::PersonaAfterStart);
        }
        if !prompt.trim().is_empty() {
            self.transcript.push_system(prompt)?;
        }
        self.persona = name.to_string();
        debug!(persona = %self.persona, "persona selected");
        Ok(())
    }

    /// Append a whitespace-normalized `user` turn.
    pub fn add_user_turn(&mut self, text: &str) -> Result<&Transcript, SessionError> {
        self.transcript.push_user(text)?;
        Ok(&self.transcript)
    }

    /// Snapshot the transcript into a request.
    pub fn build_request(
        &self,
        model: &str,
        temperature: f64,
        max_tokens: i64,
    ) -> Result<RequestSpec, SessionError> {
        let max_tokens = u32::try_from(max_tokens)
            .ok()
            .filter(|n| *n > 0)
            .ok_or(SessionError::InvalidTokenBudget(max_tokens))?;
        if model.trim().is_empty() {
            return Err(SessionError::EmptyModel);
        }
        if !self.transcript.has_user_turn() {
            return Err(SessionError::NoUserTurn);
        }
        if self.transcript.last_role() != Some(Role::User) {
            return Err(SessionError::NoPendingPrompt);
        }

        Ok(RequestSpec {
            model: model.trim().to_string(),
            messages: self.transcript.messages().to_vec(),
            temperature,
            max_tokens,
        })
    }

    /// Send `request` and record the answer.
    ///
    /// Exactly one call is made. On success the normalized answer becomes
    /// the next `assistant` turn; on failure the transcript is left as it
    /// was and the error text is returned as [`CompletionResult::Failure`].
    pub async fn complete(
        &mut self,
        client: &dyn AiClient,
        request: &RequestSpec,
    ) -> CompletionResult {
        debug!(
            model = %request.model,
            messages = request.messages.len(),
            max_tokens = request.max_tokens,
            "sending completion request"
        );

        let response = match client.send_request(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "completion failed");
                return CompletionResult::Failure(e.to_string());
            }
        };

        self.tracker.record(&response.usage);

        match self.transcript.push_assistant(&response.content) {
            Ok(()) => {
                let answer = self
                    .transcript
                    .messages()
                    .last()
                    .map(|m| m.content.clone())
                    .unwrap_or_default();
                CompletionResult::Answer(answer)
            }
            Err(SessionError::EmptyInput) => {
                warn!(model = %request.model, "provider returned an empty answer");
                CompletionResult::Failure("provider returned an empty response".into())
            }
            Err(e) => CompletionResult::Failure(e.to_string()),
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn persona(&self) -> &str {
        &self.persona
    }

    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }

    /// Number of answered prompts.
    pub fn exchange_count(&self) -> usize {
        self.transcript.exchange_count()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
