//! Ordered conversation history with its ordering invariants.

use crate::{Message, Role, SessionError};

/// Collapse every whitespace run to a single space and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The literal history sent to the model on each call.
///
/// A `system` turn can only open the transcript, and `user` and `assistant`
/// turns strictly alternate after it. All content is stored
/// whitespace-normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the transcript with a system prompt.
    pub fn push_system(&mut self, content: &str) -> Result<(), SessionError> {
        if !self.messages.is_empty() {
            return Err(SessionError::PersonaAfterStart);
        }
        let content = normalize_whitespace(content);
        if content.is_empty() {
            return Err(SessionError::EmptyInput);
        }
        self.messages.push(Message {
            role: Role::System,
            content,
        });
        Ok(())
    }

    /// Append a prompt. User and assistant turns alternate, so the previous
    /// prompt must have been answered.
    pub fn push_user(&mut self, content: &str) -> Result<(), SessionError> {
        if self.last_role() == Some(Role::User) {
            return Err(SessionError::PromptPending);
        }
        let content = normalize_whitespace(content);
        if content.is_empty() {
            return Err(SessionError::EmptyInput);
        }
        self.messages.push(Message {
            role: Role::User,
            content,
        });
        Ok(())
    }

    pub fn push_assistant(&mut self, content: &str) -> Result<(), SessionError> {
        if self.last_role() != Some(Role::User) {
            return Err(SessionError::NoPendingPrompt);
        }
        let content = normalize_whitespace(content);
        if content.is_empty() {
            return Err(SessionError::EmptyInput);
        }
        self.messages.push(Message {
            role: Role::Assistant,
            content,
        });
        Ok(())
    }

    /// Append a message of any role, applying the same rules as the
    /// role-specific methods.
    pub fn push(&mut self, role: Role, content: &str) -> Result<(), SessionError> {
        match role {
            Role::System => self.push_system(content),
            Role::User => self.push_user(content),
            Role::Assistant => self.push_assistant(content),
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn has_user_turn(&self) -> bool {
        self.messages.iter().any(|m| m.role == Role::User)
    }

    /// Number of answered prompts.
    pub fn exchange_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.role == Role::Assistant)
            .count()
    }

    pub fn last_role(&self) -> Option<Role> {
        self.messages.last().map(|m| m.role)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
