//! States and outcomes of one interactive session.

use chrono::{DateTime, Local};
use fluxwrap_ai::{RequestSpec, Session};

/// Top-level mode picked at the mode prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Persona plus repeated turns over a shared history (`0`).
    Session,
    /// Exactly one turn (`1`).
    SinglePrompt,
}

impl Mode {
    pub fn from_selection(input: &str) -> Option<Self> {
        match input.trim() {
            "0" => Some(Mode::Session),
            "1" => Some(Mode::SinglePrompt),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum SessionState {
    Idle,
    AwaitingPersona,
    AwaitingPrompt,
    AwaitingTokenBudget,
    AwaitingConfirmation(RequestSpec),
    Calling(RequestSpec),
    AwaitingContinue,
    Terminated(EndReason),
}

/// Why a session stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndReason {
    /// Single prompt answered, or the user chose not to continue.
    Completed,
    /// Confirmation refused; nothing was sent.
    Declined,
    /// Empty prompt or end of input.
    EmptyInput,
    InvalidSelection(String),
    InvalidTokenBudget(String),
    InvalidRequest(String),
    /// The provider call failed; the message is shown verbatim.
    CompletionFailure(String),
}

/// A finished session handed to the save step.
#[derive(Debug)]
pub struct SessionOutcome {
    pub session: Session,
    pub end: EndReason,
    /// Time of the last answer, used as the log heading.
    pub answered_at: Option<DateTime<Local>>,
}
