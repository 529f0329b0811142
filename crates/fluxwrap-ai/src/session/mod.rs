//! Conversation session management.
//!
//! A `Session` owns the transcript of one conversation, turns it into
//! provider requests, records the answers, and flattens the exchange into
//! the markdown body used for logging.

mod manager;
mod render;
mod request;
mod transcript;


pub use manager::Session;
pub use request::{CompletionResult, RequestSpec};
pub use transcript::{normalize_whitespace, Transcript};
