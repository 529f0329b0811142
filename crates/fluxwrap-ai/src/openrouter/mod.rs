//! OpenRouter chat-completion client.
//!
//! Implements the `AiClient` trait against the OpenAI-compatible
//! `/chat/completions` endpoint (https://openrouter.ai/api/v1 by default).
//! Any other OpenAI-compatible base URL works the same way.

mod api;
mod client;
mod config;

pub use client::OpenRouterClient;
pub use config::{OpenRouterConfig, API_KEY_ENV};
