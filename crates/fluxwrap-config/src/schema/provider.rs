//! Remote provider settings.

use fluxwrap_common::OPENROUTER_BASE_URL;
use serde::{Deserialize, Serialize};

/// The `[provider]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// OpenAI-compatible API root; `/chat/completions` is appended.
    pub base_url: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: OPENROUTER_BASE_URL.to_string(),
            timeout_secs: 120,
        }
    }
}
