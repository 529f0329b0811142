//! Request defaults applied to every call.

use serde::{Deserialize, Serialize};

/// The `[meta]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaConfig {
    /// Default model identifier. Required; an empty value fails loading.
    pub model: String,
    /// Sampling temperature (valid range: 0.0-2.0). Fixed for a session.
    pub temperature: f64,
    /// Default response budget when the user does not supply one.
    pub max_tokens: u32,
}

impl Default for MetaConfig {
    fn default() -> Self {
        Self {
            model: String::new(),
            temperature: 0.7,
            max_tokens: 1024,
        }
    }
}
