//! Fixed message list for template runs.

use serde::{Deserialize, Serialize};

/// Roles accepted in a `[[messages]]` entry.
pub const TEMPLATE_ROLES: [&str; 3] = ["system", "user", "assistant"];

/// One `[[messages]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemplateMessage {
    pub role: String,
    pub content: String,
}
