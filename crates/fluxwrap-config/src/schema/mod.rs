//! Configuration schema types for fluxwrap.
//!
//! Every section uses `serde(default)` so a template only needs the keys it
//! changes. The one exception is `meta.model`, which the loader requires.

mod messages;
mod meta;
mod provider;
mod system;

pub use messages::*;
pub use meta::*;
pub use provider::*;
pub use system::*;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration for fluxwrap.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FluxConfig {
    pub meta: MetaConfig,
    /// Model identifier -> human-readable description, in menu order.
    pub models: IndexMap<String, String>,
    /// Persona name -> system prompt, in menu order.
    #[serde(alias = "persona")]
    pub tones: IndexMap<String, String>,
    /// Fixed message list for non-interactive template runs.
    pub messages: Vec<TemplateMessage>,
    pub provider: ProviderConfig,
    pub logging: LoggingConfig,
}

impl FluxConfig {
    /// Persona catalog, read-only for the lifetime of a session.
    pub fn personas(&self) -> &IndexMap<String, String> {
        &self.tones
    }

    /// Models offered in the selection menu.
    ///
    /// Falls back to `meta.model` alone when no `[models]` table is given.
    pub fn model_catalog(&self) -> Vec<(String, String)> {
        if self.models.is_empty() {
            return vec![(self.meta.model.clone(), self.meta.model.clone())];
        }
        self.models
            .iter()
            .map(|(id, description)| (id.clone(), description.clone()))
            .collect()
    }

    /// Root directory for markdown session logs.
    pub fn log_dir(&self) -> PathBuf {
        self.logging.dir.clone().unwrap_or_else(default_log_dir)
    }
}
