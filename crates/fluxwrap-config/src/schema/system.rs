//! Logging configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Log level used when no `--log-level` flag or `RUST_LOG` is given.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive scoped to the fluxwrap crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "fluxwrap=trace",
            LogLevel::Debug => "fluxwrap=debug",
            LogLevel::Info => "fluxwrap=info",
            LogLevel::Warn => "fluxwrap=warn",
            LogLevel::Error => "fluxwrap=error",
        }
    }
}

/// The `[logging]` section.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Root directory for markdown transcripts.
    pub dir: Option<PathBuf>,
}

/// Platform data directory for transcripts, or `./logs` when unknown.
pub fn default_log_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("fluxwrap"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}
