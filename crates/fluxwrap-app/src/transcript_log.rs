//! Markdown transcript files.
//!
//! Each save prepends a `## <timestamp>` section to the target file, so the
//! newest exchange is always at the top. Files are read, then replaced
//! through a `.tmp` sibling and a rename. There is no locking; fluxwrap is a
//! single-user tool.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDate};
use fluxwrap_common::FluxError;
use tracing::{info, warn};

use crate::banner::short_model_name;

/// Format of the `## ...` heading of each entry.
pub const TIMESTAMP_FORMAT: &str = "%m-%d-%Y @ %I:%M%p";

/// Which log file an exchange belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// One file per persona per day.
    Session { persona: &'a str },
    /// One cumulative file per model.
    SinglePrompt { model: &'a str },
}

/// Resolve the file an entry for `target` on `date` is written to.
///
/// - session: `<root>/sessions/<PERSONA>/<MM_DD_YYYY>_<persona>.md`
/// - single prompt: `<root>/<model short name>_log.md`
pub fn log_path(root: &Path, target: LogTarget<'_>, date: NaiveDate) -> PathBuf {
    match target {
        LogTarget::Session { persona } => {
            let persona = file_safe(persona);
            root.join("sessions")
                .join(persona.to_uppercase())
                .join(format!("{}_{persona}.md", date.format("%m_%d_%Y")))
        }
        LogTarget::SinglePrompt { model } => {
            root.join(format!("{}_log.md", file_safe(short_model_name(model))))
        }
    }
}

/// Prepend a new entry to `path`, creating the file and its directories.
pub fn prepend_entry(path: &Path, timestamp: &str, body: &str) -> Result<(), FluxError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let old = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };

    let content = format!("\n## {timestamp}\n{body}{old}");

    // Atomic write: write to .tmp, then rename
    let tmp_path = tmp_path_for(path);
    std::fs::write(&tmp_path, &content)?;
    if let Err(e) = std::fs::rename(&tmp_path, path) {
        warn!("atomic rename failed ({e}), falling back to direct write");
        std::fs::write(path, &content)?;
        let _ = std::fs::remove_file(&tmp_path);
    }

    info!(path = %path.display(), "transcript saved");
    Ok(())
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write a rendered transcript for `target` and return the file used.
pub fn save(
    root: &Path,
    target: LogTarget<'_>,
    at: DateTime<Local>,
    body: &str,
) -> Result<PathBuf, FluxError> {
    let path = log_path(root, target, at.date_naive());
    prepend_entry(&path, &at.format(TIMESTAMP_FORMAT).to_string(), body)?;
    Ok(path)
}

fn file_safe(name: &str) -> String {
    let safe: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let safe = safe.trim_start_matches('.');
    if safe.is_empty() {
        "unnamed".to_string()
    } else {
        safe.to_string()
    }
}
