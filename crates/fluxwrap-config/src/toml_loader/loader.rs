//! Core TOML config loading.

use crate::schema::FluxConfig;
use crate::validation;
use fluxwrap_common::ConfigError;
use std::path::Path;
use tracing::info;

/// Load config from a specific TOML file path.
///
/// Missing sections use serde defaults. A missing or blank `meta.model` is
/// reported as [`ConfigError::Invalid`]; any other out-of-range value as
/// [`ConfigError::ValidationError`].
pub fn load_from_path(path: &Path) -> Result<FluxConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: FluxConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    validation::check_required(&config)?;
    validation::validate(&config)?;

    info!(
        models = config.models.len(),
        tones = config.tones.len(),
        "loaded config from {}",
        path.display()
    );
    Ok(config)
}
