//! Config path resolution and default file creation.

use fluxwrap_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_toml;

/// Template shipped next to the working directory, checked first.
const LOCAL_TEMPLATE: &str = "templates/default.toml";

/// Resolve the default template path.
///
/// `./templates/default.toml` wins when it exists; otherwise the
/// platform config directory is used (`~/.config/fluxwrap/default.toml` on
/// Linux).
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let local = PathBuf::from(LOCAL_TEMPLATE);
    if local.exists() {
        return Ok(local);
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("fluxwrap").join("default.toml"))
}

/// Write the commented default template to `path`.
///
/// Refuses to overwrite an existing file.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::Invalid(format!(
            "refusing to overwrite existing config at {}",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}
