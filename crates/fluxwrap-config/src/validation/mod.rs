//! Configuration validation.
//!
//! `check_required` guards the keys a session cannot start without;
//! `validate` collects every range problem into a single `ConfigError`.

mod helpers;
mod sections;


use crate::schema::FluxConfig;
use fluxwrap_common::ConfigError;

/// Fail with [`ConfigError::Invalid`] when a required key is missing.
pub fn check_required(config: &FluxConfig) -> Result<(), ConfigError> {
    if config.meta.model.trim().is_empty() {
        return Err(ConfigError::Invalid("meta.model is required".into()));
    }
    Ok(())
}

/// Run all range validations on a config, collecting all errors.
pub fn validate(config: &FluxConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sections::validate_meta(&mut errors, config);
    sections::validate_models(&mut errors, config);
    sections::validate_messages(&mut errors, config);
    sections::validate_provider(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
