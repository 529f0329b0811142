//! `.env` loading and API credential lookup.

use std::path::Path;

use fluxwrap_ai::openrouter::API_KEY_ENV;
use fluxwrap_ai::OpenRouterConfig;
use fluxwrap_common::FluxError;
use tracing::{debug, info, warn};

/// Load `.env` from the working directory, then from `extra_dir`.
///
/// Variables already set in the environment are never overridden, so the
/// first file to define a key wins.
pub fn load_dotenv(extra_dir: Option<&Path>) {
    match dotenvy::dotenv() {
        Ok(path) => debug!("loaded {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("failed to load .env: {e}"),
    }

    if let Some(dir) = extra_dir {
        let path = dir.join(".env");
        match dotenvy::from_path(&path) {
            Ok(()) => debug!("loaded {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => warn!("failed to load {}: {e}", path.display()),
        }
    }
}

/// Build the client config from the `API_KEY` credential.
pub fn openrouter_config() -> Result<OpenRouterConfig, FluxError> {
    let config = OpenRouterConfig::from_env()
        .map_err(|_| FluxError::MissingCredential(API_KEY_ENV.to_string()))?;
    info!("{API_KEY_ENV} of length {} characters obtained", config.api_key.len());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotenv_in_extra_dir_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".env"),
            "FLUXWRAP_TEST_DOTENV_VALUE=from-file\n",
        )
        .unwrap();

        load_dotenv(Some(dir.path()));

        assert_eq!(
            std::env::var("FLUXWRAP_TEST_DOTENV_VALUE").as_deref(),
            Ok("from-file")
        );
    }

    #[test]
    fn existing_variables_are_not_overridden() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("FLUXWRAP_TEST_DOTENV_KEEP", "from-env");
        std::fs::write(dir.path().join(".env"), "FLUXWRAP_TEST_DOTENV_KEEP=from-file\n").unwrap();

        load_dotenv(Some(dir.path()));

        assert_eq!(
            std::env::var("FLUXWRAP_TEST_DOTENV_KEEP").as_deref(),
            Ok("from-env")
        );
    }

    #[test]
    fn missing_dotenv_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        load_dotenv(Some(dir.path()));
    }
}
