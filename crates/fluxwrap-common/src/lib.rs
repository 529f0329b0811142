pub mod errors;

pub use errors::{ConfigError, FluxError};

/// API root used when no `[provider].base_url` is configured.
pub const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
