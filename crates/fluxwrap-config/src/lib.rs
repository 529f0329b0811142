//! fluxwrap configuration system.
//!
//! Loads the TOML template that drives a chat session: request defaults,
//! the model catalog, persona prompts, an optional fixed message list, and
//! provider/logging settings. Catalogs keep their document order so menus
//! list entries the way the file does.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use fluxwrap_config::{default_config_path, load_from_path};
//!
//! let path = default_config_path().expect("no config directory");
//! let config = load_from_path(&path).expect("failed to load config");
//! println!("default model: {}", config.meta.model);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{FluxConfig, LogLevel, LoggingConfig, MetaConfig, ProviderConfig, TemplateMessage};
pub use toml_loader::{create_default_config, default_config_path, load_from_path};
