//! TOML template loading and creation.

mod loader;
mod paths;
mod template;


pub use loader::load_from_path;
pub use paths::{create_default_config, default_config_path};
