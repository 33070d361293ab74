//! Configuration loading and validation.
//!
//! Settings live in a TOML file under the platform config directory.
//! Every field has a default, so a missing file or section is not an error.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, SourceConfig, UiConfig};
