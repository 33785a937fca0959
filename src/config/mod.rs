//! Configuration for the posts client.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, UiConfig};
