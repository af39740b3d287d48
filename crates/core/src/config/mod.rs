//! Configuration file loading and comparator settings.

pub mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, default_config_path};
pub use types::{ComparatorSettings, LoggingConfig, ResolvedConfig};
