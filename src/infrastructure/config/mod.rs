//! Application configuration.

/// Config file schema and defaults.
pub mod app_config;
/// Command-line flags.
pub mod args;
/// Persisted user state.
pub mod state_config;
/// Config and state file persistence.
pub mod storage;

pub use app_config::{AppConfig, LogLevel, ResourcesConfig};
pub use args::CliArgs;
pub use state_config::StateConfig;
pub use storage::{ConfigError, StorageManager};
