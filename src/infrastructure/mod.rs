//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Local filesystem access.
pub mod filesystem;
/// HoYo resource upstreams.
pub mod hoyo;
/// Image downloading and on-disk storage.
pub mod image;
/// Resource snapshot persistence.
pub mod snapshot_store;

pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, StorageManager};
pub use hoyo::HoyoClient;
pub use image::{DiskImageCache, ImageLoader, ImageLoaderConfig};
pub use snapshot_store::SnapshotStore;
