//! Port traits the application layer depends on.

mod favorites_port;
mod image_cache_port;
mod resource_source_port;
mod snapshot_port;

pub use favorites_port::FavoritesPort;
pub use image_cache_port::ImageCachePort;
pub use resource_source_port::ResourceSourcePort;
pub use snapshot_port::SnapshotPort;

#[cfg(test)]
pub use resource_source_port::MockResourceSourcePort;
