//! Domain layer with core entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{FavoriteFolder, ResourceItem, SourceKey};
pub use errors::ServiceError;
pub use ports::{FavoritesPort, ImageCachePort, ResourceSourcePort, SnapshotPort};
