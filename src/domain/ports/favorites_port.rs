//! Favorites persistence port definition.

use crate::domain::entities::FavoriteFolder;
use crate::domain::errors::ServiceError;

/// Port for reading and rewriting the favorites list.
pub trait FavoritesPort: Send + Sync {
    /// Loads the stored list; missing or malformed storage yields an empty list.
    ///
    /// # Errors
    /// Returns error if the storage exists but cannot be read.
    fn load_favorites(&self) -> Result<Vec<FavoriteFolder>, ServiceError>;

    /// Replaces the stored list.
    ///
    /// # Errors
    /// Returns error if the storage cannot be written.
    fn save_favorites(&self, favorites: &[FavoriteFolder]) -> Result<(), ServiceError>;
}
