//! Favorite folder management.

use std::sync::Arc;

use tracing::info;

use crate::application::dto::AddFavoriteRequest;
use crate::domain::entities::FavoriteFolder;
use crate::domain::errors::ServiceError;
use crate::domain::ports::FavoritesPort;

/// Lists, adds and removes favorite folders.
pub struct ManageFavoritesUseCase {
    storage: Arc<dyn FavoritesPort>,
}

impl ManageFavoritesUseCase {
    /// Creates new use case.
    #[must_use]
    pub fn new(storage: Arc<dyn FavoritesPort>) -> Self {
        Self { storage }
    }

    /// Returns the stored favorites in insertion order.
    ///
    /// # Errors
    /// Returns error if storage cannot be read.
    pub fn list(&self) -> Result<Vec<FavoriteFolder>, ServiceError> {
        self.storage.load_favorites()
    }

    /// Appends a favorite folder.
    ///
    /// # Errors
    /// Returns `BadRequest` for an empty path, a path that is not an existing
    /// directory or a path that is already a favorite.
    pub async fn add(&self, request: AddFavoriteRequest) -> Result<FavoriteFolder, ServiceError> {
        let path = request.path.trim();
        if path.is_empty() {
            return Err(ServiceError::bad_request("path is required"));
        }

        let is_dir = tokio::fs::metadata(path)
            .await
            .is_ok_and(|meta| meta.is_dir());
        if !is_dir {
            return Err(ServiceError::bad_request(format!(
                "not a valid directory: {path}"
            )));
        }

        let mut favorites = self.storage.load_favorites()?;
        if favorites.iter().any(|f| f.path == path) {
            return Err(ServiceError::bad_request("folder is already a favorite"));
        }

        let favorite = FavoriteFolder::new(request.name.as_deref().unwrap_or_default(), path);
        favorites.push(favorite.clone());
        self.storage.save_favorites(&favorites)?;

        info!(name = %favorite.name, path = %favorite.path, "Favorite added");
        Ok(favorite)
    }

    /// Removes the favorite with `path`; absent paths are not an error.
    ///
    /// # Errors
    /// Returns error if storage cannot be read or written.
    pub fn remove(&self, path: &str) -> Result<(), ServiceError> {
        let mut favorites = self.storage.load_favorites()?;
        favorites.retain(|f| f.path != path);
        self.storage.save_favorites(&favorites)?;

        info!(path = %path, "Favorite removed");
        Ok(())
    }
}
