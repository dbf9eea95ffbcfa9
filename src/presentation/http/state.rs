//! Shared handler state.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::{LoadResourcesUseCase, ManageFavoritesUseCase, RetryImageUseCase};
use crate::domain::ports::{FavoritesPort, ImageCachePort, ResourceSourcePort, SnapshotPort};

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Resource list loading.
    pub resources: Arc<LoadResourcesUseCase>,
    /// Synchronous image retries.
    pub retry: Arc<RetryImageUseCase>,
    /// Favorite folders.
    pub favorites: Arc<ManageFavoritesUseCase>,
    /// Directory scanned by `/api/fonts`.
    pub fonts_dir: Arc<PathBuf>,
    /// Directory holding `index.html`.
    pub static_dir: Arc<PathBuf>,
}

impl AppState {
    /// Wires the use cases over the given adapters.
    #[must_use]
    pub fn new(
        source_port: Arc<dyn ResourceSourcePort>,
        snapshots: Arc<dyn SnapshotPort>,
        images: Arc<dyn ImageCachePort>,
        favorites: Arc<dyn FavoritesPort>,
        fonts_dir: PathBuf,
        static_dir: PathBuf,
    ) -> Self {
        Self {
            resources: Arc::new(LoadResourcesUseCase::new(
                source_port,
                snapshots.clone(),
                images.clone(),
            )),
            retry: Arc::new(RetryImageUseCase::new(snapshots, images)),
            favorites: Arc::new(ManageFavoritesUseCase::new(favorites)),
            fonts_dir: Arc::new(fonts_dir),
            static_dir: Arc::new(static_dir),
        }
    }
}
