//! Resource list loading with snapshot fallback.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::ResourceResponse;
use crate::application::services::build_response;
use crate::domain::entities::{ResourceItem, SourceKey};
use crate::domain::errors::ServiceError;
use crate::domain::ports::{ImageCachePort, ResourceSourcePort, SnapshotPort};

/// Serves the item list of a source, fetching upstream only when needed.
pub struct LoadResourcesUseCase {
    source_port: Arc<dyn ResourceSourcePort>,
    snapshots: Arc<dyn SnapshotPort>,
    images: Arc<dyn ImageCachePort>,
}

impl LoadResourcesUseCase {
    /// Creates new use case.
    #[must_use]
    pub fn new(
        source_port: Arc<dyn ResourceSourcePort>,
        snapshots: Arc<dyn SnapshotPort>,
        images: Arc<dyn ImageCachePort>,
    ) -> Self {
        Self {
            source_port,
            snapshots,
            images,
        }
    }

    /// Returns the items of `source` and schedules downloads of missing images.
    ///
    /// A fresh snapshot is served without contacting the upstream.
    ///
    /// # Errors
    /// Returns `BadGateway` if the upstream fails and no snapshot exists.
    pub async fn execute(&self, source: SourceKey) -> Result<ResourceResponse, ServiceError> {
        let items = self.load_items(source).await?;

        self.images.prefetch(source, items.clone());

        Ok(build_response(self.images.as_ref(), source, &items).await)
    }

    /// Discards the snapshot of `source`, then behaves as [`Self::execute`].
    ///
    /// # Errors
    /// Returns `BadGateway` if the upstream fails.
    pub async fn refresh(&self, source: SourceKey) -> Result<ResourceResponse, ServiceError> {
        info!(source = %source, "Refreshing resource snapshot");
        self.snapshots.evict(source).await;
        self.execute(source).await
    }

    async fn load_items(&self, source: SourceKey) -> Result<Vec<ResourceItem>, ServiceError> {
        if let Some(items) = self.snapshots.load_fresh(source).await {
            debug!(source = %source, count = items.len(), "Serving fresh snapshot");
            return Ok(items);
        }

        match self.source_port.fetch_items(source).await {
            Ok(items) => {
                info!(source = %source, count = items.len(), "Fetched resource list");
                if let Err(e) = self.snapshots.save(source, &items).await {
                    warn!(source = %source, error = %e, "Failed to persist snapshot");
                }
                Ok(items)
            }
            Err(e) => {
                if let Some(items) = self.snapshots.load_any(source).await {
                    warn!(
                        source = %source,
                        error = %e,
                        "Upstream failed, serving stale snapshot"
                    );
                    return Ok(items);
                }
                warn!(source = %source, error = %e, "Upstream failed with no snapshot");
                Err(e.into())
            }
        }
    }
}
