//! Synchronous single-image download.

use std::sync::Arc;

use tracing::info;

use crate::application::dto::RetryImageResponse;
use crate::domain::entities::{SourceKey, file_url};
use crate::domain::errors::ServiceError;
use crate::domain::ports::{ImageCachePort, SnapshotPort};

/// Re-downloads the image of one cached item and waits for the result.
pub struct RetryImageUseCase {
    snapshots: Arc<dyn SnapshotPort>,
    images: Arc<dyn ImageCachePort>,
}

impl RetryImageUseCase {
    /// Creates new use case.
    #[must_use]
    pub fn new(snapshots: Arc<dyn SnapshotPort>, images: Arc<dyn ImageCachePort>) -> Self {
        Self { snapshots, images }
    }

    /// Downloads the image of the item called `name`.
    ///
    /// # Errors
    /// Returns `NotFound` without a snapshot or matching item, `BadGateway`
    /// when the download fails.
    pub async fn execute(
        &self,
        source: SourceKey,
        name: &str,
    ) -> Result<RetryImageResponse, ServiceError> {
        let items = self.snapshots.load_any(source).await.ok_or_else(|| {
            ServiceError::not_found("cache missing, load the resource list first")
        })?;

        let target = items
            .iter()
            .find(|item| item.name == name)
            .ok_or_else(|| ServiceError::not_found(format!("not found: {name}")))?;

        let path = self.images.fetch_now(source, target).await?;
        info!(source = %source, name = %name, "Image retry succeeded");

        Ok(RetryImageResponse::new(file_url(&path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ResourceItem;
    use crate::domain::ports::mocks::{MockImageCache, MockSnapshotStore};

    fn snapshot() -> Vec<ResourceItem> {
        vec![ResourceItem {
            id: "1191".to_string(),
            name: "星见雅".to_string(),
            rarity: 5,
            element: String::new(),
            icon_url: "https://example.invalid/1191.png".to_string(),
            filename: "zzz_1191.png".to_string(),
        }]
    }

    #[tokio::test]
    async fn test_retry_returns_local_url() {
        let images = Arc::new(MockImageCache::new());
        let use_case = RetryImageUseCase::new(
            Arc::new(MockSnapshotStore::with_snapshot(
                SourceKey::ZzzCharacters,
                snapshot(),
                false,
            )),
            images.clone(),
        );

        let response = use_case
            .execute(SourceKey::ZzzCharacters, "星见雅")
            .await
            .unwrap();

        assert!(response.ok);
        assert_eq!(
            response.url,
            "/api/file?path=%2Fcache%2Fzzz_char%2Fzzz_1191.png"
        );
    }

    #[tokio::test]
    async fn test_retry_without_snapshot_is_not_found() {
        let use_case = RetryImageUseCase::new(
            Arc::new(MockSnapshotStore::new()),
            Arc::new(MockImageCache::new()),
        );

        let err = use_case
            .execute(SourceKey::ZzzCharacters, "星见雅")
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_retry_unknown_name_is_not_found() {
        let use_case = RetryImageUseCase::new(
            Arc::new(MockSnapshotStore::with_snapshot(
                SourceKey::ZzzCharacters,
                snapshot(),
                true,
            )),
            Arc::new(MockImageCache::new()),
        );

        let err = use_case
            .execute(SourceKey::ZzzCharacters, "nobody")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "not found: nobody");
    }

    #[tokio::test]
    async fn test_retry_download_failure_is_bad_gateway() {
        let use_case = RetryImageUseCase::new(
            Arc::new(MockSnapshotStore::with_snapshot(
                SourceKey::ZzzCharacters,
                snapshot(),
                false,
            )),
            Arc::new(MockImageCache::failing()),
        );

        let err = use_case
            .execute(SourceKey::ZzzCharacters, "星见雅")
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::BadGateway { .. }));
    }
}
