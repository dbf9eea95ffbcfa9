//! Port definition for source image caching.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::entities::{ResourceItem, SourceKey};
use crate::domain::errors::CacheResult;

/// Local image cache for resource items.
/// Implementations must be thread-safe.
#[async_trait]
pub trait ImageCachePort: Send + Sync {
    /// Path where the image of `item` is (or would be) stored.
    fn image_path(&self, source: SourceKey, item: &ResourceItem) -> PathBuf;

    /// Returns true if the image file exists locally.
    async fn is_cached(&self, source: SourceKey, item: &ResourceItem) -> bool;

    /// Schedules background downloads for items without a local image.
    /// Never blocks and never reports failures.
    fn prefetch(&self, source: SourceKey, items: Vec<ResourceItem>);

    /// Downloads the image of `item` now, replacing an empty placeholder.
    async fn fetch_now(&self, source: SourceKey, item: &ResourceItem) -> CacheResult<PathBuf>;
}
