//! Per-source JSON snapshots of parsed catalogs.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, trace, warn};

use crate::domain::entities::{ResourceItem, SourceKey};
use crate::domain::errors::{CacheError, CacheResult};
use crate::domain::ports::SnapshotPort;

/// Default freshness window, about ten years: snapshots only go away on refresh.
pub const DEFAULT_SNAPSHOT_TTL: Duration = Duration::from_secs(86_400 * 3650);

/// Stores one JSON file per source under the cache root.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    cache_dir: PathBuf,
    ttl: Duration,
}

impl SnapshotStore {
    /// Creates a store in `cache_dir`.
    ///
    /// # Errors
    /// Returns error if the cache directory cannot be created.
    pub async fn new(cache_dir: PathBuf, ttl: Duration) -> CacheResult<Self> {
        fs::create_dir_all(&cache_dir)
            .await
            .map_err(|e| CacheError::IoError(format!("Failed to create cache dir: {e}")))?;

        Ok(Self { cache_dir, ttl })
    }

    /// Returns the snapshot file of a source.
    #[must_use]
    pub fn snapshot_path(&self, source: SourceKey) -> PathBuf {
        self.cache_dir.join(source.descriptor().cache_json)
    }

    async fn age(path: &Path) -> Option<Duration> {
        let modified = fs::metadata(path).await.ok()?.modified().ok()?;
        Some(
            SystemTime::now()
                .duration_since(modified)
                .unwrap_or(Duration::ZERO),
        )
    }

    async fn read(path: &Path) -> Option<Vec<ResourceItem>> {
        let content = fs::read_to_string(path).await.ok()?;
        match serde_json::from_str(&content) {
            Ok(items) => Some(items),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring unreadable snapshot");
                None
            }
        }
    }
}

#[async_trait]
impl SnapshotPort for SnapshotStore {
    async fn load_fresh(&self, source: SourceKey) -> Option<Vec<ResourceItem>> {
        let path = self.snapshot_path(source);
        let age = Self::age(&path).await?;

        if age >= self.ttl {
            debug!(source = %source, age_secs = age.as_secs(), "Snapshot is stale");
            return None;
        }

        let items = Self::read(&path).await?;
        trace!(source = %source, count = items.len(), "Snapshot hit");
        Some(items)
    }

    async fn load_any(&self, source: SourceKey) -> Option<Vec<ResourceItem>> {
        Self::read(&self.snapshot_path(source)).await
    }

    async fn save(&self, source: SourceKey, items: &[ResourceItem]) -> CacheResult<()> {
        let path = self.snapshot_path(source);
        let content = serde_json::to_string_pretty(items)
            .map_err(|e| CacheError::DecodeError(format!("Failed to encode snapshot: {e}")))?;

        let cache_dir = self.cache_dir.clone();
        let dest = path.clone();
        tokio::task::spawn_blocking(move || -> std::io::Result<()> {
            let mut temp_file = tempfile::NamedTempFile::new_in(&cache_dir)?;
            temp_file.write_all(content.as_bytes())?;
            temp_file.persist(&dest).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(|e| CacheError::IoError(format!("Snapshot write task failed: {e}")))?
        .map_err(|e| CacheError::IoError(format!("Failed to write snapshot: {e}")))?;

        debug!(source = %source, count = items.len(), "Stored snapshot");
        Ok(())
    }

    async fn evict(&self, source: SourceKey) {
        let path = self.snapshot_path(source);
        if let Err(e) = fs::remove_file(&path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(source = %source, error = %e, "Failed to evict snapshot");
            }
        } else {
            debug!(source = %source, "Evicted snapshot");
        }
    }
}
