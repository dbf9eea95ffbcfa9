//! Port for per-source snapshot persistence.

use async_trait::async_trait;

use crate::domain::entities::{ResourceItem, SourceKey};
use crate::domain::errors::CacheResult;

/// Stores the parsed item list of each source.
#[async_trait]
pub trait SnapshotPort: Send + Sync {
    /// Returns the snapshot if it exists, decodes and is within the freshness window.
    async fn load_fresh(&self, source: SourceKey) -> Option<Vec<ResourceItem>>;

    /// Returns the snapshot regardless of its age.
    async fn load_any(&self, source: SourceKey) -> Option<Vec<ResourceItem>>;

    /// Replaces the snapshot.
    async fn save(&self, source: SourceKey, items: &[ResourceItem]) -> CacheResult<()>;

    /// Deletes the snapshot if present.
    async fn evict(&self, source: SourceKey);
}

/// In-memory double.
#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use tokio::sync::RwLock;

    /// In-memory snapshot store with a switchable freshness flag.
    #[derive(Default)]
    pub struct MockSnapshotStore {
        snapshots: RwLock<HashMap<SourceKey, Vec<ResourceItem>>>,
        stale: bool,
    }

    impl MockSnapshotStore {
        /// Creates an empty store.
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a store holding one snapshot.
        pub fn with_snapshot(source: SourceKey, items: Vec<ResourceItem>, stale: bool) -> Self {
            Self {
                snapshots: RwLock::new(HashMap::from([(source, items)])),
                stale,
            }
        }

        /// Returns the stored snapshot.
        pub async fn get(&self, source: SourceKey) -> Option<Vec<ResourceItem>> {
            self.snapshots.read().await.get(&source).cloned()
        }
    }

    #[async_trait]
    impl SnapshotPort for MockSnapshotStore {
        async fn load_fresh(&self, source: SourceKey) -> Option<Vec<ResourceItem>> {
            if self.stale {
                return None;
            }
            self.get(source).await
        }

        async fn load_any(&self, source: SourceKey) -> Option<Vec<ResourceItem>> {
            self.get(source).await
        }

        async fn save(&self, source: SourceKey, items: &[ResourceItem]) -> CacheResult<()> {
            self.snapshots.write().await.insert(source, items.to_vec());
            Ok(())
        }

        async fn evict(&self, source: SourceKey) {
            self.snapshots.write().await.remove(&source);
        }
    }
}
