//! Best-effort image downloader backing the resource responses.
//!
//! Prefetches run detached from the request that triggered them, with a
//! shared cap on concurrent transfers.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{RwLock, Semaphore};
use tokio::task::{JoinHandle, JoinSet};
use tracing::{debug, info, trace};

use super::disk_cache::DiskImageCache;
use crate::domain::entities::{ResourceItem, SourceKey};
use crate::domain::errors::{CacheError, CacheResult};
use crate::domain::ports::{ImageCachePort, ResourceSourcePort};

/// Configuration for the image loader.
#[derive(Debug, Clone)]
pub struct ImageLoaderConfig {
    /// Maximum concurrent downloads.
    pub max_concurrent_downloads: usize,
}

impl Default for ImageLoaderConfig {
    fn default() -> Self {
        Self {
            max_concurrent_downloads: 5,
        }
    }
}

/// Downloads source images into the disk cache.
pub struct ImageLoader {
    handle: ImageLoaderHandle,
    config: ImageLoaderConfig,
}

impl std::fmt::Debug for ImageLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageLoader")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ImageLoader {
    /// Creates a new image loader with the given configuration.
    #[must_use]
    pub fn new(
        config: ImageLoaderConfig,
        disk_cache: Arc<DiskImageCache>,
        source_port: Arc<dyn ResourceSourcePort>,
    ) -> Self {
        let handle = ImageLoaderHandle {
            disk_cache,
            source_port,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent_downloads.max(1))),
            pending_loads: Arc::new(RwLock::new(HashSet::new())),
        };

        Self { handle, config }
    }

    /// Starts downloading every missing image of `items` in the background.
    ///
    /// Returns `None` when there is nothing to do. The returned task finishes
    /// once every download has either succeeded or been given up.
    pub fn prefetch_batch(
        &self,
        source: SourceKey,
        items: Vec<ResourceItem>,
    ) -> Option<JoinHandle<()>> {
        if items.is_empty() {
            return None;
        }

        let handle = self.handle.clone();
        Some(tokio::spawn(async move {
            let mut downloads = JoinSet::new();

            for item in items {
                let dest = handle.disk_cache.image_path(source, &item.filename);
                if handle.disk_cache.contains(&dest).await {
                    continue;
                }

                let handle = handle.clone();
                downloads.spawn(async move {
                    handle.load_limited(&item.icon_url, dest).await;
                });
            }

            let scheduled = downloads.len();
            if scheduled > 0 {
                debug!(source = %source, count = scheduled, "Prefetching images");
            }

            while downloads.join_next().await.is_some() {}

            if scheduled > 0 {
                info!(source = %source, count = scheduled, "Image prefetch batch finished");
            }
        }))
    }

    /// Returns the number of downloads queued or in flight.
    #[cfg(test)]
    pub(crate) async fn pending_count(&self) -> usize {
        self.handle.pending_loads.read().await.len()
    }
}

#[async_trait]
impl ImageCachePort for ImageLoader {
    fn image_path(&self, source: SourceKey, item: &ResourceItem) -> PathBuf {
        self.handle.disk_cache.image_path(source, &item.filename)
    }

    async fn is_cached(&self, source: SourceKey, item: &ResourceItem) -> bool {
        let path = self.image_path(source, item);
        self.handle.disk_cache.contains(&path).await
    }

    fn prefetch(&self, source: SourceKey, items: Vec<ResourceItem>) {
        drop(self.prefetch_batch(source, items));
    }

    async fn fetch_now(&self, source: SourceKey, item: &ResourceItem) -> CacheResult<PathBuf> {
        let dest = self.image_path(source, item);
        self.handle.disk_cache.remove_placeholder(&dest).await;

        self.handle.download(&item.icon_url, &dest).await?;

        debug!(source = %source, name = %item.name, "Image downloaded on request");
        Ok(dest)
    }
}

/// Internal handle shared by the download tasks.
#[derive(Clone)]
struct ImageLoaderHandle {
    disk_cache: Arc<DiskImageCache>,
    source_port: Arc<dyn ResourceSourcePort>,
    semaphore: Arc<Semaphore>,
    pending_loads: Arc<RwLock<HashSet<PathBuf>>>,
}

impl ImageLoaderHandle {
    /// Downloads one image under the concurrency cap; failures leave the file absent.
    async fn load_limited(&self, url: &str, dest: PathBuf) {
        {
            let mut pending = self.pending_loads.write().await;
            if !pending.insert(dest.clone()) {
                trace!(path = %dest.display(), "Download already pending");
                return;
            }
        }

        if let Ok(_permit) = self.semaphore.acquire().await {
            if !self.disk_cache.has_content(&dest).await
                && let Err(e) = self.download(url, &dest).await
            {
                debug!(url = %url, error = %e, "Image prefetch failed");
            }
        }

        self.pending_loads.write().await.remove(&dest);
    }

    async fn download(&self, url: &str, dest: &Path) -> CacheResult<()> {
        let bytes = self
            .source_port
            .fetch_image(url)
            .await
            .map_err(|e| CacheError::NetworkError(e.to_string()))?;

        self.disk_cache.put_bytes(dest, &bytes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use bytes::Bytes;
    use tempfile::TempDir;

    use crate::domain::errors::UpstreamError;
    use crate::domain::ports::MockResourceSourcePort;

    fn item(id: &str) -> ResourceItem {
        ResourceItem {
            id: id.to_string(),
            name: format!("agent {id}"),
            rarity: 5,
            element: String::new(),
            icon_url: format!("https://example.invalid/{id}.png"),
            filename: format!("zzz_{id}.png"),
        }
    }

    fn create_loader(port: Arc<dyn ResourceSourcePort>, limit: usize) -> (ImageLoader, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let disk_cache = Arc::new(DiskImageCache::new(temp_dir.path().to_path_buf()));
        let config = ImageLoaderConfig {
            max_concurrent_downloads: limit,
        };
        (ImageLoader::new(config, disk_cache, port), temp_dir)
    }

    /// Source that records how many image downloads overlap.
    #[derive(Default)]
    struct SlowSource {
        in_flight: AtomicUsize,
        peak: AtomicUsize,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ResourceSourcePort for SlowSource {
        async fn fetch_items(&self, _source: SourceKey) -> Result<Vec<ResourceItem>, UpstreamError> {
            Ok(Vec::new())
        }

        async fn fetch_image(&self, _url: &str) -> Result<Bytes, UpstreamError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            Ok(Bytes::from_static(b"png"))
        }
    }

    #[tokio::test]
    async fn test_prefetch_downloads_missing_images() {
        let mut port = MockResourceSourcePort::new();
        port.expect_fetch_image()
            .times(2)
            .returning(|_| Ok(Bytes::from_static(b"png")));
        let (loader, _temp) = create_loader(Arc::new(port), 5);

        let items = vec![item("1011"), item("1021")];
        loader
            .prefetch_batch(SourceKey::ZzzCharacters, items.clone())
            .unwrap()
            .await
            .unwrap();

        for it in &items {
            assert!(loader.is_cached(SourceKey::ZzzCharacters, it).await);
        }
        assert_eq!(loader.pending_count().await, 0);
    }

    #[tokio::test]
    async fn test_prefetch_skips_existing_files() {
        let mut port = MockResourceSourcePort::new();
        port.expect_fetch_image()
            .times(1)
            .returning(|_| Ok(Bytes::from_static(b"png")));
        let (loader, _temp) = create_loader(Arc::new(port), 5);

        let cached = item("1011");
        let path = loader.image_path(SourceKey::ZzzCharacters, &cached);
        loader.handle.disk_cache.put_bytes(&path, b"old").await.unwrap();

        loader
            .prefetch_batch(SourceKey::ZzzCharacters, vec![cached, item("1021")])
            .unwrap()
            .await
            .unwrap();

        assert_eq!(std::fs::read(path).unwrap(), b"old");
    }

    #[tokio::test]
    async fn test_prefetch_failures_leave_file_absent() {
        let mut port = MockResourceSourcePort::new();
        port.expect_fetch_image()
            .returning(|_| Err(UpstreamError::Status { status: 404 }));
        let (loader, _temp) = create_loader(Arc::new(port), 5);

        let missing = item("1011");
        loader
            .prefetch_batch(SourceKey::ZzzCharacters, vec![missing.clone()])
            .unwrap()
            .await
            .unwrap();

        assert!(!loader.is_cached(SourceKey::ZzzCharacters, &missing).await);
    }

    #[tokio::test]
    async fn test_prefetch_respects_concurrency_limit() {
        let source = Arc::new(SlowSource::default());
        let (loader, _temp) = create_loader(source.clone(), 5);

        let items: Vec<_> = (0..20).map(|i| item(&format!("{i}"))).collect();
        loader
            .prefetch_batch(SourceKey::ZzzCharacters, items)
            .unwrap()
            .await
            .unwrap();

        assert_eq!(source.calls.load(Ordering::SeqCst), 20);
        assert!(source.peak.load(Ordering::SeqCst) <= 5);
    }

    #[tokio::test]
    async fn test_concurrent_batches_share_limit_and_dedup_paths() {
        let source = Arc::new(SlowSource::default());
        let (loader, _temp) = create_loader(source.clone(), 5);

        let first: Vec<_> = (0..10).map(|i| item(&format!("{i}"))).collect();
        let second: Vec<_> = (5..15).map(|i| item(&format!("{i}"))).collect();
        let first = loader.prefetch_batch(SourceKey::ZzzCharacters, first).unwrap();
        let second = loader.prefetch_batch(SourceKey::ZzzCharacters, second).unwrap();
        first.await.unwrap();
        second.await.unwrap();

        assert_eq!(source.calls.load(Ordering::SeqCst), 15);
        assert!(source.peak.load(Ordering::SeqCst) <= 5);
        assert_eq!(loader.pending_count().await, 0);
    }

    /// Collects formatted log lines for assertions.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_prefetch_failure_is_only_traced_at_debug() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("cover_composer=trace"))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let client = crate::infrastructure::hoyo::HoyoClient::new(Duration::from_secs(5)).unwrap();
        let (loader, _temp) = create_loader(Arc::new(client), 5);
        let mut unreachable = item("1011");
        unreachable.icon_url = "http://127.0.0.1:1/x.png".to_string();

        loader
            .prefetch_batch(SourceKey::ZzzCharacters, vec![unreachable.clone()])
            .unwrap()
            .await
            .unwrap();

        assert!(!loader.is_cached(SourceKey::ZzzCharacters, &unreachable).await);
        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Image prefetch failed"), "{output}");
        assert!(!output.contains("WARN"), "{output}");
        assert!(!output.contains("ERROR"), "{output}");
    }

    #[tokio::test]
    async fn test_prefetch_empty_batch_is_noop() {
        let (loader, _temp) = create_loader(Arc::new(MockResourceSourcePort::new()), 5);
        assert!(loader.prefetch_batch(SourceKey::ZzzCharacters, Vec::new()).is_none());
    }

    #[tokio::test]
    async fn test_fetch_now_replaces_placeholder() {
        let mut port = MockResourceSourcePort::new();
        port.expect_fetch_image()
            .times(1)
            .returning(|_| Ok(Bytes::from_static(b"fresh")));
        let (loader, _temp) = create_loader(Arc::new(port), 5);

        let target = item("1041");
        let path = loader.image_path(SourceKey::ZzzCharacters, &target);
        loader.handle.disk_cache.put_bytes(&path, b"").await.unwrap();

        let stored = loader
            .fetch_now(SourceKey::ZzzCharacters, &target)
            .await
            .unwrap();

        assert_eq!(stored, path);
        assert_eq!(std::fs::read(path).unwrap(), b"fresh");
    }

    #[tokio::test]
    async fn test_fetch_now_surfaces_failure() {
        let mut port = MockResourceSourcePort::new();
        port.expect_fetch_image()
            .times(1)
            .returning(|_| Err(UpstreamError::EmptyBody));
        let (loader, _temp) = create_loader(Arc::new(port), 5);

        let target = item("1041");
        let path = loader.image_path(SourceKey::ZzzCharacters, &target);
        loader.handle.disk_cache.put_bytes(&path, b"").await.unwrap();

        let result = loader.fetch_now(SourceKey::ZzzCharacters, &target).await;

        assert!(matches!(result, Err(CacheError::NetworkError(_))));
        assert!(!path.exists());
    }
}
