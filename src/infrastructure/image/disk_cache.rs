//! Disk-based image directories, one per source.

use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, trace, warn};

use crate::domain::entities::SourceKey;
use crate::domain::errors::{CacheError, CacheResult};

/// Image files stored under `<root>/<source subdir>/<filename>`.
#[derive(Debug, Clone)]
pub struct DiskImageCache {
    root: PathBuf,
}

impl DiskImageCache {
    /// Creates a cache rooted at `root`. Directories are created lazily.
    #[must_use]
    pub const fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Returns the image directory of a source.
    #[must_use]
    pub fn source_dir(&self, source: SourceKey) -> PathBuf {
        self.root.join(source.descriptor().cache_subdir)
    }

    /// Returns the path for an image of a source.
    ///
    /// Only the last component of `filename` is used, so upstream-provided
    /// names stay inside the source directory.
    #[must_use]
    pub fn image_path(&self, source: SourceKey, filename: &str) -> PathBuf {
        let name = Path::new(filename)
            .file_name()
            .unwrap_or_else(|| OsStr::new("_"));
        self.source_dir(source).join(name)
    }

    /// Checks if an image file exists.
    pub async fn contains(&self, path: &Path) -> bool {
        fs::try_exists(path).await.unwrap_or(false)
    }

    /// Checks if an image file exists and is not empty.
    pub async fn has_content(&self, path: &Path) -> bool {
        fs::metadata(path).await.is_ok_and(|m| m.len() > 0)
    }

    /// Removes a zero-byte placeholder. Returns true if one was removed.
    pub async fn remove_placeholder(&self, path: &Path) -> bool {
        let Ok(meta) = fs::metadata(path).await else {
            return false;
        };
        if meta.len() > 0 {
            return false;
        }

        match fs::remove_file(path).await {
            Ok(()) => {
                debug!(path = %path.display(), "Removed empty image placeholder");
                true
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to remove empty placeholder");
                false
            }
        }
    }

    /// Stores raw bytes at `path`, replacing any previous file.
    ///
    /// The file only appears under its final name once fully written.
    ///
    /// # Errors
    /// Returns error if the directory or file cannot be created or written.
    pub async fn put_bytes(&self, path: &Path, bytes: &[u8]) -> CacheResult<()> {
        let parent = path
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| CacheError::IoError(format!("Invalid cache path: {}", path.display())))?;
        fs::create_dir_all(&parent)
            .await
            .map_err(|e| CacheError::IoError(format!("Failed to create image dir: {e}")))?;

        let dest = path.to_path_buf();
        let data = bytes.to_vec();
        tokio::task::spawn_blocking(move || -> std::io::Result<()> {
            let mut temp_file = tempfile::NamedTempFile::new_in(&parent)?;
            temp_file.write_all(&data)?;
            temp_file.persist(&dest).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(|e| CacheError::IoError(format!("Cache write task failed: {e}")))?
        .map_err(|e| CacheError::IoError(format!("Failed to write cache file: {e}")))?;

        trace!(path = %path.display(), size = bytes.len(), "Stored image in disk cache");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_cache() -> (DiskImageCache, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let cache = DiskImageCache::new(temp_dir.path().to_path_buf());
        (cache, temp_dir)
    }

    #[test]
    fn test_image_path_layout() {
        let cache = DiskImageCache::new(PathBuf::from("/cache/hoyo"));

        assert_eq!(
            cache.image_path(SourceKey::StarrailCharacters, "sr_1102.png"),
            PathBuf::from("/cache/hoyo/starrail_char/sr_1102.png")
        );
    }

    #[test]
    fn test_image_path_stays_in_source_dir() {
        let cache = DiskImageCache::new(PathBuf::from("/cache/hoyo"));

        assert_eq!(
            cache.image_path(SourceKey::GenshinCharacters, "../../etc/passwd"),
            PathBuf::from("/cache/hoyo/genshin_char/passwd")
        );
        assert_eq!(
            cache.image_path(SourceKey::GenshinCharacters, ".."),
            PathBuf::from("/cache/hoyo/genshin_char/_")
        );
    }

    #[tokio::test]
    async fn test_put_bytes_creates_directory() {
        let (cache, _temp) = create_test_cache();
        let path = cache.image_path(SourceKey::ZzzCharacters, "zzz_1011.png");

        assert!(!cache.contains(&path).await);
        cache.put_bytes(&path, b"png").await.unwrap();

        assert!(cache.contains(&path).await);
        assert!(cache.has_content(&path).await);
        let entries = std::fs::read_dir(path.parent().unwrap()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[tokio::test]
    async fn test_concurrent_writes_to_same_path() {
        let (cache, _temp) = create_test_cache();
        let cache = std::sync::Arc::new(cache);
        let path = cache.image_path(SourceKey::ZzzCharacters, "zzz_1191.png");

        let mut writers = tokio::task::JoinSet::new();
        for fill in 0..16u8 {
            let cache = cache.clone();
            let path = path.clone();
            writers.spawn(async move { cache.put_bytes(&path, &[fill; 4096]).await });
        }
        while let Some(result) = writers.join_next().await {
            result.unwrap().unwrap();
        }

        let stored = std::fs::read(&path).unwrap();
        assert_eq!(stored.len(), 4096);
        assert!(stored.iter().all(|b| *b == stored[0]));
        let entries = std::fs::read_dir(path.parent().unwrap()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[tokio::test]
    async fn test_remove_placeholder_only_removes_empty_files() {
        let (cache, _temp) = create_test_cache();
        let empty = cache.image_path(SourceKey::ZzzCharacters, "empty.png");
        let full = cache.image_path(SourceKey::ZzzCharacters, "full.png");
        cache.put_bytes(&empty, b"").await.unwrap();
        cache.put_bytes(&full, b"data").await.unwrap();

        assert!(cache.contains(&empty).await);
        assert!(!cache.has_content(&empty).await);

        assert!(cache.remove_placeholder(&empty).await);
        assert!(!cache.remove_placeholder(&full).await);
        assert!(!cache.contains(&empty).await);
        assert!(cache.contains(&full).await);
    }
}
