//! Local directory browsing for the picture picker.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::entities::{DirEntry, DirectoryListing, Drive, ImageEntry, file_url};
use crate::domain::errors::ServiceError;

/// Extensions listed as images, compared case-insensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "bmp", "svg"];

/// Returns true when `path` carries an allow-listed extension.
#[must_use]
pub fn has_extension(path: &Path, allowed: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| allowed.iter().any(|a| a.eq_ignore_ascii_case(ext)))
}

fn map_io(err: &std::io::Error, path: &str) -> ServiceError {
    match err.kind() {
        ErrorKind::NotFound => ServiceError::not_found(format!("path does not exist: {path}")),
        ErrorKind::PermissionDenied => {
            ServiceError::forbidden(format!("permission denied: {path}"))
        }
        _ => ServiceError::internal(format!("failed to read {path}: {err}")),
    }
}

/// Lists the child directories and images of `path`.
///
/// # Errors
///
/// Returns not-found for a missing path, bad-request for a non-directory and
/// forbidden when the directory cannot be read.
pub async fn browse(path: &str) -> Result<DirectoryListing, ServiceError> {
    if path.trim().is_empty() {
        return Err(ServiceError::bad_request("path is required"));
    }

    let folder = std::path::absolute(path).map_err(|e| map_io(&e, path))?;
    let meta = tokio::fs::metadata(&folder)
        .await
        .map_err(|e| map_io(&e, path))?;
    if !meta.is_dir() {
        return Err(ServiceError::bad_request(format!("not a directory: {path}")));
    }

    let mut reader = tokio::fs::read_dir(&folder)
        .await
        .map_err(|e| map_io(&e, path))?;

    let mut children: Vec<(String, PathBuf)> = Vec::new();
    while let Some(entry) = reader.next_entry().await.map_err(|e| map_io(&e, path))? {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        children.push((name, entry.path()));
    }
    children.sort_by(|a, b| a.0.cmp(&b.0));

    let mut subdirs = Vec::new();
    let mut images = Vec::new();
    for (name, child) in children {
        // Follows symlinks; dangling links are skipped.
        let Ok(meta) = tokio::fs::metadata(&child).await else {
            debug!(path = %child.display(), "Skipping unreadable entry");
            continue;
        };

        if meta.is_dir() {
            subdirs.push(DirEntry {
                name,
                path: child.to_string_lossy().into_owned(),
            });
        } else if meta.is_file() && has_extension(&child, IMAGE_EXTENSIONS) {
            images.push(ImageEntry {
                name,
                url: file_url(&child),
            });
        }
    }

    Ok(DirectoryListing {
        current: folder.to_string_lossy().into_owned(),
        parent: folder.parent().map(|p| p.to_string_lossy().into_owned()),
        subdirs,
        images,
    })
}

/// Lists the browsable roots of this machine.
#[must_use]
pub fn drives() -> Vec<Drive> {
    #[cfg(windows)]
    {
        (b'A'..=b'Z')
            .map(char::from)
            .filter_map(|letter| {
                let root = format!("{letter}:\\");
                Path::new(&root).exists().then(|| Drive {
                    name: format!("{letter}:"),
                    path: root,
                })
            })
            .collect()
    }

    #[cfg(not(windows))]
    {
        vec![Drive {
            name: "/".to_string(),
            path: "/".to_string(),
        }]
    }
}

/// Resolves a path for streaming, requiring a regular file.
///
/// # Errors
///
/// Returns not-found when the path is missing or not a regular file.
pub async fn resolve_file(path: &str) -> Result<PathBuf, ServiceError> {
    let file = PathBuf::from(path);
    match tokio::fs::metadata(&file).await {
        Ok(meta) if meta.is_file() => Ok(file),
        _ => Err(ServiceError::not_found("file does not exist")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;
    use test_case::test_case;

    #[test_case("a.PNG", true ; "uppercase extension")]
    #[test_case("b.jpeg", true ; "jpeg")]
    #[test_case("c.svg", true ; "svg")]
    #[test_case("notes.txt", false ; "text file")]
    #[test_case("noext", false ; "no extension")]
    fn test_image_extension_filter(name: &str, expected: bool) {
        assert_eq!(has_extension(Path::new(name), IMAGE_EXTENSIONS), expected);
    }

    #[test_case(ErrorKind::NotFound, "not_found", "path does not exist: /x" ; "missing path")]
    #[test_case(ErrorKind::PermissionDenied, "forbidden", "permission denied: /x" ; "unreadable path")]
    #[test_case(ErrorKind::Other, "internal", "failed to read /x" ; "other io error")]
    fn test_io_error_mapping(kind: ErrorKind, expected: &str, message: &str) {
        let err = map_io(&std::io::Error::from(kind), "/x");

        let category = match &err {
            ServiceError::NotFound { .. } => "not_found",
            ServiceError::Forbidden { .. } => "forbidden",
            ServiceError::Internal { .. } => "internal",
            _ => "other",
        };
        assert_eq!(category, expected);
        assert!(err.to_string().contains(message), "{err}");
    }

    #[tokio::test]
    async fn test_browse_partitions_children() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("zeta")).unwrap();
        fs::create_dir(dir.path().join("alpha")).unwrap();
        fs::create_dir(dir.path().join(".hidden")).unwrap();
        fs::write(dir.path().join("b.png"), b"x").unwrap();
        fs::write(dir.path().join("a.JPG"), b"x").unwrap();
        fs::write(dir.path().join(".secret.png"), b"x").unwrap();
        fs::write(dir.path().join("readme.md"), b"x").unwrap();

        let listing = browse(&dir.path().to_string_lossy()).await.unwrap();

        let subdirs: Vec<_> = listing.subdirs.iter().map(|d| d.name.as_str()).collect();
        let images: Vec<_> = listing.images.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(subdirs, ["alpha", "zeta"]);
        assert_eq!(images, ["a.JPG", "b.png"]);
        assert_eq!(
            listing.parent.as_deref(),
            dir.path().parent().and_then(Path::to_str)
        );
        assert!(listing.images[1].url.starts_with("/api/file?path="));
    }

    #[tokio::test]
    async fn test_browse_missing_path_is_not_found() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");

        let err = browse(&missing.to_string_lossy()).await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_browse_file_is_bad_request() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.png");
        fs::write(&file, b"x").unwrap();

        let err = browse(&file.to_string_lossy()).await.unwrap_err();

        assert!(matches!(err, ServiceError::BadRequest { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_browse_root_has_no_parent() {
        let listing = browse("/").await.unwrap();
        assert_eq!(listing.current, "/");
        assert!(listing.parent.is_none());
    }

    #[cfg(not(windows))]
    #[test]
    fn test_drives_is_root_on_unix() {
        let drives = drives();
        assert_eq!(drives.len(), 1);
        assert_eq!(drives[0].path, "/");
    }

    #[tokio::test]
    async fn test_resolve_file_rejects_directories() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.png");
        fs::write(&file, b"x").unwrap();

        assert_eq!(resolve_file(&file.to_string_lossy()).await.unwrap(), file);
        let err = resolve_file(&dir.path().to_string_lossy()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }
}
