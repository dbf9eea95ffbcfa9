//! Filesystem listing value objects.

use std::path::Path;

use serde::Serialize;

/// Route that streams a local file back to the page.
pub const FILE_ROUTE: &str = "/api/file";

/// Builds the `/api/file?path=` URL serving `path`.
#[must_use]
pub fn file_url(path: &Path) -> String {
    let raw = path.to_string_lossy();
    let encoded: String = url::form_urlencoded::byte_serialize(raw.as_bytes()).collect();
    format!("{FILE_ROUTE}?path={encoded}")
}

/// A child directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirEntry {
    /// Directory name.
    pub name: String,
    /// Absolute path.
    pub path: String,
}

/// An image file with its serving URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageEntry {
    /// File name.
    pub name: String,
    /// `/api/file` URL.
    pub url: String,
}

/// Result of browsing one directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryListing {
    /// The browsed directory.
    pub current: String,
    /// Parent directory, `None` at the filesystem root.
    pub parent: Option<String>,
    /// Child directories.
    pub subdirs: Vec<DirEntry>,
    /// Child image files.
    pub images: Vec<ImageEntry>,
}

/// A browsable root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Drive {
    /// Display name (`C:` or `/`).
    pub name: String,
    /// Root path.
    pub path: String,
}

/// A local font file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontEntry {
    /// File stem, used as the family name on the page.
    pub name: String,
    /// File name.
    pub file: String,
    /// `/api/file` URL.
    pub url: String,
}
