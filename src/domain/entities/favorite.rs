//! Favorite folder entity.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// A folder bookmarked by the user. Unique on `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteFolder {
    /// Display name.
    pub name: String,
    /// Folder path exactly as the user entered it.
    pub path: String,
}

impl FavoriteFolder {
    /// Creates a favorite, falling back to the folder's base name when `name` is blank.
    #[must_use]
    pub fn new(name: &str, path: &str) -> Self {
        let name = name.trim();
        let path = path.trim();
        let name = if name.is_empty() {
            Path::new(path)
                .file_name()
                .map_or_else(|| path.to_string(), |n| n.to_string_lossy().into_owned())
        } else {
            name.to_string()
        };

        Self {
            name,
            path: path.to_string(),
        }
    }
}
