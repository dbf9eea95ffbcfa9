//! Font discovery.

use std::path::Path;

use tracing::warn;

use super::browser::has_extension;
use crate::domain::entities::{FontEntry, file_url};

/// Extensions recognised as font files.
pub const FONT_EXTENSIONS: &[&str] = &["ttf", "otf", "woff", "woff2"];

/// Lists font files directly inside `dir`, sorted by file name.
///
/// A missing or unreadable directory yields an empty list.
pub async fn scan_fonts(dir: &Path) -> Vec<FontEntry> {
    let mut reader = match tokio::fs::read_dir(dir).await {
        Ok(reader) => reader,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %dir.display(), error = %e, "Failed to read fonts directory");
            }
            return Vec::new();
        }
    };

    let mut fonts = Vec::new();
    while let Ok(Some(entry)) = reader.next_entry().await {
        let path = entry.path();
        let is_file = tokio::fs::metadata(&path)
            .await
            .is_ok_and(|meta| meta.is_file());
        if !is_file || !has_extension(&path, FONT_EXTENSIONS) {
            continue;
        }

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        fonts.push(FontEntry {
            name: stem,
            file: entry.file_name().to_string_lossy().into_owned(),
            url: file_url(&path),
        });
    }

    fonts.sort_by(|a, b| a.file.cmp(&b.file));
    fonts
}
