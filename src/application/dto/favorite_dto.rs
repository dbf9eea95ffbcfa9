//! Favorites DTOs.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/favorites`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddFavoriteRequest {
    /// Folder path.
    #[serde(default)]
    pub path: String,
    /// Display name, defaults to the folder name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Plain acknowledgement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AckResponse {
    /// Always true.
    pub ok: bool,
}

impl AckResponse {
    /// Creates a success acknowledgement.
    #[must_use]
    pub const fn ok() -> Self {
        Self { ok: true }
    }
}
