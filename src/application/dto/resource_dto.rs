//! Resource aggregation DTOs.

use serde::Serialize;

use crate::domain::entities::SourceKey;

/// One item as shown to the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceView {
    /// Upstream identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Star rarity.
    pub rarity: u8,
    /// Element tag, may be empty.
    pub element: String,
    /// Local `/api/file` URL when cached, remote icon URL otherwise.
    pub url: String,
    /// Whether the image exists locally.
    pub cached: bool,
}

/// Item list of one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceResponse {
    /// Source key.
    pub source: SourceKey,
    /// Game tag.
    pub game: &'static str,
    /// Category label.
    pub category: &'static str,
    /// Items in snapshot order.
    pub items: Vec<ResourceView>,
}

/// Result of a synchronous image retry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RetryImageResponse {
    /// Always true.
    pub ok: bool,
    /// Local `/api/file` URL of the downloaded image.
    pub url: String,
}

impl RetryImageResponse {
    /// Creates a success response.
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { ok: true, url }
    }
}
