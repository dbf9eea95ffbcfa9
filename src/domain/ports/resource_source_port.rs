//! Port for upstream game-asset catalogs.

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::entities::{ResourceItem, SourceKey};
use crate::domain::errors::UpstreamError;

/// Fetches and normalizes upstream catalogs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceSourcePort: Send + Sync {
    /// Fetches the current item list of a source and parses it.
    async fn fetch_items(&self, source: SourceKey) -> Result<Vec<ResourceItem>, UpstreamError>;

    /// Downloads one image body.
    async fn fetch_image(&self, url: &str) -> Result<Bytes, UpstreamError>;
}
