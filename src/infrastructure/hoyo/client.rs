//! HTTP client for the upstream game-asset catalogs.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, Response};
use tracing::{debug, warn};

use super::{parsers, roster, scraper};
use crate::domain::entities::{ResourceItem, SourceKey, SourceShape};
use crate::domain::errors::UpstreamError;
use crate::domain::ports::ResourceSourcePort;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches catalogs and images from the upstream sources.
pub struct HoyoClient {
    client: Client,
}

impl HoyoClient {
    /// Creates a client with the given request timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(timeout: Duration) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| UpstreamError::Request(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }

    async fn get(&self, url: &str) -> Result<Response, UpstreamError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                UpstreamError::Request("request timed out".to_string())
            } else if e.is_connect() {
                UpstreamError::Request(format!("failed to connect: {e}"))
            } else {
                UpstreamError::Request(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    async fn fetch_text(&self, url: &str) -> Result<String, UpstreamError> {
        self.get(url)
            .await?
            .text()
            .await
            .map_err(|e| UpstreamError::Request(format!("failed to read body: {e}")))
    }
}

#[async_trait]
impl ResourceSourcePort for HoyoClient {
    async fn fetch_items(&self, source: SourceKey) -> Result<Vec<ResourceItem>, UpstreamError> {
        let descriptor = source.descriptor();

        if descriptor.shape == SourceShape::StaticRoster {
            return Ok(roster::agents());
        }

        let url = descriptor
            .url
            .ok_or_else(|| UpstreamError::Request(format!("{source} has no upstream")))?;

        debug!(source = %source, url = %url, "Fetching upstream catalog");
        let payload = self.fetch_text(url).await.inspect_err(|e| {
            warn!(source = %source, url = %url, error = %e, "Upstream catalog request failed");
        })?;

        match descriptor.shape {
            SourceShape::AvatarApi => parsers::parse_avatar_list(&payload),
            SourceShape::CharacterIndex => parsers::parse_character_index(&payload),
            SourceShape::WikiScrape => Ok(scraper::extract_bosses(&payload)),
            SourceShape::StaticRoster => Ok(roster::agents()),
        }
    }

    async fn fetch_image(&self, url: &str) -> Result<Bytes, UpstreamError> {
        let bytes = self
            .get(url)
            .await?
            .bytes()
            .await
            .map_err(|e| UpstreamError::Request(format!("failed to read body: {e}")))?;

        if bytes.is_empty() {
            return Err(UpstreamError::EmptyBody);
        }

        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HoyoClient::new(DEFAULT_TIMEOUT);
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_static_roster_needs_no_network() {
        let client = HoyoClient::new(Duration::from_millis(1)).unwrap();

        let items = client.fetch_items(SourceKey::ZzzCharacters).await.unwrap();

        assert_eq!(items.len(), 27);
    }
}
