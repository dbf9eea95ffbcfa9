//! Upstream fetch error types.

use thiserror::Error;

/// Failure talking to, or decoding the answer of, an upstream catalog.
#[derive(Debug, Clone, Error)]
#[allow(missing_docs)]
pub enum UpstreamError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("HTTP {status}")]
    Status { status: u16 },

    #[error("failed to decode payload: {0}")]
    Decode(String),

    #[error("empty response body")]
    EmptyBody,
}

impl From<serde_json::Error> for UpstreamError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
