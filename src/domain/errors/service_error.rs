//! Request-level error types.

use thiserror::Error;

use super::{CacheError, UpstreamError};

/// Error surfaced to the caller of a service operation.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ServiceError {
    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    BadRequest { message: String },

    #[error("{message}")]
    Forbidden { message: String },

    #[error("{message}")]
    BadGateway { message: String },

    #[error("{message}")]
    Internal { message: String },
}

impl ServiceError {
    /// Creates not-found error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Creates bad-request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Creates forbidden error.
    #[must_use]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Creates bad-gateway error.
    #[must_use]
    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::BadGateway {
            message: message.into(),
        }
    }

    /// Creates internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<UpstreamError> for ServiceError {
    fn from(err: UpstreamError) -> Self {
        Self::bad_gateway(format!("failed to fetch resource: {err}"))
    }
}

impl From<CacheError> for ServiceError {
    fn from(err: CacheError) -> Self {
        match err {
            CacheError::NetworkError(message) => {
                Self::bad_gateway(format!("download failed: {message}"))
            }
            other => Self::internal(other.to_string()),
        }
    }
}
