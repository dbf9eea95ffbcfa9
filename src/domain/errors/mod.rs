//! Domain error types.

mod cache_error;
mod service_error;
mod upstream_error;

pub use cache_error::{CacheError, CacheResult};
pub use service_error::ServiceError;
pub use upstream_error::UpstreamError;
