//! Presentation layer: the HTTP API.

/// HTTP router, handlers and server loop.
pub mod http;

pub use http::{AppState, router, serve};
