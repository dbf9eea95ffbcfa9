//! Local HTTP API consumed by the cover composer page.

mod error;
/// Request handlers.
pub mod handlers;
mod router;
mod state;

pub use router::{router, serve};
pub use state::AppState;
