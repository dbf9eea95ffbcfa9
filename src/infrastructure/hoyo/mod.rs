//! Upstream game-asset catalogs: HTTP client and per-shape parsers.

pub mod client;
pub mod dto;
pub mod parsers;
pub mod roster;
pub mod scraper;

pub use client::{DEFAULT_TIMEOUT, HoyoClient};
