//! Image handling infrastructure.
//!
//! This module provides:
//! - Per-source image directories on disk
//! - Bounded background prefetching and on-demand downloads

pub mod disk_cache;
pub mod loader;

pub use disk_cache::DiskImageCache;
pub use loader::{ImageLoader, ImageLoaderConfig};
