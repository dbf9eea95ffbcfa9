//! Request handlers, grouped by area.

pub mod favorites;
pub mod filesystem;
pub mod index;
pub mod resources;
