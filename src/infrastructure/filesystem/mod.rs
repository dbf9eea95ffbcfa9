//! Local filesystem access: directory browsing and font discovery.

pub mod browser;
pub mod fonts;

pub use browser::{IMAGE_EXTENSIONS, browse, drives, resolve_file};
pub use fonts::{FONT_EXTENSIONS, scan_fonts};
