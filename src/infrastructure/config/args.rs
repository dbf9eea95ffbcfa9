//! Command-line arguments.

use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command-line flags; each overrides the matching config file entry.
#[derive(Debug, Parser)]
#[command(
    name = "cover-composer",
    version,
    about = "Local backend for composing video cover images",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", env = "COVER_COMPOSER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Address to listen on.
    #[arg(long, env = "COVER_COMPOSER_HOST")]
    pub host: Option<String>,

    /// Port to listen on.
    #[arg(short, long, env = "COVER_COMPOSER_PORT")]
    pub port: Option<u16>,

    /// Root of the snapshot and image cache.
    #[arg(long, value_name = "PATH")]
    pub cache_dir: Option<PathBuf>,

    /// Directory scanned for font files.
    #[arg(long, value_name = "PATH")]
    pub fonts_dir: Option<PathBuf>,

    /// Directory holding `index.html`.
    #[arg(long, value_name = "PATH")]
    pub static_dir: Option<PathBuf>,
}
