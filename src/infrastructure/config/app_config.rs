//! Application configuration.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use super::args::CliArgs;

pub(crate) const APP_NAME: &str = "cover-composer";
pub(crate) const APP_QUALIFIER: &str = "com";
pub(crate) const APP_ORGANIZATION: &str = "linuxmobile";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, loaded from `config.toml` and merged with CLI flags.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path; logs go to stderr when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Address to listen on.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Root of the snapshot and image cache.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<PathBuf>,

    /// Directory scanned for font files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonts_dir: Option<PathBuf>,

    /// Directory holding `index.html`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_dir: Option<PathBuf>,

    /// Resource aggregation settings.
    #[serde(default)]
    pub resources: ResourcesConfig,
}

/// Resource aggregation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcesConfig {
    /// Snapshot freshness window in days.
    #[serde(default = "default_snapshot_ttl_days")]
    pub snapshot_ttl_days: u64,

    /// Maximum concurrent image downloads.
    #[serde(default = "default_max_concurrent_downloads")]
    pub max_concurrent_downloads: usize,

    /// Upstream request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ResourcesConfig {
    /// Snapshot freshness window.
    #[must_use]
    pub const fn snapshot_ttl(&self) -> Duration {
        Duration::from_secs(self.snapshot_ttl_days.saturating_mul(86_400))
    }

    /// Upstream request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            snapshot_ttl_days: default_snapshot_ttl_days(),
            max_concurrent_downloads: default_max_concurrent_downloads(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    8000
}

const fn default_snapshot_ttl_days() -> u64 {
    3650
}

const fn default_max_concurrent_downloads() -> usize {
    5
}

const fn default_request_timeout_secs() -> u64 {
    30
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(host) = args.host {
            self.host = host;
        }
        if let Some(port) = args.port {
            self.port = port;
        }
        if let Some(cache_dir) = args.cache_dir {
            self.cache_dir = Some(cache_dir);
        }
        if let Some(fonts_dir) = args.fonts_dir {
            self.fonts_dir = Some(fonts_dir);
        }
        if let Some(static_dir) = args.static_dir {
            self.static_dir = Some(static_dir);
        }
    }

    /// Returns default cache root.
    #[must_use]
    pub fn default_cache_dir() -> PathBuf {
        project_dirs().map_or_else(
            || std::env::temp_dir().join(APP_NAME).join("cache").join("hoyo"),
            |dirs| dirs.cache_dir().join("hoyo"),
        )
    }

    /// Returns default data directory (fonts and static page live here).
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        project_dirs().map_or_else(
            || PathBuf::from("assets"),
            |dirs| dirs.data_dir().to_path_buf(),
        )
    }

    /// Returns effective cache root.
    #[must_use]
    pub fn effective_cache_dir(&self) -> PathBuf {
        self.cache_dir.clone().unwrap_or_else(Self::default_cache_dir)
    }

    /// Returns effective fonts directory.
    #[must_use]
    pub fn effective_fonts_dir(&self) -> PathBuf {
        self.fonts_dir
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join("fonts"))
    }

    /// Returns effective static page directory.
    #[must_use]
    pub fn effective_static_dir(&self) -> PathBuf {
        self.static_dir
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join("static"))
    }

    /// Returns the `host:port` string to bind.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LogLevel::Info,
            host: default_host(),
            port: default_port(),
            cache_dir: None,
            fonts_dir: None,
            static_dir: None,
            resources: ResourcesConfig::default(),
        }
    }
}
