//! Configuration schema definitions.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use moji_core::MAX_SCAN_DEPTH;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MojiConfig {
    /// Soundoji volume in `[0, 100]`.
    #[serde(default = "default_volume")]
    pub volume: u32,

    /// Trigger resource locations and scan settings.
    #[serde(default)]
    pub resources: ResourceConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for MojiConfig {
    fn default() -> Self {
        Self {
            volume: default_volume(),
            resources: ResourceConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

fn default_volume() -> u32 {
    moji_core::DEFAULT_VOLUME
}

/// Where and how deep to look for trigger resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// Emoji image folder. Unset resolves to `<data dir>/moji/emojis`.
    #[serde(default)]
    pub emoji_dir: Option<PathBuf>,

    /// Soundoji clip folder. Unset resolves to `<data dir>/moji/soundojis`.
    #[serde(default)]
    pub soundoji_dir: Option<PathBuf>,

    /// Maximum directory depth scanned below each resource folder.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            emoji_dir: None,
            soundoji_dir: None,
            max_depth: default_max_depth(),
        }
    }
}

fn default_max_depth() -> usize {
    MAX_SCAN_DEPTH
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Base log level.
    #[serde(default)]
    pub level: LogLevel,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,

    /// Output destination.
    #[serde(default)]
    pub output: LogOutput,

    /// Log file path, used when `output` is `file`.
    #[serde(default)]
    pub file_path: Option<PathBuf>,

    /// Per-module level overrides, e.g. `moji_core = "debug"`.
    #[serde(default)]
    pub filters: HashMap<String, LogLevel>,
}

/// Log verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// The level as its lowercase directive name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Converts to the tracing level.
    pub fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Full,
    Pretty,
}

/// Log output destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    #[default]
    Stdout,
    Stderr,
    File,
}
