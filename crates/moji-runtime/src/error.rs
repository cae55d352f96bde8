//! Runtime error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while starting or running a session.
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Configuration loading or validation failed.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// A resource directory could not be created.
    #[error("Failed to create resource directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No platform data directory is available to resolve the default
    /// resource folders; set explicit paths in the configuration instead.
    #[error("No data directory available to resolve default resource folders")]
    NoDataDir,
}

/// Result type for runtime operations.
pub type RuntimeResult<T> = Result<T, RuntimeError>;
