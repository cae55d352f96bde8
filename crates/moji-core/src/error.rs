//! Unified error types for the moji core engine.
//!
//! Loading is batch-oriented with partial-success semantics: per-file
//! problems are recorded and carried alongside whatever did load, never
//! thrown past the batch boundary. The types here are the vocabulary for
//! that — see [`crate::outcome::LoadOutcome`] for the aggregation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading trigger resources.
///
/// Every variant except [`LoadError::RootNotADirectory`] describes one
/// file and is non-fatal to its batch: the file is skipped and reported.
/// `RootNotADirectory` fails the single batch call that received the bad
/// root path, and nothing else.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    /// The root path handed to a batch load is not a directory.
    #[error("root path is not a directory")]
    RootNotADirectory,

    /// The file name carries no extension, so no trigger key can be
    /// derived from it.
    #[error("file name has no extension")]
    InvalidFileName,

    /// The file could not be opened or read.
    #[error("failed to read file: {0}")]
    UnreadableFile(String),

    /// The decoder rejected the content, or decoding produced no usable
    /// image or clip.
    #[error("unsupported or malformed content: {0}")]
    UnsupportedFormat(String),
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        Self::UnreadableFile(err.to_string())
    }
}

/// A single recorded load failure: the offending path and its cause.
#[derive(Debug, Clone, Error)]
#[error("{}: {}", .path.display(), .error)]
pub struct LoadFailure {
    /// Path of the resource that failed to load.
    pub path: PathBuf,
    /// Why it failed.
    pub error: LoadError,
}

impl LoadFailure {
    /// Creates a failure record for `path`.
    pub fn new(path: impl Into<PathBuf>, error: LoadError) -> Self {
        Self {
            path: path.into(),
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_display_carries_path_and_cause() {
        let failure = LoadFailure::new("emojis/noext", LoadError::InvalidFileName);
        let text = failure.to_string();
        assert!(text.contains("noext"));
        assert!(text.contains("no extension"));
    }

    #[test]
    fn test_io_error_converts_to_unreadable() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = LoadError::from(io);
        assert!(matches!(err, LoadError::UnreadableFile(_)));
        assert!(err.to_string().contains("denied"));
    }
}
