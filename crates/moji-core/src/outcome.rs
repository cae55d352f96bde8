//! Batch load outcomes with partial-success semantics.

use crate::error::LoadFailure;

/// The tri-state result of a batch resource load.
///
/// A batch never gives up because individual files were bad: whatever
/// loaded is returned together with the ordered list of per-file failures.
/// [`LoadOutcome::Failure`] is reserved for the one fatal condition — the
/// root path itself not being a directory.
///
/// Classification rules:
/// - no failures → `Success` (an empty folder is `Success` with no items)
/// - any per-file failure with a valid root → `Partial`, even when every
///   single file failed
/// - invalid root → `Failure`, nothing was scanned
#[derive(Debug)]
pub enum LoadOutcome<T> {
    /// Every candidate file loaded.
    Success(Vec<T>),
    /// The root was valid but some files failed; carries both sides.
    Partial(Vec<T>, Vec<LoadFailure>),
    /// The root itself was unusable.
    Failure(Vec<LoadFailure>),
}

impl<T> LoadOutcome<T> {
    /// Classifies a finished batch from its parts.
    ///
    /// Never produces `Failure`; callers construct that directly for an
    /// invalid root, before any scanning happens.
    pub fn from_parts(items: Vec<T>, failures: Vec<LoadFailure>) -> Self {
        if failures.is_empty() {
            Self::Success(items)
        } else {
            Self::Partial(items, failures)
        }
    }

    /// The successfully loaded items, in scan order.
    pub fn items(&self) -> &[T] {
        match self {
            Self::Success(items) | Self::Partial(items, _) => items,
            Self::Failure(_) => &[],
        }
    }

    /// The recorded failures, in scan order.
    pub fn failures(&self) -> &[LoadFailure] {
        match self {
            Self::Success(_) => &[],
            Self::Partial(_, failures) | Self::Failure(failures) => failures,
        }
    }

    /// True when every file loaded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// True when the batch carries both items and failures to report.
    pub fn is_partial(&self) -> bool {
        matches!(self, Self::Partial(..))
    }

    /// True when the root itself was rejected.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Consumes the outcome, keeping only the loaded items.
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Success(items) | Self::Partial(items, _) => items,
            Self::Failure(_) => Vec::new(),
        }
    }

    /// Consumes the outcome into its item and failure lists.
    pub fn into_parts(self) -> (Vec<T>, Vec<LoadFailure>) {
        match self {
            Self::Success(items) => (items, Vec::new()),
            Self::Partial(items, failures) => (items, failures),
            Self::Failure(failures) => (Vec::new(), failures),
        }
    }
}
