//! Human-readable record of resource load failures.

use moji_core::LoadFailure;
use parking_lot::RwLock;

/// Ordered, append-only list of load-failure descriptions.
///
/// Filled while the session loads its resources and read on demand by
/// whatever surface the host exposes for it — a command, a panel, a log
/// dump. The core engine never consults it; a failed resource simply
/// behaves as "no match".
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: RwLock<Vec<String>>,
}

impl Diagnostics {
    /// Creates an empty diagnostics list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one load failure as its display form (`path: cause`).
    pub fn record(&self, failure: &LoadFailure) {
        self.entries.write().push(failure.to_string());
    }

    /// Records every failure in a batch, preserving order.
    pub fn record_all(&self, failures: &[LoadFailure]) {
        let mut entries = self.entries.write();
        entries.extend(failures.iter().map(ToString::to_string));
    }

    /// Appends a free-form line.
    pub fn push(&self, line: impl Into<String>) {
        self.entries.write().push(line.into());
    }

    /// A snapshot of all recorded lines, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.entries.read().clone()
    }

    /// Number of recorded lines.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drops all recorded lines.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moji_core::LoadError;

    #[test]
    fn test_records_in_order() {
        let diagnostics = Diagnostics::new();
        diagnostics.record(&LoadFailure::new("a.png", LoadError::InvalidFileName));
        diagnostics.record_all(&[
            LoadFailure::new("b.png", LoadError::UnsupportedFormat("bad magic".into())),
            LoadFailure::new("c.wav", LoadError::UnreadableFile("denied".into())),
        ]);

        let entries = diagnostics.entries();
        assert_eq!(entries.len(), 3);
        assert!(entries[0].contains("a.png"));
        assert!(entries[1].contains("bad magic"));
        assert!(entries[2].contains("c.wav"));
    }

    #[test]
    fn test_clear_empties_the_list() {
        let diagnostics = Diagnostics::new();
        diagnostics.push("one-off note");
        assert!(!diagnostics.is_empty());

        diagnostics.clear();
        assert!(diagnostics.is_empty());
        assert_eq!(diagnostics.len(), 0);
    }
}
