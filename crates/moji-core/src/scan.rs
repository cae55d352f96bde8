//! Directory flattening with a fixed depth guard.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Maximum directory depth descended by [`flatten`] by default.
///
/// A fixed bound against symlink cycles and pathological trees. Subtrees
/// beyond it are abandoned with a warning, not reported as errors.
pub const MAX_SCAN_DEPTH: usize = 8;

/// Flattens a directory tree into the list of files beneath it.
///
/// The walk runs iteratively over an explicit stack, so tree depth never
/// grows the call stack. Children of each directory are visited in
/// file-name order, which makes the output — and everything built from it,
/// including key-collision precedence — deterministic across runs.
///
/// A non-directory input (including a path that does not exist) is yielded
/// as a single leaf; callers that need the root to be a directory check it
/// themselves. Directories that cannot be listed contribute nothing.
pub fn flatten(root: &Path, max_depth: usize) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![(root.to_path_buf(), 0usize)];

    while let Some((path, depth)) = stack.pop() {
        if depth > max_depth {
            warn!(
                path = %path.display(),
                depth,
                "max scan depth reached, abandoning subtree"
            );
            continue;
        }

        if !path.is_dir() {
            files.push(path);
            continue;
        }

        let mut children: Vec<PathBuf> = match std::fs::read_dir(&path) {
            Ok(entries) => entries.filter_map(|e| e.ok()).map(|e| e.path()).collect(),
            Err(err) => {
                debug!(
                    path = %path.display(),
                    error = %err,
                    "failed to list directory, skipping"
                );
                continue;
            }
        };

        children.sort();
        // Pushed in reverse so popping visits children in sorted order.
        for child in children.into_iter().rev() {
            stack.push((child, depth + 1));
        }
    }

    files
}
