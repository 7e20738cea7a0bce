//! Input path validation and file-level comparison

use crate::engine::{ComparisonResult, MergeDiffEngine};
use crate::error::{DiffError, Result};
use crate::source::LineSource;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Clean up a path as typed or pasted into a terminal
///
/// Drag-and-drop often escapes spaces with backslashes, so every backslash
/// is removed along with surrounding whitespace.
pub fn normalize_input(raw: &str) -> String {
    raw.trim().replace('\\', "")
}

/// Resolve user input to an absolute path that exists
pub fn resolve_path(raw: &str) -> Result<PathBuf> {
    let input = normalize_input(raw);
    let resolved = match std::path::absolute(&input) {
        Ok(resolved) => resolved,
        Err(_) => {
            let resolved = PathBuf::from(&input);
            return Err(DiffError::PathNotFound { input, resolved });
        }
    };

    if !resolved.exists() {
        return Err(DiffError::PathNotFound { input, resolved });
    }

    debug!(path = %resolved.display(), "resolved input path");
    Ok(resolved)
}

/// Reject two paths that name the same file
///
/// Paths are compared as given and, when both resolve, after following
/// symlinks and `..` components. No file is opened.
pub fn ensure_distinct(first: &Path, second: &Path) -> Result<()> {
    if first == second {
        return Err(DiffError::IdenticalSource {
            path: first.to_path_buf(),
        });
    }

    if let (Ok(a), Ok(b)) = (first.canonicalize(), second.canonicalize()) {
        if a == b {
            return Err(DiffError::IdenticalSource { path: a });
        }
    }

    Ok(())
}

/// Compare two sorted files line by line
pub fn compare_files(
    engine: &MergeDiffEngine,
    first: &Path,
    second: &Path,
) -> Result<ComparisonResult> {
    ensure_distinct(first, second)?;

    let first_lines = LineSource::open(first)?;
    let second_lines = LineSource::open(second)?;

    info!(first = %first.display(), second = %second.display(), "comparing files");
    engine
        .clone()
        .with_labels(first.display().to_string(), second.display().to_string())
        .compare(first_lines, second_lines)
}
