use std::path::{Path, PathBuf};

use crate::errors::{PdfixError, Result};

/// Upper bound on `_N` candidates tried before giving up. Exists to
/// guarantee termination; raising it does not change semantics.
pub const MAX_ATTEMPTS: u32 = 9_999;

/// Renames a conflicting target by appending a counter (file.pdf -> file_1.pdf).
pub fn resolve_conflict(path: &Path) -> Result<PathBuf> {
    resolve_conflict_bounded(path, MAX_ATTEMPTS)
}

/// Returns the first candidate that does not currently exist, counting up
/// from `_1`. Fails with `TooManyConflicts` once the bound is exhausted.
pub fn resolve_conflict_bounded(path: &Path, max_attempts: u32) -> Result<PathBuf> {
    // Keep the original name if it is free
    if !path.exists() {
        return Ok(path.to_path_buf());
    }

    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    for counter in 1..=max_attempts {
        let candidate = parent.join(format!("{}_{}{}", stem, counter, ext));
        if !candidate.exists() {
            return Ok(candidate);
        }
    }

    Err(PdfixError::TooManyConflicts(path.to_path_buf()))
}
