use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

/// Trailing double suffix, any case: `name.pdf.pdf`, `name.PDF.pdf`, ...
static DOUBLE_PDF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.pdf\.pdf$").expect("hardcoded pattern compiles"));

/// Returns the corrected file name when `name` ends in the double suffix.
/// The stem keeps its case; the suffix collapses to a single lowercase `.pdf`.
pub fn rewrite_name(name: &str) -> Option<String> {
    if !DOUBLE_PDF_RE.is_match(name) {
        return None;
    }
    Some(DOUBLE_PDF_RE.replace(name, ".pdf").into_owned())
}

/// Computes the sibling target path for a matched file.
/// Names that are not valid UTF-8 are deliberately excluded, even when their
/// byte suffix would match.
pub fn target_for(path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?.to_str()?;
    let new_name = rewrite_name(name)?;
    Some(path.with_file_name(new_name))
}
