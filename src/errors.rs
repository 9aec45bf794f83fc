use std::{io, path::PathBuf};
use thiserror::Error;

pub type Result<T, E = PdfixError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum PdfixError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("root is not a folder: {}", .0.display())]
    InvalidRoot(PathBuf),

    #[error("Scanning error: {0}")]
    Scan(String),

    #[error("Too many conflicts for {}", .0.display())]
    TooManyConflicts(PathBuf),

    #[error("Failed to write report {}: {source}", .path.display())]
    Report { path: PathBuf, source: io::Error },
}
