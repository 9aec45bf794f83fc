use std::path::PathBuf;

use walkdir::{DirEntry, WalkDir};

use crate::errors::{PdfixError, Result};

/// One filesystem entry reached by recursive descent.
#[derive(Debug, Clone)]
pub struct ScannedEntry {
    pub path: PathBuf,
    pub is_file: bool,
}

#[derive(Debug)]
pub struct Scanner {
    inner: walkdir::IntoIter,
}

impl Scanner {
    /// Checks the root once, up front: it must exist and be a directory.
    pub fn new<P: Into<PathBuf>>(root: P) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(PdfixError::InvalidRoot(root));
        }

        Ok(Self {
            inner: WalkDir::new(root).into_iter(),
        })
    }

    fn process_entry(entry: &DirEntry) -> ScannedEntry {
        ScannedEntry {
            path: entry.path().to_path_buf(),
            is_file: entry.file_type().is_file(),
        }
    }
}

impl Iterator for Scanner {
    type Item = Result<ScannedEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.inner.next()? {
            Ok(entry) => Some(Ok(Self::process_entry(&entry))),
            Err(err) => Some(Err(PdfixError::Scan(err.to_string()))),
        }
    }
}

/// Extension trait for filtering scan results.
pub trait ScannerExt: Iterator<Item = Result<ScannedEntry>> + Sized {
    fn filter_ok(self) -> impl Iterator<Item = ScannedEntry>;
}

impl<I> ScannerExt for I
where
    I: Iterator<Item = Result<ScannedEntry>>,
{
    fn filter_ok(self) -> impl Iterator<Item = ScannedEntry> {
        self.filter_map(|res| res.ok())
    }
}
