use std::fmt;
use std::path::{Path, PathBuf};

use colored::*;

/// Final outcome for each matched file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Dry-run: the rename would go through.
    Ok,
    /// Target already names the same filesystem entity.
    Skip,
    /// Conflict resolution exhausted every candidate name.
    Conflict,
    /// Apply mode: the rename happened.
    Renamed,
    /// Apply mode: the rename failed.
    Error,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Skip => "SKIP",
            Status::Conflict => "CONFLICT",
            Status::Renamed => "RENAMED",
            Status::Error => "ERROR",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record of one file's match outcome. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct Item {
    pub old: PathBuf,
    pub new: PathBuf,
    pub status: Status,
    pub note: String,
}

impl Item {
    pub fn new(
        old: impl Into<PathBuf>,
        new: impl Into<PathBuf>,
        status: Status,
        note: impl Into<String>,
    ) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
            status,
            note: note.into(),
        }
    }

    fn file_name(path: &Path) -> std::borrow::Cow<'_, str> {
        path.file_name().unwrap_or_default().to_string_lossy()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.status {
            Status::Ok => "OK".green().bold(),
            Status::Renamed => "RENAMED".cyan().bold(),
            Status::Skip => "SKIP".yellow().bold(),
            Status::Conflict => "CONFLICT".red().bold(),
            Status::Error => "ERROR".red().bold(),
        };
        write!(
            f,
            "{} {} -> {} ({})",
            tag,
            Self::file_name(&self.old),
            Self::file_name(&self.new),
            self.note
        )
    }
}

/// Aggregate counts for the whole run.
#[derive(Debug, Default, Clone, Copy)]
pub struct Summary {
    pub scanned: usize,
    pub matched: usize,
    pub ok_or_renamed: usize,
    pub conflicts_or_errors: usize,
}

impl Summary {
    pub fn from_items(scanned: usize, items: &[Item]) -> Self {
        let mut summary = Summary {
            scanned,
            matched: items.len(),
            ..Default::default()
        };

        for item in items {
            match item.status {
                Status::Ok | Status::Renamed => summary.ok_or_renamed += 1,
                Status::Conflict | Status::Error => summary.conflicts_or_errors += 1,
                Status::Skip => {}
            }
        }

        summary
    }
}
