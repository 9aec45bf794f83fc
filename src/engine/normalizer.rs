use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::engine::conflict_resolver::{MAX_ATTEMPTS, resolve_conflict_bounded};
use crate::engine::matcher::target_for;
use crate::engine::scanner::{Scanner, ScannerExt};
use crate::engine::stats::{Item, Status};
use crate::errors::Result;

/// Execution mode: dry-run records decisions, apply performs renames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    DryRun,
    Apply,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Apply => "APPLY (rename)",
            Mode::DryRun => "DRY-RUN (no changes)",
        }
    }
}

/// Everything one pass over the tree produced, in discovery order.
#[derive(Debug)]
pub struct RunOutcome {
    pub items: Vec<Item>,
    pub scanned: usize,
}

/// Walks `root` recursively and evaluates every regular file whose name ends
/// in the double `.pdf.pdf` suffix. A single file's failure never aborts the
/// run; it is captured on that file's `Item`.
pub fn normalize_tree(root: &Path, mode: Mode) -> Result<RunOutcome> {
    normalize_tree_bounded(root, mode, MAX_ATTEMPTS)
}

/// Same pass with an explicit cap on conflict-resolution candidates.
pub fn normalize_tree_bounded(root: &Path, mode: Mode, max_attempts: u32) -> Result<RunOutcome> {
    let scanner = Scanner::new(root)?;

    let mut items = Vec::new();
    let mut scanned = 0usize;

    for entry in scanner.filter_ok() {
        if !entry.is_file {
            continue;
        }
        scanned += 1;

        let Some(target) = target_for(&entry.path) else {
            continue;
        };

        let item = evaluate(&entry.path, target, mode, max_attempts);
        info!("{item}");
        items.push(item);
    }

    Ok(RunOutcome { items, scanned })
}

/// Decision table for one matched file.
fn evaluate(path: &Path, target: PathBuf, mode: Mode, max_attempts: u32) -> Item {
    if is_same_entity(path, &target) {
        debug!(?path, "target is the same entity, skipping");
        return Item::new(path, target, Status::Skip, "same path");
    }

    let (target, note) = if target.exists() {
        match resolve_conflict_bounded(&target, max_attempts) {
            Ok(resolved) => {
                let substituted = resolved
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .into_owned();
                (resolved, format!("target exists -> using {substituted}"))
            }
            Err(err) => {
                warn!(?path, %err, "conflict resolution exhausted");
                return Item::new(path, target, Status::Conflict, err.to_string());
            }
        }
    } else {
        (target, String::new())
    };

    match mode {
        Mode::Apply => match fs::rename(path, &target) {
            Ok(()) => {
                let note = if note.is_empty() { "renamed".into() } else { note };
                Item::new(path, target, Status::Renamed, note)
            }
            Err(err) => {
                warn!(?path, %err, "rename failed");
                Item::new(path, target, Status::Error, err.to_string())
            }
        },
        Mode::DryRun => {
            let note = if note.is_empty() { "dry-run".into() } else { note };
            Item::new(path, target, Status::Ok, note)
        }
    }
}

/// True when `target` already names the same filesystem entity as `path`.
/// Canonicalization only answers for paths that exist, which is exactly the
/// case this check is for.
fn is_same_entity(path: &Path, target: &Path) -> bool {
    if path == target {
        return true;
    }
    match (fs::canonicalize(path), fs::canonicalize(target)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
