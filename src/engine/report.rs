use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::engine::normalizer::Mode;
use crate::engine::stats::{Item, Summary};
use crate::errors::{PdfixError, Result};

/// Renders the Markdown report document: header, summary block, and the
/// detail table in discovery order. Zero matches gets an explicit line
/// instead of an empty table.
pub fn render(
    root: &Path,
    report_name: &str,
    mode: Mode,
    summary: &Summary,
    items: &[Item],
) -> String {
    let now = Local::now().format("%Y-%m-%d %H:%M:%S");

    let mut doc = String::new();
    doc.push_str("# PDF Filename Normalizer (.pdf.pdf -> .pdf)\n\n");
    let _ = writeln!(doc, "Generated: **{now}**  ");
    let _ = writeln!(doc, "Mode: **{}**  ", mode.label());
    let _ = writeln!(doc, "Root: `{}`  ", root.display());
    let _ = writeln!(doc, "Report: `{report_name}`\n");

    doc.push_str("## Summary\n\n");
    let _ = writeln!(doc, "- Scanned files: **{}**", summary.scanned);
    let _ = writeln!(doc, "- Matches (.pdf.pdf): **{}**", summary.matched);
    let _ = writeln!(doc, "- OK/RENAMED: **{}**", summary.ok_or_renamed);
    let _ = writeln!(doc, "- Conflicts/Errors: **{}**\n", summary.conflicts_or_errors);

    doc.push_str("## Details\n\n");
    if items.is_empty() {
        doc.push_str("_No files with double .pdf extension found._\n");
    } else {
        doc.push_str("| Status | Old name | New name | Note |\n");
        doc.push_str("|---|---|---|---|\n");
        for item in items {
            let _ = writeln!(
                doc,
                "| {} | `{}` | `{}` | {} |",
                item.status,
                item.old.display(),
                item.new.display(),
                item.note
            );
        }
    }

    doc
}

/// Writes the report into `dir`. A report that cannot be written means the
/// run's purpose was not achieved, so the error is fatal to the caller.
pub fn write_to(dir: &Path, report_name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.join(report_name);
    fs::write(&path, contents).map_err(|source| PdfixError::Report {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Writes the report into the current working directory.
pub fn write(report_name: &str, contents: &str) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    write_to(&cwd, report_name, contents)
}
