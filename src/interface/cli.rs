use std::path::PathBuf;

use clap::Parser;

/// Fix duplicate .pdf.pdf extensions recursively. Default is DRY-RUN.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Root folder to scan (default: current folder)
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Actually rename files (otherwise dry-run)
    #[arg(long)]
    pub apply: bool,

    /// Report filename (.md). Default: FIX_PDF_NAMES_<timestamp>.md
    #[arg(long)]
    pub report: Option<String>,
}
