use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use colored::*;

use pdfix::{
    cli::Args,
    normalizer::{Mode, normalize_tree},
    report,
    stats::Summary,
    utils::{default_report_name, init_tracing},
};

fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    let expanded = shellexpand::tilde(&args.root.to_string_lossy()).into_owned();
    let root = match std::fs::canonicalize(&expanded) {
        Ok(path) if path.is_dir() => path,
        _ => {
            eprintln!("{} root is not a folder: {expanded}", "ERROR:".red().bold());
            return ExitCode::from(2);
        }
    };

    let mode = if args.apply { Mode::Apply } else { Mode::DryRun };
    let report_name = args
        .report
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(default_report_name);

    match run(&root, mode, &report_name) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "ERROR:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(root: &Path, mode: Mode, report_name: &str) -> anyhow::Result<()> {
    let outcome = normalize_tree(root, mode)?;
    let summary = Summary::from_items(outcome.scanned, &outcome.items);

    let doc = report::render(root, report_name, mode, &summary, &outcome.items);
    let report_path = report::write(report_name, &doc)?;

    println!(
        "{} wrote {} (matches={}, mode={})",
        "OK:".green().bold(),
        report_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy(),
        summary.matched,
        mode.label()
    );

    Ok(())
}
