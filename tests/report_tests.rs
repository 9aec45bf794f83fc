
use std::path::Path;

use pdfix::normalizer::Mode;
use pdfix::report::{render, write_to};
use pdfix::stats::{Item, Status, Summary};
use test_utils::tree;

fn sample_items() -> Vec<Item> {
    vec![
        Item::new("/data/report.pdf.pdf", "/data/report.pdf", Status::Ok, "dry-run"),
        Item::new(
            "/data/a.pdf.pdf",
            "/data/a_1.pdf",
            Status::Renamed,
            "target exists -> using a_1.pdf",
        ),
        Item::new(
            "/data/locked.pdf.pdf",
            "/data/locked.pdf",
            Status::Error,
            "Permission denied (os error 13)",
        ),
    ]
}

#[test]
fn header_carries_mode_root_and_report_name() {
    let summary = Summary::default();
    let doc = render(Path::new("/data"), "out.md", Mode::DryRun, &summary, &[]);

    assert!(doc.starts_with("# PDF Filename Normalizer"));
    assert!(doc.contains("Mode: **DRY-RUN (no changes)**"));
    assert!(doc.contains("Root: `/data`"));
    assert!(doc.contains("Report: `out.md`"));
}

#[test]
fn zero_matches_states_it_explicitly() {
    let summary = Summary { scanned: 0, ..Default::default() };
    let doc = render(Path::new("/data"), "out.md", Mode::DryRun, &summary, &[]);

    assert!(doc.contains("- Scanned files: **0**"));
    assert!(doc.contains("- Matches (.pdf.pdf): **0**"));
    assert!(doc.contains("_No files with double .pdf extension found._"));
    assert!(!doc.contains("| Status |"));
}

#[test]
fn detail_table_lists_every_item_in_order() {
    let items = sample_items();
    let summary = Summary::from_items(5, &items);
    let doc = render(Path::new("/data"), "out.md", Mode::Apply, &summary, &items);

    assert!(doc.contains("| Status | Old name | New name | Note |"));
    let ok_row = doc.find("| OK | `/data/report.pdf.pdf`").unwrap();
    let renamed_row = doc.find("| RENAMED | `/data/a.pdf.pdf`").unwrap();
    let error_row = doc.find("| ERROR | `/data/locked.pdf.pdf`").unwrap();
    assert!(ok_row < renamed_row && renamed_row < error_row);
    assert!(doc.contains("target exists -> using a_1.pdf"));
}

#[test]
fn summary_block_aggregates_counts() {
    let items = sample_items();
    let summary = Summary::from_items(5, &items);
    let doc = render(Path::new("/data"), "out.md", Mode::Apply, &summary, &items);

    assert!(doc.contains("- Scanned files: **5**"));
    assert!(doc.contains("- Matches (.pdf.pdf): **3**"));
    assert!(doc.contains("- OK/RENAMED: **2**"));
    assert!(doc.contains("- Conflicts/Errors: **1**"));
}

#[test]
fn write_to_persists_the_document() {
    let dir = tree();

    let path = write_to(dir.path(), "out.md", "# report\n").unwrap();

    assert_eq!(path, dir.path().join("out.md"));
    assert_eq!(std::fs::read_to_string(path).unwrap(), "# report\n");
}

#[test]
fn write_into_missing_directory_fails() {
    let dir = tree();
    let missing = dir.path().join("nope");

    assert!(write_to(&missing, "out.md", "x").is_err());
}
