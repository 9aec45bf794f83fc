
use pdfix::conflict_resolver::{MAX_ATTEMPTS, resolve_conflict, resolve_conflict_bounded};
use pdfix::errors::PdfixError;
use test_utils::{touch, tree};

#[test]
fn free_target_is_kept_as_is() {
    let dir = tree();
    let wanted = dir.path().join("a.pdf");

    let resolved = resolve_conflict(&wanted).unwrap();
    assert_eq!(resolved, wanted);
}

#[test]
fn occupied_target_gets_counter_suffix() {
    let dir = tree();
    touch(dir.path(), "a.pdf");

    let resolved = resolve_conflict(&dir.path().join("a.pdf")).unwrap();
    assert_eq!(resolved, dir.path().join("a_1.pdf"));
}

#[test]
fn counter_skips_taken_candidates() {
    let dir = tree();
    touch(dir.path(), "a.pdf");
    touch(dir.path(), "a_1.pdf");
    touch(dir.path(), "a_2.pdf");

    let resolved = resolve_conflict(&dir.path().join("a.pdf")).unwrap();
    assert_eq!(resolved, dir.path().join("a_3.pdf"));
}

#[test]
fn extensionless_target_still_resolves() {
    let dir = tree();
    touch(dir.path(), "notes");

    let resolved = resolve_conflict(&dir.path().join("notes")).unwrap();
    assert_eq!(resolved, dir.path().join("notes_1"));
}

#[test]
fn exhausted_bound_is_a_conflict_error() {
    let dir = tree();
    touch(dir.path(), "a.pdf");
    touch(dir.path(), "a_1.pdf");
    touch(dir.path(), "a_2.pdf");

    let err = resolve_conflict_bounded(&dir.path().join("a.pdf"), 2).unwrap_err();
    assert!(matches!(err, PdfixError::TooManyConflicts(_)));
}

#[test]
fn default_bound_matches_documented_limit() {
    assert_eq!(MAX_ATTEMPTS, 9_999);
}
