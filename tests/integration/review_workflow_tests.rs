use std::path::Path;

use tempfile::tempdir;
use xmldupe::duplicates::scan_file;
use xmldupe::review::ReviewState;
use xmldupe::snapshot::ProgressSnapshot;

fn fixture() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/plant.xml"))
}

#[test]
fn test_review_workflow_full() {
    let dir = tempdir().unwrap();
    let snapshot_path = dir.path().join("review.xml");

    // 1. Scan
    let results = scan_file(fixture()).unwrap();
    assert_eq!(results.len(), 3);

    // 2. Review part of the results
    let mut state = ReviewState::new(results.clone());
    assert!(state.set_checked("CG9", true));

    // 3. Save
    state.to_snapshot().save(&snapshot_path).unwrap();

    // 4. Resume
    let loaded = ProgressSnapshot::load(&snapshot_path).unwrap();
    let resumed = ReviewState::from_snapshot(loaded);

    // 5. Verify
    assert_eq!(resumed.results(), results.as_slice());
    assert!(resumed.is_checked("CG9"));
    assert_eq!(resumed.pending().len(), 2);
    assert_eq!(resumed.completed().len(), 1);
}

#[test]
fn test_review_partition_covers_results() {
    let results = scan_file(fixture()).unwrap();
    let mut state = ReviewState::new(results.clone());
    state.set_checked("W-100", true);

    let pending = state.pending();
    let completed = state.completed();
    assert_eq!(pending.len() + completed.len(), results.len());
    for r in &results {
        let in_pending = pending.contains(&r);
        let in_completed = completed.contains(&r);
        assert!(in_pending ^ in_completed);
    }
}

#[test]
fn test_review_complete_everything() {
    let results = scan_file(fixture()).unwrap();
    let mut state = ReviewState::new(results.clone());
    for r in &results {
        state.set_checked(&r.object_id, true);
    }

    assert!(state.pending().is_empty());
    assert_eq!(state.progress_percentage(), 100.0);
    let snapshot = state.to_snapshot();
    assert!(snapshot.pending.is_empty());
    assert_eq!(snapshot.completed, results);
}
