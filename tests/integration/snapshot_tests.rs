use std::fs;

use tempfile::tempdir;
use xmldupe::duplicates::DuplicateResult;
use xmldupe::snapshot::{parse, serialize, ProgressSnapshot, SnapshotError};

#[test]
fn test_pending_only_snapshot() {
    let pending = vec![DuplicateResult::new("X", 5, "Gadget")];
    let snapshot = parse(&serialize(&[], &pending)).unwrap();

    assert!(snapshot.completed.is_empty());
    assert_eq!(snapshot.pending, pending);
}

#[test]
fn test_roundtrip_preserves_section_order() {
    let completed = vec![
        DuplicateResult::new("Z", 2, "W"),
        DuplicateResult::new("A", 3, ""),
    ];
    let pending = vec![
        DuplicateResult::new("M", 4, "ConveyorGroup"),
        DuplicateResult::new("B", 9, "DistanceSensor"),
    ];

    let snapshot = parse(&serialize(&completed, &pending)).unwrap();
    assert_eq!(snapshot.completed, completed);
    assert_eq!(snapshot.pending, pending);
}

#[test]
fn test_snapshot_file_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("review.xml");

    let snapshot = ProgressSnapshot::new(
        vec![DuplicateResult::new("<tag>", 2, "\"quoted\"")],
        vec![DuplicateResult::new("a & b", 3, "it's")],
    );
    snapshot.save(&path).unwrap();

    assert_eq!(ProgressSnapshot::load(&path).unwrap(), snapshot);
}

#[test]
fn test_parse_truncated_snapshot_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("review.xml");
    let full = serialize(&[], &[DuplicateResult::new("X", 2, "W")]);
    fs::write(&path, &full[..full.len() / 2]).unwrap();

    let result = ProgressSnapshot::load(&path);
    assert!(matches!(result, Err(SnapshotError::Parse(_))));
}

#[test]
fn test_parse_hand_written_snapshot() {
    let xml = r#"<?xml version="1.0"?>
<ProgressData>
  <PendingItems>
    <Item objectId="P1" className="W" />
    <Item objectId="P2" count=" 7 " className="W" />
    <Item objectId="P3" count="-1" />
  </PendingItems>
</ProgressData>"#;

    let snapshot = parse(xml).unwrap();
    assert!(snapshot.completed.is_empty());
    assert_eq!(
        snapshot.pending,
        vec![
            DuplicateResult::new("P1", 1, "W"),
            DuplicateResult::new("P2", 7, "W"),
            DuplicateResult::new("P3", 1, ""),
        ]
    );
}
