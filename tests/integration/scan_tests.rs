use std::path::Path;

use xmldupe::duplicates::{scan, scan_file, Analyzer, DuplicateResult, ScanError, ThresholdRules};

fn fixture() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/plant.xml"))
}

#[test]
fn test_scan_fixture_file() {
    let results = scan_file(fixture()).unwrap();

    assert_eq!(
        results,
        vec![
            DuplicateResult::new("Bare-7", 2, ""),
            DuplicateResult::new("CG9", 4, "ConveyorGroup"),
            DuplicateResult::new("W-100", 3, "Widget"),
        ]
    );
}

#[test]
fn test_scan_fixture_report() {
    let (_, report) = Analyzer::with_defaults().analyze_file(fixture()).unwrap();

    assert_eq!(report.view_objects, 14);
    assert_eq!(report.counted, 12);
    assert_eq!(report.skipped_blank, 1);
    assert_eq!(report.missing_id, 1);
    assert_eq!(report.distinct_ids, 5);
    assert_eq!(report.duplicates, 3);
}

#[test]
fn test_scan_fixture_with_stricter_rules() {
    let rules = ThresholdRules::new(2).with_class("ConveyorGroup", 3);
    let (results, _) = Analyzer::new(rules).analyze_file(fixture()).unwrap();

    let ids: Vec<&str> = results.iter().map(|r| r.object_id.as_str()).collect();
    assert_eq!(ids, vec!["CG9", "W-100"]);
}

#[test]
fn test_scan_is_deterministic() {
    let xml = std::fs::read_to_string(fixture()).unwrap();
    let first = scan(&xml).unwrap();
    for _ in 0..5 {
        assert_eq!(scan(&xml).unwrap(), first);
    }
}

#[test]
fn test_scan_whitespace_only_id() {
    let xml = r#"<Root><ViewObject classname="W"><PROPERTY name="ObjectId" value="   "/></ViewObject></Root>"#;
    assert!(scan(xml).unwrap().is_empty());
}

#[test]
fn test_scan_malformed_fails_without_results() {
    match scan("<ViewObject><PROPERTY</ViewObject>") {
        Err(ScanError::Parse(_)) => {}
        other => panic!("Expected Parse error, got {:?}", other),
    }
}

#[test]
fn test_scan_nested_view_objects() {
    // The outer element's first ObjectId property is the inner one's.
    let xml = r#"<Root>
        <ViewObject classname="Outer">
            <ViewObject classname="Inner">
                <PROPERTY name="ObjectId" value="N1"/>
            </ViewObject>
        </ViewObject>
    </Root>"#;
    let results = scan(xml).unwrap();
    assert_eq!(results, vec![DuplicateResult::new("N1", 2, "Outer")]);
}

#[test]
fn test_scan_ignores_other_property_names() {
    let xml = r#"<Root>
        <ViewObject classname="W"><PROPERTY name="objectid" value="A"/></ViewObject>
        <ViewObject classname="W"><PROPERTY name="objectid" value="A"/></ViewObject>
    </Root>"#;
    assert!(scan(xml).unwrap().is_empty());
}

#[test]
fn test_scan_entities_are_decoded() {
    let xml = r#"<Root>
        <ViewObject classname="W"><PROPERTY name="ObjectId" value="A&amp;B"/></ViewObject>
        <ViewObject classname="W"><PROPERTY name="ObjectId" value="A&amp;B"/></ViewObject>
    </Root>"#;
    assert_eq!(scan(xml).unwrap(), vec![DuplicateResult::new("A&B", 2, "W")]);
}
