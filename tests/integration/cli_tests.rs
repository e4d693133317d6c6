use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use tempfile::{tempdir, TempDir};
use xmldupe::cli::Cli;
use xmldupe::error::ExitCode;
use xmldupe::run_app;
use xmldupe::snapshot::ProgressSnapshot;

fn fixture() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/plant.xml"))
}

/// Run the CLI with an isolated (absent) config file.
fn run(dir: &TempDir, args: &[&str]) -> anyhow::Result<ExitCode> {
    let config = dir.path().join("config.toml");
    let mut argv = vec!["xmldupe", "-q", "--config", config.to_str().unwrap()];
    argv.extend_from_slice(args);
    run_app(Cli::try_parse_from(argv).unwrap())
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_cli_scan_finds_duplicates() {
    let dir = tempdir().unwrap();
    let code = run(&dir, &["scan", path_str(&fixture()), "-o", "json"]).unwrap();
    assert_eq!(code, ExitCode::Success);
}

#[test]
fn test_cli_scan_no_duplicates() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("clean.xml");
    fs::write(
        &input,
        r#"<Root><ViewObject classname="W"><PROPERTY name="ObjectId" value="A"/></ViewObject></Root>"#,
    )
    .unwrap();

    let code = run(&dir, &["scan", path_str(&input), "-o", "csv"]).unwrap();
    assert_eq!(code, ExitCode::NoDuplicates);
}

#[test]
fn test_cli_scan_malformed_is_error_and_saves_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("broken.xml");
    let snapshot = dir.path().join("review.xml");
    fs::write(&input, "<ViewObject><PROPERTY</ViewObject>").unwrap();

    let err = run(
        &dir,
        &["scan", path_str(&input), "--save-progress", path_str(&snapshot)],
    )
    .unwrap_err();

    assert!(format!("{err:#}").contains("Failed to analyze XML file"));
    assert!(!snapshot.exists());
}

#[test]
fn test_cli_scan_missing_file() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.xml");
    assert!(run(&dir, &["scan", path_str(&missing)]).is_err());
}

#[test]
fn test_cli_scan_then_resume() {
    let dir = tempdir().unwrap();
    let snapshot = dir.path().join("review.xml");

    run(
        &dir,
        &["scan", path_str(&fixture()), "-o", "csv", "--save-progress", path_str(&snapshot)],
    )
    .unwrap();

    let saved = ProgressSnapshot::load(&snapshot).unwrap();
    assert!(saved.completed.is_empty());
    assert_eq!(saved.pending.len(), 3);

    let code = run(
        &dir,
        &[
            "resume",
            path_str(&snapshot),
            "--complete",
            "CG9",
            "--complete",
            "not-in-results",
            "-o",
            "json",
            "--save",
        ],
    )
    .unwrap();
    assert_eq!(code, ExitCode::Success);

    let saved = ProgressSnapshot::load(&snapshot).unwrap();
    let completed: Vec<&str> = saved.completed.iter().map(|r| r.object_id.as_str()).collect();
    let pending: Vec<&str> = saved.pending.iter().map(|r| r.object_id.as_str()).collect();
    assert_eq!(completed, vec!["CG9"]);
    assert_eq!(pending, vec!["Bare-7", "W-100"]);
}

#[test]
fn test_cli_resume_save_elsewhere_and_reopen() {
    let dir = tempdir().unwrap();
    let original = dir.path().join("review.xml");
    let copy = dir.path().join("review-2.xml");
    fs::write(
        &original,
        r#"<ProgressData>
  <CompletedItems><Item objectId="A" count="2" className="W" /></CompletedItems>
  <PendingItems><Item objectId="B" count="2" className="W" /></PendingItems>
</ProgressData>"#,
    )
    .unwrap();

    run(
        &dir,
        &["resume", path_str(&original), "--reopen", "A", "-o", "csv", "--save", path_str(&copy)],
    )
    .unwrap();

    let untouched = ProgressSnapshot::load(&original).unwrap();
    assert_eq!(untouched.completed.len(), 1);

    let updated = ProgressSnapshot::load(&copy).unwrap();
    assert!(updated.completed.is_empty());
    assert_eq!(updated.pending.len(), 2);
}

#[test]
fn test_cli_invalid_config_is_error() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("bad.toml");
    fs::write(&config, "default_threshold = [").unwrap();

    let cli = Cli::try_parse_from([
        "xmldupe",
        "-q",
        "--config",
        path_str(&config),
        "scan",
        path_str(&fixture()),
    ])
    .unwrap();
    let err = run_app(cli).unwrap_err();
    assert!(err.to_string().contains("Failed to load config file"));
}

#[test]
fn test_cli_config_thresholds_apply() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("strict.toml");
    fs::write(&config, "default_threshold = 10\n[class_thresholds]\nConveyorGroup = 10\n").unwrap();

    let cli = Cli::try_parse_from([
        "xmldupe",
        "-q",
        "--config",
        path_str(&config),
        "scan",
        path_str(&fixture()),
        "-o",
        "json",
    ])
    .unwrap();
    assert_eq!(run_app(cli).unwrap(), ExitCode::NoDuplicates);
}
