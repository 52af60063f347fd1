use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn finfeed_cmd() -> Command {
    Command::cargo_bin("finfeed").unwrap()
}

fn write_sources(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("sources.json");
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_help_shows_hours_flag() {
    finfeed_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--hours"))
        .stdout(predicate::str::contains("--sources"));
}

#[test]
fn test_empty_source_table_still_writes_both_files() {
    let temp_dir = TempDir::new().unwrap();
    let sources = write_sources(&temp_dir, "[]");
    let xml_path = temp_dir.path().join("combined.xml");
    let json_path = temp_dir.path().join("combined.json");

    finfeed_cmd()
        .arg("--sources")
        .arg(&sources)
        .arg("--xml-output")
        .arg(xml_path.to_str().unwrap())
        .arg("--json-output")
        .arg(json_path.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 0 recent entries."))
        .stdout(predicate::str::contains("RSS feed written:"))
        .stdout(predicate::str::contains("JSON written:"));

    let xml = fs::read_to_string(&xml_path).unwrap();
    assert!(xml.contains("<channel>"));
    assert!(!xml.contains("<item>"));

    assert_eq!(fs::read_to_string(&json_path).unwrap(), "[]");
}

#[test]
fn test_unreachable_source_is_skipped_and_run_completes() {
    let temp_dir = TempDir::new().unwrap();
    // Nothing listens on port 1; both the fetch and the scrape fallback fail
    let sources = write_sources(
        &temp_dir,
        r#"[{"name": "Dead Wire", "url": "http://127.0.0.1:1/feed/"}]"#,
    );
    let xml_path = temp_dir.path().join("combined.xml");
    let json_path = temp_dir.path().join("combined.json");

    finfeed_cmd()
        .arg("--sources")
        .arg(&sources)
        .arg("--xml-output")
        .arg(xml_path.to_str().unwrap())
        .arg("--json-output")
        .arg(json_path.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 0 recent entries."));

    assert!(xml_path.exists());
    assert_eq!(fs::read_to_string(&json_path).unwrap(), "[]");
}

#[test]
fn test_invalid_source_table_fails_with_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let sources = write_sources(&temp_dir, "{ not json");

    finfeed_cmd()
        .arg("--sources")
        .arg(&sources)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_missing_source_table_fails() {
    finfeed_cmd()
        .arg("--sources")
        .arg("/nonexistent/sources.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
