//! End-to-end tests for the docmind binary.

use assert_cmd::Command;
use predicates::prelude::*;

const BILL: &str = "\
BESCOM Electricity Bill
Consumer services, JP Nagar, Bengaluru 560078
Invoice date: 01/03/2025
Amount due: Rs. 1,240.00
Due date: 10/03/2025
";

fn docmind() -> Command {
    Command::cargo_bin("docmind").unwrap()
}

#[test]
fn extract_emits_json_with_reminder() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bill.txt");
    std::fs::write(&input, BILL).unwrap();

    docmind()
        .arg("extract")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"document_type\": \"bill\""))
        .stdout(predicate::str::contains("payment_due"))
        .stdout(predicate::str::contains("01/03/2025"));
}

#[test]
fn extract_text_format_shows_summary() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bill.txt");
    std::fs::write(&input, BILL).unwrap();

    docmind()
        .args(["extract", "--format", "text"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Document type: bill"))
        .stdout(predicate::str::contains("payment due"));
}

#[test]
fn extract_missing_input_fails() {
    docmind()
        .args(["extract", "/nonexistent/transcript.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn batch_writes_outputs_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), BILL).unwrap();
    std::fs::write(dir.path().join("b.txt"), "nothing to see here").unwrap();
    let out_dir = dir.path().join("out");

    docmind()
        .arg("batch")
        .arg(dir.path().join("*.txt"))
        .arg("--output-dir")
        .arg(&out_dir)
        .arg("--summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 file(s) processed"));

    assert!(out_dir.join("a.json").exists());
    assert!(out_dir.join("b.json").exists());

    let summary = std::fs::read_to_string(out_dir.join("summary.csv")).unwrap();
    assert!(summary.contains("document_type"));
    assert!(summary.contains("bill"));
}

#[test]
fn config_init_then_show_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("docmind.json");

    docmind()
        .args(["config", "init"])
        .arg(&config_path)
        .assert()
        .success();

    docmind()
        .arg("--config")
        .arg(&config_path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("day_first"));
}

#[test]
fn config_init_refuses_overwrite_without_force() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("docmind.json");
    std::fs::write(&config_path, "{}").unwrap();

    docmind()
        .args(["config", "init"])
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
