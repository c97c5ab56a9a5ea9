//! End-to-end tests for the inkoop binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const SAMPLE: &str = "\
PURCHASE ORDER

Order Number: APO-00199
Date: 2024-01-15
Supplier: JASA Packaging Solutions B.V.

Items:
- Product A: 100 units @ \u{20ac}25.00 = \u{20ac}2,500.00
- Product B: 50 units @ \u{20ac}15.00 = \u{20ac}750.00

Subtotal: \u{20ac}3,250.00
VAT (21%): \u{20ac}682.50
Total: \u{20ac}3,932.50
";

#[test]
fn process_emits_json_with_stable_field_names() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("order.txt");
    fs::write(&input, SAMPLE).unwrap();

    Command::cargo_bin("inkoop")
        .unwrap()
        .arg("process")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"order_number\""))
        .stdout(predicate::str::contains("APO-00199"))
        .stdout(predicate::str::contains("\"confidence_score\""));
}

#[test]
fn process_text_summary_shows_confidence() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("order.txt");
    fs::write(&input, SAMPLE).unwrap();

    Command::cargo_bin("inkoop")
        .unwrap()
        .args(["process", "--format", "text"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("APO-00199"))
        .stdout(predicate::str::contains("Confidence: 1.00"));
}

#[test]
fn process_missing_input_fails() {
    Command::cargo_bin("inkoop")
        .unwrap()
        .args(["process", "does-not-exist.txt"])
        .assert()
        .failure();
}

#[test]
fn batch_writes_outputs_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), SAMPLE).unwrap();
    fs::write(dir.path().join("b.txt"), "no recognizable fields").unwrap();

    let out_dir = dir.path().join("out");
    let pattern = dir.path().join("*.txt");

    Command::cargo_bin("inkoop")
        .unwrap()
        .arg("batch")
        .arg(pattern.to_str().unwrap())
        .arg("--output-dir")
        .arg(&out_dir)
        .arg("--summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 files"));

    assert!(out_dir.join("a.json").exists());
    assert!(out_dir.join("b.json").exists());

    let summary = fs::read_to_string(out_dir.join("summary.csv")).unwrap();
    assert!(summary.contains("a.txt"));
    assert!(summary.contains("APO-00199"));
}
