//! End-to-end tests for the `donation_tally` binary

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::io::Write;
use tempfile::NamedTempFile;

fn input(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

fn scenario() -> NamedTempFile {
    input(&[
        "C00|N|M2|P|20200101|15|IND|A, B C|X|Y",
        "C00|N|M2|P|20200102|15|IND|A, B C|X|Y",
        "C00|N|M2|P|20200301|15|IND|A, B C|X|Y",
    ])
}

fn bin() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("donation_tally").unwrap()
}

#[test]
fn test_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--capture-line"))
        .stdout(predicate::str::contains("--variant"));
}

#[test]
fn test_table_output() {
    let file = scenario();
    bin()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2020-01"))
        .stdout(predicate::str::contains("A, B C"))
        .stdout(predicate::str::contains("TOTAL (2 months)"));
}

#[test]
fn test_json_output_for_each_variant() {
    let file = scenario();
    let mut outputs = Vec::new();
    for variant in ["sequential", "pipelined"] {
        let assert = bin()
            .arg(file.path())
            .args(["--variant", variant, "--format", "json", "--batch-size", "2"])
            .assert()
            .success();
        let json: Value = serde_json::from_slice(&assert.get_output().stdout)
            .expect("Failed to parse JSON output");

        assert_eq!(json["total_lines"], 3);
        assert_eq!(json["donations"][0]["year"], 2020);
        assert_eq!(json["donations"][0]["month"], 1);
        assert_eq!(json["donations"][0]["count"], 2);
        assert_eq!(json["donations"][1]["month"], 3);
        assert_eq!(json["most_common_first_name"]["name"], "B");
        assert_eq!(json["most_common_first_name"]["count"], 3);
        assert_eq!(json["captured_names"]["0"], "A, B C");
        outputs.push(json);
    }
    assert_ne!(outputs[0]["variant"], outputs[1]["variant"]);
}

#[test]
fn test_malformed_line_fails() {
    let file = input(&["C00|N|M2|P|20200101|15|IND|A, B C", "too|short"]);
    bin()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed line 2"));
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    bin()
        .arg(dir.path().join("nope.txt"))
        .arg("--quiet")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn test_empty_file_has_no_first_name() {
    let file = input(&[]);
    let assert = bin()
        .arg(file.path())
        .args(["--format", "json"])
        .assert()
        .success();
    let json: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(json["total_lines"], 0);
    assert!(json["most_common_first_name"].is_null());
    assert_eq!(json["donations"].as_array().map(Vec::len), Some(0));
}
