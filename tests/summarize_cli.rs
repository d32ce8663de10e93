//! End-to-end tests for `probeplot summarize`.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

/// Write a fixture CSV and return its path (tempdir kept alive by caller).
fn fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

const WORKED_EXAMPLE: &str = "Sample,Set0,Set16,Set32\n\
                              0,150,100,300\n\
                              1,250,210,120\n\
                              2,180,190,400\n";

#[test]
fn default_summary_matches_worked_example() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture(&dir, "run.csv", WORKED_EXAMPLE);

    Command::cargo_bin("probeplot")
        .unwrap()
        .args(["summarize", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::eq(
            "Set0 max: 250 cycles\nSet16 hits: 1 samples\nSet32 max: 400 cycles\n",
        ));
}

#[test]
fn reading_exactly_at_threshold_is_not_counted() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture(
        &dir,
        "run.csv",
        "Sample,Set16\n0,200\n1,201\n2,199\n3,200\n",
    );

    Command::cargo_bin("probeplot")
        .unwrap()
        .args(["summarize", "--hits", "Set16", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::eq("Set16 hits: 1 samples\n"));
}

#[test]
fn threshold_override_changes_the_count() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture(&dir, "run.csv", WORKED_EXAMPLE);

    Command::cargo_bin("probeplot")
        .unwrap()
        .args(["summarize", "--threshold", "120", "--hits", "Set32", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::eq("Set32 hits: 2 samples\n"));
}

#[test]
fn custom_requests_replace_the_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture(&dir, "run.csv", WORKED_EXAMPLE);

    Command::cargo_bin("probeplot")
        .unwrap()
        .args(["summarize", "--max", "Set16", "--hits", "Set0", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::eq("Set16 max: 210 cycles\nSet0 hits: 1 samples\n"));
}

#[test]
fn json_output_is_machine_readable() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture(&dir, "run.csv", WORKED_EXAMPLE);

    let output = Command::cargo_bin("probeplot")
        .unwrap()
        .args(["summarize", "--json", "--input"])
        .arg(&input)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let entries = parsed["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["stat"], "max");
    assert_eq!(entries[0]["set"], "Set0");
    assert_eq!(entries[0]["cycles"], 250.0);
    assert_eq!(entries[1]["samples"], 1);
    assert_eq!(entries[2]["cycles"], 400.0);
}

#[test]
fn missing_input_file_fails_with_path_in_message() {
    Command::cargo_bin("probeplot")
        .unwrap()
        .args(["summarize", "--input", "no_such_run.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no_such_run.csv"));
}

#[test]
fn unknown_set_fails_listing_available_columns() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture(&dir, "run.csv", WORKED_EXAMPLE);

    Command::cargo_bin("probeplot")
        .unwrap()
        .args(["summarize", "--max", "Set7", "--input"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Set7").and(predicate::str::contains("Set0")));
}

#[test]
fn empty_dataset_fails_loudly() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture(&dir, "run.csv", "Sample,Set0,Set16,Set32\n");

    Command::cargo_bin("probeplot")
        .unwrap()
        .args(["summarize", "--input"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no rows"));
}

#[test]
fn malformed_cell_fails_naming_row_and_column() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture(&dir, "run.csv", "Sample,Set0\n0,150\n1,fast\n");

    Command::cargo_bin("probeplot")
        .unwrap()
        .args(["summarize", "--input"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("row 1").and(predicate::str::contains("Set0")));
}
