//! End-to-end tests for `probeplot plot`.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

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
fn unknown_set_fails_without_creating_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture(&dir, "run.csv", WORKED_EXAMPLE);
    let output = dir.path().join("plot.png");

    Command::cargo_bin("probeplot")
        .unwrap()
        .args(["plot", "--sets", "Set0,Set99", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Set99"));

    assert!(!output.exists());
}

#[test]
fn empty_dataset_fails_without_creating_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture(&dir, "run.csv", "Sample,Set0,Set16,Set32\n");
    let output = dir.path().join("plot.png");

    Command::cargo_bin("probeplot")
        .unwrap()
        .args(["plot", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no rows"));

    assert!(!output.exists());
}

#[test]
fn unwritable_output_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture(&dir, "run.csv", WORKED_EXAMPLE);

    Command::cargo_bin("probeplot")
        .unwrap()
        .args(["plot", "--input"])
        .arg(&input)
        .args(["--output", "/nonexistent-dir/plot.png"])
        .assert()
        .failure();
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture(&dir, "run.tsv", WORKED_EXAMPLE);

    Command::cargo_bin("probeplot")
        .unwrap()
        .args(["plot", "--input"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("tsv"));
}

#[test]
#[ignore = "needs a system font for chart labels"]
fn renders_a_png_for_the_default_sets() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture(&dir, "run.csv", WORKED_EXAMPLE);
    let output = dir.path().join("plot.png");

    Command::cargo_bin("probeplot")
        .unwrap()
        .args(["plot", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let metadata = std::fs::metadata(&output).unwrap();
    assert!(metadata.len() > 0);
}
