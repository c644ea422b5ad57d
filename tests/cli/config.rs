use std::fs;

use crate::cli::support::gradelite_with_config;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_missing_config_uses_defaults() {
    let dir = tempdir().unwrap();

    gradelite_with_config(dir.path())
        .args(["-q", "gpa", "E4", "Sem - 1", "MECH", "10", "", "10", "10"])
        .assert()
        .success()
        .stdout("7.78\n");
}

#[test]
fn test_config_precision() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "precision = 4\n").unwrap();

    gradelite_with_config(dir.path())
        .args(["-q", "gpa", "E4", "Sem - 1", "MECH", "10", "", "10", "10"])
        .assert()
        .success()
        .stdout("7.7778\n");
}

#[test]
fn test_config_distinction_threshold() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "distinction_threshold = 8.5\n",
    )
    .unwrap();

    gradelite_with_config(dir.path())
        .args([
            "gpa", "E1", "Sem - 1", "CSE", "9", "8", "10", "7", "9", "10", "10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Distinction! GPA of 8.5 or above."));
}

#[test]
fn test_config_out_of_range_is_usage_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "precision = 9\n").unwrap();

    gradelite_with_config(dir.path())
        .args(["--format", "json", "gpa", "E1", "Sem - 1", "CSE", "9"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"invalid_value\""));
}

#[test]
fn test_malformed_config_is_failure() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "precision = [\n").unwrap();

    gradelite_with_config(dir.path())
        .args(["gpa", "E1", "Sem - 1", "CSE", "9"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}

#[test]
fn test_subjects_does_not_read_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "precision = [\n").unwrap();

    gradelite_with_config(dir.path())
        .args(["subjects", "E1", "Sem - 1", "CSE"])
        .assert()
        .success();
}
