use crate::cli::support::{gradelite, stdout_json};
use predicates::prelude::*;

#[test]
fn test_catalog_json_lists_every_combination() {
    let output = gradelite()
        .args(["--format", "json", "catalog"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 40);
    assert_eq!(entries[0]["year"], "E1");
    assert_eq!(entries[0]["semester"], "Sem - 1");
    assert_eq!(entries[0]["branch"], "CSE");
    assert_eq!(entries[0]["subjects"], 7);
    assert_eq!(entries[0]["visible_rows"], 7);
    assert_eq!(entries[0]["total_credits"], 20.0);
}

#[test]
fn test_catalog_filters() {
    let output = gradelite()
        .args(["--format", "json", "catalog", "--year", "E3", "--branch", "EEE"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e["year"] == "E3" && e["branch"] == "EEE"));
}

#[test]
fn test_catalog_unknown_filter_is_invalid_selection() {
    gradelite()
        .args(["catalog", "--semester", "Sem-1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown semester 'Sem-1'"));
}

#[test]
fn test_catalog_human() {
    gradelite()
        .args(["catalog", "--year", "E1", "--semester", "Sem - 1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sem - 1"))
        .stdout(predicate::str::contains("MECH"))
        .stdout(predicate::str::contains("Sem - 2").not());
}

#[test]
fn test_catalog_records() {
    gradelite()
        .args(["--format", "records", "catalog", "--branch", "CSE"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H gradelite=1 records=1 mode=catalog entries=8",
        ))
        .stdout(predicate::str::contains(
            "C E1 \"Sem - 1\" CSE subjects=7 visible=7 credits=20",
        ));
}
