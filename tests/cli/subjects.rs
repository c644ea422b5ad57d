use crate::cli::support::{gradelite, stdout_json};
use predicates::prelude::*;

#[test]
fn test_subjects_human_lists_visible_rows() {
    gradelite()
        .args(["subjects", "E1", "Sem - 1", "CSE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CSE / E1 / Sem - 1"))
        .stdout(predicate::str::contains("# Calculus & Linear Algebra"))
        .stdout(predicate::str::contains(
            "# Problem Solving and Programming Through C Lab",
        ))
        .stdout(predicate::str::contains("Total credits: 20"))
        .stdout(predicate::str::contains("[hidden]").not());
}

#[test]
fn test_subjects_all_marks_hidden_rows() {
    gradelite()
        .args(["subjects", "E1", "Sem - 1", "CSE", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(unused)"))
        .stdout(predicate::str::contains("[hidden]"));
}

#[test]
fn test_subjects_json_shape() {
    let output = gradelite()
        .args(["--format", "json", "subjects", "E1", "Sem - 1", "CSE"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["selection"]["year"], "E1");
    assert_eq!(json["selection"]["semester"], "Sem - 1");
    assert_eq!(json["selection"]["branch"], "CSE");
    assert_eq!(json["total_credits"], 20.0);

    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0]["slot"], 1);
    assert_eq!(rows[0]["label"], "# Calculus & Linear Algebra");
    assert_eq!(rows[0]["credit"], 4.0);
    assert_eq!(rows[0]["visible"], true);
}

#[test]
fn test_subjects_json_all_has_ten_rows() {
    let output = gradelite()
        .args(["--format", "json", "subjects", "E1", "Sem - 1", "CSE", "--all"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[9]["visible"], false);
    assert_eq!(rows[9]["label"], "");
}

#[test]
fn test_subjects_tenth_row_shown() {
    let output = gradelite()
        .args(["--format", "json", "subjects", "E3", "Sem - 1", "EEE"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[9]["label"], "# Product Design & Innovation Lab");
}

#[test]
fn test_subjects_records() {
    gradelite()
        .args(["--format", "records", "subjects", "E4", "Sem - 1", "MECH"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H gradelite=1 records=1 mode=subjects year=E4 semester=\"Sem - 1\" branch=MECH rows=4 credits=13.5",
        ))
        .stdout(predicate::str::contains("S 4 credit=4.5 visible=true \"Project\""));
}
