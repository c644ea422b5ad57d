use crate::cli::support::{gradelite, stdout_json};
use predicates::prelude::*;

#[test]
fn test_gpa_human() {
    gradelite()
        .args([
            "gpa", "E1", "Sem - 1", "CSE", "9", "8", "10", "7", "9", "10", "10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("GPA: 8.90 (20 credits)"))
        .stdout(predicate::str::contains("Distinction!").not());
}

#[test]
fn test_gpa_quiet_prints_only_value() {
    gradelite()
        .args(["-q", "gpa", "E4", "Sem - 1", "MECH", "10", "", "10", "10"])
        .assert()
        .success()
        .stdout("7.78\n");
}

#[test]
fn test_gpa_full_marks_distinction() {
    gradelite()
        .args(["gpa", "E2", "Sem - 2", "ECE", "10", "10", "10", "10", "10", "10", "10", "10", "10", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GPA: 10.00"))
        .stdout(predicate::str::contains("Distinction!"));
}

#[test]
fn test_gpa_lenient_grades() {
    // "9abc" reads as 9, "abc" as 0
    let output = gradelite()
        .args(["--format", "json", "gpa", "E4", "Sem - 1", "MECH", "9abc", "abc"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let subjects = json["subjects"].as_array().unwrap();
    assert_eq!(subjects[0]["grade"], 9.0);
    assert_eq!(subjects[1]["grade"], 0.0);
    let gpa = json["gpa"].as_f64().unwrap();
    assert!((gpa - 27.0 / 13.5).abs() < 1e-9);
}

#[test]
fn test_gpa_json_shape() {
    let output = gradelite()
        .args([
            "--format", "json", "gpa", "E1", "Sem - 1", "CSE", "9", "8", "10", "7", "9", "10", "10",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["selection"]["branch"], "CSE");
    assert!((json["gpa"].as_f64().unwrap() - 8.9).abs() < 1e-9);
    assert_eq!(json["total_credits"], 20.0);
    assert_eq!(json["weighted_sum"], 178.0);
    assert_eq!(json["distinction"], false);
    assert_eq!(json["distinction_threshold"], 9.0);

    // Unused slots carry neither name nor credit and are left out
    let subjects = json["subjects"].as_array().unwrap();
    assert_eq!(subjects.len(), 7);
    assert_eq!(subjects[0]["subject"], "Calculus & Linear Algebra");
    assert_eq!(subjects[3]["credit"], 2.5);
}

#[test]
fn test_gpa_records() {
    gradelite()
        .args([
            "--format", "records", "gpa", "E1", "Sem - 1", "CSE", "9", "8", "10", "7", "9", "10",
            "10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H gradelite=1 records=1 mode=gpa year=E1 semester=\"Sem - 1\" branch=CSE gpa=8.9 credits=20 distinction=false",
        ))
        .stdout(predicate::str::contains(
            "G 1 grade=9 credit=4 visible=true \"Calculus & Linear Algebra\"",
        ));
}

#[test]
fn test_gpa_visible_only_skips_hidden_slots() {
    // E4 / Sem - 2 / CSE hides named rows 6-9, so the fifth grade goes to
    // slot 5 and nothing lands on the hidden labs.
    let output = gradelite()
        .args([
            "--format",
            "json",
            "gpa",
            "E4",
            "Sem - 2",
            "CSE",
            "10",
            "10",
            "10",
            "10",
            "10",
            "--visible-only",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let subjects = json["subjects"].as_array().unwrap();
    let hidden: Vec<_> = subjects
        .iter()
        .filter(|s| s["visible"] == false)
        .collect();
    assert_eq!(hidden.len(), 3);
    assert!(hidden.iter().all(|s| s["grade"] == 0.0));
    assert_eq!(json["weighted_sum"], 180.0);
}

#[test]
fn test_gpa_too_many_grades_is_usage_error() {
    gradelite()
        .args([
            "gpa", "E4", "Sem - 2", "ECE", "9", "9", "9", "9", "9", "--visible-only",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("5 grades"));

    gradelite()
        .args([
            "gpa", "E1", "Sem - 1", "CSE", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11",
        ])
        .assert()
        .code(2);
}

#[test]
fn test_gpa_negative_grade_accepted() {
    gradelite()
        .args(["-q", "gpa", "E4", "Sem - 2", "ECE", "-1"])
        .assert()
        .success();
}
