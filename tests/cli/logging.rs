use crate::cli::support::gradelite;
use predicates::prelude::*;

#[test]
fn test_default_run_is_silent_on_stderr() {
    gradelite()
        .args(["subjects", "E1", "Sem - 1", "CSE"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_verbose_logs_lookup() {
    gradelite()
        .args(["-v", "subjects", "E1", "Sem - 1", "CSE"])
        .assert()
        .success()
        .stderr(predicate::str::contains("lookup"));
}

#[test]
fn test_log_json_emits_json_lines() {
    gradelite()
        .args(["--log-level", "debug", "--log-json", "gpa", "E1", "Sem - 1", "CSE", "9"])
        .assert()
        .success()
        .stderr(predicate::str::contains("{\""))
        .stderr(predicate::str::contains("calculate"));
}

#[test]
fn test_log_level_from_env() {
    gradelite()
        .env("GRADELITE_LOG_LEVEL", "debug")
        .args(["subjects", "E9", "Sem - 1", "CSE"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("lookup miss"));
}
