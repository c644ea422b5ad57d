use std::path::Path;

use assert_cmd::{cargo::cargo_bin_cmd, Command};

/// Get a Command for gradelite that ignores the user's own config and
/// log settings
pub fn gradelite() -> Command {
    let mut cmd = cargo_bin_cmd!("gradelite");
    cmd.env("GRADELITE_CONFIG_DIR", concat!(env!("CARGO_MANIFEST_DIR"), "/tests/no-config"))
        .env_remove("GRADELITE_LOG_LEVEL")
        .env_remove("GRADELITE_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Get a Command for gradelite reading `config.toml` from `config_dir`
pub fn gradelite_with_config(config_dir: &Path) -> Command {
    let mut cmd = gradelite();
    cmd.env("GRADELITE_CONFIG_DIR", config_dir);
    cmd
}

/// Parse stdout as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
