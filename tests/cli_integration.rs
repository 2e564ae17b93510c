//! CLI integration tests.
//!
//! End-to-end tests for CLI commands using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the skybridge binary for testing
fn skybridge_cmd() -> Command {
    Command::cargo_bin("skybridge").unwrap()
}

#[test]
fn test_version_output() {
    skybridge_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("skybridge"));
}

#[test]
fn test_help_shows_all_commands() {
    skybridge_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("models"))
        .stdout(predicate::str::contains("probe"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_serve_help() {
    skybridge_cmd()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--host"));
}

#[test]
fn test_models_table() {
    skybridge_cmd()
        .arg("models")
        .assert()
        .success()
        .stdout(predicate::str::contains("flight-info"))
        .stdout(predicate::str::contains("1.0.0"));
}

#[test]
fn test_models_json() {
    let output = skybridge_cmd()
        .args(["models", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["models"].as_array().unwrap().len(), 2);
}

#[test]
fn test_probe_fails_without_access_key() {
    skybridge_cmd()
        .args(["probe", "TK1934"])
        .env_remove("AVIATIONSTACK_API_KEY")
        .env_remove("SKYBRIDGE_UPSTREAM_URL")
        .assert()
        .failure()
        .stderr(predicate::str::contains("API key not configured"));
}

#[test]
fn test_config_init_creates_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("skybridge.toml");

    skybridge_cmd()
        .args(["config", "init", "-o", config_path.to_str().unwrap()])
        .assert()
        .success();

    assert!(config_path.exists());
    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[server]"));
    assert!(content.contains("[upstream]"));
}

#[test]
fn test_config_init_no_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("skybridge.toml");

    // Create file first
    std::fs::write(&config_path, "existing content").unwrap();

    // Try to overwrite without --force
    skybridge_cmd()
        .args(["config", "init", "-o", config_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exists"));
}

#[test]
fn test_config_init_force_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("skybridge.toml");

    // Create file first
    std::fs::write(&config_path, "existing content").unwrap();

    // Force overwrite
    skybridge_cmd()
        .args([
            "config",
            "init",
            "-o",
            config_path.to_str().unwrap(),
            "--force",
        ])
        .assert()
        .success();

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[server]"));
}

#[test]
fn test_invalid_command() {
    skybridge_cmd()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_completions_bash() {
    skybridge_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}

#[test]
fn test_completions_zsh() {
    skybridge_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("compdef"));
}
