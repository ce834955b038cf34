#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn gscloud() -> Command {
    let mut cmd = Command::cargo_bin("gscloud").unwrap();
    for var in [
        "GRIDSCALE_ACCOUNT",
        "GRIDSCALE_UUID",
        "GRIDSCALE_TOKEN",
        "GRIDSCALE_URL",
        "GSCLOUD_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Top-level help lists the command tree
#[test]
fn test_cli_help() {
    gscloud()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("gridscale"))
        .stdout(predicate::str::contains("storage"))
        .stdout(predicate::str::contains("make-config"))
        .stdout(predicate::str::contains("--account"));
}

#[test]
fn test_storage_set_help() {
    gscloud()
        .args(["storage", "set", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--capacity"))
        .stdout(predicate::str::contains("--force"));
}

#[test]
fn test_version_without_config() {
    let temp_dir = tempdir().unwrap();
    let missing = temp_dir.path().join("absent.yaml");

    gscloud()
        .arg("--config")
        .arg(&missing)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("gscloud "));
}

#[test]
fn test_make_config_creates_file_and_refuses_overwrite() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("gscloud").join("config.yaml");

    gscloud()
        .arg("--config")
        .arg(&path)
        .arg("make-config")
        .assert()
        .success();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("accounts"));
    assert!(contents.contains("userId"));

    gscloud()
        .arg("--config")
        .arg(&path)
        .arg("make-config")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_version_with_directory_as_config() {
    let temp_dir = tempdir().unwrap();

    gscloud()
        .arg("--config")
        .arg(temp_dir.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("gscloud "));
}

#[test]
fn test_completion_prints_script() {
    gscloud()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gscloud"));
}

#[test]
fn test_manpage_writes_pages() {
    let temp_dir = tempdir().unwrap();

    gscloud()
        .arg("manpage")
        .arg(temp_dir.path())
        .assert()
        .success();

    assert!(temp_dir.path().join("gscloud-storage-rm.txt").is_file());
}

#[test]
fn test_storage_with_missing_config_fails() {
    let temp_dir = tempdir().unwrap();
    let missing = temp_dir.path().join("absent.yaml");

    gscloud()
        .arg("--config")
        .arg(&missing)
        .args(["storage", "ls"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration file not found"))
        .stderr(predicate::str::contains("make-config"));
}

#[test]
fn test_malformed_config_is_fatal_for_exempt_commands() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("config.yaml");
    fs::write(&path, "accounts: [ {name: ").unwrap();

    gscloud()
        .arg("--config")
        .arg(&path)
        .arg("version")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("could not be parsed"));
}

#[test]
fn test_unknown_account_exits_with_error() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("config.yaml");
    fs::write(&path, "accounts:\n  - name: default\n    userId: u\n    token: t\n").unwrap();

    gscloud()
        .arg("--config")
        .arg(&path)
        .args(["--account", "production", "storage", "ls"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Account 'production' not found"));
}

#[test]
fn test_account_from_environment() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("config.yaml");
    fs::write(&path, "accounts:\n  - name: default\n    userId: u\n    token: t\n").unwrap();

    gscloud()
        .arg("--config")
        .arg(&path)
        .env("GRIDSCALE_ACCOUNT", "staging")
        .args(["storage", "ls"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Account 'staging' not found"));
}

#[test]
fn test_zero_capacity_is_rejected() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("config.yaml");
    fs::write(
        &path,
        "accounts:\n  - name: default\n    userId: u\n    token: t\n    url: http://127.0.0.1:9\n",
    )
    .unwrap();

    gscloud()
        .arg("--config")
        .arg(&path)
        .args(["storage", "set", "--capacity", "0", "some-id"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("capacity"));
}

#[test]
fn test_arity_errors_are_usage_errors() {
    gscloud().args(["storage", "rm"]).assert().code(2);
    gscloud().args(["storage", "rm", "a", "b"]).assert().code(2);
    gscloud().args(["storage", "ls", "extra"]).assert().code(2);
    gscloud().args(["storage", "frobnicate"]).assert().code(2);
}
