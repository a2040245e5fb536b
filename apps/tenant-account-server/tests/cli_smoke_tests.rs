#![allow(clippy::unwrap_used, clippy::expect_used)]

//! CLI smoke tests for the tenant-account-server binary.

use std::process::{Command, Output, Stdio};
use std::time::Duration;

use tempfile::TempDir;
use tokio::time::timeout;

fn run_server(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tenant-account-server"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute tenant-account-server")
}

fn write_config(dir: &TempDir, contents: &str) -> String {
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_cli_help_command() {
    let output = run_server(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Usage:"),
        "Should contain usage information"
    );
    assert!(stdout.contains("run"), "Should contain 'run' subcommand");
    assert!(
        stdout.contains("check"),
        "Should contain 'check' subcommand"
    );
    assert!(stdout.contains("--config"), "Should mention config option");
    assert!(stdout.contains("--mock"), "Should mention mock option");
}

#[test]
fn test_cli_version_command() {
    let output = run_server(&["--version"]);

    assert!(output.status.success(), "Version command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("tenant-account-server"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_invalid_command() {
    let output = run_server(&["invalid-command"]);

    assert!(!output.status.success(), "Invalid command should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("unrecognized subcommand") || stderr.contains("error")
    );
}

#[test]
fn test_cli_missing_config_file() {
    let output = run_server(&["--config", "/nonexistent/config.yaml", "check"]);

    assert!(!output.status.success(), "Missing config should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("config file does not exist"),
        "Should report the missing file, got: {stderr}"
    );
}

#[test]
fn test_cli_invalid_yaml_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "server:\n  bind_addr: [unterminated\n");

    let output = run_server(&["--config", &path, "check"]);

    assert!(!output.status.success(), "Invalid YAML should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load configuration"));
}

#[test]
fn test_cli_check_valid_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
server:
  bind_addr: "127.0.0.1:18087"
logging:
  level: "warn"
modules:
  tenant_account:
    default_api_key_name: "Primary"
"#,
    );

    let output = run_server(&["--config", &path, "check"]);

    assert!(
        output.status.success(),
        "Check should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration is valid"));
    assert!(stdout.contains("Primary"));
}

#[test]
fn test_cli_print_config_applies_overrides() {
    let output = run_server(&["--print-config", "--port", "19999", "--mock", "-vv"]);

    assert!(output.status.success(), "Print config should succeed");
    let config: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(config["server"]["bind_addr"], "127.0.0.1:19999");
    assert_eq!(config["database"]["dsn"], "sqlite::memory:");
    assert_eq!(config["logging"]["level"], "debug");
}

#[test]
fn test_cli_rejects_unknown_config_key() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "server:\n  listen: \"0.0.0.0:1\"\n");

    let output = run_server(&["--config", &path, "check"]);

    assert!(!output.status.success(), "Unknown keys should fail");
}

#[tokio::test]
async fn test_cli_mock_server_keeps_running() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "server:\n  bind_addr: \"127.0.0.1:0\"\n");

    let mut cmd = tokio::process::Command::new(env!("CARGO_BIN_EXE_tenant-account-server"));
    cmd.args(["--config", &path, "--mock", "run"])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    let child = cmd.spawn().unwrap();

    // A healthy server blocks until signalled, so the wait has to time out.
    let res = timeout(Duration::from_secs(3), child.wait_with_output()).await;
    assert!(res.is_err(), "Server exited early: {res:?}");
}
