//! CLI integration tests
//!
//! End-to-end tests for CLI commands using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Environment variables that would leak real settings into a test run.
const CONFIG_ENV: &[&str] = &[
    "INFRAQUERY_PORT",
    "INFRAQUERY_HOST",
    "INFRAQUERY_LOG_LEVEL",
    "INFRAQUERY_LOG_FORMAT",
    "AZURE_OPENAI_ENDPOINT",
    "AZURE_OPENAI_DEPLOYMENT_NAME",
    "AZURE_OPENAI_API_VERSION",
    "AZURE_OPENAI_API_KEY",
    "AZURE_SUBSCRIPTION_ID",
    "AZURE_TENANT_ID",
    "AZURE_CLIENT_ID",
    "AZURE_CLIENT_SECRET",
    "RESOURCE_GROUPS",
];

/// Get the infraquery binary with a clean configuration environment
fn infraquery_cmd() -> Command {
    let mut cmd = Command::cargo_bin("infraquery").unwrap();
    for var in CONFIG_ENV {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_version_output() {
    infraquery_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("infraquery"));
}

#[test]
fn test_help_shows_all_commands() {
    infraquery_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("ask"))
        .stdout(predicate::str::contains("groups"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_serve_help() {
    infraquery_cmd()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--host"));
}

#[test]
fn test_ask_help() {
    infraquery_cmd()
        .args(["ask", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("<QUESTION>"));
}

#[test]
fn test_ask_without_llm_endpoint_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("infraquery.toml");
    std::fs::write(&config_path, "[azure]\nsubscription_id = \"sub-1\"\n").unwrap();

    infraquery_cmd()
        .args([
            "ask",
            "Is vm-prod-01 running?",
            "-c",
            config_path.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"))
        .stderr(predicate::str::contains("llm.endpoint"));
}

#[test]
fn test_ask_without_client_secret_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("infraquery.toml");
    std::fs::write(
        &config_path,
        r#"
[llm]
endpoint = "http://127.0.0.1:9"
deployment = "gpt-4o"
api_key_env = "INFRAQUERY_CLI_TEST_KEY"

[azure]
subscription_id = "sub-1"
tenant_id = "tenant-1"
client_id = "client-1"
client_secret_env = "INFRAQUERY_CLI_TEST_SECRET"
"#,
    )
    .unwrap();

    infraquery_cmd()
        .env("INFRAQUERY_CLI_TEST_KEY", "key")
        .env_remove("INFRAQUERY_CLI_TEST_SECRET")
        .args(["ask", "hello", "-c", config_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("INFRAQUERY_CLI_TEST_SECRET"));
}

#[test]
fn test_groups_without_subscription_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("missing.toml");

    infraquery_cmd()
        .args(["groups", "-c", config_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("azure.subscription_id"));
}

#[test]
fn test_config_init_creates_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("infraquery.toml");

    infraquery_cmd()
        .args(["config", "init", "-o", config_path.to_str().unwrap()])
        .assert()
        .success();

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[azure]"));
    assert!(content.contains("[llm]"));
}

#[test]
fn test_config_init_no_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("infraquery.toml");
    std::fs::write(&config_path, "existing content").unwrap();

    infraquery_cmd()
        .args(["config", "init", "-o", config_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exists"));

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert_eq!(content, "existing content");
}

#[test]
fn test_config_init_force_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("infraquery.toml");
    std::fs::write(&config_path, "existing content").unwrap();

    infraquery_cmd()
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
    infraquery_cmd()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_completions_bash() {
    infraquery_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}

#[test]
fn test_completions_zsh() {
    infraquery_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("compdef"));
}
