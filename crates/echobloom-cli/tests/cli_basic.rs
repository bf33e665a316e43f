//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with an isolated config directory and
//! verify outputs.

use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(home: &TempDir, args: &[&str], stdin: &str) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_echobloom"))
        .args(args)
        .env("ECHOBLOOM_HOME", home.path())
        .env("ECHOBLOOM_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    let output = child.wait_with_output().expect("Failed to wait for CLI");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// A local address with nothing listening on it.
fn closed_origin() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    format!("http://{}", listener.local_addr().unwrap())
}

#[test]
fn test_prompts_list() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&home, &["prompts"], "");
    assert_eq!(code, 0, "Prompts failed");
    assert!(stdout.contains("Anxiety & Worry"));
    assert!(stdout.contains("Taste x1"));
}

#[test]
fn test_prompts_json() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&home, &["prompts", "--json"], "");
    assert_eq!(code, 0, "Prompts JSON failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["journal"].as_array().unwrap().len(), 5);
    assert_eq!(parsed["grounding"][1]["sense"], "Touch");
    assert_eq!(parsed["activities"][0]["path"], "/api/activities/breathing");
}

#[test]
fn test_config_get_default() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&home, &["config", "get", "api.base_url"], "");
    assert_eq!(code, 0, "Config get failed");
    assert_eq!(stdout.trim(), "http://localhost:8000");
    assert!(home.path().join("config.toml").exists());
}

#[test]
fn test_config_set_then_get() {
    let home = TempDir::new().unwrap();
    let (_, _, code) = run_cli(&home, &["config", "set", "user.id", "user_42"], "");
    assert_eq!(code, 0, "Config set failed");
    let (stdout, _, _) = run_cli(&home, &["config", "get", "user.id"], "");
    assert_eq!(stdout.trim(), "user_42");
}

#[test]
fn test_config_set_unknown_key() {
    let home = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(&home, &["config", "set", "ui.theme", "dark"], "");
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_config_list() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&home, &["config", "list"], "");
    assert_eq!(code, 0, "Config list failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["session"]["success_window_secs"], 3);
}

#[test]
fn test_gratitude_requires_user() {
    let home = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(&home, &["gratitude"], "");
    assert_eq!(code, 1);
    assert!(stderr.contains("no user id"));
}

#[test]
fn test_gratitude_backend_down_is_tolerated() {
    let home = TempDir::new().unwrap();
    run_cli(&home, &["config", "set", "api.base_url", &closed_origin()], "");
    let input = "tea\nwarm\nfriends\nkind\nsun\nbright\nfinished a run\n";
    let (stdout, _, code) = run_cli(&home, &["gratitude", "--user", "user_1"], input);
    assert_eq!(code, 0);
    assert_eq!(stdout.matches("GratitudeEntryAdded").count(), 3);
    assert!(stdout.contains("SaveFailed"));
}

#[test]
fn test_ground_incomplete_input() {
    let home = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(&home, &["ground", "--user", "user_1"], "lamp\nwall\n");
    assert_eq!(code, 1);
    assert!(stderr.contains("2 of 15"));
}

#[test]
fn test_journal_unknown_category() {
    let home = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(
        &home,
        &["journal", "--category", "Dreams", "--user", "user_1"],
        "",
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("Unknown journal category"));
}

#[test]
fn test_completions() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&home, &["completions", "bash"], "");
    assert_eq!(code, 0);
    assert!(stdout.contains("echobloom"));
}
