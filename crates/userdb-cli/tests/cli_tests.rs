//! CLI integration tests
//!
//! Run the built `userdb` binary against a scratch database.

use rusqlite::Connection;
use serde_json::Value;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn userdb(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_userdb"));
    cmd.current_dir(dir.path())
        .env("GOOGLE_API_KEY", "test-key")
        .env_remove("USERDB_DB_PATH")
        .env_remove("USERDB_LOG_FORMAT")
        .env_remove("USERDB_MODEL")
        .env("RUST_LOG", "off");
    cmd
}

fn db_path(dir: &TempDir) -> PathBuf {
    dir.path().join("users.db")
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn test_missing_api_key_fails_before_opening_store() {
    let dir = TempDir::new().unwrap();

    let output = userdb(&dir)
        .env_remove("GOOGLE_API_KEY")
        .args(["call", "list_users"])
        .output()
        .expect("Failed to execute CLI");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("GOOGLE_API_KEY not found in environment variables."),
        "stderr was: {}",
        stderr
    );
    assert!(!db_path(&dir).exists(), "no database should be created");
}

#[test]
fn test_call_create_then_duplicate() {
    let dir = TempDir::new().unwrap();
    let args = r#"{"name": "Alice Smith", "email": "alice@example.com"}"#;

    let created = userdb(&dir)
        .args(["call", "create_user", "--args", args])
        .output()
        .unwrap();
    assert_eq!(
        stdout_json(&created)["user"],
        serde_json::json!({"id": 1, "name": "Alice Smith", "email": "alice@example.com"})
    );

    let duplicate = userdb(&dir)
        .args(["call", "create_user", "--args", args])
        .output()
        .unwrap();
    let env = stdout_json(&duplicate);
    assert_eq!(env["status"], "Error");
    assert_eq!(env["code"], "ERR_DUPLICATE_EMAIL");

    let conn = Connection::open(db_path(&dir)).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_db_flag_selects_file() {
    let dir = TempDir::new().unwrap();
    let custom = dir.path().join("nested").join("custom.db");

    let output = userdb(&dir)
        .args(["--db", custom.to_str().unwrap(), "seed"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "Database populated with 5 sample users."
    );
    assert!(custom.exists());
    assert!(!db_path(&dir).exists());
}

#[test]
fn test_seed_twice_skips() {
    let dir = TempDir::new().unwrap();
    userdb(&dir).arg("seed").output().unwrap();

    let output = userdb(&dir).arg("seed").output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "Database already contains 5 users. No sample data added."
    );
}

#[test]
fn test_invalid_args_json_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let output = userdb(&dir)
        .args(["call", "read_user", "--args", "{user_id: 1"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_tools_and_manifest() {
    let dir = TempDir::new().unwrap();

    let tools = stdout_json(&userdb(&dir).arg("tools").output().unwrap());
    assert_eq!(tools.as_array().unwrap().len(), 7);

    let manifest = stdout_json(
        &userdb(&dir)
            .arg("manifest")
            .env("USERDB_MODEL", "gemini-test")
            .output()
            .unwrap(),
    );
    assert_eq!(manifest["name"], "db_agent");
    assert_eq!(manifest["model"], "gemini-test");
    assert!(!manifest.to_string().contains("test-key"));
}

#[test]
fn test_serve_answers_each_line_in_order() {
    let dir = TempDir::new().unwrap();
    let mut child = userdb(&dir)
        .arg("serve")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    {
        let stdin = child.stdin.as_mut().unwrap();
        writeln!(stdin, r#"{{"tool": "populate_database"}}"#).unwrap();
        writeln!(stdin).unwrap();
        writeln!(stdin, r#"{{"tool": "read_user", "args": {{"user_id": 2}}}}"#).unwrap();
        writeln!(stdin, r#"{{"tool": "delete_user", "args": {{"user_id": 99}}}}"#).unwrap();
    }
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let lines: Vec<Value> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["created_count"], 5);
    assert_eq!(lines[1]["user"]["name"], "Bob Johnson");
    assert_eq!(lines[2]["status"], "Not Found");
}
