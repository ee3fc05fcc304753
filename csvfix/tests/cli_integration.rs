//! Integration tests for the csvfix CLI

use std::fs;
use std::path::Path;
use std::process::Command;

const HOLDERS: &str = "Name,Owed\nAlice,1.5e3\nBob,200\nCarol,\n";

fn run_csvfix(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_csvfix"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn holders_dir(content: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("holders.csv"), content).unwrap();
    dir
}

#[test]
fn test_cli_help() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, success) = run_csvfix(dir.path(), &["--help"]);

    assert!(success);
    assert!(stdout.contains("csvfix"));
    assert!(stdout.contains("json"));
    assert!(stdout.contains("table"));
    assert!(stdout.contains("schema"));
}

#[test]
fn test_json_output() {
    let dir = holders_dir(HOLDERS);
    let (stdout, stderr, success) = run_csvfix(dir.path(), &["json"]);

    assert!(success, "stderr: {stderr}");
    assert_eq!(
        stdout.trim_end(),
        r#"[{"Name":"Alice","Owed":"1500"},{"Name":"Bob","Owed":"200"},{"Name":"Carol","Owed":null}]"#
    );
}

#[test]
fn test_pretty_json_output() {
    let dir = holders_dir(HOLDERS);
    let (stdout, _, success) = run_csvfix(dir.path(), &["json", "--pretty"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    assert_eq!(parsed[0]["Owed"], "1500");
    assert!(parsed[2]["Owed"].is_null());
}

#[test]
fn test_table_output() {
    let dir = holders_dir(HOLDERS);
    let (stdout, _, success) = run_csvfix(dir.path(), &["table"]);

    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "    Name  Owed");
    assert_eq!(lines[1], "0  Alice  1500");
    assert_eq!(lines[3], "2  Carol   NaN");
}

#[test]
fn test_schema_output() {
    let dir = holders_dir(HOLDERS);
    let (stdout, _, success) = run_csvfix(dir.path(), &["schema"]);

    assert!(success);
    assert!(stdout.contains("Name  text"));
    assert!(stdout.contains("Owed  float  <- rewritten"));
    assert!(!stdout.contains("Name  text  <-"));
    assert!(stdout.contains("3 rows"));
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, stderr, success) = run_csvfix(dir.path(), &["json"]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("holders.csv"));
}

#[test]
fn test_owed_column_not_numeric() {
    let dir = holders_dir("Name,Owed\nAlice,lots\n");
    let (stdout, stderr, success) = run_csvfix(dir.path(), &["json"]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Owed"));
    assert!(stderr.contains("not numeric"));
}

#[test]
fn test_owed_column_absent() {
    let dir = holders_dir("Name,Balance\nAlice,1e3\n");
    let (_, stderr, success) = run_csvfix(dir.path(), &["table"]);

    assert!(!success);
    assert!(stderr.contains("Balance"));
}

#[test]
fn test_malformed_csv() {
    let dir = holders_dir("Name,Owed\nAlice,1,2\n");
    let (stdout, stderr, success) = run_csvfix(dir.path(), &["json"]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Line 2"));
}
