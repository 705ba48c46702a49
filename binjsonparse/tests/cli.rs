//! End-to-end tests for the `jsonparse` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn run(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_jsonparse"))
        .args(args)
        .env_remove("JSONPARSE_LOG")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run jsonparse")
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_no_files_exits_zero() {
    let output = run(&[]);
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_valid_file_prints_value() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "valid.json", r#"{"key": "value", "n": [1, 2.5]}"#);

    let output = run(&[path.as_path()]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains(&format!("Parsed: {}", path.display())));
    assert!(out.contains(r#"{"key": "value", "n": [1, 2.5]}"#));
}

#[test]
fn test_invalid_file_exits_one() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "invalid.json", "{");

    let output = run(&[path.as_path()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("JSON missing closing object"));
}

#[test]
fn test_first_failure_stops_processing() {
    let dir = TempDir::new().unwrap();
    let good = write(&dir, "a.json", "[]");
    let bad = write(&dir, "b.json", "[1,]");
    let later = write(&dir, "c.json", "{}");

    let output = run(&[good.as_path(), bad.as_path(), later.as_path()]);
    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains(&format!("Parsed: {}", good.display())));
    assert!(!out.contains(&format!("Parsed: {}", later.display())));
    assert!(stderr(&output).contains("JSON missing value"));
}

#[test]
fn test_missing_paths_are_skipped() {
    let dir = TempDir::new().unwrap();
    let valid = write(&dir, "valid.json", "[true]");
    let missing = dir.path().join("missing.json");

    let output = run(&[missing.as_path(), dir.path(), valid.as_path()]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("[true]"));
}

#[test]
fn test_deeply_nested_file_prints_value() {
    let dir = TempDir::new().unwrap();
    let depth = 200_000;
    let document = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    let path = write(&dir, "deep.json", &document);

    let output = run(&[path.as_path()]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains(&document));
}

#[test]
fn test_empty_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "empty.json", "");

    let output = run(&[path.as_path()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("No content provided"));
}

#[test]
fn test_quiet_and_options() {
    let dir = TempDir::new().unwrap();
    let nested = write(&dir, "nested.json", "[[[1]]]");

    let output = Command::new(env!("CARGO_BIN_EXE_jsonparse"))
        .arg("--quiet")
        .arg(&nested)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());

    let output = Command::new(env!("CARGO_BIN_EXE_jsonparse"))
        .args(["--max-depth", "2"])
        .arg(&nested)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("JSON nesting deeper than 2 levels"));
}

#[test]
fn test_letter_escapes_flag() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "escapes.json", r#"["a\nb"]"#);

    let output = Command::new(env!("CARGO_BIN_EXE_jsonparse"))
        .arg("--letter-escapes")
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).contains(r#"["anb"]"#));
}
