// tests/cli.rs
//! Integration tests for the typefill binary.
//!
//! These tests shell out to the compiled binary and verify end-to-end behavior.

use std::fs;
use std::process::{Command, Output};

fn typefill(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_typefill"))
        .args(args)
        .env_remove("TYPEFILL_LOG")
        .output()
        .expect("failed to run typefill")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn default_run_prints_demonstration() {
    let output = typefill(&[]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Example {"), "got: {out}");
    assert_eq!(out.matches("Generated: ").count(), 5, "got: {out}");
    assert!(out.contains("address.owner: null (cycle broken)"), "got: {out}");
    assert!(out.contains("owner.address: null (cycle broken)"), "got: {out}");
}

#[test]
fn named_types_are_generated() {
    let output = typefill(&["Cart", "fixtures.Product", "--count", "3"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert_eq!(out.lines().filter(|l| l.starts_with("Cart: ")).count(), 3);
    assert_eq!(out.lines().filter(|l| l.starts_with("Product: ")).count(), 3);
}

#[test]
fn json_output_is_one_document_per_line() {
    let output = typefill(&["Shape", "--count", "4", "--json", "--seed", "9"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert_eq!(out.lines().count(), 4);
    for line in out.lines() {
        let doc: serde_json::Value = serde_json::from_str(line).unwrap();
        let ty = doc["$type"].as_str().unwrap();
        assert!(ty == "Triangle" || ty == "Rectangle", "unexpected type {ty}");
    }
}

#[test]
fn same_seed_same_output() {
    let args = ["Person", "Cart", "--seed", "42", "--count", "2"];
    let first = typefill(&args);
    let second = typefill(&args);
    assert!(first.status.success());
    assert_eq!(stdout(&first), stdout(&second));
}

#[test]
fn unknown_type_exits_with_usage_code() {
    let output = typefill(&["Product", "Spaceship"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("unknown type 'Spaceship'"));
}

#[test]
fn config_file_sets_depth() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("typefill.toml");
    fs::write(&path, "max_depth = 0\nseed = 1\n").unwrap();

    let output = typefill(&["Rectangle", "--json", "--config", path.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let doc: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert!(doc["width"].is_null());
    assert!(doc["height"].is_null());
}

#[test]
fn command_line_depth_overrides_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("typefill.toml");
    fs::write(&path, "max_depth = 0\n").unwrap();

    let output = typefill(&[
        "Rectangle",
        "--json",
        "--max-depth",
        "5",
        "--config",
        path.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let doc: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert!(doc["width"].is_number());
}

#[test]
fn malformed_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "max_depth = \"deep\"\n").unwrap();

    let output = typefill(&["Product", "--config", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("T1002"), "stderr: {}", stderr(&output));
}

#[test]
fn constructor_failure_is_reported() {
    let output = typefill(&["Triangle", "--max-depth", "0", "--color", "never"]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("T0001"), "stderr: {err}");
    assert!(err.contains("Triangle"), "stderr: {err}");
}
