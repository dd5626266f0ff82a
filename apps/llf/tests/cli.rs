//! Runs the built `llf` binary against scratch directories.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn llf(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_llf"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn llf")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn fixture() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("ten"), vec![0u8; 10]).unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested").join("five_hundred"), vec![0u8; 500]).unwrap();
    fs::write(dir.path().join("three"), vec![0u8; 3]).unwrap();
    dir
}

#[test]
fn prints_canonical_path_and_size() {
    let dir = fixture();
    let out = llf(&["--bytes", dir.path().to_str().unwrap()], dir.path());
    assert!(out.status.success());

    let expected = fs::canonicalize(dir.path().join("nested").join("five_hundred")).unwrap();
    assert_eq!(stdout(&out), format!("{} 500\n", expected.display()));
}

#[test]
fn defaults_to_current_directory() {
    let dir = fixture();
    let out = llf(&["-b"], &dir.path().join("nested"));
    assert!(out.status.success());
    assert!(stdout(&out).trim_end().ends_with("five_hundred 500"));
}

#[test]
fn human_readable_by_default() {
    let dir = fixture();
    let out = llf(&[], dir.path());
    assert!(out.status.success());
    assert!(stdout(&out).trim_end().ends_with("five_hundred 500 B"));
}

#[test]
fn empty_directory_prints_empty_path_and_zero() {
    let dir = tempfile::tempdir().unwrap();
    let out = llf(&["-b", "."], dir.path());
    assert!(out.status.success());
    assert_eq!(stdout(&out), " 0\n");
}

#[test]
fn only_empty_files_prints_empty_path_and_zero() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("empty"), b"").unwrap();
    let out = llf(&["-b"], dir.path());
    assert!(out.status.success());
    assert_eq!(stdout(&out), " 0\n");
}

#[test]
fn two_arguments_exit_with_usage() {
    let dir = fixture();
    let out = llf(&["one", "two"], dir.path());
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage"));
}

#[test]
fn zero_top_is_a_usage_error() {
    let dir = fixture();
    let out = llf(&["-n", "0"], dir.path());
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn missing_root_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let out = llf(&["does-not-exist"], dir.path());
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).starts_with("llf: "));
}

#[test]
fn top_lists_several_files() {
    let dir = fixture();
    let out = llf(&["-b", "-n", "2"], dir.path());
    assert!(out.status.success());
    let text = stdout(&out);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("five_hundred 500"));
    assert!(lines[1].ends_with("ten 10"));
}

#[test]
fn json_output_parses() {
    let dir = fixture();
    let out = llf(&["--format", "json"], dir.path());
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["largest"][0]["size"], 500);
    assert_eq!(value["file_count"], 3);
}

#[test]
fn help_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let out = llf(&["--help"], dir.path());
    assert!(out.status.success());
    assert!(stdout(&out).contains("current directory is used"));
}
