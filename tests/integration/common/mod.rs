#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

pub fn lang_cmp() -> Command {
    Command::new(env!("CARGO_BIN_EXE_lang-cmp"))
}

/// A scratch directory with a `.git` marker, so manifest discovery never
/// walks past it.
pub fn scratch_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    dir
}

pub fn run_in(dir: &Path, args: &[&str]) -> Output {
    lang_cmp().current_dir(dir).args(args).output().unwrap()
}

pub fn run_stdout(dir: &Path, args: &[&str]) -> String {
    let output = run_in(dir, args);
    assert!(
        output.status.success(),
        "lang-cmp {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn run_should_fail_with(dir: &Path, args: &[&str], expected_msg: &str) {
    let output = run_in(dir, args);
    assert!(!output.status.success(), "lang-cmp {:?} should have failed", args);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(expected_msg),
        "Expected error containing '{}', got: {}",
        expected_msg,
        stderr
    );
}
