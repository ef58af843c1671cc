//! Command-line tests: drive the `turtle` binary over stdin.

use std::io::Write as _;
use std::process::{Command, Output, Stdio};

fn turtle(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_turtle"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn turtle");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for turtle")
}

#[test]
fn run_prints_segments() {
    let out = turtle(&["run"], "DOWN. FORW 1. LEFT 90. FORW 1.");
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "#0000FF 0.0000 0.0000 1.0000 0.0000\n#0000FF 1.0000 0.0000 1.0000 1.0000\n"
    );
}

#[test]
fn run_syntax_error_reports_line() {
    let out = turtle(&["run"], "DOWN.\nFORW 1.\nLEFT 90\nFORW 1.");
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "Syntaxfel på rad 4\n");
    assert!(String::from_utf8_lossy(&out.stderr).starts_with("<stdin>: "));
}

#[test]
fn run_prints_nothing_on_error() {
    let out = turtle(&["run"], "DOWN. FORW 1. FORW 0.");
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "Syntaxfel på rad 1\n");
}

#[test]
fn fmt_prints_canonical_source() {
    let out = turtle(&["fmt"], "down . rep 2 \"forw 1.\"");
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "DOWN.\nREP 2 FORW 1.\n");
}

#[test]
fn check_missing_file_fails() {
    let out = turtle(&["check", "does-not-exist.turtle"], "");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("does-not-exist.turtle"));
}
