//! CLI tests for the `argot explain` subcommand.

use std::process::Command;

use assert_cmd::cargo;

fn argot_cmd() -> Command {
    Command::new(cargo::cargo_bin!("argot"))
}

#[test]
fn explain_known_code_json_returns_explanation() {
    let output = argot_cmd()
        .args(["--json", "explain", "ARG0101"])
        .output()
        .expect("run explain command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(json["id"], "ARG0101");
    assert!(json["explanation"].is_string());
}

#[test]
fn explain_unknown_code_json_returns_null_explanation() {
    let output = argot_cmd()
        .args(["-j", "explain", "ARG9999"])
        .output()
        .expect("run explain command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(json["id"], "ARG9999");
    assert!(json["explanation"].is_null());
}

#[test]
fn explain_pretty_shows_human_readable_text() {
    let output = argot_cmd()
        .args(["explain", "ARG0101"])
        .output()
        .expect("run explain command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.starts_with("ARG0101:"),
        "unexpected output: {stdout}"
    );
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    let output = argot_cmd().output().expect("run bare command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage:"), "unexpected stderr: {stderr}");
}

#[test]
fn misspelled_subcommand_is_a_usage_error_with_a_hint() {
    let output = argot_cmd()
        .args(["explian", "ARG0101"])
        .output()
        .expect("run misspelled command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("did you mean \"explain\"?"),
        "unexpected stderr: {stderr}"
    );
}
