//! End-to-end tests for the `kgconfig` binary.
//!
//! Each test runs the compiled binary against the fixtures and asserts on
//! exit status, stdout and stderr.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn kgconfig(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_kgconfig"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stderr.clone())
        .unwrap()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// load failures
// ---------------------------------------------------------------------------

#[test]
fn missing_config_exits_with_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let output = kgconfig(&missing, &["check"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());

    let lines = stderr_lines(&output);
    assert_eq!(lines.len(), 2, "stderr: {lines:?}");
    let prefix = format!("Error loading configuration from {}: ", missing.display());
    assert!(lines[0].starts_with(&prefix), "stderr: {lines:?}");
    assert!(lines[0].len() > prefix.len());
    assert_eq!(
        lines[1],
        format!(
            "Error: Failed to load configuration from {}. Exiting.",
            missing.display()
        )
    );
}

#[test]
fn malformed_config_reports_parse_detail_once() {
    let path = fixture("malformed.toml");

    let output = kgconfig(&path, &["show"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = stderr_lines(&output).join("\n");
    assert!(stderr.contains(&format!(
        "Error loading configuration from {}: TOML parse error",
        path.display()
    )));
    assert!(stderr.contains("Failed to load configuration"));
    assert!(!stderr.contains("WARN"));
    assert_eq!(stderr.matches("Error loading configuration").count(), 1);
}

#[test]
fn empty_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let empty = dir.path().join("empty.toml");
    std::fs::write(&empty, "").unwrap();

    let output = kgconfig(&empty, &["show"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert_eq!(
        stderr_lines(&output),
        vec![format!(
            "Error: Failed to load configuration from {}. Exiting.",
            empty.display()
        )]
    );
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

#[test]
fn show_masks_api_key() {
    let output = kgconfig(&fixture("config.toml"), &["show"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("[REDACTED]"));
    assert!(!text.contains("sk-1234"));
    assert!(text.contains("gemma3"));
}

#[test]
fn show_json_masks_api_key() {
    let output = kgconfig(&fixture("config.toml"), &["show", "--json"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["llm"]["api_key"], "[REDACTED]");
    assert_eq!(json["chunking"]["chunk_size"], 100);
}

// ---------------------------------------------------------------------------
// get
// ---------------------------------------------------------------------------

#[test]
fn get_prints_value() {
    let output = kgconfig(&fixture("config.toml"), &["get", "llm.model"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "gemma3\n");
}

#[test]
fn get_missing_key_fails() {
    let output = kgconfig(&fixture("config.toml"), &["get", "llm.nope"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert_eq!(stderr_lines(&output), vec!["Error: key not found: llm.nope"]);
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_prints_summary() {
    let output = kgconfig(&fixture("config.toml"), &["check"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("configuration is valid"));
    assert!(text.contains("gemma3"));
    assert!(text.contains("100 words, 20 overlap"));
}

#[test]
fn check_json_applies_overrides_and_omits_api_key() {
    let output = kgconfig(
        &fixture("config.toml"),
        &["check", "--json", "--no-inference"],
    );
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["llm"]["model"], "gemma3");
    assert!(json["llm"].get("api_key").is_none());
    assert_eq!(json["standardization"]["enabled"], true);
    assert_eq!(json["inference"]["enabled"], false);
}

#[test]
fn version_needs_no_config() {
    let dir = tempfile::tempdir().unwrap();
    let output = kgconfig(&dir.path().join("absent.toml"), &["version"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}
