//! Robot-mode end-to-end tests.

use serde_json::Value;

use crate::common::cli::CliRunner;
use crate::common::init_test_logging;

fn parse_json(text: &str) -> Value {
    serde_json::from_str(text)
        .unwrap_or_else(|_| panic!("Failed to parse JSON:\n{text}"))
}

#[test]
fn robot_quick_start_outputs_json() {
    init_test_logging();
    let cli = CliRunner::new();
    let result = cli.run(&["--robot"]);
    result.assert_success();

    let json = parse_json(result.stdout.trim());
    assert_eq!(json.get("tool").and_then(|v| v.as_str()), Some("flow"));
    assert!(json.get("inspection").is_some());
    assert!(json.get("site_output").is_some());
    assert!(json.get("output_modes").is_some());
}

#[test]
fn robot_pages_outputs_json_array() {
    init_test_logging();
    let cli = CliRunner::new();
    let result = cli.run_robot(&["pages"]);
    result.assert_success();

    let json = parse_json(result.stdout.trim());
    let pages = json.as_array().expect("Expected JSON array for page list");
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].get("slug").and_then(Value::as_str), Some("front"));
    assert_eq!(pages[0].get("route").and_then(Value::as_str), Some("/"));
    assert_eq!(
        pages[0].get("output").and_then(Value::as_str),
        Some("index.html")
    );
    // The render function is not part of the wire shape
    assert!(pages[0].get("body").is_none());
}

#[test]
fn robot_format_flag_outputs_json() {
    init_test_logging();
    let cli = CliRunner::new();
    let result = cli.run(&["version", "--format=json"]);
    result.assert_success();

    let json = parse_json(result.stdout.trim());
    assert!(json.get("version").is_some());
    assert!(json.get("git_sha").is_some());
}

#[test]
fn robot_error_is_json_on_stderr() {
    init_test_logging();
    let cli = CliRunner::new().with_env("RUST_LOG", "off");
    let result = cli.run_robot(&["--config", "/definitely/missing/flow.toml", "config"]);
    result.assert_failure();
    result.assert_exit_code(1);

    // Data channel stays clean in error cases
    assert!(result.stdout.trim().is_empty(), "Expected empty stdout");

    let json = result.stderr_json();
    assert_eq!(json.get("error").and_then(Value::as_bool), Some(true));
    assert!(json
        .get("message")
        .and_then(Value::as_str)
        .is_some_and(|m| m.contains("/definitely/missing/flow.toml")));
    assert_eq!(
        json.get("suggestion").and_then(Value::as_str),
        Some("Run: flow init")
    );
    assert_eq!(json.get("recoverable").and_then(Value::as_bool), Some(true));
}

#[test]
fn robot_assets_reports_remote_and_media() {
    init_test_logging();
    let cli = CliRunner::new().with_env("RUST_LOG", "off");
    // No flow.toml in the temp cwd, so defaults apply
    let dir = tempfile::TempDir::new().expect("temp dir");
    let result = cli
        .with_working_dir(dir.path().to_path_buf())
        .run_robot(&["assets"]);
    result.assert_success();

    let json = result.json();
    let remote = json["remote"].as_array().expect("remote array");
    assert_eq!(remote.len(), 3);
    let kinds: Vec<_> = remote
        .iter()
        .filter_map(|r| r.get("kind").and_then(Value::as_str))
        .collect();
    assert_eq!(kinds, ["stylesheet", "script", "font"]);

    // Empty working directory means every media file is reported missing
    let media = json["media"].as_array().expect("media array");
    assert!(!media.is_empty());
    assert!(media
        .iter()
        .all(|m| m.get("exists").and_then(Value::as_bool) == Some(false)));
}
