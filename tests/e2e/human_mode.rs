//! Human-mode end-to-end tests.

use crate::common::assertions::{assert_contains_all, assert_no_ansi};
use crate::common::cli::CliRunner;
use crate::common::init_test_logging;

#[test]
fn human_version_is_labeled_and_not_json() {
    init_test_logging();
    let cli = CliRunner::new().with_env("RUST_LOG", "off");
    let result = cli.run(&["version"]);
    result.assert_success();

    let stdout = result.stdout.trim();
    assert!(
        serde_json::from_str::<serde_json::Value>(stdout).is_err(),
        "Human mode output should not be JSON"
    );
    assert_contains_all(stdout, &["flow", "Git SHA", "Built"]);
}

#[test]
fn no_color_disables_ansi() {
    init_test_logging();
    let cli = CliRunner::new()
        .with_env("RUST_LOG", "off")
        .with_env("NO_COLOR", "1");
    let result = cli.run(&["version"]);
    result.assert_success();

    assert_no_ansi(&result.stdout);
}

#[test]
fn piped_output_has_no_ansi() {
    init_test_logging();
    let cli = CliRunner::new().with_env("RUST_LOG", "off");
    // The runner pipes stdout, so the binary must detect the non-TTY itself
    let result = cli.run(&["pages"]);
    result.assert_success();

    assert_no_ansi(&result.stdout);
}

#[test]
fn bare_invocation_prints_quick_start() {
    init_test_logging();
    let cli = CliRunner::new().with_env("RUST_LOG", "off");
    let result = cli.run(&[]);
    result.assert_success();

    assert_contains_all(
        &result.stdout,
        &["QUICK START", "ROBOT MODE", "flow init", "flow --help"],
    );
}

#[test]
fn human_pages_lists_front_page() {
    init_test_logging();
    let cli = CliRunner::new().with_env("RUST_LOG", "off");
    let result = cli.run(&["pages"]);
    result.assert_success();

    assert_contains_all(&result.stdout, &["Pages:", "front", "/", "index.html"]);
}
