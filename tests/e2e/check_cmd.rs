//! Validation end-to-end tests.

use crate::common::cli::CliRunner;
use crate::common::fixtures::SiteFixture;
use crate::common::init_test_logging;

fn runner_in(site: &SiteFixture) -> CliRunner {
    CliRunner::new()
        .with_env("RUST_LOG", "off")
        .with_working_dir(site.root().to_path_buf())
}

#[test]
fn complete_site_passes_checks() {
    init_test_logging();
    let site = SiteFixture::complete();
    let result = runner_in(&site).run(&["check"]);
    result.assert_success();
    result.assert_stdout_contains("All checks passed");
    result.assert_stdout_contains("0 error(s), 0 warning(s)");
}

#[test]
fn missing_media_warns_without_failing() {
    init_test_logging();
    // Scaffold writes the stylesheet stub, so only the media files are absent
    let site = SiteFixture::without_media();
    let result = runner_in(&site).run(&["check"]);
    result.assert_success();
    result.assert_stdout_contains("[WARN]");
    result.assert_stdout_contains("missing local file");
    result.assert_stdout_not_contains("All checks passed");
}

#[test]
fn strict_turns_missing_media_into_failure() {
    init_test_logging();
    let site = SiteFixture::without_media();
    let result = runner_in(&site).run_robot(&["check", "--strict"]);
    result.assert_failure();
    result.assert_exit_code(1);

    // The full report still lands on stdout
    let report = result.json();
    assert_eq!(report["valid"], false);
    assert_eq!(report["strict"], true);
    assert!(report["summary"]["error_count"]
        .as_u64()
        .is_some_and(|n| n > 0));

    // The failure itself is a separate error payload on stderr
    let error = result.stderr_json();
    assert_eq!(error["error"], true);
    assert!(error["message"]
        .as_str()
        .is_some_and(|m| m.contains("error(s)")));
    assert_eq!(error["recoverable"], true);
}

#[test]
fn corrupt_raster_fails_even_without_strict() {
    init_test_logging();
    let site = SiteFixture::complete();
    site.corrupt_media(flow::assets::FAVICON);

    let result = runner_in(&site).run(&["check"]);
    result.assert_failure();
    result.assert_stdout_contains("[ERR]");
    result.assert_stdout_contains("failed to decode");
}

#[test]
fn robot_report_lists_issue_subjects() {
    init_test_logging();
    let site = SiteFixture::complete();
    site.remove_media(flow::assets::LOGO_WHITE);

    let result = runner_in(&site).run_robot(&["check"]);
    // Missing media is a warning, so the run still succeeds
    result.assert_success();

    let report = result.json();
    assert_eq!(report["valid"], true);
    let issues = report["issues"].as_array().expect("issues array");
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0]["subject"], flow::assets::LOGO_WHITE);
    assert_eq!(issues[0]["severity"], "warning");
    assert!(issues[0]["suggestion"].is_string());
}
