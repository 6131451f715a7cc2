//! Robot mode JSON output implementation.

use serde::Serialize;
use tracing::{debug, instrument, trace};

use crate::assets::AssetsReport;
use crate::check::CheckReport;
use crate::config::Scaffold;
use crate::error::SiteError;
use crate::export::ExportSummary;
use crate::markup::Page;

use super::{ConfigView, Output, RobotFormat};

/// JSON output implementation for AI agents and scripting.
pub struct RobotOutput {
    format: RobotFormat,
}

impl RobotOutput {
    #[instrument]
    #[must_use]
    pub fn new(format: RobotFormat) -> Self {
        debug!(?format, "Creating RobotOutput");
        Self { format }
    }

    /// Output any serializable data as JSON to stdout.
    #[instrument(skip(self, data), fields(format = ?self.format))]
    fn output_json<T: Serialize + ?Sized>(&self, data: &T) {
        let json = match self.format {
            RobotFormat::Json => {
                trace!("Serializing as pretty JSON");
                serde_json::to_string_pretty(data).expect("serialization failed")
            }
            RobotFormat::JsonCompact => {
                trace!("Serializing as compact JSON");
                serde_json::to_string(data).expect("serialization failed")
            }
        };
        trace!(json_len = json.len(), "JSON serialized");
        println!("{json}");
    }

    /// Output pretty JSON to stderr (errors never share stdout with data).
    #[instrument(skip(self, data))]
    fn output_json_pretty_stderr<T: Serialize>(&self, data: &T) {
        let json = serde_json::to_string_pretty(data).expect("serialization failed");
        trace!(json_len = json.len(), "JSON error serialized");
        eprintln!("{json}");
    }
}

impl Output for RobotOutput {
    #[instrument(skip(self))]
    fn success(&self, message: &str) {
        debug!(message, "Robot: success");
        self.output_json(&serde_json::json!({
            "success": true,
            "message": message
        }));
    }

    #[instrument(skip(self))]
    fn error(&self, error: &SiteError) {
        debug!(error = %error, "Robot: error");
        self.output_json_pretty_stderr(&serde_json::json!({
            "error": true,
            "message": error.to_string(),
            "suggestion": error.suggestion(),
            "recoverable": error.is_user_recoverable(),
        }));
    }

    #[instrument(skip(self))]
    fn warning(&self, message: &str) {
        debug!(message, "Robot: warning");
        self.output_json(&serde_json::json!({
            "warning": true,
            "message": message
        }));
    }

    #[instrument(skip(self))]
    fn info(&self, message: &str) {
        debug!(message, "Robot: info");
        self.output_json(&serde_json::json!({
            "info": true,
            "message": message
        }));
    }

    #[instrument(skip(self, pages), fields(count = pages.len()))]
    fn pages(&self, pages: &[Page]) {
        debug!("Robot: pages");
        self.output_json(pages);
    }

    #[instrument(skip(self, report), fields(media_count = report.media.len()))]
    fn assets(&self, report: &AssetsReport) {
        debug!("Robot: assets");
        self.output_json(report);
    }

    #[instrument(skip(self, report), fields(valid = report.valid, errors = report.summary.error_count))]
    fn check_report(&self, report: &CheckReport) {
        debug!("Robot: check_report");
        self.output_json(report);
    }

    #[instrument(skip(self, summary), fields(pages = summary.pages))]
    fn export_summary(&self, summary: &ExportSummary) {
        debug!("Robot: export_summary");
        self.output_json(&serde_json::json!({
            "ok": true,
            "out_dir": summary.out_dir,
            "pages": summary.pages,
            "assets_copied": summary.assets_copied,
            "bytes_written": summary.bytes_written,
            "manifest": summary.manifest_path,
        }));
    }

    #[instrument(skip(self, scaffold))]
    fn scaffolded(&self, scaffold: &Scaffold) {
        debug!("Robot: scaffolded");
        self.output_json(&serde_json::json!({
            "initialized": true,
            "config": scaffold.config_path.display().to_string(),
            "stylesheet": scaffold.stylesheet_path.display().to_string(),
            "assets_dir": scaffold.assets_dir.display().to_string(),
        }));
    }

    #[instrument(skip(self, view), fields(source = view.source))]
    fn config_view(&self, view: &ConfigView) {
        debug!("Robot: config_view");
        self.output_json(view);
    }

    #[instrument(skip(self))]
    fn version_info(&self, version: &str, git_sha: Option<&str>, build_time: Option<&str>) {
        debug!(version, ?git_sha, ?build_time, "Robot: version_info");
        self.output_json(&serde_json::json!({
            "version": version,
            "git_sha": git_sha,
            "git_dirty": option_env!("VERGEN_GIT_DIRTY").map(|dirty| dirty == "true"),
            "build_time": build_time,
            "rustc_version": option_env!("VERGEN_RUSTC_SEMVER"),
            "target": option_env!("VERGEN_CARGO_TARGET_TRIPLE"),
        }));
    }

    #[instrument(skip(self))]
    fn rule(&self, _title: Option<&str>) {
        trace!("Robot: rule (no-op)");
    }

    #[instrument(skip(self))]
    fn newline(&self) {
        trace!("Robot: newline (no-op)");
    }
}
