//! Output mode abstraction for robot and human output.

use serde::Serialize;

use crate::assets::AssetsReport;
use crate::check::CheckReport;
use crate::cli::Cli;
use crate::config::{ConfigSource, Scaffold, SiteConfig};
use crate::error::SiteError;
use crate::export::ExportSummary;
use crate::markup::Page;

pub mod human;
pub mod robot;

pub use human::HumanOutput;
pub use robot::RobotOutput;

// === Configuration View ===

/// Resolved configuration plus where it came from, as shown by `flow config`.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigView {
    /// "explicit", "discovered", or "defaults"
    pub source: &'static str,
    /// Config file path, when one was read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// The effective configuration
    pub config: SiteConfig,
}

impl ConfigView {
    #[must_use]
    pub fn new(config: &SiteConfig, source: &ConfigSource) -> Self {
        let label = match source {
            ConfigSource::Explicit(_) => "explicit",
            ConfigSource::Discovered(_) => "discovered",
            ConfigSource::Defaults => "defaults",
        };
        Self {
            source: label,
            path: source.path().map(|p| p.display().to_string()),
            config: config.clone(),
        }
    }
}

/// JSON formatting options for robot mode.
#[derive(Debug, Clone, Copy)]
pub enum RobotFormat {
    /// Pretty-printed JSON (default for --robot).
    Json,
    /// Single-line JSON (--format=json-compact).
    JsonCompact,
}

/// Determines how command output is rendered.
#[derive(Debug, Clone, Copy)]
pub enum OutputMode {
    /// JSON output for AI agents and scripting.
    Robot(RobotFormat),
    /// Styled terminal output for human users.
    Human,
}

impl OutputMode {
    /// Create OutputMode from CLI arguments.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.use_json() {
            let format = if cli.use_compact_json() {
                RobotFormat::JsonCompact
            } else {
                RobotFormat::Json
            };
            Self::Robot(format)
        } else {
            Self::Human
        }
    }

    /// Returns true if output should be JSON.
    #[must_use]
    pub const fn is_robot(&self) -> bool {
        matches!(self, Self::Robot(_))
    }

    /// Convert into the appropriate Output implementation.
    #[must_use]
    pub fn into_output(self) -> Box<dyn Output> {
        match self {
            Self::Robot(format) => Box::new(RobotOutput::new(format)),
            Self::Human => Box::new(HumanOutput::new()),
        }
    }
}

/// Trait for all output operations.
///
/// Commands call these methods without knowing the output mode.
pub trait Output {
    // Basic messages
    fn success(&self, message: &str);
    fn error(&self, error: &SiteError);
    fn warning(&self, message: &str);
    fn info(&self, message: &str);

    // Site inventory
    fn pages(&self, pages: &[Page]);
    fn assets(&self, report: &AssetsReport);

    // Command reports
    fn check_report(&self, report: &CheckReport);
    fn export_summary(&self, summary: &ExportSummary);
    fn scaffolded(&self, scaffold: &Scaffold);
    fn config_view(&self, view: &ConfigView);

    // Metadata
    fn version_info(&self, version: &str, git_sha: Option<&str>, build_time: Option<&str>);

    // Visual separators
    fn rule(&self, title: Option<&str>);
    fn newline(&self);
}
