//! Human-friendly output implementation using the console crate.

use tracing::{debug, instrument, trace};

use crate::assets::AssetsReport;
use crate::check::{CheckReport, IssueSeverity};
use crate::config::Scaffold;
use crate::error::SiteError;
use crate::export::ExportSummary;
use crate::markup::Page;
use crate::theme::FlowTheme;

use super::{ConfigView, Output};

const RULE_WIDTH: usize = 48;

/// Styled terminal output implementation for human users.
pub struct HumanOutput {
    theme: FlowTheme,
}

impl HumanOutput {
    #[must_use]
    pub fn new() -> Self {
        debug!("Creating HumanOutput");
        Self {
            theme: FlowTheme::default(),
        }
    }

    /// Dim, column-aligned row label.
    fn label(&self, name: &str) -> String {
        self.theme
            .label
            .apply_to(format!("  {name:<12}"))
            .to_string()
    }
}

impl Default for HumanOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for HumanOutput {
    #[instrument(skip(self))]
    fn success(&self, message: &str) {
        debug!(message, "Outputting success");
        println!("{} {message}", self.theme.ok.apply_to("[OK]"));
    }

    #[instrument(skip(self))]
    fn error(&self, error: &SiteError) {
        debug!(
            error = %error,
            recoverable = error.is_user_recoverable(),
            "Outputting error"
        );
        eprintln!("{} {error}", self.theme.err.apply_to("[ERR]"));
        if let Some(suggestion) = error.suggestion() {
            trace!(suggestion, "Adding suggestion");
            eprintln!("{} {suggestion}", self.theme.warn.apply_to("Hint:"));
        }
    }

    #[instrument(skip(self))]
    fn warning(&self, message: &str) {
        debug!(message, "Outputting warning");
        println!("{} {message}", self.theme.warn.apply_to("[WARN]"));
    }

    #[instrument(skip(self))]
    fn info(&self, message: &str) {
        debug!(message, "Outputting info");
        println!("{} {message}", self.theme.info.apply_to("[INFO]"));
    }

    #[instrument(skip(self, pages), fields(page_count = pages.len()))]
    fn pages(&self, pages: &[Page]) {
        debug!("Outputting page list");
        if pages.is_empty() {
            trace!("No pages - showing warning");
            self.warning("No pages registered");
            return;
        }

        println!("{}", self.theme.accent.apply_to("Pages:"));
        for page in pages {
            println!(
                "  {} {:<4} {:<12} {}",
                self.theme.value.apply_to(format!("{:<8}", page.slug)),
                page.route,
                page.output,
                self.theme.muted.apply_to(page.title),
            );
        }
    }

    #[instrument(skip(self, report), fields(media_count = report.media.len()))]
    fn assets(&self, report: &AssetsReport) {
        debug!("Outputting assets report");
        println!("{}", self.theme.accent.apply_to("Remote declarations:"));
        for remote in &report.remote {
            let pin = remote
                .pinned
                .map(|version| format!(" (pinned {version})"))
                .unwrap_or_default();
            println!(
                "  {}{}{}",
                self.theme.label.apply_to(format!("{:<12}", remote.kind)),
                remote.url,
                self.theme.muted.apply_to(pin),
            );
        }

        println!();
        println!("{}", self.theme.accent.apply_to("Local media:"));
        for media in &report.media {
            if media.exists {
                let size = media
                    .size
                    .map(|bytes| format!("{bytes} bytes"))
                    .unwrap_or_default();
                println!(
                    "  {} {:<52} {}",
                    self.theme.ok.apply_to(format!("{:<6}", "[OK]")),
                    media.href,
                    self.theme.muted.apply_to(size),
                );
            } else {
                println!(
                    "  {} {:<52} {}",
                    self.theme.warn.apply_to("[MISS]"),
                    media.href,
                    self.theme.muted.apply_to(&media.path),
                );
            }
        }

        println!();
        let missing = report.missing().len();
        if missing == 0 {
            self.success(&format!("{} media files present", report.media.len()));
        } else {
            self.warning(&format!(
                "{missing} of {} media files missing",
                report.media.len()
            ));
        }
    }

    #[instrument(skip(self, report), fields(valid = report.valid, errors = report.summary.error_count))]
    fn check_report(&self, report: &CheckReport) {
        debug!("Outputting check report");
        for issue in &report.issues {
            let prefix = match issue.severity {
                IssueSeverity::Error => self.theme.err.apply_to("[ERR] "),
                IssueSeverity::Warning => self.theme.warn.apply_to("[WARN]"),
            };
            println!(
                "{prefix} {}: {}",
                self.theme.value.apply_to(&issue.subject),
                issue.message
            );
            if let Some(suggestion) = &issue.suggestion {
                println!("       {}", self.theme.muted.apply_to(suggestion));
            }
        }
        if !report.issues.is_empty() {
            println!();
        }

        let summary = &report.summary;
        println!(
            "  {} page(s), {} asset(s) checked: {} error(s), {} warning(s)",
            summary.pages_checked,
            summary.assets_checked,
            summary.error_count,
            summary.warning_count
        );
        if report.is_valid() {
            self.success("All checks passed");
        }
    }

    #[instrument(skip(self, summary))]
    fn export_summary(&self, summary: &ExportSummary) {
        debug!("Outputting export summary");
        self.success(&format!(
            "Exported {} page(s) and {} asset(s) to {}",
            summary.pages, summary.assets_copied, summary.out_dir
        ));
        println!("{}{}", self.label("Manifest"), summary.manifest_path);
        println!("{}{}", self.label("Bytes"), summary.bytes_written);
    }

    #[instrument(skip(self, scaffold))]
    fn scaffolded(&self, scaffold: &Scaffold) {
        debug!("Outputting scaffold result");
        self.success("Site skeleton ready");
        println!("{}{}", self.label("Config"), scaffold.config_path.display());
        println!(
            "{}{}",
            self.label("Stylesheet"),
            scaffold.stylesheet_path.display()
        );
        println!("{}{}", self.label("Assets"), scaffold.assets_dir.display());
    }

    #[instrument(skip(self, view), fields(source = view.source))]
    fn config_view(&self, view: &ConfigView) {
        debug!("Outputting config view");
        println!("{}", self.theme.accent.apply_to("Configuration:"));
        println!("{}{}", self.label("Source"), view.source);
        if let Some(path) = &view.path {
            println!("{}{}", self.label("File"), path);
        }

        let config = &view.config;
        println!("{}{}", self.label("Title"), config.site.title);
        println!("{}{}", self.label("Language"), config.site.language);
        println!("{}{}", self.label("Out dir"), config.build.out_dir.display());
        println!(
            "{}{}",
            self.label("Assets dir"),
            config.build.assets_dir.display()
        );
        println!(
            "{}{}:{}",
            self.label("Serve"),
            config.serve.host,
            config.serve.port
        );
    }

    #[instrument(skip(self))]
    fn version_info(&self, version: &str, git_sha: Option<&str>, build_time: Option<&str>) {
        debug!(version, ?git_sha, ?build_time, "Outputting version info");
        println!("{}", self.theme.accent.apply_to(format!("flow {version}")));

        if let Some(sha) = git_sha {
            let dirty = matches!(option_env!("VERGEN_GIT_DIRTY"), Some("true"));
            print!("{}{}", self.label("Git SHA"), self.theme.value.apply_to(sha));
            if dirty {
                print!(" {}", self.theme.warn.apply_to("(dirty)"));
            }
            println!();
        }
        if let Some(time) = build_time {
            println!("{}{}", self.label("Built"), self.theme.muted.apply_to(time));
        }
        if let Some(rustc) = option_env!("VERGEN_RUSTC_SEMVER") {
            println!("{}{}", self.label("Rust"), self.theme.muted.apply_to(rustc));
        }
        if let Some(target) = option_env!("VERGEN_CARGO_TARGET_TRIPLE") {
            println!(
                "{}{}",
                self.label("Target"),
                self.theme.muted.apply_to(target)
            );
        }
    }

    #[instrument(skip(self))]
    fn rule(&self, title: Option<&str>) {
        trace!(?title, "Outputting rule");
        match title {
            Some(title) => {
                let tail = RULE_WIDTH.saturating_sub(title.len() + 4);
                println!(
                    "{}",
                    self.theme
                        .muted
                        .apply_to(format!("── {title} {}", "─".repeat(tail)))
                );
            }
            None => println!("{}", self.theme.muted.apply_to("─".repeat(RULE_WIDTH))),
        }
    }

    #[instrument(skip(self))]
    fn newline(&self) {
        println!();
    }
}
