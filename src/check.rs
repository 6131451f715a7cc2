//! Rendered-output validation.
//!
//! `flow check` renders every page and verifies the declared asset wiring and
//! the three interactive behaviors against the markup that actually came out,
//! then inspects the local media files behind the asset table. Inspection
//! only; nothing here mutates the site.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, instrument, trace};

use crate::assets::{self, MediaKind};
use crate::config::SiteConfig;
use crate::content;
use crate::markup;
use crate::widgets::{Accordion, Carousel, Disclosure};

/// Severity level for check findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    /// Check fails
    Error,
    /// Check passes but the finding is reported
    Warning,
}

/// A single finding (error or warning).
#[derive(Debug, Clone, Serialize)]
pub struct CheckIssue {
    /// Page slug, asset href, or rule the finding points at
    pub subject: String,
    /// Human-readable description
    pub message: String,
    pub severity: IssueSeverity,
    /// Optional hint for fixing the finding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl CheckIssue {
    #[must_use]
    pub fn error(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
            severity: IssueSeverity::Error,
            suggestion: None,
        }
    }

    #[must_use]
    pub fn warning(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
            severity: IssueSeverity::Warning,
            suggestion: None,
        }
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Summary statistics for one check run.
#[derive(Debug, Clone, Serialize)]
pub struct CheckSummary {
    pub error_count: usize,
    pub warning_count: usize,
    pub pages_checked: usize,
    pub assets_checked: usize,
}

/// Full report for one check run.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// True while no errors have been recorded
    pub valid: bool,
    /// Whether missing media was treated as an error
    pub strict: bool,
    pub issues: Vec<CheckIssue>,
    pub summary: CheckSummary,
}

impl CheckReport {
    #[must_use]
    fn new(strict: bool) -> Self {
        Self {
            valid: true,
            strict,
            issues: Vec::new(),
            summary: CheckSummary {
                error_count: 0,
                warning_count: 0,
                pages_checked: 0,
                assets_checked: 0,
            },
        }
    }

    fn add_error(&mut self, subject: impl Into<String>, message: impl Into<String>) {
        self.push(CheckIssue::error(subject, message));
    }

    fn push(&mut self, issue: CheckIssue) {
        match issue.severity {
            IssueSeverity::Error => {
                self.summary.error_count += 1;
                self.valid = false;
            }
            IssueSeverity::Warning => self.summary.warning_count += 1,
        }
        self.issues.push(issue);
    }

    /// Whether the run passed (no errors).
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// All error findings.
    #[must_use]
    pub fn errors(&self) -> Vec<&CheckIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Error)
            .collect()
    }

    /// All warning findings.
    #[must_use]
    pub fn warnings(&self) -> Vec<&CheckIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Warning)
            .collect()
    }
}

/// Run every rule against the rendered site and the local asset tree.
///
/// `assets_dir` is the already-resolved source directory. With `strict`,
/// missing media files are errors instead of warnings.
#[instrument(skip(config), fields(assets_dir = %assets_dir.display(), strict))]
pub fn run(config: &SiteConfig, assets_dir: &Path, strict: bool) -> CheckReport {
    let mut report = CheckReport::new(strict);

    for page in &markup::PAGES {
        debug!(slug = page.slug, "Checking rendered page");
        let html = page.render(config).into_string();
        check_head(page.slug, &html, &mut report);
        check_mobile_nav(page.slug, &html, &mut report);
        check_faq(page.slug, &html, &mut report);
        check_carousel(page.slug, &html, &mut report);
        report.summary.pages_checked += 1;
    }

    check_media(assets_dir, strict, &mut report);

    debug!(
        errors = report.summary.error_count,
        warnings = report.summary.warning_count,
        "Check complete"
    );
    report
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Escape a binding expression the way it appears inside a rendered
/// double-quoted attribute.
fn attr_escaped(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn expect_count(
    report: &mut CheckReport,
    subject: &str,
    html: &str,
    needle: &str,
    expected: usize,
    what: &str,
) {
    let found = count(html, needle);
    if found != expected {
        report.add_error(
            subject,
            format!("expected {what} {expected} time(s), found {found}"),
        );
    }
}

/// Head must declare each external asset exactly once: the versioned
/// stylesheet, the pinned deferred script, and the font stylesheet.
fn check_head(slug: &str, html: &str, report: &mut CheckReport) {
    trace!(slug, "Checking head asset declarations");
    let stylesheet = format!("href=\"{}\"", assets::stylesheet_href_versioned());
    expect_count(report, slug, html, &stylesheet, 1, "compiled stylesheet link");

    let script = format!("src=\"{}\"", assets::ALPINE_SRC);
    expect_count(report, slug, html, &script, 1, "reactivity script");

    if let Some(start) = html.find("<script") {
        let tag = html[start..].find('>').map(|end| &html[start..start + end]);
        if tag.is_none_or(|tag| !tag.contains("defer")) {
            report.add_error(slug, "reactivity script is not deferred");
        }
    }

    let font = format!("href=\"{}\"", attr_escaped(assets::FONT_HREF));
    expect_count(report, slug, html, &font, 1, "font stylesheet link");
    expect_count(
        report,
        slug,
        html,
        &format!("rel=\"preconnect\" href=\"{}\"", assets::FONT_PRECONNECT),
        1,
        "font preconnect",
    );
}

/// The disclosure flag must be declared once, with the hamburger and close
/// controls (plus the backdrop) flipping it, and the panel class derived
/// from it exactly once.
fn check_mobile_nav(slug: &str, html: &str, report: &mut CheckReport) {
    trace!(slug, "Checking mobile navigation bindings");
    let nav = Disclosure::mobile_nav();
    expect_count(
        report,
        slug,
        html,
        &format!("x-data=\"{}\"", nav.scope()),
        1,
        "mobile navigation scope",
    );

    let toggles = count(html, &nav.toggle());
    if toggles < 2 {
        report.add_error(
            slug,
            format!("mobile navigation needs at least two toggle targets, found {toggles}"),
        );
    }

    expect_count(report, slug, html, &nav.panel_class(), 1, "panel class binding");
}

/// Every FAQ item owns its own scope; counts must match the content table.
fn check_faq(slug: &str, html: &str, report: &mut CheckReport) {
    trace!(slug, "Checking FAQ accordion bindings");
    let items = content::FAQ_ITEMS.len();
    expect_count(
        report,
        slug,
        html,
        &format!("x-data=\"{}\"", Accordion::scope()),
        items,
        "accordion scope",
    );
    expect_count(report, slug, html, &Accordion::toggle(), items, "accordion toggle");
    expect_count(
        report,
        slug,
        html,
        "x-ref=\"container\"",
        items,
        "answer container ref",
    );
    expect_count(
        report,
        slug,
        html,
        &attr_escaped(&Accordion::height_style()),
        items,
        "derived height binding",
    );
}

/// The carousel must declare the bounded index matching the testimonial
/// count, wrap on both controls, and translate both strips together.
fn check_carousel(slug: &str, html: &str, report: &mut CheckReport) {
    trace!(slug, "Checking carousel bindings");
    let carousel = Carousel::new(content::TESTIMONIALS.len());
    expect_count(
        report,
        slug,
        html,
        &format!("x-data=\"{}\"", carousel.scope()),
        1,
        "carousel scope",
    );
    expect_count(
        report,
        slug,
        html,
        &attr_escaped(&carousel.previous()),
        1,
        "previous-control wraparound",
    );
    expect_count(
        report,
        slug,
        html,
        &attr_escaped(&carousel.next()),
        1,
        "next-control wraparound",
    );
    expect_count(
        report,
        slug,
        html,
        &attr_escaped(&carousel.strip_style()),
        2,
        "shared strip transform",
    );
    expect_count(
        report,
        slug,
        html,
        &format!("src=\"{}\"", assets::TESTIMONIAL_PHOTO),
        carousel.slide_count(),
        "slide image",
    );
}

/// Verify the local files behind the asset table: existence (warning by
/// default, error under strict), raster decodability, and SVG roots.
fn check_media(assets_dir: &Path, strict: bool, report: &mut CheckReport) {
    for asset in assets::media() {
        let path = asset.local_path(assets_dir);
        trace!(href = asset.href, path = %path.display(), "Checking media file");

        if !path.exists() {
            let message = format!("missing local file {}", path.display());
            let issue = if strict {
                CheckIssue::error(asset.href, message)
            } else {
                CheckIssue::warning(asset.href, message)
            };
            report.push(issue.with_suggestion(format!(
                "Place the file under {}, or run: flow assets for the full inventory",
                assets_dir.display()
            )));
            report.summary.assets_checked += 1;
            continue;
        }

        match asset.kind {
            MediaKind::Raster => {
                if let Err(e) = image::open(&path) {
                    report.add_error(
                        asset.href,
                        format!("failed to decode {}: {e}", path.display()),
                    );
                }
            }
            MediaKind::Vector => match std::fs::read_to_string(&path) {
                Ok(svg) if svg.contains("<svg") => {}
                Ok(_) => {
                    report.add_error(
                        asset.href,
                        format!("{} has no <svg> root element", path.display()),
                    );
                }
                Err(e) => {
                    report.add_error(
                        asset.href,
                        format!("failed to read {}: {e}", path.display()),
                    );
                }
            },
            // Existence is enough for the compiled bundle
            MediaKind::Stylesheet => {}
        }
        report.summary.assets_checked += 1;
    }
}
