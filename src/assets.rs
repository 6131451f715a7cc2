//! Declared assets for the Flow site.
//!
//! One table drives everything boundary-facing: the head renderer emits these
//! URLs, `flow check` verifies the local files behind them, and `flow build`
//! copies the assets tree into the export. Exactly three remote/compiled
//! declarations exist (stylesheet, reactivity script, font), matching what the
//! rendered head must contain.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

// === Compiled stylesheet ===

/// Site-relative href of the compiled Tailwind bundle.
pub const STYLESHEET_HREF: &str = "/assets/css/tailwind.min.css";

/// Cache-busting version tag appended to the stylesheet href.
pub const STYLESHEET_VERSION: &str = "1.0.0";

/// The stylesheet href as rendered into the document head.
#[must_use]
pub fn stylesheet_href_versioned() -> String {
    format!("{STYLESHEET_HREF}?ver={STYLESHEET_VERSION}")
}

// === Reactivity script ===

/// Pinned Alpine.js version.
pub const ALPINE_VERSION: &str = "3.13.3";

/// CDN URL of the reactivity library; the version pin lives in the path.
pub const ALPINE_SRC: &str = "https://cdn.jsdelivr.net/npm/alpinejs@3.13.3/dist/cdn.min.js";

// === Web font ===

/// Figtree variable font stylesheet.
pub const FONT_HREF: &str =
    "https://fonts.googleapis.com/css2?family=Figtree:ital,wght@0,300..900;1,300..900&display=swap";

/// Preconnect origin for the font files themselves.
pub const FONT_PRECONNECT: &str = "https://fonts.gstatic.com";

// === Local media ===

pub const FAVICON: &str = "/assets/favicon.png";
pub const WAVES_BACKGROUND: &str = "/assets/fauna-assets/headers/bg-waves.png";
pub const LOGO_WHITE: &str = "/assets/images/logo-white.svg";
pub const LOGO_SIGN: &str = "/assets/fauna-assets/logos/sign-logo-flow.svg";
pub const ABOUT_IMAGES: [&str; 3] = [
    "/assets/fauna-assets/about/about-image2.png",
    "/assets/fauna-assets/about/about-image3.png",
    "/assets/fauna-assets/about/about-image4.png",
];
pub const TESTIMONIAL_PHOTO: &str = "/assets/fauna-assets/testimonials/photo-lg.png";

/// How an asset's on-disk content is verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Decoded with the image crate (PNG).
    Raster,
    /// Plain-text SVG, checked for an `<svg` root.
    Vector,
    /// The compiled CSS bundle; existence is enough.
    Stylesheet,
}

/// A locally served asset the markup references.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MediaAsset {
    /// Site-relative href (always `/assets/...`).
    pub href: &'static str,
    pub kind: MediaKind,
}

impl MediaAsset {
    /// Resolve the href to a path under the configured assets directory.
    ///
    /// `/assets/foo/bar.png` with assets dir `site/assets` becomes
    /// `site/assets/foo/bar.png`.
    #[must_use]
    pub fn local_path(&self, assets_dir: &Path) -> PathBuf {
        let relative = self
            .href
            .strip_prefix("/assets/")
            .unwrap_or(self.href.trim_start_matches('/'));
        assets_dir.join(relative)
    }
}

/// Every local asset the rendered markup references.
#[must_use]
pub fn media() -> Vec<MediaAsset> {
    let mut assets = vec![
        MediaAsset {
            href: STYLESHEET_HREF,
            kind: MediaKind::Stylesheet,
        },
        MediaAsset {
            href: FAVICON,
            kind: MediaKind::Raster,
        },
        MediaAsset {
            href: WAVES_BACKGROUND,
            kind: MediaKind::Raster,
        },
        MediaAsset {
            href: LOGO_WHITE,
            kind: MediaKind::Vector,
        },
        MediaAsset {
            href: LOGO_SIGN,
            kind: MediaKind::Vector,
        },
        MediaAsset {
            href: TESTIMONIAL_PHOTO,
            kind: MediaKind::Raster,
        },
    ];
    assets.extend(ABOUT_IMAGES.iter().map(|href| MediaAsset {
        href,
        kind: MediaKind::Raster,
    }));
    assets
}

// === Inventory ===

/// A remote or compiled declaration the document head renders.
#[derive(Debug, Clone, Serialize)]
pub struct RemoteAsset {
    /// What the declaration provides ("stylesheet", "script", "font").
    pub kind: &'static str,
    /// URL exactly as rendered.
    pub url: String,
    /// Version pin, when the declaration carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned: Option<&'static str>,
}

/// On-disk status of one local media asset.
#[derive(Debug, Clone, Serialize)]
pub struct MediaStatus {
    pub href: &'static str,
    pub kind: MediaKind,
    /// Path the href resolves to under the assets directory.
    pub path: String,
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// Everything `flow assets` reports.
#[derive(Debug, Clone, Serialize)]
pub struct AssetsReport {
    pub remote: Vec<RemoteAsset>,
    pub media: Vec<MediaStatus>,
}

impl AssetsReport {
    /// Hrefs whose local file is absent.
    #[must_use]
    pub fn missing(&self) -> Vec<&'static str> {
        self.media
            .iter()
            .filter(|status| !status.exists)
            .map(|status| status.href)
            .collect()
    }
}

/// Inventory the declared assets against the local assets directory.
#[must_use]
pub fn inventory(assets_dir: &Path) -> AssetsReport {
    let remote = vec![
        RemoteAsset {
            kind: "stylesheet",
            url: stylesheet_href_versioned(),
            pinned: Some(STYLESHEET_VERSION),
        },
        RemoteAsset {
            kind: "script",
            url: ALPINE_SRC.to_string(),
            pinned: Some(ALPINE_VERSION),
        },
        RemoteAsset {
            kind: "font",
            url: FONT_HREF.to_string(),
            pinned: None,
        },
    ];

    let media: Vec<MediaStatus> = media()
        .into_iter()
        .map(|asset| {
            let path = asset.local_path(assets_dir);
            let size = fs::metadata(&path)
                .ok()
                .filter(std::fs::Metadata::is_file)
                .map(|meta| meta.len());
            MediaStatus {
                href: asset.href,
                kind: asset.kind,
                path: path.display().to_string(),
                exists: size.is_some(),
                size,
            }
        })
        .collect();

    let report = AssetsReport { remote, media };
    debug!(
        remote = report.remote.len(),
        media = report.media.len(),
        missing = report.missing().len(),
        "Inventoried declared assets"
    );
    report
}
