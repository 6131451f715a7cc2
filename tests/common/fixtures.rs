//! Test fixture helpers for creating temporary site trees.
//!
//! Provides utilities for generating temporary directories holding a
//! `flow.toml` plus the media files the markup declares, automatically
//! cleaned up on drop.

use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use tempfile::TempDir;

use flow::assets::{self, MediaKind};
use flow::config;

const SVG_STUB: &str =
    r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M4 12h16"/></svg>"#;

/// A scaffolded site in a temporary directory with automatic cleanup.
///
/// # Example
///
/// ```ignore
/// let site = SiteFixture::complete();
/// // Point the CLI at site.config_path(), or run it from site.root()
/// ```
pub struct SiteFixture {
    /// The temporary directory containing the site.
    pub dir: TempDir,
}

impl SiteFixture {
    /// Scaffold `flow.toml` and the stylesheet stub, without media files.
    ///
    /// # Panics
    ///
    /// Panics if scaffolding fails.
    #[must_use]
    pub fn without_media() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        config::scaffold(dir.path(), false).expect("Failed to scaffold site");
        Self { dir }
    }

    /// Scaffold a site with every declared media file present.
    ///
    /// # Panics
    ///
    /// Panics if scaffolding or media generation fails.
    #[must_use]
    pub fn complete() -> Self {
        let fixture = Self::without_media();
        write_media_tree(&fixture.assets_dir());
        fixture
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.root().join(config::CONFIG_FILE)
    }

    #[must_use]
    pub fn assets_dir(&self) -> PathBuf {
        self.root().join("assets")
    }

    #[must_use]
    pub fn out_dir(&self) -> PathBuf {
        self.root().join("dist")
    }

    /// Replace one declared media file with bytes that fail decoding.
    ///
    /// # Panics
    ///
    /// Panics if the href is not in the declared media table.
    pub fn corrupt_media(&self, href: &str) {
        let asset = assets::media()
            .into_iter()
            .find(|m| m.href == href)
            .unwrap_or_else(|| panic!("{href} is not a declared asset"));
        let path = asset.local_path(&self.assets_dir());
        fs::write(&path, b"not image data").expect("Failed to overwrite media file");
    }

    /// Delete one declared media file.
    ///
    /// # Panics
    ///
    /// Panics if the href is not in the declared media table.
    pub fn remove_media(&self, href: &str) {
        let asset = assets::media()
            .into_iter()
            .find(|m| m.href == href)
            .unwrap_or_else(|| panic!("{href} is not a declared asset"));
        let path = asset.local_path(&self.assets_dir());
        fs::remove_file(&path).expect("Failed to remove media file");
    }
}

/// Write every media file the markup declares under `assets_dir`.
///
/// Rasters are tiny solid-color PNGs; vectors and the stylesheet are
/// minimal valid text.
///
/// # Panics
///
/// Panics if any file cannot be written.
pub fn write_media_tree(assets_dir: &Path) {
    for (index, asset) in assets::media().into_iter().enumerate() {
        let path = asset.local_path(assets_dir);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create media directory");
        }
        match asset.kind {
            MediaKind::Raster => {
                // Vary the color per file for visual distinction
                let shade = u8::try_from(index * 24 % 256).unwrap_or(0);
                let img = RgbImage::from_pixel(4, 4, Rgb([shade, 120, 90]));
                img.save(&path)
                    .unwrap_or_else(|_| panic!("Failed to save raster at {path:?}"));
            }
            MediaKind::Vector => {
                fs::write(&path, SVG_STUB)
                    .unwrap_or_else(|_| panic!("Failed to write vector at {path:?}"));
            }
            MediaKind::Stylesheet => {
                fs::write(&path, "/* compiled Tailwind bundle for tests */\n")
                    .unwrap_or_else(|_| panic!("Failed to write stylesheet at {path:?}"));
            }
        }
    }
}
