//! Static export.
//!
//! `flow build` renders every page to its output file, copies the assets tree
//! verbatim, and writes `manifest.json` describing what was produced. A
//! populated output directory is refused unless `--clean` asked for it to be
//! replaced.

use std::fs;
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, info, instrument, trace, warn};

use crate::config::SiteConfig;
use crate::error::{Result, ResultExt, SiteError};
use crate::markup;

/// Manifest filename written into the output directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Options for one export run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    /// Remove a pre-existing output directory first.
    pub clean: bool,
    /// Write pages and manifest only.
    pub skip_assets: bool,
}

/// One file written into the output tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Path relative to the output directory
    pub path: String,
    pub bytes: u64,
    pub sha256: String,
}

/// Contents of `manifest.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Tool name and version that produced the export
    pub tool: String,
    /// RFC 3339 generation timestamp
    pub generated_at: String,
    pub files: Vec<ManifestEntry>,
}

/// What an export run produced.
#[derive(Debug, Clone, Serialize)]
pub struct ExportSummary {
    pub out_dir: String,
    pub pages: usize,
    pub assets_copied: usize,
    pub bytes_written: u64,
    pub manifest_path: String,
}

/// Export the site into `out_dir`.
///
/// # Errors
///
/// Returns [`SiteError::OutputExists`] when `out_dir` is populated and
/// `clean` was not requested, and [`SiteError::ExportFailed`] on any
/// filesystem failure underneath it.
#[instrument(skip(config, options), fields(out_dir = %out_dir.display(), clean = options.clean))]
pub fn run(
    config: &SiteConfig,
    out_dir: &Path,
    assets_dir: &Path,
    options: ExportOptions,
) -> Result<ExportSummary> {
    prepare_out_dir(out_dir, options.clean)?;

    let mut files = Vec::new();

    let mut pages = 0;
    for page in &markup::PAGES {
        let html = page.render(config).into_string();
        let target = out_dir.join(page.output);
        write_file(&target, html.as_bytes())?;
        files.push(manifest_entry(page.output.to_string(), html.as_bytes()));
        debug!(slug = page.slug, output = page.output, "Exported page");
        pages += 1;
    }

    let mut assets_copied = 0;
    if options.skip_assets {
        debug!("Skipping assets copy");
    } else if assets_dir.is_dir() {
        copy_tree(assets_dir, &out_dir.join("assets"), "assets", &mut files, &mut assets_copied)?;
    } else {
        warn!(assets_dir = %assets_dir.display(), "Assets directory missing, exporting pages only");
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    let bytes_written = files.iter().map(|f| f.bytes).sum::<u64>();

    let manifest = Manifest {
        tool: format!("flow {}", env!("CARGO_PKG_VERSION")),
        generated_at: Utc::now().to_rfc3339(),
        files,
    };
    let manifest_path = out_dir.join(MANIFEST_FILE);
    let json = serde_json::to_string_pretty(&manifest).with_context(|| "serializing manifest")?;
    write_file(&manifest_path, json.as_bytes())?;

    info!(pages, assets_copied, bytes_written, "Export complete");
    Ok(ExportSummary {
        out_dir: out_dir.display().to_string(),
        pages,
        assets_copied,
        bytes_written,
        manifest_path: manifest_path.display().to_string(),
    })
}

/// Refuse a populated output directory unless `clean` replaces it.
fn prepare_out_dir(out_dir: &Path, clean: bool) -> Result<()> {
    if out_dir.exists() {
        if clean {
            info!("Removing existing output directory");
            fs::remove_dir_all(out_dir).map_err(|e| export_failed(out_dir, &e))?;
        } else if fs::read_dir(out_dir)?.next().is_some() {
            return Err(SiteError::OutputExists {
                path: out_dir.display().to_string(),
            });
        }
    }
    fs::create_dir_all(out_dir).map_err(|e| export_failed(out_dir, &e))?;
    Ok(())
}

fn export_failed(path: &Path, e: &std::io::Error) -> SiteError {
    SiteError::ExportFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| export_failed(parent, &e))?;
    }
    fs::write(path, bytes).map_err(|e| export_failed(path, &e))
}

fn manifest_entry(path: String, bytes: &[u8]) -> ManifestEntry {
    ManifestEntry {
        path,
        bytes: bytes.len() as u64,
        sha256: hex::encode(Sha256::digest(bytes)),
    }
}

/// Copy `src` into `dst` recursively, recording each file in the manifest.
fn copy_tree(
    src: &Path,
    dst: &Path,
    prefix: &str,
    files: &mut Vec<ManifestEntry>,
    copied: &mut usize,
) -> Result<()> {
    for entry in fs::read_dir(src).map_err(|e| export_failed(src, &e))? {
        let entry = entry.map_err(|e| export_failed(src, &e))?;
        let src_path = entry.path();
        let name = entry.file_name();
        let rel = format!("{prefix}/{}", name.to_string_lossy());

        if entry.file_type().map_err(|e| export_failed(&src_path, &e))?.is_dir() {
            copy_tree(&src_path, &dst.join(&name), &rel, files, copied)?;
        } else {
            trace!(path = %src_path.display(), "Copying asset");
            let bytes = fs::read(&src_path).map_err(|e| export_failed(&src_path, &e))?;
            write_file(&dst.join(&name), &bytes)?;
            files.push(manifest_entry(rel, &bytes));
            *copied += 1;
        }
    }
    Ok(())
}
