//! Site configuration loading for the Flow CLI.
//!
//! Configuration lives in a `flow.toml` next to the site (all keys optional).
//! Discovery order: explicit `--config`/`FLOW_CONFIG` path, then `./flow.toml`,
//! then built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};

use crate::error::{Result, SiteError};

/// Default config filename discovered in the working directory.
pub const CONFIG_FILE: &str = "flow.toml";

/// Site-wide settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteSection {
    /// Document title rendered into the page head.
    pub title: String,
    /// `lang` attribute on the html element.
    pub language: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "Flow — Energizing a Green Future".to_string(),
            language: "en".to_string(),
        }
    }
}

/// Static export settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BuildSection {
    /// Directory the exported site is written to.
    pub out_dir: PathBuf,
    /// Source directory holding the compiled stylesheet and media files.
    pub assets_dir: PathBuf,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("dist"),
            assets_dir: PathBuf::from("assets"),
        }
    }
}

/// Preview server settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServeSection {
    /// Bind address.
    pub host: String,
    /// Listen port.
    pub port: u16,
}

impl Default for ServeSection {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8420,
        }
    }
}

/// Complete site configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub build: BuildSection,
    pub serve: ServeSection,
}

impl SiteConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is outside its accepted domain.
    pub fn validate(&self) -> Result<()> {
        trace!(title = %self.site.title, "Validating site config");

        if self.site.language.trim().is_empty() {
            return Err(SiteError::ConfigInvalid(
                "site.language must not be empty".to_string(),
            ));
        }
        if self.build.out_dir.as_os_str().is_empty() {
            return Err(SiteError::ConfigInvalid(
                "build.out_dir must not be empty".to_string(),
            ));
        }
        if self.build.assets_dir.as_os_str().is_empty() {
            return Err(SiteError::ConfigInvalid(
                "build.assets_dir must not be empty".to_string(),
            ));
        }
        if self.serve.port == 0 {
            return Err(SiteError::ConfigInvalid(
                "serve.port must be non-zero".to_string(),
            ));
        }

        debug!("Site config validated");
        Ok(())
    }
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Path named via `--config` or `FLOW_CONFIG`.
    Explicit(PathBuf),
    /// `./flow.toml` found in the working directory.
    Discovered(PathBuf),
    /// No file found; built-in defaults.
    Defaults,
}

impl ConfigSource {
    /// The config file path, when one was read.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Discovered(p) => Some(p),
            Self::Defaults => None,
        }
    }

    /// Directory config-relative paths resolve against.
    #[must_use]
    pub fn base_dir(&self) -> PathBuf {
        self.path()
            .and_then(Path::parent)
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
    }
}

/// Load configuration following the discovery order.
///
/// An explicitly named file must exist; a missing `./flow.toml` silently
/// falls back to defaults.
///
/// # Errors
///
/// Returns an error if an explicit path is missing, or if any found file
/// fails to parse or validate.
#[instrument(skip_all, fields(explicit = ?explicit.map(Path::display)))]
pub fn load(explicit: Option<&Path>) -> Result<(SiteConfig, ConfigSource)> {
    if let Some(path) = explicit {
        info!(path = %path.display(), "Loading configuration file");
        if !path.exists() {
            return Err(SiteError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        let config = load_file(path)?;
        return Ok((config, ConfigSource::Explicit(path.to_path_buf())));
    }

    let local = Path::new(CONFIG_FILE);
    if local.exists() {
        info!(path = %local.display(), "Loading discovered configuration file");
        let config = load_file(local)?;
        return Ok((config, ConfigSource::Discovered(local.to_path_buf())));
    }

    debug!("No configuration file found, using defaults");
    Ok((SiteConfig::default(), ConfigSource::Defaults))
}

/// Parse and validate a single config file.
fn load_file(path: &Path) -> Result<SiteConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SiteError::ConfigNotFound {
                path: path.display().to_string(),
            }
        } else {
            SiteError::Io(e)
        }
    })?;
    debug!(bytes = content.len(), "Read config file");

    let config: SiteConfig = toml::from_str(&content).map_err(|e| SiteError::ConfigParse {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    config.validate()?;
    Ok(config)
}

/// Resolve a path from the config file.
///
/// Resolution rules:
/// 1. Absolute paths: used as-is
/// 2. Paths starting with `~`: expanded to home directory
/// 3. Relative paths: resolved relative to the config file's directory
pub fn resolve_path(path: &Path, base_dir: &Path) -> Result<PathBuf> {
    trace!(
        path = %path.display(),
        base_dir = %base_dir.display(),
        "Resolving path"
    );

    let path_str = path.to_string_lossy();

    // Home directory expansion
    if path_str == "~" || path_str.starts_with("~/") {
        let home = home_dir()?;
        let rest = path_str.strip_prefix("~/").unwrap_or("");
        let resolved = if rest.is_empty() { home } else { home.join(rest) };
        debug!(
            original = %path.display(),
            resolved = %resolved.display(),
            "Expanded home directory path"
        );
        return Ok(resolved);
    }

    // Absolute path
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    // Relative path
    Ok(base_dir.join(path))
}

/// Resolve the user's home directory (cross-platform).
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| SiteError::ConfigInvalid("Could not determine home directory".to_string()))
}

/// Template written by `flow init`.
const CONFIG_TEMPLATE: &str = r#"[site]
title = "Flow — Energizing a Green Future"
language = "en"

[build]
out_dir = "dist"
assets_dir = "assets"

[serve]
host = "127.0.0.1"
port = 8420
"#;

/// Placeholder stylesheet written by `flow init` so the scaffold passes `flow check`.
const STYLESHEET_STUB: &str = "/* compiled Tailwind bundle for the Flow site */\n";

/// Files and directories created by a scaffold run.
#[derive(Debug, Clone, Serialize)]
pub struct Scaffold {
    pub config_path: PathBuf,
    pub stylesheet_path: PathBuf,
    pub assets_dir: PathBuf,
}

/// Scaffold `flow.toml` and the assets skeleton into `dir`.
///
/// # Errors
///
/// Returns an error if the config file already exists (unless `force`),
/// or on any filesystem failure.
#[instrument(skip_all, fields(dir = %dir.display(), force))]
pub fn scaffold(dir: &Path, force: bool) -> Result<Scaffold> {
    let config_path = dir.join(CONFIG_FILE);
    if config_path.exists() && !force {
        return Err(SiteError::ConfigInvalid(format!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        )));
    }

    let assets_dir = dir.join("assets");
    let css_dir = assets_dir.join("css");
    std::fs::create_dir_all(&css_dir)?;

    std::fs::write(&config_path, CONFIG_TEMPLATE)?;

    let stylesheet_path = css_dir.join("tailwind.min.css");
    if !stylesheet_path.exists() || force {
        std::fs::write(&stylesheet_path, STYLESHEET_STUB)?;
    }

    info!(
        config = %config_path.display(),
        assets = %assets_dir.display(),
        "Scaffolded site skeleton"
    );

    Ok(Scaffold {
        config_path,
        stylesheet_path,
        assets_dir,
    })
}
