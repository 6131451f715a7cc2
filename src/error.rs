//! Error types for Flow site operations.

use thiserror::Error;

/// Primary error type for site operations.
#[derive(Error, Debug)]
pub enum SiteError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    #[error("Configuration parse error in {path}: {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),

    // Page errors
    #[error("Unknown page: {slug}")]
    UnknownPage { slug: String },

    // Asset errors
    #[error("Asset not found: {path}")]
    AssetMissing { path: String },

    #[error("Asset failed to decode '{path}': {reason}")]
    AssetInvalid { path: String, reason: String },

    // Export errors
    #[error("Export failed at {path}: {reason}")]
    ExportFailed { path: String, reason: String },

    #[error("Output directory already exists: {path}")]
    OutputExists { path: String },

    // Preview server errors
    #[error("Preview server failed to start on {addr}: {reason}")]
    ServeFailed { addr: String, reason: String },

    // Validation errors
    #[error("Validation found {errors} error(s) and {warnings} warning(s)")]
    ChecksFailed { errors: usize, warnings: usize },

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SiteError {
    /// Returns true if the error is recoverable by the user.
    pub const fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. }
                | Self::UnknownPage { .. }
                | Self::AssetMissing { .. }
                | Self::OutputExists { .. }
                | Self::ChecksFailed { .. }
        )
    }

    /// Returns a suggestion for how to fix the error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::ConfigNotFound { .. } => Some("Run: flow init"),
            Self::UnknownPage { .. } => Some("Run: flow pages"),
            Self::AssetMissing { .. } => {
                Some("Check the assets directory, or run: flow assets")
            }
            Self::OutputExists { .. } => Some("Use --clean to replace the existing output"),
            Self::ChecksFailed { .. } => Some("Run: flow check for the full report"),
            Self::ServeFailed { .. } => Some("Pick another port with --port"),
            _ => None,
        }
    }
}

/// Convenience type alias for Results using SiteError.
pub type Result<T> = std::result::Result<T, SiteError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| SiteError::Other(anyhow::Error::new(e).context(f().into())))
    }
}
