//! Error types for the career pipeline.

use std::path::PathBuf;

use dhruv_vedic_base::VedicError;
use thiserror::Error;

/// Errors from configuration, caching and the analysis pipeline.
#[derive(Debug, Error)]
pub enum CareerError {
    #[error(transparent)]
    Vedic(#[from] VedicError),
    /// A configuration file was read but its contents are unusable.
    #[error("config error in {}: {}", .path.display(), .reason)]
    Config { path: PathBuf, reason: String },
    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// A value could not be encoded for the cache.
    #[error("cache encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
