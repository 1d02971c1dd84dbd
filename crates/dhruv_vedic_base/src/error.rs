//! Error types for Vedic calculations.

use thiserror::Error;

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// A mandatory reference point (Sun, Moon, Ascendant) is absent.
    #[error("missing input: {0}")]
    MissingInput(&'static str),
    /// A numeric parameter outside its domain.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A planet/rasi/nakshatra name that no table knows.
    #[error("unknown {kind} name: {name:?}")]
    UnknownName { kind: &'static str, name: String },
    /// The position provider failed.
    #[error("position provider failed: {0}")]
    Provider(String),
    /// The position provider returned no bodies.
    #[error("position provider returned an empty chart")]
    EmptyChart,
}
