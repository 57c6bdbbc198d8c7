//! Error types for the persistence mirror.

use thiserror::Error;

/// Errors a mirror read or write can report.
#[derive(Debug, Error)]
pub enum MirrorError {
    /// The backing storage failed.
    #[error("Mirror i/o failure: {0}")]
    Io(#[from] std::io::Error),

    /// The payload could not be serialized or deserialized.
    #[error("Malformed cart payload: {0}")]
    Codec(#[from] serde_json::Error),

    /// A backend-specific failure with no io representation.
    #[error("Mirror backend failure: {0}")]
    Backend(String),
}
