// Rust guideline compliant 2026-10-16

//! Error types for the wrapkit core library.

use thiserror::Error;

/// Result type alias for wrapkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for wrapkit operations.
///
/// Errors attached to an [`Envelope`](crate::Envelope) are input data for
/// resolution and never appear here.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration value or file.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// An encoder could not produce a body for an envelope.
    #[error("Encode error: {0}")]
    Encode(String),
}
