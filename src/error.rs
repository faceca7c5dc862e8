//! Error types for the tad-eval library.

use thiserror::Error;

/// Result type for tad-eval operations.
pub type Result<T> = std::result::Result<T, TadEvalError>;

/// Error types that can occur while loading inputs or configuring an evaluation.
///
/// Metric computation only fails on data when a video is too long for the
/// frame grid; unknown videos are skipped and zero denominators yield 0.0.
#[derive(Error, Debug)]
pub enum TadEvalError {
    /// Error during JSON parsing or serialization.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error during I/O operations.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Missing required top-level field in an input document.
    #[error("Missing field: {0}")]
    MissingField(String),

    /// Invalid score or IoU threshold.
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),

    /// Video too long to discretize on the frame grid.
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    /// Invalid evaluation configuration.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
