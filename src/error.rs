//! Error types shared by every pipeline in the crate.

use thiserror::Error;

/// Errors produced while loading artifacts or running pipelines.
#[derive(Error, Debug)]
pub enum PipelineError {
    // Artifact loading (fatal, build-time)
    /// An artifact file is missing, unreadable, or incompatible with the
    /// requested pipeline configuration.
    #[error("Artifact load failed: {0}")]
    ArtifactLoad(String),

    /// An artifact deserialized but its contents are internally
    /// inconsistent (mismatched shapes, empty tables, bad coefficients).
    #[error("Invalid artifact format: {0}")]
    ArtifactFormat(String),

    // Per-call
    /// Input violates the pipeline's calling convention (wrong feature
    /// width, vector input to a text-mode backend, out-of-range rating).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A predicted class code or label string falls outside the fitted
    /// label mapping.
    #[error("Unknown label: {0}")]
    UnknownLabel(String),

    /// Internal invariant breach.
    #[error("Unexpected error: {0}")]
    Unexpected(String),

    // Pass-through from dependencies
    /// Tensor backend error.
    #[error(transparent)]
    Candle(#[from] candle_core::Error),

    /// Filesystem error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    /// CSV serialization error.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PipelineError>;

impl From<regex::Error> for PipelineError {
    fn from(value: regex::Error) -> Self {
        PipelineError::ArtifactFormat(value.to_string())
    }
}
