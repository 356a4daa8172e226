use thiserror::Error;

/// Error types for the fallible boundary of the curve-eval library.
///
/// Evaluation itself never fails with these: parse, domain and input
/// failures are values of [`EvaluationResult`](crate::EvaluationResult).
/// `CurveError` covers loading configuration and extraction payloads.
#[derive(Error, Debug)]
pub enum CurveError {
    /// Invalid engine configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The extraction collaborator reported a failure.
    #[error("Extraction failed: {0}")]
    Extraction(String),

    /// Two curves in one set share an identifier.
    #[error("Duplicate curve id: {0}")]
    DuplicateCurve(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for curve-eval operations.
pub type Result<T> = std::result::Result<T, CurveError>;
