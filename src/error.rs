//! Error types for the rating estimator
//!
//! Estimation failures are described by [`RatingError`]. Outer layers
//! (configuration, ingest, the CLI) use the anyhow-based [`Result`] alias and
//! convert core errors with `?`.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Failures raised by the estimation core and its input validation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RatingError {
    #[error("Performance history is empty")]
    EmptyHistory,

    #[error("Record {index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("Inverse correction requires a positive rating, got {corrected}")]
    DomainError { corrected: f64 },

    #[error("Record {index} has invalid weight {weight}")]
    InvalidWeight { index: usize, weight: f64 },

    #[error("Record {index} has unparseable end time: {value}")]
    InvalidTimestamp { index: usize, value: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}

impl RatingError {
    /// Short, stable label used for metrics
    pub fn kind(&self) -> &'static str {
        match self {
            RatingError::EmptyHistory => "empty_history",
            RatingError::MissingField { .. } => "missing_field",
            RatingError::DomainError { .. } => "domain_error",
            RatingError::InvalidWeight { .. } => "invalid_weight",
            RatingError::InvalidTimestamp { .. } => "invalid_timestamp",
            RatingError::ConfigurationError { .. } => "configuration_error",
        }
    }
}
