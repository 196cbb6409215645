//! Errors reported by the estimator.

/// Message shown when there is nothing to estimate.
pub const EMPTY_INPUT_MESSAGE: &str = "Please paste some content to estimate reading time.";

/// Errors that can occur while estimating reading time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EstimateError {
    /// Content is empty after trimming whitespace.
    #[error("Please paste some content to estimate reading time.")]
    EmptyInput,

    /// Reading rates failed validation (e.g. a zero words-per-minute value).
    #[error("Invalid reading rates: {0}")]
    InvalidRates(String),
}
