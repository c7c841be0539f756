//! Error types for learning-curve analysis
//!
//! Provides a unified error type for all curve-stats crates.

use thiserror::Error;

/// Core error type for convergence analysis
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// A series' forward mean never crossed the convergence threshold
    #[error("Series '{series}' of trial {trial} never converged")]
    NeverConverged { trial: usize, series: String },

    /// Series that must be aligned disagree in length
    #[error("Length mismatch in {context}: expected {expected}, got {actual}")]
    LengthMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    /// Nothing left to work on
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// A trial does not carry the requested series
    #[error("Trial {trial} has no series named '{series}'")]
    MissingSeries { trial: usize, series: String },

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input(context: &str) -> Self {
        Self::EmptyInput(format!("{context} has nothing to process"))
    }

    /// Create an error for a threshold outside (0, 1)
    pub fn invalid_threshold(threshold: f64) -> Self {
        Self::InvalidParameter(format!("Threshold {threshold} must be in (0, 1)"))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::LengthMismatch {
            context: context.to_string(),
            expected,
            actual,
        }
    }

    /// Create an error for a series that never converged
    pub fn never_converged(trial: usize, series: &str) -> Self {
        Self::NeverConverged {
            trial,
            series: series.to_string(),
        }
    }
}
