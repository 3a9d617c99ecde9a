//! Error types for survey statistics
//!
//! Provides a unified error type for all survey-stats crates.

use thiserror::Error;

/// Core error type for survey statistical operations
#[derive(Error, Debug)]
pub enum Error {
    /// Input file missing or unreadable
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed row encountered while loading a data source
    #[error("Parse error at line {line}: {message}")]
    Parse { line: u64, message: String },

    /// Entity constructed with a role/parent mismatch or no data
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Operation invoked on an entity of the wrong role
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Variance or FPC requested where the divisor would be zero
    #[error("Degenerate sample: {0}")]
    DegenerateSample(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Too few observations for the requested approximation
    #[error("Insufficient sample size: expected at least {expected} observations, got {actual}")]
    InsufficientSampleSize { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a malformed value field
    pub fn parse_at(line: u64, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create an error for an operation restricted to populations
    pub fn population_only(operation: &str) -> Self {
        Self::InvalidOperation(format!("{operation} may only be performed on a population"))
    }

    /// Create an error for an operation restricted to samples
    pub fn sample_only(operation: &str) -> Self {
        Self::InvalidOperation(format!("{operation} may only be performed on a sample"))
    }

    /// Create an error for a confidence level outside (0, 1)
    pub fn invalid_confidence_level(level: f64) -> Self {
        Self::InvalidParameter(format!("Confidence level {level} must be in (0, 1)"))
    }
}
