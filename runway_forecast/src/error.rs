//! Error types for the runway_forecast crate

use runway_math::MathError;
use thiserror::Error;

/// Custom error types for the runway_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Input rejected at the boundary: bad horizon, negative scenario
    /// lever, or history that would yield a non-finite growth rate
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error related to loading historical records
    #[error("Data error: {0}")]
    DataError(String),

    /// Error related to configuration parsing or validation
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Error from mathematical operations
    #[error("Math error: {0}")]
    MathError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from CSV parsing
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Error from JSON serialization
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ForecastError {
    /// True for failures caused by the caller's arguments
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ForecastError::InvalidInput(_))
    }
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<MathError> for ForecastError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::InvalidInput(msg) => ForecastError::InvalidInput(msg),
            other => ForecastError::MathError(other.to_string()),
        }
    }
}
