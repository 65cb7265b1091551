//! # Runway Math
//!
//! Numeric building blocks for cash-flow forecasting.
//! This crate provides the growth-rate, smoothing and confidence
//! calculations shared by the forecast engine.

use thiserror::Error;

// Calculation modules
pub mod confidence;
pub mod growth;
pub mod smoothing;

pub use confidence::ConfidenceDecay;
pub use growth::{compound, compound_growth_rate};
pub use smoothing::{smoothed_trend, ExponentialSmoothing};

/// Errors that can occur in forecasting calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for forecasting math operations
pub type Result<T> = std::result::Result<T, MathError>;
