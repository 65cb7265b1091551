//! Exponential smoothing used to derive a forecast baseline

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};

/// Simple exponential smoothing
///
/// `level[0] = x[0]`, then `level[i] = alpha * x[i] + (1 - alpha) * level[i - 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExponentialSmoothing {
    alpha: f64,
    level: Option<f64>,
    values_seen: usize,
}

impl ExponentialSmoothing {
    /// Create a new Exponential Smoothing with the specified alpha (smoothing factor)
    pub fn new(alpha: f64) -> Result<Self> {
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(MathError::InvalidInput(format!(
                "Alpha must be in (0, 1], got {}",
                alpha
            )));
        }

        Ok(Self {
            alpha,
            level: None,
            values_seen: 0,
        })
    }

    /// Update the smoothed level with a new observation
    pub fn update(&mut self, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(MathError::InvalidInput(format!(
                "Cannot smooth a non-finite value: {}",
                value
            )));
        }

        self.values_seen += 1;

        self.level = Some(match self.level {
            None => value,
            Some(current) => self.alpha * value + (1.0 - self.alpha) * current,
        });

        Ok(())
    }

    /// Get the current smoothed value
    pub fn value(&self) -> Result<f64> {
        self.level.ok_or_else(|| {
            MathError::InsufficientData("No data available for exponential smoothing".to_string())
        })
    }

    /// Get the current alpha value
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Number of observations folded into the current level
    pub fn values_seen(&self) -> usize {
        self.values_seen
    }

    /// Reset the smoother, clearing all values
    pub fn reset(&mut self) {
        self.level = None;
        self.values_seen = 0;
    }
}

/// Smoothed most-recent level of `data`, or `0.0` for an empty series.
pub fn smoothed_trend(data: &[f64], alpha: f64) -> Result<f64> {
    let mut smoother = ExponentialSmoothing::new(alpha)?;
    if data.is_empty() {
        return Ok(0.0);
    }

    for &value in data {
        smoother.update(value)?;
    }

    smoother.value()
}
