//! Forecast confidence that decays with the horizon and scales with
//! how much history backs the forecast.

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};

/// Linear confidence decay with a floor, scaled by history sufficiency
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceDecay {
    /// Confidence for the first forecast month with full history
    pub base: f64,
    /// Confidence lost per month ahead
    pub decay: f64,
    /// Lower bound applied before history scaling
    pub floor: f64,
    /// Number of historical points needed for full scale
    pub full_history: usize,
}

impl Default for ConfidenceDecay {
    fn default() -> Self {
        Self {
            base: 0.95,
            decay: 0.03,
            floor: 0.6,
            full_history: 12,
        }
    }
}

impl ConfidenceDecay {
    /// Create a decay curve, checking every parameter keeps scores in [0, 1]
    pub fn new(base: f64, decay: f64, floor: f64, full_history: usize) -> Result<Self> {
        let curve = Self {
            base,
            decay,
            floor,
            full_history,
        };
        curve.validate()?;
        Ok(curve)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.base) {
            return Err(MathError::InvalidInput(format!(
                "Base confidence must be in [0, 1], got {}",
                self.base
            )));
        }
        if !(0.0..=1.0).contains(&self.floor) {
            return Err(MathError::InvalidInput(format!(
                "Confidence floor must be in [0, 1], got {}",
                self.floor
            )));
        }
        if !(self.decay.is_finite() && self.decay >= 0.0) {
            return Err(MathError::InvalidInput(format!(
                "Confidence decay must be a non-negative number, got {}",
                self.decay
            )));
        }
        if self.full_history == 0 {
            return Err(MathError::InvalidInput(
                "Full history length must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Share of full confidence earned by `history_len` observations
    pub fn history_factor(&self, history_len: usize) -> f64 {
        (history_len as f64 / self.full_history as f64).min(1.0)
    }

    /// Confidence for the point `months_ahead` months past the origin
    pub fn score(&self, months_ahead: usize, history_len: usize) -> f64 {
        let decayed = (self.base - months_ahead as f64 * self.decay).max(self.floor);
        (decayed * self.history_factor(history_len)).clamp(0.0, 1.0)
    }
}
