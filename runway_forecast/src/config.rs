//! Engine configuration
//!
//! Every tunable constant of the forecast and scenario calculations lives
//! here. Values can be overridden from a TOML file; any missing section or
//! key keeps its default.
//!
//! ```toml
//! [forecast]
//! smoothing_alpha = 0.7
//! fallback_growth_rate = 0.02
//! default_months = 12
//!
//! [scenario]
//! new_hire_revenue = 0.07
//! confidence_penalty = 0.9
//! ```

use crate::error::{ForecastError, Result};
use runway_math::ConfidenceDecay;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Forecast engine settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Exponential smoothing factor for the baseline
    pub smoothing_alpha: f64,
    /// Monthly growth rate used when history has fewer than two points
    pub fallback_growth_rate: f64,
    /// Expense-specific fallback. When absent, expenses use
    /// `fallback_growth_rate` like revenue does.
    pub expense_fallback_growth_rate: Option<f64>,
    /// Confidence of the first forecast month
    pub base_confidence: f64,
    /// Confidence lost per month ahead
    pub confidence_decay: f64,
    /// Lower bound of the decayed confidence, before history scaling
    pub confidence_floor: f64,
    /// Historical points required for full confidence
    pub full_history_months: usize,
    /// Confidence at or above which a month counts as reliable
    pub confidence_threshold: f64,
    /// Horizon used when the caller does not pick one
    pub default_months: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        let decay = ConfidenceDecay::default();
        Self {
            smoothing_alpha: 0.7,
            fallback_growth_rate: 0.02,
            expense_fallback_growth_rate: None,
            base_confidence: decay.base,
            confidence_decay: decay.decay,
            confidence_floor: decay.floor,
            full_history_months: decay.full_history,
            confidence_threshold: 0.8,
            default_months: 12,
        }
    }
}

impl ForecastConfig {
    /// Fallback growth rate applied to expenses
    pub fn expense_fallback(&self) -> f64 {
        self.expense_fallback_growth_rate
            .unwrap_or(self.fallback_growth_rate)
    }

    /// Confidence curve described by this config
    pub fn confidence_curve(&self) -> ConfidenceDecay {
        ConfidenceDecay {
            base: self.base_confidence,
            decay: self.confidence_decay,
            floor: self.confidence_floor,
            full_history: self.full_history_months,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.smoothing_alpha > 0.0 && self.smoothing_alpha <= 1.0) {
            return Err(ForecastError::ConfigError(format!(
                "smoothing_alpha must be in (0, 1], got {}",
                self.smoothing_alpha
            )));
        }
        if !self.fallback_growth_rate.is_finite() || self.fallback_growth_rate <= -1.0 {
            return Err(ForecastError::ConfigError(format!(
                "fallback_growth_rate must be a finite rate above -1, got {}",
                self.fallback_growth_rate
            )));
        }
        if let Some(rate) = self.expense_fallback_growth_rate {
            if !rate.is_finite() || rate <= -1.0 {
                return Err(ForecastError::ConfigError(format!(
                    "expense_fallback_growth_rate must be a finite rate above -1, got {}",
                    rate
                )));
            }
        }
        self.confidence_curve()
            .validate()
            .map_err(|e| ForecastError::ConfigError(e.to_string()))?;
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(ForecastError::ConfigError(format!(
                "confidence_threshold must be in [0, 1], got {}",
                self.confidence_threshold
            )));
        }
        if self.default_months == 0 {
            return Err(ForecastError::ConfigError(
                "default_months must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Scenario adjuster coefficients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Revenue multiplier added per new hire
    pub new_hire_revenue: f64,
    /// Expense multiplier added per new hire
    pub new_hire_expense: f64,
    /// Revenue multiplier added per unit of capital investment
    pub capital_revenue: f64,
    /// Expense multiplier added per unit of capital investment
    pub capital_expense: f64,
    /// Factor applied to confidence on every scenario application
    pub confidence_penalty: f64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            new_hire_revenue: 0.07,
            new_hire_expense: 0.05,
            capital_revenue: 0.00015,
            capital_expense: 0.0001,
            confidence_penalty: 0.9,
        }
    }
}

impl ScenarioConfig {
    pub fn validate(&self) -> Result<()> {
        let coefficients = [
            ("new_hire_revenue", self.new_hire_revenue),
            ("new_hire_expense", self.new_hire_expense),
            ("capital_revenue", self.capital_revenue),
            ("capital_expense", self.capital_expense),
        ];
        for (name, value) in coefficients {
            if !value.is_finite() || value < 0.0 {
                return Err(ForecastError::ConfigError(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.confidence_penalty) {
            return Err(ForecastError::ConfigError(format!(
                "confidence_penalty must be in [0, 1], got {}",
                self.confidence_penalty
            )));
        }
        Ok(())
    }
}

/// Complete configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunwayConfig {
    pub forecast: ForecastConfig,
    pub scenario: ScenarioConfig,
}

impl RunwayConfig {
    /// Parse and validate configuration from TOML content
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RunwayConfig = toml::from_str(content)
            .map_err(|e| ForecastError::ConfigError(format!("Invalid config TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ForecastError::ConfigError(format!(
                "Failed to read config {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Load from `path` when it exists, otherwise fall back to defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "Loading configuration");
                Self::from_file(path)
            }
            Some(path) => {
                debug!(path = %path.display(), "Config file not found, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.forecast.validate()?;
        self.scenario.validate()
    }
}
