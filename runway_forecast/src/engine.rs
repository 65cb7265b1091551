//! Forecast engine
//!
//! Turns a chronological run of [`HistoricalRecord`]s into a monthly
//! [`ForecastSeries`]:
//!
//! 1. a baseline per quantity from exponential smoothing of its history,
//! 2. a compound monthly growth rate from the first and last observation,
//! 3. month `i` predicts `baseline * (1 + rate)^i`,
//! 4. confidence decays with `i` and scales with the amount of history.
//!
//! Forecast dates count forward from an explicit origin. The engine never
//! reads the clock; callers pass "today" in (see [`crate::store::Clock`]).

use crate::config::ForecastConfig;
use crate::data::{self, HistoricalRecord};
use crate::error::{ForecastError, Result};
use crate::models::{ForecastPoint, ForecastSeries};
use chrono::{Months, NaiveDate};
use runway_math::{compound, compound_growth_rate, smoothed_trend};
use tracing::debug;

/// Baseline and growth rate derived for one quantity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend {
    pub baseline: f64,
    pub growth_rate: f64,
}

impl Trend {
    fn fit(values: &[f64], alpha: f64, fallback_rate: f64) -> Result<Self> {
        Ok(Self {
            baseline: smoothed_trend(values, alpha)?,
            growth_rate: compound_growth_rate(values, fallback_rate)?,
        })
    }

    /// Predicted value `months_ahead` months past the origin
    pub fn project(&self, months_ahead: u32) -> f64 {
        compound(self.baseline, self.growth_rate, months_ahead)
    }
}

/// Stateless forecast engine
#[derive(Debug, Clone, Default)]
pub struct ForecastEngine {
    config: ForecastConfig,
}

impl ForecastEngine {
    pub fn new(config: ForecastConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Revenue and expense trends fitted to `history`
    pub fn fit(&self, history: &[HistoricalRecord]) -> Result<(Trend, Trend)> {
        for record in history {
            record.validate()?;
        }

        let revenue = Trend::fit(
            &data::revenues(history),
            self.config.smoothing_alpha,
            self.config.fallback_growth_rate,
        )?;
        let expenses = Trend::fit(
            &data::expenses(history),
            self.config.smoothing_alpha,
            self.config.expense_fallback(),
        )?;

        debug!(
            revenue_baseline = revenue.baseline,
            revenue_growth = revenue.growth_rate,
            expense_baseline = expenses.baseline,
            expense_growth = expenses.growth_rate,
            history_len = history.len(),
            "Fitted forecast trends"
        );

        Ok((revenue, expenses))
    }

    /// Forecast `months` months starting at `origin`.
    ///
    /// An empty history is valid and yields an all-zero series with zero
    /// confidence. `months == 0` is rejected.
    pub fn forecast(
        &self,
        history: &[HistoricalRecord],
        months: usize,
        origin: NaiveDate,
    ) -> Result<ForecastSeries> {
        if months == 0 {
            return Err(ForecastError::InvalidInput(
                "Forecast horizon must be at least one month".to_string(),
            ));
        }
        let horizon = u32::try_from(months).map_err(|_| {
            ForecastError::InvalidInput(format!("Forecast horizon {} is too large", months))
        })?;

        let (revenue, expenses) = self.fit(history)?;
        let confidence = self.config.confidence_curve();

        let points = (0..horizon)
            .map(|i| {
                ForecastPoint::new(
                    month_offset(origin, i)?,
                    revenue.project(i),
                    expenses.project(i),
                    confidence.score(i as usize, history.len()),
                )
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ForecastSeries::new(points))
    }

    /// Forecast with the configured default horizon
    pub fn forecast_default(
        &self,
        history: &[HistoricalRecord],
        origin: NaiveDate,
    ) -> Result<ForecastSeries> {
        self.forecast(history, self.config.default_months, origin)
    }
}

/// `origin` advanced by `months` calendar months. Days past the end of the
/// target month clamp to its last day.
pub fn month_offset(origin: NaiveDate, months: u32) -> Result<NaiveDate> {
    origin.checked_add_months(Months::new(months)).ok_or_else(|| {
        ForecastError::InvalidInput(format!(
            "{} plus {} months is out of the supported date range",
            origin, months
        ))
    })
}

/// Forecast with the default configuration
pub fn forecast(
    history: &[HistoricalRecord],
    months: usize,
    origin: NaiveDate,
) -> Result<ForecastSeries> {
    ForecastEngine::default().forecast(history, months, origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed_history;
    use approx::assert_relative_eq;

    fn origin() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_fit_seed_history() {
        let engine = ForecastEngine::default();
        let (revenue, expenses) = engine.fit(&seed_history()).unwrap();

        assert_relative_eq!(revenue.baseline, 116_100.0, epsilon = 1e-6);
        assert_relative_eq!(expenses.baseline, 88_050.0, epsilon = 1e-6);
        assert_relative_eq!(revenue.growth_rate, 1.2f64.sqrt() - 1.0, epsilon = 1e-12);
        assert_relative_eq!(expenses.growth_rate, 1.125f64.sqrt() - 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_month_offset_clamps_to_month_end() {
        let jan31 = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(
            month_offset(jan31, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(
            month_offset(jan31, 12).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
        );
        assert_eq!(month_offset(jan31, 0).unwrap(), jan31);
    }

    #[test]
    fn test_zero_months_rejected() {
        let err = forecast(&seed_history(), 0, origin()).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_default_horizon() {
        let series = ForecastEngine::default()
            .forecast_default(&seed_history(), origin())
            .unwrap();
        assert_eq!(series.len(), 12);
    }

    #[test]
    fn test_separate_expense_fallback_is_opt_in() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let history = [HistoricalRecord::new(1000.0, 500.0, date).unwrap()];

        let config = ForecastConfig {
            expense_fallback_growth_rate: Some(0.015),
            ..ForecastConfig::default()
        };
        let engine = ForecastEngine::new(config).unwrap();
        let (revenue, expenses) = engine.fit(&history).unwrap();

        assert_eq!(revenue.growth_rate, 0.02);
        assert_eq!(expenses.growth_rate, 0.015);
    }
}
