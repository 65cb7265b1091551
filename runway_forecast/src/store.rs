//! Owned dashboard state
//!
//! [`PredictionStore`] holds the historical records and the forecast
//! currently on display. UI components receive it by reference; the
//! engine and adjuster it calls stay pure.

use crate::config::RunwayConfig;
use crate::data::{seed_history, HistoricalRecord};
use crate::engine::ForecastEngine;
use crate::error::Result;
use crate::models::ForecastSeries;
use crate::scenario::{ScenarioAdjuster, ScenarioParams};
use chrono::{NaiveDate, Utc};
use std::fmt::Debug;
use tracing::info;

/// Source of the forecast origin
pub trait Clock: Debug + Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Reads the current UTC date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Always returns the same date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Historical data plus the forecast currently shown
#[derive(Debug)]
pub struct PredictionStore {
    history: Vec<HistoricalRecord>,
    predictions: ForecastSeries,
    engine: ForecastEngine,
    adjuster: ScenarioAdjuster,
    clock: Box<dyn Clock>,
}

impl PredictionStore {
    /// Build the store and compute the initial forecast
    pub fn new(
        history: Vec<HistoricalRecord>,
        config: RunwayConfig,
        clock: Box<dyn Clock>,
    ) -> Result<Self> {
        let engine = ForecastEngine::new(config.forecast)?;
        let adjuster = ScenarioAdjuster::new(config.scenario)?;
        let origin = clock.today();
        let predictions = engine.forecast_default(&history, origin)?;

        info!(
            history_len = history.len(),
            months = predictions.len(),
            %origin,
            "Initialized prediction store"
        );

        Ok(Self {
            history,
            predictions,
            engine,
            adjuster,
            clock,
        })
    }

    /// Store over the seed history with default settings and today's date
    pub fn seeded() -> Result<Self> {
        Self::new(
            seed_history(),
            RunwayConfig::default(),
            Box::new(SystemClock),
        )
    }

    pub fn history(&self) -> &[HistoricalRecord] {
        &self.history
    }

    pub fn predictions(&self) -> &ForecastSeries {
        &self.predictions
    }

    pub fn set_predictions(&mut self, predictions: ForecastSeries) {
        self.predictions = predictions;
    }

    /// Apply `params` to the forecast on display.
    ///
    /// Scenarios stack: each call adjusts the current predictions, not the
    /// baseline. On error the current predictions are left untouched.
    pub fn simulate_scenario(&mut self, params: &ScenarioParams) -> Result<&ForecastSeries> {
        let adjusted = self.adjuster.apply(&self.predictions, params)?;
        info!(months = adjusted.len(), "Applied scenario to predictions");
        self.predictions = adjusted;
        Ok(&self.predictions)
    }

    /// Recompute the forecast from history, dropping any scenarios
    pub fn reset_predictions(&mut self) -> Result<&ForecastSeries> {
        let origin = self.clock.today();
        self.predictions = self.engine.forecast_default(&self.history, origin)?;
        info!(%origin, "Reset predictions to baseline forecast");
        Ok(&self.predictions)
    }
}
