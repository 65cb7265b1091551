//! # Runway
//!
//! Core of the Runway cash-flow dashboard: a forecast engine that projects
//! revenue, expenses and cash flow from a short monthly history, and a
//! scenario adjuster for what-if questions.
//!
//! ## Example
//!
//! ```
//! use runway_workspace::forecast::{FixedClock, PredictionStore, RunwayConfig, ScenarioParams};
//! use runway_workspace::forecast::seed_history;
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let mut store = PredictionStore::new(
//!     seed_history(),
//!     RunwayConfig::default(),
//!     Box::new(FixedClock(today)),
//! )
//! .unwrap();
//!
//! store
//!     .simulate_scenario(&ScenarioParams::default().with_new_hires(1.0))
//!     .unwrap();
//! assert_eq!(store.predictions().len(), 12);
//! ```

/// Forecast engine, scenario adjuster and dashboard state
pub use runway_forecast as forecast;

/// Growth, smoothing and confidence helpers
pub use runway_math as math;

#[cfg(test)]
mod tests {
    use super::forecast::{forecast, seed_history};
    use super::math::ConfidenceDecay;
    use chrono::NaiveDate;

    #[test]
    fn test_facade_reexports() {
        let origin = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let series = forecast(&seed_history(), 3, origin).unwrap();
        let curve = ConfidenceDecay::default();

        assert_eq!(series[0].confidence(), curve.score(0, 3));
    }
}
