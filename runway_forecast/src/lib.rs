//! # Runway Forecast
//!
//! Cash-flow projection and what-if scenarios for the Runway dashboard.
//!
//! ## Features
//!
//! - Monthly revenue/expense forecasts from a short run of history
//! - Exponential-smoothing baselines with compound growth
//! - Confidence that decays with the horizon and scales with history
//! - Scenario levers (new hires, capital investment) as multipliers
//! - An owned [`PredictionStore`] for the dashboard state
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use runway_forecast::{apply_scenario, forecast, seed_history, ScenarioParams};
//!
//! let origin = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let baseline = forecast(&seed_history(), 12, origin)?;
//! assert_eq!(baseline.len(), 12);
//!
//! let hiring = ScenarioParams::default().with_new_hires(2.0);
//! let adjusted = apply_scenario(&baseline, &hiring)?;
//! assert!(adjusted[0].predicted_revenue() > baseline[0].predicted_revenue());
//! # Ok::<(), runway_forecast::ForecastError>(())
//! ```

pub mod config;
pub mod data;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod scenario;
pub mod store;

// Re-export commonly used types
pub use crate::config::{ForecastConfig, RunwayConfig, ScenarioConfig};
pub use crate::data::{seed_history, HistoricalRecord, HistoryLoader};
pub use crate::engine::{forecast, ForecastEngine};
pub use crate::error::{ForecastError, Result};
pub use crate::models::{ForecastPoint, ForecastSeries};
pub use crate::scenario::{apply_scenario, ScenarioAdjuster, ScenarioMultipliers, ScenarioParams};
pub use crate::store::{Clock, FixedClock, PredictionStore, SystemClock};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
