//! What-if scenario adjustments applied on top of a forecast

use crate::config::ScenarioConfig;
use crate::error::{ForecastError, Result};
use crate::models::ForecastSeries;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Scenario levers submitted by the user
///
/// An absent lever and a lever set to zero both leave the forecast alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_hires: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital_investment: Option<f64>,
    /// Accepted and validated, but not yet priced into the multipliers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketing_budget: Option<f64>,
    /// Accepted, but not yet priced into the multipliers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expansion_plans: Option<bool>,
}

impl ScenarioParams {
    pub fn with_new_hires(mut self, new_hires: f64) -> Self {
        self.new_hires = Some(new_hires);
        self
    }

    pub fn with_capital_investment(mut self, amount: f64) -> Self {
        self.capital_investment = Some(amount);
        self
    }

    pub fn with_marketing_budget(mut self, amount: f64) -> Self {
        self.marketing_budget = Some(amount);
        self
    }

    pub fn with_expansion_plans(mut self, expansion: bool) -> Self {
        self.expansion_plans = Some(expansion);
        self
    }

    /// Reject negative or non-finite numeric levers
    pub fn validate(&self) -> Result<()> {
        let levers = [
            ("newHires", self.new_hires),
            ("capitalInvestment", self.capital_investment),
            ("marketingBudget", self.marketing_budget),
        ];
        for (name, value) in levers {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(ForecastError::InvalidInput(format!(
                        "{} must be a non-negative number, got {}",
                        name, value
                    )));
                }
            }
        }
        Ok(())
    }

    fn has_unpriced_levers(&self) -> bool {
        self.marketing_budget.is_some_and(|v| v != 0.0) || self.expansion_plans == Some(true)
    }
}

/// Factors applied to every forecast month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioMultipliers {
    pub revenue: f64,
    pub expenses: f64,
}

impl Default for ScenarioMultipliers {
    fn default() -> Self {
        Self {
            revenue: 1.0,
            expenses: 1.0,
        }
    }
}

/// Applies scenario levers to a forecast series
#[derive(Debug, Clone, Default)]
pub struct ScenarioAdjuster {
    config: ScenarioConfig,
}

impl ScenarioAdjuster {
    pub fn new(config: ScenarioConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    /// Revenue and expense multipliers implied by `params`
    pub fn multipliers(&self, params: &ScenarioParams) -> Result<ScenarioMultipliers> {
        params.validate()?;

        let mut multipliers = ScenarioMultipliers::default();

        if let Some(hires) = params.new_hires.filter(|&v| v != 0.0) {
            multipliers.expenses += hires * self.config.new_hire_expense;
            multipliers.revenue += hires * self.config.new_hire_revenue;
        }

        if let Some(capital) = params.capital_investment.filter(|&v| v != 0.0) {
            multipliers.expenses += capital * self.config.capital_expense;
            multipliers.revenue += capital * self.config.capital_revenue;
        }

        if !(multipliers.revenue.is_finite() && multipliers.expenses.is_finite()) {
            return Err(ForecastError::InvalidInput(
                "Scenario levers are too large to model".to_string(),
            ));
        }

        if params.has_unpriced_levers() {
            warn!(
                marketing_budget = ?params.marketing_budget,
                expansion_plans = ?params.expansion_plans,
                "Marketing budget and expansion plans do not affect the forecast yet"
            );
        }

        Ok(multipliers)
    }

    /// Fresh series with the scenario applied to every month.
    ///
    /// Applying a scenario to an already adjusted series compounds both the
    /// multipliers and the confidence penalty. If any adjusted month would
    /// overflow, the whole call fails with `InvalidInput`.
    pub fn apply(&self, baseline: &ForecastSeries, params: &ScenarioParams) -> Result<ForecastSeries> {
        let multipliers = self.multipliers(params)?;
        debug!(
            revenue_multiplier = multipliers.revenue,
            expense_multiplier = multipliers.expenses,
            months = baseline.len(),
            "Applying scenario"
        );

        let points = baseline
            .iter()
            .map(|point| {
                point.adjusted(
                    multipliers.revenue,
                    multipliers.expenses,
                    self.config.confidence_penalty,
                )
            })
            .collect::<Result<Vec<_>>>()
            .map_err(|e| match e {
                ForecastError::MathError(msg) => ForecastError::InvalidInput(format!(
                    "Scenario levers push the forecast out of range: {}",
                    msg
                )),
                other => other,
            })?;

        Ok(ForecastSeries::new(points))
    }
}

/// Apply a scenario with the default coefficients
pub fn apply_scenario(baseline: &ForecastSeries, params: &ScenarioParams) -> Result<ForecastSeries> {
    ScenarioAdjuster::default().apply(baseline, params)
}
