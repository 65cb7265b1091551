//! Forecast output types

use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// One forecasted month
///
/// `predicted_cash_flow` is always `predicted_revenue - predicted_expenses`,
/// every amount is finite and `confidence` lies in `[0, 1]`. Both are
/// checked by the constructor, so points are only built through
/// [`ForecastPoint::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawForecastPoint")]
pub struct ForecastPoint {
    date: NaiveDate,
    predicted_revenue: f64,
    predicted_expenses: f64,
    predicted_cash_flow: f64,
    confidence: f64,
}

impl ForecastPoint {
    /// Build a point, rejecting amounts that are not finite and confidence
    /// outside `[0, 1]`
    pub fn new(date: NaiveDate, revenue: f64, expenses: f64, confidence: f64) -> Result<Self> {
        let cash_flow = revenue - expenses;
        if !(revenue.is_finite() && expenses.is_finite() && cash_flow.is_finite()) {
            return Err(ForecastError::MathError(format!(
                "Forecast for {} is not finite (revenue={}, expenses={})",
                date, revenue, expenses
            )));
        }

        if !(0.0..=1.0).contains(&confidence) {
            return Err(ForecastError::InvalidInput(format!(
                "Confidence for {} must be in [0, 1], got {}",
                date, confidence
            )));
        }

        Ok(Self {
            date,
            predicted_revenue: revenue,
            predicted_expenses: expenses,
            predicted_cash_flow: cash_flow,
            confidence,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn predicted_revenue(&self) -> f64 {
        self.predicted_revenue
    }

    pub fn predicted_expenses(&self) -> f64 {
        self.predicted_expenses
    }

    pub fn predicted_cash_flow(&self) -> f64 {
        self.predicted_cash_flow
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Same month with revenue and expenses scaled and confidence discounted
    pub fn adjusted(
        &self,
        revenue_factor: f64,
        expense_factor: f64,
        confidence_factor: f64,
    ) -> Result<Self> {
        Self::new(
            self.date,
            self.predicted_revenue * revenue_factor,
            self.predicted_expenses * expense_factor,
            self.confidence * confidence_factor,
        )
    }
}

/// Wire form of a point; the cash flow is derived again on the way in
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawForecastPoint {
    date: NaiveDate,
    predicted_revenue: f64,
    predicted_expenses: f64,
    confidence: f64,
}

impl TryFrom<RawForecastPoint> for ForecastPoint {
    type Error = ForecastError;

    fn try_from(raw: RawForecastPoint) -> Result<Self> {
        Self::new(
            raw.date,
            raw.predicted_revenue,
            raw.predicted_expenses,
            raw.confidence,
        )
    }
}

/// Ordered monthly forecast, earliest month first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ForecastSeries {
    points: Vec<ForecastPoint>,
}

impl ForecastSeries {
    pub fn new(points: Vec<ForecastPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ForecastPoint> {
        self.points.iter()
    }

    pub fn first(&self) -> Option<&ForecastPoint> {
        self.points.first()
    }

    pub fn into_points(self) -> Vec<ForecastPoint> {
        self.points
    }

    /// Serialize the series as the JSON array the dashboard consumes
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Index<usize> for ForecastSeries {
    type Output = ForecastPoint;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl FromIterator<ForecastPoint> for ForecastSeries {
    fn from_iter<I: IntoIterator<Item = ForecastPoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for ForecastSeries {
    type Item = ForecastPoint;
    type IntoIter = std::vec::IntoIter<ForecastPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a ForecastSeries {
    type Item = &'a ForecastPoint;
    type IntoIter = std::slice::Iter<'a, ForecastPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
