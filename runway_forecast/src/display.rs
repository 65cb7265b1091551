//! Formatting helpers for rendering a forecast
//!
//! The chart and tooltip only ever show whole dollars, a one-decimal
//! confidence percentage and a short month label.

use crate::models::ForecastSeries;
use chrono::NaiveDate;
use serde::Serialize;

/// Whole-dollar USD amount with thousands separators, e.g. `-$5,000`
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }

    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Confidence as a percentage with one decimal, e.g. `79.2%`
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

/// Short month label, e.g. `Jan 2023`
pub fn month_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// One display-ready month of the forecast
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    pub label: String,
    pub revenue: String,
    pub expenses: String,
    pub cash_flow: String,
    pub confidence: String,
}

pub fn chart_rows(series: &ForecastSeries) -> Vec<ChartRow> {
    series
        .iter()
        .map(|p| ChartRow {
            label: month_label(p.date()),
            revenue: format_currency(p.predicted_revenue()),
            expenses: format_currency(p.predicted_expenses()),
            cash_flow: format_currency(p.predicted_cash_flow()),
            confidence: format_confidence(p.confidence()),
        })
        .collect()
}

/// Totals over a forecast series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub months: usize,
    pub total_revenue: f64,
    pub total_expenses: f64,
    pub total_cash_flow: f64,
    pub mean_confidence: f64,
    /// Months whose confidence reaches the threshold
    pub reliable_months: usize,
    /// First month forecast to burn cash
    pub first_negative_month: Option<NaiveDate>,
}

impl SeriesSummary {
    pub fn from_series(series: &ForecastSeries, confidence_threshold: f64) -> Self {
        let months = series.len();
        let total_revenue: f64 = series.iter().map(|p| p.predicted_revenue()).sum();
        let total_expenses: f64 = series.iter().map(|p| p.predicted_expenses()).sum();
        let mean_confidence = if months == 0 {
            0.0
        } else {
            series.iter().map(|p| p.confidence()).sum::<f64>() / months as f64
        };

        Self {
            months,
            total_revenue,
            total_expenses,
            total_cash_flow: total_revenue - total_expenses,
            mean_confidence,
            reliable_months: series
                .iter()
                .filter(|p| p.confidence() >= confidence_threshold)
                .count(),
            first_negative_month: series
                .iter()
                .find(|p| p.predicted_cash_flow() < 0.0)
                .map(|p| p.date()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ForecastPoint;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(1000.0), "$1,000");
        assert_eq!(format_currency(116_100.0), "$116,100");
        assert_eq!(format_currency(1_234_567.5), "$1,234,568");
        assert_eq!(format_currency(-5000.0), "-$5,000");
        assert_eq!(format_currency(-0.2), "$0");
        assert_eq!(format_currency(f64::NAN), "n/a");
    }

    #[test]
    fn test_format_confidence_and_label() {
        assert_eq!(format_confidence(0.95 / 12.0), "7.9%");
        assert_eq!(format_confidence(1.0), "100.0%");
        assert_eq!(
            month_label(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()),
            "Jan 2023"
        );
    }

    #[test]
    fn test_summary() {
        let d = |m| NaiveDate::from_ymd_opt(2024, m, 1).unwrap();
        let series: ForecastSeries = vec![
            ForecastPoint::new(d(1), 100.0, 60.0, 0.9).unwrap(),
            ForecastPoint::new(d(2), 100.0, 120.0, 0.8).unwrap(),
            ForecastPoint::new(d(3), 100.0, 130.0, 0.4).unwrap(),
        ]
        .into_iter()
        .collect();

        let summary = SeriesSummary::from_series(&series, 0.8);
        assert_eq!(summary.months, 3);
        assert_eq!(summary.total_revenue, 300.0);
        assert_eq!(summary.total_cash_flow, -10.0);
        assert_eq!(summary.reliable_months, 2);
        assert_eq!(summary.first_negative_month, Some(d(2)));

        let rows = chart_rows(&series);
        assert_eq!(rows[1].cash_flow, "-$20");
        assert_eq!(rows[2].label, "Mar 2024");
    }

    #[test]
    fn test_empty_summary() {
        let summary = SeriesSummary::from_series(&ForecastSeries::default(), 0.8);
        assert_eq!(summary.months, 0);
        assert_eq!(summary.mean_confidence, 0.0);
        assert_eq!(summary.first_negative_month, None);
    }
}
