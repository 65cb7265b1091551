//! Historical financial records and how they are loaded

use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// One observed month of revenue and expenses
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    pub revenue: f64,
    pub expenses: f64,
    pub date: NaiveDate,
}

impl HistoricalRecord {
    /// Create a record, rejecting negative or non-finite amounts
    pub fn new(revenue: f64, expenses: f64, date: NaiveDate) -> Result<Self> {
        let record = Self {
            revenue,
            expenses,
            date,
        };
        record.validate()?;
        Ok(record)
    }

    pub fn validate(&self) -> Result<()> {
        for (field, value) in [("revenue", self.revenue), ("expenses", self.expenses)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ForecastError::InvalidInput(format!(
                    "{} for {} must be a non-negative number, got {}",
                    field, self.date, value
                )));
            }
        }
        Ok(())
    }

    /// Net cash flow of the month
    pub fn cash_flow(&self) -> f64 {
        self.revenue - self.expenses
    }
}

/// The in-memory seed set the dashboard starts from
pub fn seed_history() -> Vec<HistoricalRecord> {
    [
        (100_000.0, 80_000.0, 1),
        (110_000.0, 85_000.0, 2),
        (120_000.0, 90_000.0, 3),
    ]
    .into_iter()
    .filter_map(|(revenue, expenses, month)| {
        NaiveDate::from_ymd_opt(2023, month, 1).map(|date| HistoricalRecord {
            revenue,
            expenses,
            date,
        })
    })
    .collect()
}

/// Revenue values in history order
pub fn revenues(history: &[HistoricalRecord]) -> Vec<f64> {
    history.iter().map(|r| r.revenue).collect()
}

/// Expense values in history order
pub fn expenses(history: &[HistoricalRecord]) -> Vec<f64> {
    history.iter().map(|r| r.expenses).collect()
}

/// Loader for historical records stored as CSV
///
/// Expected headers: `date,revenue,expenses` with ISO dates.
#[derive(Debug)]
pub struct HistoryLoader;

impl HistoryLoader {
    /// Load history from a CSV file
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<HistoricalRecord>> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Load history from any CSV source, oldest record first
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<HistoricalRecord>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for row in csv_reader.deserialize() {
            let record: HistoricalRecord = row?;
            record.validate()?;
            records.push(record);
        }

        if records.is_empty() {
            return Err(ForecastError::DataError(
                "No historical records found".to_string(),
            ));
        }

        records.sort_by_key(|r| r.date);
        debug!(count = records.len(), "Loaded historical records");

        Ok(records)
    }
}
