use chrono::NaiveDate;
use runway_forecast::{seed_history, ForecastError, HistoryLoader};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_history_loader_from_csv() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "date,revenue,expenses").unwrap();
    writeln!(file, "2023-01-01,100000,80000").unwrap();
    writeln!(file, "2023-02-01,110000,85000").unwrap();
    writeln!(file, "2023-03-01,120000,90000").unwrap();

    let history = HistoryLoader::from_csv(file.path()).unwrap();

    assert_eq!(history, seed_history());
    assert_eq!(history[1].date, NaiveDate::from_ymd_opt(2023, 2, 1).unwrap());
}

#[test]
fn test_history_loader_column_order() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "expenses,date,revenue").unwrap();
    writeln!(file, "500.5,2024-04-01,750.25").unwrap();

    let history = HistoryLoader::from_csv(file.path()).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].revenue, 750.25);
    assert_eq!(history[0].expenses, 500.5);
}

#[test]
fn test_history_loader_error_handling() {
    let result = HistoryLoader::from_csv("nonexistent_history.csv");
    assert!(matches!(result, Err(ForecastError::IoError(_))));

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "month,income").unwrap();
    writeln!(file, "jan,100").unwrap();
    let result = HistoryLoader::from_csv(file.path());
    assert!(matches!(result, Err(ForecastError::CsvError(_))));
}
