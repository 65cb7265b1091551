use runway_forecast::ForecastError;
use runway_math::MathError;
use std::io;

#[test]
fn test_math_error_conversion() {
    let err = ForecastError::from(MathError::InvalidInput("first value is zero".to_string()));
    assert!(err.is_invalid_input());
    assert_eq!(err.to_string(), "Invalid input: first value is zero");

    let err = ForecastError::from(MathError::CalculationError("overflow".to_string()));
    assert!(matches!(err, ForecastError::MathError(_)));
    assert!(!err.is_invalid_input());
    assert!(err.to_string().contains("overflow"));
}

#[test]
fn test_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err = ForecastError::from(io_error);
    assert!(matches!(err, ForecastError::IoError(_)));
    assert!(err.to_string().contains("IO error"));

    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = ForecastError::from(json_error);
    assert!(matches!(err, ForecastError::SerializationError(_)));
}

#[test]
fn test_error_display() {
    let err = ForecastError::ConfigError("smoothing_alpha must be in (0, 1]".to_string());
    assert_eq!(err.to_string(), "Config error: smoothing_alpha must be in (0, 1]");

    let err = ForecastError::DataError("No historical records found".to_string());
    assert!(err.to_string().starts_with("Data error"));
}
