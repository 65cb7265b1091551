//! Growth rate calculations
//!
//! The compound monthly growth rate implied by the first and last
//! observations of a series, and the matching compounding step.

use crate::{MathError, Result};

/// Compound growth rate implied by the first and last values of `data`.
///
/// With fewer than two points there is nothing to compare, so `fallback`
/// is returned unchanged. Otherwise the rate is
/// `(last / first)^(1 / (n - 1)) - 1`.
///
/// `first` is a divisor and must be strictly positive; a negative `last`
/// has no real root and is rejected as well.
pub fn compound_growth_rate(data: &[f64], fallback: f64) -> Result<f64> {
    if !fallback.is_finite() {
        return Err(MathError::InvalidInput(format!(
            "Fallback growth rate must be finite, got {}",
            fallback
        )));
    }

    if data.len() < 2 {
        return Ok(fallback);
    }

    if let Some(bad) = data.iter().find(|v| !v.is_finite()) {
        return Err(MathError::InvalidInput(format!(
            "Series contains a non-finite value: {}",
            bad
        )));
    }

    let first = data[0];
    let last = data[data.len() - 1];

    if first <= 0.0 {
        return Err(MathError::InvalidInput(format!(
            "First value must be positive to compute a growth rate, got {}",
            first
        )));
    }

    if last < 0.0 {
        return Err(MathError::InvalidInput(format!(
            "Last value must not be negative to compute a growth rate, got {}",
            last
        )));
    }

    let periods = (data.len() - 1) as f64;
    let rate = (last / first).powf(1.0 / periods) - 1.0;

    if !rate.is_finite() {
        return Err(MathError::CalculationError(format!(
            "Growth rate is not finite (first={}, last={}, periods={})",
            first, last, periods
        )));
    }

    Ok(rate)
}

/// Grow `base` by `rate` compounded over `periods` steps.
pub fn compound(base: f64, rate: f64, periods: u32) -> f64 {
    base * (1.0 + rate).powf(f64::from(periods))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fallback_for_short_series() {
        assert_eq!(compound_growth_rate(&[], 0.02).unwrap(), 0.02);
        assert_eq!(compound_growth_rate(&[100_000.0], 0.02).unwrap(), 0.02);
    }

    #[test]
    fn test_two_points() {
        let rate = compound_growth_rate(&[100.0, 110.0], 0.02).unwrap();
        assert_relative_eq!(rate, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_three_points_uses_endpoints_only() {
        // 100 -> 121 over two periods is 10% a month, whatever the middle is
        let rate = compound_growth_rate(&[100.0, 500.0, 121.0], 0.02).unwrap();
        assert_relative_eq!(rate, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_shrinking_series() {
        let rate = compound_growth_rate(&[200.0, 100.0], 0.02).unwrap();
        assert_relative_eq!(rate, -0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_drop_to_zero_is_total_loss() {
        let rate = compound_growth_rate(&[200.0, 0.0], 0.02).unwrap();
        assert_relative_eq!(rate, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_non_positive_first() {
        assert!(matches!(
            compound_growth_rate(&[0.0, 10.0], 0.02),
            Err(MathError::InvalidInput(_))
        ));
        assert!(matches!(
            compound_growth_rate(&[-5.0, 10.0], 0.02),
            Err(MathError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_negative_last_and_nan() {
        assert!(compound_growth_rate(&[10.0, -1.0], 0.02).is_err());
        assert!(compound_growth_rate(&[10.0, f64::NAN], 0.02).is_err());
        assert!(compound_growth_rate(&[10.0], f64::INFINITY).is_err());
    }

    #[test]
    fn test_compound() {
        assert_eq!(compound(1000.0, 0.05, 0), 1000.0);
        assert_relative_eq!(compound(1000.0, 0.1, 2), 1210.0, epsilon = 1e-9);
    }

    #[test]
    fn test_compound_full_period_range() {
        // periods above i32::MAX keep growing rather than wrapping negative
        let grown = compound(1.0, 1e-9, u32::MAX);
        assert_relative_eq!(grown, (f64::from(u32::MAX) * 1e-9).exp(), max_relative = 1e-5);
        assert!(grown > 70.0);
    }
}
