use approx::assert_relative_eq;
use rstest::rstest;
use runway_math::{compound, compound_growth_rate, smoothed_trend, ConfidenceDecay, MathError};

#[rstest]
#[case(&[100_000.0, 110_000.0, 120_000.0], 0.095_445_115)]
#[case(&[80_000.0, 85_000.0, 90_000.0], 0.060_660_172)]
#[case(&[50.0, 50.0, 50.0, 50.0], 0.0)]
fn test_growth_rate_from_endpoints(#[case] data: &[f64], #[case] expected: f64) {
    let rate = compound_growth_rate(data, 0.02).unwrap();
    assert_relative_eq!(rate, expected, epsilon = 1e-8);

    // Compounding the rate over the history reproduces the last value
    let periods = (data.len() - 1) as u32;
    assert_relative_eq!(
        compound(data[0], rate, periods),
        data[data.len() - 1],
        max_relative = 1e-12
    );
}

#[rstest]
#[case(&[0.0, 1.0])]
#[case(&[-1.0, 1.0])]
#[case(&[1.0, -1.0])]
fn test_growth_rate_rejects_invalid_series(#[case] data: &[f64]) {
    let err = compound_growth_rate(data, 0.02).unwrap_err();
    assert!(matches!(err, MathError::InvalidInput(_)));
}

#[test]
fn test_trend_weights_recent_values() {
    let rising = smoothed_trend(&[10.0, 20.0, 30.0], 0.7).unwrap();
    assert!(rising > 20.0 && rising < 30.0);

    let heavier = smoothed_trend(&[10.0, 20.0, 30.0], 0.9).unwrap();
    assert!(heavier > rising);
}

#[rstest]
#[case(0, 12, 0.95)]
#[case(1, 12, 0.92)]
#[case(0, 6, 0.475)]
#[case(30, 12, 0.6)]
#[case(30, 0, 0.0)]
fn test_confidence_curve(#[case] ahead: usize, #[case] history: usize, #[case] expected: f64) {
    let curve = ConfidenceDecay::default();
    let score = curve.score(ahead, history);
    assert_relative_eq!(score, expected, epsilon = 1e-12);
    assert!((0.0..=1.0).contains(&score));
}
