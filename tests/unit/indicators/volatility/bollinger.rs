//! Unit tests for Bollinger Bands indicator

use chrono::{DateTime, Duration};
use tickerlens::indicators::volatility::{
    calculate_bollinger_bands, calculate_bollinger_bands_default,
};
use tickerlens::models::PricePoint;

fn make_series(closes: &[f64]) -> Vec<PricePoint> {
    let start = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PricePoint::new(start + Duration::days(i as i64), close, None))
        .collect()
}

#[test]
fn bollinger_insufficient_data() {
    let series = make_series(&[100.0; 19]);
    assert!(calculate_bollinger_bands_default(&series).is_none());
}

#[test]
fn bands_collapse_on_flat_series() {
    let series = make_series(&[50.0; 20]);
    let bands = calculate_bollinger_bands_default(&series).unwrap();
    assert_eq!(bands.upper, 50.0);
    assert_eq!(bands.middle, 50.0);
    assert_eq!(bands.lower, 50.0);
}

#[test]
fn bands_are_ordered_and_symmetric() {
    let closes: Vec<f64> = (1..=20).map(|i| i as f64).collect();
    let bands = calculate_bollinger_bands_default(&make_series(&closes)).unwrap();
    assert!(bands.upper > bands.middle);
    assert!(bands.middle > bands.lower);
    assert!(((bands.upper - bands.middle) - (bands.middle - bands.lower)).abs() < 1e-9);
}

#[test]
fn bands_use_sample_standard_deviation() {
    let closes: Vec<f64> = (1..=20).map(|i| i as f64).collect();
    let bands = calculate_bollinger_bands(&make_series(&closes), 20, 2.0).unwrap();
    assert!((bands.middle - 10.5).abs() < 1e-12);
    // Sample variance of 1..=20 is 35, so the band offset is 2 * sqrt(35).
    assert!((bands.upper - (10.5 + 2.0 * 35.0f64.sqrt())).abs() < 1e-9);
}

#[test]
fn bands_use_trailing_window_only() {
    let mut closes = vec![1000.0; 5];
    closes.extend(std::iter::repeat(10.0).take(20));
    let bands = calculate_bollinger_bands_default(&make_series(&closes)).unwrap();
    assert_eq!(bands.middle, 10.0);
    assert_eq!(bands.upper, 10.0);
}
