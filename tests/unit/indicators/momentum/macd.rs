//! Unit tests for MACD indicator

use chrono::{DateTime, Duration};
use tickerlens::indicators::momentum::{calculate_macd, calculate_macd_default};
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
fn macd_insufficient_data() {
    let closes: Vec<f64> = (1..=25).map(|i| i as f64).collect();
    assert!(calculate_macd_default(&make_series(&closes)).is_none());
}

#[test]
fn macd_present_at_slow_period() {
    let closes: Vec<f64> = (1..=26).map(|i| i as f64).collect();
    assert!(calculate_macd_default(&make_series(&closes)).is_some());
}

#[test]
fn histogram_is_macd_minus_signal() {
    let closes: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0).collect();
    let macd = calculate_macd_default(&make_series(&closes)).unwrap();
    assert_eq!(macd.histogram, macd.macd - macd.signal);
}

#[test]
fn macd_of_constant_series_is_zero() {
    let series = make_series(&[100.0; 60]);
    let macd = calculate_macd_default(&series).unwrap();
    assert!(macd.macd.abs() < 1e-9);
    assert!(macd.signal.abs() < 1e-9);
    assert!(macd.histogram.abs() < 1e-9);
}

#[test]
fn macd_positive_in_uptrend() {
    let closes: Vec<f64> = (1..=60).map(|i| i as f64).collect();
    let macd = calculate_macd_default(&make_series(&closes)).unwrap();
    assert!(macd.macd > 0.0);
}

#[test]
fn macd_negative_in_downtrend() {
    let closes: Vec<f64> = (1..=60).map(|i| 200.0 - i as f64).collect();
    let macd = calculate_macd(&make_series(&closes), 12, 26, 9).unwrap();
    assert!(macd.macd < 0.0);
}
