//! Unit tests for RSI indicator

use chrono::{DateTime, Duration};
use tickerlens::indicators::momentum::{calculate_rsi, calculate_rsi_default};
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
fn rsi_insufficient_data() {
    let closes: Vec<f64> = (1..=10).map(|i| 100.0 + i as f64).collect();
    assert!(calculate_rsi_default(&make_series(&closes)).is_none());
}

#[test]
fn rsi_present_at_exactly_minimum_length() {
    let closes: Vec<f64> = (1..=14).map(|i| 100.0 + i as f64).collect();
    let rsi = calculate_rsi_default(&make_series(&closes)).unwrap();
    assert_eq!(rsi.value, 100.0);
}

#[test]
fn rsi_saturates_at_100_for_pure_gains() {
    let closes: Vec<f64> = (1..=30).map(|i| 100.0 + i as f64).collect();
    let rsi = calculate_rsi_default(&make_series(&closes)).unwrap();
    assert_eq!(rsi.value, 100.0);
    assert_eq!(rsi.period, 14);
}

#[test]
fn rsi_is_bounded() {
    // Alternating +1/-1 moves: gains and losses balance out at 50.
    let closes: Vec<f64> = (0..40)
        .map(|i| if i % 2 == 0 { 100.0 } else { 101.0 })
        .collect();
    let rsi = calculate_rsi_default(&make_series(&closes)).unwrap();
    assert!((rsi.value - 50.0).abs() < 1e-9);
    assert!(rsi.value >= 0.0 && rsi.value <= 100.0);
}

#[test]
fn rsi_of_flat_series_is_absent() {
    let series = make_series(&[100.0; 30]);
    assert!(calculate_rsi_default(&series).is_none());
}

#[test]
fn rsi_low_for_pure_losses() {
    let closes: Vec<f64> = (1..=30).map(|i| 200.0 - i as f64).collect();
    let rsi = calculate_rsi(&make_series(&closes), 14).unwrap();
    assert_eq!(rsi.value, 0.0);
}
