//! Unit tests for the volume summary

use chrono::{DateTime, Duration};
use tickerlens::indicators::volume::{calculate_volume_summary, calculate_volume_summary_default};
use tickerlens::models::PricePoint;

fn make_series(volumes: &[Option<f64>]) -> Vec<PricePoint> {
    let start = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
    volumes
        .iter()
        .enumerate()
        .map(|(i, &volume)| PricePoint::new(start + Duration::days(i as i64), 100.0, volume))
        .collect()
}

#[test]
fn summary_insufficient_data() {
    let series = make_series(&[Some(1000.0); 19]);
    assert!(calculate_volume_summary_default(&series).is_none());
}

#[test]
fn summary_averages_trailing_window() {
    let volumes: Vec<Option<f64>> = (1..=20).map(|i| Some(i as f64 * 100.0)).collect();
    let summary = calculate_volume_summary_default(&make_series(&volumes)).unwrap();
    assert_eq!(summary.avg_volume, 1050.0);
    assert_eq!(summary.current_volume, 2000.0);
    assert_eq!(summary.period, 20);
}

#[test]
fn summary_absent_when_volume_missing_in_window() {
    let mut volumes = vec![Some(1000.0); 20];
    volumes[10] = None;
    assert!(calculate_volume_summary_default(&make_series(&volumes)).is_none());
}

#[test]
fn summary_ignores_missing_volume_outside_window() {
    let mut volumes = vec![Some(1000.0); 25];
    volumes[0] = None;
    let summary = calculate_volume_summary(&make_series(&volumes), 20).unwrap();
    assert_eq!(summary.avg_volume, 1000.0);
}
