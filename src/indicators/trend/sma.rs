//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::models::{PricePoint, SmaIndicator};

/// Calculate the trailing SMA for a specific window.
///
/// Plain arithmetic mean of the last `period` closes, no weighting.
pub fn calculate_sma(series: &[PricePoint], period: u32) -> Option<SmaIndicator> {
    if series.len() < period as usize {
        return None;
    }

    let closes: Vec<f64> = series.iter().map(|p| p.close).collect();
    let value = math::sma(&closes, period as usize)?;

    Some(SmaIndicator { value, period })
}

/// Calculate the 50- and 200-day moving averages in one pass.
pub fn calculate_moving_averages(
    series: &[PricePoint],
) -> (Option<SmaIndicator>, Option<SmaIndicator>) {
    (calculate_sma(series, 50), calculate_sma(series, 200))
}
