//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::{MacdIndicator, PricePoint};

/// Calculate MACD over the full close history.
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal_period) of the MACD series
/// Histogram = MACD - Signal
///
/// EMAs are seeded with the first close and run over the entire series,
/// so the reported values converge with history length.
pub fn calculate_macd(
    series: &[PricePoint],
    fast_period: u32,
    slow_period: u32,
    signal_period: u32,
) -> Option<MacdIndicator> {
    if series.len() < slow_period as usize {
        return None;
    }

    let closes: Vec<f64> = series.iter().map(|p| p.close).collect();

    let fast_ema = math::ema_series(&closes, fast_period as usize);
    let slow_ema = math::ema_series(&closes, slow_period as usize);

    let macd_line: Vec<f64> = fast_ema
        .iter()
        .zip(slow_ema.iter())
        .map(|(fast, slow)| fast - slow)
        .collect();

    let signal_line = math::ema_series(&macd_line, signal_period as usize);

    let macd = *macd_line.last()?;
    let signal = *signal_line.last()?;
    let histogram = macd - signal;

    Some(MacdIndicator {
        macd,
        signal,
        histogram,
    })
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(series: &[PricePoint]) -> Option<MacdIndicator> {
    calculate_macd(series, 12, 26, 9)
}
