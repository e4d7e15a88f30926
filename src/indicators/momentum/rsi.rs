//! RSI (Relative Strength Index) indicator

use crate::models::{PricePoint, RsiIndicator};

/// Calculate RSI over a trailing window.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// Averages are plain trailing means over the most recent `period`
/// close-to-close changes, not Wilder's smoothing.
pub fn calculate_rsi(series: &[PricePoint], period: u32) -> Option<RsiIndicator> {
    let period = period as usize;
    if period == 0 || series.len() < period {
        return None;
    }

    let mut gains = Vec::new();
    let mut losses = Vec::new();

    for i in 1..series.len() {
        let change = series[i].close - series[i - 1].close;
        if change > 0.0 {
            gains.push(change);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(change.abs());
        }
    }

    // A series of exactly `period` samples has period - 1 changes; average
    // whatever the window holds so the minimum-length contract stays at
    // `period` samples.
    let take = period.min(gains.len());
    if take == 0 {
        return None;
    }

    let avg_gain: f64 = gains.iter().rev().take(take).sum::<f64>() / take as f64;
    let avg_loss: f64 = losses.iter().rev().take(take).sum::<f64>() / take as f64;

    if avg_loss == 0.0 {
        // Pure gains saturate the oscillator. A window with no movement at
        // all has no defined momentum.
        if avg_gain == 0.0 {
            return None;
        }
        return Some(RsiIndicator {
            value: 100.0,
            period: period as u32,
        });
    }

    let rs = avg_gain / avg_loss;
    let rsi = 100.0 - (100.0 / (1.0 + rs));

    Some(RsiIndicator {
        value: rsi,
        period: period as u32,
    })
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(series: &[PricePoint]) -> Option<RsiIndicator> {
    calculate_rsi(series, 14)
}
