//! Bollinger Bands indicator

use crate::common::math;
use crate::models::{BollingerBandsIndicator, PricePoint};

/// Calculate Bollinger Bands.
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * sample standard deviation)
/// Lower Band = Middle - (std_dev * sample standard deviation)
pub fn calculate_bollinger_bands(
    series: &[PricePoint],
    period: u32,
    std_dev: f64,
) -> Option<BollingerBandsIndicator> {
    if series.len() < period as usize {
        return None;
    }

    let closes: Vec<f64> = series.iter().map(|p| p.close).collect();
    let middle = math::sma(&closes, period as usize)?;
    let std = math::standard_deviation(&closes, period as usize)?;

    let upper = middle + (std_dev * std);
    let lower = middle - (std_dev * std);

    Some(BollingerBandsIndicator {
        upper,
        middle,
        lower,
        period,
        std_dev,
    })
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(series: &[PricePoint]) -> Option<BollingerBandsIndicator> {
    calculate_bollinger_bands(series, 20, 2.0)
}
