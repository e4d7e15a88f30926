//! Technical report pipeline.
//!
//! One validated series fans out to every indicator; each indicator decides
//! independently whether it has enough history. Results merge into a single
//! [`TechnicalReport`] with per-field nulls, so a 30-day series still gets
//! its RSI and Bollinger Bands while the 200-day average stays null.

use crate::common::math::to_finite;
use crate::indicators::error::IndicatorError;
use crate::indicators::validation::validate_series;
use crate::indicators::{momentum, structure, trend, volatility, volume};
use crate::models::{PricePoint, TechnicalReport};

/// Compute the full indicator report for a price series.
///
/// Malformed input is the only error path; insufficient history for any
/// individual indicator leaves that field null and the rest intact. Every
/// numeric crossing into the report passes through [`to_finite`].
pub fn compute_technical_report(
    series: &[PricePoint],
    current_price: f64,
) -> Result<TechnicalReport, IndicatorError> {
    validate_series(series, current_price)?;

    let mut report = TechnicalReport::default();

    let (sma50, sma200) = trend::calculate_moving_averages(series);
    report.sma50 = sma50.and_then(|s| to_finite(s.value));
    report.sma200 = sma200.and_then(|s| to_finite(s.value));

    report.rsi = momentum::calculate_rsi_default(series).and_then(|r| to_finite(r.value));

    if let Some(macd) = momentum::calculate_macd_default(series) {
        report.macd = to_finite(macd.macd);
        report.macd_signal = to_finite(macd.signal);
        report.macd_histogram = to_finite(macd.histogram);
    }

    if let Some(bands) = volatility::calculate_bollinger_bands_default(series) {
        report.bb_upper = to_finite(bands.upper);
        report.bb_middle = to_finite(bands.middle);
        report.bb_lower = to_finite(bands.lower);
    }

    if let Some(summary) = volume::calculate_volume_summary_default(series) {
        report.avg_volume = to_finite(summary.avg_volume);
        report.current_volume = to_finite(summary.current_volume);
    }

    if let Some(wave) = structure::detect_wave_entry(series, current_price) {
        report.wave_pattern = Some(wave.pattern);
        report.entry_level = to_finite(wave.entry_level);
        report.support_level = to_finite(wave.support_level);
        report.resistance_level = to_finite(wave.resistance_level);
        report.current_position = to_finite(wave.current_position);
    }

    Ok(report)
}
