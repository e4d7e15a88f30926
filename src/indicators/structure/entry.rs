//! Entry-level heuristic from recent swing structure

use crate::indicators::structure::pivots::{
    detect_pivots, recent_pivots, PivotKind, HALF_WINDOW, RECENT_WINDOW,
};
use crate::models::{PricePoint, WaveAnalysis, WavePattern};

/// Minimum series length before structure analysis is attempted.
pub const MIN_SAMPLES: usize = 50;

/// Classify market position and derive support, resistance and entry level.
///
/// Support is the lowest recent swing low, resistance the highest recent
/// swing high. When either side has no pivots, a synthetic level 5% away
/// from the current price stands in. Position is the price's fraction of
/// the support-resistance range; a degenerate range pins it to 0.5.
pub fn analyze_entry(
    recent_highs: &[f64],
    recent_lows: &[f64],
    current_price: f64,
) -> WaveAnalysis {
    let support = recent_lows
        .iter()
        .copied()
        .fold(f64::INFINITY, f64::min);
    let support = if support.is_finite() {
        support
    } else {
        current_price * 0.95
    };

    let resistance = recent_highs
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let resistance = if resistance.is_finite() {
        resistance
    } else {
        current_price * 1.05
    };

    let range = resistance - support;
    let position = if range > 0.0 {
        (current_price - support) / range
    } else {
        0.5
    };

    // First match wins. The last two branches share a formula on purpose:
    // both recommend the 50% retracement, they just label the wait
    // differently.
    let (pattern, entry_level) = if position < 0.3 {
        (WavePattern::NearSupport, support * 1.02)
    } else if position < 0.5 {
        (WavePattern::CorrectionZone, support + range * 0.382)
    } else if position > 0.7 {
        (WavePattern::NearResistance, support + range * 0.5)
    } else {
        (WavePattern::MidRange, support + range * 0.5)
    };

    WaveAnalysis {
        pattern,
        entry_level,
        support_level: support,
        resistance_level: resistance,
        current_position: position,
    }
}

/// Full structure pass: detect pivots, keep the recent ones, classify.
///
/// Returns `None` below [`MIN_SAMPLES`].
pub fn detect_wave_entry(series: &[PricePoint], current_price: f64) -> Option<WaveAnalysis> {
    if series.len() < MIN_SAMPLES {
        return None;
    }

    let closes: Vec<f64> = series.iter().map(|p| p.close).collect();
    let pivots = detect_pivots(&closes, HALF_WINDOW);
    let recent = recent_pivots(&pivots, closes.len(), RECENT_WINDOW);

    let highs: Vec<f64> = recent
        .iter()
        .filter(|p| p.kind == PivotKind::High)
        .map(|p| p.price)
        .collect();
    let lows: Vec<f64> = recent
        .iter()
        .filter(|p| p.kind == PivotKind::Low)
        .map(|p| p.price)
        .collect();

    Some(analyze_entry(&highs, &lows, current_price))
}
