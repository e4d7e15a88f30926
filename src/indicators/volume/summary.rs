//! Trailing volume summary

use crate::models::{PricePoint, VolumeSummary};

/// Summarize trailing average volume against the most recent volume.
///
/// Requires every sample in the trailing window to carry a volume; series
/// from sources that do not report volume produce no summary.
pub fn calculate_volume_summary(series: &[PricePoint], period: u32) -> Option<VolumeSummary> {
    let period = period as usize;
    if period == 0 || series.len() < period {
        return None;
    }

    let window = &series[series.len() - period..];
    let volumes: Option<Vec<f64>> = window.iter().map(|p| p.volume).collect();
    let volumes = volumes?;

    let avg_volume = volumes.iter().sum::<f64>() / period as f64;
    let current_volume = *volumes.last()?;

    Some(VolumeSummary {
        avg_volume,
        current_volume,
        period: period as u32,
    })
}

/// Calculate the volume summary with default window (20)
pub fn calculate_volume_summary_default(series: &[PricePoint]) -> Option<VolumeSummary> {
    calculate_volume_summary(series, 20)
}
