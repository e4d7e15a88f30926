use serde::{Deserialize, Serialize};
use std::fmt;

/// Market position classification produced by the entry heuristic.
///
/// Serialized labels are part of the API contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavePattern {
    #[serde(rename = "Wave 2/4 Correction - Near Support")]
    NearSupport,
    #[serde(rename = "Correction Zone - Good Entry")]
    CorrectionZone,
    #[serde(rename = "Near Resistance - Wait for Pullback")]
    NearResistance,
    #[serde(rename = "Mid-Range - Wait for Confirmation")]
    MidRange,
}

impl WavePattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            WavePattern::NearSupport => "Wave 2/4 Correction - Near Support",
            WavePattern::CorrectionZone => "Correction Zone - Good Entry",
            WavePattern::NearResistance => "Near Resistance - Wait for Pullback",
            WavePattern::MidRange => "Mid-Range - Wait for Confirmation",
        }
    }
}

impl fmt::Display for WavePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmaIndicator {
    pub value: f64,
    pub period: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsiIndicator {
    pub value: f64,
    pub period: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BollingerBandsIndicator {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    pub period: u32,
    pub std_dev: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeSummary {
    pub avg_volume: f64,
    pub current_volume: f64,
    pub period: u32,
}

/// Support/resistance structure and entry recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveAnalysis {
    pub pattern: WavePattern,
    pub entry_level: f64,
    pub support_level: f64,
    pub resistance_level: f64,
    pub current_position: f64,
}

/// Aggregated technical indicator report for one price series.
///
/// Every field is independently nullable: an indicator that lacks enough
/// history serializes as an explicit `null`, never as a missing key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TechnicalReport {
    pub sma50: Option<f64>,
    pub sma200: Option<f64>,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub macd_histogram: Option<f64>,
    pub bb_upper: Option<f64>,
    pub bb_middle: Option<f64>,
    pub bb_lower: Option<f64>,
    pub avg_volume: Option<f64>,
    pub current_volume: Option<f64>,
    pub wave_pattern: Option<WavePattern>,
    pub entry_level: Option<f64>,
    pub support_level: Option<f64>,
    pub resistance_level: Option<f64>,
    pub current_position: Option<f64>,
}
