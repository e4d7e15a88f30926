use serde::{Deserialize, Serialize};

/// Fear & Greed rating derived from the VIX level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentRating {
    #[serde(rename = "Extreme Greed")]
    ExtremeGreed,
    Greed,
    Neutral,
    Fear,
    #[serde(rename = "Extreme Fear")]
    ExtremeFear,
}

/// Direction of the sentiment between the two most recent VIX closes.
///
/// VIX moves inversely to greed: a falling VIX means greed is increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VixTrend {
    Increasing,
    Decreasing,
    Neutral,
}

/// Market sentiment snapshot on a 0-100 fear/greed scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentReport {
    pub score: u8,
    pub rating: SentimentRating,
    pub vix: f64,
    pub previous_vix: f64,
    pub trend: VixTrend,
    pub source: String,
}
