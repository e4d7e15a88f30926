use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One sample of an instrument's price history.
///
/// Volume is optional: some data sources omit it entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

impl PricePoint {
    pub fn new(timestamp: DateTime<Utc>, close: f64, volume: Option<f64>) -> Self {
        Self {
            timestamp,
            close,
            volume,
        }
    }
}
