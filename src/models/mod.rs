//! Shared data models spanning the engine layers.

pub mod report;
pub mod sentiment;
pub mod series;

pub use report::{
    BollingerBandsIndicator, MacdIndicator, RsiIndicator, SmaIndicator, TechnicalReport,
    VolumeSummary, WaveAnalysis, WavePattern,
};
pub use sentiment::{SentimentRating, SentimentReport, VixTrend};
pub use series::PricePoint;
