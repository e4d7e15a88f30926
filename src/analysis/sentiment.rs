//! VIX-based fear/greed classification.

use crate::models::{SentimentRating, SentimentReport, VixTrend};

pub const SENTIMENT_SOURCE: &str = "VIX (Volatility Index)";

/// Map recent VIX closes onto a 0-100 fear/greed score.
///
/// The VIX trades inversely to sentiment: a low reading means complacency
/// (greed), a high reading means panic (fear). Bands, first match wins:
/// <12 extreme greed, <15 greed, <17 neutral, <20 fear, otherwise extreme
/// fear. Trend compares the two most recent closes.
pub fn classify_sentiment(vix_closes: &[f64]) -> Option<SentimentReport> {
    let current = *vix_closes.last()?;
    let previous = if vix_closes.len() > 1 {
        vix_closes[vix_closes.len() - 2]
    } else {
        current
    };

    if !current.is_finite() || !previous.is_finite() {
        return None;
    }

    let (score, rating) = if current < 12.0 {
        (85, SentimentRating::ExtremeGreed)
    } else if current < 15.0 {
        (65, SentimentRating::Greed)
    } else if current < 17.0 {
        (50, SentimentRating::Neutral)
    } else if current < 20.0 {
        (38, SentimentRating::Fear)
    } else if current < 30.0 {
        (20, SentimentRating::ExtremeFear)
    } else {
        (10, SentimentRating::ExtremeFear)
    };

    // Falling VIX = rising greed.
    let trend = if current < previous {
        VixTrend::Increasing
    } else if current > previous {
        VixTrend::Decreasing
    } else {
        VixTrend::Neutral
    };

    Some(SentimentReport {
        score,
        rating,
        vix: current,
        previous_vix: previous,
        trend,
        source: SENTIMENT_SOURCE.to_string(),
    })
}
