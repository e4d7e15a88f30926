//! Report aggregation and sentiment classification.

pub mod engine;
pub mod sentiment;

pub use engine::compute_technical_report;
pub use sentiment::{classify_sentiment, SENTIMENT_SOURCE};
