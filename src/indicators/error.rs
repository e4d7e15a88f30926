//! Engine error taxonomy.
//!
//! Indicators that merely lack history return `None`; only malformed input
//! that escapes the series guard is an error, and it aborts the whole report.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IndicatorError {
    #[error("series timestamps not strictly ascending at index {index}")]
    OutOfOrderSeries { index: usize },

    #[error("non-finite close value at index {index}")]
    NonFiniteClose { index: usize },

    #[error("current price is not finite")]
    NonFiniteCurrentPrice,
}
