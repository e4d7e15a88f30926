//! Series guard applied before any indicator runs.

use crate::indicators::error::IndicatorError;
use crate::models::PricePoint;

/// Check that a price series is well-formed.
///
/// Timestamps must be strictly ascending (duplicates rejected) and every
/// close finite. The series is checked, never repaired; an empty series is
/// valid and simply yields an all-null report downstream.
pub fn validate_series(series: &[PricePoint], current_price: f64) -> Result<(), IndicatorError> {
    if !current_price.is_finite() {
        return Err(IndicatorError::NonFiniteCurrentPrice);
    }

    for (index, point) in series.iter().enumerate() {
        if !point.close.is_finite() {
            return Err(IndicatorError::NonFiniteClose { index });
        }
        if index > 0 && point.timestamp <= series[index - 1].timestamp {
            return Err(IndicatorError::OutOfOrderSeries { index });
        }
    }

    Ok(())
}
