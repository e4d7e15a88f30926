//! Rolling-window and exponential-average math primitives.

/// Trailing simple moving average over the last `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    Some(window.iter().sum::<f64>() / period as f64)
}

/// Full exponential moving average series.
///
/// Recursive definition with smoothing factor alpha = 2 / (span + 1),
/// seeded by the first value (not an SMA seed).
pub fn ema_series(values: &[f64], span: usize) -> Vec<f64> {
    if values.is_empty() || span == 0 {
        return Vec::new();
    }
    let alpha = 2.0 / (span as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut current = values[0];
    out.push(current);
    for &value in &values[1..] {
        current = alpha * value + (1.0 - alpha) * current;
        out.push(current);
    }
    out
}

/// Latest value of the exponential moving average over `values`.
pub fn ema(values: &[f64], span: usize) -> Option<f64> {
    ema_series(values, span).last().copied()
}

/// Trailing sample standard deviation over the last `period` values.
pub fn standard_deviation(values: &[f64], period: usize) -> Option<f64> {
    if period < 2 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    let mean = window.iter().sum::<f64>() / period as f64;
    let variance =
        window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (period as f64 - 1.0);
    Some(variance.sqrt())
}

/// Coerce a possibly-degenerate intermediate into an optional finite value.
///
/// NaN and infinities become `None`; reports never carry non-finite numbers.
pub fn to_finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
