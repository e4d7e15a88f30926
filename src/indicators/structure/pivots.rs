//! Swing pivot detection

/// Half-width of the symmetric comparison window around a candidate pivot.
pub const HALF_WINDOW: usize = 5;

/// Number of trailing samples whose pivots count as "recent".
pub const RECENT_WINDOW: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotKind {
    High,
    Low,
}

/// A local price extremum relative to its neighboring window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pivot {
    pub index: usize,
    pub price: f64,
    pub kind: PivotKind,
}

/// Scan for swing highs and lows.
///
/// An index is a pivot when its close equals the max (high) or min (low) of
/// the 2 * half_window + 1 closes centered on it. Equality is deliberate:
/// a plateau of equal closes registers every one of its bars as a pivot,
/// and a bar that is both window max and window min records both kinds.
/// The first and last `half_window` bars are never candidates.
pub fn detect_pivots(closes: &[f64], half_window: usize) -> Vec<Pivot> {
    let mut pivots = Vec::new();
    if closes.len() < 2 * half_window + 1 {
        return pivots;
    }

    for i in half_window..closes.len() - half_window {
        let window = &closes[i - half_window..=i + half_window];
        let max = window.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = window.iter().copied().fold(f64::INFINITY, f64::min);

        if closes[i] == max {
            pivots.push(Pivot {
                index: i,
                price: closes[i],
                kind: PivotKind::High,
            });
        }
        if closes[i] == min {
            pivots.push(Pivot {
                index: i,
                price: closes[i],
                kind: PivotKind::Low,
            });
        }
    }

    pivots
}

/// Keep only pivots within the most recent `recent_window` samples.
pub fn recent_pivots(pivots: &[Pivot], series_len: usize, recent_window: usize) -> Vec<Pivot> {
    let cutoff = series_len.saturating_sub(recent_window);
    pivots
        .iter()
        .copied()
        .filter(|pivot| pivot.index >= cutoff)
        .collect()
}
