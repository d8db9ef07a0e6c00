//! EMA crossover detection.
//!
//! For each monitored pair the detector tracks the sign of
//! `fast - other` bar by bar and emits one event whenever the sign
//! flips to the opposite strict side. Exact-zero differences carry no
//! sign: a fast EMA sitting exactly on the other EMA is not a crossing
//! point, and the cross is recognized at the first bar where the sign
//! is strictly established on the new side. This keeps equality
//! artifacts from producing double events, and it makes directions
//! strictly alternate per pair.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::error::SignalError;
use crate::indicators::IndicatorSeries;

/// A monitored EMA pair, identified by span. `fast` is the quicker
/// span whose side of `other` defines the event direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EmaPair {
    pub fast: usize,
    pub other: usize,
}

impl EmaPair {
    pub fn new(fast: usize, other: usize) -> Self {
        Self { fast, other }
    }
}

impl std::fmt::Display for EmaPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.fast, self.other)
    }
}

/// Which way the fast EMA crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    /// Fast EMA moved from below to above.
    Up,
    /// Fast EMA moved from above to below.
    Down,
}

/// A detected crossover, with value snapshots for display and audit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossoverEvent {
    pub date: NaiveDate,
    pub pair: EmaPair,
    pub direction: Direction,
    pub price_at_event: f64,
    pub fast_value: f64,
    pub other_value: f64,
}

/// Scans the indicator series for crossovers on each monitored pair.
///
/// Events are returned ascending by date; same-day events across pairs
/// keep the order of the `pairs` slice, so the pair list doubles as the
/// tie-break priority. Fails with [`SignalError::InvalidInput`] when a
/// pair names a span the series does not carry.
pub fn detect_crossovers(
    indicators: &IndicatorSeries,
    pairs: &[EmaPair],
) -> Result<Vec<CrossoverEvent>, SignalError> {
    let mut scanners = Vec::with_capacity(pairs.len());
    for &pair in pairs {
        let fast = lookup_ema(indicators, pair.fast)?;
        let other = lookup_ema(indicators, pair.other)?;
        scanners.push(PairScanner::new(pair, fast, other));
    }

    let mut events = Vec::new();
    for i in 0..indicators.len() {
        for scanner in &mut scanners {
            if let Some((pair, direction)) = scanner.advance(i) {
                events.push(CrossoverEvent {
                    date: indicators.dates()[i],
                    pair,
                    direction,
                    price_at_event: indicators.closes()[i],
                    fast_value: scanner.fast[i],
                    other_value: scanner.other[i],
                });
            }
        }
    }

    debug!(pairs = pairs.len(), events = events.len(), "detected crossovers");
    Ok(events)
}

/// Returns the `k` most recent events, most recent first.
///
/// This is exactly the ascending tail of length <= `k`, reversed — a
/// separate display-side step, deliberately not baked into detection.
pub fn last_n(events: &[CrossoverEvent], k: usize) -> Vec<CrossoverEvent> {
    let tail_start = events.len().saturating_sub(k);
    events[tail_start..].iter().rev().cloned().collect()
}

fn lookup_ema<'a>(
    indicators: &'a IndicatorSeries,
    span: usize,
) -> Result<&'a [f64], SignalError> {
    indicators.ema(span).ok_or_else(|| {
        SignalError::InvalidInput(format!("EMA span {span} was not computed for this series"))
    })
}

/// Per-pair sign tracker.
struct PairScanner<'a> {
    pair: EmaPair,
    fast: &'a [f64],
    other: &'a [f64],
    // Established side: +1 / -1 after a strict sign, 0 while the pair
    // has been flat since the start of the series.
    side: i8,
}

impl<'a> PairScanner<'a> {
    fn new(pair: EmaPair, fast: &'a [f64], other: &'a [f64]) -> Self {
        Self {
            pair,
            fast,
            other,
            side: 0,
        }
    }

    fn advance(&mut self, i: usize) -> Option<(EmaPair, Direction)> {
        let diff = self.fast[i] - self.other[i];
        let sign: i8 = if diff > 0.0 {
            1
        } else if diff < 0.0 {
            -1
        } else {
            // Exactly on the line: no sign, established side unchanged
            return None;
        };

        if i == 0 {
            // First bar has no prior bar to cross from
            self.side = sign;
            return None;
        }

        if sign == self.side {
            return None;
        }
        self.side = sign;

        let direction = if sign > 0 { Direction::Up } else { Direction::Down };
        Some((self.pair, direction))
    }
}
