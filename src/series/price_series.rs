//! Validated, immutable daily price series.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::SignalError;
use crate::series::price_bar::PriceBar;

/// An ordered sequence of [`PriceBar`]s, ascending by date.
///
/// Construction is the single validation gate for the signal core:
/// a `PriceSeries` is never empty, dates are strictly increasing and
/// every close is positive. Downstream computation relies on these
/// invariants and does not re-check them.
#[derive(Debug, Clone, Serialize)]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Validates and wraps a bar sequence.
    ///
    /// Fails with [`SignalError::InvalidInput`] when the input is empty,
    /// dates are not strictly increasing, or any close is non-positive.
    pub fn new(bars: Vec<PriceBar>) -> Result<Self, SignalError> {
        if bars.is_empty() {
            return Err(SignalError::InvalidInput("price series is empty".to_string()));
        }

        for pair in bars.windows(2) {
            if pair[1].date() <= pair[0].date() {
                return Err(SignalError::InvalidInput(format!(
                    "dates must be strictly increasing: {} followed by {}",
                    pair[0].date(),
                    pair[1].date(),
                )));
            }
        }

        for bar in &bars {
            if bar.close() <= 0.0 {
                return Err(SignalError::InvalidInput(format!(
                    "non-positive close {} at {}",
                    bar.close(),
                    bar.date(),
                )));
            }
        }

        Ok(Self { bars })
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Always false: an empty series cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    /// Closing prices in series order.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close()).collect()
    }

    /// Bar dates in series order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|b| b.date()).collect()
    }

    pub fn first(&self) -> &PriceBar {
        &self.bars[0]
    }

    pub fn last(&self) -> &PriceBar {
        &self.bars[self.bars.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn flat_bar(d: u32, close: f64) -> PriceBar {
        PriceBar::new(day(d), close, close, close, close, 1000)
    }

    #[test]
    fn test_valid_series() {
        let series = PriceSeries::new(vec![flat_bar(1, 10.0), flat_bar(2, 11.0)]).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.closes(), vec![10.0, 11.0]);
        assert_eq!(series.first().date(), day(1));
        assert_eq!(series.last().date(), day(2));
    }

    #[test]
    fn test_empty_series_rejected() {
        let result = PriceSeries::new(Vec::new());
        assert!(matches!(result, Err(SignalError::InvalidInput(_))));
    }

    #[test]
    fn test_unsorted_dates_rejected() {
        let result = PriceSeries::new(vec![flat_bar(2, 10.0), flat_bar(1, 11.0)]);
        assert!(matches!(result, Err(SignalError::InvalidInput(_))));
    }

    #[test]
    fn test_duplicate_dates_rejected() {
        let result = PriceSeries::new(vec![flat_bar(1, 10.0), flat_bar(1, 11.0)]);
        assert!(matches!(result, Err(SignalError::InvalidInput(_))));
    }

    #[test]
    fn test_non_positive_close_rejected() {
        // Bypass the OHLC debug-asserts with a degenerate all-zero bar
        let bar = PriceBar::new(day(1), 0.0, 0.0, 0.0, 0.0, 0);
        let result = PriceSeries::new(vec![bar]);
        assert!(matches!(result, Err(SignalError::InvalidInput(_))));
    }

    #[test]
    fn test_single_bar_series_is_valid() {
        let series = PriceSeries::new(vec![flat_bar(1, 42.0)]).unwrap();
        assert_eq!(series.len(), 1);
        assert!(!series.is_empty());
    }
}
