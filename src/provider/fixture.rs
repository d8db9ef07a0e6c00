//! In-memory provider backed by preloaded bars.

use std::collections::HashMap;

use anyhow::Context;
use chrono::{Datelike, Days, NaiveDate};

use crate::error::ProviderError;
use crate::provider::SeriesProvider;
use crate::series::{PriceBar, PriceSeries, TimeRange};

/// A [`SeriesProvider`] that serves preloaded daily bars.
///
/// Range filtering is deterministic: it is anchored to the LAST bar of
/// the stored history, not the wall clock, so the same fixture always
/// produces the same series.
#[derive(Debug, Default)]
pub struct FixtureProvider {
    series: HashMap<String, Vec<PriceBar>>,
}

impl FixtureProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the full bar history for a symbol.
    pub fn insert(&mut self, symbol: impl Into<String>, bars: Vec<PriceBar>) {
        self.series.insert(symbol.into(), bars);
    }

    fn range_start(last: NaiveDate, range: TimeRange) -> Option<NaiveDate> {
        match range {
            TimeRange::SixMonths => last.checked_sub_days(Days::new(180)),
            TimeRange::YearToDate => NaiveDate::from_ymd_opt(last.year(), 1, 1),
            TimeRange::Max => None,
        }
    }
}

impl SeriesProvider for FixtureProvider {
    fn name(&self) -> &'static str {
        "fixture"
    }

    fn fetch_series(&self, symbol: &str, range: TimeRange) -> Result<PriceSeries, ProviderError> {
        let bars = self
            .series
            .get(symbol)
            .ok_or_else(|| ProviderError::NotFound(symbol.to_string()))?;

        let filtered: Vec<PriceBar> = match bars.last().and_then(|b| Self::range_start(b.date(), range)) {
            Some(start) => bars.iter().filter(|b| b.date() >= start).copied().collect(),
            None => bars.clone(),
        };

        PriceSeries::new(filtered)
            .with_context(|| format!("fixture data for {symbol} over {range} is unusable"))
            .map_err(ProviderError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(date: NaiveDate, close: f64) -> PriceBar {
        PriceBar::new(date, close, close, close, close, 100)
    }

    fn daily_history(start: NaiveDate, days: u64) -> Vec<PriceBar> {
        (0..days)
            .map(|i| bar(start + Days::new(i), 100.0 + i as f64))
            .collect()
    }

    #[test]
    fn test_unknown_symbol_is_not_found() {
        let provider = FixtureProvider::new();
        let result = provider.fetch_series("ZZZZ", TimeRange::Max);
        assert!(matches!(result, Err(ProviderError::NotFound(_))));
    }

    #[test]
    fn test_max_returns_everything() {
        let mut provider = FixtureProvider::new();
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        provider.insert("AAPL", daily_history(start, 400));

        let series = provider.fetch_series("AAPL", TimeRange::Max).unwrap();
        assert_eq!(series.len(), 400);
    }

    #[test]
    fn test_six_months_is_trailing_180_days() {
        let mut provider = FixtureProvider::new();
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        provider.insert("AAPL", daily_history(start, 400));

        let series = provider.fetch_series("AAPL", TimeRange::SixMonths).unwrap();
        // Last date plus the 180 days before it
        assert_eq!(series.len(), 181);
        let last = start + Days::new(399);
        assert_eq!(series.last().date(), last);
        assert_eq!(series.first().date(), last - Days::new(180));
    }

    #[test]
    fn test_year_to_date_starts_january_first() {
        let mut provider = FixtureProvider::new();
        // 2023-11-01 plus 120 days ends 2024-02-29 (leap year)
        let start = NaiveDate::from_ymd_opt(2023, 11, 1).unwrap();
        provider.insert("MSFT", daily_history(start, 121));

        let series = provider.fetch_series("MSFT", TimeRange::YearToDate).unwrap();
        assert_eq!(series.first().date(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(series.last().date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_empty_fixture_surfaces_unavailable() {
        let mut provider = FixtureProvider::new();
        provider.insert("HOLLOW", Vec::new());

        let result = provider.fetch_series("HOLLOW", TimeRange::Max);
        assert!(matches!(result, Err(ProviderError::Unavailable(_))));
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(FixtureProvider::new().name(), "fixture");
    }
}
