//! Daily OHLCV observation for a single trading session.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily price bar.
///
/// The date is day-resolution (one bar per trading session). OHLC values
/// are positive, with `low <= open, close <= high`. Volume is carried
/// through for display but never used in computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    date: NaiveDate,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: u64,
}

impl PriceBar {
    /// Creates a new PriceBar.
    ///
    /// OHLC consistency is debug-asserted here; the hard validation gate
    /// (positive closes, ordered dates) lives in
    /// [`PriceSeries::new`](crate::series::PriceSeries::new).
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        debug_assert!(high >= low, "bar high must be >= low");
        debug_assert!(open >= low && open <= high, "bar open must be within [low, high]");
        debug_assert!(close >= low && close <= high, "bar close must be within [low, high]");

        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn open(&self) -> f64 {
        self.open
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn close(&self) -> f64 {
        self.close
    }

    pub fn volume(&self) -> u64 {
        self.volume
    }
}
