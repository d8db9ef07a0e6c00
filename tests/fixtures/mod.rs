#![allow(dead_code)]

use chrono::NaiveDate;
use ema_cross::{PriceBar, PriceSeries};
use serde::Deserialize;

/// One row of the daily CSV fixture.
#[derive(Debug, Deserialize)]
struct CsvBar {
    date: NaiveDate,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: u64,
}

const DAILY_PATH: &str = "tests/fixtures/data/daily.csv";

/// Loads the daily reference series (40 weekday bars, a slow wave with
/// several EMA crossings).
pub fn load_daily_series() -> PriceSeries {
    let mut rdr = csv::Reader::from_path(DAILY_PATH)
        .unwrap_or_else(|e| panic!("failed to open {DAILY_PATH}: {e}"));

    let bars: Vec<PriceBar> = rdr
        .deserialize()
        .map(|row| {
            let b: CsvBar = row.expect("invalid fixture record");
            PriceBar::new(b.date, b.open, b.high, b.low, b.close, b.volume)
        })
        .collect();

    PriceSeries::new(bars).expect("fixture series must validate")
}

/// Builds a flat-OHLC series from closes, one weekday-agnostic bar per
/// calendar day starting at `start`.
pub fn series_from_closes(start: NaiveDate, closes: &[f64]) -> PriceSeries {
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let date = start + chrono::Days::new(i as u64);
            PriceBar::new(date, c, c, c, c, 1000)
        })
        .collect();
    PriceSeries::new(bars).expect("test series must validate")
}
