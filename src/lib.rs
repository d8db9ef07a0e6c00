//! EMA crossover signal core.
//!
//! Computes exponential moving averages, RSI and EMA crossover events
//! from a daily price series, plus a "last N events" summary for
//! display. The pipeline is pure and synchronous: a provider hands in a
//! validated [`PriceSeries`], [`analyze`] hands back a serializable
//! [`AnalysisReport`], and everything else (fetching, charting, widget
//! state) stays outside the crate.

pub mod error;
pub mod indicators;
pub mod provider;
pub mod report;
pub mod series;
pub mod signals;

// Re-exports for convenience
pub use error::{ProviderError, SignalError};
pub use indicators::{compute_indicators, IndicatorConfig, IndicatorSeries};
pub use provider::{FixtureProvider, SeriesProvider};
pub use report::{analyze, analyze_symbol, AnalysisConfig, AnalysisReport};
pub use series::{PriceBar, PriceSeries, TimeRange};
pub use signals::{detect_crossovers, last_n, CrossoverEvent, Direction, EmaPair};
