//! Technical indicators: EMA and RSI primitives plus the engine that
//! runs them over a price series.

pub mod ema;
pub mod engine;
pub mod rsi;

// Re-exports for convenience
pub use ema::ema_series;
pub use engine::{compute_indicators, EmaSeries, IndicatorConfig, IndicatorSeries};
pub use rsi::rsi_series;
