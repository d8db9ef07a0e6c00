//! Price series types: the input side of the signal core.

pub mod price_bar;
pub mod price_series;
pub mod time_range;

// Re-exports for convenience
pub use price_bar::PriceBar;
pub use price_series::PriceSeries;
pub use time_range::TimeRange;
