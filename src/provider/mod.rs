//! Data-provider boundary.
//!
//! The core never fetches prices itself; it consumes a [`PriceSeries`]
//! from whatever implements [`SeriesProvider`]. Network providers live
//! outside this crate — the shipped [`FixtureProvider`] serves tests
//! and demos from in-memory data.

pub mod fixture;

// Re-exports for convenience
pub use fixture::FixtureProvider;

use crate::error::ProviderError;
use crate::series::{PriceSeries, TimeRange};

/// A source of daily price series for one symbol at a time.
///
/// Implementations handle their own transport, retries and rate limits;
/// the core only sees the final validated series or a
/// [`ProviderError`]. An empty result cannot reach the core at all,
/// because `PriceSeries` construction rejects it.
pub trait SeriesProvider {
    /// Human-readable provider name, for logs and error context.
    fn name(&self) -> &'static str;

    /// Fetches the daily series for `symbol` over `range`.
    fn fetch_series(&self, symbol: &str, range: TimeRange) -> Result<PriceSeries, ProviderError>;
}
