//! Lookback range for a data-provider fetch.

use serde::Serialize;

/// How far back a provider should fetch daily bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum TimeRange {
    /// Trailing six months (180 days).
    #[default]
    SixMonths,
    /// From January 1st of the current year.
    YearToDate,
    /// Everything the provider has.
    Max,
}

impl TimeRange {
    /// Returns the conventional short name used by price APIs.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::SixMonths => "6mo",
            TimeRange::YearToDate => "ytd",
            TimeRange::Max => "max",
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
