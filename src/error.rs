//! Error types for the signal core and the data-provider boundary.

use thiserror::Error;

/// Errors produced by the signal core.
///
/// Undefined per-value signals (an RSI with insufficient history, or a
/// flat window where gain and loss are both zero) are NOT errors: they
/// are carried in-band as `None` so the rest of the series stays usable.
/// The core never substitutes a default number for a missing signal.
#[derive(Debug, Error)]
pub enum SignalError {
    /// Empty or malformed input series, or an invalid configuration.
    /// Fatal to the call; never retried.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Upstream provider failure, surfaced unchanged to the caller.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Errors from a [`SeriesProvider`](crate::provider::SeriesProvider).
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider does not know the requested symbol.
    #[error("unknown symbol: {0}")]
    NotFound(String),

    /// Transient provider-side failure. The core does not retry.
    #[error("provider unavailable: {0}")]
    Unavailable(#[source] anyhow::Error),
}
