//! Thin orchestration over the engine and detector.
//!
//! The original tooling interleaved computation with widget calls; here
//! the pipeline is two pure functions plus this layer, which returns a
//! display-agnostic, serializable report. Presentation owns all widget
//! state; the core owns none.

use serde::Serialize;
use tracing::debug;

use crate::error::SignalError;
use crate::indicators::{compute_indicators, IndicatorConfig, IndicatorSeries};
use crate::provider::SeriesProvider;
use crate::series::{PriceSeries, TimeRange};
use crate::signals::{detect_crossovers, last_n, CrossoverEvent, EmaPair};

const DEFAULT_RECENT_EVENTS: usize = 5;

/// Full analysis configuration: indicators, monitored pairs and the
/// size of the recent-events summary.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisConfig {
    pub indicators: IndicatorConfig,
    /// Monitored pairs in priority order (earlier wins same-day ties).
    pub pairs: Vec<EmaPair>,
    /// How many events the `recent` view keeps.
    pub recent_events: usize,
}

impl AnalysisConfig {
    /// Pairs the first (fastest) span against each remaining span, in
    /// span order — for 5/8/13 that is 5x8 then 5x13.
    pub fn pairs_from_spans(spans: &[usize]) -> Vec<EmaPair> {
        match spans.split_first() {
            Some((&fast, rest)) => rest.iter().map(|&other| EmaPair::new(fast, other)).collect(),
            None => Vec::new(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        let indicators = IndicatorConfig::default();
        let pairs = Self::pairs_from_spans(indicators.ema_spans());
        Self {
            indicators,
            pairs,
            recent_events: DEFAULT_RECENT_EVENTS,
        }
    }
}

/// Everything a presentation layer needs to draw the analysis:
/// aligned indicator series, the full chronological event list and the
/// most-recent-first summary.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub indicators: IndicatorSeries,
    pub events: Vec<CrossoverEvent>,
    pub recent: Vec<CrossoverEvent>,
}

/// Runs the full pipeline over an already-fetched series.
pub fn analyze(series: &PriceSeries, config: &AnalysisConfig) -> Result<AnalysisReport, SignalError> {
    let indicators = compute_indicators(series, &config.indicators)?;
    let events = detect_crossovers(&indicators, &config.pairs)?;
    let recent = last_n(&events, config.recent_events);

    Ok(AnalysisReport {
        indicators,
        events,
        recent,
    })
}

/// Fetches a symbol through the provider boundary and analyzes it.
///
/// Provider errors surface unchanged; the core adds no retries.
pub fn analyze_symbol(
    provider: &impl SeriesProvider,
    symbol: &str,
    range: TimeRange,
    config: &AnalysisConfig,
) -> Result<AnalysisReport, SignalError> {
    debug!(provider = provider.name(), symbol, %range, "fetching series");
    let series = provider.fetch_series(symbol, range)?;
    analyze(&series, config)
}
