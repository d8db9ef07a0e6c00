//! Indicator Engine: EMAs plus RSI over a validated price series.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::error::SignalError;
use crate::indicators::ema::ema_series;
use crate::indicators::rsi::rsi_series;
use crate::series::PriceSeries;

const DEFAULT_EMA_SPANS: [usize; 3] = [5, 8, 13];
const DEFAULT_RSI_WINDOW: usize = 14;

/// Which indicators to compute.
///
/// The span list is ordered fastest-first; any number of spans is
/// accepted, the classic 5/8/13 set is only the default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndicatorConfig {
    ema_spans: Vec<usize>,
    rsi_window: usize,
}

impl IndicatorConfig {
    /// Validates a custom configuration.
    ///
    /// Fails with [`SignalError::InvalidInput`] when the span list is
    /// empty, contains a zero or duplicate span, or the RSI window is
    /// zero.
    pub fn new(ema_spans: Vec<usize>, rsi_window: usize) -> Result<Self, SignalError> {
        if ema_spans.is_empty() {
            return Err(SignalError::InvalidInput("EMA span list is empty".to_string()));
        }
        if rsi_window == 0 {
            return Err(SignalError::InvalidInput("RSI window must be >= 1".to_string()));
        }
        for (i, &span) in ema_spans.iter().enumerate() {
            if span == 0 {
                return Err(SignalError::InvalidInput("EMA span must be >= 1".to_string()));
            }
            if ema_spans[..i].contains(&span) {
                return Err(SignalError::InvalidInput(format!("duplicate EMA span {span}")));
            }
        }

        Ok(Self { ema_spans, rsi_window })
    }

    pub fn ema_spans(&self) -> &[usize] {
        &self.ema_spans
    }

    pub fn rsi_window(&self) -> usize {
        self.rsi_window
    }
}

impl Default for IndicatorConfig {
    /// The 5-8-13 swing-trading setup with a 14-day RSI.
    fn default() -> Self {
        Self {
            ema_spans: DEFAULT_EMA_SPANS.to_vec(),
            rsi_window: DEFAULT_RSI_WINDOW,
        }
    }
}

/// One resolved EMA series.
#[derive(Debug, Clone, Serialize)]
pub struct EmaSeries {
    span: usize,
    values: Vec<f64>,
}

impl EmaSeries {
    pub fn span(&self) -> usize {
        self.span
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Indicator values aligned 1:1 with the input series.
///
/// Dates and closes are carried along so downstream consumers (the
/// crossover detector, a chart) never need the original series to line
/// values up. Every EMA value is defined; RSI is `None` until `window`
/// price changes exist, and `None` again for fully flat windows.
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorSeries {
    dates: Vec<NaiveDate>,
    closes: Vec<f64>,
    emas: Vec<EmaSeries>,
    rsi: Vec<Option<f64>>,
    rsi_window: usize,
}

impl IndicatorSeries {
    /// Number of bars; equals the input series length.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    /// All computed EMA series, in configured span order.
    pub fn emas(&self) -> &[EmaSeries] {
        &self.emas
    }

    /// The EMA series for a specific span, if it was requested.
    pub fn ema(&self, span: usize) -> Option<&[f64]> {
        self.emas
            .iter()
            .find(|e| e.span == span)
            .map(|e| e.values.as_slice())
    }

    pub fn rsi(&self) -> &[Option<f64>] {
        &self.rsi
    }

    pub fn rsi_window(&self) -> usize {
        self.rsi_window
    }
}

/// Computes every configured EMA plus the RSI for the series.
///
/// Pure and deterministic: the same input yields bit-identical output.
pub fn compute_indicators(
    series: &PriceSeries,
    config: &IndicatorConfig,
) -> Result<IndicatorSeries, SignalError> {
    let closes = series.closes();

    let emas: Vec<EmaSeries> = config
        .ema_spans
        .iter()
        .map(|&span| EmaSeries {
            span,
            values: ema_series(&closes, span),
        })
        .collect();

    let rsi = rsi_series(&closes, config.rsi_window);

    debug!(
        bars = series.len(),
        spans = ?config.ema_spans,
        rsi_window = config.rsi_window,
        "computed indicator series"
    );

    Ok(IndicatorSeries {
        dates: series.dates(),
        closes,
        emas,
        rsi,
        rsi_window: config.rsi_window,
    })
}
