//! Relative Strength Index (RSI) over a simple rolling mean.
//!
//! RSI = 100 - 100 / (1 + RS), RS = avg_gain / avg_loss, where the
//! averages are simple moving averages of the trailing `window` price
//! changes (not Wilder's smoothing). A value exists only once `window`
//! changes are available, i.e. from index `window` onward.

/// Computes the RSI series over `closes` for the given `window`.
///
/// The output is aligned 1:1 with the input. Indices `< window` are
/// `None` (insufficient history). A window with gains and no losses
/// yields `Some(100.0)`; a fully flat window (zero gain AND zero loss)
/// has no defined relative strength and yields `None` — the undefined
/// marker is explicit, never a silent NaN or a fabricated midpoint.
pub fn rsi_series(closes: &[f64], window: usize) -> Vec<Option<f64>> {
    debug_assert!(window >= 1, "RSI window must be >= 1");

    let n = closes.len();
    let mut values = vec![None; n];
    if n < window + 1 {
        return values;
    }

    // deltas[j] = close[j+1] - close[j]; the delta ending at bar i is deltas[i-1]
    let deltas: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();

    // Rolling sums over the trailing `window` deltas ending at bar i
    let mut gain_sum = 0.0;
    let mut loss_sum = 0.0;
    for &d in &deltas[..window] {
        if d > 0.0 {
            gain_sum += d;
        } else {
            loss_sum += -d;
        }
    }

    let window_f = window as f64;
    values[window] = rsi_value(gain_sum / window_f, loss_sum / window_f);

    for i in (window + 1)..n {
        let leaving = deltas[i - window - 1];
        let entering = deltas[i - 1];
        if leaving > 0.0 {
            gain_sum -= leaving;
        } else {
            loss_sum -= -leaving;
        }
        if entering > 0.0 {
            gain_sum += entering;
        } else {
            loss_sum += -entering;
        }
        // Rolling subtraction can leave tiny negative dust
        gain_sum = gain_sum.max(0.0);
        loss_sum = loss_sum.max(0.0);

        values[i] = rsi_value(gain_sum / window_f, loss_sum / window_f);
    }

    values
}

/// Converts average gain / average loss into an RSI value.
///
/// Guarded division: all-gain windows are exactly 100, fully flat
/// windows are undefined.
fn rsi_value(avg_gain: f64, avg_loss: f64) -> Option<f64> {
    if avg_loss == 0.0 {
        if avg_gain == 0.0 {
            return None;
        }
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - 100.0 / (1.0 + rs))
}
