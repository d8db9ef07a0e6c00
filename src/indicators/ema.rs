//! Exponential Moving Average (EMA)
//!
//! Recursive EMA seeded with the first close:
//!
//!   alpha  = 2 / (span + 1)
//!   ema[0] = close[0]
//!   ema[i] = alpha * close[i] + (1 - alpha) * ema[i-1]
//!
//! Crossover detection is sensitive to the exact smoothing trajectory,
//! so the recurrence is applied verbatim — no SMA seeding, no fused
//! multiply-add, no closed-form rewrite. Every index is defined; there
//! is no warm-up gap.

/// Smoothing factor for an EMA span.
pub fn alpha(span: usize) -> f64 {
    debug_assert!(span >= 1, "EMA span must be >= 1");
    2.0 / (span as f64 + 1.0)
}

/// Computes the full EMA series over `closes` for the given `span`.
///
/// The output has the same length as the input. A span of 1 gives
/// `alpha = 1`, i.e. the series itself.
pub fn ema_series(closes: &[f64], span: usize) -> Vec<f64> {
    debug_assert!(span >= 1, "EMA span must be >= 1");

    let alpha = alpha(span);
    let mut values = Vec::with_capacity(closes.len());

    let mut prev = match closes.first() {
        Some(&first) => first,
        None => return values,
    };
    values.push(prev);

    for &close in &closes[1..] {
        let ema = alpha * close + (1.0 - alpha) * prev;
        values.push(ema);
        prev = ema;
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_with_first_close() {
        let series = ema_series(&[42.0, 50.0, 60.0], 5);
        assert_eq!(series[0], 42.0);
    }

    #[test]
    fn test_length_matches_input() {
        let closes = vec![10.0, 11.0, 12.0, 13.0, 14.0];
        assert_eq!(ema_series(&closes, 3).len(), 5);
        assert_eq!(ema_series(&closes, 13).len(), 5);
    }

    #[test]
    fn test_known_values_span_3() {
        // alpha = 2/(3+1) = 0.5
        // ema: 2, 0.5*4 + 0.5*2 = 3, 0.5*6 + 0.5*3 = 4.5, 0.5*8 + 0.5*4.5 = 6.25
        let series = ema_series(&[2.0, 4.0, 6.0, 8.0], 3);
        assert_eq!(series, vec![2.0, 3.0, 4.5, 6.25]);
    }

    #[test]
    fn test_span_one_tracks_price_exactly() {
        // alpha = 2/2 = 1.0
        let closes = vec![10.0, 20.0, 5.0];
        assert_eq!(ema_series(&closes, 1), closes);
    }

    #[test]
    fn test_constant_series_stays_constant() {
        let series = ema_series(&[7.5; 50], 13);
        for &v in &series {
            assert_eq!(v, 7.5);
        }
    }

    #[test]
    fn test_single_element() {
        assert_eq!(ema_series(&[99.0], 8), vec![99.0]);
    }

    #[test]
    fn test_deterministic() {
        let closes = vec![10.0, 10.0, 10.0, 12.0, 14.0, 11.0, 9.0, 15.0];
        let a = ema_series(&closes, 2);
        let b = ema_series(&closes, 2);
        // Bit-identical, not merely approximately equal
        assert_eq!(a, b);
    }
}
