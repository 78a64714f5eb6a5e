//! Relative Force — % deviation of the latest close from its long SMA.

use super::sma::trailing_sma;
use super::RELATIVE_FORCE_PERIOD;

/// Percentage deviation of the latest close from its 125-session SMA.
///
/// Returns 0 when the series is empty, when there is not enough history
/// for the SMA, or when the SMA itself is 0 — all of which would otherwise
/// divide by zero or have no meaningful reading.
pub fn relative_force(closes: &[f64]) -> f64 {
    let Some(&last) = closes.last() else {
        return 0.0;
    };
    match trailing_sma(closes, RELATIVE_FORCE_PERIOD) {
        Some(sma) if sma != 0.0 => (last - sma) / sma * 100.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_force_above_sma_is_positive() {
        // 124 sessions at 100, then a close at 125: SMA = (124*100 + 125)/125
        let mut closes = vec![100.0; 124];
        closes.push(125.0);
        let sma = (124.0 * 100.0 + 125.0) / 125.0;
        let expected = (125.0 - sma) / sma * 100.0;
        assert!((relative_force(&closes) - expected).abs() < 1e-9);
        assert!(relative_force(&closes) > 0.0);
    }

    #[test]
    fn relative_force_below_sma_is_negative() {
        let mut closes = vec![100.0; 124];
        closes.push(80.0);
        assert!(relative_force(&closes) < 0.0);
    }

    #[test]
    fn relative_force_short_history_is_zero() {
        let closes = vec![100.0; 50];
        assert_eq!(relative_force(&closes), 0.0);
    }

    #[test]
    fn relative_force_empty_series_is_zero() {
        assert_eq!(relative_force(&[]), 0.0);
    }

    #[test]
    fn relative_force_zero_sma_is_zero() {
        // Degenerate all-zero series: SMA is 0, guard avoids the division.
        let closes = vec![0.0; 125];
        assert_eq!(relative_force(&closes), 0.0);
    }
}
