//! Liquidity — average notional traded value over a trailing window.

use crate::domain::Bar;

/// Mean of `typical_price × volume` over the last `depth` sessions.
///
/// A window shorter than `depth` averages over whatever exists; an empty
/// window (no bars, or depth zero) yields 0.
pub fn liquidity(bars: &[Bar], depth: usize) -> f64 {
    let window = &bars[bars.len().saturating_sub(depth)..];
    if window.is_empty() || depth == 0 {
        return 0.0;
    }
    let sum: f64 = window
        .iter()
        .map(|bar| bar.typical_price() * bar.volume as f64)
        .sum();
    sum / window.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn bar(close: f64, volume: u64) -> Bar {
        Bar {
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            open: close,
            high: close,
            low: close,
            close,
            volume,
        }
    }

    #[test]
    fn liquidity_averages_notional_over_window() {
        let bars = vec![bar(1.0, 1), bar(10.0, 100), bar(20.0, 100)];
        // Last two sessions: (10*100 + 20*100) / 2 = 1500
        assert_eq!(liquidity(&bars, 2), 1_500.0);
    }

    #[test]
    fn liquidity_uses_typical_price() {
        let bars = vec![Bar {
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            open: 10.0,
            high: 14.0,
            low: 8.0,
            close: 12.0,
            volume: 1_000,
        }];
        // typical = (10+14+8+12)/4 = 11
        assert_eq!(liquidity(&bars, 1), 11_000.0);
    }

    #[test]
    fn liquidity_short_history_averages_what_exists() {
        let bars = vec![bar(10.0, 100)];
        assert_eq!(liquidity(&bars, 20), 1_000.0);
    }

    #[test]
    fn liquidity_empty_window_is_zero() {
        assert_eq!(liquidity(&[], 20), 0.0);
        assert_eq!(liquidity(&[bar(10.0, 100)], 0), 0.0);
    }
}
