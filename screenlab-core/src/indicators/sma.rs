//! Simple Moving Average over a fixed trailing window.

/// Mean of the last `period` values.
///
/// Returns `None` when fewer than `period` values exist (or the period is
/// zero) — the undefined sentinel for SMA-based indicators. Never panics.
pub fn trailing_sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    Some(window.iter().sum::<f64>() / period as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sma_of_trailing_window() {
        let values = [10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0];
        // mean(12,13,14,15,16) = 14.0
        assert_eq!(trailing_sma(&values, 5), Some(14.0));
    }

    #[test]
    fn sma_of_exact_length_series() {
        let values = [10.0, 11.0, 12.0];
        assert_eq!(trailing_sma(&values, 3), Some(11.0));
    }

    #[test]
    fn sma_period_one_is_last_value() {
        assert_eq!(trailing_sma(&[100.0, 200.0, 300.0], 1), Some(300.0));
    }

    #[test]
    fn sma_too_few_values_is_undefined() {
        assert_eq!(trailing_sma(&[10.0, 11.0], 5), None);
        assert_eq!(trailing_sma(&[], 1), None);
    }

    #[test]
    fn sma_zero_period_is_undefined() {
        assert_eq!(trailing_sma(&[10.0, 11.0], 0), None);
    }
}
