//! Relative Force Rating — cross-sectional percentile rank.

use crate::domain::IndicatorValue;

/// Percentile rank (0–100) of each ticker's relative force among all
/// tickers: sort descending, assign `index / (count − 1) × 100`, so the
/// strongest ticker rates 0 and the weakest 100.
///
/// Ties keep the stable descending-sort order. A universe of one (or zero)
/// tickers rates 0 — the rank formula would otherwise divide by zero.
pub fn relative_force_rating(values: &[IndicatorValue]) -> Vec<IndicatorValue> {
    let count = values.len();
    if count <= 1 {
        return values
            .iter()
            .map(|iv| IndicatorValue::new(iv.ticker.clone(), 0.0))
            .collect();
    }

    let mut sorted: Vec<&IndicatorValue> = values.iter().collect();
    sorted.sort_by(|a, b| b.value.total_cmp(&a.value));

    sorted
        .iter()
        .enumerate()
        .map(|(index, iv)| {
            IndicatorValue::new(
                iv.ticker.clone(),
                index as f64 / (count - 1) as f64 * 100.0,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(pairs: &[(&str, f64)]) -> Vec<IndicatorValue> {
        pairs
            .iter()
            .map(|(t, v)| IndicatorValue::new(*t, *v))
            .collect()
    }

    fn rating_of(ratings: &[IndicatorValue], ticker: &str) -> f64 {
        ratings
            .iter()
            .find(|iv| iv.ticker == ticker)
            .map(|iv| iv.value)
            .unwrap()
    }

    #[test]
    fn rating_of_four_tickers() {
        let ratings = relative_force_rating(&column(&[
            ("A", 10.0),
            ("B", 30.0),
            ("C", 20.0),
            ("D", 0.0),
        ]));
        // Descending [30, 20, 10, 0] → ranks [0, 33.33, 66.67, 100]
        assert_eq!(rating_of(&ratings, "B"), 0.0);
        assert!((rating_of(&ratings, "C") - 100.0 / 3.0).abs() < 1e-9);
        assert!((rating_of(&ratings, "A") - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(rating_of(&ratings, "D"), 100.0);
    }

    #[test]
    fn single_ticker_rates_zero() {
        let ratings = relative_force_rating(&column(&[("A", 42.0)]));
        assert_eq!(ratings.len(), 1);
        assert_eq!(ratings[0].value, 0.0);
    }

    #[test]
    fn empty_universe_rates_nothing() {
        assert!(relative_force_rating(&[]).is_empty());
    }

    #[test]
    fn ties_keep_input_order() {
        let ratings = relative_force_rating(&column(&[("A", 5.0), ("B", 5.0), ("C", 5.0)]));
        // Stable sort: equal values keep A before B before C.
        assert_eq!(rating_of(&ratings, "A"), 0.0);
        assert_eq!(rating_of(&ratings, "B"), 50.0);
        assert_eq!(rating_of(&ratings, "C"), 100.0);
    }
}
