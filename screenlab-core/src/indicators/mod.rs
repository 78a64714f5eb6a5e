//! The indicator engine — three per-ticker screening indicators.
//!
//! All computations are pure scans over a ticker's chronological series,
//! run once at load into a [`Snapshot`]:
//! - Liquidity: mean notional traded value over a trailing window
//! - Relative Force: % deviation of the latest close from its long SMA
//! - Relative Force Rating: cross-sectional percentile rank of Relative Force

pub mod liquidity;
pub mod rating;
pub mod relative_force;
pub mod sma;

pub use liquidity::liquidity;
pub use rating::relative_force_rating;
pub use relative_force::relative_force;
pub use sma::trailing_sma;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{IndicatorValue, Universe};

/// Trailing window for the liquidity indicator, in sessions.
pub const LIQUIDITY_DEPTH: usize = 20;

/// SMA window for relative force, in sessions.
pub const RELATIVE_FORCE_PERIOD: usize = 125;

/// The screening indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Indicator {
    Liquidity20d,
    RelativeForce,
    RelativeForceRating,
}

impl Indicator {
    pub fn all() -> [Indicator; 3] {
        [
            Indicator::Liquidity20d,
            Indicator::RelativeForce,
            Indicator::RelativeForceRating,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            Indicator::Liquidity20d => "LIQUIDITY 20D",
            Indicator::RelativeForce => "REL FORCE",
            Indicator::RelativeForceRating => "RF RATING",
        }
    }

    fn slot(self) -> usize {
        match self {
            Indicator::Liquidity20d => 0,
            Indicator::RelativeForce => 1,
            Indicator::RelativeForceRating => 2,
        }
    }
}

/// Per-ticker values for all three indicators, computed once at load.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    values: BTreeMap<String, [f64; 3]>,
}

impl Snapshot {
    /// Compute every indicator for every ticker in the universe.
    pub fn compute(universe: &Universe) -> Self {
        let mut relative_forces = Vec::with_capacity(universe.ticker_count());
        let mut values: BTreeMap<String, [f64; 3]> = BTreeMap::new();

        for (symbol, bars) in universe.iter() {
            let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
            let liq = liquidity(bars, LIQUIDITY_DEPTH);
            let rf = relative_force(&closes);
            relative_forces.push(IndicatorValue::new(symbol, rf));
            values.insert(symbol.to_string(), [liq, rf, 0.0]);
        }

        for rating in relative_force_rating(&relative_forces) {
            if let Some(slots) = values.get_mut(&rating.ticker) {
                slots[Indicator::RelativeForceRating.slot()] = rating.value;
            }
        }

        Self { values }
    }

    /// One indicator's value for one ticker. Unknown tickers degrade to 0.
    pub fn value(&self, ticker: &str, indicator: Indicator) -> f64 {
        self.values
            .get(ticker)
            .map(|slots| slots[indicator.slot()])
            .unwrap_or(0.0)
    }

    /// The full per-ticker column for one indicator, in symbol order.
    pub fn column(&self, indicator: Indicator) -> Vec<IndicatorValue> {
        self.values
            .iter()
            .map(|(ticker, slots)| IndicatorValue::new(ticker.clone(), slots[indicator.slot()]))
            .collect()
    }

    pub fn ticker_count(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Bar;
    use chrono::NaiveDate;

    /// Flat series at a fixed close, constant volume.
    fn flat_series(close: f64, volume: u64, sessions: usize) -> Vec<Bar> {
        let start = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
        (0..sessions)
            .map(|i| Bar {
                date: start + chrono::Duration::days(i as i64),
                open: close,
                high: close,
                low: close,
                close,
                volume,
            })
            .collect()
    }

    #[test]
    fn snapshot_computes_all_columns() {
        let mut universe = Universe::new();
        universe.insert("AAA", flat_series(10.0, 1_000, 200));
        universe.insert("BBB", flat_series(50.0, 2_000, 200));

        let snapshot = Snapshot::compute(&universe);
        assert_eq!(snapshot.ticker_count(), 2);

        // Flat series: liquidity = close * volume, relative force = 0.
        assert_eq!(snapshot.value("AAA", Indicator::Liquidity20d), 10.0 * 1_000.0);
        assert_eq!(snapshot.value("BBB", Indicator::Liquidity20d), 50.0 * 2_000.0);
        assert_eq!(snapshot.value("AAA", Indicator::RelativeForce), 0.0);

        let column = snapshot.column(Indicator::Liquidity20d);
        assert_eq!(column.len(), 2);
        assert_eq!(column[0].ticker, "AAA");
    }

    #[test]
    fn unknown_ticker_degrades_to_zero() {
        let snapshot = Snapshot::compute(&Universe::new());
        assert_eq!(snapshot.value("ZZZ", Indicator::RelativeForce), 0.0);
    }

    #[test]
    fn rating_spreads_across_universe() {
        let mut universe = Universe::new();
        // Short series (< 125 sessions) gives every ticker RF = 0, so all
        // ratings come from the stable tie ordering.
        universe.insert("AAA", flat_series(10.0, 1_000, 10));
        universe.insert("BBB", flat_series(20.0, 1_000, 10));

        let snapshot = Snapshot::compute(&universe);
        let mut ratings: Vec<f64> = ["AAA", "BBB"]
            .iter()
            .map(|t| snapshot.value(t, Indicator::RelativeForceRating))
            .collect();
        ratings.sort_by(f64::total_cmp);
        assert_eq!(ratings, vec![0.0, 100.0]);
    }
}
