//! Domain types — bars, the universe, indicator readings.

pub mod bar;
pub mod universe;

pub use bar::Bar;
pub use universe::Universe;

use serde::{Deserialize, Serialize};

/// One indicator reading for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorValue {
    pub ticker: String,
    pub value: f64,
}

impl IndicatorValue {
    pub fn new(ticker: impl Into<String>, value: f64) -> Self {
        Self {
            ticker: ticker.into(),
            value,
        }
    }
}
