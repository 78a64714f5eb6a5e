//! Universe — per-symbol chronological OHLCV series.
//!
//! The universe is supplied by an external collaborator (sample generator,
//! in the TUI). This crate only reads it for indicator computation and does
//! not validate beyond that.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::Bar;

/// All tickers under screening, each with its ordered session history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Universe {
    series: BTreeMap<String, Vec<Bar>>,
}

impl Universe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) a symbol's series. Bars must be chronological.
    pub fn insert(&mut self, symbol: impl Into<String>, bars: Vec<Bar>) {
        self.series.insert(symbol.into(), bars);
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(|s| s.as_str())
    }

    pub fn series(&self, symbol: &str) -> Option<&[Bar]> {
        self.series.get(symbol).map(|v| v.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Bar])> {
        self.series.iter().map(|(s, bars)| (s.as_str(), bars.as_slice()))
    }

    pub fn ticker_count(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
