//! Range filter — the histogram range-selection state machine.
//!
//! A filter owns one indicator column, the fixed global bounds derived
//! from it at construction, and the mutable selected sub-range. Every
//! mutating operation runs the same clamp → swap → recompute sequence and
//! refreshes the cached passing set synchronously; the owning `Screener`
//! re-intersects after each call. Invariant after every operation:
//!
//!   global_min <= selected_min <= selected_max <= global_max

use std::collections::BTreeSet;

use crate::domain::IndicatorValue;
use crate::indicators::Indicator;

use super::histogram::{bin_values, HistogramBin};
use super::ScreenError;

#[derive(Debug, Clone)]
pub struct RangeFilter {
    indicator: Indicator,
    data: Vec<IndicatorValue>,
    global_min: f64,
    global_max: f64,
    selected_min: f64,
    selected_max: f64,
    bins: usize,
    passing: BTreeSet<String>,
}

impl RangeFilter {
    /// Build a filter over an indicator column. The selection starts at
    /// the full range, so the initial passing set is every ticker.
    pub fn new(
        indicator: Indicator,
        data: Vec<IndicatorValue>,
        bins: usize,
    ) -> Result<Self, ScreenError> {
        if data.is_empty() {
            return Err(ScreenError::EmptyColumn(indicator.label().to_string()));
        }
        let global_min = data.iter().map(|d| d.value).fold(f64::INFINITY, f64::min);
        let global_max = data
            .iter()
            .map(|d| d.value)
            .fold(f64::NEG_INFINITY, f64::max);

        let mut filter = Self {
            indicator,
            data,
            global_min,
            global_max,
            selected_min: global_min,
            selected_max: global_max,
            bins,
            passing: BTreeSet::new(),
        };
        filter.refresh_passing();
        Ok(filter)
    }

    pub fn indicator(&self) -> Indicator {
        self.indicator
    }

    pub fn global_min(&self) -> f64 {
        self.global_min
    }

    pub fn global_max(&self) -> f64 {
        self.global_max
    }

    pub fn selected_min(&self) -> f64 {
        self.selected_min
    }

    pub fn selected_max(&self) -> f64 {
        self.selected_max
    }

    pub fn bins(&self) -> usize {
        self.bins
    }

    pub fn ticker_count(&self) -> usize {
        self.data.len()
    }

    /// Width of the full value range; a zero-span column counts as 1 so
    /// nothing downstream divides by zero.
    pub fn span(&self) -> f64 {
        let span = self.global_max - self.global_min;
        if span > 0.0 {
            span
        } else {
            1.0
        }
    }

    /// One drag step: the value range covered by a single histogram bucket.
    pub fn bin_step(&self) -> f64 {
        self.span() / self.bins.max(1) as f64
    }

    /// Set both bounds: clamp each to the global range, swap if inverted,
    /// recompute the passing set.
    pub fn set_selection(&mut self, min: f64, max: f64) {
        let mut lo = min.clamp(self.global_min, self.global_max);
        let mut hi = max.clamp(self.global_min, self.global_max);
        if lo > hi {
            std::mem::swap(&mut lo, &mut hi);
        }
        self.selected_min = lo;
        self.selected_max = hi;
        self.refresh_passing();
    }

    /// Drag the min handle: it cannot pass the max handle and clamps to
    /// the global lower bound. Called continuously during a drag.
    pub fn drag_min(&mut self, value: f64) {
        self.selected_min = value.max(self.global_min).min(self.selected_max);
        self.refresh_passing();
    }

    /// Drag the max handle: it cannot pass the min handle and clamps to
    /// the global upper bound.
    pub fn drag_max(&mut self, value: f64) {
        self.selected_max = value.min(self.global_max).max(self.selected_min);
        self.refresh_passing();
    }

    /// Apply one keystroke's worth of typed min-bound text. Text that does
    /// not parse as a finite number leaves the bound unchanged, silently.
    pub fn apply_min_text(&mut self, text: &str) {
        if let Some(value) = parse_bound(text) {
            self.set_selection(value, self.selected_max);
        }
    }

    /// Typed max-bound counterpart of [`apply_min_text`].
    ///
    /// [`apply_min_text`]: RangeFilter::apply_min_text
    pub fn apply_max_text(&mut self, text: &str) {
        if let Some(value) = parse_bound(text) {
            self.set_selection(self.selected_min, value);
        }
    }

    /// Tickers whose value lies in `[selected_min, selected_max]`, both
    /// ends inclusive. Refreshed on every mutation.
    pub fn passing(&self) -> &BTreeSet<String> {
        &self.passing
    }

    /// Display buckets with their active/inactive flag.
    pub fn histogram(&self) -> Vec<HistogramBin> {
        let values: Vec<f64> = self.data.iter().map(|d| d.value).collect();
        bin_values(
            &values,
            self.global_min,
            self.global_max,
            self.bins,
            self.selected_min,
            self.selected_max,
        )
    }

    fn refresh_passing(&mut self) {
        self.passing = self
            .data
            .iter()
            .filter(|d| d.value >= self.selected_min && d.value <= self.selected_max)
            .map(|d| d.ticker.clone())
            .collect();
    }
}

fn parse_bound(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
