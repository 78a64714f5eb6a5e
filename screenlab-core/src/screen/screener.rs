//! Filter conjunction — at most one range filter per indicator.
//!
//! The screener owns every active filter and the intersection of their
//! passing sets. Mutations go through [`Screener::update_filter`] so the
//! conjunction is re-derived after every change; it is never stored
//! anywhere else.

use std::collections::{BTreeMap, BTreeSet};

use crate::indicators::{Indicator, Snapshot};

use super::filter::RangeFilter;
use super::ScreenError;

/// Histogram buckets per filter.
pub const DEFAULT_BINS: usize = 50;

#[derive(Debug, Default)]
pub struct Screener {
    filters: BTreeMap<Indicator, RangeFilter>,
    passing: BTreeSet<String>,
}

impl Screener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter for `indicator`, built from its snapshot column. A
    /// second add for an already-active indicator is a no-op.
    pub fn add_filter(
        &mut self,
        indicator: Indicator,
        snapshot: &Snapshot,
        bins: usize,
    ) -> Result<(), ScreenError> {
        if self.filters.contains_key(&indicator) {
            return Ok(());
        }
        let filter = RangeFilter::new(indicator, snapshot.column(indicator), bins)?;
        self.filters.insert(indicator, filter);
        self.recompute();
        Ok(())
    }

    /// Drop a filter. Removing the last filter empties the results.
    pub fn remove_filter(&mut self, indicator: Indicator) {
        if self.filters.remove(&indicator).is_some() {
            self.recompute();
        }
    }

    /// Mutate one filter, then re-derive the conjunction. This is the
    /// single seam through which every selection change flows.
    pub fn update_filter(&mut self, indicator: Indicator, mutate: impl FnOnce(&mut RangeFilter)) {
        if let Some(filter) = self.filters.get_mut(&indicator) {
            mutate(filter);
            self.recompute();
        }
    }

    pub fn filter(&self, indicator: Indicator) -> Option<&RangeFilter> {
        self.filters.get(&indicator)
    }

    pub fn filters(&self) -> impl Iterator<Item = &RangeFilter> {
        self.filters.values()
    }

    /// Active indicators in display order (also the table column order).
    pub fn active_indicators(&self) -> Vec<Indicator> {
        self.filters.keys().copied().collect()
    }

    pub fn is_active(&self, indicator: Indicator) -> bool {
        self.filters.contains_key(&indicator)
    }

    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }

    /// Tickers passing every active filter. With zero active filters this
    /// is the empty set, not the whole universe — deliberate policy.
    pub fn passing(&self) -> &BTreeSet<String> {
        &self.passing
    }

    fn recompute(&mut self) {
        let mut filters = self.filters.values();
        self.passing = match filters.next() {
            None => BTreeSet::new(),
            Some(first) => {
                let mut acc = first.passing().clone();
                for filter in filters {
                    acc = acc.intersection(filter.passing()).cloned().collect();
                }
                acc
            }
        };
    }
}
