//! The screening surface — range filters, conjunction, results table.

pub mod filter;
pub mod histogram;
pub mod screener;
pub mod table;

pub use filter::RangeFilter;
pub use histogram::HistogramBin;
pub use screener::{Screener, DEFAULT_BINS};
pub use table::{build_rows, sort_rows, ResultRow, SortState};

use thiserror::Error;

/// Errors from constructing screening state.
#[derive(Debug, Error)]
pub enum ScreenError {
    /// A range filter cannot derive its global bounds from nothing.
    #[error("indicator column for {0} has no values")]
    EmptyColumn(String),
}
