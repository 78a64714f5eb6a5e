//! Results table model — rows, sorting, sort-state persistence.

use std::cmp::Ordering;

use crate::indicators::Snapshot;

use super::screener::Screener;

/// Which column the table is sorted by, and in which direction. Column 0
/// is the ticker symbol; columns 1.. are the active indicators in
/// screener order. Persists across re-renders until changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: Option<usize>,
    pub ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: None,
            ascending: true,
        }
    }
}

impl SortState {
    /// A repeated click on the current sort column flips the direction;
    /// a new column resets to ascending.
    pub fn toggle(&mut self, column: usize) {
        if self.column == Some(column) {
            self.ascending = !self.ascending;
        } else {
            self.column = Some(column);
            self.ascending = true;
        }
    }
}

/// One table row: the ticker plus one value per active indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub ticker: String,
    pub values: Vec<f64>,
}

/// One row per passing ticker, columns in active-indicator order.
pub fn build_rows(screener: &Screener, snapshot: &Snapshot) -> Vec<ResultRow> {
    let indicators = screener.active_indicators();
    screener
        .passing()
        .iter()
        .map(|ticker| ResultRow {
            ticker: ticker.clone(),
            values: indicators
                .iter()
                .map(|&indicator| snapshot.value(ticker, indicator))
                .collect(),
        })
        .collect()
}

/// Sort rows in place. Column 0 compares ticker symbols
/// case-insensitively; every other column compares numerically, with a
/// total order so NaN can never panic the sort.
pub fn sort_rows(rows: &mut [ResultRow], sort: SortState) {
    let Some(column) = sort.column else {
        return;
    };
    rows.sort_by(|a, b| {
        let ord = compare_cell(a, b, column);
        if sort.ascending {
            ord
        } else {
            ord.reverse()
        }
    });
}

fn compare_cell(a: &ResultRow, b: &ResultRow, column: usize) -> Ordering {
    if column == 0 {
        return a.ticker.to_uppercase().cmp(&b.ticker.to_uppercase());
    }
    let index = column - 1;
    let va = a.values.get(index).copied().unwrap_or(0.0);
    let vb = b.values.get(index).copied().unwrap_or(0.0);
    va.total_cmp(&vb)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<ResultRow> {
        vec![
            ResultRow {
                ticker: "MSFT".into(),
                values: vec![3.0],
            },
            ResultRow {
                ticker: "aapl".into(),
                values: vec![1.0],
            },
            ResultRow {
                ticker: "GOOG".into(),
                values: vec![2.0],
            },
        ]
    }

    #[test]
    fn toggle_same_column_flips_direction() {
        let mut sort = SortState::default();
        sort.toggle(1);
        assert_eq!(sort.column, Some(1));
        assert!(sort.ascending);
        sort.toggle(1);
        assert!(!sort.ascending);
    }

    #[test]
    fn toggle_new_column_resets_to_ascending() {
        let mut sort = SortState::default();
        sort.toggle(1);
        sort.toggle(1);
        assert!(!sort.ascending);
        sort.toggle(0);
        assert_eq!(sort.column, Some(0));
        assert!(sort.ascending);
    }

    #[test]
    fn no_sort_column_keeps_order() {
        let mut data = rows();
        sort_rows(&mut data, SortState::default());
        assert_eq!(data[0].ticker, "MSFT");
    }

    #[test]
    fn ticker_column_sorts_case_insensitively() {
        let mut data = rows();
        sort_rows(
            &mut data,
            SortState {
                column: Some(0),
                ascending: true,
            },
        );
        let tickers: Vec<&str> = data.iter().map(|r| r.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["aapl", "GOOG", "MSFT"]);
    }

    #[test]
    fn value_column_sorts_numerically_both_ways() {
        let mut data = rows();
        sort_rows(
            &mut data,
            SortState {
                column: Some(1),
                ascending: true,
            },
        );
        assert_eq!(data[0].values[0], 1.0);
        sort_rows(
            &mut data,
            SortState {
                column: Some(1),
                ascending: false,
            },
        );
        assert_eq!(data[0].values[0], 3.0);
    }

    #[test]
    fn nan_values_do_not_panic_the_sort() {
        let mut data = rows();
        data[1].values[0] = f64::NAN;
        sort_rows(
            &mut data,
            SortState {
                column: Some(1),
                ascending: true,
            },
        );
        assert_eq!(data.len(), 3);
    }
}
