//! Application state — single-owner, main-thread only.
//!
//! All TUI state lives here. Key handlers mutate it synchronously; the
//! next frame renders whatever is current. Derived data (passing sets,
//! table rows) is recomputed from the screener on demand, never stored
//! beyond the current render.

use screenlab_core::domain::Universe;
use screenlab_core::indicators::{Indicator, Snapshot};
use screenlab_core::screen::{build_rows, sort_rows, ResultRow, Screener, SortState, DEFAULT_BINS};

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Filters,
    Results,
    Help,
}

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Panel::Filters => 0,
            Panel::Results => 1,
            Panel::Help => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Filters),
            1 => Some(Panel::Results),
            2 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Filters => "Filters",
            Panel::Results => "Results",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % 3).unwrap()
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + 2) % 3).unwrap()
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Which handle of the focused filter is grabbed for dragging/editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Min,
    Max,
}

impl Handle {
    pub fn other(self) -> Handle {
        match self {
            Handle::Min => Handle::Max,
            Handle::Max => Handle::Min,
        }
    }
}

/// Live text entry for one bound. The buffer is applied after every
/// keystroke; text that fails to parse leaves the bound where it was.
#[derive(Debug, Clone)]
pub struct EditState {
    pub handle: Handle,
    pub buffer: String,
}

/// Filters panel state. Cursor row 0 is the indicator picker; rows 1..
/// are the active filters in screener order.
#[derive(Debug)]
pub struct FiltersPanelState {
    pub cursor: usize,
    pub picker_idx: usize,
    pub grabbed: Handle,
    pub editing: Option<EditState>,
}

impl FiltersPanelState {
    fn new() -> Self {
        Self {
            cursor: 0,
            picker_idx: 0,
            grabbed: Handle::Min,
            editing: None,
        }
    }
}

/// Results panel state. Sort state persists until the user changes it.
#[derive(Debug)]
pub struct ResultsPanelState {
    pub sort: SortState,
    pub header_cursor: usize,
    pub scroll_offset: usize,
}

impl ResultsPanelState {
    fn new() -> Self {
        Self {
            sort: SortState::default(),
            header_cursor: 0,
            scroll_offset: 0,
        }
    }
}

/// Top-level application state.
pub struct AppState {
    pub active_panel: Panel,
    pub running: bool,

    pub universe: Universe,
    pub snapshot: Snapshot,
    pub screener: Screener,

    pub filters: FiltersPanelState,
    pub results: ResultsPanelState,

    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new(universe: Universe) -> Self {
        let snapshot = Snapshot::compute(&universe);
        Self {
            active_panel: Panel::Filters,
            running: true,
            universe,
            snapshot,
            screener: Screener::new(),
            filters: FiltersPanelState::new(),
            results: ResultsPanelState::new(),
            status_message: None,
        }
    }

    // ── Filters panel ────────────────────────────────────────────────

    /// The indicator currently shown on the picker row.
    pub fn picker_indicator(&self) -> Indicator {
        Indicator::all()[self.filters.picker_idx % Indicator::all().len()]
    }

    pub fn cycle_picker(&mut self, direction: i32) {
        let len = Indicator::all().len();
        let idx = self.filters.picker_idx as i32 + direction;
        self.filters.picker_idx = idx.rem_euclid(len as i32) as usize;
    }

    /// Total navigable rows in the Filters panel: picker + active filters.
    pub fn filter_row_count(&self) -> usize {
        1 + self.screener.filter_count()
    }

    /// The filter the cursor is on; `None` when on the picker row.
    pub fn focused_indicator(&self) -> Option<Indicator> {
        if self.filters.cursor == 0 {
            return None;
        }
        self.screener
            .active_indicators()
            .get(self.filters.cursor - 1)
            .copied()
    }

    /// Add the picked indicator's filter and move the cursor onto it.
    pub fn add_picked_filter(&mut self) {
        let indicator = self.picker_indicator();
        if self.screener.is_active(indicator) {
            self.set_warning(format!("{} filter is already active", indicator.label()));
            return;
        }
        match self
            .screener
            .add_filter(indicator, &self.snapshot, DEFAULT_BINS)
        {
            Ok(()) => {
                let position = self
                    .screener
                    .active_indicators()
                    .iter()
                    .position(|&i| i == indicator)
                    .unwrap_or(0);
                self.filters.cursor = position + 1;
                self.filters.grabbed = Handle::Min;
                self.set_status(format!(
                    "Added {} filter ({} passing)",
                    indicator.label(),
                    self.screener.passing().len()
                ));
            }
            Err(e) => self.set_warning(e.to_string()),
        }
    }

    /// Remove the focused filter and re-clamp every cursor that depended
    /// on it.
    pub fn remove_focused_filter(&mut self) {
        let Some(indicator) = self.focused_indicator() else {
            return;
        };
        self.filters.editing = None;
        self.screener.remove_filter(indicator);
        self.filters.cursor = self.filters.cursor.min(self.filter_row_count() - 1);
        self.results.header_cursor = self
            .results
            .header_cursor
            .min(self.column_count().saturating_sub(1));
        self.set_status(format!("Removed {} filter", indicator.label()));
    }

    pub fn grab_other_handle(&mut self) {
        self.filters.grabbed = self.filters.grabbed.other();
    }

    /// One drag step for the grabbed handle of the focused filter. Key
    /// auto-repeat turns held keys into a continuous drag; each step
    /// recomputes the passing set.
    pub fn drag_focused(&mut self, direction: i32) {
        let Some(indicator) = self.focused_indicator() else {
            return;
        };
        let grabbed = self.filters.grabbed;
        self.screener.update_filter(indicator, |filter| {
            let step = filter.bin_step() * direction as f64;
            match grabbed {
                Handle::Min => filter.drag_min(filter.selected_min() + step),
                Handle::Max => filter.drag_max(filter.selected_max() + step),
            }
        });
    }

    /// Enter edit mode for the grabbed handle's bound.
    pub fn begin_edit(&mut self) {
        if self.focused_indicator().is_none() {
            return;
        }
        self.filters.editing = Some(EditState {
            handle: self.filters.grabbed,
            buffer: String::new(),
        });
    }

    pub fn end_edit(&mut self) {
        self.filters.editing = None;
    }

    pub fn push_edit_char(&mut self, c: char) {
        if let Some(edit) = &mut self.filters.editing {
            edit.buffer.push(c);
            self.apply_edit_buffer();
        }
    }

    pub fn pop_edit_char(&mut self) {
        if let Some(edit) = &mut self.filters.editing {
            edit.buffer.pop();
            self.apply_edit_buffer();
        }
    }

    /// Apply the current edit buffer to its bound. Runs after every
    /// keystroke; unparsable or empty buffers change nothing.
    fn apply_edit_buffer(&mut self) {
        let Some(edit) = self.filters.editing.clone() else {
            return;
        };
        let Some(indicator) = self.focused_indicator() else {
            return;
        };
        self.screener.update_filter(indicator, |filter| match edit.handle {
            Handle::Min => filter.apply_min_text(&edit.buffer),
            Handle::Max => filter.apply_max_text(&edit.buffer),
        });
    }

    // ── Results panel ────────────────────────────────────────────────

    /// Columns in the results table: Ticker plus one per active filter.
    pub fn column_count(&self) -> usize {
        1 + self.screener.filter_count()
    }

    pub fn column_label(&self, column: usize) -> String {
        if column == 0 {
            return "Ticker".to_string();
        }
        self.screener
            .active_indicators()
            .get(column - 1)
            .map(|i| i.label().to_string())
            .unwrap_or_default()
    }

    /// Build and sort the rows for the current render.
    pub fn table_rows(&self) -> Vec<ResultRow> {
        let mut rows = build_rows(&self.screener, &self.snapshot);
        sort_rows(&mut rows, self.results.sort);
        rows
    }

    /// Toggle sorting on the column under the header cursor.
    pub fn toggle_sort(&mut self) {
        let column = self.results.header_cursor;
        self.results.sort.toggle(column);
        let direction = if self.results.sort.ascending { "asc" } else { "desc" };
        self.set_status(format!("Sorted by {} ({direction})", self.column_label(column)));
    }

    // ── Status line ──────────────────────────────────────────────────

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
