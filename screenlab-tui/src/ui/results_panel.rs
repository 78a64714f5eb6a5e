//! Panel 2 — Results: sortable table of tickers passing every active filter.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use screenlab_core::indicators::Indicator;

use crate::app::AppState;
use crate::theme;

const TICKER_WIDTH: usize = 8;
const VALUE_WIDTH: usize = 16;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let rows = app.table_rows();
    let sort = app.results.sort;
    let mut lines: Vec<Line> = Vec::new();

    // Header
    lines.push(Line::from(vec![
        Span::styled(format!("{} rows", rows.len()), theme::accent()),
        Span::styled(
            "  [h/l]column [s/Enter]sort [j/k]scroll",
            theme::muted(),
        ),
    ]));
    lines.push(Line::from(""));

    if rows.is_empty() {
        let hint = if app.screener.filter_count() == 0 {
            "No active filters — add one in the Filters panel. An empty \
             filter set shows nothing, by design."
        } else {
            "No tickers pass the current filters."
        };
        lines.push(Line::from(Span::styled(hint, theme::muted())));
        let para = Paragraph::new(lines);
        f.render_widget(para, area);
        return;
    }

    // Column headers with sort indicator and header cursor.
    let mut header_spans: Vec<Span> = Vec::new();
    for column in 0..app.column_count() {
        let mut label = app.column_label(column);
        if sort.column == Some(column) {
            label.push_str(if sort.ascending { " ▲" } else { " ▼" });
        }
        let cell = if column == 0 {
            format!("{label:<TICKER_WIDTH$} ")
        } else {
            format!("{label:>VALUE_WIDTH$} ")
        };
        let style = if column == app.results.header_cursor {
            theme::accent_bold().add_modifier(Modifier::REVERSED)
        } else {
            theme::accent_bold()
        };
        header_spans.push(Span::styled(cell, style));
    }
    lines.push(Line::from(header_spans));

    // Visible rows
    let indicators = app.screener.active_indicators();
    let visible_height = area.height.saturating_sub(3) as usize;
    let start = app.results.scroll_offset.min(rows.len().saturating_sub(1));
    let end = (start + visible_height.max(1)).min(rows.len());

    for row in &rows[start..end] {
        let mut spans: Vec<Span> = vec![Span::styled(
            format!("{:<TICKER_WIDTH$} ", row.ticker),
            theme::accent(),
        )];
        for (value, indicator) in row.values.iter().zip(&indicators) {
            let style = match indicator {
                Indicator::RelativeForce => theme::signed(*value),
                _ => theme::muted(),
            };
            spans.push(Span::styled(format!("{value:>VALUE_WIDTH$.2} "), style));
        }
        lines.push(Line::from(spans));
    }

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}
