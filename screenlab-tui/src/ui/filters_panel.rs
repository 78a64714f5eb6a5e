//! Panel 1 — Filters: indicator picker, histogram range filters with
//! draggable handles and typed bounds.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use screenlab_core::screen::RangeFilter;

use crate::app::{AppState, EditState, Handle};
use crate::theme;

/// Vertical block characters for bucket counts, lowest to highest.
const LEVELS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    // Header
    lines.push(Line::from(vec![
        Span::styled("Universe: ", theme::muted()),
        Span::styled(format!("{} tickers", app.universe.ticker_count()), theme::accent()),
        Span::styled("  Passing: ", theme::muted()),
        Span::styled(format!("{}", app.screener.passing().len()), theme::accent()),
        Span::styled(
            "  [Enter]add [Space]handle [h/l]drag [i]type [x]remove",
            theme::muted(),
        ),
    ]));
    lines.push(Line::from(""));

    // Picker row
    lines.push(picker_line(app));
    lines.push(Line::from(""));

    if app.screener.filter_count() == 0 {
        lines.push(Line::from(Span::styled(
            "No active filters — results stay empty until one is added.",
            theme::muted(),
        )));
    }

    // Active filter widgets
    for (idx, filter) in app.screener.filters().enumerate() {
        let focused = app.filters.cursor == idx + 1;
        lines.push(title_line(filter, focused));
        lines.push(histogram_line(filter));
        lines.push(ruler_line(filter, app.filters.grabbed, focused));
        lines.push(bounds_line(
            filter,
            app.filters.grabbed,
            focused,
            app.filters.editing.as_ref(),
        ));
        lines.push(Line::from(""));
    }

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}

fn picker_line(app: &AppState) -> Line<'static> {
    let indicator = app.picker_indicator();
    let on_picker = app.filters.cursor == 0;

    let marker_style = if on_picker {
        theme::accent().add_modifier(Modifier::REVERSED)
    } else {
        theme::muted()
    };
    let already = if app.screener.is_active(indicator) {
        "  (active)"
    } else {
        ""
    };

    Line::from(vec![
        Span::styled(if on_picker { "▸ " } else { "  " }, marker_style),
        Span::styled("Add filter: ", theme::muted()),
        Span::styled("◂ ", theme::neutral()),
        Span::styled(
            indicator.label().to_string(),
            if on_picker { theme::accent_bold() } else { theme::neutral() },
        ),
        Span::styled(" ▸", theme::neutral()),
        Span::styled(already, theme::warning()),
    ])
}

fn title_line(filter: &RangeFilter, focused: bool) -> Line<'static> {
    let style = if focused {
        theme::accent_bold()
    } else {
        theme::neutral()
    };
    Line::from(vec![
        Span::styled(if focused { "▸ " } else { "  " }, style),
        Span::styled(filter.indicator().label().to_string(), style),
        Span::styled(
            format!("  {}/{} pass", filter.passing().len(), filter.ticker_count()),
            theme::muted(),
        ),
    ])
}

/// One character per bucket, height scaled to the fullest bucket,
/// emphasized when the bucket overlaps the selection.
fn histogram_line(filter: &RangeFilter) -> Line<'static> {
    let buckets = filter.histogram();
    let max_count = buckets.iter().map(|b| b.count).max().unwrap_or(1).max(1);

    let mut spans: Vec<Span> = vec![Span::raw("  ")];
    for bucket in &buckets {
        let level = (bucket.count as f64 / max_count as f64 * (LEVELS.len() - 1) as f64)
            .round() as usize;
        // A populated bucket always shows at least the lowest bar.
        let level = if bucket.count > 0 { level.max(1) } else { level };
        spans.push(Span::styled(
            LEVELS[level.min(LEVELS.len() - 1)].to_string(),
            theme::bucket(bucket.active),
        ));
    }
    Line::from(spans)
}

/// Selection ruler under the histogram: handles at the selected bounds,
/// a heavy line between them.
fn ruler_line(filter: &RangeFilter, grabbed: Handle, focused: bool) -> Line<'static> {
    let bins = filter.bins();
    let min_x = bucket_of(filter, filter.selected_min());
    let max_x = bucket_of(filter, filter.selected_max());

    let mut spans: Vec<Span> = vec![Span::raw("  ")];
    for x in 0..bins {
        let (symbol, mut style) = if x == min_x || x == max_x {
            ("┃", theme::accent_bold())
        } else if x > min_x && x < max_x {
            ("━", theme::accent())
        } else {
            ("─", theme::muted())
        };
        // The grabbed handle glows orange on the focused filter.
        let is_grabbed = match grabbed {
            Handle::Min => x == min_x,
            Handle::Max => x == max_x,
        };
        if focused && is_grabbed && (x == min_x || x == max_x) {
            style = theme::warning().add_modifier(Modifier::BOLD);
        }
        spans.push(Span::styled(symbol.to_string(), style));
    }
    Line::from(spans)
}

fn bounds_line(
    filter: &RangeFilter,
    grabbed: Handle,
    focused: bool,
    editing: Option<&EditState>,
) -> Line<'static> {
    let bound_span = |handle: Handle, value: f64| -> Span<'static> {
        if focused {
            if let Some(edit) = editing {
                if edit.handle == handle {
                    return Span::styled(format!("{}▏", edit.buffer), theme::warning());
                }
            }
        }
        let style = if focused && grabbed == handle {
            theme::warning()
        } else {
            theme::muted()
        };
        Span::styled(format!("{value:.2}"), style)
    };

    Line::from(vec![
        Span::styled("  min: ", theme::muted()),
        bound_span(Handle::Min, filter.selected_min()),
        Span::styled("   max: ", theme::muted()),
        bound_span(Handle::Max, filter.selected_max()),
        Span::styled(
            format!(
                "   (range {:.2} .. {:.2})",
                filter.global_min(),
                filter.global_max()
            ),
            theme::muted(),
        ),
    ])
}

/// Map a value to its bucket column, clamped into range.
fn bucket_of(filter: &RangeFilter, value: f64) -> usize {
    let frac = (value - filter.global_min()) / filter.span();
    let x = (frac * (filter.bins().saturating_sub(1)) as f64).round() as isize;
    x.clamp(0, filter.bins() as isize - 1) as usize
}
