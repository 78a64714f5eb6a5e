//! Panel 3 — Help: keyboard shortcuts.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, _app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global Navigation");
    key(&mut lines, "1-3", "Switch to panel by number");
    key(&mut lines, "Tab / Shift+Tab", "Cycle panels forward / back");
    key(&mut lines, "q", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 1 — Filters");
    key(&mut lines, "j / k", "Move between picker and filters");
    key(&mut lines, "h / l", "Picker: choose indicator. Filter: drag handle (hold to sweep)");
    key(&mut lines, "Enter / a", "Add the picked indicator's filter");
    key(&mut lines, "Space", "Grab the other handle (min ↔ max)");
    key(&mut lines, "i", "Type the grabbed bound (applies on every keystroke)");
    key(&mut lines, "Esc / Enter", "Leave typing mode");
    key(&mut lines, "x", "Remove the focused filter");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 2 — Results");
    key(&mut lines, "h / l", "Move the header cursor");
    key(&mut lines, "s / Enter", "Sort by that column; again to flip direction");
    key(&mut lines, "j / k", "Scroll rows");
    lines.push(Line::from(""));

    section(&mut lines, "Indicators");
    key(&mut lines, "LIQUIDITY 20D", "Mean of typical price × volume, last 20 sessions");
    key(&mut lines, "REL FORCE", "% deviation of last close from its 125-session SMA");
    key(&mut lines, "RF RATING", "Percentile rank of REL FORCE: 0 strongest, 100 weakest");
    lines.push(Line::from(""));

    section(&mut lines, "Notes");
    key(&mut lines, "", "Tickers must pass every active filter to appear in Results.");
    key(&mut lines, "", "With no filters active, Results is empty.");

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(
        title.to_string(),
        theme::accent_bold(),
    )));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>16}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
