//! Keyboard input dispatch — edit mode → global keys → panel handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::{AppState, Panel};

/// Handle a key event. All mutation is synchronous; no other callback
/// runs until this one returns.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Bound editing consumes input first, so digits reach the buffer
    //    instead of switching panels.
    if app.active_panel == Panel::Filters && app.filters.editing.is_some() {
        handle_edit_key(app, key);
        return;
    }

    // 2. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => {
            app.active_panel = Panel::Filters;
            return;
        }
        KeyCode::Char('2') => {
            app.active_panel = Panel::Results;
            return;
        }
        KeyCode::Char('3') => {
            app.active_panel = Panel::Help;
            return;
        }
        KeyCode::Tab => {
            app.active_panel = app.active_panel.next();
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        _ => {}
    }

    // 3. Panel-specific keys.
    match app.active_panel {
        Panel::Filters => handle_filters_key(app, key),
        Panel::Results => handle_results_key(app, key),
        Panel::Help => {} // display only
    }
}

fn handle_edit_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.end_edit(),
        KeyCode::Backspace => app.pop_edit_char(),
        KeyCode::Char(c) => app.push_edit_char(c),
        _ => {}
    }
}

fn handle_filters_key(app: &mut AppState, key: KeyEvent) {
    let row_count = app.filter_row_count();
    let on_picker = app.filters.cursor == 0;

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.filters.cursor + 1 < row_count {
                app.filters.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.filters.cursor = app.filters.cursor.saturating_sub(1);
        }
        KeyCode::Char('h') | KeyCode::Left => {
            // Picker row: cycle indicator. Filter row: drag the grabbed
            // handle one bucket down; holding the key drags continuously.
            if on_picker {
                app.cycle_picker(-1);
            } else {
                app.drag_focused(-1);
            }
        }
        KeyCode::Char('l') | KeyCode::Right => {
            if on_picker {
                app.cycle_picker(1);
            } else {
                app.drag_focused(1);
            }
        }
        KeyCode::Enter | KeyCode::Char('a') => {
            if on_picker || key.code == KeyCode::Char('a') {
                app.add_picked_filter();
            }
        }
        KeyCode::Char(' ') => {
            if !on_picker {
                app.grab_other_handle();
            }
        }
        KeyCode::Char('i') => {
            if !on_picker {
                app.begin_edit();
            }
        }
        KeyCode::Char('x') => {
            app.remove_focused_filter();
        }
        _ => {}
    }
}

fn handle_results_key(app: &mut AppState, key: KeyEvent) {
    let row_count = app.table_rows().len();
    let column_count = app.column_count();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if row_count > 0 && app.results.scroll_offset + 1 < row_count {
                app.results.scroll_offset += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.results.scroll_offset = app.results.scroll_offset.saturating_sub(1);
        }
        KeyCode::Char('h') | KeyCode::Left => {
            app.results.header_cursor = app.results.header_cursor.saturating_sub(1);
        }
        KeyCode::Char('l') | KeyCode::Right => {
            if app.results.header_cursor + 1 < column_count {
                app.results.header_cursor += 1;
            }
        }
        KeyCode::Enter | KeyCode::Char('s') => {
            app.toggle_sort();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Handle;
    use crate::sample_data::sample_universe;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> AppState {
        AppState::new(sample_universe())
    }

    #[test]
    fn q_quits() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn digits_switch_panels() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Char('2')));
        assert_eq!(app.active_panel, Panel::Results);
        handle_key(&mut app, key(KeyCode::Char('3')));
        assert_eq!(app.active_panel, Panel::Help);
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.active_panel, Panel::Filters);
    }

    #[test]
    fn enter_on_picker_adds_a_filter() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.screener.filter_count(), 1);
    }

    #[test]
    fn space_grabs_the_other_handle() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.filters.grabbed, Handle::Min);
        handle_key(&mut app, key(KeyCode::Char(' ')));
        assert_eq!(app.filters.grabbed, Handle::Max);
    }

    #[test]
    fn digits_feed_the_edit_buffer_not_the_panels() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Enter)); // add filter
        handle_key(&mut app, key(KeyCode::Char('i'))); // edit min
        handle_key(&mut app, key(KeyCode::Char('2')));
        assert_eq!(app.active_panel, Panel::Filters);
        assert_eq!(app.filters.editing.as_ref().unwrap().buffer, "2");
        handle_key(&mut app, key(KeyCode::Esc));
        assert!(app.filters.editing.is_none());
    }

    #[test]
    fn x_removes_the_focused_filter() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.screener.filter_count(), 1);
        handle_key(&mut app, key(KeyCode::Char('x')));
        assert_eq!(app.screener.filter_count(), 0);
        assert!(app.table_rows().is_empty());
    }

    #[test]
    fn sort_keys_toggle_direction() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Enter)); // add filter
        handle_key(&mut app, key(KeyCode::Char('2'))); // results panel
        handle_key(&mut app, key(KeyCode::Char('l'))); // header → column 1
        handle_key(&mut app, key(KeyCode::Char('s')));
        assert_eq!(app.results.sort.column, Some(1));
        assert!(app.results.sort.ascending);
        handle_key(&mut app, key(KeyCode::Char('s')));
        assert!(!app.results.sort.ascending);
        // Switching columns resets to ascending.
        handle_key(&mut app, key(KeyCode::Char('h')));
        handle_key(&mut app, key(KeyCode::Char('s')));
        assert_eq!(app.results.sort.column, Some(0));
        assert!(app.results.sort.ascending);
    }
}
