//! Keyboard input dispatch: edit mode → global keys → panel-specific handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Panel};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. An open text edit consumes input first.
    if app.editing.is_some() {
        handle_edit_key(app, key);
        return;
    }

    // 2. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => { app.active_panel = Panel::Calculator; return; }
        KeyCode::Char('2') => { app.active_panel = Panel::Results; return; }
        KeyCode::Char('3') => { app.active_panel = Panel::About; return; }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_panel = app.active_panel.prev();
            } else {
                app.active_panel = app.active_panel.next();
            }
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
        Panel::Calculator => handle_calculator_key(app, key),
        Panel::Results => handle_results_key(app, key),
        Panel::About => {} // display only
    }
}

fn handle_edit_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Enter => app.commit_edit(),
        KeyCode::Backspace => {
            if let Some(edit) = app.editing.as_mut() {
                edit.buffer.pop();
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(edit) = app.editing.as_mut() {
                edit.buffer.clear();
            }
        }
        KeyCode::Char(c) => {
            if let Some(edit) = app.editing.as_mut() {
                edit.buffer.push(c);
            }
        }
        _ => {}
    }
}

fn handle_calculator_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('l') | KeyCode::Right => app.next_card(),
        KeyCode::Char('h') | KeyCode::Left => app.prev_card(),
        KeyCode::Enter => app.begin_edit(),
        KeyCode::Char('a') => app.add_cofounder(),
        KeyCode::Char('x') => app.remove_current_cofounder(),
        KeyCode::Char('c') => app.calculate(),
        _ => {}
    }
}

fn handle_results_key(app: &mut AppState, key: KeyEvent) {
    let cards = app.session.results().map_or(0, |r| r.len());
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.results_scroll + 1 < cards {
                app.results_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.results_scroll = app.results_scroll.saturating_sub(1);
        }
        KeyCode::Char('c') => app.calculate(),
        KeyCode::Enter => app.active_panel = Panel::Calculator,
        _ => {}
    }
}
