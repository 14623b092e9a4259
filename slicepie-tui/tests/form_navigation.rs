//! Property tests for the calculator form.
//!
//! Arbitrary key sequences must keep the form consistent:
//! 1. At least one cofounder always remains
//! 2. The cursor always points at a real row
//! 3. Results only change on an explicit calculate

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use proptest::prelude::*;

use slicepie_core::session::Session;
use slicepie_tui::{handle_key, AppState, Panel};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_key() -> impl Strategy<Value = KeyCode> {
    prop_oneof![
        Just(KeyCode::Char('j')),
        Just(KeyCode::Char('k')),
        Just(KeyCode::Char('h')),
        Just(KeyCode::Char('l')),
        Just(KeyCode::Char('a')),
        Just(KeyCode::Char('x')),
        Just(KeyCode::Char('c')),
        Just(KeyCode::Char('1')),
        Just(KeyCode::Char('2')),
        Just(KeyCode::Char('5')),
        Just(KeyCode::Char(',')),
        Just(KeyCode::Char('$')),
        Just(KeyCode::Enter),
        Just(KeyCode::Esc),
        Just(KeyCode::Backspace),
        Just(KeyCode::Tab),
    ]
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

// ── 1-2. Form invariants ─────────────────────────────────────────────

proptest! {
    #[test]
    fn form_stays_consistent(keys in prop::collection::vec(arb_key(), 0..200)) {
        let mut app = AppState::new(Session::new(), None);
        for code in keys {
            handle_key(&mut app, press(code));
            prop_assert!(app.running);
            prop_assert!(!app.session.cofounders().is_empty());
            prop_assert!(app.cursor < app.row_count());
        }
    }
}

// ── 3. Explicit recalculation ────────────────────────────────────────

proptest! {
    #[test]
    fn results_change_only_on_calculate(keys in prop::collection::vec(arb_key(), 0..100)) {
        let mut app = AppState::new(Session::new(), None);
        app.calculate();
        let before = app.session.results().map(|r| r.to_vec());

        for code in keys.into_iter().filter(|k| *k != KeyCode::Char('c')) {
            handle_key(&mut app, press(code));
        }

        prop_assert_eq!(app.session.results().map(|r| r.to_vec()), before);
    }
}

#[test]
fn tab_cycles_through_every_panel() {
    let mut app = AppState::new(Session::new(), None);
    let mut seen = Vec::new();
    for _ in 0..Panel::COUNT {
        seen.push(app.active_panel);
        handle_key(&mut app, press(KeyCode::Tab));
    }
    assert_eq!(seen, [Panel::Calculator, Panel::Results, Panel::About]);
    assert_eq!(app.active_panel, Panel::Calculator);
}
