//! Slicing Pie TUI: terminal form for the equity split calculator.
//!
//! Provides the three tabs of the calculator:
//! - Calculator: company settings and one editable card per cofounder
//! - Results: per-cofounder shares with a stale marker after edits
//! - About: the method, the disclaimer and key bindings

pub mod app;
pub mod input;
pub mod theme;
pub mod ui;

pub use app::{AppState, Panel};
pub use input::handle_key;
pub use theme::Theme;
