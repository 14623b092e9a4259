//! Top-level UI layout: three-panel frame with status bar.

pub mod about_panel;
pub mod calculator_panel;
pub mod results_panel;
pub mod status_bar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{AppState, Panel};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: 1-line tab strip + main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_tabs(f, chunks[0], app);
    draw_panel(f, chunks[1], app);
    status_bar::render(f, chunks[2], app);
}

fn draw_tabs(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans = vec![Span::styled(" Slicing Pie ", theme::accent_bold())];
    for i in 0..Panel::COUNT {
        let Some(panel) = Panel::from_index(i) else {
            continue;
        };
        let mut label = format!(" {} {} ", i + 1, panel.label());
        if panel == Panel::Results && app.results_stale() {
            label.push_str("* ");
        }
        spans.push(Span::raw(" "));
        spans.push(Span::styled(label, theme::tab(panel == app.active_panel)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw a single panel with its border.
fn draw_panel(f: &mut Frame, area: Rect, app: &AppState) {
    let panel = app.active_panel;
    let is_active = true; // always active since we show only one

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(is_active))
        .title(format!(" {} [{}] ", panel.label(), panel.index() + 1))
        .title_style(theme::panel_title(is_active));

    let inner = block.inner(area);
    f.render_widget(block, area);

    match panel {
        Panel::Calculator => calculator_panel::render(f, inner, app),
        Panel::Results => results_panel::render(f, inner, app),
        Panel::About => about_panel::render(f, inner, app),
    }
}

/// First line to show so that `focus` stays visible in `height` lines.
pub fn scroll_to(focus: usize, height: u16) -> u16 {
    let height = height.max(1) as usize;
    let offset = (focus + 1).saturating_sub(height);
    u16::try_from(offset).unwrap_or(u16::MAX)
}
