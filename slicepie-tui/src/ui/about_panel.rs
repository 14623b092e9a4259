//! About panel: the method, the disclaimer and keyboard shortcuts.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use slicepie_runner::about;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, _app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, about::TITLE);
    lines.push(Line::from(Span::styled(about::SUMMARY, theme::text())));
    lines.push(Line::from(""));

    section(&mut lines, "How it Works");
    for (heading, body) in about::METHOD {
        key(&mut lines, heading, body);
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(about::DISCLAIMER, theme::warning())));
    lines.push(Line::from(""));

    section(&mut lines, "Global Navigation");
    key(&mut lines, "1-3", "Switch to panel by number");
    key(&mut lines, "Tab / Shift+Tab", "Cycle panels forward / back");
    key(&mut lines, "q", "Quit (nothing is saved)");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 1: Calculator");
    key(&mut lines, "j / k", "Move between fields");
    key(&mut lines, "h / l", "Same field on the previous / next cofounder");
    key(&mut lines, "Enter", "Edit the focused field; Enter saves, Esc cancels");
    key(&mut lines, "a", "Add a cofounder");
    key(&mut lines, "x", "Remove the focused cofounder (one must remain)");
    key(&mut lines, "c", "Calculate the equity split");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 2: Results");
    key(&mut lines, "j / k", "Scroll cofounder cards");
    key(&mut lines, "c", "Recalculate");

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(para, area);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>20}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
