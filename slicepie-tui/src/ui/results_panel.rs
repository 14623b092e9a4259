//! Results panel: per-cofounder shares, breakdowns, summary and advisories.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use slicepie_core::calculator::EquitySummary;
use slicepie_runner::{about, format};

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    let Some(results) = app.session.results() else {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("No Results Yet", theme::accent_bold())));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(about::NO_RESULTS, theme::muted())));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press 1 for the Calculator, then c to calculate.",
            theme::accent(),
        )));
        let para = Paragraph::new(lines).wrap(Wrap { trim: true });
        f.render_widget(para, area);
        return;
    };

    // Header
    lines.push(Line::from(vec![
        Span::styled(format!("{} cofounders", results.len()), theme::accent()),
        Span::styled("  [j/k]scroll [c]recalculate [Enter]back to form", theme::muted()),
    ]));
    if app.results_stale() {
        lines.push(Line::from(Span::styled(
            "STALE: inputs changed since the last calculation. Press c to recalculate.",
            theme::warning(),
        )));
    }
    lines.push(Line::from(""));

    // Summary (computed against the params the results were built with)
    let summary = app
        .last_report
        .as_ref()
        .map(|r| r.summary)
        .unwrap_or_else(|| EquitySummary::from_results(results, app.session.params()));
    lines.push(Line::from(Span::styled("Equity Summary", theme::accent_bold())));
    lines.push(Line::from(vec![
        Span::styled("  Total Slices       ", theme::muted()),
        Span::styled(format::slices(summary.total_slices), theme::text()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  Company Valuation  ", theme::muted()),
        Span::styled(format::currency(summary.company_valuation), theme::text()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  Time Horizon       ", theme::muted()),
        Span::styled(format!("{} months", summary.time_horizon_months), theme::text()),
    ]));
    if summary.is_degenerate() {
        lines.push(Line::from(Span::styled(
            "  Total slices are not positive, so every share is 0%.",
            theme::warning(),
        )));
    }

    // Cards
    for r in results.iter().skip(app.results_scroll) {
        let b = &r.breakdown;
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(r.cofounder.name.clone(), theme::accent_bold()),
            Span::raw("  "),
            Span::styled(format::percent(r.percentage), theme::share(r.percentage)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  Slices  ", theme::muted()),
            Span::styled(format::slices(r.slices), theme::text()),
            Span::styled("   Value  ", theme::muted()),
            Span::styled(format::currency(r.dollar_value), theme::amount(r.dollar_value)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  Cash ", theme::muted()),
            Span::styled(format::slices(b.cash), theme::neutral()),
            Span::styled("  Time ", theme::muted()),
            Span::styled(format::slices(b.time), theme::neutral()),
            Span::styled("  Idea ", theme::muted()),
            Span::styled(format::slices(b.idea), theme::neutral()),
            Span::styled("  Risk ", theme::muted()),
            Span::styled(format::multiplier(r.cofounder.risk_multiplier), theme::neutral()),
        ]));
    }

    // Advisories from the last calculation
    if let Some(report) = app.last_report.as_ref().filter(|r| r.has_advisories()) {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Advisories", theme::warning())));
        for advisory in &report.advisories {
            lines.push(Line::from(Span::styled(
                format!("  ! {advisory}"),
                theme::warning(),
            )));
        }
    }

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(para, area);
}
