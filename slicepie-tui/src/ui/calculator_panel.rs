//! Calculator panel: company settings plus one card per cofounder.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use slicepie_core::domain::ContributionField;
use slicepie_runner::format;

use crate::app::{row_label, AppState, FormRow};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();
    let mut focus_line = 0usize;

    // Header
    lines.push(Line::from(vec![
        Span::styled("Cofounders: ", theme::muted()),
        Span::styled(app.session.cofounders().len().to_string(), theme::accent()),
        Span::styled(
            "  [j/k]move [h/l]card [Enter]edit [a]dd [x]remove [c]alculate",
            theme::muted(),
        ),
    ]));
    if let Some(path) = &app.scenario_path {
        lines.push(Line::from(Span::styled(
            format!("Scenario: {}", path.display()),
            theme::muted(),
        )));
    }
    lines.push(Line::from(""));

    // Company settings
    lines.push(Line::from(Span::styled("Company Settings", theme::accent_bold())));
    for row in [FormRow::Valuation, FormRow::TimeHorizon] {
        if is_focused(app, row) {
            focus_line = lines.len();
        }
        let shown = match row {
            FormRow::Valuation => format::currency(app.session.params().company_valuation),
            _ => format!("{} months", app.session.params().time_horizon_months),
        };
        lines.push(field_line(app, row, shown));
    }

    // Cofounder cards
    for (card, cofounder) in app.session.cofounders().iter().enumerate() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(format!("Cofounder #{}", card + 1), theme::accent_bold()),
            Span::styled(format!("  id {}", cofounder.id), theme::muted()),
        ]));

        for field in ContributionField::ALL {
            let row = FormRow::Cofounder(card, field);
            if is_focused(app, row) {
                focus_line = lines.len();
            }
            let shown = match field {
                ContributionField::Name => cofounder.name.clone(),
                ContributionField::CashContribution => format::currency(cofounder.cash_contribution),
                ContributionField::WeeklyHours => format::weekly_hours(cofounder.weekly_hours),
                ContributionField::MarketSalary => format::currency(cofounder.market_salary),
                ContributionField::IdeaValue => format::currency(cofounder.idea_value),
                ContributionField::RiskMultiplier => format::multiplier(cofounder.risk_multiplier),
            };
            lines.push(field_line(app, row, shown));
        }
    }

    let para = Paragraph::new(lines).scroll((super::scroll_to(focus_line, area.height), 0));
    f.render_widget(para, area);
}

fn is_focused(app: &AppState, row: FormRow) -> bool {
    app.current_row() == row
}

fn field_line(app: &AppState, row: FormRow, shown: String) -> Line<'static> {
    let label = format!("  {:<28}", row_label(row));

    if let Some(edit) = app.editing.as_ref().filter(|e| e.row == row) {
        return Line::from(vec![
            Span::styled(label, theme::warning()),
            Span::styled(format!("{}_", edit.buffer), theme::editing()),
            Span::styled("  [Enter]save [Esc]cancel", theme::muted()),
        ]);
    }

    let value_style: Style = if is_focused(app, row) {
        theme::cursor()
    } else {
        theme::text()
    };
    Line::from(vec![
        Span::styled(label, theme::muted()),
        Span::styled(shown, value_style),
    ])
}
