//! Application state: single-owner, main-thread only.
//!
//! All TUI state lives here: the equity session, the form cursor, the
//! in-progress text edit and the status line.

use std::path::PathBuf;

use slicepie_core::domain::{CofounderId, ContributionField};
use slicepie_core::input::parse_number;
use slicepie_core::session::{Session, SessionError};
use slicepie_runner::runner::{run_session, ScenarioReport};

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Calculator,
    Results,
    About,
}

impl Panel {
    pub const COUNT: usize = 3;

    pub fn index(self) -> usize {
        match self {
            Panel::Calculator => 0,
            Panel::Results => 1,
            Panel::About => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Calculator),
            1 => Some(Panel::Results),
            2 => Some(Panel::About),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Calculator => "Calculator",
            Panel::Results => "Results",
            Panel::About => "About",
        }
    }

    pub fn next(self) -> Panel {
        match self {
            Panel::Calculator => Panel::Results,
            Panel::Results => Panel::About,
            Panel::About => Panel::Calculator,
        }
    }

    pub fn prev(self) -> Panel {
        match self {
            Panel::Calculator => Panel::About,
            Panel::Results => Panel::Calculator,
            Panel::About => Panel::Results,
        }
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// One focusable row of the calculator form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    Valuation,
    TimeHorizon,
    /// Cofounder card index and field.
    Cofounder(usize, ContributionField),
}

/// Rows above the first cofounder card.
const COMPANY_ROWS: usize = 2;
const FIELDS_PER_CARD: usize = ContributionField::ALL.len();

/// Text being typed into a form row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    pub row: FormRow,
    pub buffer: String,
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub active_panel: Panel,
    pub running: bool,

    // Form
    pub session: Session,
    pub cursor: usize,
    pub editing: Option<EditState>,

    /// Snapshot from the last explicit calculation, with its advisories.
    pub last_report: Option<ScenarioReport>,
    pub results_scroll: usize,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub scenario_path: Option<PathBuf>,
}

impl AppState {
    pub fn new(session: Session, scenario_path: Option<PathBuf>) -> Self {
        Self {
            active_panel: Panel::Calculator,
            running: true,
            session,
            cursor: 0,
            editing: None,
            last_report: None,
            results_scroll: 0,
            status_message: None,
            scenario_path,
        }
    }

    // ── Form geometry ────────────────────────────────────────────────

    pub fn row_count(&self) -> usize {
        COMPANY_ROWS + self.session.cofounders().len() * FIELDS_PER_CARD
    }

    pub fn row_at(&self, index: usize) -> Option<FormRow> {
        match index {
            0 => Some(FormRow::Valuation),
            1 => Some(FormRow::TimeHorizon),
            i if i < self.row_count() => {
                let offset = i - COMPANY_ROWS;
                Some(FormRow::Cofounder(
                    offset / FIELDS_PER_CARD,
                    ContributionField::ALL[offset % FIELDS_PER_CARD],
                ))
            }
            _ => None,
        }
    }

    pub fn row_index(row: FormRow) -> usize {
        match row {
            FormRow::Valuation => 0,
            FormRow::TimeHorizon => 1,
            FormRow::Cofounder(card, field) => {
                let pos = ContributionField::ALL
                    .iter()
                    .position(|f| *f == field)
                    .unwrap_or(0);
                COMPANY_ROWS + card * FIELDS_PER_CARD + pos
            }
        }
    }

    pub fn current_row(&self) -> FormRow {
        self.row_at(self.cursor).unwrap_or(FormRow::Valuation)
    }

    /// Card under the cursor, if the cursor is inside one.
    pub fn current_card(&self) -> Option<usize> {
        match self.current_row() {
            FormRow::Cofounder(card, _) => Some(card),
            _ => None,
        }
    }

    /// Current value of a row as editable text.
    pub fn row_text(&self, row: FormRow) -> String {
        match row {
            FormRow::Valuation => self.session.params().company_valuation.to_string(),
            FormRow::TimeHorizon => self.session.params().time_horizon_months.to_string(),
            FormRow::Cofounder(card, field) => self
                .session
                .cofounders()
                .get(card)
                .map(|c| c.field_text(field))
                .unwrap_or_default(),
        }
    }

    // ── Cursor movement ──────────────────────────────────────────────

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.row_count() {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Jump to the same field on the next card, or into the first card.
    pub fn next_card(&mut self) {
        let target = match self.current_row() {
            FormRow::Cofounder(card, field) => FormRow::Cofounder(card + 1, field),
            _ => FormRow::Cofounder(0, ContributionField::Name),
        };
        let index = Self::row_index(target);
        if index < self.row_count() {
            self.cursor = index;
        }
    }

    /// Jump to the same field on the previous card, or up to the company rows.
    pub fn prev_card(&mut self) {
        self.cursor = match self.current_row() {
            FormRow::Cofounder(0, _) => Self::row_index(FormRow::Valuation),
            FormRow::Cofounder(card, field) => Self::row_index(FormRow::Cofounder(card - 1, field)),
            _ => Self::row_index(FormRow::Valuation),
        };
    }

    fn clamp_cursor(&mut self) {
        let last = self.row_count().saturating_sub(1);
        self.cursor = self.cursor.min(last);
    }

    // ── Editing ──────────────────────────────────────────────────────

    pub fn begin_edit(&mut self) {
        let row = self.current_row();
        self.editing = Some(EditState {
            row,
            buffer: self.row_text(row),
        });
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Apply the edit buffer. On a parse error the edit stays open.
    pub fn commit_edit(&mut self) {
        let Some(edit) = self.editing.take() else {
            return;
        };

        match self.apply_text(edit.row, &edit.buffer) {
            Ok(()) => self.set_status(format!("{} updated", row_label(edit.row))),
            Err(message) => {
                self.set_error(message);
                self.editing = Some(edit);
            }
        }
    }

    fn apply_text(&mut self, row: FormRow, text: &str) -> Result<(), String> {
        match row {
            FormRow::Valuation => {
                let value = parse_number(text).map_err(|e| format!("Company Valuation: {e}"))?;
                self.session.set_company_valuation(value);
            }
            FormRow::TimeHorizon => {
                let value = parse_number(text).map_err(|e| format!("Time Horizon: {e}"))?;
                self.session.set_time_horizon_months(value);
            }
            FormRow::Cofounder(card, field) => {
                let id = self.card_id(card).ok_or("cofounder no longer exists")?;
                self.session
                    .apply_text_edit(&id, field, text)
                    .map_err(|e| e.to_string())?;
            }
        }
        Ok(())
    }

    fn card_id(&self, card: usize) -> Option<CofounderId> {
        self.session.cofounders().get(card).map(|c| c.id.clone())
    }

    // ── Cofounder list ───────────────────────────────────────────────

    /// Append a default cofounder and focus its name.
    pub fn add_cofounder(&mut self) {
        let id = self.session.add_cofounder();
        let card = self.session.cofounders().len() - 1;
        self.cursor = Self::row_index(FormRow::Cofounder(card, ContributionField::Name));
        let name = self
            .session
            .cofounder(&id)
            .map(|c| c.name.clone())
            .unwrap_or_default();
        self.set_status(format!("Added {name}"));
    }

    /// Remove the cofounder under the cursor. The last one is kept.
    pub fn remove_current_cofounder(&mut self) {
        let Some(card) = self.current_card() else {
            self.set_warning("Move the cursor onto a cofounder card to remove it");
            return;
        };
        let Some(id) = self.card_id(card) else {
            return;
        };

        match self.session.remove_cofounder(&id) {
            Ok(removed) => {
                self.clamp_cursor();
                self.set_status(format!("Removed {}", removed.name));
            }
            Err(SessionError::LastCofounder(_)) => {
                self.set_warning("At least one cofounder is required");
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    // ── Calculation ──────────────────────────────────────────────────

    /// Explicit recalculation of the equity split.
    pub fn calculate(&mut self) {
        let report = run_session(&mut self.session);
        let advisories = report.advisories.len();
        let count = report.results.len();
        self.last_report = Some(report);
        self.results_scroll = 0;

        if advisories == 0 {
            self.set_status(format!(
                "Calculated split for {count} cofounders. Press 2 for Results"
            ));
        } else {
            self.set_warning(format!(
                "Calculated with {advisories} advisories. Press 2 for Results"
            ));
        }
    }

    pub fn has_results(&self) -> bool {
        self.session.results().is_some()
    }

    pub fn results_stale(&self) -> bool {
        self.session.is_stale()
    }

    // ── Status line ──────────────────────────────────────────────────

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    /// Set an error status message.
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}

/// Form label for a row.
pub fn row_label(row: FormRow) -> &'static str {
    match row {
        FormRow::Valuation => "Company Valuation ($)",
        FormRow::TimeHorizon => "Time Horizon (months)",
        FormRow::Cofounder(_, field) => field.label(),
    }
}
