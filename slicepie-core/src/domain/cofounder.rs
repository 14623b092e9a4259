//! Cofounder contribution record and its editable fields.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CofounderId;

/// Hours per week assumed for a freshly added cofounder.
pub const DEFAULT_WEEKLY_HOURS: f64 = 40.0;

/// Annual market salary assumed for a freshly added cofounder.
pub const DEFAULT_MARKET_SALARY: f64 = 120_000.0;

/// Neutral risk multiplier.
pub const DEFAULT_RISK_MULTIPLIER: f64 = 1.0;

/// What one participant puts into the company.
///
/// All monetary amounts share one currency unit. Nothing here is range-checked:
/// negative or zero values are carried through the calculation as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CofounderContribution {
    pub id: CofounderId,
    pub name: String,
    /// Cash put in, converted to slices 1:1.
    pub cash_contribution: f64,
    /// Hours committed per week.
    pub weekly_hours: f64,
    /// Annual salary the cofounder could earn elsewhere; prices their time.
    pub market_salary: f64,
    /// Claimed value of the idea or IP, converted to slices 1:1.
    pub idea_value: f64,
    /// Scales the whole contribution. Suggested range 0.1–5.
    pub risk_multiplier: f64,
}

impl CofounderContribution {
    /// Default record for a new cofounder, named after its id.
    pub fn with_defaults(id: CofounderId) -> Self {
        let name = format!("Cofounder {id}");
        Self {
            id,
            name,
            cash_contribution: 0.0,
            weekly_hours: DEFAULT_WEEKLY_HOURS,
            market_salary: DEFAULT_MARKET_SALARY,
            idea_value: 0.0,
            risk_multiplier: DEFAULT_RISK_MULTIPLIER,
        }
    }

    /// Apply a single field-level edit in place.
    pub fn apply(&mut self, edit: ContributionEdit) {
        match edit {
            ContributionEdit::Name(name) => self.name = name,
            ContributionEdit::CashContribution(v) => self.cash_contribution = v,
            ContributionEdit::WeeklyHours(v) => self.weekly_hours = v,
            ContributionEdit::MarketSalary(v) => self.market_salary = v,
            ContributionEdit::IdeaValue(v) => self.idea_value = v,
            ContributionEdit::RiskMultiplier(v) => self.risk_multiplier = v,
        }
    }

    /// Numeric value of a field, `None` for the name.
    pub fn numeric(&self, field: ContributionField) -> Option<f64> {
        match field {
            ContributionField::Name => None,
            ContributionField::CashContribution => Some(self.cash_contribution),
            ContributionField::WeeklyHours => Some(self.weekly_hours),
            ContributionField::MarketSalary => Some(self.market_salary),
            ContributionField::IdeaValue => Some(self.idea_value),
            ContributionField::RiskMultiplier => Some(self.risk_multiplier),
        }
    }

    /// Field value rendered as editable text.
    pub fn field_text(&self, field: ContributionField) -> String {
        match self.numeric(field) {
            Some(v) => format!("{v}"),
            None => self.name.clone(),
        }
    }
}

/// Editable fields of a contribution, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContributionField {
    Name,
    CashContribution,
    WeeklyHours,
    MarketSalary,
    IdeaValue,
    RiskMultiplier,
}

impl ContributionField {
    pub const ALL: [ContributionField; 6] = [
        ContributionField::Name,
        ContributionField::CashContribution,
        ContributionField::WeeklyHours,
        ContributionField::MarketSalary,
        ContributionField::IdeaValue,
        ContributionField::RiskMultiplier,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContributionField::Name => "Name",
            ContributionField::CashContribution => "Cash Contribution ($)",
            ContributionField::WeeklyHours => "Time Commitment (hrs/week)",
            ContributionField::MarketSalary => "Market Salary ($)",
            ContributionField::IdeaValue => "Idea Value ($)",
            ContributionField::RiskMultiplier => "Risk Multiplier",
        }
    }

    pub fn is_numeric(self) -> bool {
        !matches!(self, ContributionField::Name)
    }
}

impl fmt::Display for ContributionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A typed field-level edit.
#[derive(Debug, Clone, PartialEq)]
pub enum ContributionEdit {
    Name(String),
    CashContribution(f64),
    WeeklyHours(f64),
    MarketSalary(f64),
    IdeaValue(f64),
    RiskMultiplier(f64),
}

impl ContributionEdit {
    /// Build a numeric edit for `field`. Returns `None` for the name field.
    pub fn numeric(field: ContributionField, value: f64) -> Option<Self> {
        match field {
            ContributionField::Name => None,
            ContributionField::CashContribution => Some(Self::CashContribution(value)),
            ContributionField::WeeklyHours => Some(Self::WeeklyHours(value)),
            ContributionField::MarketSalary => Some(Self::MarketSalary(value)),
            ContributionField::IdeaValue => Some(Self::IdeaValue(value)),
            ContributionField::RiskMultiplier => Some(Self::RiskMultiplier(value)),
        }
    }

    pub fn field(&self) -> ContributionField {
        match self {
            Self::Name(_) => ContributionField::Name,
            Self::CashContribution(_) => ContributionField::CashContribution,
            Self::WeeklyHours(_) => ContributionField::WeeklyHours,
            Self::MarketSalary(_) => ContributionField::MarketSalary,
            Self::IdeaValue(_) => ContributionField::IdeaValue,
            Self::RiskMultiplier(_) => ContributionField::RiskMultiplier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_new_cofounder_form() {
        let c = CofounderContribution::with_defaults(CofounderId::from(3));
        assert_eq!(c.name, "Cofounder 3");
        assert_eq!(c.cash_contribution, 0.0);
        assert_eq!(c.weekly_hours, 40.0);
        assert_eq!(c.market_salary, 120_000.0);
        assert_eq!(c.idea_value, 0.0);
        assert_eq!(c.risk_multiplier, 1.0);
    }

    #[test]
    fn apply_touches_only_the_named_field() {
        let mut c = CofounderContribution::with_defaults(CofounderId::from(1));
        c.apply(ContributionEdit::IdeaValue(50_000.0));
        assert_eq!(c.idea_value, 50_000.0);
        assert_eq!(c.weekly_hours, 40.0);

        c.apply(ContributionEdit::Name("Ada".into()));
        assert_eq!(c.name, "Ada");
    }

    #[test]
    fn numeric_edit_round_trips_field() {
        for field in ContributionField::ALL {
            match ContributionEdit::numeric(field, 2.5) {
                Some(edit) => assert_eq!(edit.field(), field),
                None => assert_eq!(field, ContributionField::Name),
            }
        }
    }

    #[test]
    fn field_text_renders_numbers_plainly() {
        let c = CofounderContribution::with_defaults(CofounderId::from(1));
        assert_eq!(c.field_text(ContributionField::MarketSalary), "120000");
        assert_eq!(c.field_text(ContributionField::RiskMultiplier), "1");
        assert_eq!(c.field_text(ContributionField::Name), "Cofounder 1");
    }
}
