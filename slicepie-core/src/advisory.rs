//! Advisories: non-blocking warnings about questionable inputs.
//!
//! The calculator accepts every real-valued input. Values that are probably
//! mistakes (negative money, a risk multiplier outside the suggested range,
//! a pie with no positive total) are reported here and left untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calculator::cofounder_slices;
use crate::domain::{CalculationParameters, CofounderContribution, CofounderId, ContributionField};

pub const RISK_MULTIPLIER_MIN: f64 = 0.1;
pub const RISK_MULTIPLIER_MAX: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdvisoryKind {
    NegativeContribution,
    RiskMultiplierOutOfRange,
    NegativeValuation,
    NonPositiveTimeHorizon,
    NoPositiveSlices,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub kind: AdvisoryKind,
    /// The cofounder concerned, `None` for company-wide advisories.
    pub cofounder: Option<CofounderId>,
    pub message: String,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Review inputs and list every advisory, cofounders first in input order.
pub fn review(cofounders: &[CofounderContribution], params: &CalculationParameters) -> Vec<Advisory> {
    let mut out = Vec::new();

    for c in cofounders {
        for field in [
            ContributionField::CashContribution,
            ContributionField::WeeklyHours,
            ContributionField::MarketSalary,
            ContributionField::IdeaValue,
        ] {
            if let Some(v) = c.numeric(field) {
                if v < 0.0 {
                    out.push(Advisory {
                        kind: AdvisoryKind::NegativeContribution,
                        cofounder: Some(c.id.clone()),
                        message: format!("{}: {} is negative ({v})", c.name, field.label()),
                    });
                }
            }
        }

        let risk = c.risk_multiplier;
        if !(RISK_MULTIPLIER_MIN..=RISK_MULTIPLIER_MAX).contains(&risk) {
            out.push(Advisory {
                kind: AdvisoryKind::RiskMultiplierOutOfRange,
                cofounder: Some(c.id.clone()),
                message: format!(
                    "{}: risk multiplier {risk} is outside the suggested {RISK_MULTIPLIER_MIN}–{RISK_MULTIPLIER_MAX} range",
                    c.name
                ),
            });
        }
    }

    if params.company_valuation < 0.0 {
        out.push(Advisory {
            kind: AdvisoryKind::NegativeValuation,
            cofounder: None,
            message: format!(
                "company valuation is negative ({}); dollar values will be negative",
                params.company_valuation
            ),
        });
    }

    if !is_positive(params.time_horizon_months) {
        out.push(Advisory {
            kind: AdvisoryKind::NonPositiveTimeHorizon,
            cofounder: None,
            message: format!(
                "time horizon is {} months; time contributions will not count positively",
                params.time_horizon_months
            ),
        });
    }

    if !cofounders.is_empty() {
        let total: f64 = cofounders.iter().map(|c| cofounder_slices(c, params)).sum();
        if !is_positive(total) {
            out.push(Advisory {
                kind: AdvisoryKind::NoPositiveSlices,
                cofounder: None,
                message: format!("total slices is {total}; every share will be 0%"),
            });
        }
    }

    out
}

fn is_positive(v: f64) -> bool {
    v > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cofounder(id: u64) -> CofounderContribution {
        CofounderContribution::with_defaults(CofounderId::from(id))
    }

    fn kinds(advisories: &[Advisory]) -> Vec<AdvisoryKind> {
        advisories.iter().map(|a| a.kind).collect()
    }

    #[test]
    fn defaults_raise_nothing() {
        let out = review(&[cofounder(1), cofounder(2)], &CalculationParameters::default());
        assert!(out.is_empty(), "{out:?}");
    }

    #[test]
    fn negative_cash_is_flagged_for_that_cofounder() {
        let mut c = cofounder(2);
        c.cash_contribution = -10.0;
        let out = review(&[cofounder(1), c], &CalculationParameters::default());
        assert_eq!(kinds(&out), vec![AdvisoryKind::NegativeContribution]);
        assert_eq!(out[0].cofounder, Some(CofounderId::from(2)));
        assert!(out[0].message.contains("Cash Contribution"));
    }

    #[test]
    fn risk_multiplier_bounds_are_inclusive() {
        let mut low = cofounder(1);
        low.risk_multiplier = 0.1;
        let mut high = cofounder(2);
        high.risk_multiplier = 5.0;
        assert!(review(&[low, high], &CalculationParameters::default()).is_empty());

        let mut over = cofounder(3);
        over.risk_multiplier = 6.0;
        let out = review(&[over], &CalculationParameters::default());
        assert_eq!(kinds(&out), vec![AdvisoryKind::RiskMultiplierOutOfRange]);
    }

    #[test]
    fn company_wide_checks() {
        let params = CalculationParameters::new(-1.0, 0.0);
        let out = review(&[cofounder(1)], &params);
        assert!(kinds(&out).contains(&AdvisoryKind::NegativeValuation));
        assert!(kinds(&out).contains(&AdvisoryKind::NonPositiveTimeHorizon));
        // Horizon 0 wipes out the only contribution.
        assert!(kinds(&out).contains(&AdvisoryKind::NoPositiveSlices));
        assert!(out.iter().all(|a| a.cofounder.is_none()));
    }

    #[test]
    fn empty_list_has_no_total_advisory() {
        assert!(review(&[], &CalculationParameters::default()).is_empty());
    }
}
