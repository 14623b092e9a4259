//! Scenario fingerprinting: deterministic identity of a set of inputs.
//!
//! Ids are left out: two scenarios with the same names and numbers in the same
//! order hash identically regardless of how their ids were assigned.

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;

use crate::domain::{CalculationParameters, CofounderContribution};

/// BLAKE3 hex digest of a scenario's canonical JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioHash(pub String);

impl ScenarioHash {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(blake3::hash(bytes).to_hex().to_string())
    }

    pub fn of(cofounders: &[CofounderContribution], params: &CalculationParameters) -> Self {
        let rows: Vec<_> = cofounders
            .iter()
            .map(|c| {
                json!({
                    "name": c.name,
                    "cash_contribution": c.cash_contribution,
                    "weekly_hours": c.weekly_hours,
                    "market_salary": c.market_salary,
                    "idea_value": c.idea_value,
                    "risk_multiplier": c.risk_multiplier,
                })
            })
            .collect();
        let canonical = json!({
            "company_valuation": params.company_valuation,
            "time_horizon_months": params.time_horizon_months,
            "cofounders": rows,
        });
        Self::from_bytes(canonical.to_string().as_bytes())
    }

    /// First `n` hex characters, for folder names and headers. A hash read
    /// back from a report may not be hex; it is then returned whole.
    pub fn short(&self, n: usize) -> &str {
        self.0.get(..n).unwrap_or(&self.0)
    }
}

impl fmt::Display for ScenarioHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CofounderId;

    fn pair() -> Vec<CofounderContribution> {
        vec![
            CofounderContribution::with_defaults(CofounderId::from(1)),
            CofounderContribution::with_defaults(CofounderId::from(2)),
        ]
    }

    #[test]
    fn hash_is_deterministic() {
        let params = CalculationParameters::default();
        assert_eq!(ScenarioHash::of(&pair(), &params), ScenarioHash::of(&pair(), &params));
    }

    #[test]
    fn hash_ignores_ids() {
        let params = CalculationParameters::default();
        let mut renumbered = pair();
        renumbered[0].id = CofounderId::new("a");
        renumbered[1].id = CofounderId::new("b");
        assert_eq!(ScenarioHash::of(&pair(), &params), ScenarioHash::of(&renumbered, &params));
    }

    #[test]
    fn hash_changes_with_inputs() {
        let params = CalculationParameters::default();
        let mut changed = pair();
        changed[1].idea_value = 1.0;
        assert_ne!(ScenarioHash::of(&pair(), &params), ScenarioHash::of(&changed, &params));
        assert_ne!(
            ScenarioHash::of(&pair(), &params),
            ScenarioHash::of(&pair(), &CalculationParameters::new(1.0, 12.0))
        );
    }

    #[test]
    fn hash_depends_on_order() {
        let params = CalculationParameters::default();
        let mut a = pair();
        a[0].cash_contribution = 5.0;
        let mut b = a.clone();
        b.reverse();
        assert_ne!(ScenarioHash::of(&a, &params), ScenarioHash::of(&b, &params));
    }

    #[test]
    fn short_prefix() {
        let h = ScenarioHash::from_bytes(b"pie");
        assert_eq!(h.short(8).len(), 8);
        assert_eq!(h.0.len(), 64);
        assert_eq!(h.short(1000), h.0);
    }

    #[test]
    fn short_never_splits_a_character() {
        let h = ScenarioHash("é9f0".to_string());
        assert_eq!(h.short(1), "é9f0");
        assert_eq!(h.short(3), "é9");
    }
}
