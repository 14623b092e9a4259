//! Global calculation parameters shared by every cofounder.

use serde::{Deserialize, Serialize};

pub const DEFAULT_COMPANY_VALUATION: f64 = 1_000_000.0;
pub const DEFAULT_TIME_HORIZON_MONTHS: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationParameters {
    /// Value the percentages are priced against. Any sign is accepted.
    pub company_valuation: f64,
    /// Months over which weekly time commitments are valued. 12 is a 1.0 scale.
    pub time_horizon_months: f64,
}

impl CalculationParameters {
    pub fn new(company_valuation: f64, time_horizon_months: f64) -> Self {
        Self {
            company_valuation,
            time_horizon_months,
        }
    }
}

impl Default for CalculationParameters {
    fn default() -> Self {
        Self::new(DEFAULT_COMPANY_VALUATION, DEFAULT_TIME_HORIZON_MONTHS)
    }
}
