//! Equity calculator: contributions in, slices and shares out.
//!
//! Every function here is pure. Inputs are never range-checked: negative or
//! zero values propagate arithmetically. The only guard is the division by
//! total slices, which yields 0% for everyone when the total is not positive.

use serde::{Deserialize, Serialize};

use crate::domain::{CalculationParameters, CofounderContribution, EquityResult, SliceBreakdown};

pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const STANDARD_WORK_WEEK_HOURS: f64 = 40.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Annual salary normalized to an hourly rate over a 52 × 40 hour year.
pub fn hourly_rate(market_salary: f64) -> f64 {
    market_salary / (WEEKS_PER_YEAR * STANDARD_WORK_WEEK_HOURS)
}

/// Hours committed over the horizon, priced at the cofounder's hourly rate.
pub fn time_slices(cofounder: &CofounderContribution, params: &CalculationParameters) -> f64 {
    let horizon_scale = params.time_horizon_months / MONTHS_PER_YEAR;
    cofounder.weekly_hours * WEEKS_PER_YEAR * horizon_scale * hourly_rate(cofounder.market_salary)
}

/// Per-component slices for one cofounder.
pub fn slice_breakdown(
    cofounder: &CofounderContribution,
    params: &CalculationParameters,
) -> SliceBreakdown {
    let cash = cofounder.cash_contribution;
    let time = time_slices(cofounder, params);
    let idea = cofounder.idea_value;
    let raw = cash + time + idea;
    SliceBreakdown {
        cash,
        time,
        idea,
        raw,
        total: raw * cofounder.risk_multiplier,
    }
}

/// Risk-scaled slice count for one cofounder.
pub fn cofounder_slices(cofounder: &CofounderContribution, params: &CalculationParameters) -> f64 {
    slice_breakdown(cofounder, params).total
}

/// Share of `total` held by `slices`, in percent. Zero when `total` is not positive.
pub fn percentage_of(slices: f64, total: f64) -> f64 {
    if total > 0.0 {
        slices / total * 100.0
    } else {
        0.0
    }
}

/// Split the pie.
///
/// Two passes: one to total the slices, one to compute each share. Output
/// order matches input order. An empty input yields an empty output.
pub fn calculate(
    cofounders: &[CofounderContribution],
    params: &CalculationParameters,
) -> Vec<EquityResult> {
    let breakdowns: Vec<SliceBreakdown> = cofounders
        .iter()
        .map(|c| slice_breakdown(c, params))
        .collect();
    let total: f64 = breakdowns.iter().map(|b| b.total).sum();

    cofounders
        .iter()
        .zip(breakdowns)
        .map(|(cofounder, breakdown)| {
            let percentage = percentage_of(breakdown.total, total);
            EquityResult {
                cofounder: cofounder.clone(),
                slices: breakdown.total,
                percentage,
                dollar_value: percentage / 100.0 * params.company_valuation,
                breakdown,
            }
        })
        .collect()
}

/// Sum of slices across a result set.
pub fn total_slices(results: &[EquityResult]) -> f64 {
    results.iter().map(|r| r.slices).sum()
}

/// Whole-pie figures shown alongside the per-cofounder results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquitySummary {
    pub cofounder_count: usize,
    pub total_slices: f64,
    pub percentage_sum: f64,
    pub dollar_value_sum: f64,
    pub company_valuation: f64,
    pub time_horizon_months: f64,
}

impl EquitySummary {
    pub fn from_results(results: &[EquityResult], params: &CalculationParameters) -> Self {
        Self {
            cofounder_count: results.len(),
            total_slices: total_slices(results),
            percentage_sum: results.iter().map(|r| r.percentage).sum(),
            dollar_value_sum: results.iter().map(|r| r.dollar_value).sum(),
            company_valuation: params.company_valuation,
            time_horizon_months: params.time_horizon_months,
        }
    }

    /// True when the total was not positive and every share came out as zero.
    pub fn is_degenerate(&self) -> bool {
        self.total_slices.is_nan() || self.total_slices <= 0.0
    }
}
