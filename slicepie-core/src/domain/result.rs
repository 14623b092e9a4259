//! Calculation output types.

use serde::{Deserialize, Serialize};

use super::cofounder::CofounderContribution;

/// Where a cofounder's slices come from, before and after risk scaling.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SliceBreakdown {
    pub cash: f64,
    pub time: f64,
    pub idea: f64,
    /// `cash + time + idea`, before the risk multiplier.
    pub raw: f64,
    /// `raw * risk_multiplier`.
    pub total: f64,
}

/// One cofounder's share of the pie.
///
/// Derived data: rebuilt wholesale on every calculation and never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityResult {
    /// Snapshot of the record the result was computed from.
    pub cofounder: CofounderContribution,
    pub slices: f64,
    /// 0–100. Zero for everyone when total slices is not positive.
    pub percentage: f64,
    pub dollar_value: f64,
    pub breakdown: SliceBreakdown,
}
