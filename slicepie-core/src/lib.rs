//! Slicing Pie core: domain types, equity calculator, session state.
//!
//! This crate contains the whole equity-split model:
//! - Domain types (contributions, parameters, results)
//! - The calculator: contributions → risk-scaled slices → percentages and dollar values
//! - A caller-owned session with explicit recalculation and staleness tracking
//! - Text-to-number coercion for form and command-line input
//! - Non-blocking advisories for questionable inputs
//! - Scenario fingerprints

pub mod advisory;
pub mod calculator;
pub mod domain;
pub mod fingerprint;
pub mod input;
pub mod session;

pub use advisory::{review, Advisory, AdvisoryKind};
pub use calculator::{calculate, EquitySummary};
pub use domain::{
    CalculationParameters, CofounderContribution, CofounderId, ContributionEdit,
    ContributionField, EquityResult, SliceBreakdown,
};
pub use fingerprint::ScenarioHash;
pub use input::{coerce_number, parse_number, InputError};
pub use session::{Session, SessionError};
