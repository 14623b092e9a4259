//! Domain types for the equity split

pub mod cofounder;
pub mod ids;
pub mod params;
pub mod result;

pub use cofounder::{
    CofounderContribution, ContributionEdit, ContributionField, DEFAULT_MARKET_SALARY,
    DEFAULT_RISK_MULTIPLIER, DEFAULT_WEEKLY_HOURS,
};
pub use ids::{CofounderId, IdSequence};
pub use params::{CalculationParameters, DEFAULT_COMPANY_VALUATION, DEFAULT_TIME_HORIZON_MONTHS};
pub use result::{EquityResult, SliceBreakdown};
