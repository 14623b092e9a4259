//! Scenario runner: scenario file in, equity report out.
//!
//! Two entry points:
//! - `run_scenario()`: builds a session from a parsed scenario, then runs. Used by the CLI.
//! - `run_session()`: calculates an existing session and snapshots it into a report.
//!   Used by the TUI and by `run_scenario()` itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use slicepie_core::advisory::{review, Advisory};
use slicepie_core::calculator::EquitySummary;
use slicepie_core::domain::{CalculationParameters, EquityResult};
use slicepie_core::fingerprint::ScenarioHash;
use slicepie_core::session::Session;

use crate::config::{ConfigError, ScenarioConfig};

/// Errors from the runner.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Current schema version for persisted reports.
pub const SCHEMA_VERSION: u32 = 1;

/// Complete result of one scenario calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Schema version for forward-compatible deserialization.
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub scenario_hash: ScenarioHash,
    pub generated_at: DateTime<Utc>,
    pub params: CalculationParameters,
    pub results: Vec<EquityResult>,
    pub summary: EquitySummary,
    pub advisories: Vec<Advisory>,
}

/// Default schema version for serde deserialization of older JSON without the field.
fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

impl ScenarioReport {
    pub fn has_advisories(&self) -> bool {
        !self.advisories.is_empty()
    }
}

/// Build a session from `config` and calculate it.
pub fn run_scenario(config: &ScenarioConfig) -> Result<ScenarioReport, RunError> {
    let mut session = config.clone().into_session()?;
    Ok(run_session(&mut session))
}

/// Calculate `session` and snapshot inputs, results and advisories.
///
/// Advisories are logged at `warn` and carried in the report; they never
/// change the numbers.
pub fn run_session(session: &mut Session) -> ScenarioReport {
    let params = *session.params();
    let scenario_hash = ScenarioHash::of(session.cofounders(), &params);
    let advisories = review(session.cofounders(), &params);
    for advisory in &advisories {
        warn!(kind = ?advisory.kind, "{advisory}");
    }

    let results = session.calculate().to_vec();
    let summary = EquitySummary::from_results(&results, &params);

    info!(
        scenario = scenario_hash.short(12),
        cofounders = summary.cofounder_count,
        total_slices = summary.total_slices,
        "scenario calculated"
    );
    for r in &results {
        debug!(
            name = %r.cofounder.name,
            slices = r.slices,
            percentage = r.percentage,
            dollar_value = r.dollar_value,
            "cofounder share"
        );
    }

    ScenarioReport {
        schema_version: SCHEMA_VERSION,
        scenario_hash,
        generated_at: Utc::now(),
        params,
        results,
        summary,
        advisories,
    }
}
