//! Artifact writers: results table (CSV) and full report (JSON).

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

use slicepie_core::domain::EquityResult;

use crate::runner::ScenarioReport;

/// Artifact paths returned after export.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub scenario_dir: PathBuf,
    pub report_json: PathBuf,
    pub results_csv: PathBuf,
    pub report_markdown: Option<PathBuf>,
}

/// One CSV row per cofounder.
#[derive(Debug, Serialize)]
struct ResultRow<'a> {
    id: &'a str,
    name: &'a str,
    cash_contribution: f64,
    weekly_hours: f64,
    market_salary: f64,
    idea_value: f64,
    risk_multiplier: f64,
    cash_slices: f64,
    time_slices: f64,
    idea_slices: f64,
    raw_slices: f64,
    slices: f64,
    percentage: f64,
    dollar_value: f64,
}

impl<'a> From<&'a EquityResult> for ResultRow<'a> {
    fn from(r: &'a EquityResult) -> Self {
        let c = &r.cofounder;
        Self {
            id: c.id.as_str(),
            name: &c.name,
            cash_contribution: c.cash_contribution,
            weekly_hours: c.weekly_hours,
            market_salary: c.market_salary,
            idea_value: c.idea_value,
            risk_multiplier: c.risk_multiplier,
            cash_slices: r.breakdown.cash,
            time_slices: r.breakdown.time,
            idea_slices: r.breakdown.idea,
            raw_slices: r.breakdown.raw,
            slices: r.slices,
            percentage: r.percentage,
            dollar_value: r.dollar_value,
        }
    }
}

/// Write the results table as CSV to any writer (a file, stdout).
pub fn write_results<W: Write>(writer: W, results: &[EquityResult]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for r in results {
        csv.serialize(ResultRow::from(r))
            .with_context(|| format!("Failed to write CSV row for {}", r.cofounder.name))?;
    }
    csv.flush().context("Failed to flush results CSV")?;
    Ok(())
}

pub fn write_results_csv(path: &Path, results: &[EquityResult]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create results CSV {}", path.display()))?;
    write_results(file, results)
}

pub fn write_report_json(path: &Path, report: &ScenarioReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write report JSON {}", path.display()))?;
    Ok(())
}
