//! Export orchestrator for artifacts and reports.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::reporting::artifacts::{write_report_json, write_results_csv, ArtifactPaths};
use crate::reporting::reports::MarkdownReportGenerator;
use crate::runner::ScenarioReport;

/// Hex characters of the scenario hash used for the folder name.
pub const SCENARIO_DIR_PREFIX_LEN: usize = 12;

/// Write `<output_dir>/<hash prefix>/{report.json, results.csv[, report.md]}`.
pub fn export_report(
    output_dir: impl AsRef<Path>,
    report: &ScenarioReport,
    include_markdown: bool,
) -> Result<ArtifactPaths> {
    let scenario_dir = output_dir
        .as_ref()
        .join(report.scenario_hash.short(SCENARIO_DIR_PREFIX_LEN));
    std::fs::create_dir_all(&scenario_dir).with_context(|| {
        format!(
            "Failed to create artifact directory {}",
            scenario_dir.display()
        )
    })?;

    let report_json = scenario_dir.join("report.json");
    write_report_json(&report_json, report)?;

    let results_csv = scenario_dir.join("results.csv");
    write_results_csv(&results_csv, &report.results)?;

    let report_markdown = if include_markdown {
        let path = scenario_dir.join("report.md");
        let markdown = MarkdownReportGenerator.generate(report);
        std::fs::write(&path, markdown)
            .with_context(|| format!("Failed to write report {}", path.display()))?;
        Some(path)
    } else {
        None
    };

    info!(dir = %scenario_dir.display(), "report exported");

    Ok(ArtifactPaths {
        scenario_dir,
        report_json,
        results_csv,
        report_markdown,
    })
}
