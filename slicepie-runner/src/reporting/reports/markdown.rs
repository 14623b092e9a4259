//! Markdown report generator.

use crate::about;
use crate::format;
use crate::runner::ScenarioReport;

pub struct MarkdownReportGenerator;

impl MarkdownReportGenerator {
    pub fn generate(&self, report: &ScenarioReport) -> String {
        let summary = &report.summary;
        let mut out = format!(
            "# Slicing Pie Equity Report\n\n\
Scenario: `{}`\n\
Generated: {}\n\n\
## Summary\n\
- Cofounders: {}\n\
- Total Slices: {}\n\
- Company Valuation: {}\n\
- Time Horizon: {} months\n",
            report.scenario_hash.short(16),
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            summary.cofounder_count,
            format::slices(summary.total_slices),
            format::currency(summary.company_valuation),
            summary.time_horizon_months,
        );

        if summary.is_degenerate() {
            out.push_str(
                "\n> Total slices are not positive, so every share is reported as 0%.\n",
            );
        }

        out.push_str("\n## Equity Split\n\n");
        out.push_str("| Cofounder | Slices | Equity | Value |\n");
        out.push_str("|-----------|--------|--------|-------|\n");
        for r in &report.results {
            out.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                table_cell(&r.cofounder.name),
                format::slices(r.slices),
                format::percent(r.percentage),
                format::currency(r.dollar_value),
            ));
        }

        out.push_str("\n## Contribution Breakdown\n\n");
        out.push_str("| Cofounder | Cash | Time | Idea | Raw | Risk | Total |\n");
        out.push_str("|-----------|------|------|------|-----|------|-------|\n");
        for r in &report.results {
            let b = &r.breakdown;
            out.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} |\n",
                table_cell(&r.cofounder.name),
                format::slices(b.cash),
                format::slices(b.time),
                format::slices(b.idea),
                format::slices(b.raw),
                format::multiplier(r.cofounder.risk_multiplier),
                format::slices(b.total),
            ));
        }

        if report.has_advisories() {
            out.push_str("\n## Advisories\n\n");
            for advisory in &report.advisories {
                out.push_str(&format!("- {advisory}\n"));
            }
        }

        out.push_str(&format!("\n## Notes\n\n{}\n", about::DISCLAIMER));
        out
    }
}

/// Free text inside a table row; `|` would end the cell.
fn table_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
