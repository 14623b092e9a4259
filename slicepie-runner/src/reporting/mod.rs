//! Reporting and artifact export pipeline.

pub mod artifacts;
pub mod export;
pub mod reports;

pub use artifacts::{write_report_json, write_results, write_results_csv, ArtifactPaths};
pub use export::export_report;
pub use reports::MarkdownReportGenerator;
