//! Slicing Pie runner: scenario files, runs, formatting and reports.
//!
//! This crate builds on `slicepie-core` to provide:
//! - TOML scenario files with per-field defaults
//! - Scenario runs that log advisories and snapshot a report
//! - Display formatting for money, percentages, slices and multipliers
//! - Markdown, CSV and JSON report output with fingerprinted artifact folders

pub mod about;
pub mod config;
pub mod format;
pub mod reporting;
pub mod runner;

pub use config::{CofounderEntry, CompanySection, ConfigError, ScenarioConfig};
pub use reporting::{export_report, ArtifactPaths, MarkdownReportGenerator};
pub use runner::{run_scenario, run_session, RunError, ScenarioReport, SCHEMA_VERSION};
