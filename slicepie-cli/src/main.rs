//! Slicing Pie CLI: calculate, quick and init commands.
//!
//! Commands:
//! - `calculate`: run a TOML scenario file and print or export the split
//! - `quick`: run cofounders given inline as `Name:cash:hours:salary:idea:risk`
//! - `init`: write a starter scenario file

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use slicepie_core::domain::{
    CofounderContribution, CofounderId, ContributionEdit, ContributionField,
    DEFAULT_COMPANY_VALUATION, DEFAULT_TIME_HORIZON_MONTHS,
};
use slicepie_core::input::parse_number;
use slicepie_runner::config::{CofounderEntry, CompanySection, ScenarioConfig};
use slicepie_runner::format;
use slicepie_runner::reporting::{export_report, write_results, MarkdownReportGenerator};
use slicepie_runner::runner::{run_scenario, ScenarioReport};

#[derive(Parser)]
#[command(
    name = "slicepie",
    version,
    about = "Slicing Pie CLI - dynamic equity split calculator"
)]
struct Cli {
    /// Log debug detail to stderr (RUST_LOG overrides).
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the split for a TOML scenario file.
    Calculate {
        /// Path to a scenario TOML file.
        #[arg(long)]
        scenario: PathBuf,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Also write report.json, results.csv and report.md under this directory.
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Calculate the split for cofounders given on the command line.
    Quick {
        /// Cofounder as `Name:cash:hours:salary:idea:risk`; trailing fields may be omitted.
        #[arg(long = "cofounder", required = true)]
        cofounders: Vec<String>,

        /// Company valuation in dollars; any sign, `$` and `,` accepted.
        #[arg(
            long,
            default_value_t = DEFAULT_COMPANY_VALUATION,
            value_parser = parse_amount,
            allow_negative_numbers = true
        )]
        valuation: f64,

        /// Time horizon in months.
        #[arg(
            long,
            default_value_t = DEFAULT_TIME_HORIZON_MONTHS,
            value_parser = parse_amount,
            allow_negative_numbers = true
        )]
        horizon: f64,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Write a starter scenario file.
    Init {
        /// Where to write the scenario.
        #[arg(long, default_value = "scenario.toml")]
        path: PathBuf,

        /// Number of cofounders in the template.
        #[arg(long, default_value_t = 2)]
        cofounders: usize,

        /// Overwrite an existing file.
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Markdown,
    Json,
    Csv,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Calculate {
            scenario,
            format,
            output_dir,
        } => run_calculate(&scenario, format, output_dir.as_deref()),
        Commands::Quick {
            cofounders,
            valuation,
            horizon,
            format,
        } => run_quick(&cofounders, valuation, horizon, format),
        Commands::Init {
            path,
            cofounders,
            force,
        } => run_init(&path, cofounders, force),
    }
}

/// Logs go to stderr so report output on stdout stays machine-readable.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("slicepie=debug,slicepie_runner=debug"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("slicepie=info,slicepie_runner=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_calculate(scenario: &Path, format: OutputFormat, output_dir: Option<&Path>) -> Result<()> {
    let config = ScenarioConfig::from_file(scenario)
        .with_context(|| format!("Failed to load scenario {}", scenario.display()))?;
    let report = run_scenario(&config)?;

    emit(&report, format)?;

    if let Some(dir) = output_dir {
        let paths = export_report(dir, &report, true)?;
        info!(dir = %paths.scenario_dir.display(), "artifacts written");
        if format == OutputFormat::Text {
            println!("Artifacts saved to: {}", paths.scenario_dir.display());
        }
    }

    Ok(())
}

fn run_quick(args: &[String], valuation: f64, horizon: f64, format: OutputFormat) -> Result<()> {
    let cofounders = args
        .iter()
        .enumerate()
        .map(|(i, arg)| parse_cofounder_arg(arg, i as u64 + 1))
        .collect::<Result<Vec<_>>>()?;

    let config = ScenarioConfig {
        company: CompanySection {
            valuation,
            time_horizon_months: horizon,
        },
        cofounders: cofounders.iter().map(CofounderEntry::from).collect(),
    };
    let report = run_scenario(&config)?;
    emit(&report, format)
}

fn run_init(path: &Path, cofounders: usize, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists; pass --force to overwrite",
            path.display()
        );
    }

    let text = ScenarioConfig::template(cofounders).to_toml()?;
    std::fs::write(path, text)
        .with_context(|| format!("Failed to write scenario {}", path.display()))?;
    println!("Scenario written to: {}", path.display());
    Ok(())
}

/// Same coercion as the `--cofounder` fields, so `inf` and `NaN` are refused.
fn parse_amount(text: &str) -> Result<f64, String> {
    parse_number(text).map_err(|e| e.to_string())
}

/// Parse `Name:cash:hours:salary:idea:risk`. Missing trailing fields keep the
/// form defaults; empty numeric fields count as 0.
fn parse_cofounder_arg(arg: &str, position: u64) -> Result<CofounderContribution> {
    let mut parts = arg.split(':');
    let mut cofounder = CofounderContribution::with_defaults(CofounderId::from(position));

    if let Some(name) = parts.next().map(str::trim).filter(|n| !n.is_empty()) {
        cofounder.name = name.to_string();
    }

    let numeric_fields = [
        ContributionField::CashContribution,
        ContributionField::WeeklyHours,
        ContributionField::MarketSalary,
        ContributionField::IdeaValue,
        ContributionField::RiskMultiplier,
    ];
    for field in numeric_fields {
        let Some(text) = parts.next() else { break };
        let value = parse_number(text)
            .with_context(|| format!("cofounder '{arg}': bad {}", field.label()))?;
        if let Some(edit) = ContributionEdit::numeric(field, value) {
            cofounder.apply(edit);
        }
    }

    if parts.next().is_some() {
        bail!("cofounder '{arg}': expected at most 6 ':'-separated fields");
    }

    Ok(cofounder)
}

fn emit(report: &ScenarioReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_summary(report),
        OutputFormat::Markdown => print!("{}", MarkdownReportGenerator.generate(report)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(report).context("Failed to serialize report")?
        ),
        OutputFormat::Csv => write_results(std::io::stdout().lock(), &report.results)?,
    }
    Ok(())
}

fn print_summary(report: &ScenarioReport) {
    let summary = &report.summary;
    println!();
    println!("=== Equity Split ===");
    println!("Scenario:       {}", report.scenario_hash.short(12));
    println!("Valuation:      {}", format::currency(summary.company_valuation));
    println!("Horizon:        {} months", summary.time_horizon_months);
    println!("Cofounders:     {}", summary.cofounder_count);
    println!("Total Slices:   {}", format::slices(summary.total_slices));
    println!();
    println!(
        "{:<20} {:>14} {:>9} {:>18}",
        "Cofounder", "Slices", "Equity", "Value"
    );
    println!("{}", "-".repeat(64));
    for r in &report.results {
        println!(
            "{:<20} {:>14} {:>9} {:>18}",
            r.cofounder.name,
            format::slices(r.slices),
            format::percent(r.percentage),
            format::currency(r.dollar_value)
        );
    }

    if summary.is_degenerate() {
        println!();
        println!("NOTE: total slices are not positive; every share is 0%");
    }
    for advisory in &report.advisories {
        println!("WARNING: {advisory}");
    }
}
