//! Serializable scenario configuration (TOML).
//!
//! A scenario file holds the company parameters and one `[[cofounder]]` table
//! per cofounder. Every field is optional and falls back to the form defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use slicepie_core::domain::{
    CalculationParameters, CofounderContribution, CofounderId, DEFAULT_COMPANY_VALUATION,
    DEFAULT_MARKET_SALARY, DEFAULT_RISK_MULTIPLIER, DEFAULT_TIME_HORIZON_MONTHS,
    DEFAULT_WEEKLY_HOURS,
};
use slicepie_core::session::{Session, SessionError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scenario TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize scenario: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("scenario has no [[cofounder]] entries")]
    NoCofounders,
    #[error("{field} must be a finite number")]
    NonFinite { field: String },
    #[error("invalid scenario: {0}")]
    Session(#[from] SessionError),
}

/// Top-level scenario file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub company: CompanySection,
    #[serde(default, rename = "cofounder")]
    pub cofounders: Vec<CofounderEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanySection {
    #[serde(default = "default_valuation")]
    pub valuation: f64,
    #[serde(default = "default_horizon")]
    pub time_horizon_months: f64,
}

impl Default for CompanySection {
    fn default() -> Self {
        Self {
            valuation: DEFAULT_COMPANY_VALUATION,
            time_horizon_months: DEFAULT_TIME_HORIZON_MONTHS,
        }
    }
}

/// One `[[cofounder]]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CofounderEntry {
    /// Defaults to "Cofounder N" by position when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub cash_contribution: f64,
    #[serde(default = "default_weekly_hours")]
    pub weekly_hours: f64,
    #[serde(default = "default_market_salary")]
    pub market_salary: f64,
    #[serde(default)]
    pub idea_value: f64,
    #[serde(default = "default_risk_multiplier")]
    pub risk_multiplier: f64,
}

impl Default for CofounderEntry {
    fn default() -> Self {
        Self {
            name: None,
            cash_contribution: 0.0,
            weekly_hours: DEFAULT_WEEKLY_HOURS,
            market_salary: DEFAULT_MARKET_SALARY,
            idea_value: 0.0,
            risk_multiplier: DEFAULT_RISK_MULTIPLIER,
        }
    }
}

impl CofounderEntry {
    fn into_contribution(self, position: u64) -> CofounderContribution {
        let id = CofounderId::from(position);
        CofounderContribution {
            name: self.name.unwrap_or_else(|| format!("Cofounder {id}")),
            id,
            cash_contribution: self.cash_contribution,
            weekly_hours: self.weekly_hours,
            market_salary: self.market_salary,
            idea_value: self.idea_value,
            risk_multiplier: self.risk_multiplier,
        }
    }
}

impl From<&CofounderContribution> for CofounderEntry {
    fn from(c: &CofounderContribution) -> Self {
        Self {
            name: Some(c.name.clone()),
            cash_contribution: c.cash_contribution,
            weekly_hours: c.weekly_hours,
            market_salary: c.market_salary,
            idea_value: c.idea_value,
            risk_multiplier: c.risk_multiplier,
        }
    }
}

fn default_valuation() -> f64 {
    DEFAULT_COMPANY_VALUATION
}
fn default_horizon() -> f64 {
    DEFAULT_TIME_HORIZON_MONTHS
}
fn default_weekly_hours() -> f64 {
    DEFAULT_WEEKLY_HOURS
}
fn default_market_salary() -> f64 {
    DEFAULT_MARKET_SALARY
}
fn default_risk_multiplier() -> f64 {
    DEFAULT_RISK_MULTIPLIER
}

impl ScenarioConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        if config.cofounders.is_empty() {
            return Err(ConfigError::NoCofounders);
        }
        config.check_finite()?;
        Ok(config)
    }

    /// TOML accepts `inf` and `nan` literals; the calculator must never see them.
    fn check_finite(&self) -> Result<(), ConfigError> {
        let company = [
            ("valuation", self.company.valuation),
            ("time_horizon_months", self.company.time_horizon_months),
        ];
        if let Some((name, _)) = company.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite {
                field: format!("company.{name}"),
            });
        }

        for (position, entry) in self.cofounders.iter().enumerate() {
            let fields = [
                ("cash_contribution", entry.cash_contribution),
                ("weekly_hours", entry.weekly_hours),
                ("market_salary", entry.market_salary),
                ("idea_value", entry.idea_value),
                ("risk_multiplier", entry.risk_multiplier),
            ];
            if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
                return Err(ConfigError::NonFinite {
                    field: format!("cofounder[{}].{name}", position + 1),
                });
            }
        }
        Ok(())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Starter scenario with `n` default cofounders (at least one).
    pub fn template(n: usize) -> Self {
        let cofounders = (1..=n.max(1))
            .map(|i| CofounderEntry {
                name: Some(format!("Cofounder {i}")),
                ..CofounderEntry::default()
            })
            .collect();
        Self {
            company: CompanySection::default(),
            cofounders,
        }
    }

    /// Snapshot of a session's inputs.
    pub fn from_session(session: &Session) -> Self {
        Self {
            company: CompanySection {
                valuation: session.params().company_valuation,
                time_horizon_months: session.params().time_horizon_months,
            },
            cofounders: session.cofounders().iter().map(CofounderEntry::from).collect(),
        }
    }

    pub fn params(&self) -> CalculationParameters {
        CalculationParameters::new(self.company.valuation, self.company.time_horizon_months)
    }

    /// Cofounder records with positional ids starting at 1.
    pub fn contributions(&self) -> Vec<CofounderContribution> {
        self.cofounders
            .iter()
            .cloned()
            .zip(1u64..)
            .map(|(entry, position)| entry.into_contribution(position))
            .collect()
    }

    pub fn into_session(self) -> Result<Session, ConfigError> {
        if self.cofounders.is_empty() {
            return Err(ConfigError::NoCofounders);
        }
        self.check_finite()?;
        Ok(Session::from_parts(self.contributions(), self.params())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
[company]
valuation = 2500000.0
time_horizon_months = 18.0

[[cofounder]]
name = "Ada"
cash_contribution = 10000.0
weekly_hours = 40.0
market_salary = 150000.0
idea_value = 5000.0
risk_multiplier = 1.5

[[cofounder]]
name = "Grace"
"#;

    #[test]
    fn parses_full_scenario() {
        let config = ScenarioConfig::from_toml(FULL).unwrap();
        assert_eq!(config.company.valuation, 2_500_000.0);
        assert_eq!(config.company.time_horizon_months, 18.0);
        assert_eq!(config.cofounders.len(), 2);
        assert_eq!(config.cofounders[0].risk_multiplier, 1.5);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = ScenarioConfig::from_toml(FULL).unwrap();
        let grace = &config.cofounders[1];
        assert_eq!(grace.cash_contribution, 0.0);
        assert_eq!(grace.weekly_hours, DEFAULT_WEEKLY_HOURS);
        assert_eq!(grace.market_salary, DEFAULT_MARKET_SALARY);
        assert_eq!(grace.risk_multiplier, DEFAULT_RISK_MULTIPLIER);
    }

    #[test]
    fn missing_company_section_takes_defaults() {
        let config = ScenarioConfig::from_toml("[[cofounder]]\n").unwrap();
        assert_eq!(config.params(), CalculationParameters::default());
        let c = &config.contributions()[0];
        assert_eq!(c.name, "Cofounder 1");
        assert_eq!(c.id, CofounderId::from(1));
    }

    #[test]
    fn empty_scenario_rejected() {
        let err = ScenarioConfig::from_toml("[company]\nvaluation = 1.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::NoCofounders));
    }

    #[test]
    fn bad_toml_is_parse_error() {
        let err = ScenarioConfig::from_toml("[[cofounder]]\nweekly_hours = \"lots\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn infinite_cash_rejected() {
        let err = ScenarioConfig::from_toml(
            "[[cofounder]]\ncash_contribution = inf\n[[cofounder]]\n",
        )
        .unwrap_err();
        match err {
            ConfigError::NonFinite { field } => assert_eq!(field, "cofounder[1].cash_contribution"),
            other => panic!("expected NonFinite, got {other:?}"),
        }
    }

    #[test]
    fn nan_company_value_rejected() {
        let err = ScenarioConfig::from_toml("[company]\nvaluation = nan\n[[cofounder]]\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::NonFinite { ref field } if field == "company.valuation"));
        assert!(err.to_string().contains("finite"));
    }

    #[test]
    fn into_session_rejects_non_finite() {
        let mut config = ScenarioConfig::template(2);
        config.cofounders[1].risk_multiplier = f64::INFINITY;
        let err = config.into_session().unwrap_err();
        assert!(matches!(err, ConfigError::NonFinite { ref field } if field == "cofounder[2].risk_multiplier"));
    }

    #[test]
    fn template_round_trips_through_toml() {
        let template = ScenarioConfig::template(3);
        let text = template.to_toml().unwrap();
        assert!(text.contains("[[cofounder]]"));
        assert_eq!(ScenarioConfig::from_toml(&text).unwrap(), template);
    }

    #[test]
    fn template_never_empty() {
        assert_eq!(ScenarioConfig::template(0).cofounders.len(), 1);
    }

    #[test]
    fn into_session_keeps_order_and_params() {
        let config = ScenarioConfig::from_toml(FULL).unwrap();
        let session = config.into_session().unwrap();
        let names: Vec<_> = session.cofounders().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Ada", "Grace"]);
        assert_eq!(session.params().company_valuation, 2_500_000.0);
        assert!(session.results().is_none());
    }

    #[test]
    fn from_session_snapshots_inputs() {
        let mut session = Session::new();
        session.add_cofounder();
        session.set_company_valuation(42.0);
        let config = ScenarioConfig::from_session(&session);
        assert_eq!(config.cofounders.len(), 2);
        assert_eq!(config.company.valuation, 42.0);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ScenarioConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
