//! Session: caller-owned inputs plus the last computed split.
//!
//! Results are only rebuilt by an explicit [`Session::calculate`] call. Edits
//! to inputs leave the previous results in place and mark them stale.

use std::collections::HashSet;

use thiserror::Error;

use crate::calculator::{self, EquitySummary};
use crate::domain::{
    CalculationParameters, CofounderContribution, CofounderId, ContributionEdit,
    ContributionField, EquityResult, IdSequence,
};
use crate::input::{parse_number, InputError};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("no cofounder with id '{0}'")]
    UnknownCofounder(CofounderId),
    #[error("cannot remove '{0}': at least one cofounder must remain")]
    LastCofounder(CofounderId),
    #[error("a session needs at least one cofounder")]
    Empty,
    #[error("duplicate cofounder id '{0}'")]
    DuplicateId(CofounderId),
    #[error("invalid value for {field}: {source}")]
    InvalidInput {
        field: ContributionField,
        #[source]
        source: InputError,
    },
}

#[derive(Debug, Clone)]
pub struct Session {
    cofounders: Vec<CofounderContribution>,
    params: CalculationParameters,
    results: Option<Vec<EquityResult>>,
    stale: bool,
    ids: IdSequence,
}

impl Session {
    /// One default cofounder, default parameters, no results.
    pub fn new() -> Self {
        let mut ids = IdSequence::default();
        let first = CofounderContribution::with_defaults(ids.next_id());
        Self {
            cofounders: vec![first],
            params: CalculationParameters::default(),
            results: None,
            stale: false,
            ids,
        }
    }

    /// Build a session from existing records. Ids must be unique.
    pub fn from_parts(
        cofounders: Vec<CofounderContribution>,
        params: CalculationParameters,
    ) -> Result<Self, SessionError> {
        if cofounders.is_empty() {
            return Err(SessionError::Empty);
        }

        let mut seen = HashSet::new();
        let mut ids = IdSequence::default();
        for c in &cofounders {
            if !seen.insert(c.id.clone()) {
                return Err(SessionError::DuplicateId(c.id.clone()));
            }
            ids.observe(&c.id);
        }

        Ok(Self {
            cofounders,
            params,
            results: None,
            stale: false,
            ids,
        })
    }

    pub fn cofounders(&self) -> &[CofounderContribution] {
        &self.cofounders
    }

    pub fn cofounder(&self, id: &CofounderId) -> Option<&CofounderContribution> {
        self.cofounders.iter().find(|c| &c.id == id)
    }

    pub fn params(&self) -> &CalculationParameters {
        &self.params
    }

    /// Last computed results, if any. Possibly stale; see [`Session::is_stale`].
    pub fn results(&self) -> Option<&[EquityResult]> {
        self.results.as_deref()
    }

    /// True when inputs changed after the last calculation.
    pub fn is_stale(&self) -> bool {
        self.results.is_some() && self.stale
    }

    /// Summary of the last computed results.
    pub fn summary(&self) -> Option<EquitySummary> {
        self.results
            .as_deref()
            .map(|r| EquitySummary::from_results(r, &self.params))
    }

    /// Append a cofounder with default values and return its id.
    pub fn add_cofounder(&mut self) -> CofounderId {
        let id = self.ids.next_id();
        self.cofounders
            .push(CofounderContribution::with_defaults(id.clone()));
        self.mark_dirty();
        id
    }

    pub fn update_cofounder(
        &mut self,
        id: &CofounderId,
        edit: ContributionEdit,
    ) -> Result<(), SessionError> {
        let cofounder = self
            .cofounders
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| SessionError::UnknownCofounder(id.clone()))?;
        cofounder.apply(edit);
        self.mark_dirty();
        Ok(())
    }

    /// Apply an edit typed as text. Numeric fields go through [`parse_number`].
    pub fn apply_text_edit(
        &mut self,
        id: &CofounderId,
        field: ContributionField,
        text: &str,
    ) -> Result<(), SessionError> {
        let numeric = if field.is_numeric() {
            let value = parse_number(text)
                .map_err(|source| SessionError::InvalidInput { field, source })?;
            ContributionEdit::numeric(field, value)
        } else {
            None
        };
        let edit = numeric.unwrap_or_else(|| ContributionEdit::Name(text.to_string()));
        self.update_cofounder(id, edit)
    }

    /// Remove a cofounder. The last remaining one cannot be removed.
    pub fn remove_cofounder(
        &mut self,
        id: &CofounderId,
    ) -> Result<CofounderContribution, SessionError> {
        let idx = self
            .cofounders
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| SessionError::UnknownCofounder(id.clone()))?;
        if self.cofounders.len() == 1 {
            return Err(SessionError::LastCofounder(id.clone()));
        }
        let removed = self.cofounders.remove(idx);
        self.mark_dirty();
        Ok(removed)
    }

    pub fn set_company_valuation(&mut self, valuation: f64) {
        self.params.company_valuation = valuation;
        self.mark_dirty();
    }

    pub fn set_time_horizon_months(&mut self, months: f64) {
        self.params.time_horizon_months = months;
        self.mark_dirty();
    }

    /// Recompute the split from the current inputs, replacing previous results.
    pub fn calculate(&mut self) -> &[EquityResult] {
        let results = calculator::calculate(&self.cofounders, &self.params);
        self.stale = false;
        self.results.insert(results).as_slice()
    }

    fn mark_dirty(&mut self) {
        self.stale = true;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
