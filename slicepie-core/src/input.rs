//! Text-to-number coercion for form and command-line input.
//!
//! Empty text counts as zero. A leading `$` and the digit separators `,` and
//! `_` are tolerated. Anything else must parse as a finite `f64`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("'{0}' is not a finite number")]
    NonFinite(String),
}

/// Parse user text into a number.
pub fn parse_number(text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed),
    };
    let unsigned = unsigned.strip_prefix('$').unwrap_or(unsigned);
    let cleaned: String = unsigned.chars().filter(|c| *c != ',' && *c != '_').collect();

    // Reject a second sign or currency marker after the one we stripped.
    if cleaned.is_empty() || (negative && cleaned.starts_with(['-', '+', '$'])) {
        return Err(InputError::NotANumber(text.to_string()));
    }

    let value: f64 = cleaned
        .parse()
        .map_err(|_| InputError::NotANumber(text.to_string()))?;
    if !value.is_finite() {
        return Err(InputError::NonFinite(text.to_string()));
    }
    Ok(if negative { -value } else { value })
}

/// Parse user text, falling back to `fallback` on any error.
pub fn coerce_number(text: &str, fallback: f64) -> f64 {
    parse_number(text).unwrap_or(fallback)
}
