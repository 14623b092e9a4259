//! Display formatting shared by the CLI, TUI and reports.

/// `1234567.891` → `"$1,234,567.89"`, negatives as `"-$5.00"`.
pub fn currency(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let sign = if value < 0.0 && value.abs() >= 0.005 { "-" } else { "" };
    format!("{sign}${}", grouped(value.abs(), 2))
}

/// Two decimals with a percent sign: `33.333` → `"33.33%"`.
pub fn percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Slices with thousands separators and up to two decimals, trailing zeros
/// dropped: `120000.0` → `"120,000"`, `41538.4615` → `"41,538.46"`.
pub fn slices(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let text = grouped(value.abs(), 2);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    let sign = if value < 0.0 && text != "0" { "-" } else { "" };
    format!("{sign}{text}")
}

/// Risk multiplier as `1.5x`.
pub fn multiplier(value: f64) -> String {
    format!("{value}x")
}

/// Hours per week as `40 hrs/week`.
pub fn weekly_hours(value: f64) -> String {
    format!("{value} hrs/week")
}

/// Non-negative `value` with `decimals` places and comma thousands separators.
fn grouped(value: f64, decimals: usize) -> String {
    let fixed = format!("{value:.decimals$}");
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}
