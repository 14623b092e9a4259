//! Parrot/neon theme tokens for the Slicing Pie TUI
//!
//! # Color Palette
//! - **Background**: Near-black / deep charcoal (base layer)
//! - **Accent**: Electric cyan (primary highlights, focus)
//! - **Positive**: Neon green (equity shares, success)
//! - **Negative**: Hot pink (errors, negative amounts)
//! - **Warning**: Neon orange (advisories, stale results)
//! - **Neutral**: Cool purple (secondary info, slice breakdowns)
//! - **Muted**: Steel blue (labels, hints)

use ratatui::style::{Color, Modifier, Style};

/// Parrot/neon theme for the Slicing Pie TUI
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Near-black background (primary surface)
    pub background: Color,
    /// Electric cyan accent (focus, highlights)
    pub accent: Color,
    /// Neon green (equity shares)
    pub positive: Color,
    /// Hot pink (errors, negative values)
    pub negative: Color,
    /// Neon orange (warnings, advisories)
    pub warning: Color,
    /// Cool purple (neutral info, secondary)
    pub neutral: Color,
    /// Steel blue (muted text, labels)
    pub muted: Color,
    /// White (primary text)
    pub text_primary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    pub const fn parrot_neon() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            warning: Color::Rgb(255, 140, 0),
            neutral: Color::Rgb(147, 112, 219),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
        }
    }

    /// Amounts: green when non-negative, pink when negative.
    pub fn amount_color(&self, value: f64) -> Color {
        if value >= 0.0 {
            self.positive
        } else {
            self.negative
        }
    }

    /// Share of the pie: brighter for larger stakes.
    pub fn share_color(&self, percentage: f64) -> Color {
        match percentage {
            p if p >= 50.0 => self.positive,
            p if p >= 20.0 => self.accent,
            p if p > 0.0 => self.neutral,
            _ => self.muted,
        }
    }
}

const THEME: Theme = Theme::parrot_neon();

pub fn accent() -> Style {
    Style::default().fg(THEME.accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(THEME.muted)
}

pub fn neutral() -> Style {
    Style::default().fg(THEME.neutral)
}

pub fn text() -> Style {
    Style::default().fg(THEME.text_primary)
}

pub fn warning() -> Style {
    Style::default().fg(THEME.warning)
}

pub fn negative() -> Style {
    Style::default().fg(THEME.negative)
}

pub fn amount(value: f64) -> Style {
    Style::default().fg(THEME.amount_color(value))
}

pub fn share(percentage: f64) -> Style {
    Style::default()
        .fg(THEME.share_color(percentage))
        .add_modifier(Modifier::BOLD)
}

/// Focused form row.
pub fn cursor() -> Style {
    accent().add_modifier(Modifier::REVERSED)
}

/// Row being edited.
pub fn editing() -> Style {
    warning().add_modifier(Modifier::REVERSED)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

pub fn tab(active: bool) -> Style {
    if active {
        accent_bold().add_modifier(Modifier::REVERSED)
    } else {
        muted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.background, Color::Rgb(18, 18, 20));
        assert_eq!(theme.accent, Color::Rgb(0, 255, 255));
    }

    #[test]
    fn test_amount_color() {
        let theme = Theme::default();
        assert_eq!(theme.amount_color(100.0), theme.positive);
        assert_eq!(theme.amount_color(-50.0), theme.negative);
        assert_eq!(theme.amount_color(0.0), theme.positive);
    }

    #[test]
    fn test_share_color() {
        let theme = Theme::default();
        assert_eq!(theme.share_color(75.0), theme.positive);
        assert_eq!(theme.share_color(33.3), theme.accent);
        assert_eq!(theme.share_color(5.0), theme.neutral);
        assert_eq!(theme.share_color(0.0), theme.muted);
    }

    #[test]
    fn test_style_helpers() {
        assert_eq!(accent().fg, Some(Color::Rgb(0, 255, 255)));
        assert_eq!(panel_border(false), muted());
        assert!(cursor().add_modifier.contains(Modifier::REVERSED));
    }
}
