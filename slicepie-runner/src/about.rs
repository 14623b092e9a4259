//! Fixed explanatory text shown by the TUI About tab and appended to reports.

pub const TITLE: &str = "About the Slicing Pie Framework";

pub const SUMMARY: &str = "Slicing Pie is a dynamic equity split framework that ensures fair \
distribution of startup equity based on actual contributions rather than guesswork or negotiations.";

/// `(heading, explanation)` per contribution type.
pub const METHOD: [(&str, &str); 4] = [
    (
        "Cash Contributions",
        "Direct financial investments receive slices at a 1:1 ratio.",
    ),
    (
        "Time Contributions",
        "Time invested valued at market salary rates for similar roles \
         (salary / 2,080 hours x weekly hours x 52 weeks, scaled to the time horizon).",
    ),
    (
        "Idea Value",
        "Initial concept and intellectual property contributions, 1:1.",
    ),
    (
        "Risk Multipliers",
        "Each cofounder's slices are scaled by their multiplier to reflect individual risk.",
    ),
];

pub const DISCLAIMER: &str = "This calculator provides estimates based on the Slicing Pie \
methodology. Always consult with legal and financial advisors before making final equity decisions.";

pub const NO_RESULTS: &str = "Configure your cofounders and company settings, then calculate \
the equity split to see results here.";
