//! Property tests for calculator invariants.
//!
//! Uses proptest to verify:
//! 1. Shares sum to 100% whenever the total is positive
//! 2. All-zero contributions give zero shares regardless of risk
//! 3. Valuation scaling moves dollar values only
//! 4. Raising one risk multiplier raises that share and lowers every other
//! 5. Time slices scale linearly with the horizon

use proptest::prelude::*;
use slicepie_core::calculator::{calculate, time_slices};
use slicepie_core::domain::{CalculationParameters, CofounderContribution, CofounderId};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_money() -> impl Strategy<Value = f64> {
    (0.0..500_000.0_f64).prop_map(|m| (m * 100.0).round() / 100.0)
}

fn arb_hours() -> impl Strategy<Value = f64> {
    0.0..80.0_f64
}

fn arb_risk() -> impl Strategy<Value = f64> {
    0.1..5.0_f64
}

fn arb_cofounder() -> impl Strategy<Value = (f64, f64, f64, f64, f64)> {
    (arb_money(), arb_hours(), arb_money(), arb_money(), arb_risk())
}

fn arb_cofounders(max: usize) -> impl Strategy<Value = Vec<CofounderContribution>> {
    prop::collection::vec(arb_cofounder(), 1..max).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (cash, hours, salary, idea, risk))| CofounderContribution {
                id: CofounderId::from(i as u64 + 1),
                name: format!("Cofounder {}", i + 1),
                cash_contribution: cash,
                weekly_hours: hours,
                market_salary: salary,
                idea_value: idea,
                risk_multiplier: risk,
            })
            .collect()
    })
}

fn arb_params() -> impl Strategy<Value = CalculationParameters> {
    (arb_money(), 1.0..120.0_f64).prop_map(|(v, h)| CalculationParameters::new(v, h))
}

fn has_positive_total(cofounders: &[CofounderContribution], params: &CalculationParameters) -> bool {
    calculate(cofounders, params).iter().map(|r| r.slices).sum::<f64>() > 0.0
}

// ── 1. Shares sum to 100 ─────────────────────────────────────────────

proptest! {
    #[test]
    fn percentages_sum_to_100(cofounders in arb_cofounders(8), params in arb_params()) {
        prop_assume!(has_positive_total(&cofounders, &params));
        let results = calculate(&cofounders, &params);
        let sum: f64 = results.iter().map(|r| r.percentage).sum();
        prop_assert!((sum - 100.0).abs() < 1e-6, "sum = {sum}");
    }

    #[test]
    fn dollar_values_sum_to_valuation(cofounders in arb_cofounders(8), params in arb_params()) {
        prop_assume!(has_positive_total(&cofounders, &params));
        let results = calculate(&cofounders, &params);
        let sum: f64 = results.iter().map(|r| r.dollar_value).sum();
        let tolerance = 1e-6 * params.company_valuation.abs().max(1.0);
        prop_assert!((sum - params.company_valuation).abs() < tolerance);
    }

    #[test]
    fn one_result_per_cofounder_in_order(cofounders in arb_cofounders(8), params in arb_params()) {
        let results = calculate(&cofounders, &params);
        prop_assert_eq!(results.len(), cofounders.len());
        for (r, c) in results.iter().zip(&cofounders) {
            prop_assert_eq!(&r.cofounder, c);
        }
    }
}

// ── 2. Zero pie ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn zero_contributions_give_zero_shares(
        risks in prop::collection::vec(arb_risk(), 1..6),
        params in arb_params(),
    ) {
        let cofounders: Vec<_> = risks
            .iter()
            .enumerate()
            .map(|(i, &risk)| CofounderContribution {
                id: CofounderId::from(i as u64 + 1),
                name: String::new(),
                cash_contribution: 0.0,
                weekly_hours: 0.0,
                market_salary: 0.0,
                idea_value: 0.0,
                risk_multiplier: risk,
            })
            .collect();

        for r in calculate(&cofounders, &params) {
            prop_assert_eq!(r.percentage, 0.0);
            prop_assert_eq!(r.dollar_value, 0.0);
        }
    }
}

// ── 3. Valuation scaling ─────────────────────────────────────────────

proptest! {
    #[test]
    fn valuation_scales_dollars_not_percentages(
        cofounders in arb_cofounders(6),
        params in arb_params(),
        k in 0.1..10.0_f64,
    ) {
        let scaled = CalculationParameters::new(params.company_valuation * k, params.time_horizon_months);
        let base = calculate(&cofounders, &params);
        let after = calculate(&cofounders, &scaled);

        for (a, b) in base.iter().zip(&after) {
            prop_assert_eq!(a.percentage, b.percentage);
            let tolerance = 1e-9 * b.dollar_value.abs().max(1.0);
            prop_assert!((a.dollar_value * k - b.dollar_value).abs() < tolerance);
        }
    }
}

// ── 4. Risk multiplier monotonicity ──────────────────────────────────

proptest! {
    #[test]
    fn raising_risk_shifts_share_to_that_cofounder(
        cofounders in arb_cofounders(6),
        params in arb_params(),
        pick in any::<prop::sample::Index>(),
        k in 1.1..4.0_f64,
    ) {
        prop_assume!(cofounders.len() >= 2);
        let idx = pick.index(cofounders.len());
        let base = calculate(&cofounders, &params);

        // Strict movement needs the picked cofounder to hold part of the pie
        // and every other cofounder to hold some too.
        prop_assume!(base.iter().all(|r| r.slices > 1.0));

        let mut bumped = cofounders.clone();
        bumped[idx].risk_multiplier *= k;
        let after = calculate(&bumped, &params);

        prop_assert!(after[idx].percentage > base[idx].percentage);
        for (i, (b, a)) in base.iter().zip(&after).enumerate() {
            if i != idx {
                prop_assert!(a.percentage < b.percentage);
            }
        }
    }
}

// ── 5. Horizon linearity ─────────────────────────────────────────────

proptest! {
    #[test]
    fn time_slices_scale_with_horizon(
        cofounders in arb_cofounders(2),
        horizon in 1.0..60.0_f64,
    ) {
        let c = &cofounders[0];
        let single = time_slices(c, &CalculationParameters::new(0.0, horizon));
        let double = time_slices(c, &CalculationParameters::new(0.0, horizon * 2.0));
        prop_assert!((single * 2.0 - double).abs() < 1e-6 * double.abs().max(1.0));
    }
}
