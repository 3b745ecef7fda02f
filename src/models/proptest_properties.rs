//! Property-based tests using `proptest` for pricing invariants.
//!
//! Covers four properties:
//!
//! 1. **Zero-fee inverse**: buying `a` bonds then selling the base paid
//!    returns `a` (YieldSpace at any time, Hyperdrive at full term).
//! 2. **Fee identities**: `fee ≥ 0` and `with_fee = without_fee ± fee`.
//! 3. **Fee monotonicity**: a strictly higher fee strictly worsens the
//!    trader's side in both directions.
//! 4. **Scale robustness**: amounts from 10⁻¹⁸ to 10⁷ against 10¹⁰
//!    reserves always price to a positive amount.

#![allow(clippy::panic)]

use proptest::prelude::*;

use super::{HyperdrivePricingModel, PricingModelBox, YieldSpacePricingModel};
use crate::domain::{MarketState, Quantity, StretchedTime, TokenType, TradeDirection};
use crate::traits::PricingModel;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn models() -> [PricingModelBox; 2] {
    [
        YieldSpacePricingModel::new().into(),
        HyperdrivePricingModel::new().into(),
    ]
}

fn time(days: f64, apy: f64) -> StretchedTime {
    let Ok(ts) = YieldSpacePricingModel::new().calc_time_stretch(apy) else {
        panic!("positive apy");
    };
    StretchedTime::new(days, ts)
}

fn quantity(unit: bool, amount: f64) -> Quantity {
    if unit {
        Quantity::base(amount)
    } else {
        Quantity::pt(amount)
    }
}

fn reserve_strategy() -> impl Strategy<Value = f64> {
    1_000.0..100_000_000.0f64
}

fn share_price_strategy() -> impl Strategy<Value = (f64, f64)> {
    (1.0..2.0f64, 0.0..1.0f64).prop_map(|(c, frac)| (c, 1.0 + (c - 1.0) * frac))
}

fn days_strategy() -> impl Strategy<Value = f64> {
    1.0..=365.0f64
}

fn apy_strategy() -> impl Strategy<Value = f64> {
    0.02..0.25f64
}

// ---------------------------------------------------------------------------
// 1. Zero-fee inverse
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_zero_fee_inverse_yieldspace(
        z in reserve_strategy(),
        y in reserve_strategy(),
        (c, mu) in share_price_strategy(),
        days in days_strategy(),
        apy in apy_strategy(),
        frac in 0.0001..0.01f64,
    ) {
        let model = YieldSpacePricingModel::new();
        let state = MarketState::new(z, y, c, mu, 0.0, 0.0);
        let t = time(days, apy);
        let bonds_out = y.min(z) * frac;

        let bought = model.calc_in_given_out(Quantity::pt(bonds_out), &state, t);
        let Ok(bought) = bought else {
            return Err(TestCaseError::fail(format!("buy failed: {bought:?}")));
        };
        let paid = bought.breakdown().with_fee();
        let sold = model.calc_out_given_in(Quantity::base(paid), &state, t);
        let Ok(sold) = sold else {
            return Err(TestCaseError::fail(format!("sell failed: {sold:?}")));
        };
        let received = sold.breakdown().with_fee();

        prop_assert!(
            (received - bonds_out).abs() / bonds_out < 1e-8,
            "inverse drifted: bought {} for {}, sold back for {}",
            bonds_out, paid, received
        );
    }

    #[test]
    fn prop_zero_fee_inverse_hyperdrive_full_term(
        z in reserve_strategy(),
        y in reserve_strategy(),
        apy in apy_strategy(),
        frac in 0.0001..0.01f64,
    ) {
        let model = HyperdrivePricingModel::new();
        let state = MarketState::new(z, y, 1.0, 1.0, 0.0, 0.0);
        let t = time(365.0, apy);
        let base_out = y.min(z) * frac;

        let bought = model.calc_in_given_out(Quantity::base(base_out), &state, t);
        let Ok(bought) = bought else {
            return Err(TestCaseError::fail(format!("withdrawal failed: {bought:?}")));
        };
        let paid = bought.breakdown().with_fee();
        let sold = model.calc_out_given_in(Quantity::pt(paid), &state, t);
        let Ok(sold) = sold else {
            return Err(TestCaseError::fail(format!("sell failed: {sold:?}")));
        };
        let received = sold.breakdown().with_fee();

        prop_assert!(
            (received - base_out).abs() / base_out < 1e-8,
            "inverse drifted: {} vs {}",
            received, base_out
        );
    }
}

// ---------------------------------------------------------------------------
// 2. Fee identities
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_fee_identities(
        z in reserve_strategy(),
        y in reserve_strategy(),
        (c, mu) in share_price_strategy(),
        days in days_strategy(),
        fee in 0.0..=1.0f64,
        redemption_fee in 0.0..0.05f64,
        frac in 0.0001..0.01f64,
        unit in any::<bool>(),
    ) {
        let state = MarketState::new(z, y, c, mu, fee, redemption_fee);
        let t = time(days, 0.05);
        let amount = y.min(z) * frac;

        for model in models() {
            for direction in [TradeDirection::InGivenOut, TradeDirection::OutGivenIn] {
                let q = quantity(unit, amount);
                let result = match direction {
                    TradeDirection::InGivenOut => model.calc_in_given_out(q, &state, t),
                    TradeDirection::OutGivenIn => model.calc_out_given_in(q, &state, t),
                };
                let Ok(result) = result else {
                    return Err(TestCaseError::fail(format!(
                        "{} {direction} failed: {result:?}",
                        model.model_type()
                    )));
                };
                let b = result.breakdown();
                prop_assert!(b.fee() >= 0.0, "{} {}: negative fee {}", model.model_type(), direction, b);
                let expected = match direction {
                    TradeDirection::InGivenOut => b.without_fee() + b.fee(),
                    TradeDirection::OutGivenIn => b.without_fee() - b.fee(),
                };
                prop_assert!(
                    (b.with_fee() - expected).abs() <= 1e-9 * b.with_fee().abs().max(1.0),
                    "{} {}: {}",
                    model.model_type(), direction, b
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// 3. Fee monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_fee_monotonicity(
        z in reserve_strategy(),
        y in reserve_strategy(),
        days in days_strategy(),
        low in 0.0..0.5f64,
        bump in 0.01..0.5f64,
        frac in 0.0001..0.01f64,
        unit in any::<bool>(),
    ) {
        let high = low + bump;
        let cheap = MarketState::new(z, y, 1.0, 1.0, low, 0.0);
        let dear = MarketState::new(z, y, 1.0, 1.0, high, 0.0);
        let t = time(days, 0.05);
        let q = quantity(unit, y.min(z) * frac);

        for model in models() {
            let pays = [&cheap, &dear].map(|state| model.calc_in_given_out(q, state, t));
            let receives = [&cheap, &dear].map(|state| model.calc_out_given_in(q, state, t));
            let ([Ok(a), Ok(b)], [Ok(c), Ok(d)]) = (&pays, &receives) else {
                return Err(TestCaseError::fail(format!(
                    "{} failed: {pays:?} {receives:?}",
                    model.model_type()
                )));
            };
            prop_assert!(
                b.breakdown().with_fee() > a.breakdown().with_fee(),
                "{}: fee {} pays {} but fee {} pays {}",
                model.model_type(), high, b.breakdown().with_fee(), low, a.breakdown().with_fee()
            );
            prop_assert!(
                d.breakdown().with_fee() < c.breakdown().with_fee(),
                "{}: fee {} receives {} but fee {} receives {}",
                model.model_type(), high, d.breakdown().with_fee(), low, c.breakdown().with_fee()
            );
        }
    }
}

// ---------------------------------------------------------------------------
// 4. Scale robustness
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_scale_robustness(
        exponent in -18i32..=7,
        mantissa in 1.0..9.0f64,
        unit in any::<bool>(),
    ) {
        let state = MarketState::new(1e10, 1e10, 1.0, 1.0, 0.1, 0.0);
        let t = time(182.5, 0.05);
        let q = quantity(unit, mantissa * 10f64.powi(exponent));
        prop_assume!(q.is_tradeable());
        let unit_name = if unit { TokenType::Base } else { TokenType::Pt };

        for model in models() {
            let result = model.calc_in_given_out(q, &state, t);
            prop_assert!(
                result.as_ref().is_ok_and(|r| r.breakdown().with_fee() > 0.0),
                "{} failed for {} {}: {:?}",
                model.model_type(), q.amount(), unit_name, result
            );
            let result = model.calc_out_given_in(q, &state, t);
            prop_assert!(
                result.as_ref().is_ok_and(|r| r.breakdown().with_fee() > 0.0),
                "{} failed for {} {}: {:?}",
                model.model_type(), q.amount(), unit_name, result
            );
        }
    }
}
