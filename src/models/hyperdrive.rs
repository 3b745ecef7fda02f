//! Hyperdrive pricing model.
//!
//! A bond with `t = days / 365` of its term remaining is part matured.  A
//! trade of amount `a` is split in two:
//!
//! - the **flat** part `a·(1 − t)` is redeemed 1:1 between base and bonds
//!   and charged the redemption fee;
//! - the **curve** part `a·t` is priced by the YieldSpace invariant over a
//!   full term (`days = 365`, same time stretch), against reserves already
//!   moved by the flat part.
//!
//! | Flat reserve shift | Shares | Bonds |
//! |--------------------|--------|-------|
//! | Pt out, Base in | `+flat/c` | `−flat` |
//! | Base out, Pt in | `−flat/c` | `+flat` |
//!
//! The curve solve runs on intermediate reserves, so it skips the input
//! check; the public check runs on the caller's state and the output check
//! on the combined result.

use tracing::{debug, trace};

use super::base;
use super::curve::{CurveBreakdown, CurveReserves};
use super::YieldSpacePricingModel;
use crate::domain::{
    MarketState, Quantity, Rounding, StretchedTime, TokenType, TradeBreakdown, TradeDirection,
    TradeResult,
};
use crate::error::Result;
use crate::math::{Decimal, PrecisionContext};
use crate::traits::PricingModel;

/// The Hyperdrive flat-plus-curve model.
///
/// Composes a [`YieldSpacePricingModel`] for the curve part of each trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HyperdrivePricingModel {
    curve: YieldSpacePricingModel,
}

impl HyperdrivePricingModel {
    /// Creates the model.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            curve: YieldSpacePricingModel::new(),
        }
    }

    fn price(
        &self,
        direction: TradeDirection,
        quantity: Quantity,
        market_state: &MarketState,
        time_remaining: StretchedTime,
    ) -> Result<TradeResult> {
        debug!(
            model = self.model_type(),
            %direction,
            %quantity,
            %market_state,
            %time_remaining,
            "pricing trade"
        );
        self.check_input_assertions(&quantity, market_state, &time_remaining)?;

        let ctx = PrecisionContext::new();
        let (normalized, _) = base::decimal_time(&time_remaining)?;
        let (_, curve_tau) =
            base::decimal_time(&StretchedTime::full_term(time_remaining.time_stretch()))?;
        let amount = Decimal::from_f64(quantity.amount())?;
        let trade_fee = Decimal::from_f64(market_state.trade_fee_percent())?;
        let redemption_fee = Decimal::from_f64(market_state.redemption_fee_percent())?;

        let flat = &amount * &(Decimal::one() - &normalized);
        let curve_amount = &amount * &normalized;
        let reserves = CurveReserves::from_market_state(market_state)?;
        let flat_shares =
            flat.checked_div(&reserves.share_price, Rounding::against_trader(direction))?;

        // The pool takes in base on the flat part when the trader buys bonds
        // or sells base.
        let pool_receives_base = matches!(
            (direction, quantity.unit()),
            (TradeDirection::InGivenOut, TokenType::Pt)
                | (TradeDirection::OutGivenIn, TokenType::Base)
        );
        let reserves = if pool_receives_base {
            reserves.shifted(&flat_shares, &-&flat)
        } else {
            reserves.shifted(&-&flat_shares, &flat)
        };
        trace!(%flat, %curve_amount, pool_receives_base, "flat part redeemed");

        let curve = match direction {
            TradeDirection::InGivenOut => self.curve.solve_in_given_out(
                &ctx,
                reserves,
                &curve_tau,
                &curve_amount,
                quantity.unit(),
                &trade_fee,
            )?,
            TradeDirection::OutGivenIn => self.curve.solve_out_given_in(
                &ctx,
                reserves,
                &curve_tau,
                &curve_amount,
                quantity.unit(),
                &trade_fee,
            )?,
        };

        let breakdown = combine(direction, &flat, &redemption_fee, &curve);
        let result = TradeResult::new(direction, quantity, *market_state, breakdown);
        self.check_output_assertions(&result)?;
        Ok(result)
    }
}

/// Adds the flat part to the curve breakdown.
fn combine(
    direction: TradeDirection,
    flat: &Decimal,
    redemption_fee_percent: &Decimal,
    curve: &CurveBreakdown,
) -> TradeBreakdown {
    let redemption_fee = flat * redemption_fee_percent;
    let flat_with_fee = match direction {
        TradeDirection::InGivenOut => flat + &redemption_fee,
        TradeDirection::OutGivenIn => flat - &redemption_fee,
    };
    CurveBreakdown {
        without_fee_or_slippage: flat + &curve.without_fee_or_slippage,
        without_fee: flat + &curve.without_fee,
        fee: &curve.fee + &redemption_fee,
        with_fee: flat_with_fee + &curve.with_fee,
    }
    .to_breakdown()
}

impl PricingModel for HyperdrivePricingModel {
    fn model_name(&self) -> &'static str {
        "Hyperdrive"
    }

    fn model_type(&self) -> &'static str {
        "hyperdrive"
    }

    fn calc_in_given_out(
        &self,
        out: Quantity,
        market_state: &MarketState,
        time_remaining: StretchedTime,
    ) -> Result<TradeResult> {
        self.price(TradeDirection::InGivenOut, out, market_state, time_remaining)
    }

    fn calc_out_given_in(
        &self,
        input: Quantity,
        market_state: &MarketState,
        time_remaining: StretchedTime,
    ) -> Result<TradeResult> {
        self.price(TradeDirection::OutGivenIn, input, market_state, time_remaining)
    }
}
