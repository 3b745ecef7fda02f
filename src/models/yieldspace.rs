//! YieldSpace pricing model.
//!
//! Prices every trade directly on the invariant
//! `k = (c/μ)·(μ·z)^(1−τ) + (2y + c·z)^(1−τ)` with `τ` taken from the
//! caller's time remaining.  Fees are a fraction `φ` of the difference
//! between the spot-price amount and the traded amount:
//!
//! | Operation | Unit fixed | Fee |
//! |-----------|------------|-----|
//! | in given out | Base | `φ·(out/p − out)` |
//! | in given out | Pt | `φ·(out − p·out)` |
//! | out given in | Base | `φ·(in/p − in)` |
//! | out given in | Pt | `φ·(in − p·in)` |

use tracing::debug;

use super::base;
use super::curve::{CurveBreakdown, CurveReserves, YieldSpaceCurve};
use crate::domain::{MarketState, Quantity, StretchedTime, TokenType, TradeDirection, TradeResult};
use crate::error::Result;
use crate::math::{Decimal, PrecisionContext};
use crate::traits::PricingModel;

/// The YieldSpace bonding curve.
///
/// Stateless: every call builds its own precision context and leaves no
/// state behind, so one instance can serve any number of threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct YieldSpacePricingModel;

impl YieldSpacePricingModel {
    /// Creates the model.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Solves `in_given_out` on already-validated curve inputs.
    pub(crate) fn solve_in_given_out(
        &self,
        ctx: &PrecisionContext,
        reserves: CurveReserves,
        tau: &Decimal,
        out: &Decimal,
        unit: TokenType,
        trade_fee: &Decimal,
    ) -> Result<CurveBreakdown> {
        YieldSpaceCurve::new(ctx, reserves, tau)?.in_given_out(out, unit, trade_fee)
    }

    /// Solves `out_given_in` on already-validated curve inputs.
    pub(crate) fn solve_out_given_in(
        &self,
        ctx: &PrecisionContext,
        reserves: CurveReserves,
        tau: &Decimal,
        input: &Decimal,
        unit: TokenType,
        trade_fee: &Decimal,
    ) -> Result<CurveBreakdown> {
        YieldSpaceCurve::new(ctx, reserves, tau)?.out_given_in(input, unit, trade_fee)
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
        let reserves = CurveReserves::from_market_state(market_state)?;
        let (_, tau) = base::decimal_time(&time_remaining)?;
        let amount = Decimal::from_f64(quantity.amount())?;
        let trade_fee = Decimal::from_f64(market_state.trade_fee_percent())?;

        let raw = match direction {
            TradeDirection::InGivenOut => {
                self.solve_in_given_out(&ctx, reserves, &tau, &amount, quantity.unit(), &trade_fee)?
            }
            TradeDirection::OutGivenIn => {
                self.solve_out_given_in(&ctx, reserves, &tau, &amount, quantity.unit(), &trade_fee)?
            }
        };

        let result = TradeResult::new(direction, quantity, *market_state, raw.to_breakdown());
        self.check_output_assertions(&result)?;
        Ok(result)
    }
}

impl PricingModel for YieldSpacePricingModel {
    fn model_name(&self) -> &'static str {
        "YieldSpace"
    }

    fn model_type(&self) -> &'static str {
        "yieldspace"
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
