//! The YieldSpace invariant evaluated in 72-digit fixed point.
//!
//! With `z` share reserves, `y` bond reserves, `c` share price, `μ`
//! initial share price and `τ` stretched time:
//!
//! ```text
//! k = (c/μ)·(μ·z)^(1−τ) + (2y + c·z)^(1−τ)
//! p = ((2y + c·z) / (μ·z))^(−τ)
//! ```
//!
//! Every solve holds `k` fixed, moves one side of the pool by the traded
//! amount and solves the other side for the counter-amount.  Values stay
//! [`Decimal`] until [`CurveBreakdown::to_breakdown`] converts the result.

use tracing::trace;

use crate::domain::{MarketState, Rounding, TokenType, TradeBreakdown};
use crate::error::{AmmError, Result};
use crate::math::{Decimal, PrecisionContext};

/// Pool reserves and prices in curve precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CurveReserves {
    pub(crate) share_reserves: Decimal,
    pub(crate) bond_reserves: Decimal,
    pub(crate) share_price: Decimal,
    pub(crate) init_share_price: Decimal,
}

impl CurveReserves {
    pub(crate) fn from_market_state(market_state: &MarketState) -> Result<Self> {
        Ok(Self {
            share_reserves: Decimal::from_f64(market_state.share_reserves())?,
            bond_reserves: Decimal::from_f64(market_state.bond_reserves())?,
            share_price: Decimal::from_f64(market_state.share_price())?,
            init_share_price: Decimal::from_f64(market_state.init_share_price())?,
        })
    }

    /// Returns the reserves moved by the given share and bond deltas.
    pub(crate) fn shifted(self, d_shares: &Decimal, d_bonds: &Decimal) -> Self {
        Self {
            share_reserves: &self.share_reserves + d_shares,
            bond_reserves: &self.bond_reserves + d_bonds,
            ..self
        }
    }
}

/// A breakdown in curve precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CurveBreakdown {
    pub(crate) without_fee_or_slippage: Decimal,
    pub(crate) without_fee: Decimal,
    pub(crate) fee: Decimal,
    pub(crate) with_fee: Decimal,
}

impl CurveBreakdown {
    pub(crate) fn to_breakdown(&self) -> TradeBreakdown {
        TradeBreakdown::new(
            self.without_fee_or_slippage.to_f64(),
            self.without_fee.to_f64(),
            self.fee.to_f64(),
            self.with_fee.to_f64(),
        )
    }
}

/// The invariant of one pool state, ready to solve trades against.
#[derive(Debug)]
pub(crate) struct YieldSpaceCurve<'ctx> {
    ctx: &'ctx PrecisionContext,
    reserves: CurveReserves,
    one_minus_tau: Decimal,
    inv_one_minus_tau: Decimal,
    /// `c / μ`
    scale: Decimal,
    /// `2y + c·z`
    total: Decimal,
    k: Decimal,
    spot_price: Decimal,
}

impl<'ctx> YieldSpaceCurve<'ctx> {
    /// Evaluates `k` and the spot price for `reserves` at stretched time
    /// `tau`.
    ///
    /// # Errors
    ///
    /// Output-kind errors if `τ ∉ (0, 1)` or a reserve term is negative.
    pub(crate) fn new(
        ctx: &'ctx PrecisionContext,
        reserves: CurveReserves,
        tau: &Decimal,
    ) -> Result<Self> {
        let one_minus_tau = Decimal::one() - tau;
        if !one_minus_tau.is_positive() || !tau.is_positive() {
            return Err(AmmError::NumericDomain(
                "stretched time must lie strictly between zero and one",
            ));
        }
        let inv_one_minus_tau = one_minus_tau.recip(Rounding::Down)?;
        let scale = reserves
            .share_price
            .checked_div(&reserves.init_share_price, Rounding::Down)?;
        let mu_z = &reserves.init_share_price * &reserves.share_reserves;
        let total = &reserves.bond_reserves * Decimal::from_integer(2)
            + &reserves.share_price * &reserves.share_reserves;

        let k = &scale * ctx.pow(&mu_z, &one_minus_tau)? + ctx.pow(&total, &one_minus_tau)?;
        let spot_price = ctx.pow(&total.checked_div(&mu_z, Rounding::Down)?, &(-tau))?;
        trace!(%k, %spot_price, %tau, "yieldspace invariant");

        Ok(Self {
            ctx,
            reserves,
            one_minus_tau,
            inv_one_minus_tau,
            scale,
            total,
            k,
            spot_price,
        })
    }

    /// Returns the spot price of one bond in base.
    pub(crate) const fn spot_price(&self) -> &Decimal {
        &self.spot_price
    }

    /// Prices the amount the trader must supply to receive `out` of `unit`.
    pub(crate) fn in_given_out(
        &self,
        out: &Decimal,
        unit: TokenType,
        trade_fee: &Decimal,
    ) -> Result<CurveBreakdown> {
        let r = &self.reserves;
        let (without_fee_or_slippage, without_fee, fee) = match unit {
            TokenType::Base => {
                let d_z = out.checked_div(&r.share_price, Rounding::Up)?;
                let without_fee_or_slippage = out.checked_div(&self.spot_price, Rounding::Up)?;
                let shares_after = &r.init_share_price * &(&r.share_reserves - &d_z);
                let bonds_after = self.solve_total(&shares_after)?;
                let without_fee = bonds_after - &self.total;
                let fee = trade_fee * &(&without_fee_or_slippage - out);
                (without_fee_or_slippage, without_fee, fee)
            }
            TokenType::Pt => {
                let without_fee_or_slippage = &self.spot_price * out;
                let shares_after = self.solve_shares(&(&self.total - out), Rounding::Up)?;
                let without_fee = &r.share_price * &(shares_after - &r.share_reserves);
                let fee = trade_fee * &(out - &without_fee_or_slippage);
                (without_fee_or_slippage, without_fee, fee)
            }
        };
        let with_fee = &without_fee + &fee;
        trace!(%without_fee_or_slippage, %without_fee, %fee, %with_fee, "in_given_out solved");
        Ok(CurveBreakdown {
            without_fee_or_slippage,
            without_fee,
            fee,
            with_fee,
        })
    }

    /// Prices the amount the trader receives for supplying `input` of
    /// `unit`.
    pub(crate) fn out_given_in(
        &self,
        input: &Decimal,
        unit: TokenType,
        trade_fee: &Decimal,
    ) -> Result<CurveBreakdown> {
        let r = &self.reserves;
        let (without_fee_or_slippage, without_fee, fee) = match unit {
            TokenType::Base => {
                let d_z = input.checked_div(&r.share_price, Rounding::Down)?;
                let without_fee_or_slippage = input.checked_div(&self.spot_price, Rounding::Down)?;
                let shares_after = &r.init_share_price * &(&r.share_reserves + &d_z);
                let bonds_after = self.solve_total(&shares_after)?;
                let without_fee = &self.total - bonds_after;
                let fee = trade_fee * &(&without_fee_or_slippage - input);
                (without_fee_or_slippage, without_fee, fee)
            }
            TokenType::Pt => {
                let without_fee_or_slippage = &self.spot_price * input;
                let shares_after = self.solve_shares(&(&self.total + input), Rounding::Down)?;
                let without_fee = &r.share_price * &(&r.share_reserves - shares_after);
                let fee = trade_fee * &(input - &without_fee_or_slippage);
                (without_fee_or_slippage, without_fee, fee)
            }
        };
        let with_fee = &without_fee - &fee;
        trace!(%without_fee_or_slippage, %without_fee, %fee, %with_fee, "out_given_in solved");
        Ok(CurveBreakdown {
            without_fee_or_slippage,
            without_fee,
            fee,
            with_fee,
        })
    }

    /// Solves `(k − (c/μ)·(μz')^(1−τ))^(1/(1−τ))` for the bond-side total
    /// given the new `μz'`.
    fn solve_total(&self, mu_shares_after: &Decimal) -> Result<Decimal> {
        let share_term = &self.scale * self.ctx.pow(mu_shares_after, &self.one_minus_tau)?;
        self.ctx
            .pow(&(&self.k - share_term), &self.inv_one_minus_tau)
    }

    /// Solves `(1/μ)·((k − total'^(1−τ)) / (c/μ))^(1/(1−τ))` for the share
    /// reserves given the new bond-side total.
    fn solve_shares(&self, total_after: &Decimal, rounding: Rounding) -> Result<Decimal> {
        let bond_term = self.ctx.pow(total_after, &self.one_minus_tau)?;
        let scaled = (&self.k - bond_term).checked_div(&self.scale, rounding)?;
        self.ctx
            .pow(&scaled, &self.inv_one_minus_tau)?
            .checked_div(&self.reserves.init_share_price, rounding)
    }
}
