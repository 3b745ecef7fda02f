//! Checks and helpers shared by every pricing model.
//!
//! The [`PricingModel`](crate::traits::PricingModel) default methods forward
//! here, so a model only has to supply its two solves.

use tracing::debug;

use super::curve::{CurveReserves, YieldSpaceCurve};
use crate::domain::{
    MarketState, Quantity, Rounding, StretchedTime, TradeResult, DAYS_PER_YEAR, MIN_TRADE_AMOUNT,
};
use crate::error::{AmmError, Result};
use crate::math::{Decimal, PrecisionContext};

/// Numerator of the time-stretch calibration.
const TIME_STRETCH_NUMERATOR: f64 = 3.09396;
/// Rate sensitivity of the time-stretch calibration.
const TIME_STRETCH_RATE_FACTOR: f64 = 0.02789;

// -- Input assertions -------------------------------------------------------

/// Validates a pricing request.
///
/// # Errors
///
/// Returns the first input-validation error found, checking the quantity,
/// then the market state, then the time remaining.
pub fn check_input_assertions(
    quantity: &Quantity,
    market_state: &MarketState,
    time_remaining: &StretchedTime,
) -> Result<()> {
    check_quantity(quantity)
        .and_then(|()| check_market_state(market_state))
        .and_then(|()| check_time_remaining(time_remaining))
        .map_err(|err| {
            debug!(%err, %quantity, %market_state, %time_remaining, "input assertion failed");
            err
        })
}

/// Validates a traded quantity.
///
/// # Errors
///
/// Returns [`AmmError::InvalidQuantity`] if the amount is non-finite,
/// non-positive, or below [`MIN_TRADE_AMOUNT`].
pub fn check_quantity(quantity: &Quantity) -> Result<()> {
    let amount = quantity.amount();
    if !amount.is_finite() {
        return Err(AmmError::InvalidQuantity("amount must be finite"));
    }
    if amount <= 0.0 {
        return Err(AmmError::InvalidQuantity("amount must be positive"));
    }
    if amount < MIN_TRADE_AMOUNT {
        return Err(AmmError::InvalidQuantity(
            "amount is below the minimal unit",
        ));
    }
    Ok(())
}

/// Validates reserves, share prices and fees.
///
/// # Errors
///
/// - [`AmmError::InvalidReserves`] if a reserve is non-finite, non-positive
///   or below [`MIN_TRADE_AMOUNT`].
/// - [`AmmError::InvalidSharePrice`] if `c ≤ 0`, `μ ≤ 0` or `c < μ`.
/// - [`AmmError::InvalidFee`] if a fee percent is outside `[0, 1]`.
pub fn check_market_state(market_state: &MarketState) -> Result<()> {
    check_reserve(
        market_state.share_reserves(),
        "share reserves must be finite",
        "share reserves must be positive",
        "share reserves are below the minimal unit",
    )?;
    check_reserve(
        market_state.bond_reserves(),
        "bond reserves must be finite",
        "bond reserves must be positive",
        "bond reserves are below the minimal unit",
    )?;

    let c = market_state.share_price();
    let mu = market_state.init_share_price();
    if !c.is_finite() || c <= 0.0 {
        return Err(AmmError::InvalidSharePrice(
            "share price must be positive and finite",
        ));
    }
    if !mu.is_finite() || mu <= 0.0 {
        return Err(AmmError::InvalidSharePrice(
            "initial share price must be positive and finite",
        ));
    }
    if c < mu {
        return Err(AmmError::InvalidSharePrice(
            "share price must not be below the initial share price",
        ));
    }

    if !(0.0..=1.0).contains(&market_state.trade_fee_percent()) {
        return Err(AmmError::InvalidFee("trade fee percent must be in [0, 1]"));
    }
    if !(0.0..=1.0).contains(&market_state.redemption_fee_percent()) {
        return Err(AmmError::InvalidFee(
            "redemption fee percent must be in [0, 1]",
        ));
    }
    Ok(())
}

fn check_reserve(
    value: f64,
    non_finite: &'static str,
    non_positive: &'static str,
    too_small: &'static str,
) -> Result<()> {
    if !value.is_finite() {
        return Err(AmmError::InvalidReserves(non_finite));
    }
    if value <= 0.0 {
        return Err(AmmError::InvalidReserves(non_positive));
    }
    if value < MIN_TRADE_AMOUNT {
        return Err(AmmError::InvalidReserves(too_small));
    }
    Ok(())
}

/// Validates the time remaining and the resulting curve exponent.
///
/// # Errors
///
/// Returns [`AmmError::InvalidTime`] if days are outside `(0, 365]`, the
/// time stretch is not positive and finite, or `τ ≥ 1` (which includes
/// 365 days with a time stretch of 1).
pub fn check_time_remaining(time_remaining: &StretchedTime) -> Result<()> {
    let days = time_remaining.days();
    if !(0.0..=DAYS_PER_YEAR).contains(&days) {
        return Err(AmmError::InvalidTime("days remaining must be in [0, 365]"));
    }
    if days == 0.0 {
        return Err(AmmError::InvalidTime("days remaining must be positive"));
    }
    let time_stretch = time_remaining.time_stretch();
    if !time_stretch.is_finite() || time_stretch <= 0.0 {
        return Err(AmmError::InvalidTime(
            "time stretch must be positive and finite",
        ));
    }
    if time_remaining.stretched_time() >= 1.0 {
        return Err(AmmError::InvalidTime(
            "stretched time must be below one",
        ));
    }
    Ok(())
}

// -- Output assertions ------------------------------------------------------

/// Validates a solved trade before it is returned.
///
/// # Errors
///
/// - [`AmmError::InvalidOutput`] if a breakdown field is negative, NaN or
///   infinite.
/// - [`AmmError::ReserveDepleted`] if applying the trade leaves a reserve
///   at or below zero.
pub fn check_output_assertions(trade_result: &TradeResult) -> Result<()> {
    check_breakdown(trade_result)
        .and_then(|()| check_post_trade_reserves(trade_result))
        .map_err(|err| {
            debug!(%err, %trade_result, breakdown = %trade_result.breakdown(), "output assertion failed");
            err
        })
}

fn check_breakdown(trade_result: &TradeResult) -> Result<()> {
    for field in trade_result.breakdown().fields() {
        if !field.is_finite() {
            return Err(AmmError::InvalidOutput(
                "breakdown contains a non-finite value",
            ));
        }
        if field < 0.0 {
            return Err(AmmError::InvalidOutput(
                "breakdown contains a negative value",
            ));
        }
    }
    Ok(())
}

fn check_post_trade_reserves(trade_result: &TradeResult) -> Result<()> {
    let post = trade_result.post_trade_state();
    if post.share_reserves().is_nan() || post.share_reserves() <= 0.0 {
        return Err(AmmError::ReserveDepleted(
            "trade would deplete the share reserves",
        ));
    }
    if post.bond_reserves().is_nan() || post.bond_reserves() <= 0.0 {
        return Err(AmmError::ReserveDepleted(
            "trade would deplete the bond reserves",
        ));
    }
    Ok(())
}

// -- Calibration ------------------------------------------------------------

/// Returns the time stretch that calibrates the curve for `target_apy`:
/// `3.09396 / (0.02789 · apy · 100)`.
///
/// # Errors
///
/// Returns [`AmmError::InvalidApy`] if `target_apy` is non-finite or not
/// positive.
pub fn calc_time_stretch(target_apy: f64) -> Result<f64> {
    if !target_apy.is_finite() || target_apy <= 0.0 {
        return Err(AmmError::InvalidApy(
            "target apy must be positive and finite",
        ));
    }
    Ok(TIME_STRETCH_NUMERATOR / (TIME_STRETCH_RATE_FACTOR * target_apy * 100.0))
}

// -- Spot price and rates ---------------------------------------------------

/// Returns the spot price of one bond in base implied by the reserves.
///
/// # Errors
///
/// Input-validation errors for an invalid state or time; output-kind
/// errors if the curve cannot be evaluated.
pub fn calc_spot_price_from_reserves(
    market_state: &MarketState,
    time_remaining: &StretchedTime,
) -> Result<f64> {
    check_market_state(market_state)?;
    check_time_remaining(time_remaining)?;
    let ctx = PrecisionContext::new();
    let (_, tau) = decimal_time(time_remaining)?;
    let curve = YieldSpaceCurve::new(&ctx, CurveReserves::from_market_state(market_state)?, &tau)?;
    Ok(curve.spot_price().to_f64())
}

/// Returns the simple annualised rate implied by the reserves,
/// `(1 − p) / (p · t)`.
///
/// # Errors
///
/// Same as [`calc_spot_price_from_reserves`].
pub fn calc_apr_from_reserves(
    market_state: &MarketState,
    time_remaining: &StretchedTime,
) -> Result<f64> {
    let spot_price = calc_spot_price_from_reserves(market_state, time_remaining)?;
    Ok((1.0 - spot_price) / (spot_price * time_remaining.normalized_time()))
}

/// Returns the bond price that yields `apr` over the time remaining,
/// `1 / (1 + apr · t)`.
///
/// # Errors
///
/// - [`AmmError::InvalidApy`] if `apr` is negative or non-finite.
/// - [`AmmError::InvalidTime`] for an invalid time.
pub fn calc_spot_price_from_apr(apr: f64, time_remaining: &StretchedTime) -> Result<f64> {
    check_apr(apr)?;
    check_time_remaining(time_remaining)?;
    Ok(1.0 / (1.0 + apr * time_remaining.normalized_time()))
}

/// Returns the bond reserves at which the pool quotes `target_apr`:
/// `(z / 2) · (μ · (1 + apr · t)^(1/τ) − c)`.
///
/// # Errors
///
/// - Input-validation errors for an invalid rate, state or time.
/// - [`AmmError::InvalidOutput`] if the rate cannot be reached with
///   positive bond reserves.
pub fn calc_bond_reserves(
    target_apr: f64,
    market_state: &MarketState,
    time_remaining: &StretchedTime,
) -> Result<f64> {
    check_apr(target_apr)?;
    check_market_state(market_state)?;
    check_time_remaining(time_remaining)?;

    let ctx = PrecisionContext::new();
    let (normalized, tau) = decimal_time(time_remaining)?;
    let reserves = CurveReserves::from_market_state(market_state)?;
    let growth = Decimal::one() + Decimal::from_f64(target_apr)? * normalized;
    let inv_tau = tau.recip(Rounding::Down)?;
    let scaled = &reserves.init_share_price * ctx.pow(&growth, &inv_tau)?;
    let half_shares = reserves
        .share_reserves
        .checked_div(&Decimal::from_integer(2), Rounding::Down)?;
    let bond_reserves = (half_shares * (scaled - &reserves.share_price)).to_f64();

    if !bond_reserves.is_finite() || bond_reserves <= 0.0 {
        return Err(AmmError::InvalidOutput(
            "target rate is unreachable with positive bond reserves",
        ));
    }
    Ok(bond_reserves)
}

fn check_apr(apr: f64) -> Result<()> {
    if !apr.is_finite() || apr < 0.0 {
        return Err(AmmError::InvalidApy(
            "target rate must be non-negative and finite",
        ));
    }
    Ok(())
}

/// Converts a time remaining into `(t, τ)` as decimals, where
/// `t = days / 365` and `τ = t / time_stretch`.
pub(crate) fn decimal_time(time_remaining: &StretchedTime) -> Result<(Decimal, Decimal)> {
    let days = Decimal::from_f64(time_remaining.days())?;
    let time_stretch = Decimal::from_f64(time_remaining.time_stretch())?;
    let normalized = days.checked_div(&Decimal::from_integer(365), Rounding::Down)?;
    let tau = normalized.checked_div(&time_stretch, Rounding::Down)?;
    Ok((normalized, tau))
}
