//! The pricing model abstraction.
//!
//! [`PricingModel`] is the single interface every curve variant exposes.
//! Implementors supply their identity and the two solves; the assertion
//! framework, time-stretch calibration and rate helpers are shared default
//! methods, so every variant validates and calibrates identically.
//!
//! # Call lifecycle
//!
//! 1. **Validate inputs**: [`PricingModel::check_input_assertions`].
//! 2. **Solve**: evaluate the invariant in high precision and derive the
//!    counter-amount with its fee.
//! 3. **Validate outputs**: [`PricingModel::check_output_assertions`] on
//!    the assembled [`TradeResult`].
//!
//! A call either returns a result that passed both checks or an error; no
//! partial result is ever produced.
//!
//! # Dispatch Model
//!
//! Models are dispatched through the `PricingModelBox` enum rather than
//! `dyn` trait objects; see the `models` module.

use crate::domain::{MarketState, Quantity, StretchedTime, TradeResult};
use crate::error::Result;
use crate::models::base;

/// A bonding-curve pricing model for a bond/base market.
///
/// # Errors
///
/// Every fallible method returns [`crate::error::AmmError`]:
///
/// - input-validation variants when the request is rejected before solving;
/// - output-validation variants when the solve fails or its result would
///   be unsafe to return.
///
/// # Examples
///
/// ```
/// use yield_amm::domain::{MarketState, Quantity, StretchedTime};
/// use yield_amm::models::YieldSpacePricingModel;
/// use yield_amm::traits::PricingModel;
///
/// let model = YieldSpacePricingModel::new();
/// let ts = model.calc_time_stretch(0.05).expect("positive apy");
/// let state = MarketState::new(100_000.0, 100_000.0, 1.0, 1.0, 0.1, 0.0);
/// let result = model
///     .calc_in_given_out(Quantity::pt(100.0), &state, StretchedTime::new(182.5, ts))
///     .expect("priced");
/// assert!((result.breakdown().with_fee() - 97.80056176319218).abs() < 1e-8);
/// ```
pub trait PricingModel {
    /// Human-readable model name, e.g. `"YieldSpace"`.
    fn model_name(&self) -> &'static str;

    /// Lowercase model identifier, e.g. `"yieldspace"`.
    fn model_type(&self) -> &'static str;

    /// Prices the amount the trader must supply to receive `out`.
    ///
    /// The breakdown is denominated in the counterpart of `out.unit()` and
    /// satisfies `with_fee = without_fee + fee`.
    ///
    /// # Errors
    ///
    /// Input-validation errors for an invalid request; output-validation
    /// errors if the solve fails or the result is rejected.
    fn calc_in_given_out(
        &self,
        out: Quantity,
        market_state: &MarketState,
        time_remaining: StretchedTime,
    ) -> Result<TradeResult>;

    /// Prices the amount the trader receives for supplying `input`.
    ///
    /// The breakdown is denominated in the counterpart of `input.unit()`
    /// and satisfies `with_fee = without_fee − fee`.
    ///
    /// # Errors
    ///
    /// Same as [`PricingModel::calc_in_given_out`].
    fn calc_out_given_in(
        &self,
        input: Quantity,
        market_state: &MarketState,
        time_remaining: StretchedTime,
    ) -> Result<TradeResult>;

    /// Validates a pricing request before any solve.
    ///
    /// # Errors
    ///
    /// Returns the first input-validation error found.
    fn check_input_assertions(
        &self,
        quantity: &Quantity,
        market_state: &MarketState,
        time_remaining: &StretchedTime,
    ) -> Result<()> {
        base::check_input_assertions(quantity, market_state, time_remaining)
    }

    /// Validates a solved trade before it is returned.
    ///
    /// # Errors
    ///
    /// Returns an output-validation error for a negative or non-finite
    /// breakdown field, or a trade that would deplete a reserve.
    fn check_output_assertions(&self, trade_result: &TradeResult) -> Result<()> {
        base::check_output_assertions(trade_result)
    }

    /// Returns the time stretch calibrated for `target_apy`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::AmmError::InvalidApy`] if `target_apy` is
    /// non-finite or not positive.
    fn calc_time_stretch(&self, target_apy: f64) -> Result<f64> {
        base::calc_time_stretch(target_apy)
    }

    /// Returns the spot price of one bond in base.
    ///
    /// # Errors
    ///
    /// Input-validation errors for an invalid state or time.
    fn calc_spot_price_from_reserves(
        &self,
        market_state: &MarketState,
        time_remaining: &StretchedTime,
    ) -> Result<f64> {
        base::calc_spot_price_from_reserves(market_state, time_remaining)
    }

    /// Returns the annualised rate implied by the reserves.
    ///
    /// # Errors
    ///
    /// Input-validation errors for an invalid state or time.
    fn calc_apr_from_reserves(
        &self,
        market_state: &MarketState,
        time_remaining: &StretchedTime,
    ) -> Result<f64> {
        base::calc_apr_from_reserves(market_state, time_remaining)
    }

    /// Returns the bond price that yields `apr` over the time remaining.
    ///
    /// # Errors
    ///
    /// Input-validation errors for an invalid rate or time.
    fn calc_spot_price_from_apr(&self, apr: f64, time_remaining: &StretchedTime) -> Result<f64> {
        base::calc_spot_price_from_apr(apr, time_remaining)
    }

    /// Returns the bond reserves at which the pool quotes `target_apr`.
    ///
    /// # Errors
    ///
    /// Input-validation errors for an invalid rate, state or time;
    /// [`crate::error::AmmError::InvalidOutput`] if the rate is unreachable.
    fn calc_bond_reserves(
        &self,
        target_apr: f64,
        market_state: &MarketState,
        time_remaining: &StretchedTime,
    ) -> Result<f64> {
        base::calc_bond_reserves(target_apr, market_state, time_remaining)
    }
}
