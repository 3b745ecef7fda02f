//! Enum dispatch wrapper for all pricing models.
//!
//! [`PricingModelBox`] wraps every concrete model behind a single enum,
//! so callers can hold "some pricing model" chosen at runtime without
//! `dyn` trait objects.  Each variant is feature-gated to match its model.

#[cfg(feature = "hyperdrive")]
use super::HyperdrivePricingModel;
#[cfg(feature = "yieldspace")]
use super::YieldSpacePricingModel;

use crate::domain::{MarketState, Quantity, StretchedTime, TradeResult};
use crate::error::Result;
use crate::traits::PricingModel;

/// Static-dispatch enum over the enabled pricing models.
///
/// Models are zero-sized, so variants hold them inline.  The enum
/// implements [`PricingModel`] by delegating every method, including the
/// default ones, to the inner model.
///
/// # Example
///
/// ```
/// use yield_amm::models::{PricingModelBox, YieldSpacePricingModel};
/// use yield_amm::traits::PricingModel;
///
/// let model = PricingModelBox::YieldSpace(YieldSpacePricingModel::new());
/// assert_eq!(model.model_type(), "yieldspace");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PricingModelBox {
    /// YieldSpace curve.
    #[cfg(feature = "yieldspace")]
    YieldSpace(YieldSpacePricingModel),

    /// Hyperdrive flat-plus-curve model.
    #[cfg(feature = "hyperdrive")]
    Hyperdrive(HyperdrivePricingModel),
}

/// Delegates a method call to the model inside every variant.
macro_rules! delegate {
    ($self:ident, $method:ident ( $($arg:expr),* )) => {
        match $self {
            #[cfg(feature = "yieldspace")]
            PricingModelBox::YieldSpace(m) => m.$method($($arg),*),
            #[cfg(feature = "hyperdrive")]
            PricingModelBox::Hyperdrive(m) => m.$method($($arg),*),
        }
    };
}

impl PricingModel for PricingModelBox {
    fn model_name(&self) -> &'static str {
        delegate!(self, model_name())
    }

    fn model_type(&self) -> &'static str {
        delegate!(self, model_type())
    }

    fn calc_in_given_out(
        &self,
        out: Quantity,
        market_state: &MarketState,
        time_remaining: StretchedTime,
    ) -> Result<TradeResult> {
        delegate!(self, calc_in_given_out(out, market_state, time_remaining))
    }

    fn calc_out_given_in(
        &self,
        input: Quantity,
        market_state: &MarketState,
        time_remaining: StretchedTime,
    ) -> Result<TradeResult> {
        delegate!(self, calc_out_given_in(input, market_state, time_remaining))
    }

    fn check_input_assertions(
        &self,
        quantity: &Quantity,
        market_state: &MarketState,
        time_remaining: &StretchedTime,
    ) -> Result<()> {
        delegate!(self, check_input_assertions(quantity, market_state, time_remaining))
    }

    fn check_output_assertions(&self, trade_result: &TradeResult) -> Result<()> {
        delegate!(self, check_output_assertions(trade_result))
    }

    fn calc_time_stretch(&self, target_apy: f64) -> Result<f64> {
        delegate!(self, calc_time_stretch(target_apy))
    }

    fn calc_spot_price_from_reserves(
        &self,
        market_state: &MarketState,
        time_remaining: &StretchedTime,
    ) -> Result<f64> {
        delegate!(self, calc_spot_price_from_reserves(market_state, time_remaining))
    }

    fn calc_apr_from_reserves(
        &self,
        market_state: &MarketState,
        time_remaining: &StretchedTime,
    ) -> Result<f64> {
        delegate!(self, calc_apr_from_reserves(market_state, time_remaining))
    }

    fn calc_spot_price_from_apr(&self, apr: f64, time_remaining: &StretchedTime) -> Result<f64> {
        delegate!(self, calc_spot_price_from_apr(apr, time_remaining))
    }

    fn calc_bond_reserves(
        &self,
        target_apr: f64,
        market_state: &MarketState,
        time_remaining: &StretchedTime,
    ) -> Result<f64> {
        delegate!(self, calc_bond_reserves(target_apr, market_state, time_remaining))
    }
}

#[cfg(feature = "yieldspace")]
impl From<YieldSpacePricingModel> for PricingModelBox {
    fn from(model: YieldSpacePricingModel) -> Self {
        Self::YieldSpace(model)
    }
}

#[cfg(feature = "hyperdrive")]
impl From<HyperdrivePricingModel> for PricingModelBox {
    fn from(model: HyperdrivePricingModel) -> Self {
        Self::Hyperdrive(model)
    }
}
