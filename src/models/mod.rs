//! Feature-gated pricing models and the [`PricingModelBox`] dispatch enum.
//!
//! Each model is behind its own Cargo feature flag.  The shared checks and
//! calibration live in [`base`] and reach every model through the
//! [`PricingModel`](crate::traits::PricingModel) default methods.
//!
//! # Models
//!
//! | Feature | Model | Curve |
//! |---------|-------|-------|
//! | `yieldspace` | [`YieldSpacePricingModel`] | YieldSpace invariant over the time remaining |
//! | `hyperdrive` | [`HyperdrivePricingModel`] | Flat redemption plus a full-term YieldSpace curve |

pub mod base;
mod curve;
#[cfg(feature = "hyperdrive")]
pub mod hyperdrive;
#[cfg(feature = "yieldspace")]
pub mod yieldspace;

mod model_box;

#[cfg(all(test, feature = "all-models"))]
mod proptest_properties;

#[cfg(feature = "hyperdrive")]
pub use hyperdrive::HyperdrivePricingModel;
pub use model_box::PricingModelBox;
#[cfg(feature = "yieldspace")]
pub use yieldspace::YieldSpacePricingModel;
