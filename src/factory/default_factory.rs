//! Default model factory implementation.

use tracing::debug;

use crate::config::{ModelConfig, ModelKind};
use crate::error::{AmmError, Result};
use crate::models::PricingModelBox;

/// Stateless factory for creating pricing models from configuration.
///
/// `DefaultModelFactory` is the single entry point for building a model
/// chosen at runtime.  It validates the [`ModelConfig`], matches on its
/// [`ModelKind`] and wraps the model in a [`PricingModelBox`].
///
/// # Thread Safety
///
/// [`create`](Self::create) is a pure function with no shared mutable
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DefaultModelFactory;

impl DefaultModelFactory {
    /// Creates a pricing model from the given configuration.
    ///
    /// # Flow
    ///
    /// 1. Validate the configuration via [`ModelConfig::validate`].
    /// 2. Match on the model kind.
    /// 3. Wrap the model in the corresponding [`PricingModelBox`] variant.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the configuration is
    /// invalid or the requested model's feature is not enabled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yield_amm::config::{ModelConfig, ModelKind};
    /// use yield_amm::factory::DefaultModelFactory;
    /// use yield_amm::traits::PricingModel;
    ///
    /// let cfg = ModelConfig::new(ModelKind::Hyperdrive, 0.05).expect("valid");
    /// let model = DefaultModelFactory::create(&cfg).expect("model created");
    /// assert_eq!(model.model_name(), "Hyperdrive");
    /// ```
    pub fn create(config: &ModelConfig) -> Result<PricingModelBox> {
        config.validate()?;
        let model = Self::create_kind(config.kind())?;
        debug!(model = config.kind().model_type(), target_apy = config.target_apy(), "pricing model created");
        Ok(model)
    }

    /// Creates a pricing model of the given kind.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the model's feature is
    /// not enabled.
    pub fn create_kind(kind: ModelKind) -> Result<PricingModelBox> {
        match kind {
            #[cfg(feature = "yieldspace")]
            ModelKind::YieldSpace => Ok(PricingModelBox::YieldSpace(
                crate::models::YieldSpacePricingModel::new(),
            )),

            #[cfg(feature = "hyperdrive")]
            ModelKind::Hyperdrive => Ok(PricingModelBox::Hyperdrive(
                crate::models::HyperdrivePricingModel::new(),
            )),

            #[allow(unreachable_patterns)]
            _ => Err(AmmError::InvalidConfiguration(
                "pricing model feature is not enabled",
            )),
        }
    }
}
