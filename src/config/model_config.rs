//! Declarative blueprint for a pricing model.

use super::ModelKind;
use crate::domain::StretchedTime;
use crate::error::{AmmError, Result};
use crate::models::base;

/// Configuration for a pricing model: the variant and the APY its time
/// stretch is calibrated for.
///
/// # Derived Values
///
/// - Time stretch: `3.09396 / (0.02789 · target_apy · 100)`
///
/// # Validation
///
/// - `target_apy` must be finite and positive.
///
/// # Examples
///
/// ```
/// use yield_amm::config::{ModelConfig, ModelKind};
///
/// let cfg = ModelConfig::new(ModelKind::YieldSpace, 0.05).expect("valid");
/// let t = cfg.stretched_time(182.5).expect("valid");
/// assert!((t.time_stretch() - 22.186877016851916).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelConfig {
    kind: ModelKind,
    target_apy: f64,
}

impl ModelConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `target_apy` is not
    /// finite and positive.
    pub fn new(kind: ModelKind, target_apy: f64) -> Result<Self> {
        let config = Self { kind, target_apy };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `target_apy` is not
    /// finite and positive.
    pub fn validate(&self) -> Result<()> {
        if !self.target_apy.is_finite() || self.target_apy <= 0.0 {
            return Err(AmmError::InvalidConfiguration(
                "target apy must be positive and finite",
            ));
        }
        Ok(())
    }

    /// Returns the model kind.
    pub const fn kind(&self) -> ModelKind {
        self.kind
    }

    /// Returns the calibration APY.
    pub const fn target_apy(&self) -> f64 {
        self.target_apy
    }

    /// Returns the calibrated time stretch.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidApy`] if the APY is invalid.
    pub fn time_stretch(&self) -> Result<f64> {
        base::calc_time_stretch(self.target_apy)
    }

    /// Returns a [`StretchedTime`] of `days` with the calibrated stretch.
    ///
    /// # Errors
    ///
    /// Same as [`time_stretch`](Self::time_stretch).
    pub fn stretched_time(&self, days: f64) -> Result<StretchedTime> {
        Ok(StretchedTime::new(days, self.time_stretch()?))
    }
}
