//! Identifier of a pricing model variant.

use core::fmt;
use core::str::FromStr;

use crate::error::AmmError;

/// Which pricing model to build.
///
/// The kind exists regardless of enabled features, so a configuration can
/// always be parsed; building a disabled model is rejected by the factory.
///
/// # Examples
///
/// ```
/// use yield_amm::config::ModelKind;
///
/// let kind: ModelKind = "Hyperdrive".parse().expect("known model");
/// assert_eq!(kind, ModelKind::Hyperdrive);
/// assert_eq!(kind.to_string(), "hyperdrive");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    /// The YieldSpace curve.
    YieldSpace,
    /// The Hyperdrive flat-plus-curve model.
    Hyperdrive,
}

impl ModelKind {
    /// Every known kind.
    pub const ALL: [Self; 2] = [Self::YieldSpace, Self::Hyperdrive];

    /// Returns the lowercase model identifier.
    #[must_use]
    pub const fn model_type(&self) -> &'static str {
        match self {
            Self::YieldSpace => "yieldspace",
            Self::Hyperdrive => "hyperdrive",
        }
    }

    /// Returns the human-readable model name.
    #[must_use]
    pub const fn model_name(&self) -> &'static str {
        match self {
            Self::YieldSpace => "YieldSpace",
            Self::Hyperdrive => "Hyperdrive",
        }
    }

    /// Returns `true` if the model is compiled into this build.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        match self {
            Self::YieldSpace => cfg!(feature = "yieldspace"),
            Self::Hyperdrive => cfg!(feature = "hyperdrive"),
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.model_type())
    }
}

impl FromStr for ModelKind {
    type Err = AmmError;

    /// Parses a model identifier, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.model_type().eq_ignore_ascii_case(s))
            .ok_or(AmmError::InvalidConfiguration("unknown pricing model"))
    }
}
