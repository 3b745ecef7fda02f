//! Model instantiation via the factory pattern.
//!
//! The [`DefaultModelFactory`] creates pricing models from
//! [`ModelConfig`] values, validating the configuration and dispatching on
//! its [`ModelKind`].
//!
//! # Usage
//!
//! ```rust
//! use yield_amm::config::{ModelConfig, ModelKind};
//! use yield_amm::domain::{MarketState, Quantity};
//! use yield_amm::factory::DefaultModelFactory;
//! use yield_amm::traits::PricingModel;
//!
//! let cfg = ModelConfig::new(ModelKind::YieldSpace, 0.05).expect("valid");
//! let model = DefaultModelFactory::create(&cfg).expect("model created");
//! let state = MarketState::new(100_000.0, 100_000.0, 1.0, 1.0, 0.1, 0.0);
//! let time = cfg.stretched_time(182.5).expect("valid");
//! let result = model
//!     .calc_out_given_in(Quantity::base(100.0), &state, time)
//!     .expect("priced");
//! assert!(result.breakdown().with_fee() > 100.0);
//! ```
//!
//! # Feature Gating
//!
//! Each match arm is gated behind its model's feature flag.  Requesting a
//! model whose feature is not enabled returns
//! [`AmmError::InvalidConfiguration`].
//!
//! [`ModelConfig`]: crate::config::ModelConfig
//! [`ModelKind`]: crate::config::ModelKind
//! [`AmmError::InvalidConfiguration`]: crate::error::AmmError::InvalidConfiguration

mod default_factory;

pub use default_factory::DefaultModelFactory;
