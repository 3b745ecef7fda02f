//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use yield_amm::prelude::*;
//!
//! let model = DefaultModelFactory::create_kind(ModelKind::YieldSpace).expect("enabled");
//! assert_eq!(model.model_type(), "yieldspace");
//! ```

// Re-export domain types
pub use crate::domain::{
    MarketDeltas, MarketState, Quantity, StretchedTime, TokenType, TradeBreakdown,
    TradeDirection, TradeResult, UserDeltas,
};

// Re-export core traits
pub use crate::traits::PricingModel;

// Re-export configuration
pub use crate::config::{ModelConfig, ModelKind};

// Re-export error types
pub use crate::error::{AmmError, ErrorKind, Result};

// Re-export factory
pub use crate::factory::DefaultModelFactory;

// Re-export model dispatch
pub use crate::models::PricingModelBox;
#[cfg(feature = "hyperdrive")]
pub use crate::models::HyperdrivePricingModel;
#[cfg(feature = "yieldspace")]
pub use crate::models::YieldSpacePricingModel;
