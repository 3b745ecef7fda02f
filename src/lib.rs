//! # Yield AMM
//!
//! Pricing engine for automated market makers that trade a yield-bearing
//! base asset against its principal token (a fixed-rate bond).
//!
//! Given a pool snapshot, a trade amount and the time remaining until
//! maturity, a model returns a four-part [`TradeBreakdown`](domain::TradeBreakdown)
//! (spot-price amount, curve amount, fee, amount exchanged) together with
//! the wallet and reserve deltas the trade implies.  Two models are
//! provided:
//!
//! - **YieldSpace**: the time-stretched invariant
//!   `k = (c/μ)·(μ·z)^(1−τ) + (2y + c·z)^(1−τ)`, `yieldspace` feature.
//! - **Hyperdrive**: a flat 1:1 redemption of the matured part of a trade
//!   plus a full-term YieldSpace curve for the rest, `hyperdrive` feature.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `yieldspace` | yes | YieldSpace pricing model |
//! | `hyperdrive` | yes | Hyperdrive pricing model (implies `yieldspace`) |
//! | `all-models` | yes | Enables both models |
//!
//! At least one model feature must be enabled; building with
//! `--no-default-features` alone is rejected at compile time.
//!
//! # Quick Start
//!
//! ```rust
//! use yield_amm::domain::{MarketState, Quantity, StretchedTime};
//! use yield_amm::models::HyperdrivePricingModel;
//! use yield_amm::traits::PricingModel;
//!
//! let model = HyperdrivePricingModel::new();
//!
//! // 1. Calibrate the curve for a 5% APY
//! let ts = model.calc_time_stretch(0.05).expect("positive apy");
//!
//! // 2. Describe the pool: shares, bonds, share price, initial share
//! //    price, trade fee, redemption fee
//! let state = MarketState::new(100_000.0, 100_000.0, 1.0, 1.0, 0.1, 0.0);
//!
//! // 3. Price buying 100 bonds with half the term remaining
//! let result = model
//!     .calc_in_given_out(Quantity::pt(100.0), &state, StretchedTime::new(182.5, ts))
//!     .expect("priced");
//!
//! let b = result.breakdown();
//! assert!((b.with_fee() - 97.82800898718885).abs() < 1e-8);
//! assert!((b.with_fee() - (b.without_fee() + b.fee())).abs() < 1e-12);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer   │  MarketState + Quantity + StretchedTime
//! └──────┬───────┘
//!        │ PricingModel trait (or PricingModelBox via the factory)
//!        ▼
//! ┌──────────────┐
//! │    Models    │  input check → solve → output check
//! └──────┬───────┘
//!        │ YieldSpace curve
//!        ▼
//! ┌──────────────┐
//! │     Math     │  Decimal (72 digits), PrecisionContext (ln, exp, pow)
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Quantity`](domain::Quantity), [`MarketState`](domain::MarketState), [`StretchedTime`](domain::StretchedTime), [`TradeResult`](domain::TradeResult) |
//! | [`traits`] | The [`PricingModel`](traits::PricingModel) abstraction with shared checks |
//! | [`models`] | Feature-gated models and the [`PricingModelBox`](models::PricingModelBox) dispatch enum |
//! | [`config`] | [`ModelConfig`](config::ModelConfig) and [`ModelKind`](config::ModelKind) |
//! | [`factory`] | [`DefaultModelFactory`](factory::DefaultModelFactory) for config-driven construction |
//! | [`math`] | High-precision [`Decimal`](math::Decimal) and [`PrecisionContext`](math::PrecisionContext) |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (`debug` per call and per rejected
//! assertion, `trace` for invariant internals) and never installs a
//! subscriber.

#[cfg(not(any(feature = "yieldspace", feature = "hyperdrive")))]
compile_error!(
    "yield-amm needs a pricing model: enable the `yieldspace` or `hyperdrive` feature"
);

pub mod config;
pub mod domain;
pub mod error;
pub mod factory;
pub mod math;
pub mod models;
pub mod prelude;
pub mod traits;
