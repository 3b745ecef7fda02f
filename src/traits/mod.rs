//! Core trait abstraction for pricing models.
//!
//! Every curve variant implements [`PricingModel`]; callers program
//! against the trait and never against a concrete model.

mod pricing_model;

pub use pricing_model::PricingModel;
