//! Model configuration.
//!
//! [`ModelConfig`] is the declarative blueprint the factory turns into a
//! pricing model; [`ModelKind`] names the variant.

mod model_config;
mod model_kind;

pub use model_config::ModelConfig;
pub use model_kind::ModelKind;
