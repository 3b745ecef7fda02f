//! High-precision arithmetic for the invariant solve.
//!
//! Pricing inputs and outputs are `f64`, but the curve itself is evaluated
//! on [`Decimal`], a 72-digit fixed-point type, using the transcendental
//! functions of [`PrecisionContext`].
//!
//! | Type | Role |
//! |------|------|
//! | [`Decimal`] | Exact add/sub, truncating mul, directed-rounding div |
//! | [`PrecisionContext`] | Per-call `ln`, `exp`, `pow` |

mod decimal;
mod transcendental;

pub use decimal::{Decimal, SCALE_DIGITS};
pub use transcendental::PrecisionContext;
