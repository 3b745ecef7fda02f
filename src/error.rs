//! Unified error types for the pricing engine.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type.  Every variant belongs to exactly one [`ErrorKind`] so that
//! callers can tell a rejected request (bad inputs) apart from a rejected
//! result (a solve that produced something unusable) without matching on
//! individual variants.
//!
//! Every error is fatal to the call that produced it: inputs are
//! deterministic, so retrying is meaningless, and no partial result is ever
//! returned alongside an error.

/// Convenience alias used by every fallible function in the crate.
pub type Result<T> = core::result::Result<T, AmmError>;

/// Coarse classification of an [`AmmError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller's quantity, market state, time or target rate is invalid.
    InputValidation,
    /// The solve produced a breakdown that must not be returned.
    OutputValidation,
    /// A model could not be selected or built from configuration.
    Configuration,
}

/// Errors produced by the pricing engine.
///
/// Variants carry a static description of the violated condition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmmError {
    /// The traded amount is non-positive, non-finite or below one minimal
    /// unit.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// A reserve is non-positive, non-finite or below one minimal unit.
    #[error("invalid reserves: {0}")]
    InvalidReserves(&'static str),

    /// The share price or initial share price is out of range.
    #[error("invalid share price: {0}")]
    InvalidSharePrice(&'static str),

    /// A fee percent is outside `[0, 1]`.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// Days remaining or time stretch produce an unusable exponent.
    #[error("invalid time remaining: {0}")]
    InvalidTime(&'static str),

    /// A target APY or APR is non-finite or out of range.
    #[error("invalid target rate: {0}")]
    InvalidApy(&'static str),

    /// A breakdown field is negative, NaN or infinite.
    #[error("invalid trade output: {0}")]
    InvalidOutput(&'static str),

    /// Applying the trade would leave a reserve at or below zero.
    #[error("reserve depleted: {0}")]
    ReserveDepleted(&'static str),

    /// A high-precision operation left its mathematical domain (for example
    /// a fractional power of a negative number).
    #[error("numeric domain error: {0}")]
    NumericDomain(&'static str),

    /// Division by zero inside the high-precision solve.
    #[error("division by zero")]
    DivisionByZero,

    /// An intermediate value exceeded the supported magnitude.
    #[error("overflow: {0}")]
    Overflow(&'static str),

    /// A model could not be created from the given configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

impl AmmError {
    /// Returns the [`ErrorKind`] this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidQuantity(_)
            | Self::InvalidReserves(_)
            | Self::InvalidSharePrice(_)
            | Self::InvalidFee(_)
            | Self::InvalidTime(_)
            | Self::InvalidApy(_) => ErrorKind::InputValidation,
            Self::InvalidOutput(_)
            | Self::ReserveDepleted(_)
            | Self::NumericDomain(_)
            | Self::DivisionByZero
            | Self::Overflow(_) => ErrorKind::OutputValidation,
            Self::InvalidConfiguration(_) => ErrorKind::Configuration,
        }
    }

    /// Returns `true` if the caller's inputs were rejected.
    #[must_use]
    pub const fn is_input_validation(&self) -> bool {
        matches!(self.kind(), ErrorKind::InputValidation)
    }

    /// Returns `true` if the computed result was rejected.
    #[must_use]
    pub const fn is_output_validation(&self) -> bool {
        matches!(self.kind(), ErrorKind::OutputValidation)
    }
}
