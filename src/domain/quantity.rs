//! An amount of one token.

use core::fmt;

use super::TokenType;

/// Smallest tradeable amount: one unit of an 18-decimal token.
pub const MIN_TRADE_AMOUNT: f64 = 1e-18;

/// An amount denominated in a [`TokenType`].
///
/// Construction never fails, so callers can describe any request;
/// the pricing models reject untradeable quantities in their input check.
///
/// # Examples
///
/// ```
/// use yield_amm::domain::{Quantity, TokenType};
///
/// let q = Quantity::new(100.0, TokenType::Pt);
/// assert!(q.is_tradeable());
/// assert!(!Quantity::new(0.5e-18, TokenType::Base).is_tradeable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    amount: f64,
    unit: TokenType,
}

impl Quantity {
    /// Creates a quantity of `amount` units of `unit`.
    #[must_use]
    pub const fn new(amount: f64, unit: TokenType) -> Self {
        Self { amount, unit }
    }

    /// Shorthand for a base-denominated quantity.
    #[must_use]
    pub const fn base(amount: f64) -> Self {
        Self::new(amount, TokenType::Base)
    }

    /// Shorthand for a bond-denominated quantity.
    #[must_use]
    pub const fn pt(amount: f64) -> Self {
        Self::new(amount, TokenType::Pt)
    }

    /// Returns the amount.
    pub const fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns the unit.
    pub const fn unit(&self) -> TokenType {
        self.unit
    }

    /// Returns `true` if the amount is finite and at least
    /// [`MIN_TRADE_AMOUNT`].
    #[must_use]
    pub fn is_tradeable(&self) -> bool {
        self.amount.is_finite() && self.amount >= MIN_TRADE_AMOUNT
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.unit)
    }
}
