//! Explicit rounding direction for high-precision division.

use super::TradeDirection;

/// Direction in which a [`Decimal`](crate::math::Decimal) quotient is
/// rounded when it cannot be represented exactly in 72 fractional digits.
///
/// Amounts the trader must supply are rounded up and amounts the trader
/// receives are rounded down.
///
/// # Examples
///
/// ```
/// use yield_amm::domain::{Rounding, TradeDirection};
///
/// assert_eq!(Rounding::against_trader(TradeDirection::InGivenOut), Rounding::Up);
/// assert!(Rounding::default().is_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rounding {
    /// Round towards positive infinity.
    Up,
    /// Truncate.
    #[default]
    Down,
}

impl Rounding {
    /// Returns the rounding for the counter-amount of a trade in
    /// `direction`.
    #[must_use]
    pub const fn against_trader(direction: TradeDirection) -> Self {
        match direction {
            TradeDirection::InGivenOut => Self::Up,
            TradeDirection::OutGivenIn => Self::Down,
        }
    }

    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
