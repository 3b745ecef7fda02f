//! The two tokens a yield market trades.

use core::fmt;

/// Unit of a [`Quantity`](super::Quantity).
///
/// Every market pairs a base asset (held as yield-bearing shares) with the
/// principal token (`Pt`, a bond redeemable 1:1 for base at maturity).
///
/// # Examples
///
/// ```
/// use yield_amm::domain::TokenType;
///
/// assert_eq!(TokenType::Base.counterpart(), TokenType::Pt);
/// assert_eq!(TokenType::Pt.to_string(), "pt");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// The base asset.
    Base,
    /// The principal token (bond).
    Pt,
}

impl TokenType {
    /// Returns the other token of the pair.
    #[must_use]
    pub const fn counterpart(&self) -> Self {
        match self {
            Self::Base => Self::Pt,
            Self::Pt => Self::Base,
        }
    }

    /// Returns the lowercase identifier used in logs and display.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Pt => "pt",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
