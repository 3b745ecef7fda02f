//! The four-part price of a trade.

use core::fmt;

/// Counter-amount of a trade, broken down into its components.
///
/// | Field | Meaning |
/// |-------|---------|
/// | `without_fee_or_slippage` | Amount at the pre-trade spot price |
/// | `without_fee` | Amount along the curve, including slippage |
/// | `fee` | Fee charged on the trade |
/// | `with_fee` | Amount actually exchanged |
///
/// For `calc_in_given_out` the counter-amount is paid by the trader and
/// `with_fee = without_fee + fee`; for `calc_out_given_in` it is received
/// and `with_fee = without_fee − fee`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TradeBreakdown {
    without_fee_or_slippage: f64,
    without_fee: f64,
    fee: f64,
    with_fee: f64,
}

impl TradeBreakdown {
    /// Creates a breakdown.
    #[must_use]
    pub const fn new(
        without_fee_or_slippage: f64,
        without_fee: f64,
        fee: f64,
        with_fee: f64,
    ) -> Self {
        Self {
            without_fee_or_slippage,
            without_fee,
            fee,
            with_fee,
        }
    }

    /// Returns the amount at the spot price.
    pub const fn without_fee_or_slippage(&self) -> f64 {
        self.without_fee_or_slippage
    }

    /// Returns the curve amount before fees.
    pub const fn without_fee(&self) -> f64 {
        self.without_fee
    }

    /// Returns the fee.
    pub const fn fee(&self) -> f64 {
        self.fee
    }

    /// Returns the amount exchanged.
    pub const fn with_fee(&self) -> f64 {
        self.with_fee
    }

    /// Returns the four fields in declaration order.
    #[must_use]
    pub const fn fields(&self) -> [f64; 4] {
        [
            self.without_fee_or_slippage,
            self.without_fee,
            self.fee,
            self.with_fee,
        ]
    }
}

impl fmt::Display for TradeBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TradeBreakdown(without_fee_or_slippage={}, without_fee={}, fee={}, with_fee={})",
            self.without_fee_or_slippage, self.without_fee, self.fee, self.with_fee
        )
    }
}
