//! Outcome of a pricing call.

use core::fmt;

use super::{MarketDeltas, MarketState, Quantity, TokenType, TradeBreakdown, UserDeltas};

/// Which side of the trade the caller fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TradeDirection {
    /// The caller fixed the amount received; the engine priced the input.
    InGivenOut,
    /// The caller fixed the amount supplied; the engine priced the output.
    OutGivenIn,
}

impl TradeDirection {
    /// Returns the operation name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InGivenOut => "in_given_out",
            Self::OutGivenIn => "out_given_in",
        }
    }
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A priced trade: the breakdown plus what it means for both parties.
///
/// The quantity and market state are echoed unchanged; the deltas follow
/// this table (`c` is the share price):
///
/// | Direction | Quantity unit | User base | User bonds | Market shares | Market bonds |
/// |-----------|---------------|-----------|------------|---------------|--------------|
/// | in given out | Base | `+out` | `−with_fee` | `−out/c` | `+with_fee` |
/// | in given out | Pt | `−with_fee` | `+out` | `+with_fee/c` | `−out` |
/// | out given in | Base | `−in` | `+with_fee` | `+in/c` | `−with_fee` |
/// | out given in | Pt | `+with_fee` | `−in` | `−with_fee/c` | `+in` |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TradeResult {
    direction: TradeDirection,
    quantity: Quantity,
    market_state: MarketState,
    breakdown: TradeBreakdown,
    user: UserDeltas,
    market: MarketDeltas,
}

impl TradeResult {
    /// Assembles a result, deriving both delta sets from the breakdown.
    #[must_use]
    pub fn new(
        direction: TradeDirection,
        quantity: Quantity,
        market_state: MarketState,
        breakdown: TradeBreakdown,
    ) -> Self {
        let amount = quantity.amount();
        let counter = breakdown.with_fee();
        let c = market_state.share_price();
        let (user, market) = match (direction, quantity.unit()) {
            (TradeDirection::InGivenOut, TokenType::Base) => (
                UserDeltas::new(amount, -counter),
                MarketDeltas::new(-amount / c, counter),
            ),
            (TradeDirection::InGivenOut, TokenType::Pt) => (
                UserDeltas::new(-counter, amount),
                MarketDeltas::new(counter / c, -amount),
            ),
            (TradeDirection::OutGivenIn, TokenType::Base) => (
                UserDeltas::new(-amount, counter),
                MarketDeltas::new(amount / c, -counter),
            ),
            (TradeDirection::OutGivenIn, TokenType::Pt) => (
                UserDeltas::new(counter, -amount),
                MarketDeltas::new(-counter / c, amount),
            ),
        };
        Self {
            direction,
            quantity,
            market_state,
            breakdown,
            user,
            market,
        }
    }

    /// Returns which side of the trade was fixed.
    pub const fn direction(&self) -> TradeDirection {
        self.direction
    }

    /// Returns the caller's quantity.
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Returns the unit of the priced counter-amount.
    #[must_use]
    pub const fn counter_unit(&self) -> TokenType {
        self.quantity.unit().counterpart()
    }

    /// Returns the pre-trade market state.
    pub const fn market_state(&self) -> MarketState {
        self.market_state
    }

    /// Returns the price breakdown.
    pub const fn breakdown(&self) -> TradeBreakdown {
        self.breakdown
    }

    /// Returns the trader's wallet deltas.
    pub const fn user(&self) -> UserDeltas {
        self.user
    }

    /// Returns the pool's reserve deltas.
    pub const fn market(&self) -> MarketDeltas {
        self.market
    }

    /// Returns the market state after the trade.
    #[must_use]
    pub fn post_trade_state(&self) -> MarketState {
        self.market_state.apply_deltas(&self.market)
    }
}

impl fmt::Display for TradeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TradeResult({} {} -> {} {})",
            self.direction,
            self.quantity,
            self.breakdown.with_fee(),
            self.counter_unit()
        )
    }
}
