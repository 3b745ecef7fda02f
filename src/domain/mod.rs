//! Value types carried between the caller and the pricing engine.
//!
//! Every type here is an immutable `Copy` snapshot.  Constructors do not
//! validate: the pricing models decide what is tradeable, so a caller can
//! always describe the state it has.

mod market_state;
mod quantity;
mod rounding;
mod stretched_time;
mod token_type;
mod trade_breakdown;
mod trade_deltas;
mod trade_result;

pub use market_state::MarketState;
pub use quantity::{Quantity, MIN_TRADE_AMOUNT};
pub use rounding::Rounding;
pub use stretched_time::{StretchedTime, DAYS_PER_YEAR};
pub use token_type::TokenType;
pub use trade_breakdown::TradeBreakdown;
pub use trade_deltas::{MarketDeltas, UserDeltas};
pub use trade_result::{TradeDirection, TradeResult};
