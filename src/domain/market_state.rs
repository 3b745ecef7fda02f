//! Snapshot of a market's reserves, prices and fees.

use core::fmt;

use super::MarketDeltas;

/// Pool state supplied by the caller on every pricing call.
///
/// | Field | Symbol | Meaning |
/// |-------|--------|---------|
/// | `share_reserves` | `z` | Yield-bearing shares held by the pool |
/// | `bond_reserves` | `y` | Bonds held by the pool |
/// | `share_price` | `c` | Current base value of one share |
/// | `init_share_price` | `μ` | Share price when the pool opened |
/// | `trade_fee_percent` | `φ` | Fee on the curve part of a trade |
/// | `redemption_fee_percent` | | Fee on the flat (matured) part |
///
/// The state is a plain snapshot: construction does not validate, and the
/// engine never mutates it.  [`apply_deltas`](Self::apply_deltas) returns
/// the post-trade snapshot.
///
/// # Examples
///
/// ```
/// use yield_amm::domain::{MarketDeltas, MarketState};
///
/// let state = MarketState::new(100_000.0, 100_000.0, 1.0, 1.0, 0.1, 0.1);
/// let next = state.apply_deltas(&MarketDeltas::new(97.8, -100.0));
/// assert!((next.bond_reserves() - 99_900.0).abs() < 1e-9);
/// assert!((state.bond_reserves() - 100_000.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketState {
    share_reserves: f64,
    bond_reserves: f64,
    share_price: f64,
    init_share_price: f64,
    trade_fee_percent: f64,
    redemption_fee_percent: f64,
}

impl MarketState {
    /// Creates a market snapshot.
    #[must_use]
    pub const fn new(
        share_reserves: f64,
        bond_reserves: f64,
        share_price: f64,
        init_share_price: f64,
        trade_fee_percent: f64,
        redemption_fee_percent: f64,
    ) -> Self {
        Self {
            share_reserves,
            bond_reserves,
            share_price,
            init_share_price,
            trade_fee_percent,
            redemption_fee_percent,
        }
    }

    /// Returns the share reserves `z`.
    pub const fn share_reserves(&self) -> f64 {
        self.share_reserves
    }

    /// Returns the bond reserves `y`.
    pub const fn bond_reserves(&self) -> f64 {
        self.bond_reserves
    }

    /// Returns the share price `c`.
    pub const fn share_price(&self) -> f64 {
        self.share_price
    }

    /// Returns the initial share price `μ`.
    pub const fn init_share_price(&self) -> f64 {
        self.init_share_price
    }

    /// Returns the trade fee percent `φ`.
    pub const fn trade_fee_percent(&self) -> f64 {
        self.trade_fee_percent
    }

    /// Returns the redemption fee percent.
    pub const fn redemption_fee_percent(&self) -> f64 {
        self.redemption_fee_percent
    }

    /// Returns the base value of the share reserves, `c·z`.
    #[must_use]
    pub fn base_reserves(&self) -> f64 {
        self.share_price * self.share_reserves
    }

    /// Returns the snapshot with the given reserve deltas applied.
    #[must_use]
    pub fn apply_deltas(&self, deltas: &MarketDeltas) -> Self {
        Self {
            share_reserves: self.share_reserves + deltas.d_share_reserves(),
            bond_reserves: self.bond_reserves + deltas.d_bond_reserves(),
            ..*self
        }
    }
}

impl fmt::Display for MarketState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MarketState(z={}, y={}, c={}, mu={}, fee={}, redemption_fee={})",
            self.share_reserves,
            self.bond_reserves,
            self.share_price,
            self.init_share_price,
            self.trade_fee_percent,
            self.redemption_fee_percent
        )
    }
}
