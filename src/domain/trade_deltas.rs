//! Balance changes implied by a priced trade.

/// Change to the trader's wallet.
///
/// Positive values are received by the trader, negative values are paid.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UserDeltas {
    d_base: f64,
    d_bonds: f64,
}

impl UserDeltas {
    /// Creates wallet deltas.
    #[must_use]
    pub const fn new(d_base: f64, d_bonds: f64) -> Self {
        Self { d_base, d_bonds }
    }

    /// Returns the base delta.
    pub const fn d_base(&self) -> f64 {
        self.d_base
    }

    /// Returns the bond delta.
    pub const fn d_bonds(&self) -> f64 {
        self.d_bonds
    }
}

/// Change to the pool's reserves.
///
/// Share reserves are expressed in shares, i.e. base divided by the current
/// share price.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MarketDeltas {
    d_share_reserves: f64,
    d_bond_reserves: f64,
}

impl MarketDeltas {
    /// Creates reserve deltas.
    #[must_use]
    pub const fn new(d_share_reserves: f64, d_bond_reserves: f64) -> Self {
        Self {
            d_share_reserves,
            d_bond_reserves,
        }
    }

    /// Returns the share reserve delta.
    pub const fn d_share_reserves(&self) -> f64 {
        self.d_share_reserves
    }

    /// Returns the bond reserve delta.
    pub const fn d_bond_reserves(&self) -> f64 {
        self.d_bond_reserves
    }
}
