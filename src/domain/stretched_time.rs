//! Time to maturity and the curve's time stretch.

use core::fmt;

/// Days in the market's year convention.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Time remaining until maturity, together with the time stretch that
/// flattens the curve.
///
/// The curve exponent is `τ = days / 365 / time_stretch`; it must lie in
/// `(0, 1)`, which the pricing models enforce in their input check.
///
/// # Examples
///
/// ```
/// use yield_amm::domain::StretchedTime;
///
/// let t = StretchedTime::new(182.5, 22.186877016851916);
/// assert!((t.normalized_time() - 0.5).abs() < 1e-12);
/// assert!(t.stretched_time() < 0.03);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StretchedTime {
    days: f64,
    time_stretch: f64,
}

impl StretchedTime {
    /// Creates a time remaining of `days` with the given `time_stretch`.
    #[must_use]
    pub const fn new(days: f64, time_stretch: f64) -> Self {
        Self { days, time_stretch }
    }

    /// A full term (365 days) with the given time stretch.
    #[must_use]
    pub const fn full_term(time_stretch: f64) -> Self {
        Self::new(DAYS_PER_YEAR, time_stretch)
    }

    /// Returns the days remaining.
    pub const fn days(&self) -> f64 {
        self.days
    }

    /// Returns the time stretch.
    pub const fn time_stretch(&self) -> f64 {
        self.time_stretch
    }

    /// Returns `days / 365`, the fraction of a year remaining.
    #[must_use]
    pub fn normalized_time(&self) -> f64 {
        self.days / DAYS_PER_YEAR
    }

    /// Returns `τ = days / 365 / time_stretch`.
    #[must_use]
    pub fn stretched_time(&self) -> f64 {
        self.normalized_time() / self.time_stretch
    }
}

impl fmt::Display for StretchedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StretchedTime(days={}, time_stretch={})",
            self.days, self.time_stretch
        )
    }
}
