//! Natural logarithm, exponential and real power on [`Decimal`].
//!
//! All three functions work on the raw scaled integers and stop their
//! series as soon as the next term truncates to zero, so the result is
//! accurate to a few units in the 72nd fractional digit.
//!
//! | Function | Range reduction | Series |
//! |----------|-----------------|--------|
//! | `ln(x)` | `x = m · 2^e`, `m ∈ (1/2, 2)` | `2 · atanh((m − 1)/(m + 1))` |
//! | `exp(x)` | `x = n · ln 2 + r`, `|r| < ln 2` | Taylor in `r` |
//! | `pow(b, a)` | `exp(a · ln b)` | n/a |

use num_bigint::{BigInt, Sign};
use num_traits::{ToPrimitive, Zero};

use super::decimal::{unit, Decimal};
use crate::error::{AmmError, Result};

/// Largest power-of-two shift [`PrecisionContext::exp`] performs.
///
/// Bounds the result to roughly `2^8192`; anything larger is an overflow,
/// anything smaller than `2^-8192` underflows to zero.
const MAX_EXP_SHIFT: i64 = 8_192;

/// Working state for high-precision transcendental functions.
///
/// A context is created at the start of each pricing call and dropped at
/// its end; it holds the precomputed `ln 2` so the constant is evaluated
/// once per solve rather than once per logarithm.  Contexts are never
/// shared between calls.
///
/// # Examples
///
/// ```
/// use yield_amm::math::{Decimal, PrecisionContext};
///
/// let ctx = PrecisionContext::new();
/// let two = Decimal::from_integer(2);
/// let half = "0.5".parse::<Decimal>().expect("valid literal");
/// let root = ctx.pow(&two, &half).expect("positive base");
/// assert!((root.to_f64() - 2f64.sqrt()).abs() < 1e-15);
/// ```
#[derive(Debug, Clone)]
pub struct PrecisionContext {
    unit: BigInt,
    ln2: BigInt,
}

impl PrecisionContext {
    /// Creates a context, computing `ln 2 = 2 · atanh(1/3)`.
    #[must_use]
    pub fn new() -> Self {
        let unit = unit();
        let third = &unit / 3u8;
        let ln2 = atanh_raw(&third, &unit) * 2u8;
        Self { unit, ln2 }
    }

    /// Returns `ln 2` at full precision.
    #[must_use]
    pub fn ln2(&self) -> Decimal {
        Decimal::from_raw(self.ln2.clone())
    }

    /// Natural logarithm.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::NumericDomain`] if `x ≤ 0`.
    pub fn ln(&self, x: &Decimal) -> Result<Decimal> {
        let raw = x.raw();
        if raw.sign() != Sign::Plus {
            return Err(AmmError::NumericDomain(
                "logarithm of a non-positive value",
            ));
        }

        // Normalise to m ∈ (1/2, 2) so the atanh argument stays below 1/3.
        let shift = bit_length(raw) - bit_length(&self.unit);
        let mantissa = if shift >= 0 {
            raw >> shift.unsigned_abs() as usize
        } else {
            raw << shift.unsigned_abs() as usize
        };
        let s = ((&mantissa - &self.unit) * &self.unit) / (&mantissa + &self.unit);
        let ln_mantissa = atanh_raw(&s, &self.unit) * 2u8;

        Ok(Decimal::from_raw(&self.ln2 * shift + ln_mantissa))
    }

    /// Exponential function.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result would exceed
    /// `2^8192`.
    pub fn exp(&self, x: &Decimal) -> Result<Decimal> {
        let raw = x.raw();
        let n = match (raw / &self.ln2).to_i64() {
            Some(n) if n > MAX_EXP_SHIFT => {
                return Err(AmmError::Overflow("exponential argument too large"))
            }
            Some(n) if n < -MAX_EXP_SHIFT => return Ok(Decimal::zero()),
            Some(n) => n,
            None if raw.sign() == Sign::Minus => return Ok(Decimal::zero()),
            None => return Err(AmmError::Overflow("exponential argument too large")),
        };
        let r = raw - &self.ln2 * n;

        let mut acc = self.unit.clone();
        let mut term = self.unit.clone();
        let mut k: u32 = 1;
        loop {
            term = (&term * &r) / &self.unit / k;
            if term.is_zero() {
                break;
            }
            acc += &term;
            k += 1;
        }

        let scaled = if n >= 0 {
            acc << n.unsigned_abs() as usize
        } else {
            acc >> n.unsigned_abs() as usize
        };
        Ok(Decimal::from_raw(scaled))
    }

    /// Real power `base^exponent`, evaluated as `exp(exponent · ln base)`.
    ///
    /// `0^a` is `0` for positive `a`; `b^0` is `1` for positive `b`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::NumericDomain`] if `base < 0`, or `base = 0` with a
    ///   non-positive exponent.
    /// - [`AmmError::Overflow`] if the result is too large.
    pub fn pow(&self, base: &Decimal, exponent: &Decimal) -> Result<Decimal> {
        if base.is_negative() {
            return Err(AmmError::NumericDomain(
                "fractional power of a negative value",
            ));
        }
        if base.is_zero() {
            if exponent.is_positive() {
                return Ok(Decimal::zero());
            }
            return Err(AmmError::NumericDomain(
                "zero raised to a non-positive power",
            ));
        }
        if exponent.is_zero() {
            return Ok(Decimal::one());
        }
        let ln_base = self.ln(base)?;
        self.exp(&(exponent * &ln_base))
    }
}

impl Default for PrecisionContext {
    fn default() -> Self {
        Self::new()
    }
}

fn bit_length(value: &BigInt) -> i64 {
    i64::try_from(value.bits()).unwrap_or(i64::MAX)
}

/// `atanh(s) = s + s³/3 + s⁵/5 + …` on raw scaled integers, `|s| < 1`.
fn atanh_raw(s: &BigInt, unit: &BigInt) -> BigInt {
    let s_squared = (s * s) / unit;
    let mut power = s.clone();
    let mut acc = s.clone();
    let mut k: u32 = 1;
    loop {
        power = (&power * &s_squared) / unit;
        let term = &power / (2 * k + 1);
        if term.is_zero() {
            break;
        }
        acc += term;
        k += 1;
    }
    acc
}
