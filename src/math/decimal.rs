//! Signed fixed-point decimal used by the invariant solve.
//!
//! [`Decimal`] stores a value as an arbitrary-precision integer scaled by
//! `10^72`.  Addition and subtraction are exact; multiplication truncates
//! the 73rd fractional digit; division takes an explicit [`Rounding`].
//!
//! # Precision characteristics
//!
//! | Aspect | Value |
//! |--------|-------|
//! | Fractional digits | 72 |
//! | Integer range | unbounded |
//! | Resolution | 10⁻⁷² |
//! | Determinism | 100 % bit-for-bit |
//!
//! The engine needs 28 significant digits just to tell a 10⁻¹⁸ trade apart
//! from a 10¹⁰ reserve; the remaining digits absorb the error of the
//! logarithm/exponential series in
//! [`PrecisionContext`](super::PrecisionContext).

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use core::str::FromStr;

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{Float, Signed, Zero};

use crate::domain::Rounding;
use crate::error::{AmmError, Result};

/// Number of fractional decimal digits carried by every [`Decimal`].
pub const SCALE_DIGITS: u32 = 72;

/// Returns `10^SCALE_DIGITS`, the raw representation of `1`.
pub(crate) fn unit() -> BigInt {
    BigInt::from(10u8).pow(SCALE_DIGITS)
}

/// A signed decimal number with [`SCALE_DIGITS`] fractional digits.
///
/// # Examples
///
/// ```
/// use yield_amm::domain::Rounding;
/// use yield_amm::math::Decimal;
///
/// let two = Decimal::from_integer(2);
/// let three = Decimal::from_integer(3);
/// let Ok(q) = two.checked_div(&three, Rounding::Down) else {
///     panic!("non-zero divisor");
/// };
/// assert!((q.to_f64() - 2.0 / 3.0).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Decimal(BigInt);

impl Decimal {
    /// Returns zero.
    #[must_use]
    pub fn zero() -> Self {
        Self(BigInt::zero())
    }

    /// Returns one.
    #[must_use]
    pub fn one() -> Self {
        Self(unit())
    }

    /// Creates a decimal holding the integer `value`.
    #[must_use]
    pub fn from_integer(value: i64) -> Self {
        Self(BigInt::from(value) * unit())
    }

    pub(crate) const fn from_raw(raw: BigInt) -> Self {
        Self(raw)
    }

    pub(crate) const fn raw(&self) -> &BigInt {
        &self.0
    }

    /// Converts an `f64` exactly (down to 10⁻⁷²) into a decimal.
    ///
    /// The binary value of the float is expanded without an intermediate
    /// decimal rounding, so `0.1` becomes
    /// `0.1000000000000000055511151231257827…`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::NumericDomain`] if `value` is NaN or infinite.
    pub fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(AmmError::NumericDomain(
                "cannot represent a non-finite value",
            ));
        }
        let (mantissa, exponent, sign) = Float::integer_decode(value);
        let mut raw = BigInt::from(mantissa) * unit();
        if exponent >= 0 {
            raw <<= usize::from(exponent.unsigned_abs());
        } else {
            raw >>= usize::from(exponent.unsigned_abs());
        }
        if sign < 0 {
            raw = -raw;
        }
        Ok(Self(raw))
    }

    /// Converts to the nearest `f64`.
    ///
    /// The conversion goes through the exact decimal expansion, so it is
    /// correctly rounded.  Values beyond the `f64` range become `±inf`.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.to_string().parse::<f64>().unwrap_or(f64::NAN)
    }

    /// Divides `self` by `other`, rounding the last digit in the given
    /// direction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `other` is zero.
    pub fn checked_div(&self, other: &Self, rounding: Rounding) -> Result<Self> {
        if other.0.is_zero() {
            return Err(AmmError::DivisionByZero);
        }
        let numerator = &self.0 * unit();
        let (quotient, remainder) = numerator.div_rem(&other.0);
        // A non-zero remainder sharing the divisor's sign means the exact
        // quotient is positive and was truncated downwards.
        if rounding.is_up() && !remainder.is_zero() && remainder.sign() == other.0.sign() {
            return Ok(Self(quotient + 1u8));
        }
        Ok(Self(quotient))
    }

    /// Returns `1 / self`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `self` is zero.
    pub fn recip(&self, rounding: Rounding) -> Result<Self> {
        Self::one().checked_div(self, rounding)
    }

    /// Returns `true` if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if the value is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0.sign() == Sign::Plus
    }

    /// Returns `true` if the value is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.sign() == Sign::Minus
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }
}

macro_rules! impl_binop {
    ($imp:ident, $method:ident, |$lhs:ident, $rhs:ident| $body:expr) => {
        impl $imp<&Decimal> for &Decimal {
            type Output = Decimal;

            fn $method(self, other: &Decimal) -> Decimal {
                let $lhs = self;
                let $rhs = other;
                $body
            }
        }

        impl $imp<Decimal> for Decimal {
            type Output = Decimal;

            fn $method(self, other: Decimal) -> Decimal {
                $imp::$method(&self, &other)
            }
        }

        impl $imp<&Decimal> for Decimal {
            type Output = Decimal;

            fn $method(self, other: &Decimal) -> Decimal {
                $imp::$method(&self, other)
            }
        }

        impl $imp<Decimal> for &Decimal {
            type Output = Decimal;

            fn $method(self, other: Decimal) -> Decimal {
                $imp::$method(self, &other)
            }
        }
    };
}

impl_binop!(Add, add, |lhs, rhs| Decimal(&lhs.0 + &rhs.0));
impl_binop!(Sub, sub, |lhs, rhs| Decimal(&lhs.0 - &rhs.0));
// Truncates toward zero.
impl_binop!(Mul, mul, |lhs, rhs| Decimal((&lhs.0 * &rhs.0) / unit()));

impl Neg for Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        Decimal(-self.0)
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        Decimal(-&self.0)
    }
}

impl fmt::Display for Decimal {
    /// Writes the exact decimal expansion without trailing zeros.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (int_part, frac_part) = self.0.abs().div_rem(&unit());
        let sign = if self.is_negative() { "-" } else { "" };
        let frac = format!(
            "{:0>width$}",
            frac_part.to_string(),
            width = SCALE_DIGITS as usize
        );
        let frac = frac.trim_end_matches('0');
        if frac.is_empty() {
            write!(f, "{sign}{int_part}")
        } else {
            write!(f, "{sign}{int_part}.{frac}")
        }
    }
}

impl FromStr for Decimal {
    type Err = AmmError;

    /// Parses `[+-]digits[.digits]`; digits past the 72nd fractional place
    /// are truncated.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let (int_digits, frac_digits) = body.split_once('.').unwrap_or((body, ""));
        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(AmmError::NumericDomain("empty decimal literal"));
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_digits) || !all_digits(frac_digits) {
            return Err(AmmError::NumericDomain("malformed decimal literal"));
        }

        let mut digits = String::with_capacity(int_digits.len() + SCALE_DIGITS as usize + 1);
        digits.push_str(if int_digits.is_empty() { "0" } else { int_digits });
        digits.extend(frac_digits.chars().take(SCALE_DIGITS as usize));
        let padding = (SCALE_DIGITS as usize).saturating_sub(frac_digits.len());
        digits.extend(core::iter::repeat('0').take(padding));

        let raw = BigInt::parse_bytes(digits.as_bytes(), 10)
            .ok_or(AmmError::NumericDomain("malformed decimal literal"))?;
        Ok(Self(if negative { -raw } else { raw }))
    }
}
