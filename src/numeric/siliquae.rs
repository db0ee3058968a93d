// ============================================================================
// Siliquae
// Exact fixed-point quantity counted in 1/1728ths of a unit
// ============================================================================

use super::errors::{CodecError, CodecResult, RangeViolation};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest units per whole unit (12³, divisible by every fraction denominator).
pub const SILIQUAE_PER_UNUM: u64 = 1728;

/// The smallest difference representable between two numerals.
pub const RES_MINIMA: f64 = 1.0 / SILIQUAE_PER_UNUM as f64;

/// Largest number we can encode.
pub const NUMERUS_MAXIMUS: f64 = 3_999_999.0 + RES_MINIMA + RES_MINIMA / 2.0;

/// Quantity in siliquae (1/1728 of a unit).
///
/// All codec arithmetic happens on this integer count; floats only appear
/// at the edges, in [`Siliquae::quantize`] and [`Siliquae::to_f64`].
///
/// # Example
/// ```
/// use roman_numerals::numeric::Siliquae;
///
/// let x = Siliquae::quantize(1.25).unwrap();
/// assert_eq!(x.raw_value(), 2160);
/// assert_eq!(x.whole_units(), 1);
/// assert_eq!(x.fraction(), 432);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct Siliquae(u64);

impl Siliquae {
    /// Nothing at all
    pub const ZERO: Self = Self(0);

    /// One whole unit
    pub const ONE: Self = Self(SILIQUAE_PER_UNUM);

    /// `NUMERUS_MAXIMUS` after quantization: 3,999,999 units and two siliquae
    pub const MAX: Self = Self(3_999_999 * SILIQUAE_PER_UNUM + 2);

    /// Largest scaled value that still rounds to `MAX`
    const MAX_SCALED: Decimal = Decimal::from_parts(400_505_999, 16, 0, false, 1);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a raw count of siliquae.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Create from a whole number of units.
    ///
    /// # Errors
    /// Returns `OutOfRange` if the result would exceed `MAX`.
    pub fn from_units(units: u64) -> CodecResult<Self> {
        units
            .checked_mul(SILIQUAE_PER_UNUM)
            .map(Self)
            .filter(|s| *s <= Self::MAX)
            .ok_or_else(|| CodecError::out_of_range(units as f64, RangeViolation::TooLarge))
    }

    /// Quantize a float to the nearest siliqua.
    ///
    /// This is the only place a float value is rounded on the way in.
    ///
    /// # Errors
    /// Returns `OutOfRange` for negative, non-finite or too large values.
    pub fn quantize(value: f64) -> CodecResult<Self> {
        check_range(value)?;
        Ok(Self((value * SILIQUAE_PER_UNUM as f64).round() as u64))
    }

    /// Quantize a float after dropping everything below one unit.
    ///
    /// # Errors
    /// Same range rules as [`Siliquae::quantize`].
    pub fn quantize_whole(value: f64) -> CodecResult<Self> {
        check_range(value)?;
        Ok(Self(value.trunc() as u64 * SILIQUAE_PER_UNUM))
    }

    /// Quantize a decimal exactly, rounding the midpoint away from zero.
    ///
    /// # Errors
    /// Same range rules as [`Siliquae::quantize`].
    pub fn from_decimal(value: Decimal) -> CodecResult<Self> {
        let as_f64 = || value.to_f64().unwrap_or(f64::INFINITY);
        if value.is_sign_negative() && !value.is_zero() {
            return Err(CodecError::out_of_range(as_f64(), RangeViolation::Negative));
        }
        let scaled = value
            .checked_mul(Decimal::from(SILIQUAE_PER_UNUM))
            .filter(|scaled| *scaled <= Self::MAX_SCALED)
            .ok_or_else(|| CodecError::out_of_range(as_f64(), RangeViolation::TooLarge))?;
        scaled
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u64()
            .map(Self)
            .ok_or_else(|| CodecError::out_of_range(as_f64(), RangeViolation::TooLarge))
    }

    /// Decimal variant of [`Siliquae::quantize_whole`].
    ///
    /// # Errors
    /// Same range rules as [`Siliquae::quantize`].
    pub fn from_decimal_whole(value: Decimal) -> CodecResult<Self> {
        Self::from_decimal(value.trunc())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw count.
    #[inline]
    pub const fn raw_value(self) -> u64 {
        self.0
    }

    /// Whole units, truncated.
    #[inline]
    pub const fn whole_units(self) -> u64 {
        self.0 / SILIQUAE_PER_UNUM
    }

    /// Siliquae left over after the whole units.
    #[inline]
    pub const fn fraction(self) -> u64 {
        self.0 % SILIQUAE_PER_UNUM
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Value in whole units as a float.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 * RES_MINIMA
    }

    /// Value in whole units as an exact decimal, rounded to 28 places.
    pub fn to_decimal(self) -> Decimal {
        Decimal::from(self.0) / Decimal::from(SILIQUAE_PER_UNUM)
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    #[inline]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    #[inline]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    #[inline]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

fn check_range(value: f64) -> CodecResult<()> {
    if !value.is_finite() {
        return Err(CodecError::out_of_range(value, RangeViolation::NotFinite));
    }
    if value > NUMERUS_MAXIMUS {
        return Err(CodecError::out_of_range(value, RangeViolation::TooLarge));
    }
    if value < 0.0 {
        return Err(CodecError::out_of_range(value, RangeViolation::Negative));
    }
    Ok(())
}

impl fmt::Display for Siliquae {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fraction() {
            0 => write!(f, "{}", self.whole_units()),
            frac => write!(f, "{} {}/{}", self.whole_units(), frac, SILIQUAE_PER_UNUM),
        }
    }
}
