// ============================================================================
// Fixed-Width Ratio
// Canonical rational over bounded signed integers with overflow detection
// ============================================================================

use super::errors::{RatioError, RatioResult};
use super::integer::{gcd, RatioInt};
use super::BigRatio;
use crate::expansion::DigitExpansion;
use num_traits::{CheckedAdd, CheckedMul, CheckedNeg, CheckedSub, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;

/// Exact rational with bounded integer components.
///
/// Always held in canonical form: the denominator is positive and shares no
/// factor with the numerator; zero is `0 / 1`. Every constructor enforces
/// this, so derived equality and hashing are value equality.
///
/// # Type Parameter
/// - `T`: component type (`i8`, `i16`, `i32` or `i64`). Default is `i64`.
///
/// # Example
/// ```
/// use exact_ratio::numeric::FixedRatio;
///
/// let r = FixedRatio::<i64>::new(6, -8)?;
/// assert_eq!(r.to_string(), "-3 / 4");
/// assert_eq!(r.reciprocal()?.to_string(), "-4 / 3");
/// # Ok::<(), exact_ratio::numeric::RatioError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedRatio<T: RatioInt = i64> {
    numerator: T,
    denominator: T,
}

impl<T: RatioInt> FixedRatio<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Canonical zero (`0 / 1`).
    #[inline]
    pub fn zero() -> Self {
        Self {
            numerator: T::zero(),
            denominator: T::one(),
        }
    }

    /// One (`1 / 1`).
    #[inline]
    pub fn one() -> Self {
        Self::from_integer(T::one())
    }

    /// Create `numerator / denominator` in canonical form.
    ///
    /// # Errors
    /// - `ZeroDenominator` if `denominator` is 0
    /// - `Overflow` if making the denominator positive would negate `T::MIN`
    pub fn new(numerator: T, denominator: T) -> RatioResult<Self> {
        if denominator.is_zero() {
            return Err(RatioError::ZeroDenominator);
        }
        if numerator.is_zero() {
            return Ok(Self::zero());
        }

        let divisor = gcd(numerator, denominator);
        Self::with_positive_denominator(numerator / divisor, denominator / divisor)
    }

    /// Create a whole number (`numerator / 1`).
    #[inline]
    pub fn from_integer(numerator: T) -> Self {
        Self {
            numerator,
            denominator: T::one(),
        }
    }

    /// Create `1 / denominator`.
    ///
    /// # Errors
    /// - `ZeroDenominator` if `denominator` is 0
    /// - `Overflow` if `denominator` is `T::MIN`
    pub fn one_over(denominator: T) -> RatioResult<Self> {
        if denominator.is_zero() {
            return Err(RatioError::ZeroDenominator);
        }
        Self::with_positive_denominator(T::one(), denominator)
    }

    /// Swap numerator and denominator.
    ///
    /// # Errors
    /// - `DivideByZero` if the ratio is zero
    /// - `Overflow` if the numerator is `T::MIN`
    pub fn reciprocal(self) -> RatioResult<Self> {
        if self.numerator.is_zero() {
            return Err(RatioError::DivideByZero);
        }
        Self::with_positive_denominator(self.denominator, self.numerator)
    }

    /// Flip both signs when the denominator is negative. Inputs are coprime.
    fn with_positive_denominator(numerator: T, denominator: T) -> RatioResult<Self> {
        if denominator.is_negative() {
            Ok(Self {
                numerator: numerator.checked_neg().ok_or(RatioError::Overflow)?,
                denominator: denominator.checked_neg().ok_or(RatioError::Overflow)?,
            })
        } else {
            Ok(Self {
                numerator,
                denominator,
            })
        }
    }

    /// Reduce a widened intermediate and narrow it back.
    fn from_wide(numerator: T::Wide, denominator: T::Wide) -> RatioResult<Self> {
        if denominator.is_zero() {
            return Err(RatioError::DivideByZero);
        }
        if numerator.is_zero() {
            return Ok(Self::zero());
        }

        let divisor = gcd(numerator, denominator);
        let (mut numerator, mut denominator) = (numerator / divisor, denominator / divisor);
        if denominator.is_negative() {
            numerator = numerator.checked_neg().ok_or(RatioError::Overflow)?;
            denominator = denominator.checked_neg().ok_or(RatioError::Overflow)?;
        }

        Ok(Self {
            numerator: T::narrow(numerator).ok_or(RatioError::Overflow)?,
            denominator: T::narrow(denominator).ok_or(RatioError::Overflow)?,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn numerator(self) -> T {
        self.numerator
    }

    /// Always positive.
    #[inline]
    pub fn denominator(self) -> T {
        self.denominator
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.numerator.is_zero()
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.numerator.is_positive()
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.numerator.is_negative()
    }

    /// -1, 0 or 1.
    #[inline]
    pub fn signum(self) -> T {
        self.numerator.signum()
    }

    /// True when the denominator is 1.
    #[inline]
    pub fn is_integer(self) -> bool {
        self.denominator.is_one()
    }

    /// The whole-number value, if the ratio is one.
    #[inline]
    pub fn to_integer(self) -> Option<T> {
        self.is_integer().then_some(self.numerator)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compare against a raw integer without constructing a ratio.
    #[inline]
    pub fn cmp_integer(self, rhs: T) -> Ordering {
        cross_cmp(self.numerator, self.denominator, rhs, T::one())
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked negation.
    ///
    /// # Errors
    /// Returns `Overflow` if the numerator is `T::MIN`.
    #[inline]
    pub fn checked_neg(self) -> RatioResult<Self> {
        Ok(Self {
            numerator: self.numerator.checked_neg().ok_or(RatioError::Overflow)?,
            denominator: self.denominator,
        })
    }

    /// Checked absolute value.
    ///
    /// # Errors
    /// Returns `Overflow` if the numerator is `T::MIN`.
    #[inline]
    pub fn checked_abs(self) -> RatioResult<Self> {
        if self.is_negative() {
            self.checked_neg()
        } else {
            Ok(self)
        }
    }

    /// Checked addition.
    ///
    /// Cross products are formed in `T::Wide`, so only the reduced result
    /// has to fit.
    ///
    /// # Errors
    /// Returns `Overflow` if the reduced sum is out of range.
    pub fn checked_add(self, rhs: Self) -> RatioResult<Self> {
        let (an, ad, bn, bd) = self.widened_with(rhs);
        let numerator = an
            .checked_mul(&bd)
            .zip(bn.checked_mul(&ad))
            .and_then(|(left, right)| left.checked_add(&right))
            .ok_or(RatioError::Overflow)?;
        let denominator = ad.checked_mul(&bd).ok_or(RatioError::Overflow)?;
        Self::from_wide(numerator, denominator)
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` if the reduced difference is out of range.
    pub fn checked_sub(self, rhs: Self) -> RatioResult<Self> {
        let (an, ad, bn, bd) = self.widened_with(rhs);
        let numerator = an
            .checked_mul(&bd)
            .zip(bn.checked_mul(&ad))
            .and_then(|(left, right)| left.checked_sub(&right))
            .ok_or(RatioError::Overflow)?;
        let denominator = ad.checked_mul(&bd).ok_or(RatioError::Overflow)?;
        Self::from_wide(numerator, denominator)
    }

    /// Checked multiplication.
    ///
    /// # Errors
    /// Returns `Overflow` if the reduced product is out of range.
    pub fn checked_mul(self, rhs: Self) -> RatioResult<Self> {
        let (an, ad, bn, bd) = self.widened_with(rhs);
        let numerator = an.checked_mul(&bn).ok_or(RatioError::Overflow)?;
        let denominator = ad.checked_mul(&bd).ok_or(RatioError::Overflow)?;
        Self::from_wide(numerator, denominator)
    }

    /// Checked division.
    ///
    /// # Errors
    /// - `DivideByZero` if `rhs` is zero
    /// - `Overflow` if the reduced quotient is out of range
    pub fn checked_div(self, rhs: Self) -> RatioResult<Self> {
        if rhs.is_zero() {
            return Err(RatioError::DivideByZero);
        }
        let (an, ad, bn, bd) = self.widened_with(rhs);
        let numerator = an.checked_mul(&bd).ok_or(RatioError::Overflow)?;
        let denominator = ad.checked_mul(&bn).ok_or(RatioError::Overflow)?;
        Self::from_wide(numerator, denominator)
    }

    #[inline]
    fn widened_with(self, rhs: Self) -> (T::Wide, T::Wide, T::Wide, T::Wide) {
        (
            self.numerator.widen(),
            self.denominator.widen(),
            rhs.numerator.widen(),
            rhs.denominator.widen(),
        )
    }

    // ========================================================================
    // Digit Expansion
    // ========================================================================

    /// Positional expansion in `base`.
    ///
    /// # Errors
    /// Returns `OutOfRange` if `base < 2`.
    pub fn to_base(self, base: u32) -> RatioResult<DigitExpansion> {
        BigRatio::from(self).to_base(base)
    }
}

/// Compare `an / ad` with `bn / bd` (positive denominators) by cross
/// multiplication in the widened type.
#[inline]
fn cross_cmp<T: RatioInt>(an: T, ad: T, bn: T, bd: T) -> Ordering {
    let left = an.widen() * bd.widen();
    let right = bn.widen() * ad.widen();
    left.cmp(&right)
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<T: RatioInt> Default for FixedRatio<T> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: RatioInt> PartialOrd for FixedRatio<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: RatioInt> Ord for FixedRatio<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        cross_cmp(
            self.numerator,
            self.denominator,
            other.numerator,
            other.denominator,
        )
    }
}

impl<T: RatioInt> PartialEq<T> for FixedRatio<T> {
    #[inline]
    fn eq(&self, other: &T) -> bool {
        self.is_integer() && self.numerator == *other
    }
}

impl<T: RatioInt> PartialOrd<T> for FixedRatio<T> {
    #[inline]
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        Some(self.cmp_integer(*other))
    }
}

impl<T: RatioInt> From<T> for FixedRatio<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::from_integer(value)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<T: RatioInt> fmt::Debug for FixedRatio<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedRatio<{}>({})", std::any::type_name::<T>(), self)
    }
}

impl<T: RatioInt> fmt::Display for FixedRatio<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.numerator, self.denominator)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl<T: RatioInt> std::str::FromStr for FixedRatio<T> {
    type Err = RatioError;

    /// Parse `"<n>"` or `"<n> / <d>"`.
    ///
    /// # Examples
    /// - "7" -> 7 / 1
    /// - "6 / -8" -> -3 / 4
    /// - "1/3" -> 1 / 3
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |text: &str| -> RatioResult<T> {
            text.trim().parse().map_err(|_| RatioError::InvalidInput)
        };

        match s.split_once('/') {
            Some((numerator, denominator)) => Self::new(parse(numerator)?, parse(denominator)?),
            None => Ok(Self::from_integer(parse(s)?)),
        }
    }
}

// ============================================================================
// Serialization
// ============================================================================

#[cfg(feature = "serde")]
impl<T: RatioInt> serde::Serialize for FixedRatio<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: RatioInt> serde::Deserialize<'de> for FixedRatio<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Type Aliases for Common Use Cases
// ============================================================================

/// Ratio of 8-bit integers
pub type Ratio8 = FixedRatio<i8>;

/// Ratio of 16-bit integers
pub type Ratio16 = FixedRatio<i16>;

/// Ratio of 32-bit integers
pub type Ratio32 = FixedRatio<i32>;

/// Ratio of 64-bit integers
pub type Ratio64 = FixedRatio<i64>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    type R64 = FixedRatio<i64>;

    fn r(n: i64, d: i64) -> R64 {
        R64::new(n, d).unwrap()
    }

    #[test]
    fn test_new_reduces() {
        let x = r(6, 8);
        assert_eq!(x.numerator(), 3);
        assert_eq!(x.denominator(), 4);

        let y = r(-10, 4);
        assert_eq!((y.numerator(), y.denominator()), (-5, 2));
    }

    #[test]
    fn test_new_normalizes_sign() {
        assert_eq!(r(3, -4), r(-3, 4));
        assert_eq!(r(-3, -4), r(3, 4));
        assert!(r(3, -4).denominator() > 0);
    }

    #[test]
    fn test_zero_is_canonical() {
        for d in [1, -1, 7, -100, i64::MAX, i64::MIN] {
            let zero = r(0, d);
            assert_eq!(zero, R64::zero());
            assert_eq!(zero.denominator(), 1);
            assert_eq!(zero.to_string(), "0 / 1");
        }
        assert_eq!(R64::default(), R64::zero());
    }

    #[test]
    fn test_zero_denominator() {
        assert_eq!(R64::new(1, 0), Err(RatioError::ZeroDenominator));
        assert_eq!(R64::new(0, 0), Err(RatioError::ZeroDenominator));
        assert_eq!(R64::one_over(0), Err(RatioError::ZeroDenominator));
    }

    #[test]
    fn test_overflow_on_minimum_negation() {
        assert_eq!(R64::new(1, i64::MIN), Err(RatioError::Overflow));
        assert_eq!(R64::new(i64::MIN, -1), Err(RatioError::Overflow));
        assert_eq!(R64::new(i64::MIN, -3), Err(RatioError::Overflow));
        assert_eq!(R64::one_over(i64::MIN), Err(RatioError::Overflow));

        // Reduction first makes these representable
        assert_eq!(r(2, i64::MIN), r(-1, 1 << 62));
        assert_eq!(r(i64::MIN, i64::MIN), R64::one());
        assert_eq!(r(i64::MIN, 2).numerator(), -(1 << 62));
    }

    #[test]
    fn test_one_over() {
        assert_eq!(R64::one_over(4).unwrap(), r(1, 4));
        assert_eq!(R64::one_over(-4).unwrap(), r(-1, 4));
        assert_eq!(R64::one_over(1).unwrap(), R64::one());
    }

    #[test]
    fn test_reciprocal() {
        assert_eq!(r(3, 4).reciprocal().unwrap(), r(4, 3));
        assert_eq!(r(-3, 4).reciprocal().unwrap(), r(-4, 3));
        assert_eq!(R64::from_integer(5).reciprocal().unwrap(), r(1, 5));
        assert_eq!(R64::zero().reciprocal(), Err(RatioError::DivideByZero));
        assert_eq!(
            R64::from_integer(i64::MIN).reciprocal(),
            Err(RatioError::Overflow)
        );
        assert_eq!(
            R64::from_integer(i64::MAX).reciprocal().unwrap(),
            r(1, i64::MAX)
        );
    }

    #[test]
    fn test_comparison() {
        assert!(r(1, 3) < r(1, 2));
        assert!(r(-1, 2) < r(-1, 3));
        assert!(r(2, 4) == r(1, 2));
        assert_eq!(r(7, 3).cmp(&r(14, 6)), Ordering::Equal);
        assert_eq!(r(1, 2).max(r(2, 3)), r(2, 3));
    }

    #[test]
    fn test_comparison_near_extremes() {
        let big = r(i64::MAX, i64::MAX - 1);
        let bigger = r(i64::MAX - 1, i64::MAX - 2);
        assert!(big < bigger);

        let most_negative = R64::from_integer(i64::MIN);
        let almost = r(i64::MIN + 1, 1);
        assert!(most_negative < almost);
        assert!(R64::from_integer(i64::MAX) > r(i64::MAX - 1, 1));
        assert!(r(1, i64::MAX) > R64::zero());
        assert!(r(-1, i64::MAX) < R64::zero());
    }

    #[test]
    fn test_compare_with_integer() {
        let x = r(7, 2);
        assert_eq!(x.cmp_integer(3), Ordering::Greater);
        assert_eq!(x.cmp_integer(4), Ordering::Less);
        assert!(x > 3i64);
        assert!(x < 4i64);
        assert!(r(8, 2) == 4i64);
        assert!(r(7, 2) != 3i64);
        assert_eq!(R64::from_integer(i64::MIN).cmp_integer(i64::MIN), Ordering::Equal);
        assert_eq!(r(1, 2).cmp_integer(i64::MIN), Ordering::Greater);
    }

    #[test]
    fn test_integer_test() {
        assert_eq!(r(10, 5).to_integer(), Some(2));
        assert_eq!(r(10, 4).to_integer(), None);
        assert!(R64::zero().is_integer());
        assert_eq!(R64::zero().to_integer(), Some(0));
    }

    #[test]
    fn test_checked_arithmetic() {
        assert_eq!(r(1, 2).checked_add(r(1, 3)).unwrap(), r(5, 6));
        assert_eq!(r(1, 2).checked_sub(r(1, 2)).unwrap(), R64::zero());
        assert_eq!(r(2, 3).checked_mul(r(9, 4)).unwrap(), r(3, 2));
        assert_eq!(r(2, 3).checked_div(r(-4, 9)).unwrap(), r(-3, 2));
        assert_eq!(r(1, 2).checked_div(R64::zero()), Err(RatioError::DivideByZero));
        assert_eq!(r(-1, 2).checked_abs().unwrap(), r(1, 2));
        assert_eq!(r(1, 2).checked_neg().unwrap(), r(-1, 2));
    }

    #[test]
    fn test_checked_arithmetic_overflow() {
        let max = R64::from_integer(i64::MAX);
        assert_eq!(max.checked_add(R64::one()), Err(RatioError::Overflow));
        assert_eq!(max.checked_mul(max), Err(RatioError::Overflow));
        assert_eq!(
            R64::from_integer(i64::MIN).checked_neg(),
            Err(RatioError::Overflow)
        );
        assert_eq!(r(1, i64::MAX).checked_mul(r(1, 2)), Err(RatioError::Overflow));

        // Intermediate exceeds i64, reduced result does not
        let min = R64::from_integer(i64::MIN);
        assert_eq!(min.checked_div(min).unwrap(), R64::one());
        assert_eq!(max.checked_mul(r(1, i64::MAX)).unwrap(), R64::one());
    }

    #[test]
    fn test_display_and_debug() {
        assert_eq!(r(-3, 4).to_string(), "-3 / 4");
        assert_eq!(R64::from_integer(12).to_string(), "12 / 1");
        assert_eq!(format!("{:?}", r(1, 2)), "FixedRatio<i64>(1 / 2)");
    }

    #[test]
    fn test_from_str() {
        let x: R64 = "6 / -8".parse().unwrap();
        assert_eq!(x, r(-3, 4));
        let y: R64 = "1/3".parse().unwrap();
        assert_eq!(y, r(1, 3));
        let z: R64 = " 42 ".parse().unwrap();
        assert_eq!(z, R64::from_integer(42));
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!("abc".parse::<R64>(), Err(RatioError::InvalidInput));
        assert_eq!("1 / x".parse::<R64>(), Err(RatioError::InvalidInput));
        assert_eq!("1 / 0".parse::<R64>(), Err(RatioError::ZeroDenominator));
        assert_eq!("300 / 1".parse::<Ratio8>(), Err(RatioError::InvalidInput));
    }

    #[test]
    fn test_narrow_widths_exhaustive_i8() {
        for n in i8::MIN..=i8::MAX {
            for d in i8::MIN..=i8::MAX {
                match Ratio8::new(n, d) {
                    Ok(x) => {
                        assert!(x.denominator() > 0);
                        assert_eq!(gcd(x.numerator(), x.denominator()), 1);
                        assert_eq!(
                            (x.numerator() as i16) * (d as i16),
                            (n as i16) * (x.denominator() as i16)
                        );
                    },
                    Err(RatioError::ZeroDenominator) => assert_eq!(d, 0),
                    Err(RatioError::Overflow) => {
                        let g = gcd(n as i16, d as i16);
                        let (reduced_n, reduced_d) = (n as i16 / g, d as i16 / g);
                        assert!(reduced_d < 0);
                        assert!(reduced_n == -128 || reduced_d == -128);
                    },
                    Err(other) => panic!("unexpected error {other:?}"),
                }
            }
        }
    }

    #[test]
    fn test_to_base() {
        let expansion = r(1, 3).to_base(10).unwrap();
        assert!(expansion.whole().is_empty());
        assert_eq!(expansion.repeating(), &[3]);
        assert_eq!(r(1, 2).to_base(1), Err(RatioError::OutOfRange));
    }
}
