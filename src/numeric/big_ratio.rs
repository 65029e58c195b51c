// ============================================================================
// Arbitrary-Precision Ratio
// Canonical rational over BigInt with exact float and decimal conversion
// ============================================================================

use super::errors::{RatioError, RatioResult};
use super::fixed_ratio::FixedRatio;
use super::integer::RatioInt;
use crate::expansion::{self, DigitExpansion};
use crate::float::{FloatBits, FloatFormat, Float32Bits, Float64Bits};
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{NumCast, One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Exact rational with arbitrary-precision components.
///
/// Same canonical form as [`FixedRatio`]: positive denominator, coprime
/// components, zero as `0 / 1`. No operation on this type can overflow.
///
/// # Example
/// ```
/// use exact_ratio::numeric::BigRatio;
///
/// let tenth = BigRatio::from_exact_f64(0.1)?;
/// assert_ne!(tenth, BigRatio::new(1, 10)?);
/// assert_eq!(BigRatio::from_exact_f64(0.5)?, BigRatio::new(1, 2)?);
/// # Ok::<(), exact_ratio::numeric::RatioError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigRatio {
    numerator: BigInt,
    denominator: BigInt,
}

impl BigRatio {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Canonical zero (`0 / 1`).
    #[inline]
    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    /// One (`1 / 1`).
    #[inline]
    pub fn one() -> Self {
        Self::from_integer(BigInt::one())
    }

    /// Create `numerator / denominator` in canonical form.
    ///
    /// # Errors
    /// Returns `ZeroDenominator` if `denominator` is 0.
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> RatioResult<Self> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(RatioError::ZeroDenominator);
        }
        Ok(Self::reduced(numerator.into(), denominator))
    }

    /// Create a whole number (`numerator / 1`).
    #[inline]
    pub fn from_integer(numerator: impl Into<BigInt>) -> Self {
        Self {
            numerator: numerator.into(),
            denominator: BigInt::one(),
        }
    }

    /// Create `1 / denominator`.
    ///
    /// # Errors
    /// Returns `ZeroDenominator` if `denominator` is 0.
    pub fn one_over(denominator: impl Into<BigInt>) -> RatioResult<Self> {
        Self::new(BigInt::one(), denominator)
    }

    /// Swap numerator and denominator.
    ///
    /// # Errors
    /// Returns `DivideByZero` if the ratio is zero.
    pub fn reciprocal(&self) -> RatioResult<Self> {
        if self.numerator.is_zero() {
            return Err(RatioError::DivideByZero);
        }
        Ok(Self::with_positive_denominator(
            self.denominator.clone(),
            self.numerator.clone(),
        ))
    }

    /// Reduce by the GCD and fix the sign. `denominator` must be nonzero.
    fn reduced(numerator: BigInt, denominator: BigInt) -> Self {
        if numerator.is_zero() {
            return Self::zero();
        }

        let divisor = numerator.gcd(&denominator);
        Self::with_positive_denominator(numerator / &divisor, denominator / &divisor)
    }

    #[inline]
    fn with_positive_denominator(numerator: BigInt, denominator: BigInt) -> Self {
        if denominator.is_negative() {
            Self {
                numerator: -numerator,
                denominator: -denominator,
            }
        } else {
            Self {
                numerator,
                denominator,
            }
        }
    }

    // ========================================================================
    // Exact Conversion
    // ========================================================================

    /// The exact value of an `f64`, with no rounding.
    ///
    /// Infinities are not rejected: their patterns decompose like any other
    /// and yield `±2^1024`.
    ///
    /// # Errors
    /// Returns `ArithmeticDomain` for NaN.
    #[inline]
    pub fn from_exact_f64(value: f64) -> RatioResult<Self> {
        Self::from_float_bits(Float64Bits::from_f64(value))
    }

    /// The exact value of an `f32`.
    ///
    /// # Errors
    /// Returns `ArithmeticDomain` for NaN.
    #[inline]
    pub fn from_exact_f32(value: f32) -> RatioResult<Self> {
        Self::from_float_bits(Float32Bits::from_f32(value))
    }

    /// `sign × mantissa × 2^exponent` from the normalized logical view of
    /// any supported format.
    ///
    /// # Errors
    /// Returns `ArithmeticDomain` for NaN patterns.
    pub fn from_float_bits<F: FloatFormat>(bits: FloatBits<F>) -> RatioResult<Self> {
        if bits.is_nan() {
            return Err(RatioError::ArithmeticDomain);
        }

        let (mantissa, exponent) = bits.normalized_logical_parts();
        let mut numerator = BigInt::from(mantissa);
        if bits.is_negative() {
            numerator = -numerator;
        }

        let shift = exponent.unsigned_abs() as usize;
        let ratio = match exponent.cmp(&0) {
            // Mantissa is odd, so numerator and 2^shift are already coprime
            Ordering::Less => Self {
                numerator,
                denominator: BigInt::one() << shift,
            },
            Ordering::Equal => Self::from_integer(numerator),
            Ordering::Greater => Self::from_integer(numerator << shift),
        };
        Ok(ratio)
    }

    /// Convert from rust_decimal::Decimal.
    ///
    /// Decimals are `mantissa / 10^scale`, so this is always exact.
    pub fn from_decimal(d: rust_decimal::Decimal) -> Self {
        let denominator = BigInt::from(10u32).pow(d.scale());
        Self::reduced(BigInt::from(d.mantissa()), denominator)
    }

    /// Narrow into a bounded ratio.
    ///
    /// # Errors
    /// Returns `Overflow` if either component does not fit in `T`.
    pub fn try_to_fixed<T: RatioInt>(&self) -> RatioResult<FixedRatio<T>> {
        let numerator: T =
            <T as NumCast>::from(self.numerator.clone()).ok_or(RatioError::Overflow)?;
        let denominator: T =
            <T as NumCast>::from(self.denominator.clone()).ok_or(RatioError::Overflow)?;
        FixedRatio::new(numerator, denominator)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// Always positive.
    #[inline]
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.numerator.is_positive()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.numerator.sign()
    }

    /// `-1`, `0` or `1` as a ratio.
    #[inline]
    pub fn signum(&self) -> Self {
        Self::from_integer(self.numerator.signum())
    }

    /// True when the denominator is 1.
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// The whole-number value, if the ratio is one.
    #[inline]
    pub fn to_integer(&self) -> Option<BigInt> {
        self.is_integer().then(|| self.numerator.clone())
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compare against an integer without constructing a ratio.
    #[inline]
    pub fn cmp_integer(&self, rhs: &BigInt) -> Ordering {
        self.numerator.cmp(&(rhs * &self.denominator))
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator.clone(),
        }
    }

    /// Exact division.
    ///
    /// # Errors
    /// Returns `DivideByZero` if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> RatioResult<Self> {
        if rhs.is_zero() {
            return Err(RatioError::DivideByZero);
        }
        Ok(Self::reduced(
            &self.numerator * &rhs.denominator,
            &self.denominator * &rhs.numerator,
        ))
    }

    // ========================================================================
    // Digit Expansion
    // ========================================================================

    /// Positional expansion in `base`.
    ///
    /// # Errors
    /// Returns `OutOfRange` if `base < 2`.
    #[inline]
    pub fn to_base(&self, base: u32) -> RatioResult<DigitExpansion> {
        expansion::expand(self, base)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for BigRatio {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialOrd for BigRatio {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigRatio {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.denominator == other.denominator {
            return self.numerator.cmp(&other.numerator);
        }
        let left = &self.numerator * &other.denominator;
        let right = &other.numerator * &self.denominator;
        left.cmp(&right)
    }
}

impl PartialEq<BigInt> for BigRatio {
    #[inline]
    fn eq(&self, other: &BigInt) -> bool {
        self.is_integer() && self.numerator == *other
    }
}

impl PartialOrd<BigInt> for BigRatio {
    #[inline]
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp_integer(other))
    }
}

impl From<BigInt> for BigRatio {
    #[inline]
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl<T: RatioInt> From<FixedRatio<T>> for BigRatio {
    /// Components are already canonical; only the width changes.
    fn from(ratio: FixedRatio<T>) -> Self {
        Self {
            numerator: ratio.numerator().into(),
            denominator: ratio.denominator().into(),
        }
    }
}

impl<'a> Add<&'a BigRatio> for &'a BigRatio {
    type Output = BigRatio;

    fn add(self, rhs: &'a BigRatio) -> BigRatio {
        BigRatio::reduced(
            &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl<'a> Sub<&'a BigRatio> for &'a BigRatio {
    type Output = BigRatio;

    fn sub(self, rhs: &'a BigRatio) -> BigRatio {
        BigRatio::reduced(
            &self.numerator * &rhs.denominator - &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl<'a> Mul<&'a BigRatio> for &'a BigRatio {
    type Output = BigRatio;

    fn mul(self, rhs: &'a BigRatio) -> BigRatio {
        BigRatio::reduced(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

macro_rules! forward_owned_binop {
    ($($imp:ident :: $method:ident),*) => {
        $(
            impl $imp for BigRatio {
                type Output = BigRatio;

                #[inline]
                fn $method(self, rhs: BigRatio) -> BigRatio {
                    (&self).$method(&rhs)
                }
            }
        )*
    };
}

forward_owned_binop!(Add::add, Sub::sub, Mul::mul);

impl Neg for BigRatio {
    type Output = BigRatio;

    #[inline]
    fn neg(self) -> BigRatio {
        BigRatio {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &BigRatio {
    type Output = BigRatio;

    #[inline]
    fn neg(self) -> BigRatio {
        -self.clone()
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for BigRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigRatio({})", self)
    }
}

impl fmt::Display for BigRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.numerator, self.denominator)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for BigRatio {
    type Err = RatioError;

    /// Parse `"<n>"` or `"<n> / <d>"` with decimal integers of any length.
    ///
    /// Each component is an optional sign followed by ASCII digits, the same
    /// grammar the bounded ratios accept.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |text: &str| -> RatioResult<BigInt> {
            let text = text.trim();
            let digits = text.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(text);
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(RatioError::InvalidInput);
            }
            text.parse().map_err(|_| RatioError::InvalidInput)
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
impl serde::Serialize for BigRatio {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BigRatio {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
