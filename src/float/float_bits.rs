// ============================================================================
// Float Bit Decomposition
// Sign / exponent / mantissa fields and the logical mantissa×2^exponent view
// ============================================================================

use super::format::{Double, FloatFormat, Half, Single};
use crate::numeric::{RatioError, RatioResult};
use std::fmt;
use std::marker::PhantomData;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// IEEE-754 value class, derived from the raw fields alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FloatClass {
    /// Exponent field 0, mantissa field 0 (either sign)
    Zero,
    /// Exponent field 0, mantissa field nonzero
    Subnormal,
    /// Exponent field neither 0 nor all ones
    Normal,
    /// Exponent field all ones, mantissa field 0
    Infinite,
    /// Exponent field all ones, mantissa field nonzero (any payload)
    Nan,
}

/// Decomposed IEEE-754 bit pattern.
///
/// The value represented by a non-NaN pattern is exactly
/// `(-1)^sign × logical_mantissa × 2^logical_exponent`, for normal and
/// subnormal numbers alike. Infinities decompose by the same rule into
/// `2^(MAX_EXPONENT_FIELD - BIAS)`.
///
/// Decomposition is a pure bit reinterpretation; [`to_bits`](Self::to_bits)
/// reproduces the original pattern exactly, including signed zero and NaN
/// payloads.
///
/// # Example
/// ```
/// use exact_ratio::float::Float64Bits;
///
/// let bits = Float64Bits::from_f64(0.75);
/// assert_eq!(bits.normalized_logical_mantissa(), 3);
/// assert_eq!(bits.normalized_logical_exponent(), -2);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FloatBits<F: FloatFormat> {
    is_negative: bool,
    exponent_field: u32,
    mantissa_field: u64,
    format: PhantomData<F>,
}

/// Half-precision decomposition
pub type Float16Bits = FloatBits<Half>;

/// Single-precision decomposition
pub type Float32Bits = FloatBits<Single>;

/// Double-precision decomposition
pub type Float64Bits = FloatBits<Double>;

impl<F: FloatFormat> FloatBits<F> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Decompose a raw bit pattern.
    #[inline]
    pub fn from_bits(bits: F::Bits) -> Self {
        let raw = F::widen(bits);
        Self {
            is_negative: (raw >> (F::TOTAL_BITS - 1)) & 1 == 1,
            exponent_field: ((raw >> F::MANTISSA_BITS) & u64::from(F::MAX_EXPONENT_FIELD)) as u32,
            mantissa_field: raw & F::MANTISSA_MASK,
            format: PhantomData,
        }
    }

    /// Assemble from explicit fields.
    ///
    /// # Errors
    /// Returns `OutOfRange` if a field does not fit its width.
    pub fn from_fields(
        is_negative: bool,
        exponent_field: u32,
        mantissa_field: u64,
    ) -> RatioResult<Self> {
        if exponent_field > F::MAX_EXPONENT_FIELD || mantissa_field > F::MANTISSA_MASK {
            return Err(RatioError::OutOfRange);
        }

        Ok(Self {
            is_negative,
            exponent_field,
            mantissa_field,
            format: PhantomData,
        })
    }

    /// Reassemble the raw bit pattern.
    #[inline]
    pub fn to_bits(self) -> F::Bits {
        let sign = u64::from(self.is_negative) << (F::TOTAL_BITS - 1);
        let exponent = u64::from(self.exponent_field) << F::MANTISSA_BITS;
        F::narrow(sign | exponent | self.mantissa_field)
    }

    // ========================================================================
    // Raw Fields
    // ========================================================================

    /// Sign bit.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.is_negative
    }

    /// Biased exponent field.
    #[inline]
    pub const fn exponent_field(self) -> u32 {
        self.exponent_field
    }

    /// Stored mantissa field, without the implicit bit.
    #[inline]
    pub const fn mantissa_field(self) -> u64 {
        self.mantissa_field
    }

    // ========================================================================
    // Classification
    // ========================================================================

    /// Classify from the field values.
    pub fn classify(self) -> FloatClass {
        match (self.exponent_field, self.mantissa_field) {
            (0, 0) => FloatClass::Zero,
            (0, _) => FloatClass::Subnormal,
            (e, 0) if e == F::MAX_EXPONENT_FIELD => FloatClass::Infinite,
            (e, _) if e == F::MAX_EXPONENT_FIELD => FloatClass::Nan,
            _ => FloatClass::Normal,
        }
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.classify() == FloatClass::Zero
    }

    #[inline]
    pub fn is_subnormal(self) -> bool {
        self.classify() == FloatClass::Subnormal
    }

    #[inline]
    pub fn is_normal(self) -> bool {
        self.classify() == FloatClass::Normal
    }

    #[inline]
    pub fn is_infinite(self) -> bool {
        self.classify() == FloatClass::Infinite
    }

    #[inline]
    pub fn is_nan(self) -> bool {
        self.classify() == FloatClass::Nan
    }

    /// True unless the exponent field is all ones.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.exponent_field != F::MAX_EXPONENT_FIELD
    }

    // ========================================================================
    // Logical View
    // ========================================================================

    /// Mantissa field with the implicit leading one added for normal
    /// (nonzero exponent field) patterns.
    #[inline]
    pub fn logical_mantissa(self) -> u64 {
        if self.exponent_field == 0 {
            self.mantissa_field
        } else {
            self.mantissa_field | F::IMPLICIT_BIT
        }
    }

    /// Power of two paired with [`logical_mantissa`](Self::logical_mantissa).
    ///
    /// Subnormals share the exponent of the smallest normal binade, which is
    /// why a zero field is read as 1.
    #[inline]
    pub fn logical_exponent(self) -> i32 {
        let field = self.exponent_field.max(1) as i32;
        field - (F::EXPONENT_BIAS + F::MANTISSA_BITS as i32)
    }

    /// Logical mantissa with trailing zero bits removed (odd, or zero).
    #[inline]
    pub fn normalized_logical_mantissa(self) -> u64 {
        self.normalized_logical_parts().0
    }

    /// Logical exponent raised by the number of stripped bits; 0 for zero.
    #[inline]
    pub fn normalized_logical_exponent(self) -> i32 {
        self.normalized_logical_parts().1
    }

    /// `(mantissa, exponent)` with the mantissa minimal.
    pub fn normalized_logical_parts(self) -> (u64, i32) {
        let mantissa = self.logical_mantissa();
        if mantissa == 0 {
            return (0, 0);
        }

        let shift = mantissa.trailing_zeros();
        (mantissa >> shift, self.logical_exponent() + shift as i32)
    }
}

// ============================================================================
// Native Float Conversion
// ============================================================================

impl FloatBits<Single> {
    /// Decompose an `f32`.
    #[inline]
    pub fn from_f32(value: f32) -> Self {
        Self::from_bits(value.to_bits())
    }

    /// Rebuild the `f32` bit for bit.
    #[inline]
    pub fn to_f32(self) -> f32 {
        f32::from_bits(self.to_bits())
    }
}

impl FloatBits<Double> {
    /// Decompose an `f64`.
    #[inline]
    pub fn from_f64(value: f64) -> Self {
        Self::from_bits(value.to_bits())
    }

    /// Rebuild the `f64` bit for bit.
    #[inline]
    pub fn to_f64(self) -> f64 {
        f64::from_bits(self.to_bits())
    }
}

impl From<f32> for FloatBits<Single> {
    #[inline]
    fn from(value: f32) -> Self {
        Self::from_f32(value)
    }
}

impl From<f64> for FloatBits<Double> {
    #[inline]
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

// ============================================================================
// Debug
// ============================================================================

impl<F: FloatFormat> fmt::Debug for FloatBits<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FloatBits<{}>(sign={}, exponent={:#x}, mantissa={:#x}, bits={:#x})",
            F::NAME,
            if self.is_negative { '-' } else { '+' },
            self.exponent_field,
            self.mantissa_field,
            self.to_bits()
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
