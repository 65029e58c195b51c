// ============================================================================
// IEEE-754 Binary Formats
// Per-width layout constants for half, single and double precision
// ============================================================================

use std::fmt;
use std::hash::Hash;

/// Layout of an IEEE-754 binary interchange format.
///
/// Implementors are zero-sized markers. All field arithmetic in
/// [`FloatBits`](super::FloatBits) is done on `u64`, so every format must
/// fit in 64 bits.
pub trait FloatFormat:
    Copy + Clone + fmt::Debug + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// Raw bit pattern type (`u16`, `u32` or `u64`)
    type Bits: Copy + fmt::Debug + fmt::LowerHex + PartialEq + Eq + Hash;

    /// Short name used in `Debug` output
    const NAME: &'static str;

    /// Total width of the encoding in bits
    const TOTAL_BITS: u32;

    /// Width of the biased exponent field
    const EXPONENT_BITS: u32;

    /// Width of the stored (trailing) mantissa field
    const MANTISSA_BITS: u32;

    /// Exponent bias
    const EXPONENT_BIAS: i32;

    /// All-ones exponent field (infinities and NaNs)
    const MAX_EXPONENT_FIELD: u32 = (1u32 << Self::EXPONENT_BITS) - 1;

    /// Mask selecting the mantissa field
    const MANTISSA_MASK: u64 = (1u64 << Self::MANTISSA_BITS) - 1;

    /// Implicit leading bit of normal numbers
    const IMPLICIT_BIT: u64 = 1u64 << Self::MANTISSA_BITS;

    /// Zero-extend a raw pattern to 64 bits.
    fn widen(bits: Self::Bits) -> u64;

    /// Truncate a 64-bit value to the raw pattern width.
    ///
    /// Callers only pass values that already fit in `TOTAL_BITS`.
    fn narrow(raw: u64) -> Self::Bits;
}

/// IEEE-754 binary16
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Half;

/// IEEE-754 binary32 (`f32`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Single;

/// IEEE-754 binary64 (`f64`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Double;

impl FloatFormat for Half {
    type Bits = u16;

    const NAME: &'static str = "Half";
    const TOTAL_BITS: u32 = 16;
    const EXPONENT_BITS: u32 = 5;
    const MANTISSA_BITS: u32 = 10;
    const EXPONENT_BIAS: i32 = 15;

    #[inline]
    fn widen(bits: u16) -> u64 {
        u64::from(bits)
    }

    #[inline]
    fn narrow(raw: u64) -> u16 {
        raw as u16
    }
}

impl FloatFormat for Single {
    type Bits = u32;

    const NAME: &'static str = "Single";
    const TOTAL_BITS: u32 = 32;
    const EXPONENT_BITS: u32 = 8;
    const MANTISSA_BITS: u32 = 23;
    const EXPONENT_BIAS: i32 = 127;

    #[inline]
    fn widen(bits: u32) -> u64 {
        u64::from(bits)
    }

    #[inline]
    fn narrow(raw: u64) -> u32 {
        raw as u32
    }
}

impl FloatFormat for Double {
    type Bits = u64;

    const NAME: &'static str = "Double";
    const TOTAL_BITS: u32 = 64;
    const EXPONENT_BITS: u32 = 11;
    const MANTISSA_BITS: u32 = 52;
    const EXPONENT_BIAS: i32 = 1023;

    #[inline]
    fn widen(bits: u64) -> u64 {
        bits
    }

    #[inline]
    fn narrow(raw: u64) -> u64 {
        raw
    }
}
