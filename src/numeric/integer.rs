// ============================================================================
// Bounded Integer Support
// Widening trait and overflow-aware GCD for fixed-width ratio components
// ============================================================================

use num_bigint::BigInt;
use num_traits::{CheckedNeg, CheckedRem, NumCast, PrimInt, Signed};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// Signed integer usable as a [`FixedRatio`](super::FixedRatio) component.
///
/// `Wide` must hold the product of any two components without overflow;
/// ordering and checked arithmetic are carried out in it.
pub trait RatioInt:
    PrimInt
    + Signed
    + CheckedNeg
    + CheckedRem
    + Hash
    + fmt::Debug
    + fmt::Display
    + FromStr
    + Into<BigInt>
    + Send
    + Sync
    + 'static
{
    /// Integer type twice as wide as `Self`
    type Wide: PrimInt + Signed + CheckedNeg + CheckedRem + From<Self>;

    /// Lossless widening.
    #[inline]
    fn widen(self) -> Self::Wide {
        <Self::Wide as From<Self>>::from(self)
    }

    /// Narrowing with range check.
    #[inline]
    fn narrow(wide: Self::Wide) -> Option<Self> {
        <Self as NumCast>::from(wide)
    }
}

macro_rules! impl_ratio_int {
    ($($narrow:ty => $wide:ty),* $(,)?) => {
        $(
            impl RatioInt for $narrow {
                type Wide = $wide;
            }
        )*
    };
}

impl_ratio_int!(i8 => i16, i16 => i32, i32 => i64, i64 => i128);

/// Greatest common divisor by Euclid's algorithm.
///
/// The result is non-negative except when it is `I::MIN`, which has no
/// positive counterpart and is returned unchanged. Callers only divide by the
/// result, and `MIN / MIN == 1` either way. `MIN % -1` is taken as 0.
pub(crate) fn gcd<I>(a: I, b: I) -> I
where
    I: PrimInt + Signed + CheckedNeg + CheckedRem,
{
    let (mut a, mut b) = (a, b);
    while !b.is_zero() {
        let remainder = a.checked_rem(&b).unwrap_or_else(I::zero);
        a = b;
        b = remainder;
    }

    if a.is_negative() {
        a.checked_neg().unwrap_or(a)
    } else {
        a
    }
}
