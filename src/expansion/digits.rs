// ============================================================================
// Digit Sequence
// Small-vector backed list of positional digits, most significant first
// ============================================================================

use smallvec::SmallVec;
use std::fmt;
use std::ops::Deref;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Digits held inline before spilling to the heap
const INLINE_DIGITS: usize = 16;

/// Ordered digits of one part of an expansion.
///
/// Each digit is a value in `0..base`; bases above 10 are not mapped to
/// letters, so a digit is rendered as its decimal value.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct DigitSequence(SmallVec<[u32; INLINE_DIGITS]>);

impl DigitSequence {
    #[inline]
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    #[inline]
    pub fn push(&mut self, digit: u32) {
        self.0.push(digit);
    }

    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Split into `[..index]` and `[index..]`.
    pub fn split_at(mut self, index: usize) -> (Self, Self) {
        let tail = self.0.drain(index..).collect();
        (self, Self(tail))
    }

    /// Reverse in place (digits produced least significant first).
    #[inline]
    pub(crate) fn reverse(&mut self) {
        self.0.reverse();
    }
}

impl Deref for DigitSequence {
    type Target = [u32];

    #[inline]
    fn deref(&self) -> &[u32] {
        &self.0
    }
}

impl FromIterator<u32> for DigitSequence {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<&[u32]> for DigitSequence {
    fn from(digits: &[u32]) -> Self {
        Self(SmallVec::from_slice(digits))
    }
}

impl PartialEq<[u32]> for DigitSequence {
    #[inline]
    fn eq(&self, other: &[u32]) -> bool {
        self.as_slice() == other
    }
}

impl<const N: usize> PartialEq<[u32; N]> for DigitSequence {
    #[inline]
    fn eq(&self, other: &[u32; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl fmt::Debug for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Space-separated digit tokens.
impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens = self.0.iter();
        if let Some(first) = tokens.next() {
            write!(f, "{}", first)?;
            for digit in tokens {
                write!(f, " {}", digit)?;
            }
        }
        Ok(())
    }
}
