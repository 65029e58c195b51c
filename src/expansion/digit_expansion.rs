// ============================================================================
// Digit Expansion
// Base-N whole / terminating / repeating decomposition by long division
// ============================================================================

use super::config::{ExpansionConfig, DEFAULT_RADIX_MARKER};
use super::digits::DigitSequence;
use super::tracker::{BoundedTracker, MapTracker, RemainderTracker, TrackerStrategy};
use crate::numeric::{BigRatio, RatioResult};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use std::fmt;
use std::fmt::Write as _;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Positional expansion of a rational in some base.
///
/// The value is `whole . terminating (repeating)(repeating)...`; an empty
/// `repeating` part means the expansion is exact. The sign is kept apart from
/// the digits, which always describe the magnitude.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DigitExpansion {
    is_negative: bool,
    whole: DigitSequence,
    terminating: DigitSequence,
    repeating: DigitSequence,
}

impl DigitExpansion {
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.is_negative
    }

    /// Integer-part digits, most significant first; empty for zero.
    #[inline]
    pub fn whole(&self) -> &[u32] {
        self.whole.as_slice()
    }

    /// Fractional digits before the cycle.
    #[inline]
    pub fn terminating(&self) -> &[u32] {
        self.terminating.as_slice()
    }

    /// Fractional digits repeated forever.
    #[inline]
    pub fn repeating(&self) -> &[u32] {
        self.repeating.as_slice()
    }

    /// True when the magnitude has finitely many fractional digits.
    #[inline]
    pub fn is_terminating(&self) -> bool {
        self.repeating.is_empty()
    }

    /// Length of the repeating cycle (0 if terminating).
    #[inline]
    pub fn period(&self) -> usize {
        self.repeating.len()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.whole.is_empty() && self.terminating.is_empty() && self.repeating.is_empty()
    }

    /// Consume into `(is_negative, whole, terminating, repeating)`.
    pub fn into_parts(self) -> (bool, DigitSequence, DigitSequence, DigitSequence) {
        (self.is_negative, self.whole, self.terminating, self.repeating)
    }

    /// Render with a custom radix marker.
    ///
    /// Tokens are separated by single spaces; the repeating digits are
    /// wrapped in `[` `]`. An empty whole part contributes no token:
    /// - 723/70 -> "1 0 . 3 [ 2 8 5 7 1 4 ]"
    /// - 1/3 -> ". [ 3 ]"
    /// - -1/2 -> "-. 5"
    /// - 0 -> ""
    pub fn render_with(&self, radix_marker: &str) -> String {
        Rendered {
            expansion: self,
            radix_marker,
        }
        .to_string()
    }
}

impl fmt::Display for DigitExpansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Rendered {
            expansion: self,
            radix_marker: DEFAULT_RADIX_MARKER,
        }
        .fmt(f)
    }
}

/// Token rendering of an expansion with a given radix marker.
struct Rendered<'a> {
    expansion: &'a DigitExpansion,
    radix_marker: &'a str,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let DigitExpansion {
            is_negative,
            whole,
            terminating,
            repeating,
        } = self.expansion;

        if *is_negative && !self.expansion.is_zero() {
            f.write_char('-')?;
        }
        write!(f, "{}", whole)?;

        if terminating.is_empty() && repeating.is_empty() {
            return Ok(());
        }

        if !whole.is_empty() {
            f.write_char(' ')?;
        }
        f.write_str(self.radix_marker)?;
        if !terminating.is_empty() {
            write!(f, " {}", terminating)?;
        }
        if !repeating.is_empty() {
            write!(f, " [ {} ]", repeating)?;
        }
        Ok(())
    }
}

// ============================================================================
// Expander
// ============================================================================

/// Runs digit expansions with a validated [`ExpansionConfig`].
///
/// # Example
/// ```
/// use exact_ratio::expansion::{ExpansionConfig, Expander};
/// use exact_ratio::numeric::BigRatio;
///
/// let expander = Expander::new(ExpansionConfig::decimal())?;
/// let seventh = BigRatio::new(1, 7)?;
/// assert_eq!(expander.render(&seventh), ". [ 1 4 2 8 5 7 ]");
/// # Ok::<(), exact_ratio::numeric::RatioError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Expander {
    config: ExpansionConfig,
}

impl Expander {
    /// # Errors
    /// Returns the error from [`ExpansionConfig::validate`].
    pub fn new(config: ExpansionConfig) -> RatioResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &ExpansionConfig {
        &self.config
    }

    /// Expand `ratio` in the configured base.
    ///
    /// Terminates after at most `denominator` division steps: every
    /// remainder lies in `0..denominator`, so the loop either reaches zero or
    /// meets a remainder it has already seen.
    pub fn expand(&self, ratio: &BigRatio) -> DigitExpansion {
        let base = BigUint::from(self.config.base);
        let is_negative = ratio.is_negative();
        let numerator = ratio.numerator().magnitude();
        let denominator = ratio.denominator().magnitude();

        if denominator.is_one() {
            let whole = whole_digits(numerator.clone(), &base);
            tracing::trace!(
                base = self.config.base,
                whole = whole.len(),
                "whole-number expansion"
            );
            return DigitExpansion {
                is_negative,
                whole,
                terminating: DigitSequence::new(),
                repeating: DigitSequence::new(),
            };
        }

        let (quotient, remainder) = numerator.div_rem(denominator);
        let whole = whole_digits(quotient, &base);
        let (terminating, repeating) = self.fractional_digits(remainder, denominator, &base);

        tracing::trace!(
            base = self.config.base,
            whole = whole.len(),
            terminating = terminating.len(),
            period = repeating.len(),
            "fractional expansion"
        );

        DigitExpansion {
            is_negative,
            whole,
            terminating,
            repeating,
        }
    }

    /// Expand and render with the configured radix marker.
    pub fn render(&self, ratio: &BigRatio) -> String {
        self.expand(ratio).render_with(&self.config.radix_marker)
    }

    fn fractional_digits(
        &self,
        remainder: BigUint,
        denominator: &BigUint,
        base: &BigUint,
    ) -> (DigitSequence, DigitSequence) {
        let bounded = match self.config.tracker {
            TrackerStrategy::Map => None,
            TrackerStrategy::Auto | TrackerStrategy::Bounded => {
                BoundedTracker::for_denominator(denominator)
            },
        };

        tracing::debug!(
            strategy = ?self.config.tracker,
            tracker = if bounded.is_some() { "bounded" } else { "map" },
            denominator_bits = denominator.bits(),
            "remainder tracker resolved"
        );

        match bounded {
            Some(mut tracker) => long_division(remainder, denominator, base, &mut tracker),
            None => long_division(remainder, denominator, base, &mut MapTracker::default()),
        }
    }
}

/// Expand `ratio` in `base`.
///
/// # Errors
/// Returns `OutOfRange` if `base < 2`.
pub fn expand(ratio: &BigRatio, base: u32) -> RatioResult<DigitExpansion> {
    Ok(Expander::new(ExpansionConfig::new(base))?.expand(ratio))
}

// ============================================================================
// Long Division
// ============================================================================

/// Fractional digits of `remainder / denominator` split into
/// `(terminating, repeating)`.
///
/// A remainder recorded at index `k` produces the digit at position `k`, so
/// meeting it again means digits `k..` repeat.
fn long_division<R: RemainderTracker>(
    mut remainder: BigUint,
    denominator: &BigUint,
    base: &BigUint,
    tracker: &mut R,
) -> (DigitSequence, DigitSequence) {
    let mut digits = DigitSequence::new();
    if remainder.is_zero() {
        return (digits, DigitSequence::new());
    }

    tracker.record(&remainder, 0);
    let mut index = 1;
    loop {
        remainder *= base;
        let (digit, next) = remainder.div_rem(denominator);
        digits.push(digit_value(&digit));
        remainder = next;

        if remainder.is_zero() {
            return (digits, DigitSequence::new());
        }
        if let Some(start) = tracker.record(&remainder, index) {
            return digits.split_at(start);
        }
        index += 1;
    }
}

/// Digits of `value`, most significant first; empty for zero.
fn whole_digits(mut value: BigUint, base: &BigUint) -> DigitSequence {
    let mut digits = DigitSequence::new();
    while !value.is_zero() {
        let (quotient, digit) = value.div_rem(base);
        digits.push(digit_value(&digit));
        value = quotient;
    }
    digits.reverse();
    digits
}

/// A digit is below the base, so it lives in the lowest 32-bit limb.
#[inline]
fn digit_value(digit: &BigUint) -> u32 {
    digit.iter_u32_digits().next().unwrap_or(0)
}

// ============================================================================
// Tests
// ============================================================================
