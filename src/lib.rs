// ============================================================================
// Exact Ratio Library
// Exact rationals, IEEE-754 bit decomposition and base-N digit expansion
// ============================================================================

//! # Exact Ratio
//!
//! Exact rational arithmetic with a strict canonical form, plus the float
//! machinery needed to turn binary floating-point values into rationals
//! without rounding.
//!
//! ## Features
//!
//! - **Bounded rationals** (`FixedRatio<i8..i64>`) with overflow detection
//! - **Arbitrary-precision rationals** (`BigRatio`) that never overflow
//! - **Bit-exact float decomposition** for half, single and double precision
//! - **Exact float conversion**: `0.1` becomes the value binary64 really holds
//! - **Base-N digit expansion** with repeating-cycle detection
//!
//! ## Example
//!
//! ```rust
//! use exact_ratio::prelude::*;
//!
//! // Canonical form is enforced on construction
//! let r = FixedRatio::<i64>::new(723, 70)?;
//! assert_eq!(r.to_string(), "723 / 70");
//!
//! // 723/70 = 10.3(285714)
//! let digits = r.to_base(10)?;
//! assert_eq!(digits.whole(), &[1, 0]);
//! assert_eq!(digits.terminating(), &[3]);
//! assert_eq!(digits.repeating(), &[2, 8, 5, 7, 1, 4]);
//! assert_eq!(digits.to_string(), "1 0 . 3 [ 2 8 5 7 1 4 ]");
//!
//! // Floats convert exactly
//! let half = BigRatio::from_exact_f64(0.5)?;
//! assert_eq!(half, BigRatio::new(1, 2)?);
//! # Ok::<(), RatioError>(())
//! ```

pub mod expansion;
pub mod float;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::expansion::{
        expand, DigitExpansion, DigitSequence, ExpansionConfig, Expander, TrackerStrategy,
    };
    pub use crate::float::{
        Double, FloatBits, FloatClass, FloatFormat, Float16Bits, Float32Bits, Float64Bits, Half,
        Single,
    };
    pub use crate::numeric::{
        BigRatio, FixedRatio, RatioError, RatioInt, RatioResult, Ratio16, Ratio32, Ratio64, Ratio8,
    };
}
