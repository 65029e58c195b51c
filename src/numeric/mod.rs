// ============================================================================
// Numeric Module
// Exact rational arithmetic over bounded and arbitrary-precision integers
// ============================================================================
//
// This module provides:
// - FixedRatio<T>: canonical rational over i8/i16/i32/i64 components
// - BigRatio: canonical rational over BigInt, exact float/decimal conversion
// - RatioError: error types for construction and conversion
// - Ratio8..Ratio64 type aliases for common widths
//
// Design principles:
// - Canonical form enforced by every constructor (positive denominator, GCD 1)
// - All fallible operations return Result (no panics)
// - Bounded comparisons and arithmetic go through a widened integer type
// - No floating-point arithmetic; floats are decomposed bit for bit

mod big_ratio;
mod errors;
mod fixed_ratio;
mod integer;

pub use big_ratio::BigRatio;
pub use errors::{RatioError, RatioResult};
pub use fixed_ratio::{FixedRatio, Ratio16, Ratio32, Ratio64, Ratio8};
pub use integer::RatioInt;
