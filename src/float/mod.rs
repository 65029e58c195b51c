// ============================================================================
// Float Module
// Lossless IEEE-754 bit decomposition for half, single and double precision
// ============================================================================
//
// This module provides:
// - FloatFormat: per-width layout constants (Half, Single, Double)
// - FloatBits<F>: sign / exponent-field / mantissa-field decomposition
// - Logical and normalized logical mantissa×2^exponent views
//
// Design principles:
// - Pure bit reinterpretation, no float arithmetic
// - Exact round trip of every pattern, NaN payloads included
// - Classification from field values only

mod float_bits;
mod format;

pub use float_bits::{FloatBits, FloatClass, Float16Bits, Float32Bits, Float64Bits};
pub use format::{Double, FloatFormat, Half, Single};
