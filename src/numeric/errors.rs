// ============================================================================
// Ratio Errors
// Error types for exact rational construction, conversion and expansion
// ============================================================================

use std::fmt;

/// Errors that can occur while building, converting or expanding ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatioError {
    /// Constructed with a zero denominator
    ZeroDenominator,
    /// Reciprocal of (or division by) a zero-valued ratio
    DivideByZero,
    /// Result is not representable in the bounded integer width
    Overflow,
    /// NaN passed to an exact float conversion
    ArithmeticDomain,
    /// Argument outside its accepted range (digit base, float field width)
    OutOfRange,
    /// Input string could not be parsed as a ratio
    InvalidInput,
}

impl fmt::Display for RatioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatioError::ZeroDenominator => write!(f, "ratio denominator is zero"),
            RatioError::DivideByZero => write!(f, "division by zero"),
            RatioError::Overflow => {
                write!(f, "arithmetic overflow: result not representable in integer width")
            },
            RatioError::ArithmeticDomain => {
                write!(f, "arithmetic domain error: NaN has no exact rational value")
            },
            RatioError::OutOfRange => write!(f, "argument out of range"),
            RatioError::InvalidInput => write!(f, "invalid input: could not parse ratio"),
        }
    }
}

impl std::error::Error for RatioError {}

/// Result type alias for ratio operations
pub type RatioResult<T> = Result<T, RatioError>;
