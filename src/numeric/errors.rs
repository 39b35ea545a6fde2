// ============================================================================
// Amount Errors
// Failure kinds for parsing, formatting and arithmetic on scaled amounts
// ============================================================================

use std::fmt;

/// Errors that can occur when converting or combining scaled amounts.
///
/// Every fallible operation in this crate returns one of these as a value.
/// Nothing is clamped to a default and nothing aborts the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmountError {
    /// Malformed literal: empty input, stray characters, a second decimal
    /// point, or a malformed exponent
    InvalidInput,
    /// Magnitude left the representable or configured range
    Overflow,
    /// Attempted division by zero
    DivisionByZero,
    /// Rounding strategy not supported by the operation
    UnsupportedRounding,
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::InvalidInput => {
                write!(f, "invalid input: could not parse amount")
            },
            AmountError::Overflow => write!(
                f,
                "amount out of bounds: must be between -9000000000 and 9000000000 units"
            ),
            AmountError::DivisionByZero => write!(f, "division by zero"),
            AmountError::UnsupportedRounding => {
                write!(f, "unsupported rounding strategy")
            },
        }
    }
}

impl std::error::Error for AmountError {}

/// Result type alias for amount operations
pub type AmountResult<T> = Result<T, AmountError>;
