// ============================================================================
// Numeric Errors
// Error types for checked summation
// ============================================================================

use std::fmt;

/// Errors that can occur while accumulating numbers on the checked path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Running sum exceeded the largest representable value
    Overflow,
    /// Running sum fell below the smallest representable value
    Underflow,
    /// An input value was not a finite number
    InvalidInput,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: sum exceeded maximum value")
            },
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: sum below minimum value")
            },
            NumericError::InvalidInput => write!(f, "invalid input: value is not finite"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for checked numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
