// ============================================================================
// Numeric Errors
// Error types for decimal rounding and transcendental operations
// ============================================================================

use std::fmt;

/// Errors that can occur during decimal arithmetic, rounding, or function
/// evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Value does not fit the requested target representation
    Overflow,
    /// Attempted division by zero or reciprocal of zero
    DivisionByZero,
    /// Rounding was required but the mode forbids losing information
    PrecisionLoss,
    /// Input string or value is invalid
    InvalidInput,
    /// Argument of the wrong kind or combination
    InvalidArgument(&'static str),
    /// Value sits exactly on a mean boundary and the mode has no tie-break
    UnresolvedTie,
    /// Mean-based boundary presented with candidates of opposite sign
    SignMismatch,
    /// Zero sits strictly between candidates and the zero policy forbids choosing
    AmbiguousZero,
    /// Residue set for remainder rounding is empty
    EmptyResidueSet,
    /// Modulus for remainder rounding is smaller than two
    ModulusTooSmall,
    /// Requested precision exceeds the configured maximum
    PrecisionOverflow { requested: u64, max: u32 },
    /// Argument outside the mathematical domain of the function
    Domain(&'static str),
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "overflow: value does not fit the target representation")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: rounding is necessary but mode is UNNECESSARY"
            ),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::InvalidArgument(what) => write!(f, "invalid argument: {}", what),
            NumericError::UnresolvedTie => {
                write!(f, "value lies on the rounding boundary and the mode has no tie-break")
            },
            NumericError::SignMismatch => write!(
                f,
                "mean-based rounding requires both candidates to share a sign"
            ),
            NumericError::AmbiguousZero => write!(
                f,
                "zero lies between candidates and zero rounding is UNNECESSARY"
            ),
            NumericError::EmptyResidueSet => write!(f, "set of allowed remainders is empty"),
            NumericError::ModulusTooSmall => write!(f, "modulus must be at least 2"),
            NumericError::PrecisionOverflow { requested, max } => write!(
                f,
                "precision overflow: requested {} digits, maximum is {}",
                requested, max
            ),
            NumericError::Domain(what) => write!(f, "domain error: {}", what),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            NumericError::PrecisionOverflow {
                requested: 2000,
                max: 1000
            }
            .to_string(),
            "precision overflow: requested 2000 digits, maximum is 1000"
        );
        assert_eq!(
            NumericError::Domain("logarithm of non-positive value").to_string(),
            "domain error: logarithm of non-positive value"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::SignMismatch, NumericError::SignMismatch);
        assert_ne!(NumericError::UnresolvedTie, NumericError::AmbiguousZero);
    }
}
