// ============================================================================
// Money Errors
// Error types for calculators, scale conversion and money operations
// ============================================================================

use thiserror::Error;

/// Errors that can occur while computing with monetary values.
///
/// Every variant is a precondition violation: nothing is retried or
/// corrected, the error is returned to the caller as soon as it is detected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum MoneyError {
    /// Operands carry different currencies
    #[error("currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch { expected: String, found: String },

    /// Attempted division by zero
    #[error("division by zero")]
    DivisionByZero,

    /// Negative or otherwise unusable scale
    #[error("invalid scale: {0}")]
    InvalidScale(String),

    /// Rounding mode name not recognized
    #[error("invalid rounding mode: {0:?}")]
    InvalidRoundingMode(String),

    /// Result exceeded the maximum of a fixed-width representation
    #[error("arithmetic overflow: result exceeded maximum value")]
    Overflow,

    /// Result below the minimum of a fixed-width representation
    #[error("arithmetic underflow: result below minimum value")]
    Underflow,

    /// Value cannot be represented or used by the calculator
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Allocation ratios are empty, negative or all zero
    #[error("invalid ratios: {0}")]
    InvalidRatios(String),

    /// Decimal rendering requested for a currency whose base is not 10
    #[error("currency base is not 10; decimal rendering is unavailable")]
    NonDecimalBase,

    /// Operation needs at least one monetary value
    #[error("operation requires at least one value")]
    EmptyInput,
}

/// Result type alias for calculator primitives
pub type NumericResult<T> = Result<T, MoneyError>;

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            MoneyError::Overflow.to_string(),
            "arithmetic overflow: result exceeded maximum value"
        );
        assert_eq!(MoneyError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            MoneyError::CurrencyMismatch {
                expected: "USD".to_string(),
                found: "EUR".to_string(),
            }
            .to_string(),
            "currency mismatch: expected USD, found EUR"
        );
        assert_eq!(
            MoneyError::InvalidRoundingMode("sideways".to_string()).to_string(),
            "invalid rounding mode: \"sideways\""
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(MoneyError::Overflow, MoneyError::Overflow);
        assert_ne!(MoneyError::Overflow, MoneyError::Underflow);
    }
}
