// ============================================================================
// Currency Descriptor
// ============================================================================

use crate::interfaces::Calculator;
use crate::numeric::{MoneyError, MoneyResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Caller-supplied currency data.
///
/// The crate never looks currencies up; it only compares descriptors and
/// reads `base` (the radix relating one scale step to the next) and
/// `exponent` (the default scale of new values).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Currency<A> {
    /// Currency code (e.g., "USD", "JPY")
    pub code: String,

    /// Radix between minor-unit steps, 10 for every ISO 4217 currency
    pub base: A,

    /// Default number of minor-unit digits (2 for USD, 0 for JPY)
    pub exponent: A,
}

impl<A> Currency<A> {
    pub fn new(code: impl Into<String>, base: A, exponent: A) -> Self {
        Self {
            code: code.into(),
            base,
            exponent,
        }
    }
}

impl<A: Clone + fmt::Display> Currency<A> {
    /// Base-10 currency with the given exponent, in the calculator's representation.
    ///
    /// # Example
    /// ```
    /// use exact_money::domain::Currency;
    /// use exact_money::numeric::I64Calculator;
    ///
    /// let jpy = Currency::decimal(&I64Calculator, "JPY", 0);
    /// assert_eq!(jpy.base, 10);
    /// assert_eq!(jpy.exponent, 0);
    /// ```
    pub fn decimal<C>(calc: &C, code: impl Into<String>, exponent: i64) -> Self
    where
        C: Calculator<Amount = A>,
    {
        Self::new(code, calc.from_i64(10), calc.from_i64(exponent))
    }

    /// Check the descriptor can back a monetary value.
    ///
    /// # Errors
    /// - `InvalidScale` if the exponent is negative
    /// - `InvalidInput` if the base is below 2
    pub fn validate<C>(&self, calc: &C) -> MoneyResult<()>
    where
        C: Calculator<Amount = A>,
    {
        if calc.is_negative(&self.exponent) {
            return Err(MoneyError::InvalidScale(format!(
                "currency {} has negative exponent {}",
                self.code, self.exponent
            )));
        }
        if calc.compare(&self.base, &calc.from_i64(2)).is_lt() {
            return Err(MoneyError::InvalidInput(format!(
                "currency {} has base {} (must be at least 2)",
                self.code, self.base
            )));
        }
        Ok(())
    }

    /// Whether amounts render as plain decimal digits.
    pub fn is_decimal<C>(&self, calc: &C) -> bool
    where
        C: Calculator<Amount = A>,
    {
        calc.compare(&self.base, &calc.from_i64(10)).is_eq()
    }
}

impl<A> fmt::Display for Currency<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{BigIntCalculator, I64Calculator};
    use num_bigint::BigInt;

    #[test]
    fn test_decimal_constructor() {
        let usd = Currency::decimal(&I64Calculator, "USD", 2);
        assert_eq!(usd, Currency::new("USD", 10, 2));
        assert_eq!(usd.to_string(), "USD");

        let big = Currency::decimal(&BigIntCalculator, "IQD", 3);
        assert_eq!(big.exponent, BigInt::from(3));
    }

    #[test]
    fn test_validation() {
        let calc = I64Calculator;
        assert!(Currency::new("USD", 10, 2).validate(&calc).is_ok());
        assert!(matches!(
            Currency::new("BAD", 10, -1).validate(&calc),
            Err(MoneyError::InvalidScale(_))
        ));
        assert!(matches!(
            Currency::new("BAD", 1, 2).validate(&calc),
            Err(MoneyError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_is_decimal() {
        let calc = I64Calculator;
        assert!(Currency::new("USD", 10, 2).is_decimal(&calc));
        // Malagasy ariary: 1 ariary = 5 iraimbilanja
        assert!(!Currency::new("MGA", 5, 1).is_decimal(&calc));
    }
}
