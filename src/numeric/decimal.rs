// ============================================================================
// Decimal Calculator
// rust_decimal backend restricted to integral values
// ============================================================================

use super::errors::{MoneyError, NumericResult};
use crate::interfaces::Calculator;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// Calculator over `rust_decimal::Decimal`.
///
/// Amounts are kept integral (scale 0); the decimal point of a monetary
/// value lives in its `scale`, never in the `Decimal` itself. This backend
/// is useful when the rest of an application already speaks `Decimal`.
///
/// Range is the 96-bit mantissa of `Decimal` (about 7.9 × 10^28); results
/// beyond it are reported as `Overflow` or `Underflow`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DecimalCalculator;

impl DecimalCalculator {
    /// Create a new calculator.
    pub const fn new() -> Self {
        Self
    }

    /// Lift a `Decimal` into an amount, rejecting fractional values.
    ///
    /// The result always has scale 0: `105.0` becomes `105`.
    pub fn integral(value: Decimal) -> NumericResult<Decimal> {
        if value.fract().is_zero() {
            Ok(value.trunc().normalize())
        } else {
            Err(MoneyError::InvalidInput(format!(
                "{value} is not an integral amount"
            )))
        }
    }

    #[inline]
    fn out_of_range(negative: bool) -> MoneyError {
        if negative {
            MoneyError::Underflow
        } else {
            MoneyError::Overflow
        }
    }
}

impl Calculator for DecimalCalculator {
    type Amount = Decimal;

    fn name(&self) -> &'static str {
        "decimal"
    }

    fn zero(&self) -> Decimal {
        Decimal::ZERO
    }

    fn one(&self) -> Decimal {
        Decimal::ONE
    }

    fn from_i64(&self, value: i64) -> Decimal {
        Decimal::from(value)
    }

    fn to_i64(&self, value: &Decimal) -> Option<i64> {
        if value.fract().is_zero() {
            value.to_i64()
        } else {
            None
        }
    }

    fn to_number(&self, value: &Decimal) -> f64 {
        value.to_f64().unwrap_or(f64::NAN)
    }

    fn add(&self, augend: &Decimal, addend: &Decimal) -> NumericResult<Decimal> {
        augend
            .checked_add(*addend)
            .ok_or_else(|| Self::out_of_range(addend.is_sign_negative()))
    }

    fn subtract(&self, minuend: &Decimal, subtrahend: &Decimal) -> NumericResult<Decimal> {
        minuend
            .checked_sub(*subtrahend)
            .ok_or_else(|| Self::out_of_range(subtrahend.is_sign_positive()))
    }

    fn multiply(&self, multiplicand: &Decimal, multiplier: &Decimal) -> NumericResult<Decimal> {
        multiplicand.checked_mul(*multiplier).ok_or_else(|| {
            Self::out_of_range(multiplicand.is_sign_negative() != multiplier.is_sign_negative())
        })
    }

    fn power(&self, base: &Decimal, exponent: &Decimal) -> NumericResult<Decimal> {
        let exponent = self
            .to_i64(exponent)
            .ok_or_else(|| MoneyError::InvalidInput(format!("exponent {exponent}")))?;
        if exponent < 0 {
            return Err(MoneyError::InvalidInput(format!(
                "negative exponent {exponent}"
            )));
        }

        let mut result = Decimal::ONE;
        for _ in 0..exponent {
            result = self.multiply(&result, base)?;
        }
        Ok(result)
    }

    fn integer_divide(&self, dividend: &Decimal, divisor: &Decimal) -> NumericResult<Decimal> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        // Dividing the exact multiple keeps the quotient free of
        // Decimal's own 28-digit rounding.
        let remainder = self.modulo(dividend, divisor)?;
        let multiple = self.subtract(dividend, &remainder)?;
        multiple
            .checked_div(*divisor)
            .map(|quotient| quotient.trunc())
            .ok_or(MoneyError::Overflow)
    }

    fn modulo(&self, dividend: &Decimal, divisor: &Decimal) -> NumericResult<Decimal> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        dividend.checked_rem(*divisor).ok_or(MoneyError::Overflow)
    }

    fn compare(&self, lhs: &Decimal, rhs: &Decimal) -> Ordering {
        lhs.cmp(rhs)
    }

    fn normalize_amount(&self, value: &Decimal) -> NumericResult<Decimal> {
        Self::integral(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: i64) -> Decimal {
        Decimal::from(value)
    }

    #[test]
    fn test_integral() {
        assert_eq!(DecimalCalculator::integral(Decimal::new(500, 0)).unwrap(), dec(500));
        let lifted = DecimalCalculator::integral(Decimal::new(5000, 1)).unwrap();
        assert_eq!(lifted.scale(), 0);
        assert_eq!(lifted.to_string(), "500");
        assert_eq!(
            DecimalCalculator.normalize_amount(&Decimal::new(-1050, 1)).unwrap().to_string(),
            "-105"
        );
        assert!(matches!(
            DecimalCalculator::integral(Decimal::new(4545, 2)),
            Err(MoneyError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_arithmetic() {
        let calc = DecimalCalculator::new();
        assert_eq!(calc.add(&dec(500), &dec(500)).unwrap(), dec(1000));
        assert_eq!(calc.subtract(&dec(5), &dec(8)).unwrap(), dec(-3));
        assert_eq!(calc.multiply(&dec(-25), &dec(4)).unwrap(), dec(-100));
        assert_eq!(calc.power(&dec(10), &dec(3)).unwrap(), dec(1000));
        assert_eq!(calc.add(&Decimal::MAX, &dec(1)), Err(MoneyError::Overflow));
        assert_eq!(calc.subtract(&Decimal::MIN, &dec(1)), Err(MoneyError::Underflow));
    }

    #[test]
    fn test_division_identity() {
        let calc = DecimalCalculator;
        for (dividend, divisor) in [(7, 2), (-7, 2), (7, -2), (-7, -2), (4545, 10)] {
            let (dividend, divisor) = (dec(dividend), dec(divisor));
            let q = calc.integer_divide(&dividend, &divisor).unwrap();
            let r = calc.modulo(&dividend, &divisor).unwrap();
            assert_eq!(divisor * q + r, dividend);
            assert!(q.fract().is_zero());
        }
        assert_eq!(calc.integer_divide(&dec(-7), &dec(2)).unwrap(), dec(-3));
    }

    #[test]
    fn test_large_quotient_is_exact() {
        let calc = DecimalCalculator;
        // 28 significant digits, one below a multiple of 3
        let dividend = Decimal::from_str_exact("9999999999999999999999999998").unwrap();
        let q = calc.integer_divide(&dividend, &dec(3)).unwrap();
        let r = calc.modulo(&dividend, &dec(3)).unwrap();
        assert_eq!(r, dec(2));
        assert_eq!(q * dec(3) + r, dividend);
    }

    #[test]
    fn test_division_by_zero() {
        let calc = DecimalCalculator;
        assert_eq!(
            calc.integer_divide(&dec(1), &Decimal::ZERO),
            Err(MoneyError::DivisionByZero)
        );
    }

    #[test]
    fn test_fractional_exponent_rejected() {
        let calc = DecimalCalculator;
        assert!(matches!(
            calc.power(&dec(10), &Decimal::new(15, 1)),
            Err(MoneyError::InvalidInput(_))
        ));
    }
}
