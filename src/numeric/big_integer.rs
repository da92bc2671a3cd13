// ============================================================================
// Arbitrary-Precision Calculator
// BigInt backend that never overflows
// ============================================================================

use super::errors::{MoneyError, NumericResult};
use crate::interfaces::Calculator;
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::cmp::Ordering;

/// Calculator over `num_bigint::BigInt`.
///
/// Amounts grow as needed, so upscaling a large collection to a high common
/// scale is always exact. The only failing primitives are division by zero
/// and exponents that do not fit in a `u32`.
///
/// # Example
/// ```
/// use exact_money::interfaces::Calculator;
/// use exact_money::numeric::BigIntCalculator;
/// use num_bigint::BigInt;
///
/// let calc = BigIntCalculator;
/// let factor = calc.power(&BigInt::from(10), &BigInt::from(30)).unwrap();
/// assert_eq!(factor.to_string(), format!("1{}", "0".repeat(30)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BigIntCalculator;

impl BigIntCalculator {
    /// Create a new calculator.
    pub const fn new() -> Self {
        Self
    }
}

impl Calculator for BigIntCalculator {
    type Amount = BigInt;

    fn name(&self) -> &'static str {
        "bigint"
    }

    fn zero(&self) -> BigInt {
        BigInt::zero()
    }

    fn one(&self) -> BigInt {
        BigInt::one()
    }

    fn from_i64(&self, value: i64) -> BigInt {
        BigInt::from(value)
    }

    fn to_i64(&self, value: &BigInt) -> Option<i64> {
        value.to_i64()
    }

    fn to_number(&self, value: &BigInt) -> f64 {
        value.to_f64().unwrap_or(f64::NAN)
    }

    fn add(&self, augend: &BigInt, addend: &BigInt) -> NumericResult<BigInt> {
        Ok(augend + addend)
    }

    fn subtract(&self, minuend: &BigInt, subtrahend: &BigInt) -> NumericResult<BigInt> {
        Ok(minuend - subtrahend)
    }

    fn multiply(&self, multiplicand: &BigInt, multiplier: &BigInt) -> NumericResult<BigInt> {
        Ok(multiplicand * multiplier)
    }

    fn power(&self, base: &BigInt, exponent: &BigInt) -> NumericResult<BigInt> {
        if exponent.is_negative() {
            return Err(MoneyError::InvalidInput(format!(
                "negative exponent {exponent}"
            )));
        }
        let exponent = exponent.to_u32().ok_or(MoneyError::Overflow)?;
        Ok(base.pow(exponent))
    }

    fn integer_divide(&self, dividend: &BigInt, divisor: &BigInt) -> NumericResult<BigInt> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        // BigInt division truncates toward zero
        Ok(dividend / divisor)
    }

    fn modulo(&self, dividend: &BigInt, divisor: &BigInt) -> NumericResult<BigInt> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(dividend % divisor)
    }

    fn compare(&self, lhs: &BigInt, rhs: &BigInt) -> Ordering {
        lhs.cmp(rhs)
    }

    fn negate(&self, value: &BigInt) -> NumericResult<BigInt> {
        Ok(-value)
    }

    fn absolute(&self, value: &BigInt) -> NumericResult<BigInt> {
        Ok(value.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(value: i64) -> BigInt {
        BigInt::from(value)
    }

    #[test]
    fn test_never_overflows() {
        let calc = BigIntCalculator::new();
        let max = big(i64::MAX);
        let sum = calc.add(&max, &max).unwrap();
        assert_eq!(sum.to_string(), "18446744073709551614");
        assert_eq!(calc.to_i64(&sum), None);

        let product = calc.multiply(&max, &max).unwrap();
        assert_eq!(
            calc.integer_divide(&product, &max).unwrap(),
            max,
        );
    }

    #[test]
    fn test_division_identity() {
        let calc = BigIntCalculator;
        for (dividend, divisor) in [(7, 2), (-7, 2), (7, -2), (-7, -2)] {
            let (dividend, divisor) = (big(dividend), big(divisor));
            let q = calc.integer_divide(&dividend, &divisor).unwrap();
            let r = calc.modulo(&dividend, &divisor).unwrap();
            assert_eq!(&divisor * &q + &r, dividend);
        }
        assert_eq!(calc.integer_divide(&big(-7), &big(2)).unwrap(), big(-3));
        assert_eq!(calc.modulo(&big(-7), &big(2)).unwrap(), big(-1));
    }

    #[test]
    fn test_division_by_zero() {
        let calc = BigIntCalculator;
        assert_eq!(
            calc.integer_divide(&big(1), &big(0)),
            Err(MoneyError::DivisionByZero)
        );
        assert_eq!(calc.modulo(&big(1), &big(0)), Err(MoneyError::DivisionByZero));
    }

    #[test]
    fn test_power() {
        let calc = BigIntCalculator;
        assert_eq!(calc.power(&big(10), &big(3)).unwrap(), big(1000));
        assert!(matches!(
            calc.power(&big(10), &big(-3)),
            Err(MoneyError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_sign_helpers() {
        let calc = BigIntCalculator;
        assert_eq!(calc.negate(&big(5)).unwrap(), big(-5));
        assert_eq!(calc.absolute(&big(-5)).unwrap(), big(5));
        assert_eq!(calc.decrement(&big(0)).unwrap(), big(-1));
        assert_eq!(calc.to_number(&big(-250)), -250.0);
    }
}
