// ============================================================================
// Fixed-Width Integer Calculators
// i64 and i128 backends with checked arithmetic
// ============================================================================

use super::errors::{MoneyError, NumericResult};
use crate::interfaces::Calculator;
use std::cmp::Ordering;

/// Generates a calculator over a primitive signed integer.
///
/// Every operation is checked: a result outside the primitive's range is
/// reported as `Overflow` or `Underflow`, never wrapped.
macro_rules! fixed_width_calculator {
    ($(#[$meta:meta])* $name:ident, $int:ty, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl $name {
            /// Create a new calculator.
            pub const fn new() -> Self {
                Self
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

        impl Calculator for $name {
            type Amount = $int;

            fn name(&self) -> &'static str {
                $label
            }

            #[inline]
            fn zero(&self) -> $int {
                0
            }

            #[inline]
            fn one(&self) -> $int {
                1
            }

            #[inline]
            fn from_i64(&self, value: i64) -> $int {
                <$int>::from(value)
            }

            #[inline]
            fn to_i64(&self, value: &$int) -> Option<i64> {
                i64::try_from(*value).ok()
            }

            #[inline]
            fn to_number(&self, value: &$int) -> f64 {
                *value as f64
            }

            #[inline]
            fn add(&self, augend: &$int, addend: &$int) -> NumericResult<$int> {
                augend
                    .checked_add(*addend)
                    .ok_or_else(|| Self::out_of_range(*addend < 0))
            }

            #[inline]
            fn subtract(&self, minuend: &$int, subtrahend: &$int) -> NumericResult<$int> {
                minuend
                    .checked_sub(*subtrahend)
                    .ok_or_else(|| Self::out_of_range(*subtrahend > 0))
            }

            #[inline]
            fn multiply(&self, multiplicand: &$int, multiplier: &$int) -> NumericResult<$int> {
                multiplicand
                    .checked_mul(*multiplier)
                    .ok_or_else(|| Self::out_of_range((*multiplicand < 0) != (*multiplier < 0)))
            }

            fn power(&self, base: &$int, exponent: &$int) -> NumericResult<$int> {
                if *exponent < 0 {
                    return Err(MoneyError::InvalidInput(format!(
                        "negative exponent {}",
                        exponent
                    )));
                }
                let exponent = u32::try_from(*exponent).map_err(|_| MoneyError::Overflow)?;
                base.checked_pow(exponent)
                    .ok_or_else(|| Self::out_of_range(*base < 0 && exponent % 2 == 1))
            }

            #[inline]
            fn integer_divide(&self, dividend: &$int, divisor: &$int) -> NumericResult<$int> {
                if *divisor == 0 {
                    return Err(MoneyError::DivisionByZero);
                }
                // MIN / -1 is the only overflowing case
                dividend.checked_div(*divisor).ok_or(MoneyError::Overflow)
            }

            #[inline]
            fn modulo(&self, dividend: &$int, divisor: &$int) -> NumericResult<$int> {
                if *divisor == 0 {
                    return Err(MoneyError::DivisionByZero);
                }
                Ok(dividend.wrapping_rem(*divisor))
            }

            #[inline]
            fn compare(&self, lhs: &$int, rhs: &$int) -> Ordering {
                lhs.cmp(rhs)
            }
        }
    };
}

fixed_width_calculator!(
    /// Calculator over `i64`.
    ///
    /// Covers amounts up to roughly ±9.2 × 10^18 minor units, which is
    /// enough for most ledgers at scale 2 but overflows quickly when many
    /// values are upscaled to a high common scale.
    I64Calculator,
    i64,
    "i64"
);

fixed_width_calculator!(
    /// Calculator over `i128`.
    I128Calculator,
    i128,
    "i128"
);
