// ============================================================================
// Calculator Interface
// Defines the contract every numeric backend must supply
// ============================================================================

use crate::engine::RoundingMode;
use crate::numeric::NumericResult;
use std::cmp::Ordering;
use std::fmt;

/// Strategy interface for the numeric representation behind a monetary value.
///
/// A calculator is a stateless set of pure functions over one amount type.
/// Every algorithm in the crate (rounding, scale conversion, normalization,
/// distribution) is written against this trait only, so it behaves the same
/// whether the amount is an `i64`, a `BigInt` or a `Decimal`.
///
/// Implementations: [`I64Calculator`](crate::numeric::I64Calculator),
/// [`I128Calculator`](crate::numeric::I128Calculator),
/// [`BigIntCalculator`](crate::numeric::BigIntCalculator),
/// [`DecimalCalculator`](crate::numeric::DecimalCalculator).
///
/// # Contract
/// - `add` and `multiply` are exactly associative and commutative.
/// - Fixed-width backends report `Overflow`/`Underflow` instead of wrapping.
/// - `integer_divide` truncates toward zero and `modulo` takes the sign of
///   the dividend, so that `dividend == divisor * q + r` always holds.
///
/// # Thread Safety
/// Calculators carry no state and must be `Copy + Send + Sync`, so one
/// instance can be shared by every value and thread without synchronization.
pub trait Calculator: Copy + Default + Send + Sync + fmt::Debug + 'static {
    /// The numeric representation amounts, scales and bases are expressed in.
    type Amount: Clone + PartialEq + fmt::Debug + fmt::Display + Send + Sync + 'static;

    /// Get the calculator name for logging.
    fn name(&self) -> &'static str;

    /// The additive identity.
    fn zero(&self) -> Self::Amount;

    /// The multiplicative identity.
    fn one(&self) -> Self::Amount;

    /// Convert a machine integer into the representation.
    fn from_i64(&self, value: i64) -> Self::Amount;

    /// Convert back to a machine integer, if the value fits.
    fn to_i64(&self, value: &Self::Amount) -> Option<i64>;

    /// Best-effort lossy export, for display only.
    fn to_number(&self, value: &Self::Amount) -> f64;

    /// Exact sum.
    fn add(&self, augend: &Self::Amount, addend: &Self::Amount) -> NumericResult<Self::Amount>;

    /// Exact difference.
    fn subtract(
        &self,
        minuend: &Self::Amount,
        subtrahend: &Self::Amount,
    ) -> NumericResult<Self::Amount>;

    /// Exact product.
    fn multiply(
        &self,
        multiplicand: &Self::Amount,
        multiplier: &Self::Amount,
    ) -> NumericResult<Self::Amount>;

    /// `base` raised to a non-negative integer `exponent`.
    ///
    /// # Errors
    /// `InvalidInput` for a negative exponent.
    fn power(&self, base: &Self::Amount, exponent: &Self::Amount) -> NumericResult<Self::Amount>;

    /// Quotient truncated toward zero.
    ///
    /// # Errors
    /// `DivisionByZero` if `divisor` is zero.
    fn integer_divide(
        &self,
        dividend: &Self::Amount,
        divisor: &Self::Amount,
    ) -> NumericResult<Self::Amount>;

    /// Remainder of the truncated division (sign of the dividend).
    ///
    /// # Errors
    /// `DivisionByZero` if `divisor` is zero.
    fn modulo(&self, dividend: &Self::Amount, divisor: &Self::Amount)
        -> NumericResult<Self::Amount>;

    /// Total order over amounts.
    fn compare(&self, lhs: &Self::Amount, rhs: &Self::Amount) -> Ordering;

    /// Rounding mode used when a caller does not name one.
    fn default_rounding(&self) -> RoundingMode {
        RoundingMode::HalfEven
    }

    /// Bring an externally supplied value to its canonical integral form.
    ///
    /// Backends whose type can hold fractions reject them here with
    /// `InvalidInput`; integer backends accept every value unchanged.
    fn normalize_amount(&self, value: &Self::Amount) -> NumericResult<Self::Amount> {
        Ok(value.clone())
    }

    /// `value + 1`.
    fn increment(&self, value: &Self::Amount) -> NumericResult<Self::Amount> {
        self.add(value, &self.one())
    }

    /// `value - 1`.
    fn decrement(&self, value: &Self::Amount) -> NumericResult<Self::Amount> {
        self.subtract(value, &self.one())
    }

    /// Additive inverse.
    fn negate(&self, value: &Self::Amount) -> NumericResult<Self::Amount> {
        self.subtract(&self.zero(), value)
    }

    /// Absolute value.
    fn absolute(&self, value: &Self::Amount) -> NumericResult<Self::Amount> {
        if self.is_negative(value) {
            self.negate(value)
        } else {
            Ok(value.clone())
        }
    }

    /// Whether the value equals zero.
    fn is_zero(&self, value: &Self::Amount) -> bool {
        self.compare(value, &self.zero()) == Ordering::Equal
    }

    /// Whether the value is strictly below zero.
    fn is_negative(&self, value: &Self::Amount) -> bool {
        self.compare(value, &self.zero()) == Ordering::Less
    }

    /// The larger of two amounts (the first one on ties).
    fn maximum(&self, lhs: &Self::Amount, rhs: &Self::Amount) -> Self::Amount {
        if self.compare(rhs, lhs) == Ordering::Greater {
            rhs.clone()
        } else {
            lhs.clone()
        }
    }
}
