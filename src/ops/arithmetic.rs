// ============================================================================
// Arithmetic Operations
// add, subtract, multiply, sum and allocate over monetary values
// ============================================================================

use super::comparison::ensure_same_currency;
use crate::domain::{Money, ScaledAmount};
use crate::engine::{convert_scale, distribute, normalize_pair, normalize_scale};
use crate::interfaces::Calculator;
use crate::numeric::{MoneyError, MoneyResult};

/// Sum of two values in the same currency, at their highest scale.
///
/// # Errors
/// - `CurrencyMismatch` if the currencies differ (no implicit conversion)
/// - Calculator errors such as `Overflow`
///
/// # Example
/// ```
/// use exact_money::domain::{Currency, Money};
/// use exact_money::numeric::I64Calculator;
/// use exact_money::ops::add;
///
/// let usd = Currency::new("USD", 10, 2);
/// let a = Money::<I64Calculator>::new(500, usd.clone()).unwrap();
/// let b = Money::<I64Calculator>::with_scale(50, usd, 1).unwrap();
///
/// let total = add(&a, &b).unwrap().to_snapshot();
/// assert_eq!((total.amount, total.scale), (1000, 2));
/// ```
pub fn add<C: Calculator>(augend: &Money<C>, addend: &Money<C>) -> MoneyResult<Money<C>> {
    ensure_same_currency(augend, addend)?;
    let (lhs, rhs) = normalize_pair(augend, addend)?;
    let calc = lhs.calculator();

    let amount = calc.add(lhs.amount(), rhs.amount())?;
    Ok(lhs.rebuild(amount, lhs.scale().clone()))
}

/// Difference of two values in the same currency, at their highest scale.
///
/// # Errors
/// - `CurrencyMismatch` if the currencies differ
/// - Calculator errors such as `Underflow`
pub fn subtract<C: Calculator>(
    minuend: &Money<C>,
    subtrahend: &Money<C>,
) -> MoneyResult<Money<C>> {
    ensure_same_currency(minuend, subtrahend)?;
    let (lhs, rhs) = normalize_pair(minuend, subtrahend)?;
    let calc = lhs.calculator();

    let amount = calc.subtract(lhs.amount(), rhs.amount())?;
    Ok(lhs.rebuild(amount, lhs.scale().clone()))
}

/// Multiply a value by a (possibly scaled) factor.
///
/// The result's scale is the value's scale plus the multiplier's, so the
/// product is exact: 45.45 × 1.5 (`{15, 1}`) is 68.175 at scale 3.
///
/// # Errors
/// - `InvalidScale` if the multiplier's scale is negative
/// - `InvalidInput` if the multiplier is not integral for the calculator
/// - Calculator errors such as `Overflow`
pub fn multiply<C: Calculator>(
    multiplicand: &Money<C>,
    multiplier: &ScaledAmount<C::Amount>,
) -> MoneyResult<Money<C>> {
    let calc = multiplicand.calculator();
    let factor = calc.normalize_amount(&multiplier.amount)?;
    let multiplier_scale = calc.normalize_amount(&multiplier.scale_or_zero(&calc))?;
    if calc.is_negative(&multiplier_scale) {
        return Err(MoneyError::InvalidScale(format!(
            "multiplier scale must be non-negative, got {multiplier_scale}"
        )));
    }

    let amount = calc.multiply(multiplicand.amount(), &factor)?;
    let scale = calc.add(multiplicand.scale(), &multiplier_scale)?;
    Ok(multiplicand.rebuild(amount, scale))
}

/// Total of a non-empty collection of values in one currency.
///
/// # Errors
/// - `EmptyInput` for an empty slice
/// - `CurrencyMismatch` if any currency differs from the first
pub fn sum<C: Calculator>(values: &[Money<C>]) -> MoneyResult<Money<C>> {
    let first = values.first().ok_or(MoneyError::EmptyInput)?;
    for value in values {
        ensure_same_currency(first, value)?;
    }

    let calc = first.calculator();
    let normalized = normalize_scale(values, calc.default_rounding())?;
    let total = normalized
        .iter()
        .try_fold(calc.zero(), |total, value| calc.add(&total, value.amount()))?;

    let scale = normalized
        .first()
        .map(|value| value.scale().clone())
        .unwrap_or_else(|| calc.zero());
    Ok(first.rebuild(total, scale))
}

/// Split a value into shares proportional to `ratios`, losing nothing.
///
/// Ratios may carry a scale (`{505, 1}` is 50.5). They are brought to the
/// highest ratio scale, the value is upscaled by that many digits, and the
/// amount is distributed so that the shares always add back up to it.
///
/// # Errors
/// - `InvalidRatios` if `ratios` is empty, contains a negative ratio, or
///   has no positive ratio
/// - `InvalidScale` if a ratio scale is negative
/// - `InvalidInput` if a ratio is not integral for the calculator
///
/// # Example
/// ```
/// use exact_money::domain::{Currency, Money, ScaledAmount};
/// use exact_money::numeric::I64Calculator;
/// use exact_money::ops::allocate;
///
/// let usd = Currency::new("USD", 10, 2);
/// let bill = Money::<I64Calculator>::new(1003, usd).unwrap();
///
/// let shares = allocate(&bill, &[ScaledAmount::from(50), ScaledAmount::from(50)]).unwrap();
/// let amounts: Vec<i64> = shares.iter().map(|s| s.to_snapshot().amount).collect();
/// assert_eq!(amounts, vec![502, 501]);
/// ```
pub fn allocate<C: Calculator>(
    value: &Money<C>,
    ratios: &[ScaledAmount<C::Amount>],
) -> MoneyResult<Vec<Money<C>>> {
    let calc = value.calculator();
    if ratios.is_empty() {
        return Err(MoneyError::InvalidRatios(
            "at least one ratio is required".to_string(),
        ));
    }

    let amounts = ratios
        .iter()
        .map(|ratio| calc.normalize_amount(&ratio.amount))
        .collect::<MoneyResult<Vec<_>>>()?;
    let scales = ratios
        .iter()
        .map(|ratio| calc.normalize_amount(&ratio.scale_or_zero(&calc)))
        .collect::<MoneyResult<Vec<_>>>()?;
    if let Some(scale) = scales.iter().find(|scale| calc.is_negative(scale)) {
        return Err(MoneyError::InvalidScale(format!(
            "ratio scale must be non-negative, got {scale}"
        )));
    }
    let highest = scales
        .iter()
        .fold(calc.zero(), |highest, scale| calc.maximum(&highest, scale));

    let base = &value.currency().base;
    let weights = amounts
        .iter()
        .zip(&scales)
        .map(|(ratio, scale)| {
            let factor = calc.power(base, &calc.subtract(&highest, scale)?)?;
            calc.multiply(ratio, &factor)
        })
        .collect::<MoneyResult<Vec<_>>>()?;

    if weights.iter().any(|weight| calc.is_negative(weight)) {
        return Err(MoneyError::InvalidRatios(
            "ratios must be non-negative".to_string(),
        ));
    }
    if weights.iter().all(|weight| calc.is_zero(weight)) {
        return Err(MoneyError::InvalidRatios(
            "at least one ratio must be positive".to_string(),
        ));
    }

    let new_scale = calc.add(value.scale(), &highest)?;
    let scaled = convert_scale(value, &new_scale, calc.default_rounding())?;
    let shares = distribute(&calc, scaled.amount(), &weights)?;

    Ok(shares
        .into_iter()
        .map(|share| scaled.rebuild(share, new_scale.clone()))
        .collect())
}
