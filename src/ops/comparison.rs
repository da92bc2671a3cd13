// ============================================================================
// Comparison Operations
// Scale-aware equality, ordering and predicates
// ============================================================================

use crate::domain::Money;
use crate::engine::{normalize_pair, normalize_scale};
use crate::interfaces::Calculator;
use crate::numeric::{MoneyError, MoneyResult};
use std::cmp::Ordering;

/// Fail with `CurrencyMismatch` unless both values share a currency.
pub(crate) fn ensure_same_currency<C: Calculator>(
    expected: &Money<C>,
    found: &Money<C>,
) -> MoneyResult<()> {
    if expected.currency() == found.currency() {
        Ok(())
    } else {
        Err(MoneyError::CurrencyMismatch {
            expected: expected.currency().code.clone(),
            found: found.currency().code.clone(),
        })
    }
}

/// Whether every value has the same currency (code, base and exponent).
pub fn have_same_currency<C: Calculator>(values: &[Money<C>]) -> bool {
    match values.split_first() {
        Some((first, rest)) => rest
            .iter()
            .all(|value| value.currency() == first.currency()),
        None => true,
    }
}

/// Whether every value represents the same amount once normalized.
///
/// Currencies are not checked: 5.00 USD and 5.0 EUR have the same amount.
pub fn have_same_amount<C: Calculator>(values: &[Money<C>]) -> MoneyResult<bool> {
    let calc = C::default();
    let normalized = normalize_scale(values, calc.default_rounding())?;

    Ok(match normalized.split_first() {
        Some((first, rest)) => rest
            .iter()
            .all(|value| calc.compare(value.amount(), first.amount()).is_eq()),
        None => true,
    })
}

/// Same currency and same normalized amount. Never a currency error.
///
/// # Example
/// ```
/// use exact_money::domain::{Currency, Money};
/// use exact_money::numeric::I64Calculator;
/// use exact_money::ops::equal;
///
/// let usd = Currency::new("USD", 10, 2);
/// let a = Money::<I64Calculator>::with_scale(500, usd.clone(), 2).unwrap();
/// let b = Money::<I64Calculator>::with_scale(5000, usd, 3).unwrap();
/// assert!(equal(&a, &b).unwrap());
/// ```
pub fn equal<C: Calculator>(lhs: &Money<C>, rhs: &Money<C>) -> MoneyResult<bool> {
    if lhs.currency() != rhs.currency() {
        return Ok(false);
    }
    compare(lhs, rhs).map(Ordering::is_eq)
}

/// Order two values of the same currency after normalizing their scales.
///
/// # Errors
/// `CurrencyMismatch` if the currencies differ.
pub fn compare<C: Calculator>(lhs: &Money<C>, rhs: &Money<C>) -> MoneyResult<Ordering> {
    ensure_same_currency(lhs, rhs)?;
    let (lhs, rhs) = normalize_pair(lhs, rhs)?;
    Ok(lhs.calculator().compare(lhs.amount(), rhs.amount()))
}

pub fn greater_than<C: Calculator>(lhs: &Money<C>, rhs: &Money<C>) -> MoneyResult<bool> {
    compare(lhs, rhs).map(Ordering::is_gt)
}

pub fn greater_than_or_equal<C: Calculator>(
    lhs: &Money<C>,
    rhs: &Money<C>,
) -> MoneyResult<bool> {
    compare(lhs, rhs).map(Ordering::is_ge)
}

pub fn less_than<C: Calculator>(lhs: &Money<C>, rhs: &Money<C>) -> MoneyResult<bool> {
    compare(lhs, rhs).map(Ordering::is_lt)
}

pub fn less_than_or_equal<C: Calculator>(lhs: &Money<C>, rhs: &Money<C>) -> MoneyResult<bool> {
    compare(lhs, rhs).map(Ordering::is_le)
}

/// Largest of a non-empty collection, at the collection's highest scale.
///
/// # Errors
/// - `EmptyInput` for an empty slice
/// - `CurrencyMismatch` if any currency differs from the first
pub fn maximum<C: Calculator>(values: &[Money<C>]) -> MoneyResult<Money<C>> {
    extreme(values, Ordering::Greater)
}

/// Smallest of a non-empty collection, at the collection's highest scale.
///
/// # Errors
/// - `EmptyInput` for an empty slice
/// - `CurrencyMismatch` if any currency differs from the first
pub fn minimum<C: Calculator>(values: &[Money<C>]) -> MoneyResult<Money<C>> {
    extreme(values, Ordering::Less)
}

/// First value whose amount beats every other one in direction `wanted`.
fn extreme<C: Calculator>(values: &[Money<C>], wanted: Ordering) -> MoneyResult<Money<C>> {
    let first = values.first().ok_or(MoneyError::EmptyInput)?;
    for value in values {
        ensure_same_currency(first, value)?;
    }

    let calc = first.calculator();
    let normalized = normalize_scale(values, calc.default_rounding())?;
    let best = normalized
        .into_iter()
        .reduce(|best, candidate| {
            if calc.compare(candidate.amount(), best.amount()) == wanted {
                candidate
            } else {
                best
            }
        })
        .ok_or(MoneyError::EmptyInput)?;

    Ok(best.into_owned())
}

pub fn is_zero<C: Calculator>(value: &Money<C>) -> bool {
    value.calculator().is_zero(value.amount())
}

pub fn is_positive<C: Calculator>(value: &Money<C>) -> bool {
    let calc = value.calculator();
    calc.compare(value.amount(), &calc.zero()).is_gt()
}

pub fn is_negative<C: Calculator>(value: &Money<C>) -> bool {
    value.calculator().is_negative(value.amount())
}

/// Whether the amount has a non-zero fractional (minor-unit) part.
///
/// 10.50 USD has sub-units, 10.00 USD does not.
pub fn has_sub_units<C: Calculator>(value: &Money<C>) -> MoneyResult<bool> {
    let calc = value.calculator();
    let factor = calc.power(&value.currency().base, value.scale())?;
    Ok(!calc.is_zero(&calc.modulo(value.amount(), &factor)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Currency;
    use crate::numeric::{BigIntCalculator, I64Calculator};
    use num_bigint::BigInt;

    fn usd(amount: i64) -> Money<I64Calculator> {
        Money::new(amount, Currency::new("USD", 10, 2)).unwrap()
    }

    fn usd_scaled(amount: i64, scale: i64) -> Money<I64Calculator> {
        Money::with_scale(amount, Currency::new("USD", 10, 2), scale).unwrap()
    }

    fn eur(amount: i64) -> Money<I64Calculator> {
        Money::new(amount, Currency::new("EUR", 10, 2)).unwrap()
    }

    #[test]
    fn test_greater_than() {
        assert!(!greater_than(&usd(500), &usd(800)).unwrap());
        assert!(!greater_than(&usd(500), &usd(500)).unwrap());
        assert!(greater_than(&usd(800), &usd(500)).unwrap());
    }

    #[test]
    fn test_ordering_family() {
        assert!(greater_than_or_equal(&usd(500), &usd(500)).unwrap());
        assert!(less_than(&usd(500), &usd(800)).unwrap());
        assert!(less_than_or_equal(&usd(800), &usd(800)).unwrap());
        assert!(!less_than(&usd(800), &usd(500)).unwrap());
    }

    #[test]
    fn test_comparison_normalizes_scale() {
        // 5.00 vs 4.999
        assert!(greater_than(&usd(500), &usd_scaled(4999, 3)).unwrap());
        // 5.0 vs 5.00
        assert_eq!(
            compare(&usd_scaled(50, 1), &usd(500)).unwrap(),
            Ordering::Equal
        );
    }

    #[test]
    fn test_comparison_currency_mismatch() {
        assert!(matches!(
            greater_than(&usd(500), &eur(500)),
            Err(MoneyError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_equal() {
        assert!(equal(&usd(500), &usd_scaled(5000, 3)).unwrap());
        assert!(!equal(&usd(500), &usd(501)).unwrap());
        assert!(!equal(&usd(500), &eur(500)).unwrap());
    }

    #[test]
    fn test_have_same_currency() {
        assert!(have_same_currency(&[usd(1), usd_scaled(1, 4)]));
        assert!(!have_same_currency(&[usd(1), eur(1)]));
        assert!(have_same_currency::<I64Calculator>(&[]));
    }

    #[test]
    fn test_have_same_amount() {
        assert!(have_same_amount(&[usd(500), usd_scaled(50, 1), eur(500)]).unwrap());
        assert!(!have_same_amount(&[usd(500), usd(499)]).unwrap());
    }

    #[test]
    fn test_maximum_and_minimum() {
        let values = [usd(500), usd_scaled(51, 1), usd_scaled(4999, 3)];

        let max = maximum(&values).unwrap().to_snapshot();
        assert_eq!((max.amount, max.scale), (5100, 3));

        let min = minimum(&values).unwrap().to_snapshot();
        assert_eq!((min.amount, min.scale), (4999, 3));

        assert_eq!(maximum::<I64Calculator>(&[]), Err(MoneyError::EmptyInput));
        assert!(minimum(&[usd(1), eur(1)]).is_err());
    }

    #[test]
    fn test_sign_predicates() {
        assert!(is_zero(&usd(0)));
        assert!(is_positive(&usd(1)));
        assert!(!is_positive(&usd(0)));
        assert!(is_negative(&usd(-1)));
        assert!(!is_negative(&usd(0)));
    }

    #[test]
    fn test_has_sub_units() {
        assert!(has_sub_units(&usd(1050)).unwrap());
        assert!(!has_sub_units(&usd(1000)).unwrap());
        assert!(has_sub_units(&usd(-1)).unwrap());

        let jpy = Money::<I64Calculator>::new(1050, Currency::new("JPY", 10, 0)).unwrap();
        assert!(!has_sub_units(&jpy).unwrap());
    }

    #[test]
    fn test_bigint_comparison() {
        let currency = Currency::decimal(&BigIntCalculator, "USD", 2);
        let a = Money::<BigIntCalculator>::new(BigInt::from(500), currency.clone()).unwrap();
        let b = Money::<BigIntCalculator>::new(BigInt::from(800), currency).unwrap();
        assert!(!greater_than(&a, &b).unwrap());
        assert!(less_than(&a, &b).unwrap());
    }
}
