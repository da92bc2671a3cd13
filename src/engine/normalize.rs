// ============================================================================
// Scale Normalizer
// Brings a collection of monetary values to their highest common scale
// ============================================================================

use super::rounding::RoundingMode;
use super::scale::convert_scale;
use crate::domain::Money;
use crate::interfaces::Calculator;
use crate::numeric::MoneyResult;
use std::borrow::Cow;

/// Highest scale in `values`, or zero for an empty slice.
///
/// A single pass folding with `Calculator::maximum`; scales are
/// non-negative, so starting from zero never changes the result.
pub fn highest_scale<C: Calculator>(values: &[Money<C>]) -> C::Amount {
    let calc = C::default();
    values
        .iter()
        .fold(calc.zero(), |highest, value| calc.maximum(&highest, value.scale()))
}

/// Rescale every value up to the highest scale among `values`.
///
/// Values already at that scale come back borrowed, untouched; the others
/// are converted (upscaling is exact, so `mode` only matters if a caller
/// bypassed the constructors' invariants). Empty input yields an empty
/// vector and a single value is returned as-is.
///
/// Every operation combining or comparing several values goes through here
/// first: amounts at different scales are not comparable.
///
/// # Example
/// ```
/// use exact_money::domain::{Currency, Money};
/// use exact_money::engine::{normalize_scale, RoundingMode};
/// use exact_money::numeric::I64Calculator;
/// use std::borrow::Cow;
///
/// let usd = Currency::new("USD", 10, 2);
/// let a = Money::<I64Calculator>::with_scale(500, usd.clone(), 2).unwrap();
/// let b = Money::<I64Calculator>::with_scale(50, usd, 1).unwrap();
///
/// let values = [a, b];
/// let normalized = normalize_scale(&values, RoundingMode::HalfEven).unwrap();
/// assert!(matches!(normalized[0], Cow::Borrowed(_)));
/// assert_eq!(normalized[1].to_snapshot().amount, 500);
/// ```
pub fn normalize_scale<C: Calculator>(
    values: &[Money<C>],
    mode: RoundingMode,
) -> MoneyResult<Vec<Cow<'_, Money<C>>>> {
    let calc = C::default();
    let target = highest_scale(values);

    values
        .iter()
        .map(|value| {
            if calc.compare(value.scale(), &target).is_eq() {
                Ok(Cow::Borrowed(value))
            } else {
                tracing::trace!(
                    currency = %value.currency(),
                    from = %value.scale(),
                    to = %target,
                    "normalizing scale"
                );
                convert_scale(value, &target, mode).map(Cow::Owned)
            }
        })
        .collect()
}

/// [`normalize_scale`] for exactly two values.
pub fn normalize_pair<'a, C: Calculator>(
    lhs: &'a Money<C>,
    rhs: &'a Money<C>,
) -> MoneyResult<(Cow<'a, Money<C>>, Cow<'a, Money<C>>)> {
    let calc = lhs.calculator();
    let mode = calc.default_rounding();

    match calc.compare(lhs.scale(), rhs.scale()) {
        std::cmp::Ordering::Equal => Ok((Cow::Borrowed(lhs), Cow::Borrowed(rhs))),
        std::cmp::Ordering::Greater => Ok((
            Cow::Borrowed(lhs),
            Cow::Owned(convert_scale(rhs, lhs.scale(), mode)?),
        )),
        std::cmp::Ordering::Less => Ok((
            Cow::Owned(convert_scale(lhs, rhs.scale(), mode)?),
            Cow::Borrowed(rhs),
        )),
    }
}
