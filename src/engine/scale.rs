// ============================================================================
// Scale Conversion
// Rescales a monetary value's amount between decimal scales
// ============================================================================

use super::rounding::{round_quotient, RoundingMode};
use crate::domain::Money;
use crate::interfaces::Calculator;
use crate::numeric::{MoneyError, MoneyResult};
use std::cmp::Ordering;

/// Express `value` at `new_scale`.
///
/// Upscaling multiplies the amount by `base^(new_scale - scale)` and is
/// always exact; `mode` is not consulted. Downscaling divides by
/// `base^(scale - new_scale)` through the rounding engine and may discard
/// precision, so it is not invertible.
///
/// # Errors
/// - `InvalidScale` if `new_scale` is negative
/// - Calculator errors (e.g. `Overflow` for a fixed-width amount that does
///   not fit at the higher scale)
///
/// # Example
/// ```
/// use exact_money::domain::{Currency, Money};
/// use exact_money::engine::{convert_scale, RoundingMode};
/// use exact_money::numeric::I64Calculator;
///
/// let usd = Currency::new("USD", 10, 2);
/// let price = Money::<I64Calculator>::new(4545, usd).unwrap();
///
/// let up = convert_scale(&price, &4, RoundingMode::Down).unwrap();
/// assert_eq!(up.to_snapshot().amount, 454_500);
///
/// let down = convert_scale(&price, &1, RoundingMode::HalfEven).unwrap();
/// assert_eq!(down.to_snapshot().amount, 454);
/// ```
pub fn convert_scale<C: Calculator>(
    value: &Money<C>,
    new_scale: &C::Amount,
    mode: RoundingMode,
) -> MoneyResult<Money<C>> {
    let calc = value.calculator();
    if calc.is_negative(new_scale) {
        return Err(MoneyError::InvalidScale(format!(
            "cannot convert to negative scale {new_scale}"
        )));
    }

    let base = &value.currency().base;
    let scale = value.scale();

    let amount = match calc.compare(new_scale, scale) {
        Ordering::Equal => return Ok(value.clone()),
        Ordering::Greater => {
            let factor = calc.power(base, &calc.subtract(new_scale, scale)?)?;
            calc.multiply(value.amount(), &factor)?
        }
        Ordering::Less => {
            let divisor = calc.power(base, &calc.subtract(scale, new_scale)?)?;
            let rounded = round_quotient(&calc, value.amount(), &divisor, mode)?;
            tracing::debug!(
                currency = %value.currency(),
                amount = %value.amount(),
                from = %scale,
                to = %new_scale,
                %mode,
                %rounded,
                "lossy scale conversion"
            );
            rounded
        }
    };

    Ok(value.rebuild(amount, new_scale.clone()))
}

/// [`convert_scale`] with the calculator's default rounding mode.
pub fn transform_scale<C: Calculator>(
    value: &Money<C>,
    new_scale: &C::Amount,
) -> MoneyResult<Money<C>> {
    convert_scale(value, new_scale, value.calculator().default_rounding())
}
