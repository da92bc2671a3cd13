// ============================================================================
// Formatting Operations
// Decimal rendering, unit export and caller-supplied transformers
// ============================================================================

use crate::domain::{FormatOptions, Money};
use crate::engine::{convert_scale, RoundingMode};
use crate::interfaces::{Calculator, FormatContext, Transformer};
use crate::numeric::{MoneyError, MoneyResult};
use smallvec::{smallvec, SmallVec};
use std::borrow::Cow;

/// Split a value into its whole and fractional parts.
///
/// Both parts are truncated toward zero and carry the sign of the amount:
/// -45.45 USD splits into `[-45, -45]`.
pub fn to_units<C: Calculator>(value: &Money<C>) -> MoneyResult<SmallVec<[C::Amount; 2]>> {
    let calc = value.calculator();
    let factor = calc.power(&value.currency().base, value.scale())?;
    let whole = calc.integer_divide(value.amount(), &factor)?;
    let fraction = calc.modulo(value.amount(), &factor)?;
    Ok(smallvec![whole, fraction])
}

/// Exact base-10 rendering with exactly `scale` fractional places.
///
/// When `options.digits` is set, the value is first converted to that many
/// digits with `options.round` (or the calculator's default mode).
///
/// # Errors
/// - `NonDecimalBase` if the currency base is not 10
/// - `InvalidScale` if the requested digits are out of range
///
/// # Example
/// ```
/// use exact_money::domain::{Currency, FormatOptions, Money};
/// use exact_money::numeric::I64Calculator;
/// use exact_money::ops::to_decimal;
///
/// let usd = Currency::new("USD", 10, 2);
/// let price = Money::<I64Calculator>::new(-5, usd).unwrap();
/// assert_eq!(to_decimal(&price, &FormatOptions::new()).unwrap(), "-0.05");
/// ```
pub fn to_decimal<C: Calculator>(value: &Money<C>, options: &FormatOptions) -> MoneyResult<String> {
    if !value.currency().is_decimal(&value.calculator()) {
        return Err(MoneyError::NonDecimalBase);
    }
    let value = apply_digits(value, options)?;
    render_decimal(&value)
}

/// Render a value through a caller-supplied transformer.
///
/// The transformer receives the major-unit amount of the (possibly
/// rounded) value, its exact decimal string when the base is 10, and its
/// snapshot. Any base is accepted: 500 USD with no options hands the
/// transformer `5.0`.
///
/// # Errors
/// `InvalidScale` if the requested digits are out of range.
pub fn to_format<C, T>(
    value: &Money<C>,
    transformer: &T,
    options: &FormatOptions,
) -> MoneyResult<String>
where
    C: Calculator,
    T: Transformer<C::Amount> + ?Sized,
{
    let value = apply_digits(value, options)?;
    let decimal = if value.currency().is_decimal(&value.calculator()) {
        Some(render_decimal(&value)?)
    } else {
        None
    };
    let context = FormatContext {
        amount: to_unit(&value),
        decimal,
        snapshot: value.to_snapshot(),
    };
    Ok(transformer.transform(&context))
}

/// Lossy major-unit export: 45.45 USD as `45.45_f64`.
///
/// For display only. Large amounts and non-terminating bases lose precision.
pub fn to_unit<C: Calculator>(value: &Money<C>) -> f64 {
    let calc = value.calculator();
    let base = calc.to_number(&value.currency().base);
    let scale = calc.to_number(value.scale());
    calc.to_number(value.amount()) / base.powf(scale)
}

/// [`to_unit`] after rounding the value to `digits` fractional places.
pub fn to_rounded_unit<C: Calculator>(
    value: &Money<C>,
    digits: u32,
    mode: RoundingMode,
) -> MoneyResult<f64> {
    let calc = value.calculator();
    let rounded = convert_scale(value, &calc.from_i64(i64::from(digits)), mode)?;
    Ok(to_unit(&rounded))
}

/// A transformer bound to fixed options, reusable across values.
///
/// # Example
/// ```
/// use exact_money::domain::{Currency, FormatOptions, Money};
/// use exact_money::interfaces::CodeTransformer;
/// use exact_money::numeric::I64Calculator;
/// use exact_money::ops::create_formatter;
///
/// let formatter = create_formatter(CodeTransformer, FormatOptions::whole_units());
/// let usd = Currency::new("USD", 10, 2);
/// let price = Money::<I64Calculator>::new(4550, usd).unwrap();
/// assert_eq!(formatter.format(&price).unwrap(), "USD 46");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Formatter<T> {
    transformer: T,
    options: FormatOptions,
}

impl<T> Formatter<T> {
    pub fn new(transformer: T, options: FormatOptions) -> Self {
        Self {
            transformer,
            options,
        }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Render one value with the bound transformer and options.
    pub fn format<C>(&self, value: &Money<C>) -> MoneyResult<String>
    where
        C: Calculator,
        T: Transformer<C::Amount>,
    {
        to_format(value, &self.transformer, &self.options)
    }
}

pub fn create_formatter<T>(transformer: T, options: FormatOptions) -> Formatter<T> {
    Formatter::new(transformer, options)
}

/// Convert to the requested digits, borrowing when none are requested.
fn apply_digits<'a, C: Calculator>(
    value: &'a Money<C>,
    options: &FormatOptions,
) -> MoneyResult<Cow<'a, Money<C>>> {
    options.validate()?;
    let calc = value.calculator();
    match options.digits {
        Some(digits) => {
            let scale = calc.from_i64(i64::from(digits));
            let converted = convert_scale(value, &scale, options.rounding_for(&calc))?;
            Ok(Cow::Owned(converted))
        }
        None => Ok(Cow::Borrowed(value)),
    }
}

fn render_decimal<C: Calculator>(value: &Money<C>) -> MoneyResult<String> {
    let calc = value.calculator();
    let width = calc
        .to_i64(value.scale())
        .and_then(|scale| usize::try_from(scale).ok())
        .ok_or_else(|| MoneyError::InvalidScale(format!("cannot render scale {}", value.scale())))?;

    let amount = value.amount();
    if width == 0 {
        return Ok(without_signed_zero(&calc, amount).to_string());
    }

    // Split the signed amount first: |whole| < |amount| once the factor
    // is at least 2, so the minimum of a fixed-width type still renders.
    let factor = calc.power(&value.currency().base, value.scale())?;
    let whole = magnitude(&calc, &calc.integer_divide(amount, &factor)?)?;
    let fraction = magnitude(&calc, &calc.modulo(amount, &factor)?)?;
    let sign = if calc.is_negative(amount) { "-" } else { "" };

    Ok(format!("{sign}{whole}.{:0>width$}", fraction.to_string()))
}

/// Absolute value, with signed zeros rendered as plain zero.
fn magnitude<C: Calculator>(calc: &C, value: &C::Amount) -> MoneyResult<C::Amount> {
    if calc.is_zero(value) {
        Ok(calc.zero())
    } else {
        calc.absolute(value)
    }
}

/// The value itself, with a signed zero replaced by plain zero.
fn without_signed_zero<C: Calculator>(calc: &C, value: &C::Amount) -> C::Amount {
    if calc.is_zero(value) {
        calc.zero()
    } else {
        value.clone()
    }
}
