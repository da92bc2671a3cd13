// ============================================================================
// Money Domain Model
// Immutable monetary value bound to a calculator
// ============================================================================

use super::Currency;
use crate::interfaces::Calculator;
use crate::numeric::{MoneyError, MoneyResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Plain-data view of a monetary value.
///
/// This is the stable in-memory wire shape: formatters, serializers and the
/// per-operation wrappers read values through it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot<A> {
    /// Integer amount in units of `base^-scale`
    pub amount: A,

    /// Currency descriptor
    pub currency: Currency<A>,

    /// Number of minor-unit digits the amount is expressed in
    pub scale: A,
}

/// An integer amount with an optional scale, e.g. 50.5 as `{ 505, 1 }`.
///
/// Used as a multiplier and as an allocation ratio. A missing scale is 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScaledAmount<A> {
    pub amount: A,
    pub scale: Option<A>,
}

impl<A: Clone> ScaledAmount<A> {
    pub fn new(amount: A, scale: A) -> Self {
        Self {
            amount,
            scale: Some(scale),
        }
    }

    /// The scale, or zero when none was given.
    pub fn scale_or_zero<C>(&self, calc: &C) -> A
    where
        C: Calculator<Amount = A>,
    {
        self.scale.clone().unwrap_or_else(|| calc.zero())
    }
}

impl<A> From<A> for ScaledAmount<A> {
    fn from(amount: A) -> Self {
        Self {
            amount,
            scale: None,
        }
    }
}

/// Immutable monetary value.
///
/// Pairs an integer `amount` with a [`Currency`] and a `scale`, all in the
/// representation of the calculator `C` the value is bound to. Values are
/// never mutated: every operation returns a new `Money`.
///
/// Equality (`==`) is structural. `500` at scale 2 and `5000` at scale 3
/// are different values here but [`equal`](crate::ops::equal) after
/// normalization.
///
/// # Example
/// ```
/// use exact_money::domain::{Currency, Money};
/// use exact_money::numeric::I64Calculator;
///
/// let usd = Currency::new("USD", 10, 2);
/// let price = Money::<I64Calculator>::new(500, usd).unwrap();
///
/// let snapshot = price.to_snapshot();
/// assert_eq!(snapshot.amount, 500);
/// assert_eq!(snapshot.scale, 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Money<C: Calculator> {
    amount: C::Amount,
    currency: Currency<C::Amount>,
    scale: C::Amount,
    calculator: C,
}

impl<C: Calculator> Money<C> {
    /// Create a value at the currency's default scale (its exponent).
    ///
    /// # Errors
    /// `InvalidScale`/`InvalidInput` if the currency descriptor is unusable.
    pub fn new(amount: C::Amount, currency: Currency<C::Amount>) -> MoneyResult<Self> {
        let scale = currency.exponent.clone();
        Self::with_calculator(C::default(), amount, currency, scale)
    }

    /// Create a value at an explicit scale.
    ///
    /// # Errors
    /// `InvalidScale` if `scale` is negative.
    pub fn with_scale(
        amount: C::Amount,
        currency: Currency<C::Amount>,
        scale: C::Amount,
    ) -> MoneyResult<Self> {
        Self::with_calculator(C::default(), amount, currency, scale)
    }

    /// Create a value bound to a specific calculator instance.
    ///
    /// Amount, scale, base and exponent are brought to the calculator's
    /// integral form first.
    ///
    /// # Errors
    /// - `InvalidInput` if any of them is not integral (e.g. a `Decimal` 45.45)
    /// - `InvalidScale` if `scale` is negative
    pub fn with_calculator(
        calculator: C,
        amount: C::Amount,
        currency: Currency<C::Amount>,
        scale: C::Amount,
    ) -> MoneyResult<Self> {
        let amount = calculator.normalize_amount(&amount)?;
        let scale = calculator.normalize_amount(&scale)?;
        let currency = Currency::new(
            currency.code,
            calculator.normalize_amount(&currency.base)?,
            calculator.normalize_amount(&currency.exponent)?,
        );
        currency.validate(&calculator)?;
        if calculator.is_negative(&scale) {
            return Err(MoneyError::InvalidScale(format!(
                "scale must be non-negative, got {scale}"
            )));
        }

        Ok(Self {
            amount,
            currency,
            scale,
            calculator,
        })
    }

    /// Rebuild a value from its wire shape, re-checking every invariant.
    pub fn from_snapshot(snapshot: Snapshot<C::Amount>) -> MoneyResult<Self> {
        Self::with_scale(snapshot.amount, snapshot.currency, snapshot.scale)
    }

    /// Plain-data copy of the value.
    pub fn to_snapshot(&self) -> Snapshot<C::Amount> {
        Snapshot {
            amount: self.amount.clone(),
            currency: self.currency.clone(),
            scale: self.scale.clone(),
        }
    }

    /// The calculator this value is bound to.
    #[inline]
    pub fn calculator(&self) -> C {
        self.calculator
    }

    #[inline]
    pub(crate) fn amount(&self) -> &C::Amount {
        &self.amount
    }

    #[inline]
    pub(crate) fn currency(&self) -> &Currency<C::Amount> {
        &self.currency
    }

    #[inline]
    pub(crate) fn scale(&self) -> &C::Amount {
        &self.scale
    }

    /// New value in the same currency, for results whose scale is known valid.
    #[inline]
    pub(crate) fn rebuild(&self, amount: C::Amount, scale: C::Amount) -> Self {
        Self {
            amount,
            currency: self.currency.clone(),
            scale,
            calculator: self.calculator,
        }
    }
}

impl<C: Calculator> fmt::Display for Money<C> {
    /// `USD 45.45` for base-10 currencies, `MGA 7 (scale 1)` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match crate::ops::to_decimal(self, &crate::domain::FormatOptions::new()) {
            Ok(decimal) => write!(f, "{} {}", self.currency.code, decimal),
            Err(_) => write!(
                f,
                "{} {} (scale {})",
                self.currency.code, self.amount, self.scale
            ),
        }
    }
}
