// ============================================================================
// Rounding Engine
// Turns a dividend/divisor pair into an integer quotient under a named mode
// ============================================================================

use crate::interfaces::Calculator;
use crate::numeric::{MoneyError, MoneyResult};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a non-exact quotient is turned into an integer.
///
/// `Down`/`Up` are symmetric around zero (truncate / away from zero).
/// `Floor`, `Ceiling`, `HalfUp` and `HalfDown` are directional and therefore
/// asymmetric: `HalfUp` sends ties toward +∞, `HalfDown` toward −∞.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RoundingMode {
    /// Truncate toward zero
    Down,
    /// Away from zero whenever there is a remainder
    Up,
    /// Toward negative infinity
    Floor,
    /// Toward positive infinity
    Ceiling,
    /// Nearest, ties toward positive infinity
    HalfUp,
    /// Nearest, ties toward negative infinity
    HalfDown,
    /// Nearest, ties to the even neighbour (banker's rounding)
    #[default]
    HalfEven,
    /// Nearest, ties to the odd neighbour
    HalfOdd,
    /// Nearest, ties away from zero
    HalfAwayFromZero,
    /// Nearest, ties toward zero
    HalfTowardsZero,
}

impl RoundingMode {
    /// Every mode, in declaration order.
    pub const ALL: [RoundingMode; 10] = [
        RoundingMode::Down,
        RoundingMode::Up,
        RoundingMode::Floor,
        RoundingMode::Ceiling,
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfEven,
        RoundingMode::HalfOdd,
        RoundingMode::HalfAwayFromZero,
        RoundingMode::HalfTowardsZero,
    ];

    /// Canonical kebab-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            RoundingMode::Down => "down",
            RoundingMode::Up => "up",
            RoundingMode::Floor => "floor",
            RoundingMode::Ceiling => "ceiling",
            RoundingMode::HalfUp => "half-up",
            RoundingMode::HalfDown => "half-down",
            RoundingMode::HalfEven => "half-even",
            RoundingMode::HalfOdd => "half-odd",
            RoundingMode::HalfAwayFromZero => "half-away-from-zero",
            RoundingMode::HalfTowardsZero => "half-towards-zero",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for RoundingMode {
    type Err = MoneyError;

    /// Parse a mode name.
    ///
    /// Kebab, snake and camel case are accepted: "half-even", "half_even"
    /// and "halfEven" all name the same mode.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "down" => Ok(RoundingMode::Down),
            "up" => Ok(RoundingMode::Up),
            "floor" => Ok(RoundingMode::Floor),
            "ceiling" | "ceil" => Ok(RoundingMode::Ceiling),
            "halfup" => Ok(RoundingMode::HalfUp),
            "halfdown" => Ok(RoundingMode::HalfDown),
            "halfeven" => Ok(RoundingMode::HalfEven),
            "halfodd" => Ok(RoundingMode::HalfOdd),
            "halfawayfromzero" => Ok(RoundingMode::HalfAwayFromZero),
            "halftowardszero" | "halftowardzero" => Ok(RoundingMode::HalfTowardsZero),
            _ => Err(MoneyError::InvalidRoundingMode(s.to_string())),
        }
    }
}

/// Position of a non-zero remainder relative to half the divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fraction {
    BelowHalf,
    Half,
    AboveHalf,
}

/// Divide `dividend` by `divisor` and round the quotient with `mode`.
///
/// Exact divisions return the plain quotient for every mode.
///
/// # Errors
/// - `DivisionByZero` if `divisor` is zero
/// - Any error the calculator reports (e.g. `Overflow` when stepping the
///   quotient away from zero at the edge of a fixed-width range)
///
/// # Example
/// ```
/// use exact_money::engine::{round_quotient, RoundingMode};
/// use exact_money::numeric::I64Calculator;
///
/// let calc = I64Calculator;
/// assert_eq!(round_quotient(&calc, &4545, &10, RoundingMode::Up).unwrap(), 455);
/// assert_eq!(round_quotient(&calc, &-25, &10, RoundingMode::HalfEven).unwrap(), -2);
/// ```
pub fn round_quotient<C: Calculator>(
    calc: &C,
    dividend: &C::Amount,
    divisor: &C::Amount,
    mode: RoundingMode,
) -> MoneyResult<C::Amount> {
    if calc.is_zero(divisor) {
        return Err(MoneyError::DivisionByZero);
    }

    let quotient = calc.integer_divide(dividend, divisor)?;
    let remainder = calc.modulo(dividend, divisor)?;
    if calc.is_zero(&remainder) {
        return Ok(quotient);
    }

    // Sign of the true (unrounded) quotient
    let negative = calc.is_negative(dividend) != calc.is_negative(divisor);

    let away_from_zero = match mode {
        RoundingMode::Down => false,
        RoundingMode::Up => true,
        RoundingMode::Floor => negative,
        RoundingMode::Ceiling => !negative,
        _ => match classify(calc, &remainder, divisor)? {
            Fraction::BelowHalf => false,
            Fraction::AboveHalf => true,
            Fraction::Half => match mode {
                RoundingMode::HalfUp => !negative,
                RoundingMode::HalfDown => negative,
                RoundingMode::HalfEven => is_odd(calc, &quotient)?,
                RoundingMode::HalfOdd => !is_odd(calc, &quotient)?,
                RoundingMode::HalfAwayFromZero => true,
                _ => false,
            },
        },
    };

    tracing::trace!(
        calculator = calc.name(),
        %dividend,
        %divisor,
        %mode,
        away_from_zero,
        "rounding inexact quotient"
    );

    match (away_from_zero, negative) {
        (false, _) => Ok(quotient),
        (true, false) => calc.increment(&quotient),
        (true, true) => calc.decrement(&quotient),
    }
}

/// Compare `2·|remainder|` with `|divisor|`.
///
/// Computed as `|remainder|` against `|divisor| - |remainder|` so that a
/// fixed-width backend never has to hold twice the remainder.
fn classify<C: Calculator>(
    calc: &C,
    remainder: &C::Amount,
    divisor: &C::Amount,
) -> MoneyResult<Fraction> {
    let remainder = calc.absolute(remainder)?;
    let divisor = calc.absolute(divisor)?;
    let rest = calc.subtract(&divisor, &remainder)?;

    Ok(match calc.compare(&remainder, &rest) {
        Ordering::Less => Fraction::BelowHalf,
        Ordering::Equal => Fraction::Half,
        Ordering::Greater => Fraction::AboveHalf,
    })
}

fn is_odd<C: Calculator>(calc: &C, value: &C::Amount) -> MoneyResult<bool> {
    let two = calc.from_i64(2);
    Ok(!calc.is_zero(&calc.modulo(value, &two)?))
}
