// ============================================================================
// Format Configuration
// Options controlling how monetary values are rendered
// ============================================================================

use crate::engine::RoundingMode;
use crate::interfaces::Calculator;
use crate::numeric::{MoneyError, MoneyResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest number of fractional digits a formatter may request.
pub const MAX_FORMAT_DIGITS: u32 = 64;

/// Options for [`to_format`](crate::ops::to_format) and
/// [`to_decimal`](crate::ops::to_decimal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatOptions {
    /// Fractional digits to display
    /// None keeps the value's own scale
    pub digits: Option<u32>,

    /// Mode applied when `digits` is below the value's scale
    /// None uses the calculator's default rounding mode
    pub round: Option<RoundingMode>,
}

impl FormatOptions {
    /// Options that render a value at its own scale
    pub const fn new() -> Self {
        Self {
            digits: None,
            round: None,
        }
    }

    /// Builder method: Set displayed fractional digits
    pub const fn with_digits(mut self, digits: u32) -> Self {
        self.digits = Some(digits);
        self
    }

    /// Builder method: Set rounding mode
    pub const fn with_round(mut self, round: RoundingMode) -> Self {
        self.round = Some(round);
        self
    }

    /// Rounding mode to apply, falling back to the calculator's default.
    pub fn rounding_for<C: Calculator>(&self, calc: &C) -> RoundingMode {
        self.round.unwrap_or_else(|| calc.default_rounding())
    }

    /// Validate the configuration
    pub fn validate(&self) -> MoneyResult<()> {
        if let Some(digits) = self.digits {
            if digits > MAX_FORMAT_DIGITS {
                return Err(MoneyError::InvalidScale(format!(
                    "cannot display {digits} digits (maximum is {MAX_FORMAT_DIGITS})"
                )));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl FormatOptions {
    /// Whole units, banker's rounding
    /// - 45.45 → "45"
    pub const fn whole_units() -> Self {
        Self::new().with_digits(0).with_round(RoundingMode::HalfEven)
    }

    /// Two fractional digits, banker's rounding
    /// - 45.455 → "45.46"
    pub const fn cents() -> Self {
        Self::new().with_digits(2).with_round(RoundingMode::HalfEven)
    }

    /// Fixed digits with extra precision cut off, never rounded up
    pub const fn truncated(digits: u32) -> Self {
        Self::new().with_digits(digits).with_round(RoundingMode::Down)
    }
}
