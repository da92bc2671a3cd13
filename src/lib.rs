// ============================================================================
// Exact Money Library
// Immutable monetary values over pluggable exact-integer calculators
// ============================================================================

//! # Exact Money
//!
//! Exact, currency-aware arithmetic on monetary amounts.
//!
//! ## Features
//!
//! - **Integer amounts with a scale**: 45.45 USD is `4545` at scale 2, never a float
//! - **Pluggable calculators** (`i64`, `i128`, `BigInt`, `Decimal`) behind one trait
//! - **Ten rounding modes** applied only where precision is actually lost
//! - **Scale normalization** so values at different scales combine exactly
//! - **Remainder-safe allocation** that never loses a minor unit
//!
//! ## Example
//!
//! ```rust
//! use exact_money::prelude::*;
//!
//! let usd = Currency::new("USD", 10, 2);
//! let price = Money::<I64Calculator>::new(500, usd.clone()).unwrap();
//! let tip = Money::<I64Calculator>::with_scale(50, usd, 1).unwrap();
//!
//! // 5.00 + 5.0 at the highest scale
//! let total = add(&price, &tip).unwrap();
//! assert_eq!(total.to_string(), "USD 10.00");
//!
//! // Rounded rendering through a transformer
//! let options = FormatOptions::new().with_digits(1).with_round(RoundingMode::Up);
//! let tax = Money::<I64Calculator>::new(4545, Currency::new("USD", 10, 2)).unwrap();
//! assert_eq!(to_format(&tax, &CodeTransformer, &options).unwrap(), "USD 45.5");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod ops;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Currency, FormatOptions, Money, ScaledAmount, Snapshot};
    pub use crate::engine::RoundingMode;
    pub use crate::interfaces::{
        AmountTransformer, Calculator, CodeTransformer, FormatContext, Transformer,
    };
    pub use crate::numeric::{
        BigIntCalculator, DecimalCalculator, I128Calculator, I64Calculator, MoneyError,
        MoneyResult,
    };
    pub use crate::ops::{
        add, allocate, compare, convert_scale, create_formatter, equal, greater_than,
        greater_than_or_equal, have_same_currency, less_than, less_than_or_equal, maximum,
        minimum, multiply, normalize_scale, subtract, sum, to_decimal, to_format, to_units,
        transform_scale,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use num_bigint::BigInt;
    use rust_decimal::Decimal;

    /// Scenarios run identically on every backend.
    fn end_to_end<C: Calculator>() {
        let calc = C::default();
        let n = |value: i64| calc.from_i64(value);
        let usd = Currency::decimal(&calc, "USD", 2);
        let eur = Currency::decimal(&calc, "EUR", 2);

        let five = Money::<C>::new(n(500), usd.clone()).unwrap();
        let eight = Money::<C>::new(n(800), usd.clone()).unwrap();
        assert!(!greater_than(&five, &eight).unwrap());

        let ten = add(&five, &five).unwrap().to_snapshot();
        assert_eq!((ten.amount, ten.scale), (n(1000), n(2)));

        let five_tenths = Money::<C>::with_scale(n(50), usd.clone(), n(1)).unwrap();
        let mixed = add(&five, &five_tenths).unwrap().to_snapshot();
        assert_eq!((mixed.amount, mixed.scale), (n(1000), n(2)));

        let euros = Money::<C>::new(n(500), eur).unwrap();
        assert!(matches!(
            add(&five, &euros),
            Err(MoneyError::CurrencyMismatch { .. })
        ));

        let tax = Money::<C>::new(n(4545), usd.clone()).unwrap();
        let options = FormatOptions::new().with_digits(1).with_round(RoundingMode::Up);
        assert_eq!(
            to_format(&tax, &CodeTransformer, &options).unwrap(),
            "USD 45.5"
        );

        // Upscale then downscale is exact
        let up = convert_scale(&tax, &n(6), RoundingMode::Down).unwrap();
        let back = convert_scale(&up, &n(2), RoundingMode::Up).unwrap();
        assert_eq!(back.to_snapshot(), tax.to_snapshot());

        let shares = allocate(&tax, &[ScaledAmount::from(n(1)), ScaledAmount::from(n(2))])
            .unwrap();
        let total = sum(&shares).unwrap();
        assert!(equal(&total, &tax).unwrap());
    }

    #[test]
    fn test_end_to_end_i64() {
        end_to_end::<I64Calculator>();
    }

    #[test]
    fn test_end_to_end_i128() {
        end_to_end::<I128Calculator>();
    }

    #[test]
    fn test_end_to_end_bigint() {
        end_to_end::<BigIntCalculator>();
    }

    #[test]
    fn test_end_to_end_decimal() {
        end_to_end::<DecimalCalculator>();
    }

    #[test]
    fn test_bigint_beyond_fixed_width() {
        let usd = Currency::decimal(&BigIntCalculator, "USD", 2);
        let huge = BigInt::from(i128::MAX);
        let a = Money::<BigIntCalculator>::new(huge.clone(), usd.clone()).unwrap();
        let b = Money::<BigIntCalculator>::new(huge.clone(), usd).unwrap();

        let total = add(&a, &b).unwrap().to_snapshot();
        assert_eq!(total.amount, huge * 2);
    }

    #[test]
    fn test_fixed_width_overflow_is_reported() {
        let usd = Currency::new("USD", 10, 2);
        let max = Money::<I64Calculator>::new(i64::MAX, usd.clone()).unwrap();
        let fine = Money::<I64Calculator>::with_scale(1, usd, 3).unwrap();
        assert_eq!(add(&max, &fine), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_decimal_amounts_stay_integral() {
        let chf = Currency::decimal(&DecimalCalculator, "CHF", 2);
        let price = Money::<DecimalCalculator>::new(Decimal::from(1999), chf).unwrap();
        let scaled = multiply(&price, &ScaledAmount::new(Decimal::from(15), Decimal::from(1)))
            .unwrap();
        assert_eq!(to_decimal(&scaled, &FormatOptions::new()).unwrap(), "29.985");
        assert_eq!(
            to_decimal(&scaled, &FormatOptions::cents()).unwrap(),
            "29.98"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_snapshot_serde_round_trip() {
        let usd = Currency::new("USD", 10, 2);
        let money = Money::<I64Calculator>::with_scale(-4545, usd, 3).unwrap();

        let json = serde_json::to_string(&money.to_snapshot()).unwrap();
        let snapshot: Snapshot<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(Money::<I64Calculator>::from_snapshot(snapshot).unwrap(), money);

        let mode: RoundingMode = serde_json::from_str("\"half-away-from-zero\"").unwrap();
        assert_eq!(mode, RoundingMode::HalfAwayFromZero);
    }
}
