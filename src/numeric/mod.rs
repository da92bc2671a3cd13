// ============================================================================
// Numeric Module
// Exact integer backends for monetary arithmetic
// ============================================================================
//
// This module provides:
// - I64Calculator / I128Calculator: fixed-width, checked (never wrap)
// - BigIntCalculator: arbitrary precision, never overflows
// - DecimalCalculator: rust_decimal values kept integral
// - MoneyError: Error type shared by calculators and operations
//
// Design principles:
// - No floating-point operations (to_number is display-only)
// - All arithmetic returns Result (no panics)
// - Calculators are zero-sized and stateless

mod big_integer;
mod decimal;
mod errors;
mod integer;

pub use big_integer::BigIntCalculator;
pub use decimal::DecimalCalculator;
pub use errors::{MoneyError, MoneyResult, NumericResult};
pub use integer::{I128Calculator, I64Calculator};
