// ============================================================================
// Operations Module
// Public operations over monetary values
// ============================================================================
//
// Every operation is a free function generic over the value's calculator:
// - arithmetic: add, subtract, multiply, sum, allocate
// - comparison: equality, ordering, extremes and sign predicates
// - format: decimal rendering, unit export and transformers
//
// Operations combining several values check currencies first and then
// normalize scales; inputs are never modified.

mod arithmetic;
mod comparison;
mod format;

pub use arithmetic::{add, allocate, multiply, subtract, sum};
pub use comparison::{
    compare, equal, greater_than, greater_than_or_equal, has_sub_units, have_same_amount,
    have_same_currency, is_negative, is_positive, is_zero, less_than, less_than_or_equal,
    maximum, minimum,
};
pub use format::{
    create_formatter, to_decimal, to_format, to_rounded_unit, to_unit, to_units, Formatter,
};

// Scale conversion is an engine algorithm but part of the public surface
pub use crate::engine::{convert_scale, normalize_scale, transform_scale};
