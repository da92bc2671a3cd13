// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod calculator;
mod transformer;

pub use calculator::Calculator;
pub use transformer::{AmountTransformer, CodeTransformer, FormatContext, Transformer};
