// ============================================================================
// Domain Models Module
// Contains the monetary value objects and their configuration
// ============================================================================

pub mod config;
pub mod currency;
pub mod money;

pub use config::{FormatOptions, MAX_FORMAT_DIGITS};
pub use currency::Currency;
pub use money::{Money, ScaledAmount, Snapshot};
