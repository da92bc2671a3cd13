// ============================================================================
// Engine Module
// Exact algorithms shared by every money operation
// ============================================================================
//
// Everything here is written against the Calculator trait only:
// - rounding: RoundingMode + quotient rounding
// - scale: single-value scale conversion
// - normalize: highest-common-scale normalization
// - distribute: remainder-safe proportional split

mod distribute;
mod normalize;
mod rounding;
mod scale;

pub use distribute::distribute;
pub use normalize::{highest_scale, normalize_pair, normalize_scale};
pub use rounding::{round_quotient, RoundingMode};
pub use scale::{convert_scale, transform_scale};
