// ============================================================================
// Numeric Module
// Exact quantities and error types for the numeral codec
// ============================================================================
//
// This module provides:
// - Siliquae: integer count of 1/1728ths, the codec's only working unit
// - CodecError: range and syntax failures
// - The scale constants shared by callers and tests
//
// Design principles:
// - Floats are quantized exactly once, on the way in
// - All table arithmetic is integer subtraction and addition
// - All fallible operations return Result (no panics)

mod errors;
mod siliquae;

pub use errors::{CodecError, CodecResult, RangeViolation};
pub use siliquae::{Siliquae, NUMERUS_MAXIMUS, RES_MINIMA, SILIQUAE_PER_UNUM};
