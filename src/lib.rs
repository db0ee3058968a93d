// ============================================================================
// Roman Numerals Library
// Table-driven codec between numbers and extended Roman numerals
// ============================================================================

//! # Roman Numerals
//!
//! Converts between numbers and Roman numerals, beyond the classical
//! 1–3,999 range and below one unit.
//!
//! ## Features
//!
//! - **Vinculum notation** for thousands and above (`I̅V̅` = 4,000), up to
//!   3,999,999
//! - **Historical fractions** (semis, unciae, semuncia, sicilicus, sextula,
//!   scripulum, siliqua) down to 1/1728
//! - **Exact arithmetic**: values are counted in siliquae (1/1728), floats
//!   are quantized once on the way in
//! - **One table, two directions**: a greedy encoder and a prefix decoder
//!   walk the same symbol table
//!
//! ## Example
//!
//! ```rust
//! use roman_numerals::prelude::*;
//!
//! let spaced = EncodeOptions::spaced();
//! assert_eq!(to_roman(1984.0, &spaced).unwrap(), "M CM LXXX IV");
//! assert_eq!(to_roman(1_234_567.0, &spaced).unwrap(), "M̅ C̅C̅ X̅X̅X̅ I̅V̅ D LX VII");
//!
//! let with_fractions = EncodeOptions::fractional();
//! assert_eq!(to_roman(100.875, &with_fractions).unwrap(), "CS∷Σ");
//!
//! assert_eq!(from_roman("M CM LX III").unwrap(), 1963.0);
//! assert!(from_roman("CMCMCMC").is_err());
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

pub use engine::{
    from_roman, from_roman_siliquae, to_roman, to_roman_decimal, to_roman_siliquae, Codec,
};

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{EncodeOptions, Magnitude, NumeralTable, RomanNumeral};
    pub use crate::engine::{
        for_each_numeral, from_roman, from_roman_siliquae, to_roman, to_roman_decimal,
        to_roman_siliquae, Codec,
    };
    pub use crate::interfaces::{NumeralVisitor, Token, Visit};
    pub use crate::numeric::{
        CodecError, CodecResult, RangeViolation, Siliquae, NUMERUS_MAXIMUS, RES_MINIMA,
    };
}

/// Install a `fmt` subscriber printing codec events at debug level.
///
/// Does nothing if a global subscriber is already set.
#[cfg(feature = "logging")]
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
