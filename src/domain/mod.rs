// ============================================================================
// Domain Models Module
// Glyphs, the symbol table, encoder options and numeral values
// ============================================================================

pub mod config;
pub mod numeral;
pub mod symbols;
pub mod table;

pub use config::EncodeOptions;
pub use numeral::RomanNumeral;
pub use table::{Magnitude, NumeralTable, MAX_GROUP_LEN};
