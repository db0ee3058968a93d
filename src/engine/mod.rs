// ============================================================================
// Engine Module
// Magnitude walker, encoder, decoder and the codec built on them
// ============================================================================

mod codec;
mod decoder;
mod encoder;
mod walker;

pub use codec::{
    from_roman, from_roman_siliquae, to_roman, to_roman_decimal, to_roman_siliquae, Codec,
};
pub use walker::for_each_numeral;
