// ============================================================================
// Codec
// Binds a numeral table to both codec directions
// ============================================================================

use super::{decoder, encoder};
use crate::domain::{EncodeOptions, NumeralTable};
use crate::numeric::{CodecError, CodecResult, RangeViolation, Siliquae};
use rust_decimal::Decimal;

/// Encoder and decoder sharing one symbol table.
///
/// Every call is a pure function of its input and the table, so a `Codec`
/// can be shared freely across threads.
///
/// # Example
/// ```
/// use roman_numerals::prelude::*;
///
/// let codec = Codec::standard();
/// let numeral = codec.encode(1984.0, &EncodeOptions::spaced()).unwrap();
/// assert_eq!(numeral, "M CM LXXX IV");
/// assert_eq!(codec.decode(&numeral).unwrap(), 1984.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Codec<'t> {
    table: &'t NumeralTable,
}

impl Codec<'static> {
    /// Codec over the standard vinculum-and-fractions table
    pub fn standard() -> Self {
        Self::new(NumeralTable::standard())
    }
}

impl Default for Codec<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'t> Codec<'t> {
    pub fn new(table: &'t NumeralTable) -> Self {
        Self { table }
    }

    #[inline]
    pub fn table(&self) -> &'t NumeralTable {
        self.table
    }

    // ========================================================================
    // Encoding
    // ========================================================================

    /// Write `value` as a numeral.
    ///
    /// Without `options.fractions` the part below one unit is dropped;
    /// with it the value is rounded to the nearest siliqua.
    ///
    /// # Errors
    /// Returns `OutOfRange` for negative, non-finite or too large values,
    /// and for values the table has no exact spelling for.
    pub fn encode(&self, value: f64, options: &EncodeOptions) -> CodecResult<String> {
        let quantity = options
            .quantize(value)
            .inspect_err(|err| tracing::debug!(value, error = %err, "rejected value"))?;
        self.write(quantity, options)
    }

    /// Write a decimal value as a numeral, quantizing it exactly.
    ///
    /// # Errors
    /// Same range rules as [`Codec::encode`].
    pub fn encode_decimal(&self, value: Decimal, options: &EncodeOptions) -> CodecResult<String> {
        let quantity = options
            .quantize_decimal(value)
            .inspect_err(|err| tracing::debug!(%value, error = %err, "rejected value"))?;
        self.write(quantity, options)
    }

    /// Write an exact quantity as a numeral.
    ///
    /// # Errors
    /// Returns `OutOfRange` if `quantity` exceeds [`Siliquae::MAX`] or the
    /// table has no exact spelling for it.
    pub fn encode_siliquae(
        &self,
        quantity: Siliquae,
        options: &EncodeOptions,
    ) -> CodecResult<String> {
        if quantity > Siliquae::MAX {
            return Err(CodecError::out_of_range(
                quantity.to_f64(),
                RangeViolation::TooLarge,
            ));
        }
        self.write(quantity, options)
    }

    fn write(&self, quantity: Siliquae, options: &EncodeOptions) -> CodecResult<String> {
        if !options.is_reversible() {
            tracing::warn!(
                spacing = %options.spacing,
                "separator is not whitespace; the numeral will not decode"
            );
        }
        let numeral = encoder::encode(self.table, quantity, options)
            .inspect_err(|err| tracing::debug!(%quantity, error = %err, "rejected value"))?;
        tracing::debug!(%quantity, %numeral, "encoded");
        Ok(numeral)
    }

    // ========================================================================
    // Decoding
    // ========================================================================

    /// Read a numeral, returning its value in whole units.
    ///
    /// # Errors
    /// Returns `Malformed` if the text is not a canonical numeral.
    pub fn decode(&self, numeral: &str) -> CodecResult<f64> {
        self.decode_siliquae(numeral).map(Siliquae::to_f64)
    }

    /// Read a numeral, returning its exact value.
    ///
    /// # Errors
    /// Returns `Malformed` if the text is not a canonical numeral.
    pub fn decode_siliquae(&self, numeral: &str) -> CodecResult<Siliquae> {
        match decoder::decode(self.table, numeral) {
            Ok(quantity) => {
                tracing::debug!(numeral, %quantity, "decoded");
                Ok(quantity)
            },
            Err(err) => {
                tracing::debug!(numeral, error = %err, "rejected numeral");
                Err(err)
            },
        }
    }
}

// ============================================================================
// Standard-table shortcuts
// ============================================================================

/// Write `value` with the standard table. See [`Codec::encode`].
///
/// # Errors
/// Returns `OutOfRange` for negative, non-finite or too large values.
pub fn to_roman(value: f64, options: &EncodeOptions) -> CodecResult<String> {
    Codec::standard().encode(value, options)
}

/// Write a decimal with the standard table. See [`Codec::encode_decimal`].
///
/// # Errors
/// Returns `OutOfRange` for negative or too large values.
pub fn to_roman_decimal(value: Decimal, options: &EncodeOptions) -> CodecResult<String> {
    Codec::standard().encode_decimal(value, options)
}

/// Write an exact quantity with the standard table.
///
/// # Errors
/// Returns `OutOfRange` if `quantity` exceeds [`Siliquae::MAX`].
pub fn to_roman_siliquae(quantity: Siliquae, options: &EncodeOptions) -> CodecResult<String> {
    Codec::standard().encode_siliquae(quantity, options)
}

/// Read a numeral with the standard table. See [`Codec::decode`].
///
/// # Errors
/// Returns `Malformed` if the text is not a canonical numeral.
pub fn from_roman(numeral: &str) -> CodecResult<f64> {
    Codec::standard().decode(numeral)
}

/// Read a numeral exactly with the standard table.
///
/// # Errors
/// Returns `Malformed` if the text is not a canonical numeral.
pub fn from_roman_siliquae(numeral: &str) -> CodecResult<Siliquae> {
    Codec::standard().decode_siliquae(numeral)
}
