// ============================================================================
// Roman Numeral Value
// Numeral text paired with the exact quantity it stands for
// ============================================================================

use super::config::EncodeOptions;
use crate::engine::Codec;
use crate::numeric::{CodecError, Siliquae};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A numeral written with the standard table, and its value.
///
/// Parsing accepts anything the decoder accepts (whitespace, classical `M`);
/// `Display` gives back the text it was built from. With the `serde`
/// feature it is stored as its text and re-decoded when read back.
///
/// # Example
/// ```
/// use roman_numerals::domain::RomanNumeral;
///
/// let year: RomanNumeral = "MCMLXXXIV".parse().unwrap();
/// assert_eq!(year.to_f64(), 1984.0);
/// assert_eq!(year.to_string(), "MCMLXXXIV");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct RomanNumeral {
    text: String,
    value: Siliquae,
}

impl RomanNumeral {
    /// Encode `value` with the standard table.
    ///
    /// # Errors
    /// Returns `OutOfRange` for negative, non-finite or too large values.
    pub fn encode(value: f64, options: &EncodeOptions) -> Result<Self, CodecError> {
        let value = options.quantize(value)?;
        let text = Codec::standard().encode_siliquae(value, options)?;
        Ok(Self { text, value })
    }

    /// The numeral text
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Exact value
    #[inline]
    pub fn value(&self) -> Siliquae {
        self.value
    }

    /// Value in whole units
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.value.to_f64()
    }
}

impl FromStr for RomanNumeral {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_string())
    }
}

impl TryFrom<String> for RomanNumeral {
    type Error = CodecError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        let value = Codec::standard().decode_siliquae(&text)?;
        Ok(Self { text, value })
    }
}

impl From<RomanNumeral> for String {
    fn from(numeral: RomanNumeral) -> Self {
        numeral.text
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for RomanNumeral {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
