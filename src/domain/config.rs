// ============================================================================
// Encoder Configuration
// How a numeral is laid out when written
// ============================================================================

use crate::numeric::{CodecResult, Siliquae};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options for writing a numeral.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncodeOptions {
    /// Separator placed between magnitude groups (empty by default)
    pub spacing: String,

    /// Emit fraction glyphs for the part below one unit.
    /// When false the sub-unit part of the value is dropped.
    pub fractions: bool,
}

impl EncodeOptions {
    /// Create options with explicit values
    pub fn new(spacing: impl Into<String>, fractions: bool) -> Self {
        Self {
            spacing: spacing.into(),
            fractions,
        }
    }

    /// Builder method: Set the group separator
    pub fn with_spacing(mut self, spacing: impl Into<String>) -> Self {
        self.spacing = spacing.into();
        self
    }

    /// Builder method: Enable or disable fraction glyphs
    pub fn with_fractions(mut self, fractions: bool) -> Self {
        self.fractions = fractions;
        self
    }

    /// Whether the decoder can read the output back.
    ///
    /// The decoder only strips whitespace, so any other separator turns the
    /// output into something it rejects.
    pub fn is_reversible(&self) -> bool {
        self.spacing.chars().all(char::is_whitespace)
    }

    /// Quantize `value` the way these options write it: rounded to the
    /// nearest siliqua with fractions, truncated to whole units without.
    ///
    /// # Errors
    /// Returns `OutOfRange` for negative, non-finite or too large values.
    pub fn quantize(&self, value: f64) -> CodecResult<Siliquae> {
        if self.fractions {
            Siliquae::quantize(value)
        } else {
            Siliquae::quantize_whole(value)
        }
    }

    /// Decimal variant of [`EncodeOptions::quantize`].
    ///
    /// # Errors
    /// Returns `OutOfRange` for negative or too large values.
    pub fn quantize_decimal(&self, value: Decimal) -> CodecResult<Siliquae> {
        if self.fractions {
            Siliquae::from_decimal(value)
        } else {
            Siliquae::from_decimal_whole(value)
        }
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl EncodeOptions {
    /// Whole units, no separator: `MCMLXXXIV`
    pub fn compact() -> Self {
        Self::default()
    }

    /// Whole units, groups separated by a space: `M CM LXXX IV`
    pub fn spaced() -> Self {
        Self::default().with_spacing(" ")
    }

    /// Fractions enabled, no separator: `CS∷Σ`
    pub fn fractional() -> Self {
        Self::default().with_fractions(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = EncodeOptions::default();
        assert_eq!(options.spacing, "");
        assert!(!options.fractions);
        assert_eq!(options, EncodeOptions::compact());
    }

    #[test]
    fn test_builder_pattern() {
        let options = EncodeOptions::spaced().with_fractions(true);
        assert_eq!(options, EncodeOptions::new(" ", true));
        assert_eq!(EncodeOptions::fractional().with_spacing("\t").spacing, "\t");
    }

    #[test]
    fn test_reversible() {
        assert!(EncodeOptions::compact().is_reversible());
        assert!(EncodeOptions::spaced().is_reversible());
        assert!(!EncodeOptions::default().with_spacing("-").is_reversible());
    }

    #[test]
    fn test_quantize_follows_fraction_flag() {
        let whole = EncodeOptions::compact();
        let fractional = EncodeOptions::fractional();
        assert_eq!(whole.quantize(1.75).unwrap(), Siliquae::ONE);
        assert_eq!(fractional.quantize(1.75).unwrap().raw_value(), 3024);
        assert_eq!(
            whole.quantize_decimal(Decimal::new(175, 2)).unwrap(),
            Siliquae::ONE
        );
        assert!(fractional.quantize(-0.5).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_defaults() {
        let options: EncodeOptions = serde_json::from_str(r#"{"fractions":true}"#).unwrap();
        assert_eq!(options, EncodeOptions::fractional());
        let json = serde_json::to_string(&EncodeOptions::spaced()).unwrap();
        assert_eq!(json, r#"{"spacing":" ","fractions":false}"#);
    }
}
