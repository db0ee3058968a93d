// ============================================================================
// Greedy Encoder
// Quantity -> numeral, one symbol per magnitude group at most
// ============================================================================

use super::walker::for_each_numeral;
use crate::domain::symbols::{MILLE, NULLA, SEMEL_MILLE};
use crate::domain::{EncodeOptions, NumeralTable};
use crate::interfaces::{NumeralVisitor, Token, Visit};
use crate::numeric::{CodecError, CodecResult, RangeViolation, Siliquae, SILIQUAE_PER_UNUM};
use smallvec::SmallVec;

/// Below this many siliquae the thousands stay in classical `M` form.
const CLASSICAL_LIMIT: Siliquae = Siliquae::from_raw(4_000 * SILIQUAE_PER_UNUM);

/// Visitor that takes the largest numeral not exceeding what is left.
///
/// # Example
/// ```text
/// remaining 1984:  M̅M̅M̅ .. I̅I̅ skip, I̅ taken       (984 left, next group)
///                  CM taken                        (84 left, next group)
///                  LXXX taken                      (4 left, next group)
///                  IV taken                        (nothing left, stop)
/// ```
struct GreedyEncoder<'t> {
    remaining: Siliquae,
    fractions: bool,
    emitted: SmallVec<[&'t str; 16]>,
}

impl<'t> NumeralVisitor<'t> for GreedyEncoder<'t> {
    fn visit(&mut self, token: Token<'t>) -> Visit {
        if !self.fractions && token.siliquae < Siliquae::ONE {
            return Visit::Stop;
        }
        let Some(rest) = self.remaining.checked_sub(token.siliquae) else {
            return Visit::Continue;
        };

        tracing::trace!(numeral = token.numeral, value = token.unae, "emit");
        self.emitted.push(token.numeral);
        self.remaining = rest;

        if rest.is_zero() {
            Visit::Stop
        } else {
            Visit::SkipGroup
        }
    }
}

/// Write `quantity` with the numerals of `table`.
///
/// Without fractions the sub-unit part is dropped first. Zero is the `N`
/// literal. The classical `M` rewrite looks at the quantized count, so a
/// value rounded up to 4,000 is written `I̅V̅`.
///
/// # Errors
/// Returns `OutOfRange` with [`RangeViolation::Unrepresentable`] if the
/// table cannot spell the whole quantity; nothing is written partially.
pub(crate) fn encode(
    table: &NumeralTable,
    quantity: Siliquae,
    options: &EncodeOptions,
) -> CodecResult<String> {
    let quantity = if options.fractions {
        quantity
    } else {
        Siliquae::from_raw(quantity.whole_units() * SILIQUAE_PER_UNUM)
    };
    if quantity.is_zero() {
        return Ok(NULLA.to_string());
    }
    if quantity > table.capacity() {
        return Err(unrepresentable(quantity));
    }

    let encoder = for_each_numeral(
        table,
        GreedyEncoder {
            remaining: quantity,
            fractions: options.fractions,
            emitted: SmallVec::new(),
        },
    );

    if !encoder.remaining.is_zero() {
        tracing::debug!(%quantity, left = %encoder.remaining, "table has no spelling");
        return Err(unrepresentable(quantity));
    }

    let numeral = encoder.emitted.join(options.spacing.as_str());

    // The table writes a thousand as I̅; classical numerals want M.
    if quantity < CLASSICAL_LIMIT {
        Ok(numeral.replace(SEMEL_MILLE, &MILLE.to_string()))
    } else {
        Ok(numeral)
    }
}

fn unrepresentable(quantity: Siliquae) -> CodecError {
    CodecError::out_of_range(quantity.to_f64(), RangeViolation::Unrepresentable)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roman(value: f64, options: &EncodeOptions) -> String {
        let quantity = options.quantize(value).unwrap();
        encode(NumeralTable::standard(), quantity, options).unwrap()
    }

    #[test]
    fn test_classical_numerals() {
        assert_eq!(roman(1984.0, &EncodeOptions::spaced()), "M CM LXXX IV");
        assert_eq!(roman(3999.0, &EncodeOptions::compact()), "MMMCMXCIX");
        assert_eq!(roman(2000.0, &EncodeOptions::compact()), "MM");
        assert_eq!(roman(4.0, &EncodeOptions::compact()), "IV");
    }

    #[test]
    fn test_vinculum_numerals() {
        assert_eq!(
            roman(1_234_567.0, &EncodeOptions::spaced()),
            "M̅ C̅C̅ X̅X̅X̅ I̅V̅ D LX VII"
        );
        assert_eq!(roman(4000.0, &EncodeOptions::compact()), "I̅V̅");
        assert_eq!(roman(5000.0, &EncodeOptions::compact()), "V̅");
        assert_eq!(roman(3_999_999.0, &EncodeOptions::compact()), "M̅M̅M̅C̅M̅X̅C̅I̅X̅CMXCIX");
    }

    #[test]
    fn test_fractions_only_when_asked() {
        let pi = std::f64::consts::PI;
        assert_eq!(roman(pi, &EncodeOptions::compact()), "III");
        assert_eq!(roman(3.9999, &EncodeOptions::compact()), "III");
        assert_eq!(roman(pi, &EncodeOptions::fractional()), "III·ΣƧ⸩⸩⸩⸩⸩");
    }

    #[test]
    fn test_fraction_glyphs() {
        assert_eq!(roman(1.25, &EncodeOptions::new(" ", true)), "I ∴");
        assert_eq!(roman(4.0 / 3.0, &EncodeOptions::fractional()), "I∷");
        assert_eq!(roman(100.875, &EncodeOptions::fractional()), "CS∷Σ");
        assert_eq!(roman(0.5, &EncodeOptions::fractional()), "S");
    }

    #[test]
    fn test_zero_and_empty() {
        assert_eq!(roman(0.0, &EncodeOptions::compact()), "N");
        assert_eq!(roman(0.3, &EncodeOptions::compact()), "N");
        assert_eq!(roman(0.0001, &EncodeOptions::fractional()), "N");
    }

    #[test]
    fn test_rounded_up_to_four_thousand() {
        assert_eq!(roman(3999.9999, &EncodeOptions::fractional()), "I̅V̅");
        assert_eq!(roman(3999.5, &EncodeOptions::fractional()), "MMMCMXCIXS");
    }

    #[test]
    fn test_whole_mode_drops_exact_fraction() {
        let quantity = Siliquae::from_raw(1920);
        let numeral = encode(NumeralTable::standard(), quantity, &EncodeOptions::compact());
        assert_eq!(numeral.unwrap(), "I");
    }

    #[test]
    fn test_one_symbol_per_group() {
        let options = EncodeOptions::new("|", true);
        let numeral = roman(3_888_888.999, &options);
        let groups: Vec<&str> = numeral.split('|').collect();
        assert_eq!(
            groups,
            vec![
                "M̅M̅M̅", "D̅C̅C̅C̅", "L̅X̅X̅X̅", "V̅I̅I̅I̅", "DCCC", "LXXX", "VIII", "S", "⁙", "Σ", "Ↄ",
                "Ƶ", "℈", "⸩⸩⸩⸩"
            ]
        );
    }

    #[test]
    fn test_custom_table() {
        use crate::domain::Magnitude;

        let table = NumeralTable::new(vec![
            Magnitude::new(Siliquae::from_units(10).unwrap(), ["X", "XX"]).unwrap(),
            Magnitude::new(Siliquae::ONE, ["I", "II", "III"]).unwrap(),
        ])
        .unwrap();
        let options = EncodeOptions::spaced();
        let units = |n| Siliquae::from_units(n).unwrap();
        assert_eq!(encode(&table, units(23), &options).unwrap(), "XX III");
        assert_eq!(encode(&table, units(20), &options).unwrap(), "XX");
    }

    #[test]
    fn test_custom_table_gaps_are_errors() {
        use crate::domain::Magnitude;

        let tens = NumeralTable::new(vec![Magnitude::new(
            Siliquae::from_units(10).unwrap(),
            ["X", "XX"],
        )
        .unwrap()])
        .unwrap();
        let options = EncodeOptions::compact();
        let units = |n| Siliquae::from_units(n).unwrap();

        assert_eq!(encode(&tens, units(20), &options).unwrap(), "XX");
        assert_eq!(encode(&tens, Siliquae::ZERO, &options).unwrap(), "N");

        for n in [25, 5, 30] {
            let err = encode(&tens, units(n), &options).unwrap_err();
            assert!(matches!(
                err,
                CodecError::OutOfRange {
                    reason: RangeViolation::Unrepresentable,
                    ..
                }
            ));
        }
    }
}
