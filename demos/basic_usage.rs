// ============================================================================
// Basic Usage Example
// ============================================================================

use roman_numerals::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    roman_numerals::init_logging();

    println!("=== Roman Numeral Codec Example ===\n");

    // Classical and vinculum numerals
    let spaced = EncodeOptions::spaced();
    for value in [1984.0, 3999.0, 4000.0, 1_234_567.0] {
        match to_roman(value, &spaced) {
            Ok(numeral) => println!("  {:>12} -> {}", value, numeral),
            Err(err) => println!("  {:>12} -> error: {}", value, err),
        }
    }

    // Fractions
    println!("\n=== Fractions ===");
    let fractional = EncodeOptions::fractional();
    for value in [0.5, 1.25, 4.0 / 3.0, std::f64::consts::PI] {
        let numeral = RomanNumeral::encode(value, &fractional);
        match numeral {
            Ok(numeral) => println!(
                "  {:>12.6} -> {} (exactly {})",
                value,
                numeral,
                numeral.value()
            ),
            Err(err) => println!("  {:>12.6} -> error: {}", value, err),
        }
    }

    // Parsing
    println!("\n=== Parsing ===");
    for text in ["M CM LX III", "M̅M̅ C̅M̅ X̅L̅ V̅I̅I̅ D LX IX", "IIS:ΣƵ⸩⸩⸩⸩⸩", "CMCMCMC"] {
        match from_roman(text) {
            Ok(value) => println!("  {} -> {}", text, value),
            Err(err) => println!("  {} -> error: {}", text, err),
        }
    }

    // Out of range
    println!("\n=== Range ===");
    if let Err(err) = to_roman(NUMERUS_MAXIMUS + 1.0, &spaced) {
        println!("  {}", err);
    }
}
