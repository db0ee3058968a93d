// ============================================================================
// Numeral Glyphs
// The literal symbols the symbol table is generated from
// ============================================================================

/// Combining overline (U+0305); multiplies the preceding glyph by 1,000.
pub const VINCULUM: char = '\u{0305}';
pub const MILLE: char = 'M';
pub const QUINGENTI: char = 'D';
pub const CENTUM: char = 'C';
pub const QUINQUAGINTA: char = 'L';
pub const DECEM: char = 'X';
pub const QUINQUE: char = 'V';
pub const UNUS: char = 'I';

/// One half
pub const SEMIS: char = 'S';
/// One to five twelfths
pub const UNCIAE: [char; 5] = ['·', ':', '∴', '∷', '⁙'];
/// One twenty-fourth
pub const SEMUNCIA: char = 'Σ';
/// One thirty-sixth
pub const SICILICUS: char = 'Ↄ';
/// One seventy-second
pub const SEXTULA: char = 'Ƨ';
/// One hundred-forty-fourth
pub const DIMIDIA_SEXTULA: char = 'Ƶ';
/// One two-hundred-eighty-eighth
pub const SCRIPULUM: char = '℈';
/// One seventeen-hundred-twenty-eighth
pub const SILIQUA: char = '⸩';

/// Zero, after the initial of *nulla*.
pub const NULLA: &str = "N";

/// Thousand written with a vinculum, as the table stores it below 4,000.
pub const SEMEL_MILLE: &str = "I\u{0305}";
