// ============================================================================
// Magnitude Walker
// Descending traversal of every numeral in a table
// ============================================================================

use crate::domain::NumeralTable;
use crate::interfaces::{NumeralVisitor, Token, Visit};

/// Feed every numeral of `table` to `visitor`, largest value first.
///
/// Groups are walked from the largest order down; inside a group the
/// numerals are walked from the highest index down. The visitor steers the
/// walk through the returned [`Visit`]. The visitor is handed back once
/// the walk ends so stateful visitors can be inspected.
///
/// # Example
/// ```
/// use roman_numerals::domain::NumeralTable;
/// use roman_numerals::engine::for_each_numeral;
/// use roman_numerals::interfaces::{Token, Visit};
///
/// let mut largest = Vec::new();
/// for_each_numeral(NumeralTable::standard(), |token: Token<'_>| {
///     largest.push(token.numeral.to_string());
///     Visit::SkipGroup
/// });
/// assert_eq!(largest[0], "M̅M̅M̅");
/// assert_eq!(largest[6], "IX");
/// ```
pub fn for_each_numeral<'t, V>(table: &'t NumeralTable, mut visitor: V) -> V
where
    V: NumeralVisitor<'t>,
{
    'groups: for magnitude in table.magnitudes() {
        for (index, numeral) in magnitude.numerals().iter().enumerate().rev() {
            let siliquae = magnitude.value_at(index);
            let token = Token {
                numeral: numeral.as_str(),
                siliquae,
                unae: siliquae.to_f64(),
            };
            match visitor.visit(token) {
                Visit::Continue => {},
                Visit::SkipGroup => continue 'groups,
                Visit::Stop => return visitor,
            }
        }
    }
    visitor
}
