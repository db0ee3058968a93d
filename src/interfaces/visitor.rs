// ============================================================================
// Numeral Visitor Interface
// Contract between the magnitude walker and whoever consumes its tokens
// ============================================================================

use crate::numeric::Siliquae;

/// What the walker should do after a token has been visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visit {
    /// Try the next smaller numeral in the same group
    Continue,
    /// Done with this group; move on to the next smaller one
    SkipGroup,
    /// Abort the walk
    Stop,
}

/// One numeral of the table together with its value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'t> {
    /// The numeral text, e.g. `"XC"` or `"I̅V̅"`
    pub numeral: &'t str,
    /// Exact value
    pub siliquae: Siliquae,
    /// Value in whole units
    pub unae: f64,
}

/// Receives every token in strictly descending value order.
///
/// Implemented for any `FnMut(Token<'t>) -> Visit`, so a closure is enough
/// for one-off walks.
pub trait NumeralVisitor<'t> {
    fn visit(&mut self, token: Token<'t>) -> Visit;
}

impl<'t, F> NumeralVisitor<'t> for F
where
    F: FnMut(Token<'t>) -> Visit,
{
    #[inline]
    fn visit(&mut self, token: Token<'t>) -> Visit {
        self(token)
    }
}
