// ============================================================================
// Prefix Decoder
// Numeral -> quantity, greedy per-magnitude prefix matching
// ============================================================================

use super::walker::for_each_numeral;
use crate::domain::symbols::{CENTUM, MILLE, NULLA, UNUS, VINCULUM};
use crate::domain::NumeralTable;
use crate::interfaces::{NumeralVisitor, Token, Visit};
use crate::numeric::{CodecError, CodecResult, Siliquae};

/// Numeral text prepared for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Normalized {
    text: String,
    /// Char offset in the caller's input for every char of `text`
    origins: Vec<usize>,
}

/// Strip whitespace and rewrite a bare `M` as `I̅`.
///
/// The table holds a thousand as `I̅`, so a classical `M` has to be
/// translated before matching. `CM` (nine hundred) and `M̅` (a million)
/// keep their `M`.
fn normalize(numeral: &str) -> Normalized {
    let chars: Vec<(usize, char)> = numeral
        .chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .collect();

    let mut text = String::with_capacity(numeral.len() + 4);
    let mut origins = Vec::with_capacity(chars.len() + 4);

    for (k, &(origin, c)) in chars.iter().enumerate() {
        let after_centum = k > 0 && chars[k - 1].1 == CENTUM;
        let before_vinculum = chars.get(k + 1).is_some_and(|&(_, next)| next == VINCULUM);

        if c == MILLE && !after_centum && !before_vinculum {
            text.push(UNUS);
            text.push(VINCULUM);
            origins.extend([origin, origin]);
        } else {
            text.push(c);
            origins.push(origin);
        }
    }

    Normalized { text, origins }
}

/// Visitor that consumes the longest table numeral starting the text,
/// at most once per magnitude group.
struct PrefixMatcher<'t, 'n> {
    rest: &'n str,
    consumed: usize,
    sum: Siliquae,
    last: Option<&'t str>,
}

impl<'t> NumeralVisitor<'t> for PrefixMatcher<'t, '_> {
    fn visit(&mut self, token: Token<'t>) -> Visit {
        let Some(tail) = self.rest.strip_prefix(token.numeral) else {
            return Visit::Continue;
        };

        tracing::trace!(numeral = token.numeral, value = token.unae, "matched");
        self.rest = tail;
        self.consumed += token.numeral.chars().count();
        self.sum = self.sum.saturating_add(token.siliquae);
        self.last = Some(token.numeral);

        if tail.is_empty() {
            Visit::Stop
        } else {
            Visit::SkipGroup
        }
    }
}

/// Read `numeral` with the numerals of `table`.
///
/// # Errors
/// Returns `Malformed` when text is left over after the walk.
pub(crate) fn decode(table: &NumeralTable, numeral: &str) -> CodecResult<Siliquae> {
    let normalized = normalize(numeral);
    if normalized.text == NULLA {
        return Ok(Siliquae::ZERO);
    }

    let matcher = for_each_numeral(
        table,
        PrefixMatcher {
            rest: &normalized.text,
            consumed: 0,
            sum: Siliquae::ZERO,
            last: None,
        },
    );

    if matcher.rest.is_empty() {
        return Ok(matcher.sum);
    }

    Err(CodecError::Malformed {
        numeral: numeral.to_string(),
        remainder: matcher.rest.to_string(),
        index: normalized.origins[matcher.consumed],
        last: matcher.last.map(str::to_string),
    })
}
