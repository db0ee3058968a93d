// ============================================================================
// Symbol Table
// Ordered magnitude groups driving both codec directions
// ============================================================================

use super::symbols::{
    CENTUM, DECEM, DIMIDIA_SEXTULA, MILLE, QUINGENTI, QUINQUAGINTA, QUINQUE, SCRIPULUM, SEMIS,
    SEMUNCIA, SEXTULA, SICILICUS, SILIQUA, UNCIAE, UNUS, VINCULUM,
};
use crate::numeric::{Siliquae, SILIQUAE_PER_UNUM};
use arrayvec::ArrayVec;
use std::sync::LazyLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Most numerals a single magnitude group may hold (I through IX).
pub const MAX_GROUP_LEN: usize = 9;

/// Numerals sharing one order of magnitude.
///
/// `numerals[i]` is worth `(i + 1) × order` siliquae, so values grow with
/// the index.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMagnitude"))]
pub struct Magnitude {
    order: Siliquae,
    numerals: ArrayVec<String, MAX_GROUP_LEN>,
}

impl Magnitude {
    /// Create a group from its order and its numerals, smallest first.
    ///
    /// # Errors
    /// Returns a description of the problem if the group is empty, holds
    /// more than [`MAX_GROUP_LEN`] numerals, has a zero order, contains an
    /// empty numeral, or its largest value does not fit in a `u64`.
    pub fn new<I, S>(order: Siliquae, numerals: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if order.is_zero() {
            return Err("magnitude order must be positive".to_string());
        }
        let mut group: ArrayVec<String, MAX_GROUP_LEN> = ArrayVec::new();
        for numeral in numerals {
            let numeral = numeral.into();
            if numeral.is_empty() {
                return Err(format!("empty numeral in magnitude {}", order.raw_value()));
            }
            group.try_push(numeral).map_err(|_| {
                format!(
                    "magnitude {} holds more than {} numerals",
                    order.raw_value(),
                    MAX_GROUP_LEN
                )
            })?;
        }
        if group.is_empty() {
            return Err(format!("magnitude {} has no numerals", order.raw_value()));
        }
        if order.raw_value().checked_mul(group.len() as u64).is_none() {
            return Err(format!(
                "magnitude {} overflows with {} numerals",
                order.raw_value(),
                group.len()
            ));
        }
        Ok(Self {
            order,
            numerals: group,
        })
    }

    /// Value of one step in this group
    #[inline]
    pub fn order(&self) -> Siliquae {
        self.order
    }

    /// Numerals, smallest value first
    #[inline]
    pub fn numerals(&self) -> &[String] {
        &self.numerals
    }

    /// Value of the numeral at `index`.
    ///
    /// Saturates for indices past the end of the group.
    #[inline]
    pub fn value_at(&self, index: usize) -> Siliquae {
        Siliquae::from_raw(self.order.raw_value().saturating_mul(index as u64 + 1))
    }

    /// Value of the largest numeral in the group.
    #[inline]
    pub fn largest(&self) -> Siliquae {
        self.value_at(self.numerals.len() - 1)
    }
}

/// Immutable, ordered list of magnitude groups, largest order first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTable"))]
pub struct NumeralTable {
    magnitudes: Vec<Magnitude>,
}

static STANDARD: LazyLock<NumeralTable> = LazyLock::new(|| {
    let table = NumeralTable {
        magnitudes: standard_magnitudes(),
    };
    tracing::debug!(
        groups = table.magnitudes.len(),
        symbols = table.symbol_count(),
        "built standard numeral table"
    );
    table
});

impl NumeralTable {
    /// Create a table from caller-built groups.
    ///
    /// # Errors
    /// Returns a description of the problem if there are no groups, the
    /// orders are not strictly descending, or the largest writable value
    /// does not fit in a `u64`.
    pub fn new(magnitudes: Vec<Magnitude>) -> Result<Self, String> {
        if magnitudes.is_empty() {
            return Err("numeral table must have at least one magnitude".to_string());
        }
        for pair in magnitudes.windows(2) {
            if pair[1].order >= pair[0].order {
                return Err(format!(
                    "magnitude orders must be strictly descending ({} then {})",
                    pair[0].order.raw_value(),
                    pair[1].order.raw_value()
                ));
            }
        }
        magnitudes
            .iter()
            .try_fold(Siliquae::ZERO, |total, m| total.checked_add(m.largest()))
            .ok_or_else(|| "numeral table capacity overflows".to_string())?;
        Ok(Self { magnitudes })
    }

    /// The vinculum-and-fractions table, built on first use.
    pub fn standard() -> &'static NumeralTable {
        &STANDARD
    }

    #[inline]
    pub fn magnitudes(&self) -> &[Magnitude] {
        &self.magnitudes
    }

    /// Total numerals across all groups
    pub fn symbol_count(&self) -> usize {
        self.magnitudes.iter().map(|m| m.numerals.len()).sum()
    }

    /// Largest quantity the table can write: one largest numeral per group.
    ///
    /// Quantities below this may still lack an exact spelling when the
    /// orders leave gaps.
    pub fn capacity(&self) -> Siliquae {
        self.magnitudes
            .iter()
            .fold(Siliquae::ZERO, |total, m| total.saturating_add(m.largest()))
    }
}

// ============================================================================
// Validated Deserialization
// ============================================================================

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawMagnitude {
    order: Siliquae,
    numerals: Vec<String>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMagnitude> for Magnitude {
    type Error = String;

    fn try_from(raw: RawMagnitude) -> Result<Self, Self::Error> {
        Magnitude::new(raw.order, raw.numerals)
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawTable {
    magnitudes: Vec<Magnitude>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTable> for NumeralTable {
    type Error = String;

    fn try_from(raw: RawTable) -> Result<Self, Self::Error> {
        NumeralTable::new(raw.magnitudes)
    }
}

// ============================================================================
// Generation
// ============================================================================

/// `glyph` written `n` times.
fn repeat(glyph: &str, n: usize) -> String {
    glyph.repeat(n)
}

/// `glyph` written once, twice, ... up to `n` times.
fn runs(glyph: &str, n: usize) -> ArrayVec<String, MAX_GROUP_LEN> {
    (1..=n).map(|count| repeat(glyph, count)).collect()
}

/// Overline every char of `s`.
fn vinculum(s: &str) -> String {
    s.chars().flat_map(|c| [c, VINCULUM]).collect()
}

/// The nine-step sequence I, II, III, IV, V, VI, VII, VIII, IX.
fn standard_run(one: &str, five: &str, ten: &str) -> ArrayVec<String, MAX_GROUP_LEN> {
    let mut run = runs(one, 3);
    run.push(format!("{one}{five}"));
    run.push(five.to_string());
    for count in 1..=3 {
        run.push(format!("{five}{}", repeat(one, count)));
    }
    run.push(format!("{one}{ten}"));
    run
}

fn glyph(c: char) -> String {
    c.to_string()
}

fn overlined(c: char) -> String {
    vinculum(&glyph(c))
}

fn group(order: u64, numerals: ArrayVec<String, MAX_GROUP_LEN>) -> Magnitude {
    Magnitude {
        order: Siliquae::from_raw(order),
        numerals,
    }
}

fn single(order: u64, c: char) -> Magnitude {
    group(order, std::iter::once(glyph(c)).collect())
}

fn standard_magnitudes() -> Vec<Magnitude> {
    let unum = SILIQUAE_PER_UNUM;
    let (m, d, c, l, x, v, i) = (
        glyph(MILLE),
        glyph(QUINGENTI),
        glyph(CENTUM),
        glyph(QUINQUAGINTA),
        glyph(DECEM),
        glyph(QUINQUE),
        glyph(UNUS),
    );

    vec![
        // Thousands and above use the vinculum rather than apostrophus forms
        group(unum * 1_000_000, runs(&overlined(MILLE), 3)),
        group(
            unum * 100_000,
            standard_run(&overlined(CENTUM), &overlined(QUINGENTI), &overlined(MILLE)),
        ),
        group(
            unum * 10_000,
            standard_run(&overlined(DECEM), &overlined(QUINQUAGINTA), &overlined(CENTUM)),
        ),
        group(
            unum * 1_000,
            standard_run(&overlined(UNUS), &overlined(QUINQUE), &overlined(DECEM)),
        ),
        group(unum * 100, standard_run(&c, &d, &m)),
        group(unum * 10, standard_run(&x, &l, &c)),
        group(unum, standard_run(&i, &v, &x)),
        // Fractions
        single(unum / 2, SEMIS),
        group(unum / 12, UNCIAE.iter().copied().map(glyph).collect()),
        single(unum / 24, SEMUNCIA),
        group(unum / 36, runs(&glyph(SICILICUS), 2)),
        single(unum / 72, SEXTULA),
        single(unum / 144, DIMIDIA_SEXTULA),
        single(unum / 288, SCRIPULUM),
        group(1, runs(&glyph(SILIQUA), 5)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numerals_of(order: u64) -> Vec<String> {
        NumeralTable::standard()
            .magnitudes()
            .iter()
            .find(|m| m.order().raw_value() == order)
            .map(|m| m.numerals().to_vec())
            .unwrap()
    }

    #[test]
    fn test_standard_orders_descend() {
        let orders: Vec<u64> = NumeralTable::standard()
            .magnitudes()
            .iter()
            .map(|m| m.order().raw_value())
            .collect();
        assert_eq!(
            orders,
            vec![
                1_728_000_000,
                172_800_000,
                17_280_000,
                1_728_000,
                172_800,
                17_280,
                1_728,
                864,
                144,
                72,
                48,
                24,
                12,
                6,
                1
            ]
        );
        assert_eq!(NumeralTable::standard().symbol_count(), 3 + 9 * 6 + 1 + 5 + 1 + 2 + 1 + 1 + 1 + 5);
    }

    #[test]
    fn test_standard_run() {
        assert_eq!(
            numerals_of(1728),
            vec!["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"]
        );
        assert_eq!(
            numerals_of(172_800),
            vec!["C", "CC", "CCC", "CD", "D", "DC", "DCC", "DCCC", "CM"]
        );
    }

    #[test]
    fn test_vinculum_groups() {
        assert_eq!(numerals_of(1_728_000_000), vec!["M̅", "M̅M̅", "M̅M̅M̅"]);
        let thousands = numerals_of(1_728_000);
        assert_eq!(thousands[0], "I̅");
        assert_eq!(thousands[3], "I̅V̅");
        assert_eq!(thousands[8], "I̅X̅");
        assert_eq!(numerals_of(172_800_000)[8], "C̅M̅");
    }

    #[test]
    fn test_fraction_groups() {
        assert_eq!(numerals_of(864), vec!["S"]);
        assert_eq!(numerals_of(144), vec!["·", ":", "∴", "∷", "⁙"]);
        assert_eq!(numerals_of(48), vec!["Ↄ", "ↃↃ"]);
        assert_eq!(numerals_of(1), vec!["⸩", "⸩⸩", "⸩⸩⸩", "⸩⸩⸩⸩", "⸩⸩⸩⸩⸩"]);
    }

    #[test]
    fn test_magnitude_values() {
        let units = &NumeralTable::standard().magnitudes()[6];
        assert_eq!(units.value_at(0), Siliquae::ONE);
        assert_eq!(units.largest().raw_value(), 9 * 1728);
    }

    #[test]
    fn test_custom_table_validation() {
        let ones = Magnitude::new(Siliquae::ONE, ["I", "II", "III"]).unwrap();
        let fives = Magnitude::new(Siliquae::from_raw(5 * 1728), ["V"]).unwrap();

        assert!(NumeralTable::new(vec![fives.clone(), ones.clone()]).is_ok());
        assert!(NumeralTable::new(vec![ones, fives]).is_err());
        assert!(NumeralTable::new(Vec::new()).is_err());
    }

    #[test]
    fn test_magnitude_validation() {
        assert!(Magnitude::new(Siliquae::ZERO, ["I"]).is_err());
        assert!(Magnitude::new(Siliquae::ONE, Vec::<String>::new()).is_err());
        assert!(Magnitude::new(Siliquae::ONE, ["I", ""]).is_err());
        assert!(Magnitude::new(Siliquae::ONE, ["I"; 10]).is_err());
        assert!(Magnitude::new(Siliquae::from_raw(u64::MAX / 2 + 1), ["A", "B"]).is_err());
        assert!(Magnitude::new(Siliquae::from_raw(u64::MAX / 2), ["A", "B"]).is_ok());
    }

    #[test]
    fn test_table_capacity() {
        assert_eq!(NumeralTable::standard().capacity().raw_value(), 6_912_000_071);
        assert!(NumeralTable::standard().capacity() > Siliquae::MAX);

        let huge = Magnitude::new(Siliquae::from_raw(1 << 63), ["A"]).unwrap();
        let large = Magnitude::new(Siliquae::from_raw(1 << 62), ["B", "C"]).unwrap();
        assert!(NumeralTable::new(vec![huge, large]).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates() {
        let ok: Magnitude = serde_json::from_str(r#"{"order":1728,"numerals":["I","II"]}"#).unwrap();
        assert_eq!(ok.largest().raw_value(), 3456);

        assert!(serde_json::from_str::<Magnitude>(r#"{"order":1728,"numerals":[]}"#).is_err());
        assert!(serde_json::from_str::<Magnitude>(
            r#"{"order":9223372036854775808,"numerals":["A","B"]}"#
        )
        .is_err());
        assert!(serde_json::from_str::<NumeralTable>(
            r#"{"magnitudes":[{"order":1,"numerals":["I"]},{"order":10,"numerals":["X"]}]}"#
        )
        .is_err());

        let json = serde_json::to_string(NumeralTable::standard()).unwrap();
        let table: NumeralTable = serde_json::from_str(&json).unwrap();
        assert_eq!(&table, NumeralTable::standard());
    }
}
