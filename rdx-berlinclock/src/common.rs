//! Contains the primitive display types shared by every clock face.
//!
//! A `Lamp` is a single light on the clock and a `LampRow` is a fixed-length
//! strip of them. Rows are built with [`LampRow::filled`], which lights a
//! prefix of the row and switches the rest off.

use std::fmt;

/// A single light on the clock face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lamp {
    Yellow,
    Red,
    Off,
}

impl Lamp {
    /// The printable symbol for this lamp.
    pub const fn symbol(self) -> char {
        match self {
            Lamp::Yellow => 'Y',
            Lamp::Red => 'R',
            Lamp::Off => 'O',
        }
    }

    /// Returns `true` for any lamp that is switched on.
    pub const fn is_lit(self) -> bool {
        !matches!(self, Lamp::Off)
    }
}

impl From<Lamp> for char {
    fn from(lamp: Lamp) -> Self {
        lamp.symbol()
    }
}

impl fmt::Display for Lamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An ordered strip of lamps, rendered left to right.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LampRow {
    lamps: Vec<Lamp>,
}

impl LampRow {
    /// Builds a row of `len` lamps where the first `lit` are `lamp` and the
    /// remainder are `Off`.
    ///
    /// `lit` is clamped to `len`.
    pub fn filled(lamp: Lamp, lit: usize, len: usize) -> Self {
        let lit = lit.min(len);
        let lamps = std::iter::repeat(lamp)
            .take(lit)
            .chain(std::iter::repeat(Lamp::Off).take(len - lit))
            .collect();
        Self { lamps }
    }

    /// The lamps in display order.
    pub fn lamps(&self) -> &[Lamp] {
        &self.lamps
    }

    pub fn len(&self) -> usize {
        self.lamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lamps.is_empty()
    }

    /// Number of lamps in this row that are exactly `lamp`.
    pub fn count(&self, lamp: Lamp) -> usize {
        self.lamps.iter().filter(|&&l| l == lamp).count()
    }

    /// Number of lamps in this row that are switched on, regardless of colour.
    pub fn lit_count(&self) -> usize {
        self.lamps.iter().filter(|l| l.is_lit()).count()
    }
}

impl FromIterator<Lamp> for LampRow {
    fn from_iter<I: IntoIterator<Item = Lamp>>(iter: I) -> Self {
        Self {
            lamps: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for LampRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.lamps.iter().try_for_each(|lamp| write!(f, "{lamp}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_match_lamp_colours() {
        assert_eq!(char::from(Lamp::Yellow), 'Y');
        assert_eq!(char::from(Lamp::Red), 'R');
        assert_eq!(char::from(Lamp::Off), 'O');
    }

    #[test]
    fn filled_lights_prefix_and_pads_with_off() {
        let row = LampRow::filled(Lamp::Red, 3, 4);
        assert_eq!(row.to_string(), "RRRO");
        assert_eq!(row.count(Lamp::Red), 3);
        assert_eq!(row.lit_count(), 3);
    }

    #[test]
    fn filled_handles_empty_and_full_rows() {
        assert_eq!(LampRow::filled(Lamp::Yellow, 0, 4).to_string(), "OOOO");
        assert_eq!(LampRow::filled(Lamp::Yellow, 4, 4).to_string(), "YYYY");
        assert!(LampRow::filled(Lamp::Yellow, 0, 0).is_empty());
    }

    #[test]
    fn filled_clamps_overflow_to_row_length() {
        let row = LampRow::filled(Lamp::Red, 9, 4);
        assert_eq!(row.len(), 4);
        assert_eq!(row.to_string(), "RRRR");
    }

    #[test]
    fn collected_row_keeps_order() {
        let row: LampRow = [Lamp::Yellow, Lamp::Red, Lamp::Off].into_iter().collect();
        assert_eq!(row.to_string(), "YRO");
        assert_eq!(row.lit_count(), 2);
    }
}
