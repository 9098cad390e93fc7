//! Cell location parsing and formatting.
//!
//! Converts between `(row, column)` pairs and addresses made of a single
//! column letter followed by the row number. Rows are not shifted: row 3,
//! column 2 is `C3` and row 0, column 0 is `A0`.
//!
//! # Examples
//!
//! ```
//! use sheep_engine::engine::CellLocation;
//!
//! let cell = CellLocation::parse("C3").unwrap();
//! assert_eq!(cell.row(), 3);
//! assert_eq!(cell.column(), 2);
//! assert_eq!(cell.to_string(), "C3");
//! ```

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Columns are addressed by a single letter, `A` to `Z`.
pub const MAX_COLUMNS: usize = 26;

/// A cell position in the grid.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct CellLocation {
    row: usize,
    column: usize,
}

impl CellLocation {
    /// Returns `None` when `column` has no letter.
    pub fn new(row: usize, column: usize) -> Option<CellLocation> {
        (column < MAX_COLUMNS).then_some(CellLocation { row, column })
    }

    /// Build a location from an uppercase column letter.
    pub fn from_letter(row: usize, letter: char) -> Option<CellLocation> {
        if !letter.is_ascii_uppercase() {
            return None;
        }
        Self::new(row, (letter as u8 - b'A') as usize)
    }

    /// Parse an address such as `C3`. Anything other than exactly one
    /// uppercase letter followed by digits is rejected.
    pub fn parse(text: &str) -> Option<CellLocation> {
        let caps = address_re().captures(text)?;
        let letter = caps["letter"].chars().next()?;
        let row = caps["row"].parse::<usize>().ok()?;
        Self::from_letter(row, letter)
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }
}

/// The letter naming `column`, if any.
pub fn column_letter(column: usize) -> Option<char> {
    (column < MAX_COLUMNS).then(|| (b'A' + column as u8) as char)
}

fn address_re() -> &'static Regex {
    static ADDRESS_RE: OnceLock<Regex> = OnceLock::new();
    ADDRESS_RE.get_or_init(|| {
        Regex::new(r"^(?<letter>[A-Z])(?<row>[0-9]+)$").expect("cell address regex must compile")
    })
}

impl std::str::FromStr for CellLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid cell reference: {}", s))
    }
}

impl fmt::Display for CellLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `new` guarantees the column has a letter.
        let letter = column_letter(self.column).unwrap_or('?');
        write!(f, "{}{}", letter, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips() {
        let c3 = CellLocation::parse("C3").unwrap();
        assert_eq!(c3.row(), 3);
        assert_eq!(c3.column(), 2);
        assert_eq!(c3.to_string(), "C3");

        let z120 = CellLocation::parse("Z120").unwrap();
        assert_eq!(z120.column(), 25);
        assert_eq!(z120.to_string(), "Z120");

        assert_eq!(CellLocation::parse("A0"), CellLocation::new(0, 0));
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        for text in ["3C", "c3", "C 3", "", "C", "AB1", "C3x", " C3", "C-3", "Ç3"] {
            assert!(CellLocation::parse(text).is_none(), "accepted {:?}", text);
        }
    }

    #[test]
    fn test_parse_rejects_row_overflow() {
        let huge = format!("A{}", "9".repeat(40));
        assert!(CellLocation::parse(&huge).is_none());
    }

    #[test]
    fn test_constructors_agree() {
        assert_eq!(CellLocation::new(4, 1), CellLocation::from_letter(4, 'B'));
        assert!(CellLocation::new(0, 26).is_none());
        assert!(CellLocation::from_letter(0, 'b').is_none());
    }

    #[test]
    fn test_from_str_error_message() {
        let err = "1A".parse::<CellLocation>().unwrap_err();
        assert_eq!(err, "Invalid cell reference: 1A");
    }

    #[test]
    fn test_column_letter() {
        assert_eq!(column_letter(0), Some('A'));
        assert_eq!(column_letter(25), Some('Z'));
        assert_eq!(column_letter(26), None);
    }
}
