//! Cell address and range types
//!
//! Rows and columns are 1-based throughout, matching both the A1 display
//! form and the attribute values SpreadsheetML expects (`r="5"`,
//! `spans="1:3"`).

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A cell address (e.g., "A1", "$B$2")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellAddress {
    /// Row number (1-based)
    pub row: u32,
    /// Column number (1-based, A=1, B=2, ..., XFD=16384)
    pub col: u16,
}

impl CellAddress {
    /// Create a new cell address
    pub fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// Parse a cell address from A1-style notation
    ///
    /// `$` markers are accepted and discarded; the model does not track
    /// absolute/relative, the serializer decides per context.
    ///
    /// # Examples
    /// ```
    /// use gridforge_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("A1").unwrap();
    /// assert_eq!(addr.row, 1);
    /// assert_eq!(addr.col, 1);
    ///
    /// let addr = CellAddress::parse("$D$9").unwrap();
    /// assert_eq!(addr.row, 9);
    /// assert_eq!(addr.col, 4);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty address".into()));
        }

        let bytes = s.as_bytes();
        let mut pos = 0;

        if bytes.get(pos) == Some(&b'$') {
            pos += 1;
        }

        let col_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
            pos += 1;
        }

        if pos == col_start {
            return Err(Error::InvalidAddress(format!(
                "no column letters in '{}'",
                s
            )));
        }

        let col = Self::letters_to_column(&s[col_start..pos])?;

        if bytes.get(pos) == Some(&b'$') {
            pos += 1;
        }

        let row_str = &s[pos..];
        if row_str.is_empty() {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
        }

        let row: u32 = row_str
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

        if row == 0 {
            return Err(Error::InvalidAddress(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }
        if row > MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS));
        }

        Ok(Self { row, col })
    }

    /// Convert a column number to letters (1 = A, 26 = Z, 27 = AA, etc.)
    pub fn column_to_letters(col: u16) -> String {
        let mut result = String::new();
        let mut n = col as u32;

        while n > 0 {
            n -= 1;
            let c = ((n % 26) as u8 + b'A') as char;
            result.insert(0, c);
            n /= 26;
        }

        result
    }

    /// Convert column letters to a column number (A = 1, Z = 26, AA = 27, etc.)
    pub fn letters_to_column(letters: &str) -> Result<u16> {
        if letters.is_empty() {
            return Err(Error::InvalidAddress("empty column letters".into()));
        }

        let mut col: u32 = 0;
        for c in letters.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(Error::InvalidAddress(format!(
                    "invalid column letter '{}'",
                    c
                )));
            }
            col = col * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
            // Bounding each step keeps the accumulator well inside u32 range
            // no matter how many letters the input carries.
            if col > MAX_COLS as u32 {
                return Err(Error::ColumnOutOfBounds(MAX_COLS, MAX_COLS));
            }
        }

        Ok(col as u16)
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", Self::column_to_letters(self.col), self.row)
    }

    /// Format as an absolute reference ($D$9)
    pub fn to_absolute_string(&self) -> String {
        format!("${}${}", Self::column_to_letters(self.col), self.row)
    }

    /// Order two addresses by column first, then row.
    ///
    /// Used to sort a row's cell references into emission order.
    pub fn by_column(a: &CellAddress, b: &CellAddress) -> Ordering {
        a.col.cmp(&b.col).then(a.row.cmp(&b.row))
    }

    /// Create a range from this address to another
    pub fn to(&self, other: CellAddress) -> CellRange {
        CellRange::new(*self, other)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A rectangular range of cells (e.g., "A1:B10")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    /// Start address (top-left)
    pub start: CellAddress,
    /// End address (bottom-right)
    pub end: CellAddress,
}

impl CellRange {
    /// Create a new cell range, normalized so start is top-left
    pub fn new(start: CellAddress, end: CellAddress) -> Self {
        let (start_row, end_row) = if start.row <= end.row {
            (start.row, end.row)
        } else {
            (end.row, start.row)
        };
        let (start_col, end_col) = if start.col <= end.col {
            (start.col, end.col)
        } else {
            (end.col, start.col)
        };

        Self {
            start: CellAddress::new(start_row, start_col),
            end: CellAddress::new(end_row, end_col),
        }
    }

    /// Create a range from row/column numbers
    pub fn from_indices(start_row: u32, start_col: u16, end_row: u32, end_col: u16) -> Self {
        Self::new(
            CellAddress::new(start_row, start_col),
            CellAddress::new(end_row, end_col),
        )
    }

    /// Create a single-cell range
    pub fn single(addr: CellAddress) -> Self {
        Self {
            start: addr,
            end: addr,
        }
    }

    /// Parse a range from A1:B10 notation (a bare address is a single-cell range)
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Some(colon_pos) = s.find(':') {
            let start = CellAddress::parse(&s[..colon_pos])?;
            let end = CellAddress::parse(&s[colon_pos + 1..])?;
            Ok(Self::new(start, end))
        } else {
            let addr = CellAddress::parse(s)?;
            Ok(Self::single(addr))
        }
    }

    /// Check if a cell is within this range
    pub fn contains(&self, addr: &CellAddress) -> bool {
        addr.row >= self.start.row
            && addr.row <= self.end.row
            && addr.col >= self.start.col
            && addr.col <= self.end.col
    }

    /// Check if this range overlaps another
    pub fn overlaps(&self, other: &CellRange) -> bool {
        self.start.row <= other.end.row
            && self.end.row >= other.start.row
            && self.start.col <= other.end.col
            && self.end.col >= other.start.col
    }

    /// Format as A1:B10 string (single-cell ranges collapse to one address)
    pub fn to_a1_string(&self) -> String {
        if self.start == self.end {
            self.start.to_a1_string()
        } else {
            format!("{}:{}", self.start.to_a1_string(), self.end.to_a1_string())
        }
    }

    /// Format as an absolute reference ($A$1:$B$10)
    pub fn to_absolute_string(&self) -> String {
        format!(
            "{}:{}",
            self.start.to_absolute_string(),
            self.end.to_absolute_string()
        )
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_to_letters() {
        assert_eq!(CellAddress::column_to_letters(1), "A");
        assert_eq!(CellAddress::column_to_letters(2), "B");
        assert_eq!(CellAddress::column_to_letters(26), "Z");
        assert_eq!(CellAddress::column_to_letters(27), "AA");
        assert_eq!(CellAddress::column_to_letters(28), "AB");
        assert_eq!(CellAddress::column_to_letters(702), "ZZ");
        assert_eq!(CellAddress::column_to_letters(703), "AAA");
        assert_eq!(CellAddress::column_to_letters(16384), "XFD"); // Max Excel column
    }

    #[test]
    fn test_letters_to_column() {
        assert_eq!(CellAddress::letters_to_column("A").unwrap(), 1);
        assert_eq!(CellAddress::letters_to_column("Z").unwrap(), 26);
        assert_eq!(CellAddress::letters_to_column("AA").unwrap(), 27);
        assert_eq!(CellAddress::letters_to_column("ZZ").unwrap(), 702);
        assert_eq!(CellAddress::letters_to_column("XFD").unwrap(), 16384);

        // Case insensitive
        assert_eq!(CellAddress::letters_to_column("a").unwrap(), 1);
        assert_eq!(CellAddress::letters_to_column("aa").unwrap(), 27);
    }

    #[test]
    fn test_parse() {
        let addr = CellAddress::parse("A1").unwrap();
        assert_eq!((addr.row, addr.col), (1, 1));

        let addr = CellAddress::parse("$B$2").unwrap();
        assert_eq!((addr.row, addr.col), (2, 2));

        let addr = CellAddress::parse("XFD1048576").unwrap();
        assert_eq!((addr.row, addr.col), (1_048_576, 16_384));
    }

    #[test]
    fn test_parse_errors() {
        assert!(CellAddress::parse("").is_err());
        assert!(CellAddress::parse("A").is_err());
        assert!(CellAddress::parse("1").is_err());
        assert!(CellAddress::parse("A0").is_err()); // Row 0 is invalid
        assert!(CellAddress::parse("A1048577").is_err()); // Row too large
        assert!(CellAddress::parse("XFE1").is_err()); // Column too large
    }

    #[test]
    fn test_long_letter_runs_rejected() {
        // Runs far past XFD must error, not wrap the accumulator
        assert!(CellAddress::letters_to_column("ZZZZZZZZ").is_err());
        assert!(CellAddress::parse("ZZZZZZZZ1").is_err());
        assert!(CellRange::parse("A1:ZZZZZZZZZZZZ9").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(CellAddress::new(1, 1).to_string(), "A1");
        assert_eq!(CellAddress::new(100, 3).to_string(), "C100");
        assert_eq!(CellAddress::new(9, 4).to_absolute_string(), "$D$9");
    }

    #[test]
    fn test_by_column_ordering() {
        let mut refs = vec![
            CellAddress::parse("C2").unwrap(),
            CellAddress::parse("A2").unwrap(),
            CellAddress::parse("B2").unwrap(),
        ];
        refs.sort_by(CellAddress::by_column);
        let sorted: Vec<String> = refs.iter().map(|a| a.to_a1_string()).collect();
        assert_eq!(sorted, vec!["A2", "B2", "C2"]);
    }

    #[test]
    fn test_range_parse_and_normalize() {
        let range = CellRange::parse("A1:B2").unwrap();
        assert_eq!(range.start, CellAddress::new(1, 1));
        assert_eq!(range.end, CellAddress::new(2, 2));

        // Reversed corners normalize
        let range = CellRange::new(CellAddress::new(5, 3), CellAddress::new(2, 1));
        assert_eq!(range.to_a1_string(), "A2:C5");

        // Single cell
        let range = CellRange::parse("C3").unwrap();
        assert_eq!(range.start, range.end);
    }

    #[test]
    fn test_range_overlaps() {
        let a = CellRange::parse("A1:C3").unwrap();
        let b = CellRange::parse("B2:D4").unwrap();
        let c = CellRange::parse("E1:F2").unwrap();
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_range_absolute() {
        let range = CellRange::parse("A5:C7").unwrap();
        assert_eq!(range.to_absolute_string(), "$A$5:$C$7");
    }
}
