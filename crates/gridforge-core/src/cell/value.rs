//! Cell value types

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use std::fmt;

/// Represents the value stored in a cell
///
/// Strings are normally interned into the workbook's shared string table
/// ([`CellValue::Shared`] carries the index); [`CellValue::Inline`] is the
/// escape hatch for one-off strings that bypass the table.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Empty cell (style-only)
    Empty,

    /// Boolean value (TRUE/FALSE)
    Boolean(bool),

    /// Numeric value
    Number(f64),

    /// Index into the workbook's shared string table
    Shared(u32),

    /// Inline string, not interned
    Inline(String),

    /// Date/time, serialized as an Excel serial number
    Date(NaiveDateTime),

    /// Formula with an optional cached result
    Formula {
        /// Formula text without the leading `=`
        text: String,
        /// Last calculated value, if known
        result: Option<Box<CellValue>>,
    },

    /// Error value (#VALUE!, #REF!, etc.)
    Error(CellErrorValue),
}

impl CellValue {
    /// Create a formula value, stripping a leading `=` if present
    pub fn formula<S: Into<String>>(text: S) -> Self {
        let text = text.into();
        let text = text.strip_prefix('=').map(str::to_string).unwrap_or(text);
        CellValue::Formula { text, result: None }
    }

    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Check if the cell contains a formula
    pub fn is_formula(&self) -> bool {
        matches!(self, CellValue::Formula { .. })
    }

    /// Convert a date/time to its Excel serial number.
    ///
    /// Day zero in the 1900 date system is 1899-12-30 (the system is
    /// deliberately off by one to reproduce the Lotus leap-year bug).
    pub fn date_to_serial(dt: &NaiveDateTime) -> f64 {
        let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
        let days = (dt.date() - epoch).num_days() as f64;
        let seconds = dt.time().num_seconds_from_midnight() as f64;
        days + seconds / 86_400.0
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::Date(dt)
    }
}

/// Spreadsheet error values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellErrorValue {
    /// #DIV/0!
    Div0,
    /// #N/A
    NotAvailable,
    /// #NAME?
    Name,
    /// #NULL!
    Null,
    /// #NUM!
    Num,
    /// #REF!
    Ref,
    /// #VALUE!
    Value,
}

impl CellErrorValue {
    /// The literal error text as it appears in cells and files
    pub fn as_str(&self) -> &'static str {
        match self {
            CellErrorValue::Div0 => "#DIV/0!",
            CellErrorValue::NotAvailable => "#N/A",
            CellErrorValue::Name => "#NAME?",
            CellErrorValue::Null => "#NULL!",
            CellErrorValue::Num => "#NUM!",
            CellErrorValue::Ref => "#REF!",
            CellErrorValue::Value => "#VALUE!",
        }
    }
}

impl fmt::Display for CellErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
