//! # gridforge-core
//!
//! Document model for the gridforge spreadsheet writer.
//!
//! This crate provides the in-memory representation that
//! `gridforge-xlsx` serializes into SpreadsheetML:
//! - [`CellAddress`] and [`CellRange`] - A1-style addressing
//! - [`CellValue`] - cell payloads (numbers, shared strings, formulas, ...)
//! - [`ResourceRegistry`] - document-wide interning tables for styles,
//!   shared strings and defined names
//! - [`Worksheet`], [`Workbook`] - the document structures
//!
//! ## Example
//!
//! ```rust
//! use gridforge_core::{CellValue, Workbook};
//!
//! let mut workbook = Workbook::new();
//! workbook.set_string(0, 1, 1, "Hello").unwrap();
//!
//! let sheet = workbook.worksheet_mut(0).unwrap();
//! sheet.set_value("B1", CellValue::Number(42.0)).unwrap();
//! ```

pub mod cell;
pub mod column;
pub mod conditional_format;
pub mod error;
pub mod registry;
pub mod row;
pub mod style;
pub mod validation;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::{Cell, CellAddress, CellErrorValue, CellRange, CellValue};
pub use column::Column;
pub use conditional_format::{CfOperator, CfRuleKind, ConditionalFormatRule};
pub use error::{Error, Result};
pub use registry::{
    DefinedName, DefinedNameTable, ResourceRegistry, SharedStringTable, StyleRegistry,
};
pub use row::Row;
pub use validation::{
    DataValidationRule, DataValidationSet, ErrorStyle, Formula, ImeMode, OptionValue,
    ValidationOperator, ValidationOptions, ValidationType,
};
pub use workbook::Workbook;
pub use worksheet::{
    AutoFilter, HeaderFooter, Hyperlink, PageMargins, PageSetup, Pane, PaneState, PrintOptions,
    Relationship, SheetFormat, SheetProperties, SheetProtection, SheetView, Worksheet,
};

// Re-export style types for convenience
pub use style::{
    Alignment, Border, BorderEdge, BorderLineStyle, CellFormat, Color, Fill, Font,
    HorizontalAlignment, NumberFormat, PatternType, Underline, VerticalAlignment,
};

/// Maximum number of rows in a worksheet (Excel limit, 1-based)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit, 1-based)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
