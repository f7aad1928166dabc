//! Cell addressing and values

mod address;
mod value;

pub use address::{CellAddress, CellRange};
pub use value::{CellErrorValue, CellValue};

/// A single cell: its address, optional style and value.
///
/// Owned by a [`crate::Worksheet`]; the address's row number always
/// matches the row the cell is registered under.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Cell address (1-based row and column)
    pub address: CellAddress,
    /// Index into the registry's cell format table (None = default)
    pub style_id: Option<u32>,
    /// Cell payload
    pub value: CellValue,
}

impl Cell {
    /// Create a cell with the default style
    pub fn new(address: CellAddress, value: CellValue) -> Self {
        Self {
            address,
            style_id: None,
            value,
        }
    }

    /// Create a cell with an explicit style index
    pub fn styled(address: CellAddress, value: CellValue, style_id: u32) -> Self {
        Self {
            address,
            style_id: Some(style_id),
            value,
        }
    }
}
