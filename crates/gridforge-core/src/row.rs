//! Row types

use crate::cell::CellAddress;

/// Row metadata plus the addresses of its populated cells.
///
/// Rows are created lazily: a row record exists only if a cell was
/// written into it or row-level settings were applied.
#[derive(Debug, Clone)]
pub struct Row {
    /// Row number (1-based)
    pub number: u32,
    /// Custom height (None = default)
    pub height: Option<f64>,
    /// Row is hidden
    pub hidden: bool,
    /// Outline/grouping level (0-7)
    pub outline_level: u8,
    /// Row-level style index (None = no row style)
    pub style_id: Option<u32>,
    /// Row is collapsed (in outline)
    pub collapsed: bool,
    /// Thick top border hint
    pub thick_top: bool,
    /// Thick bottom border hint
    pub thick_bottom: bool,
    /// Addresses of populated cells, in insertion order
    pub cell_refs: Vec<CellAddress>,
}

impl Row {
    /// Create a new row with default settings
    pub fn new(number: u32) -> Self {
        Self {
            number,
            height: None,
            hidden: false,
            outline_level: 0,
            style_id: None,
            collapsed: false,
            thick_top: false,
            thick_bottom: false,
            cell_refs: Vec::new(),
        }
    }

    /// Check if this row has any custom settings
    pub fn has_custom_settings(&self) -> bool {
        self.height.is_some()
            || self.hidden
            || self.outline_level > 0
            || self.style_id.is_some()
            || self.collapsed
            || self.thick_top
            || self.thick_bottom
    }

    /// Check if this row has no cells
    pub fn is_empty(&self) -> bool {
        self.cell_refs.is_empty()
    }
}
