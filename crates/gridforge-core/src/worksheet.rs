//! Worksheet type

use std::collections::BTreeMap;

use ahash::AHashMap;

use crate::cell::{Cell, CellAddress, CellRange, CellValue};
use crate::column::Column;
use crate::conditional_format::ConditionalFormatRule;
use crate::error::{Error, Result};
use crate::row::Row;
use crate::validation::DataValidationSet;
use crate::{MAX_COLS, MAX_ROWS};

/// Default row height in points when none is configured
pub const DEFAULT_ROW_HEIGHT: f64 = 15.0;

/// Default column width in character units
pub const DEFAULT_COL_WIDTH: f64 = 8.43;

/// A worksheet (single sheet in a workbook)
///
/// Rows are sparse: a [`Row`] record exists only for row numbers that
/// received a cell or row-level settings. Cells are indexed by
/// `(row, column)`; each row additionally keeps the addresses of its
/// cells so a row can be emitted without scanning the whole cell map.
#[derive(Debug)]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Numeric sheet id (1-based, assigned by the workbook)
    sheet_id: u32,
    /// Row records, keyed by 1-based row number
    rows: BTreeMap<u32, Row>,
    /// Cell data, keyed by (row, column)
    cells: AHashMap<(u32, u16), Cell>,
    /// Column settings
    columns: Vec<Column>,
    /// Merged ranges
    merged: Vec<CellRange>,
    /// Autofilter, if configured
    auto_filter: Option<AutoFilter>,
    /// Relationship entries in id order (rel id = position + 1)
    relationships: Vec<Relationship>,
    /// Hyperlinks, each pointing at a relationship entry
    hyperlinks: Vec<Hyperlink>,
    /// Data validation rules
    validations: DataValidationSet,
    /// Conditional formatting rules
    conditional_formats: Vec<ConditionalFormatRule>,
    /// Sheet protection, if enabled
    protection: Option<SheetProtection>,
    /// View settings
    view: SheetView,
    /// Sheet format defaults
    format: SheetFormat,
    /// Outline and fit-to-page properties
    properties: SheetProperties,
    /// Print page setup
    page_setup: PageSetup,
    /// Print margins
    margins: PageMargins,
    /// Print options
    print_options: PrintOptions,
    /// Header/footer text, if configured
    header_footer: Option<HeaderFooter>,
    /// Relationship index of the drawing entry, if any
    drawing_rel: Option<usize>,
    /// Running (max row, max col) over all writes
    last_used: Option<(u32, u16)>,
}

impl Worksheet {
    /// Create a new worksheet with the given name and numeric id
    pub fn new<S: Into<String>>(name: S, sheet_id: u32) -> Self {
        Self {
            name: name.into(),
            sheet_id,
            rows: BTreeMap::new(),
            cells: AHashMap::new(),
            columns: Vec::new(),
            merged: Vec::new(),
            auto_filter: None,
            relationships: Vec::new(),
            hyperlinks: Vec::new(),
            validations: DataValidationSet::new(),
            conditional_formats: Vec::new(),
            protection: None,
            view: SheetView::default(),
            format: SheetFormat::default(),
            properties: SheetProperties::default(),
            page_setup: PageSetup::default(),
            margins: PageMargins::default(),
            print_options: PrintOptions::default(),
            header_footer: None,
            drawing_rel: None,
            last_used: None,
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the numeric sheet id
    pub fn sheet_id(&self) -> u32 {
        self.sheet_id
    }

    fn validate_position(&self, row: u32, col: u16) -> Result<()> {
        if row == 0 || row > MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS));
        }
        if col == 0 || col > MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS));
        }
        Ok(())
    }

    fn touch(&mut self, row: u32, col: u16) {
        let (max_row, max_col) = self.last_used.unwrap_or((0, 0));
        self.last_used = Some((max_row.max(row), max_col.max(col)));
    }

    // ==================== Cells ====================

    /// Set a cell value by 1-based row and column
    pub fn set_value_at<V: Into<CellValue>>(&mut self, row: u32, col: u16, value: V) -> Result<()> {
        self.validate_position(row, col)?;
        let address = CellAddress::new(row, col);

        let row_entry = self.rows.entry(row).or_insert_with(|| Row::new(row));
        if !self.cells.contains_key(&(row, col)) {
            row_entry.cell_refs.push(address);
        }
        self.cells.insert((row, col), Cell::new(address, value.into()));
        self.touch(row, col);
        Ok(())
    }

    /// Set a cell value by address string (e.g., "B3")
    pub fn set_value<V: Into<CellValue>>(&mut self, address: &str, value: V) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_value_at(addr.row, addr.col, value)
    }

    /// Set a cell formula (with or without a leading `=`)
    pub fn set_formula_at(&mut self, row: u32, col: u16, formula: &str) -> Result<()> {
        self.set_value_at(row, col, CellValue::formula(formula))
    }

    /// Set the style index for a cell, creating the cell if needed
    pub fn set_cell_style_at(&mut self, row: u32, col: u16, style_id: u32) -> Result<()> {
        self.validate_position(row, col)?;
        let address = CellAddress::new(row, col);

        let row_entry = self.rows.entry(row).or_insert_with(|| Row::new(row));
        let cell = self.cells.entry((row, col)).or_insert_with(|| {
            row_entry.cell_refs.push(address);
            Cell::new(address, CellValue::Empty)
        });
        cell.style_id = Some(style_id);
        self.touch(row, col);
        Ok(())
    }

    /// Get a cell by 1-based row and column
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&Cell> {
        self.cells.get(&(row, col))
    }

    /// Number of populated cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// True if no cells and no rows exist
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty() && self.rows.is_empty()
    }

    /// Cells of a row in ascending column order
    pub fn cells_in_row(&self, row_number: u32) -> Vec<&Cell> {
        let Some(row) = self.rows.get(&row_number) else {
            return Vec::new();
        };
        let mut refs: Vec<CellAddress> = row.cell_refs.clone();
        refs.sort_by(CellAddress::by_column);
        refs.iter()
            .filter_map(|addr| self.cells.get(&(addr.row, addr.col)))
            .collect()
    }

    // ==================== Rows and columns ====================

    /// Get or create the row record for a 1-based row number
    pub fn row_mut(&mut self, number: u32) -> Result<&mut Row> {
        if number == 0 || number > MAX_ROWS {
            return Err(Error::RowOutOfBounds(number, MAX_ROWS));
        }
        let (max_row, max_col) = self.last_used.unwrap_or((0, 0));
        self.last_used = Some((max_row.max(number), max_col));
        Ok(self.rows.entry(number).or_insert_with(|| Row::new(number)))
    }

    /// Get a row record if it exists
    pub fn row(&self, number: u32) -> Option<&Row> {
        self.rows.get(&number)
    }

    /// Iterate row records in ascending row-number order
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.values()
    }

    /// Number of row records
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Add column settings
    pub fn add_column(&mut self, column: Column) -> Result<()> {
        if column.min == 0 || column.max > MAX_COLS || column.min > column.max {
            return Err(Error::ColumnOutOfBounds(column.max, MAX_COLS));
        }
        self.columns.push(column);
        Ok(())
    }

    /// Configured column groups
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    // ==================== Dimension ====================

    /// Last used (row, col), tracked as running maxima
    pub fn last_used(&self) -> Option<(u32, u16)> {
        self.last_used
    }

    /// The declared dimension reference ("A1" when empty, else "A1:<last>")
    pub fn dimension_ref(&self) -> String {
        match self.last_used {
            None => "A1".to_string(),
            Some((row, col)) => format!("A1:{}", CellAddress::new(row, col)),
        }
    }

    // ==================== Merged ranges ====================

    /// Merge a range of cells; overlapping an existing merge is an error
    pub fn merge_cells(&mut self, range: CellRange) -> Result<()> {
        for existing in &self.merged {
            if existing.overlaps(&range) {
                return Err(Error::MergedCellConflict(range.to_a1_string()));
            }
        }
        self.merged.push(range);
        Ok(())
    }

    /// Merged ranges in insertion order
    pub fn merged_ranges(&self) -> &[CellRange] {
        &self.merged
    }

    // ==================== Autofilter ====================

    /// Configure the autofilter
    pub fn set_auto_filter(&mut self, filter: AutoFilter) {
        self.auto_filter = Some(filter);
    }

    /// The configured autofilter, if any
    pub fn auto_filter(&self) -> Option<&AutoFilter> {
        self.auto_filter.as_ref()
    }

    // ==================== Relationships ====================

    /// Add a hyperlink on a cell or range; the target becomes a
    /// relationship entry whose id is its 1-based list position
    pub fn add_hyperlink(
        &mut self,
        address: impl Into<String>,
        target: impl Into<String>,
    ) -> usize {
        self.relationships.push(Relationship::Hyperlink {
            target: target.into(),
        });
        let rel_index = self.relationships.len() - 1;
        self.hyperlinks.push(Hyperlink {
            address: address.into(),
            rel_index,
            tooltip: None,
        });
        rel_index
    }

    /// Attach a drawing part to this worksheet
    pub fn attach_drawing(&mut self) -> usize {
        if let Some(idx) = self.drawing_rel {
            return idx;
        }
        self.relationships.push(Relationship::Drawing);
        let idx = self.relationships.len() - 1;
        self.drawing_rel = Some(idx);
        idx
    }

    /// Relationship entries in id order
    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    /// Hyperlinks in insertion order
    pub fn hyperlinks(&self) -> &[Hyperlink] {
        &self.hyperlinks
    }

    /// Relationship index of the drawing entry, if attached
    pub fn drawing_rel(&self) -> Option<usize> {
        self.drawing_rel
    }

    // ==================== Validation and formatting ====================

    /// The data validation rule set
    pub fn validations(&self) -> &DataValidationSet {
        &self.validations
    }

    /// Mutable access to the validation rule set
    pub fn validations_mut(&mut self) -> &mut DataValidationSet {
        &mut self.validations
    }

    /// Add a conditional formatting rule
    pub fn add_conditional_format(&mut self, rule: ConditionalFormatRule) {
        self.conditional_formats.push(rule);
    }

    /// Conditional formatting rules in insertion order
    pub fn conditional_formats(&self) -> &[ConditionalFormatRule] {
        &self.conditional_formats
    }

    // ==================== Protection, view, layout ====================

    /// Enable protection with the given settings
    pub fn set_protection(&mut self, protection: SheetProtection) {
        self.protection = Some(protection);
    }

    /// Protection settings, if enabled
    pub fn protection(&self) -> Option<&SheetProtection> {
        self.protection.as_ref()
    }

    /// View settings
    pub fn view(&self) -> &SheetView {
        &self.view
    }

    /// Mutable view settings
    pub fn view_mut(&mut self) -> &mut SheetView {
        &mut self.view
    }

    /// Freeze panes above `row` and left of `col` (both 1-based; the
    /// given cell becomes the top-left of the scrollable area)
    pub fn freeze_panes(&mut self, row: u32, col: u16) {
        // Treat 0 as 1 rather than underflowing the split offsets.
        let row = row.max(1);
        let col = col.max(1);
        self.view.pane = Some(Pane {
            x_split: (col - 1) as f64,
            y_split: (row - 1) as f64,
            top_left_cell: Some(CellAddress::new(row, col).to_a1_string()),
            state: PaneState::Frozen,
        });
    }

    /// Sheet format defaults
    pub fn format(&self) -> &SheetFormat {
        &self.format
    }

    /// Mutable sheet format defaults
    pub fn format_mut(&mut self) -> &mut SheetFormat {
        &mut self.format
    }

    /// Outline and fit-to-page properties
    pub fn properties(&self) -> &SheetProperties {
        &self.properties
    }

    /// Mutable outline and fit-to-page properties
    pub fn properties_mut(&mut self) -> &mut SheetProperties {
        &mut self.properties
    }

    /// Print page setup
    pub fn page_setup(&self) -> &PageSetup {
        &self.page_setup
    }

    /// Mutable print page setup
    pub fn page_setup_mut(&mut self) -> &mut PageSetup {
        &mut self.page_setup
    }

    /// Print margins
    pub fn margins(&self) -> &PageMargins {
        &self.margins
    }

    /// Mutable print margins
    pub fn margins_mut(&mut self) -> &mut PageMargins {
        &mut self.margins
    }

    /// Print options
    pub fn print_options(&self) -> &PrintOptions {
        &self.print_options
    }

    /// Mutable print options
    pub fn print_options_mut(&mut self) -> &mut PrintOptions {
        &mut self.print_options
    }

    /// Set header/footer text
    pub fn set_header_footer(&mut self, header_footer: HeaderFooter) {
        self.header_footer = Some(header_footer);
    }

    /// Header/footer text, if configured
    pub fn header_footer(&self) -> Option<&HeaderFooter> {
        self.header_footer.as_ref()
    }
}

/// Autofilter over a rectangular range.
///
/// Only the start row is required; missing bounds are resolved against
/// the populated cells when the worksheet is serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoFilter {
    /// First row of the filter range (1-based, usually the header row)
    pub start_row: u32,
    /// First column (resolved from data when absent)
    pub start_col: Option<u16>,
    /// Last row (resolved by scanning for the first gap when absent)
    pub end_row: Option<u32>,
    /// Last column (resolved from data when absent)
    pub end_col: Option<u16>,
}

impl AutoFilter {
    /// Filter starting at a header row, bounds resolved from data
    pub fn from_row(start_row: u32) -> Self {
        Self {
            start_row,
            start_col: None,
            end_row: None,
            end_col: None,
        }
    }

    /// Fully specified filter range
    pub fn range(start_row: u32, start_col: u16, end_row: u32, end_col: u16) -> Self {
        Self {
            start_row,
            start_col: Some(start_col),
            end_row: Some(end_row),
            end_col: Some(end_col),
        }
    }
}

/// A worksheet relationship entry.
///
/// The entry's 1-based position in the worksheet's relationship list is
/// its relationship id, used identically by the worksheet XML and the
/// relationship part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relationship {
    /// External hyperlink target
    Hyperlink {
        /// Target URL
        target: String,
    },
    /// Drawing part marker (target path derives from the sheet id)
    Drawing,
}

/// A hyperlink on a cell or range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hyperlink {
    /// Cell or range reference (e.g., "B3")
    pub address: String,
    /// Index into the worksheet's relationship list
    pub rel_index: usize,
    /// Hover tooltip
    pub tooltip: Option<String>,
}

/// Sheet protection settings
///
/// `sheet`, `objects` and `scenarios` lock their aspect when true and
/// default to enabled; the remaining flags grant permissions back to the
/// user and default to denied.
#[derive(Debug, Clone)]
pub struct SheetProtection {
    /// Protect the sheet
    pub sheet: bool,
    /// Protect embedded objects
    pub objects: bool,
    /// Protect scenarios
    pub scenarios: bool,
    /// Hashed password (legacy 16-bit hash)
    pub password_hash: Option<u16>,
    /// Allow formatting cells
    pub format_cells: bool,
    /// Allow formatting columns
    pub format_columns: bool,
    /// Allow formatting rows
    pub format_rows: bool,
    /// Allow inserting columns
    pub insert_columns: bool,
    /// Allow inserting rows
    pub insert_rows: bool,
    /// Allow inserting hyperlinks
    pub insert_hyperlinks: bool,
    /// Allow deleting columns
    pub delete_columns: bool,
    /// Allow deleting rows
    pub delete_rows: bool,
    /// Allow selecting locked cells
    pub select_locked_cells: bool,
    /// Allow selecting unlocked cells
    pub select_unlocked_cells: bool,
    /// Allow sorting
    pub sort: bool,
    /// Allow using the autofilter
    pub auto_filter: bool,
    /// Allow pivot tables
    pub pivot_tables: bool,
}

impl Default for SheetProtection {
    fn default() -> Self {
        Self {
            sheet: true,
            objects: true,
            scenarios: true,
            password_hash: None,
            format_cells: false,
            format_columns: false,
            format_rows: false,
            insert_columns: false,
            insert_rows: false,
            insert_hyperlinks: false,
            delete_columns: false,
            delete_rows: false,
            select_locked_cells: true,
            select_unlocked_cells: true,
            sort: false,
            auto_filter: false,
            pivot_tables: false,
        }
    }
}

/// Sheet view settings
#[derive(Debug, Clone)]
pub struct SheetView {
    /// Sheet tab is selected
    pub tab_selected: bool,
    /// Show gridlines
    pub show_grid_lines: bool,
    /// Show row and column headers
    pub show_row_col_headers: bool,
    /// Zoom percentage
    pub zoom_scale: u16,
    /// Split/frozen pane settings
    pub pane: Option<Pane>,
    /// Active cell of the selection (e.g., "B3")
    pub active_cell: Option<String>,
}

impl Default for SheetView {
    fn default() -> Self {
        Self {
            tab_selected: false,
            show_grid_lines: true,
            show_row_col_headers: true,
            zoom_scale: 100,
            pane: None,
            active_cell: None,
        }
    }
}

/// Split/frozen pane settings
#[derive(Debug, Clone, PartialEq)]
pub struct Pane {
    /// Horizontal split position (columns for frozen panes)
    pub x_split: f64,
    /// Vertical split position (rows for frozen panes)
    pub y_split: f64,
    /// Top-left cell of the bottom-right pane
    pub top_left_cell: Option<String>,
    /// Pane state
    pub state: PaneState,
}

/// Pane state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaneState {
    /// Split, not frozen
    #[default]
    Split,
    /// Frozen
    Frozen,
    /// Frozen after splitting
    FrozenSplit,
}

impl PaneState {
    /// The `state` attribute value
    pub fn as_xlsx(&self) -> &'static str {
        match self {
            PaneState::Split => "split",
            PaneState::Frozen => "frozen",
            PaneState::FrozenSplit => "frozenSplit",
        }
    }
}

/// Sheet-wide format defaults
#[derive(Debug, Clone, Default)]
pub struct SheetFormat {
    /// Default row height (None = 15pt); setting this forces the
    /// custom-height flag on every row
    pub default_row_height: Option<f64>,
    /// Default column width (None = 8.43 characters)
    pub default_col_width: Option<f64>,
    /// Highest row outline level in use
    pub outline_level_row: u8,
    /// Highest column outline level in use
    pub outline_level_col: u8,
}

impl SheetFormat {
    /// The effective default row height
    pub fn row_height(&self) -> f64 {
        self.default_row_height.unwrap_or(DEFAULT_ROW_HEIGHT)
    }

    /// True if the sheet-wide default row height was customized
    pub fn has_custom_row_height(&self) -> bool {
        self.default_row_height.is_some()
    }
}

/// Outline and fit-to-page sheet properties
#[derive(Debug, Clone)]
pub struct SheetProperties {
    /// Outline summary rows appear below detail
    pub summary_below: bool,
    /// Outline summary columns appear right of detail
    pub summary_right: bool,
    /// Scale printout to fit the configured page count
    pub fit_to_page: bool,
    /// Autofilter buttons are shown
    pub filter_mode: bool,
}

impl Default for SheetProperties {
    fn default() -> Self {
        Self {
            summary_below: true,
            summary_right: true,
            fit_to_page: false,
            filter_mode: false,
        }
    }
}

impl SheetProperties {
    /// True if nothing differs from the defaults
    pub fn is_default(&self) -> bool {
        self.summary_below && self.summary_right && !self.fit_to_page && !self.filter_mode
    }
}

/// Page setup for printing
#[derive(Debug, Clone)]
pub struct PageSetup {
    /// Paper size code (1 = Letter, 9 = A4)
    pub paper_size: Option<u8>,
    /// Landscape orientation (portrait when false)
    pub landscape: bool,
    /// Scale percentage (10-400)
    pub scale: u16,
    /// Fit to pages wide
    pub fit_to_width: Option<u16>,
    /// Fit to pages tall
    pub fit_to_height: Option<u16>,
    /// First printed page number
    pub first_page_number: Option<u32>,
}

impl Default for PageSetup {
    fn default() -> Self {
        Self {
            paper_size: None,
            landscape: false,
            scale: 100,
            fit_to_width: None,
            fit_to_height: None,
            first_page_number: None,
        }
    }
}

impl PageSetup {
    /// True if nothing differs from the defaults
    pub fn is_default(&self) -> bool {
        self.paper_size.is_none()
            && !self.landscape
            && self.scale == 100
            && self.fit_to_width.is_none()
            && self.fit_to_height.is_none()
            && self.first_page_number.is_none()
    }
}

/// Print margins in inches
#[derive(Debug, Clone, PartialEq)]
pub struct PageMargins {
    /// Left margin
    pub left: f64,
    /// Right margin
    pub right: f64,
    /// Top margin
    pub top: f64,
    /// Bottom margin
    pub bottom: f64,
    /// Header margin
    pub header: f64,
    /// Footer margin
    pub footer: f64,
}

impl Default for PageMargins {
    fn default() -> Self {
        Self {
            left: 0.7,
            right: 0.7,
            top: 0.75,
            bottom: 0.75,
            header: 0.3,
            footer: 0.3,
        }
    }
}

/// Print options
#[derive(Debug, Clone, Default)]
pub struct PrintOptions {
    /// Print gridlines
    pub grid_lines: bool,
    /// Print row and column headings
    pub headings: bool,
    /// Center horizontally on the page
    pub horizontal_centered: bool,
    /// Center vertically on the page
    pub vertical_centered: bool,
}

impl PrintOptions {
    /// True if nothing differs from the defaults
    pub fn is_default(&self) -> bool {
        !self.grid_lines && !self.headings && !self.horizontal_centered && !self.vertical_centered
    }
}

/// Header/footer text in the OOXML control-code format
#[derive(Debug, Clone, Default)]
pub struct HeaderFooter {
    /// Header text (e.g., "&CPage &P of &N")
    pub odd_header: Option<String>,
    /// Footer text
    pub odd_footer: Option<String>,
    /// First page differs
    pub different_first: bool,
    /// Odd and even pages differ
    pub different_odd_even: bool,
}

impl HeaderFooter {
    /// True if no text and no flags are set
    pub fn is_empty(&self) -> bool {
        self.odd_header.is_none()
            && self.odd_footer.is_none()
            && !self.different_first
            && !self.different_odd_even
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_worksheet() {
        let ws = Worksheet::new("Test", 1);
        assert_eq!(ws.name(), "Test");
        assert_eq!(ws.sheet_id(), 1);
        assert!(ws.is_empty());
        assert_eq!(ws.dimension_ref(), "A1");
    }

    #[test]
    fn test_set_values_tracks_dimension() {
        let mut ws = Worksheet::new("Test", 1);

        ws.set_value("A1", CellValue::Inline("Hello".into())).unwrap();
        ws.set_value_at(9, 4, 42.0).unwrap();

        assert_eq!(ws.last_used(), Some((9, 4)));
        assert_eq!(ws.dimension_ref(), "A1:D9");
        assert_eq!(ws.cell_count(), 2);
        assert_eq!(ws.row_count(), 2);
    }

    #[test]
    fn test_row_settings_extend_dimension() {
        let mut ws = Worksheet::new("Test", 1);
        ws.row_mut(20).unwrap().height = Some(30.0);
        assert_eq!(ws.last_used(), Some((20, 0)));
    }

    #[test]
    fn test_overwrite_keeps_single_cell_ref() {
        let mut ws = Worksheet::new("Test", 1);
        ws.set_value("A1", 1.0).unwrap();
        ws.set_value("A1", 2.0).unwrap();

        let row = ws.row(1).unwrap();
        assert_eq!(row.cell_refs.len(), 1);
        assert!(matches!(
            ws.cell_at(1, 1).unwrap().value,
            CellValue::Number(n) if n == 2.0
        ));
    }

    #[test]
    fn test_cells_in_row_sorted_by_column() {
        let mut ws = Worksheet::new("Test", 1);
        ws.set_value("C2", 3.0).unwrap();
        ws.set_value("A2", 1.0).unwrap();
        ws.set_value("B2", 2.0).unwrap();

        let cols: Vec<u16> = ws.cells_in_row(2).iter().map(|c| c.address.col).collect();
        assert_eq!(cols, vec![1, 2, 3]);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut ws = Worksheet::new("Test", 1);
        assert!(ws.set_value_at(0, 1, 1.0).is_err());
        assert!(ws.set_value_at(MAX_ROWS + 1, 1, 1.0).is_err());
        assert!(ws.set_value_at(1, MAX_COLS + 1, 1.0).is_err());
    }

    #[test]
    fn test_merge_overlap_rejected() {
        let mut ws = Worksheet::new("Test", 1);
        ws.merge_cells(CellRange::parse("A1:B2").unwrap()).unwrap();
        let result = ws.merge_cells(CellRange::parse("B2:C3").unwrap());
        assert!(matches!(result, Err(Error::MergedCellConflict(_))));
        assert_eq!(ws.merged_ranges().len(), 1);
    }

    #[test]
    fn test_relationship_ids_by_position() {
        let mut ws = Worksheet::new("Test", 1);
        let first = ws.add_hyperlink("A1", "https://example.com");
        let second = ws.add_hyperlink("A2", "https://example.org");
        let drawing = ws.attach_drawing();

        assert_eq!(first, 0);
        assert_eq!(second, 1);
        assert_eq!(drawing, 2);
        assert_eq!(ws.relationships().len(), 3);
        // attaching again reuses the entry
        assert_eq!(ws.attach_drawing(), 2);
    }

    #[test]
    fn test_freeze_panes() {
        let mut ws = Worksheet::new("Test", 1);
        ws.freeze_panes(2, 1);

        let pane = ws.view().pane.as_ref().unwrap();
        assert_eq!(pane.y_split, 1.0);
        assert_eq!(pane.x_split, 0.0);
        assert_eq!(pane.top_left_cell.as_deref(), Some("A2"));
        assert_eq!(pane.state, PaneState::Frozen);
    }

    #[test]
    fn test_freeze_panes_zero_clamps_to_one() {
        let mut ws = Worksheet::new("Test", 1);
        ws.freeze_panes(0, 0);

        let pane = ws.view().pane.as_ref().unwrap();
        assert_eq!(pane.y_split, 0.0);
        assert_eq!(pane.x_split, 0.0);
        assert_eq!(pane.top_left_cell.as_deref(), Some("A1"));
    }
}
