//! Workbook type - the main document structure

use crate::cell::CellValue;
use crate::error::{Error, Result};
use crate::registry::ResourceRegistry;
use crate::worksheet::Worksheet;
use crate::MAX_SHEET_NAME_LEN;

/// A workbook (spreadsheet document)
///
/// A workbook owns its worksheets plus the document-wide
/// [`ResourceRegistry`] of styles, shared strings and defined names.
#[derive(Debug)]
pub struct Workbook {
    /// Worksheets in insertion order
    worksheets: Vec<Worksheet>,
    /// Document-wide resource tables
    registry: ResourceRegistry,
    /// Active sheet index
    active_sheet: usize,
    /// Next numeric sheet id to assign
    next_sheet_id: u32,
}

impl Workbook {
    /// Create a new empty workbook with one worksheet
    pub fn new() -> Self {
        let mut wb = Self::empty();
        // "Sheet1" always passes validation on an empty workbook
        let _ = wb.add_worksheet("Sheet1");
        wb
    }

    /// Create an empty workbook with no worksheets
    pub fn empty() -> Self {
        Self {
            worksheets: Vec::new(),
            registry: ResourceRegistry::new(),
            active_sheet: 0,
            next_sheet_id: 1,
        }
    }

    /// Get the number of worksheets
    pub fn sheet_count(&self) -> usize {
        self.worksheets.len()
    }

    /// Check if the workbook has no worksheets
    pub fn is_empty(&self) -> bool {
        self.worksheets.is_empty()
    }

    /// Get a worksheet by index
    pub fn worksheet(&self, index: usize) -> Option<&Worksheet> {
        self.worksheets.get(index)
    }

    /// Get a mutable worksheet by index
    pub fn worksheet_mut(&mut self, index: usize) -> Option<&mut Worksheet> {
        self.worksheets.get_mut(index)
    }

    /// Get a worksheet by name
    pub fn worksheet_by_name(&self, name: &str) -> Option<&Worksheet> {
        self.worksheets.iter().find(|ws| ws.name() == name)
    }

    /// Get a mutable worksheet by name
    pub fn worksheet_by_name_mut(&mut self, name: &str) -> Option<&mut Worksheet> {
        self.worksheets.iter_mut().find(|ws| ws.name() == name)
    }

    /// Iterate over all worksheets
    pub fn worksheets(&self) -> impl Iterator<Item = &Worksheet> {
        self.worksheets.iter()
    }

    /// Iterate over all worksheets mutably
    pub fn worksheets_mut(&mut self) -> impl Iterator<Item = &mut Worksheet> {
        self.worksheets.iter_mut()
    }

    /// Add a new worksheet, returning its index
    pub fn add_worksheet(&mut self, name: &str) -> Result<usize> {
        self.validate_sheet_name(name)?;

        let index = self.worksheets.len();
        let worksheet = Worksheet::new(name, self.next_sheet_id);
        self.next_sheet_id += 1;
        self.worksheets.push(worksheet);

        Ok(index)
    }

    /// The active sheet index
    pub fn active_sheet(&self) -> usize {
        self.active_sheet
    }

    /// Set the active sheet index
    pub fn set_active_sheet(&mut self, index: usize) -> Result<()> {
        if index >= self.worksheets.len() {
            return Err(Error::SheetOutOfBounds(index, self.worksheets.len()));
        }
        self.active_sheet = index;
        Ok(())
    }

    /// The document-wide resource registry
    pub fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    /// Mutable access to the resource registry
    pub fn registry_mut(&mut self) -> &mut ResourceRegistry {
        &mut self.registry
    }

    /// Borrow the worksheets and the registry at the same time.
    ///
    /// Serialization reads sheets while appending to the registry, so it
    /// needs both halves with independent lifetimes.
    pub fn split_mut(&mut self) -> (&[Worksheet], &mut ResourceRegistry) {
        (&self.worksheets, &mut self.registry)
    }

    /// Set a shared-string cell: interns the text and stores its index
    pub fn set_string(&mut self, sheet: usize, row: u32, col: u16, text: &str) -> Result<()> {
        let count = self.worksheets.len();
        let idx = self.registry.strings.intern(text);
        let ws = self
            .worksheets
            .get_mut(sheet)
            .ok_or(Error::SheetOutOfBounds(sheet, count))?;
        ws.set_value_at(row, col, CellValue::Shared(idx))
    }

    /// Validate a sheet name (length, forbidden characters, duplicates)
    fn validate_sheet_name(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
        }
        if name.len() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name too long (max {} characters)",
                MAX_SHEET_NAME_LEN
            )));
        }

        const INVALID_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];
        for c in INVALID_CHARS {
            if name.contains(*c) {
                return Err(Error::InvalidSheetName(format!(
                    "Sheet name cannot contain '{}'",
                    c
                )));
            }
        }

        // Duplicate names are checked case-insensitively
        let name_lower = name.to_lowercase();
        for ws in &self.worksheets {
            if ws.name().to_lowercase() == name_lower {
                return Err(Error::DuplicateSheetName(name.into()));
            }
        }

        Ok(())
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}
