//! Document-wide resource registries
//!
//! Styles, shared strings and defined names are interned or collected
//! here, shared by every worksheet of a document. All tables are
//! append-only: an index, once returned, stays valid for the lifetime of
//! the document and is never reused or compacted.
//!
//! Registration is safe to call during worksheet serialization (the
//! autofilter stage appends a defined name lazily); callers hold a
//! `&mut` handle, so the single-writer discipline is enforced by the
//! borrow checker rather than a lock.

use std::hash::Hash;

use ahash::AHashMap;

use crate::style::{Border, CellFormat, Fill, Font, NumberFormat, PatternType};

/// First number format id available for custom codes; ids below belong
/// to the built-in OOXML formats.
pub const FIRST_CUSTOM_NUM_FMT_ID: u32 = 164;

/// An append-only interning table.
///
/// Structurally equal values always resolve to the same index; a new
/// distinct value is appended and its index returned. Lookup is hashed
/// (ahash) over the value's full structural content.
#[derive(Debug, Clone)]
pub struct InternPool<T: Hash + Eq + Clone> {
    items: Vec<T>,
    index_map: AHashMap<T, u32>,
}

impl<T: Hash + Eq + Clone> InternPool<T> {
    /// Create an empty pool
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            index_map: AHashMap::new(),
        }
    }

    /// Create a pool seeded with default entries (index 0, 1, ...)
    pub fn with_defaults<I: IntoIterator<Item = T>>(defaults: I) -> Self {
        let mut pool = Self::new();
        for item in defaults {
            pool.intern(item);
        }
        pool
    }

    /// Get or create an entry, returning its stable index
    pub fn intern(&mut self, value: T) -> u32 {
        if let Some(&idx) = self.index_map.get(&value) {
            return idx;
        }
        let idx = self.items.len() as u32;
        self.index_map.insert(value.clone(), idx);
        self.items.push(value);
        idx
    }

    /// Get an entry by index
    pub fn get(&self, index: u32) -> Option<&T> {
        self.items.get(index as usize)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if no entries exist
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over entries in index order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: Hash + Eq + Clone> Default for InternPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The style component tables: fonts, fills, borders, number formats and
/// cell formats.
///
/// All tables are seeded with the entries styles.xml requires: default
/// font/border/cell format at index 0, and fills at 0 (none) and 1
/// (gray125) which Excel insists on.
#[derive(Debug)]
pub struct StyleRegistry {
    fonts: InternPool<Font>,
    fills: InternPool<Fill>,
    borders: InternPool<Border>,
    cell_formats: InternPool<CellFormat>,
    /// Custom number format codes in registration order; position `i`
    /// holds the code for id `FIRST_CUSTOM_NUM_FMT_ID + i`.
    custom_formats: Vec<String>,
    custom_format_ids: AHashMap<String, u32>,
}

impl StyleRegistry {
    /// Create a registry with the mandatory seed entries
    pub fn new() -> Self {
        Self {
            fonts: InternPool::with_defaults([Font::default()]),
            fills: InternPool::with_defaults([
                Fill::None,
                Fill::Pattern {
                    pattern: PatternType::Gray125,
                    foreground: crate::style::Color::Auto,
                    background: crate::style::Color::Auto,
                },
            ]),
            borders: InternPool::with_defaults([Border::default()]),
            cell_formats: InternPool::with_defaults([CellFormat::default()]),
            custom_formats: Vec::new(),
            custom_format_ids: AHashMap::new(),
        }
    }

    /// Intern a font, returning its font id
    pub fn intern_font(&mut self, font: Font) -> u32 {
        self.fonts.intern(font)
    }

    /// Intern a fill, returning its fill id
    pub fn intern_fill(&mut self, fill: Fill) -> u32 {
        self.fills.intern(fill)
    }

    /// Intern a border, returning its border id
    pub fn intern_border(&mut self, border: Border) -> u32 {
        self.borders.intern(border)
    }

    /// Intern a cell format, returning its xf id (the `s` attribute of cells)
    pub fn intern_cell_format(&mut self, format: CellFormat) -> u32 {
        self.cell_formats.intern(format)
    }

    /// Resolve a number format to its numeric id, interning custom codes.
    ///
    /// Built-in formats pass their id through; custom codes are issued
    /// stable ids from 164 upward, one per distinct code.
    pub fn intern_number_format(&mut self, format: &NumberFormat) -> u32 {
        match format.builtin_id() {
            Some(id) => id,
            None => {
                let NumberFormat::Custom(code) = format else {
                    return 0;
                };
                if let Some(&id) = self.custom_format_ids.get(code.as_str()) {
                    return id;
                }
                let id = FIRST_CUSTOM_NUM_FMT_ID + self.custom_formats.len() as u32;
                self.custom_format_ids.insert(code.clone(), id);
                self.custom_formats.push(code.clone());
                id
            }
        }
    }

    /// Font table in index order
    pub fn fonts(&self) -> &InternPool<Font> {
        &self.fonts
    }

    /// Fill table in index order
    pub fn fills(&self) -> &InternPool<Fill> {
        &self.fills
    }

    /// Border table in index order
    pub fn borders(&self) -> &InternPool<Border> {
        &self.borders
    }

    /// Cell format table in index order
    pub fn cell_formats(&self) -> &InternPool<CellFormat> {
        &self.cell_formats
    }

    /// Custom number format codes as (id, code) pairs
    pub fn custom_number_formats(&self) -> impl Iterator<Item = (u32, &str)> {
        self.custom_formats
            .iter()
            .enumerate()
            .map(|(i, code)| (FIRST_CUSTOM_NUM_FMT_ID + i as u32, code.as_str()))
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The shared string table.
///
/// Unique strings in first-seen order; the index assigned at first
/// insertion is stable thereafter. `total_refs` counts every intern call
/// (the `count` attribute of `<sst>`, versus `uniqueCount`).
#[derive(Debug, Default)]
pub struct SharedStringTable {
    strings: Vec<String>,
    index_map: AHashMap<String, u32>,
    total_refs: u64,
}

impl SharedStringTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create a string entry, returning its stable index
    pub fn intern(&mut self, text: &str) -> u32 {
        self.total_refs += 1;
        if let Some(&idx) = self.index_map.get(text) {
            return idx;
        }
        let idx = self.strings.len() as u32;
        self.index_map.insert(text.to_string(), idx);
        self.strings.push(text.to_string());
        idx
    }

    /// Get a string by index
    pub fn get(&self, index: u32) -> Option<&str> {
        self.strings.get(index as usize).map(String::as_str)
    }

    /// Number of unique strings
    pub fn unique_count(&self) -> usize {
        self.strings.len()
    }

    /// Total number of references (intern calls)
    pub fn total_refs(&self) -> u64 {
        self.total_refs
    }

    /// True if no strings were interned
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Iterate strings in index order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.strings.iter().map(String::as_str)
    }
}

/// A defined name (named range/formula) owned by the workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefinedName {
    /// The name (e.g., "TaxRate", "_xlnm._FilterDatabase")
    pub name: String,
    /// What the name refers to (e.g., `'Sheet1'!$A$5:$C$7`)
    pub ref_formula: String,
    /// Hidden from the UI
    pub hidden: bool,
    /// Sheet scope: `None` = workbook-wide, `Some(i)` = local to sheet
    /// index `i` (the `localSheetId` attribute, 0-based)
    pub local_sheet_id: Option<u32>,
}

impl DefinedName {
    /// Create a workbook-scoped defined name
    pub fn workbook_scope(name: impl Into<String>, ref_formula: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ref_formula: ref_formula.into(),
            hidden: false,
            local_sheet_id: None,
        }
    }

    /// Create a sheet-scoped defined name
    pub fn sheet_scope(
        name: impl Into<String>,
        ref_formula: impl Into<String>,
        sheet_index: u32,
    ) -> Self {
        Self {
            name: name.into(),
            ref_formula: ref_formula.into(),
            hidden: false,
            local_sheet_id: Some(sheet_index),
        }
    }

    /// Mark this name as hidden
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

/// Append-only table of defined names.
///
/// Unlike the style tables there is no dedup: duplicates are permitted
/// structurally and are never silently merged.
#[derive(Debug, Default)]
pub struct DefinedNameTable {
    entries: Vec<DefinedName>,
}

impl DefinedNameTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry unconditionally
    pub fn add(&mut self, entry: DefinedName) {
        self.entries.push(entry);
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no names are defined
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &DefinedName> {
        self.entries.iter()
    }
}

/// All document-wide registries bundled together, owned by the workbook.
#[derive(Debug, Default)]
pub struct ResourceRegistry {
    /// Style component tables
    pub styles: StyleRegistry,
    /// Shared string table
    pub strings: SharedStringTable,
    /// Defined names
    pub defined_names: DefinedNameTable,
}

impl ResourceRegistry {
    /// Create a registry with seeded style tables
    pub fn new() -> Self {
        Self {
            styles: StyleRegistry::new(),
            strings: SharedStringTable::new(),
            defined_names: DefinedNameTable::new(),
        }
    }
}
