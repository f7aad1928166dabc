//! Error types for gridforge-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gridforge-core
///
/// Validation errors are always raised at model-construction time, never
/// deferred to serialization.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Invalid cell range format
    #[error("Invalid cell range: {0}")]
    InvalidRange(String),

    /// Row index out of bounds
    #[error("Row number {0} out of bounds (max: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column index out of bounds
    #[error("Column number {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u16, u16),

    /// Sheet index out of bounds
    #[error("Sheet index {0} out of bounds (count: {1})")]
    SheetOutOfBounds(usize, usize),

    /// Invalid sheet name
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// Duplicate sheet name
    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),

    /// Merged cell conflict
    #[error("Range {0} overlaps an existing merged region")]
    MergedCellConflict(String),

    /// A data validation rule was constructed without its target range
    #[error("Data validation requires an sqref")]
    MissingSqref,

    /// A value outside a closed enumeration was supplied
    #[error("Invalid value '{value}' for data validation field '{field}'")]
    InvalidEnumValue {
        field: &'static str,
        value: String,
    },

    /// A boolean field received something other than true/false/1/0
    #[error("Field '{0}' must be a boolean (true, false, 1 or 0)")]
    InvalidBool(&'static str),

    /// A text field received a non-text value
    #[error("Field '{0}' must be text")]
    InvalidText(&'static str),

    /// A formula field received a value that is neither numeric nor text
    #[error("Field '{0}' must be a number or text")]
    InvalidFormula(&'static str),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
