//! XLSX error types

use thiserror::Error;

/// Result type for XLSX operations
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur during XLSX writing
#[derive(Debug, Error)]
pub enum XlsxError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Autofilter bounds could not be resolved from the sheet data
    #[error("Cannot resolve autofilter range: {0}")]
    UnresolvedAutoFilter(String),

    /// Serialization was cancelled between row batches
    #[error("Serialization cancelled")]
    Cancelled,

    /// Invalid document state
    #[error("Invalid XLSX format: {0}")]
    InvalidFormat(String),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] gridforge_core::Error),
}
