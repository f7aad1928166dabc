//! Number format component

/// A number format: either a built-in OOXML id or a custom format code.
///
/// Custom codes are interned by the registry, which issues ids from 164
/// upward (below that the id space belongs to built-in formats).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NumberFormat {
    /// General (id 0)
    #[default]
    General,
    /// Built-in format by id (1..=163)
    BuiltIn(u32),
    /// Custom format code (e.g., `"0.00%"`, `"yyyy-mm-dd"`)
    Custom(String),
}

impl NumberFormat {
    /// Create a custom format
    pub fn custom<S: Into<String>>(code: S) -> Self {
        NumberFormat::Custom(code.into())
    }

    /// Built-in id for common formats, `None` for custom codes
    pub fn builtin_id(&self) -> Option<u32> {
        match self {
            NumberFormat::General => Some(0),
            NumberFormat::BuiltIn(id) => Some(*id),
            NumberFormat::Custom(_) => None,
        }
    }
}
