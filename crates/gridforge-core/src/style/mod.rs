//! Style component value objects
//!
//! Each component ([`Font`], [`Fill`], [`Border`], [`NumberFormat`],
//! [`CellFormat`]) is an immutable value once registered in the
//! [`crate::ResourceRegistry`]; identity for dedup purposes is full
//! structural content, so every component implements `Eq` and `Hash`
//! (manually where `f64` fields are involved, hashing the bit pattern).

mod border;
mod color;
mod fill;
mod font;
mod number_format;

pub use border::{Border, BorderEdge, BorderLineStyle};
pub use color::Color;
pub use fill::{Fill, PatternType};
pub use font::{Font, Underline};
pub use number_format::NumberFormat;

/// A cell format (`<xf>` entry): references into the component tables
/// plus inline alignment.
///
/// The component ids are registry indices obtained from the corresponding
/// intern calls; `num_fmt_id` is either a built-in OOXML format id or an
/// id issued by the registry's custom number format table (164+).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CellFormat {
    /// Index into the font table
    pub font_id: u32,
    /// Index into the fill table
    pub fill_id: u32,
    /// Index into the border table
    pub border_id: u32,
    /// OOXML number format id (0 = General)
    pub num_fmt_id: u32,
    /// Alignment, if non-default
    pub alignment: Option<Alignment>,
}

impl CellFormat {
    /// Create a default cell format (all component ids 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font id
    pub fn with_font(mut self, font_id: u32) -> Self {
        self.font_id = font_id;
        self
    }

    /// Set the fill id
    pub fn with_fill(mut self, fill_id: u32) -> Self {
        self.fill_id = fill_id;
        self
    }

    /// Set the border id
    pub fn with_border(mut self, border_id: u32) -> Self {
        self.border_id = border_id;
        self
    }

    /// Set the number format id
    pub fn with_number_format(mut self, num_fmt_id: u32) -> Self {
        self.num_fmt_id = num_fmt_id;
        self
    }

    /// Set alignment
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// True if any non-default component or alignment is applied
    pub fn applies_formatting(&self) -> bool {
        self.font_id != 0
            || self.fill_id != 0
            || self.border_id != 0
            || self.num_fmt_id != 0
            || self.alignment.is_some()
    }
}

/// Cell alignment settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Alignment {
    /// Horizontal alignment
    pub horizontal: Option<HorizontalAlignment>,
    /// Vertical alignment
    pub vertical: Option<VerticalAlignment>,
    /// Wrap text within the cell
    pub wrap_text: bool,
}

/// Horizontal alignment values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    Left,
    Center,
    Right,
    Fill,
    Justify,
}

impl HorizontalAlignment {
    /// The OOXML attribute value
    pub fn as_xlsx(&self) -> &'static str {
        match self {
            HorizontalAlignment::Left => "left",
            HorizontalAlignment::Center => "center",
            HorizontalAlignment::Right => "right",
            HorizontalAlignment::Fill => "fill",
            HorizontalAlignment::Justify => "justify",
        }
    }
}

/// Vertical alignment values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    Top,
    Center,
    Bottom,
}

impl VerticalAlignment {
    /// The OOXML attribute value
    pub fn as_xlsx(&self) -> &'static str {
        match self {
            VerticalAlignment::Top => "top",
            VerticalAlignment::Center => "center",
            VerticalAlignment::Bottom => "bottom",
        }
    }
}
