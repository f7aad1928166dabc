//! Border component

use super::Color;

/// Complete cell border (all four edges)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Border {
    pub left: Option<BorderEdge>,
    pub right: Option<BorderEdge>,
    pub top: Option<BorderEdge>,
    pub bottom: Option<BorderEdge>,
}

impl Border {
    /// Create a border with no edges
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the same edge to all four sides
    pub fn all(edge: BorderEdge) -> Self {
        Self {
            left: Some(edge.clone()),
            right: Some(edge.clone()),
            top: Some(edge.clone()),
            bottom: Some(edge),
        }
    }
}

/// A single border edge
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BorderEdge {
    /// Line style
    pub style: BorderLineStyle,
    /// Line color
    pub color: Color,
}

impl BorderEdge {
    /// Create a thin black edge
    pub fn thin() -> Self {
        Self {
            style: BorderLineStyle::Thin,
            color: Color::Auto,
        }
    }
}

/// Border line styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderLineStyle {
    Thin,
    Medium,
    Thick,
    Dashed,
    Dotted,
    Double,
    Hair,
}

impl BorderLineStyle {
    /// The OOXML `style` attribute value
    pub fn as_xlsx(&self) -> &'static str {
        match self {
            BorderLineStyle::Thin => "thin",
            BorderLineStyle::Medium => "medium",
            BorderLineStyle::Thick => "thick",
            BorderLineStyle::Dashed => "dashed",
            BorderLineStyle::Dotted => "dotted",
            BorderLineStyle::Double => "double",
            BorderLineStyle::Hair => "hair",
        }
    }
}
