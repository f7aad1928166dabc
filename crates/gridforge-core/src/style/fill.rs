//! Fill component

use super::Color;

/// Cell background fill
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Fill {
    /// No fill
    #[default]
    None,
    /// Solid fill with the given color
    Solid {
        color: Color,
    },
    /// Pattern fill
    Pattern {
        pattern: PatternType,
        foreground: Color,
        background: Color,
    },
}

impl Fill {
    /// Create a solid fill
    pub fn solid(color: Color) -> Self {
        Fill::Solid { color }
    }
}

/// Fill pattern types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PatternType {
    #[default]
    Gray125,
    DarkGray,
    MediumGray,
    LightGray,
    DarkHorizontal,
    DarkVertical,
    LightHorizontal,
    LightVertical,
}

impl PatternType {
    /// The OOXML `patternType` attribute value
    pub fn as_xlsx(&self) -> &'static str {
        match self {
            PatternType::Gray125 => "gray125",
            PatternType::DarkGray => "darkGray",
            PatternType::MediumGray => "mediumGray",
            PatternType::LightGray => "lightGray",
            PatternType::DarkHorizontal => "darkHorizontal",
            PatternType::DarkVertical => "darkVertical",
            PatternType::LightHorizontal => "lightHorizontal",
            PatternType::LightVertical => "lightVertical",
        }
    }
}
