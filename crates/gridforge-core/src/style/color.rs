//! Color representation

/// A color as used by fonts, fills and borders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Automatic (theme-dependent) color
    #[default]
    Auto,
    /// RGB color (alpha implied FF)
    Rgb {
        r: u8,
        g: u8,
        b: u8,
    },
    /// Indexed palette color
    Indexed(u8),
    /// Theme color with an optional tint in hundredths (-100..=100)
    Theme {
        index: u8,
        tint: i8,
    },
}

impl Color {
    /// Create an RGB color
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Format as an 8-digit ARGB hex string (RGB colors get alpha FF)
    ///
    /// Returns `None` for `Auto` and palette/theme colors, which are
    /// written with different attributes.
    pub fn to_argb_hex(&self) -> Option<String> {
        match self {
            Color::Rgb { r, g, b } => Some(format!("FF{:02X}{:02X}{:02X}", r, g, b)),
            _ => None,
        }
    }

    pub const BLACK: Color = Color::Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
    pub const RED: Color = Color::Rgb { r: 255, g: 0, b: 0 };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb_hex() {
        assert_eq!(Color::rgb(255, 199, 206).to_argb_hex().unwrap(), "FFFFC7CE");
        assert_eq!(Color::Auto.to_argb_hex(), None);
    }
}
