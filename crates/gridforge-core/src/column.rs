//! Column types

/// Settings for a contiguous run of columns.
///
/// Maps to a `<col>` element: `min` and `max` are 1-based and inclusive,
/// so a single column has `min == max`.
#[derive(Debug, Clone)]
pub struct Column {
    /// First column of the run (1-based)
    pub min: u16,
    /// Last column of the run (1-based, inclusive)
    pub max: u16,
    /// Custom width (None = default)
    pub width: Option<f64>,
    /// Columns are hidden
    pub hidden: bool,
    /// Outline/grouping level (0-7)
    pub outline_level: u8,
    /// Column-level style index (None = no column style)
    pub style_id: Option<u32>,
    /// Columns are collapsed (in outline)
    pub collapsed: bool,
    /// Best fit (auto-sized)
    pub best_fit: bool,
}

impl Column {
    /// Create settings for a single column
    pub fn single(index: u16) -> Self {
        Self::range(index, index)
    }

    /// Create settings for a range of columns
    pub fn range(min: u16, max: u16) -> Self {
        Self {
            min,
            max,
            width: None,
            hidden: false,
            outline_level: 0,
            style_id: None,
            collapsed: false,
            best_fit: false,
        }
    }

    /// Set a custom width
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Check if these columns carry any settings worth writing
    pub fn has_custom_settings(&self) -> bool {
        self.width.is_some()
            || self.hidden
            || self.outline_level > 0
            || self.style_id.is_some()
            || self.collapsed
            || self.best_fit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_and_range() {
        let col = Column::single(3).with_width(18.5);
        assert_eq!(col.min, 3);
        assert_eq!(col.max, 3);
        assert!(col.has_custom_settings());

        let run = Column::range(2, 5);
        assert_eq!((run.min, run.max), (2, 5));
        assert!(!run.has_custom_settings());
    }
}
