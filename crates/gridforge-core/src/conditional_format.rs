//! Conditional formatting
//!
//! Rules that apply formatting to cells based on their values. The
//! worksheet serializer treats the rule collection as an opaque
//! collaborator: it asks each rule group to append its own XML.
//!
//! ## Example
//!
//! ```rust
//! use gridforge_core::{CellRange, ConditionalFormatRule};
//!
//! // Highlight cells greater than 100
//! let rule = ConditionalFormatRule::cell_is_greater_than("100")
//!     .with_range(CellRange::parse("A1:A10").unwrap());
//! ```

use crate::cell::CellRange;

/// A conditional formatting rule
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalFormatRule {
    /// What the rule tests
    pub kind: CfRuleKind,
    /// Cell ranges this rule applies to
    pub ranges: Vec<CellRange>,
    /// Priority (lower = higher priority)
    pub priority: u32,
    /// Stop processing further rules if this one matches
    pub stop_if_true: bool,
    /// Differential format index (index into the dxf table)
    pub dxf_id: Option<u32>,
}

impl ConditionalFormatRule {
    /// Create a new rule
    pub fn new(kind: CfRuleKind) -> Self {
        Self {
            kind,
            ranges: Vec::new(),
            priority: 1,
            stop_if_true: false,
            dxf_id: None,
        }
    }

    /// Highlight cells greater than a value
    pub fn cell_is_greater_than(value: impl Into<String>) -> Self {
        Self::new(CfRuleKind::CellIs {
            operator: CfOperator::GreaterThan,
            formula1: value.into(),
            formula2: None,
        })
    }

    /// Highlight cells less than a value
    pub fn cell_is_less_than(value: impl Into<String>) -> Self {
        Self::new(CfRuleKind::CellIs {
            operator: CfOperator::LessThan,
            formula1: value.into(),
            formula2: None,
        })
    }

    /// Highlight cells between two values
    pub fn cell_is_between(value1: impl Into<String>, value2: impl Into<String>) -> Self {
        Self::new(CfRuleKind::CellIs {
            operator: CfOperator::Between,
            formula1: value1.into(),
            formula2: Some(value2.into()),
        })
    }

    /// Highlight cells where a formula evaluates to TRUE
    pub fn expression(formula: impl Into<String>) -> Self {
        Self::new(CfRuleKind::Expression {
            formula: formula.into(),
        })
    }

    /// Add a cell range to this rule
    pub fn with_range(mut self, range: CellRange) -> Self {
        self.ranges.push(range);
        self
    }

    /// Set the priority (lower = higher priority)
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Set whether to stop processing further rules on match
    pub fn with_stop_if_true(mut self, stop: bool) -> Self {
        self.stop_if_true = stop;
        self
    }

    /// Set the differential format index
    pub fn with_dxf_id(mut self, dxf_id: u32) -> Self {
        self.dxf_id = Some(dxf_id);
        self
    }
}

/// Kinds of conditional formatting rules
#[derive(Debug, Clone, PartialEq)]
pub enum CfRuleKind {
    /// Cell value comparison (e.g., "greater than 100")
    CellIs {
        /// Comparison operator
        operator: CfOperator,
        /// First comparand
        formula1: String,
        /// Second comparand (between/notBetween only)
        formula2: Option<String>,
    },
    /// Formula evaluates to TRUE
    Expression {
        /// The formula
        formula: String,
    },
}

impl CfRuleKind {
    /// The `type` attribute value
    pub fn as_xlsx(&self) -> &'static str {
        match self {
            CfRuleKind::CellIs { .. } => "cellIs",
            CfRuleKind::Expression { .. } => "expression",
        }
    }
}

/// Operators for cellIs rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CfOperator {
    /// Value is between formula1 and formula2
    #[default]
    Between,
    /// Value is NOT between formula1 and formula2
    NotBetween,
    /// Value equals formula1
    Equal,
    /// Value does NOT equal formula1
    NotEqual,
    /// Value is greater than formula1
    GreaterThan,
    /// Value is less than formula1
    LessThan,
    /// Value is greater than or equal to formula1
    GreaterThanOrEqual,
    /// Value is less than or equal to formula1
    LessThanOrEqual,
}

impl CfOperator {
    /// The `operator` attribute value
    pub fn as_xlsx(&self) -> &'static str {
        match self {
            CfOperator::Between => "between",
            CfOperator::NotBetween => "notBetween",
            CfOperator::Equal => "equal",
            CfOperator::NotEqual => "notEqual",
            CfOperator::GreaterThan => "greaterThan",
            CfOperator::LessThan => "lessThan",
            CfOperator::GreaterThanOrEqual => "greaterThanOrEqual",
            CfOperator::LessThanOrEqual => "lessThanOrEqual",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_is_rule() {
        let rule = ConditionalFormatRule::cell_is_greater_than("100")
            .with_range(CellRange::parse("A1:A10").unwrap());

        assert!(matches!(
            rule.kind,
            CfRuleKind::CellIs {
                operator: CfOperator::GreaterThan,
                ..
            }
        ));
        assert_eq!(rule.ranges.len(), 1);
        assert_eq!(rule.kind.as_xlsx(), "cellIs");
    }

    #[test]
    fn test_between_carries_two_formulas() {
        let rule = ConditionalFormatRule::cell_is_between("1", "10");
        if let CfRuleKind::CellIs { formula2, .. } = &rule.kind {
            assert_eq!(formula2.as_deref(), Some("10"));
        } else {
            panic!("Expected CellIs rule kind");
        }
    }

    #[test]
    fn test_operator_strings() {
        assert_eq!(CfOperator::GreaterThan.as_xlsx(), "greaterThan");
        assert_eq!(CfOperator::NotBetween.as_xlsx(), "notBetween");
    }
}
