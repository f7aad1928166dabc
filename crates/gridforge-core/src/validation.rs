//! Data validation
//!
//! Validation rules restrict what users may enter into cells. Rules are
//! built from a loosely typed [`ValidationOptions`] bag and normalized
//! into an immutable [`DataValidationRule`] at construction time; every
//! malformed option fails right there, never at serialization time.
//!
//! ## Example
//!
//! ```rust
//! use gridforge_core::{DataValidationSet, ValidationOptions};
//!
//! let mut validations = DataValidationSet::new();
//! let rule = validations
//!     .add(
//!         ValidationOptions::new("A1:A10")
//!             .with_type("list")
//!             .with_formula1("Yes,No,Maybe")
//!             .with_error("Please select from the list"),
//!     )
//!     .unwrap();
//!
//! // error text implies the alert is shown
//! assert_eq!(rule.show_error_message, Some(true));
//! ```

use crate::error::{Error, Result};

/// A loosely typed option value, as accepted by [`ValidationOptions`].
///
/// Boolean-typed fields coerce `Bool`, `Int(0)` and `Int(1)`; anything
/// else is a construction error.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    /// A boolean
    Bool(bool),
    /// An integer (coerced to boolean where a boolean is expected)
    Int(i64),
    /// Text
    Text(String),
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        OptionValue::Bool(v)
    }
}

impl From<i64> for OptionValue {
    fn from(v: i64) -> Self {
        OptionValue::Int(v)
    }
}

impl From<i32> for OptionValue {
    fn from(v: i32) -> Self {
        OptionValue::Int(v as i64)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        OptionValue::Text(v.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        OptionValue::Text(v)
    }
}

impl OptionValue {
    /// Coerce to boolean; accepts true, false, 1 and 0 only
    fn coerce_bool(&self, field: &'static str) -> Result<bool> {
        match self {
            OptionValue::Bool(b) => Ok(*b),
            OptionValue::Int(0) => Ok(false),
            OptionValue::Int(1) => Ok(true),
            _ => Err(Error::InvalidBool(field)),
        }
    }

    /// Require text
    fn require_text(&self, field: &'static str) -> Result<String> {
        match self {
            OptionValue::Text(t) => Ok(t.clone()),
            _ => Err(Error::InvalidText(field)),
        }
    }
}

/// Validation type (`type` attribute)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationType {
    /// Whole numbers only
    Whole,
    /// Decimal numbers
    Decimal,
    /// Value from a list
    List,
    /// Date values
    Date,
    /// Time values
    Time,
    /// Text with length constraint
    TextLength,
    /// Custom formula
    Custom,
}

impl ValidationType {
    /// The attribute value
    pub fn as_xlsx(&self) -> &'static str {
        match self {
            ValidationType::Whole => "whole",
            ValidationType::Decimal => "decimal",
            ValidationType::List => "list",
            ValidationType::Date => "date",
            ValidationType::Time => "time",
            ValidationType::TextLength => "textLength",
            ValidationType::Custom => "custom",
        }
    }

    /// Parse an attribute value
    pub fn from_xlsx(s: &str) -> Option<Self> {
        match s {
            "whole" => Some(ValidationType::Whole),
            "decimal" => Some(ValidationType::Decimal),
            "list" => Some(ValidationType::List),
            "date" => Some(ValidationType::Date),
            "time" => Some(ValidationType::Time),
            "textLength" => Some(ValidationType::TextLength),
            "custom" => Some(ValidationType::Custom),
            _ => None,
        }
    }
}

/// Comparison operator (`operator` attribute)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationOperator {
    /// Value between formula1 and formula2
    Between,
    /// Value not between formula1 and formula2
    NotBetween,
    /// Value equal to formula1
    Equal,
    /// Value not equal to formula1
    NotEqual,
    /// Value greater than formula1
    GreaterThan,
    /// Value less than formula1
    LessThan,
    /// Value greater than or equal to formula1
    GreaterThanOrEqual,
    /// Value less than or equal to formula1
    LessThanOrEqual,
}

impl ValidationOperator {
    /// The attribute value
    pub fn as_xlsx(&self) -> &'static str {
        match self {
            ValidationOperator::Between => "between",
            ValidationOperator::NotBetween => "notBetween",
            ValidationOperator::Equal => "equal",
            ValidationOperator::NotEqual => "notEqual",
            ValidationOperator::GreaterThan => "greaterThan",
            ValidationOperator::LessThan => "lessThan",
            ValidationOperator::GreaterThanOrEqual => "greaterThanOrEqual",
            ValidationOperator::LessThanOrEqual => "lessThanOrEqual",
        }
    }

    /// Parse an attribute value
    pub fn from_xlsx(s: &str) -> Option<Self> {
        match s {
            "between" => Some(ValidationOperator::Between),
            "notBetween" => Some(ValidationOperator::NotBetween),
            "equal" => Some(ValidationOperator::Equal),
            "notEqual" => Some(ValidationOperator::NotEqual),
            "greaterThan" => Some(ValidationOperator::GreaterThan),
            "lessThan" => Some(ValidationOperator::LessThan),
            "greaterThanOrEqual" => Some(ValidationOperator::GreaterThanOrEqual),
            "lessThanOrEqual" => Some(ValidationOperator::LessThanOrEqual),
            _ => None,
        }
    }
}

/// Error alert style (`errorStyle` attribute)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorStyle {
    /// Stop: entry is rejected
    Stop,
    /// Warning: user may override
    Warning,
    /// Information only
    Information,
}

impl ErrorStyle {
    /// The attribute value
    pub fn as_xlsx(&self) -> &'static str {
        match self {
            ErrorStyle::Stop => "stop",
            ErrorStyle::Warning => "warning",
            ErrorStyle::Information => "information",
        }
    }

    /// Parse an attribute value
    pub fn from_xlsx(s: &str) -> Option<Self> {
        match s {
            "stop" => Some(ErrorStyle::Stop),
            "warning" => Some(ErrorStyle::Warning),
            "information" => Some(ErrorStyle::Information),
            _ => None,
        }
    }
}

/// Input method editor mode (`imeMode` attribute)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImeMode {
    /// IME not controlled
    NoControl,
    /// IME forced off
    Off,
    /// IME forced on
    On,
    /// IME disabled
    Disabled,
    /// Hiragana input
    Hiragana,
    /// Full-width katakana
    FullKatakana,
    /// Half-width katakana
    HalfKatakana,
    /// Full-width alphanumeric
    FullAlpha,
    /// Half-width alphanumeric
    HalfAlpha,
    /// Full-width hangul
    FullHangul,
    /// Half-width hangul
    HalfHangul,
}

impl ImeMode {
    /// The attribute value
    pub fn as_xlsx(&self) -> &'static str {
        match self {
            ImeMode::NoControl => "noControl",
            ImeMode::Off => "off",
            ImeMode::On => "on",
            ImeMode::Disabled => "disabled",
            ImeMode::Hiragana => "hiragana",
            ImeMode::FullKatakana => "fullKatakana",
            ImeMode::HalfKatakana => "halfKatakana",
            ImeMode::FullAlpha => "fullAlpha",
            ImeMode::HalfAlpha => "halfAlpha",
            ImeMode::FullHangul => "fullHangul",
            ImeMode::HalfHangul => "halfHangul",
        }
    }

    /// Parse an attribute value
    pub fn from_xlsx(s: &str) -> Option<Self> {
        match s {
            "noControl" => Some(ImeMode::NoControl),
            "off" => Some(ImeMode::Off),
            "on" => Some(ImeMode::On),
            "disabled" => Some(ImeMode::Disabled),
            "hiragana" => Some(ImeMode::Hiragana),
            "fullKatakana" => Some(ImeMode::FullKatakana),
            "halfKatakana" => Some(ImeMode::HalfKatakana),
            "fullAlpha" => Some(ImeMode::FullAlpha),
            "halfAlpha" => Some(ImeMode::HalfAlpha),
            "fullHangul" => Some(ImeMode::FullHangul),
            "halfHangul" => Some(ImeMode::HalfHangul),
            _ => None,
        }
    }
}

/// A validation formula, kept as entered.
///
/// Numbers serialize bare, strings starting with `=` are formula
/// references and serialize bare, any other string is wrapped in literal
/// double quotes on output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Formula {
    /// A numeric literal
    Number(f64),
    /// A textual formula or value
    Text(String),
}

impl Formula {
    /// The quoted serialization form (sans XML escaping)
    pub fn to_quoted(&self) -> String {
        match self {
            Formula::Number(n) => n.to_string(),
            Formula::Text(t) => {
                if t.starts_with('=') {
                    t.clone()
                } else {
                    format!("\"{}\"", t)
                }
            }
        }
    }
}

impl From<f64> for Formula {
    fn from(v: f64) -> Self {
        Formula::Number(v)
    }
}

impl From<i32> for Formula {
    fn from(v: i32) -> Self {
        Formula::Number(v as f64)
    }
}

impl From<&str> for Formula {
    fn from(v: &str) -> Self {
        Formula::Text(v.to_string())
    }
}

impl From<String> for Formula {
    fn from(v: String) -> Self {
        Formula::Text(v)
    }
}

/// The loosely typed option bag fed to [`DataValidationSet::add`].
///
/// Absent fields stay absent in the output; boolean fields accept
/// `true`, `false`, `1` or `0`.
#[derive(Debug, Clone, Default)]
pub struct ValidationOptions {
    /// Target ranges (required), e.g. "A1:A10" or "A1 C1:C5"
    pub sqref: Option<String>,
    /// Validation type
    pub validation_type: Option<String>,
    /// Comparison operator
    pub operator: Option<String>,
    /// First formula
    pub formula1: Option<Formula>,
    /// Second formula (only meaningful with formula1)
    pub formula2: Option<Formula>,
    /// Allow blank entries
    pub allow_blank: Option<OptionValue>,
    /// Error alert style
    pub error_style: Option<String>,
    /// Error alert text
    pub error: Option<OptionValue>,
    /// Error alert title
    pub error_title: Option<OptionValue>,
    /// IME mode
    pub ime_mode: Option<String>,
    /// Input prompt text
    pub prompt: Option<OptionValue>,
    /// Input prompt title
    pub prompt_title: Option<OptionValue>,
    /// Show the list dropdown
    pub show_drop_down: Option<OptionValue>,
    /// Show the error alert
    pub show_error_message: Option<OptionValue>,
    /// Show the input prompt
    pub show_input_message: Option<OptionValue>,
}

impl ValidationOptions {
    /// Start an option bag for the given target ranges
    pub fn new(sqref: impl Into<String>) -> Self {
        Self {
            sqref: Some(sqref.into()),
            ..Self::default()
        }
    }

    /// Set the validation type
    pub fn with_type(mut self, validation_type: impl Into<String>) -> Self {
        self.validation_type = Some(validation_type.into());
        self
    }

    /// Set the comparison operator
    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = Some(operator.into());
        self
    }

    /// Set the first formula
    pub fn with_formula1(mut self, formula: impl Into<Formula>) -> Self {
        self.formula1 = Some(formula.into());
        self
    }

    /// Set the second formula
    pub fn with_formula2(mut self, formula: impl Into<Formula>) -> Self {
        self.formula2 = Some(formula.into());
        self
    }

    /// Set allow-blank
    pub fn with_allow_blank(mut self, value: impl Into<OptionValue>) -> Self {
        self.allow_blank = Some(value.into());
        self
    }

    /// Set the error alert style
    pub fn with_error_style(mut self, style: impl Into<String>) -> Self {
        self.error_style = Some(style.into());
        self
    }

    /// Set the error alert text
    pub fn with_error(mut self, text: impl Into<OptionValue>) -> Self {
        self.error = Some(text.into());
        self
    }

    /// Set the error alert title
    pub fn with_error_title(mut self, title: impl Into<OptionValue>) -> Self {
        self.error_title = Some(title.into());
        self
    }

    /// Set the IME mode
    pub fn with_ime_mode(mut self, mode: impl Into<String>) -> Self {
        self.ime_mode = Some(mode.into());
        self
    }

    /// Set the input prompt text
    pub fn with_prompt(mut self, text: impl Into<OptionValue>) -> Self {
        self.prompt = Some(text.into());
        self
    }

    /// Set the input prompt title
    pub fn with_prompt_title(mut self, title: impl Into<OptionValue>) -> Self {
        self.prompt_title = Some(title.into());
        self
    }

    /// Set the dropdown visibility
    pub fn with_show_drop_down(mut self, value: impl Into<OptionValue>) -> Self {
        self.show_drop_down = Some(value.into());
        self
    }

    /// Set the error alert visibility
    pub fn with_show_error_message(mut self, value: impl Into<OptionValue>) -> Self {
        self.show_error_message = Some(value.into());
        self
    }

    /// Set the input prompt visibility
    pub fn with_show_input_message(mut self, value: impl Into<OptionValue>) -> Self {
        self.show_input_message = Some(value.into());
        self
    }
}

/// A normalized, immutable validation rule.
///
/// Produced only by [`DataValidationSet::add`]; fields that were absent
/// in the options remain `None` and are omitted on output.
#[derive(Debug, Clone, PartialEq)]
pub struct DataValidationRule {
    /// Target ranges
    pub sqref: String,
    /// Validation type
    pub validation_type: Option<ValidationType>,
    /// Comparison operator
    pub operator: Option<ValidationOperator>,
    /// First formula
    pub formula1: Option<Formula>,
    /// Second formula
    pub formula2: Option<Formula>,
    /// Allow blank entries
    pub allow_blank: Option<bool>,
    /// Error alert style
    pub error_style: Option<ErrorStyle>,
    /// Error alert text
    pub error: Option<String>,
    /// Error alert title
    pub error_title: Option<String>,
    /// IME mode
    pub ime_mode: Option<ImeMode>,
    /// Input prompt text
    pub prompt: Option<String>,
    /// Input prompt title
    pub prompt_title: Option<String>,
    /// Show the list dropdown
    pub show_drop_down: Option<bool>,
    /// Show the error alert
    pub show_error_message: Option<bool>,
    /// Show the input prompt
    pub show_input_message: Option<bool>,
}

/// A worksheet's collection of validation rules.
#[derive(Debug, Default)]
pub struct DataValidationSet {
    rules: Vec<DataValidationRule>,
}

impl DataValidationSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate, normalize and store a rule.
    ///
    /// Fails immediately on a missing `sqref`, a value outside a closed
    /// enumeration, a non-coercible boolean, or a non-text text field.
    pub fn add(&mut self, options: ValidationOptions) -> Result<&DataValidationRule> {
        let sqref = options.sqref.ok_or(Error::MissingSqref)?;

        let validation_type = options
            .validation_type
            .map(|s| {
                ValidationType::from_xlsx(&s).ok_or(Error::InvalidEnumValue {
                    field: "type",
                    value: s,
                })
            })
            .transpose()?;
        let operator = options
            .operator
            .map(|s| {
                ValidationOperator::from_xlsx(&s).ok_or(Error::InvalidEnumValue {
                    field: "operator",
                    value: s,
                })
            })
            .transpose()?;
        let error_style = options
            .error_style
            .map(|s| {
                ErrorStyle::from_xlsx(&s).ok_or(Error::InvalidEnumValue {
                    field: "errorStyle",
                    value: s,
                })
            })
            .transpose()?;
        let ime_mode = options
            .ime_mode
            .map(|s| {
                ImeMode::from_xlsx(&s).ok_or(Error::InvalidEnumValue {
                    field: "imeMode",
                    value: s,
                })
            })
            .transpose()?;

        let allow_blank = options
            .allow_blank
            .map(|v| v.coerce_bool("allowBlank"))
            .transpose()?;
        let show_drop_down = options
            .show_drop_down
            .map(|v| v.coerce_bool("showDropDown"))
            .transpose()?;
        let mut show_error_message = options
            .show_error_message
            .map(|v| v.coerce_bool("showErrorMessage"))
            .transpose()?;
        let mut show_input_message = options
            .show_input_message
            .map(|v| v.coerce_bool("showInputMessage"))
            .transpose()?;

        let error = options.error.map(|v| v.require_text("error")).transpose()?;
        let error_title = options
            .error_title
            .map(|v| v.require_text("errorTitle"))
            .transpose()?;
        let prompt = options
            .prompt
            .map(|v| v.require_text("prompt"))
            .transpose()?;
        let prompt_title = options
            .prompt_title
            .map(|v| v.require_text("promptTitle"))
            .transpose()?;

        // Supplying alert/prompt text implies showing it, overriding
        // even an explicit false.
        if error.is_some() || error_title.is_some() {
            show_error_message = Some(true);
        }
        if prompt.is_some() || prompt_title.is_some() {
            show_input_message = Some(true);
        }

        let idx = self.rules.len();
        self.rules.push(DataValidationRule {
            sqref,
            validation_type,
            operator,
            formula1: options.formula1,
            formula2: options.formula2,
            allow_blank,
            error_style,
            error,
            error_title,
            ime_mode,
            prompt,
            prompt_title,
            show_drop_down,
            show_error_message,
            show_input_message,
        });
        Ok(&self.rules[idx])
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if no rules were added
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate rules in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &DataValidationRule> {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sqref_rejected() {
        let mut set = DataValidationSet::new();
        let result = set.add(ValidationOptions::default().with_type("list"));
        assert!(matches!(result, Err(Error::MissingSqref)));
        assert!(set.is_empty());
    }

    #[test]
    fn test_bogus_type_rejected() {
        let mut set = DataValidationSet::new();
        let result = set.add(ValidationOptions::new("A1").with_type("bogus"));
        assert!(matches!(
            result,
            Err(Error::InvalidEnumValue { field: "type", .. })
        ));
    }

    #[test]
    fn test_bool_coercion() {
        let mut set = DataValidationSet::new();

        let rule = set
            .add(ValidationOptions::new("A1").with_allow_blank(1))
            .unwrap();
        assert_eq!(rule.allow_blank, Some(true));

        let rule = set
            .add(ValidationOptions::new("A2").with_allow_blank(0))
            .unwrap();
        assert_eq!(rule.allow_blank, Some(false));

        let result = set.add(ValidationOptions::new("A3").with_allow_blank(2));
        assert!(matches!(result, Err(Error::InvalidBool("allowBlank"))));
    }

    #[test]
    fn test_error_text_forces_show_error_message() {
        let mut set = DataValidationSet::new();
        let rule = set
            .add(ValidationOptions::new("A1").with_error("Bad input"))
            .unwrap();
        assert_eq!(rule.show_error_message, Some(true));

        // even an explicit false is overridden
        let rule = set
            .add(
                ValidationOptions::new("A2")
                    .with_error_title("Oops")
                    .with_show_error_message(false),
            )
            .unwrap();
        assert_eq!(rule.show_error_message, Some(true));
    }

    #[test]
    fn test_prompt_forces_show_input_message() {
        let mut set = DataValidationSet::new();
        let rule = set
            .add(ValidationOptions::new("B1").with_prompt("Pick a value"))
            .unwrap();
        assert_eq!(rule.show_input_message, Some(true));
    }

    #[test]
    fn test_text_field_rejects_non_text() {
        let mut set = DataValidationSet::new();
        let result = set.add(ValidationOptions::new("A1").with_error(5));
        assert!(matches!(result, Err(Error::InvalidText("error"))));
    }

    #[test]
    fn test_formula_quoting() {
        assert_eq!(Formula::from(5).to_quoted(), "5");
        assert_eq!(Formula::from(2.5).to_quoted(), "2.5");
        assert_eq!(Formula::from("=SUM(A1:A2)").to_quoted(), "=SUM(A1:A2)");
        assert_eq!(Formula::from("Option A").to_quoted(), "\"Option A\"");
    }

    #[test]
    fn test_enum_round_trips() {
        for op in [
            ValidationOperator::Between,
            ValidationOperator::NotBetween,
            ValidationOperator::GreaterThanOrEqual,
        ] {
            assert_eq!(ValidationOperator::from_xlsx(op.as_xlsx()), Some(op));
        }
        assert_eq!(ImeMode::from_xlsx("fullKatakana"), Some(ImeMode::FullKatakana));
        assert_eq!(ImeMode::from_xlsx("katakana"), None);
        assert_eq!(ErrorStyle::from_xlsx("stop"), Some(ErrorStyle::Stop));
    }
}
