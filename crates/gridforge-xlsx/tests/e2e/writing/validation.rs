//! Tests for data validation output in written documents.

use crate::{part, write_to_bytes};
use gridforge_core::{Error, ValidationOptions, Workbook};
use pretty_assertions::assert_eq;

fn sheet1(wb: &mut Workbook) -> String {
    let bytes = write_to_bytes(wb);
    part(&bytes, "xl/worksheets/sheet1.xml")
}

#[test]
fn test_list_validation_end_to_end() {
    let mut wb = Workbook::new();
    let sheet = wb.worksheet_mut(0).unwrap();
    sheet.set_value("A1", 1.0).unwrap();
    sheet
        .validations_mut()
        .add(
            ValidationOptions::new("A1:A10")
                .with_type("list")
                .with_allow_blank(true)
                .with_formula1("Red,Green,Blue"),
        )
        .unwrap();

    let xml = sheet1(&mut wb);
    assert!(xml.contains("<dataValidations count=\"1\">"));
    assert!(xml.contains(
        "<dataValidation type=\"list\" allowBlank=\"1\" sqref=\"A1:A10\"><formula1>\"Red,Green,Blue\"</formula1></dataValidation>"
    ));
}

#[test]
fn test_drop_down_suppression_is_inverted_on_disk() {
    let mut wb = Workbook::new();
    let sheet = wb.worksheet_mut(0).unwrap();
    sheet.set_value("A1", 1.0).unwrap();
    sheet
        .validations_mut()
        .add(
            ValidationOptions::new("A1")
                .with_type("list")
                .with_formula1("x,y")
                .with_show_drop_down(false),
        )
        .unwrap();

    let xml = sheet1(&mut wb);
    assert!(xml.contains("showDropDown=\"1\""));
}

#[test]
fn test_error_text_forces_error_display() {
    let mut wb = Workbook::new();
    let sheet = wb.worksheet_mut(0).unwrap();
    sheet.set_value("A1", 1.0).unwrap();
    sheet
        .validations_mut()
        .add(
            ValidationOptions::new("A1")
                .with_type("whole")
                .with_operator("greaterThan")
                .with_formula1(0)
                .with_error_title("Invalid")
                .with_error("Value must be positive")
                .with_show_error_message(false),
        )
        .unwrap();

    let xml = sheet1(&mut wb);
    // providing error text overrides the explicit false
    assert!(xml.contains("showErrorMessage=\"1\""));
    assert!(xml.contains("errorTitle=\"Invalid\" error=\"Value must be positive\""));
    assert!(xml.contains("<formula1>0</formula1>"));
}

#[test]
fn test_between_operator_with_two_formulas() {
    let mut wb = Workbook::new();
    let sheet = wb.worksheet_mut(0).unwrap();
    sheet.set_value("A1", 1.0).unwrap();
    sheet
        .validations_mut()
        .add(
            ValidationOptions::new("A1:C1")
                .with_type("decimal")
                .with_operator("between")
                .with_formula1(1)
                .with_formula2(100),
        )
        .unwrap();

    let xml = sheet1(&mut wb);
    assert!(xml.contains(
        "type=\"decimal\" operator=\"between\" sqref=\"A1:C1\"><formula1>1</formula1><formula2>100</formula2>"
    ));
}

#[test]
fn test_cell_reference_formula_stays_bare() {
    let mut wb = Workbook::new();
    let sheet = wb.worksheet_mut(0).unwrap();
    sheet.set_value("A1", 1.0).unwrap();
    sheet
        .validations_mut()
        .add(
            ValidationOptions::new("B1")
                .with_type("list")
                .with_formula1("=$D$1:$D$5"),
        )
        .unwrap();

    let xml = sheet1(&mut wb);
    assert!(xml.contains("<formula1>=$D$1:$D$5</formula1>"));
}

#[test]
fn test_rejected_rule_leaves_no_trace() {
    let mut wb = Workbook::new();
    let sheet = wb.worksheet_mut(0).unwrap();
    sheet.set_value("A1", 1.0).unwrap();

    let err = sheet
        .validations_mut()
        .add(ValidationOptions::new("A1").with_type("nonsense"))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidEnumValue { .. }));

    let xml = sheet1(&mut wb);
    assert!(!xml.contains("<dataValidations"));
}

#[test]
fn test_multiple_rules_count() {
    let mut wb = Workbook::new();
    let sheet = wb.worksheet_mut(0).unwrap();
    sheet.set_value("A1", 1.0).unwrap();
    for (sqref, list) in [("A1", "a,b"), ("B1", "c,d"), ("C1", "e,f")] {
        sheet
            .validations_mut()
            .add(ValidationOptions::new(sqref).with_type("list").with_formula1(list))
            .unwrap();
    }

    let xml = sheet1(&mut wb);
    assert!(xml.contains("<dataValidations count=\"3\">"));
    assert_eq!(xml.matches("<dataValidation ").count(), 3);
}
