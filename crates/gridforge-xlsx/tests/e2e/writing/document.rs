//! Tests for whole-archive structure: parts, relationships, registries.

use crate::{has_part, part, part_names, write_to_bytes};
use gridforge_core::{AutoFilter, CellFormat, Font, NumberFormat, Workbook};
use pretty_assertions::assert_eq;

#[test]
fn test_minimal_document_parts() {
    let mut wb = Workbook::new();
    wb.worksheet_mut(0).unwrap().set_value("A1", 1.0).unwrap();

    let bytes = write_to_bytes(&mut wb);
    let names = part_names(&bytes);

    assert_eq!(
        names,
        vec![
            "[Content_Types].xml",
            "_rels/.rels",
            "xl/workbook.xml",
            "xl/_rels/workbook.xml.rels",
            "xl/styles.xml",
            "xl/worksheets/sheet1.xml",
        ]
    );
}

#[test]
fn test_multi_sheet_relationship_ids() {
    let mut wb = Workbook::new();
    wb.add_worksheet("Data").unwrap();
    wb.add_worksheet("Summary").unwrap();
    for i in 0..3 {
        wb.worksheet_mut(i).unwrap().set_value("A1", 1.0).unwrap();
    }

    let bytes = write_to_bytes(&mut wb);

    let workbook_xml = part(&bytes, "xl/workbook.xml");
    assert!(workbook_xml.contains("<sheet name=\"Sheet1\" sheetId=\"1\" r:id=\"rId1\"/>"));
    assert!(workbook_xml.contains("<sheet name=\"Data\" sheetId=\"2\" r:id=\"rId2\"/>"));
    assert!(workbook_xml.contains("<sheet name=\"Summary\" sheetId=\"3\" r:id=\"rId3\"/>"));

    let rels = part(&bytes, "xl/_rels/workbook.xml.rels");
    assert!(rels.contains("Id=\"rId2\"") && rels.contains("Target=\"worksheets/sheet2.xml\""));
    // styles follows the sheets
    assert!(rels.contains("Id=\"rId4\"") && rels.contains("Target=\"styles.xml\""));
}

#[test]
fn test_shared_strings_written_once() {
    let mut wb = Workbook::new();
    wb.set_string(0, 1, 1, "Status").unwrap();
    wb.set_string(0, 2, 1, "OK").unwrap();
    wb.set_string(0, 3, 1, "OK").unwrap();

    let bytes = write_to_bytes(&mut wb);

    let sst = part(&bytes, "xl/sharedStrings.xml");
    assert!(sst.contains("count=\"3\" uniqueCount=\"2\""));
    assert_eq!(sst.matches("<si><t>OK</t></si>").count(), 1);

    let sheet = part(&bytes, "xl/worksheets/sheet1.xml");
    // both OK cells reference the same table index
    assert!(sheet.contains("<c r=\"A2\" t=\"s\"><v>1</v></c>"));
    assert!(sheet.contains("<c r=\"A3\" t=\"s\"><v>1</v></c>"));
}

#[test]
fn test_no_shared_strings_part_when_unused() {
    let mut wb = Workbook::new();
    wb.worksheet_mut(0).unwrap().set_value("A1", 5.0).unwrap();

    let bytes = write_to_bytes(&mut wb);
    assert!(!has_part(&bytes, "xl/sharedStrings.xml"));
    assert!(!part(&bytes, "[Content_Types].xml").contains("sharedStrings"));
}

#[test]
fn test_styles_from_registry() {
    let mut wb = Workbook::new();
    let styles = &mut wb.registry_mut().styles;
    let font_id = styles.intern_font(Font::new().with_bold(true));
    let fmt_id = styles.intern_number_format(&NumberFormat::custom("yyyy-mm-dd"));
    let xf = styles.intern_cell_format(
        CellFormat::new().with_font(font_id).with_number_format(fmt_id),
    );

    let sheet = wb.worksheet_mut(0).unwrap();
    sheet.set_value("A1", 1.0).unwrap();
    sheet.set_cell_style_at(1, 1, xf).unwrap();

    let bytes = write_to_bytes(&mut wb);

    let styles_xml = part(&bytes, "xl/styles.xml");
    assert!(styles_xml.contains("numFmtId=\"164\" formatCode=\"yyyy-mm-dd\""));
    assert!(styles_xml.contains("<b/>"));

    let sheet_xml = part(&bytes, "xl/worksheets/sheet1.xml");
    assert!(sheet_xml.contains(&format!("s=\"{}\"", xf)));
}

#[test]
fn test_filter_defined_names_scoped_per_sheet() {
    let mut wb = Workbook::new();
    wb.add_worksheet("Second").unwrap();
    for i in 0..2 {
        let sheet = wb.worksheet_mut(i).unwrap();
        sheet.set_value("A1", 1.0).unwrap();
        sheet.set_value("B1", 2.0).unwrap();
        sheet.set_value_at(2, 1, 3.0).unwrap();
        sheet.set_value_at(2, 2, 4.0).unwrap();
        sheet.set_auto_filter(AutoFilter::from_row(1));
    }

    let bytes = write_to_bytes(&mut wb);
    let workbook_xml = part(&bytes, "xl/workbook.xml");

    assert_eq!(workbook_xml.matches("_xlnm._FilterDatabase").count(), 2);
    assert!(workbook_xml.contains("localSheetId=\"0\" hidden=\"1\">'Sheet1'!$A$1:$B$2"));
    assert!(workbook_xml.contains("localSheetId=\"1\" hidden=\"1\">'Second'!$A$1:$B$2"));
}
