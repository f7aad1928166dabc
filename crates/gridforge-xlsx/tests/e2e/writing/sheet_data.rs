//! Tests for the worksheet part: rows, cells, layout stages.

use crate::{has_part, part, write_to_bytes};
use gridforge_core::{
    AutoFilter, CellRange, CellValue, Column, HeaderFooter, SheetProtection, Workbook,
};
use pretty_assertions::assert_eq;

#[test]
fn test_sparse_rows_emitted_in_order() {
    let mut wb = Workbook::new();
    let sheet = wb.worksheet_mut(0).unwrap();
    sheet.set_value_at(100, 1, 100.0).unwrap();
    sheet.set_value_at(2, 1, 2.0).unwrap();
    sheet.set_value_at(50, 1, 50.0).unwrap();

    let bytes = write_to_bytes(&mut wb);
    let xml = part(&bytes, "xl/worksheets/sheet1.xml");

    let r2 = xml.find("<row r=\"2\"").unwrap();
    let r50 = xml.find("<row r=\"50\"").unwrap();
    let r100 = xml.find("<row r=\"100\"").unwrap();
    assert!(r2 < r50 && r50 < r100);

    // absent rows leave no trace
    assert!(!xml.contains("<row r=\"3\""));
    assert!(xml.contains("<dimension ref=\"A1:A100\"/>"));
}

#[test]
fn test_cell_types() {
    let mut wb = Workbook::new();
    wb.set_string(0, 1, 1, "text").unwrap();
    let sheet = wb.worksheet_mut(0).unwrap();
    sheet.set_value_at(1, 2, 3.25).unwrap();
    sheet.set_value_at(1, 3, true).unwrap();
    sheet.set_formula_at(1, 4, "=SUM(B1:C1)").unwrap();
    sheet
        .set_value_at(1, 5, CellValue::Inline("inline".into()))
        .unwrap();

    let bytes = write_to_bytes(&mut wb);
    let xml = part(&bytes, "xl/worksheets/sheet1.xml");

    assert!(xml.contains("<c r=\"A1\" t=\"s\"><v>0</v></c>"));
    assert!(xml.contains("<c r=\"B1\"><v>3.25</v></c>"));
    assert!(xml.contains("<c r=\"C1\" t=\"b\"><v>1</v></c>"));
    assert!(xml.contains("<c r=\"D1\"><f>SUM(B1:C1)</f></c>"));
    assert!(xml.contains("<c r=\"E1\" t=\"inlineStr\"><is><t>inline</t></is></c>"));
}

#[test]
fn test_date_cell_serial() {
    let mut wb = Workbook::new();
    let noon = chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    wb.worksheet_mut(0).unwrap().set_value_at(1, 1, noon).unwrap();

    let bytes = write_to_bytes(&mut wb);
    let xml = part(&bytes, "xl/worksheets/sheet1.xml");
    assert!(xml.contains("<c r=\"A1\"><v>45292.5</v></c>"));
}

#[test]
fn test_row_and_column_settings() {
    let mut wb = Workbook::new();
    let sheet = wb.worksheet_mut(0).unwrap();
    sheet.set_value("A1", 1.0).unwrap();
    {
        let row = sheet.row_mut(1).unwrap();
        row.height = Some(30.0);
        row.hidden = false;
    }
    sheet.row_mut(2).unwrap().hidden = true;
    sheet.add_column(Column::single(1).with_width(22.5)).unwrap();

    let bytes = write_to_bytes(&mut wb);
    let xml = part(&bytes, "xl/worksheets/sheet1.xml");

    assert!(xml.contains("<col min=\"1\" max=\"1\" width=\"22.5\" customWidth=\"1\"/>"));
    assert!(xml.contains("<row r=\"1\" spans=\"1:1\" ht=\"30\" customHeight=\"1\">"));
    assert!(xml.contains("<row r=\"2\" hidden=\"1\"/>"));
}

#[test]
fn test_custom_default_row_height_forces_flag_everywhere() {
    let mut wb = Workbook::new();
    let sheet = wb.worksheet_mut(0).unwrap();
    sheet.format_mut().default_row_height = Some(20.0);
    sheet.set_value("A1", 1.0).unwrap();

    let bytes = write_to_bytes(&mut wb);
    let xml = part(&bytes, "xl/worksheets/sheet1.xml");

    assert!(xml.contains("<sheetFormatPr defaultRowHeight=\"20\" customHeight=\"1\"/>"));
    assert!(xml.contains("<row r=\"1\" spans=\"1:1\" ht=\"20\" customHeight=\"1\">"));
}

#[test]
fn test_merged_ranges_with_count() {
    let mut wb = Workbook::new();
    let sheet = wb.worksheet_mut(0).unwrap();
    sheet.set_value("A1", 1.0).unwrap();
    sheet.merge_cells(CellRange::parse("A1:B2").unwrap()).unwrap();
    sheet.merge_cells(CellRange::parse("D1:E1").unwrap()).unwrap();

    let bytes = write_to_bytes(&mut wb);
    let xml = part(&bytes, "xl/worksheets/sheet1.xml");

    assert!(xml.contains("<mergeCells count=\"2\">"));
    assert!(xml.contains("<mergeCell ref=\"A1:B2\"/>"));
    assert!(xml.contains("<mergeCell ref=\"D1:E1\"/>"));
}

#[test]
fn test_autofilter_explicit_range() {
    let mut wb = Workbook::new();
    let sheet = wb.worksheet_mut(0).unwrap();
    for row in 1..=4u32 {
        sheet.set_value_at(row, 2, row as f64).unwrap();
        sheet.set_value_at(row, 3, row as f64).unwrap();
    }
    sheet.set_auto_filter(AutoFilter::range(1, 2, 4, 3));

    let bytes = write_to_bytes(&mut wb);
    let xml = part(&bytes, "xl/worksheets/sheet1.xml");
    assert!(xml.contains("<autoFilter ref=\"B1:C4\"/>"));
}

#[test]
fn test_protection_and_header_footer() {
    let mut wb = Workbook::new();
    let sheet = wb.worksheet_mut(0).unwrap();
    sheet.set_value("A1", 1.0).unwrap();
    sheet.set_protection(SheetProtection {
        format_cells: true,
        ..SheetProtection::default()
    });
    sheet.set_header_footer(HeaderFooter {
        odd_footer: Some("&CPage &P".to_string()),
        ..HeaderFooter::default()
    });

    let bytes = write_to_bytes(&mut wb);
    let xml = part(&bytes, "xl/worksheets/sheet1.xml");

    assert!(xml.contains(
        "<sheetProtection sheet=\"1\" objects=\"1\" scenarios=\"1\" formatCells=\"0\"/>"
    ));
    assert!(xml.contains("<oddFooter>&amp;CPage &amp;P</oddFooter>"));

    // protection precedes margins, footer follows them
    let prot = xml.find("<sheetProtection").unwrap();
    let margins = xml.find("<pageMargins").unwrap();
    let footer = xml.find("<headerFooter").unwrap();
    assert!(prot < margins && margins < footer);
}

#[test]
fn test_page_margins_always_present() {
    let mut wb = Workbook::new();
    wb.worksheet_mut(0).unwrap().set_value("A1", 1.0).unwrap();

    let bytes = write_to_bytes(&mut wb);
    let xml = part(&bytes, "xl/worksheets/sheet1.xml");
    assert!(xml.contains(
        "<pageMargins left=\"0.7\" right=\"0.7\" top=\"0.75\" bottom=\"0.75\" header=\"0.3\" footer=\"0.3\"/>"
    ));
}

#[test]
fn test_hyperlink_rels_part() {
    let mut wb = Workbook::new();
    wb.set_string(0, 1, 1, "docs").unwrap();
    wb.worksheet_mut(0)
        .unwrap()
        .add_hyperlink("A1", "https://example.com/docs");

    let bytes = write_to_bytes(&mut wb);
    assert!(has_part(&bytes, "xl/worksheets/_rels/sheet1.xml.rels"));

    let rels = part(&bytes, "xl/worksheets/_rels/sheet1.xml.rels");
    assert!(rels.contains("Target=\"https://example.com/docs\" TargetMode=\"External\""));

    let xml = part(&bytes, "xl/worksheets/sheet1.xml");
    assert!(xml.contains("<hyperlink ref=\"A1\" r:id=\"rId1\"/>"));
}

#[test]
fn test_freeze_panes_view() {
    let mut wb = Workbook::new();
    let sheet = wb.worksheet_mut(0).unwrap();
    sheet.set_value("A1", 1.0).unwrap();
    sheet.freeze_panes(2, 1);

    let bytes = write_to_bytes(&mut wb);
    let xml = part(&bytes, "xl/worksheets/sheet1.xml");
    assert!(xml.contains("<pane ySplit=\"1\" topLeftCell=\"A2\" state=\"frozen\"/>"));
}

#[test]
fn test_large_sheet_round_numbers() {
    let mut wb = Workbook::new();
    let sheet = wb.worksheet_mut(0).unwrap();
    for row in 1..=1500u32 {
        sheet.set_value_at(row, 1, row as f64).unwrap();
    }

    let bytes = write_to_bytes(&mut wb);
    let xml = part(&bytes, "xl/worksheets/sheet1.xml");

    assert_eq!(xml.matches("<row r=\"").count(), 1500);
    assert!(xml.contains("<dimension ref=\"A1:A1500\"/>"));
    assert!(xml.contains("<c r=\"A1500\"><v>1500</v></c>"));
}
