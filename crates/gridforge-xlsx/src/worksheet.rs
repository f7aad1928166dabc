//! Worksheet part serialization
//!
//! [`WorksheetSerializer`] renders one worksheet into its sheet XML part
//! and, when the sheet has relationship entries, its relationship part.
//! The element order inside `<worksheet>` is fixed by the SpreadsheetML
//! schema; each stage decides independently whether it emits anything,
//! but the stages always run in the same order.
//!
//! Row data is emitted in bounded batches so peak working-set stays flat
//! on very large sheets. Batching is pure chunking of one linear
//! traversal and never changes the output.

use std::sync::atomic::{AtomicBool, Ordering};

use gridforge_core::registry::{DefinedName, DefinedNameTable};
use gridforge_core::{
    CellAddress, CfRuleKind, Relationship, Row, Worksheet,
};

use crate::cell::write_cell;
use crate::error::{XlsxError, XlsxResult};
use crate::xml::{escape_attr, escape_text};

/// Rows emitted per batch
pub const ROW_BATCH: usize = 500;

/// The rendered parts of one worksheet
#[derive(Debug)]
pub struct WorksheetParts {
    /// xl/worksheets/sheetN.xml
    pub sheet_xml: String,
    /// xl/worksheets/_rels/sheetN.xml.rels, absent when the sheet has no
    /// relationship entries
    pub rels_xml: Option<String>,
}

/// Serializer for a single worksheet.
///
/// Holds the sheet immutably for the duration of serialization; the only
/// shared state it writes is the defined-name table passed to
/// [`serialize`](Self::serialize), which the autofilter stage appends to.
pub struct WorksheetSerializer<'a> {
    sheet: &'a Worksheet,
    /// 0-based position in the workbook (the `localSheetId` scope)
    sheet_index: usize,
    batch_size: usize,
    cancel: Option<&'a AtomicBool>,
}

impl<'a> WorksheetSerializer<'a> {
    /// Create a serializer for a sheet at its workbook position
    pub fn new(sheet: &'a Worksheet, sheet_index: usize) -> Self {
        Self {
            sheet,
            sheet_index,
            batch_size: ROW_BATCH,
            cancel: None,
        }
    }

    /// Override the row batch size (values below 1 are clamped to 1)
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Abort between row batches when the flag becomes true
    pub fn with_cancel_flag(mut self, cancel: &'a AtomicBool) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Render the sheet XML and relationship part.
    ///
    /// Appends to `defined_names` when the sheet has an autofilter;
    /// entries added before a cancellation remain valid, just unused.
    pub fn serialize(&self, defined_names: &mut DefinedNameTable) -> XlsxResult<WorksheetParts> {
        let mut xml = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:mc="http://schemas.openxmlformats.org/markup-compatibility/2006" xmlns:x14ac="http://schemas.microsoft.com/office/spreadsheetml/2009/9/ac" mc:Ignorable="x14ac">"#,
        );

        self.write_sheet_pr(&mut xml);
        self.write_dimension(&mut xml);
        self.write_sheet_views(&mut xml);
        self.write_sheet_format(&mut xml);
        self.write_cols(&mut xml);
        self.write_sheet_data(&mut xml)?;
        self.write_protection(&mut xml);
        self.write_auto_filter(&mut xml, defined_names)?;
        self.write_merge_cells(&mut xml);
        self.write_conditional_formatting(&mut xml);
        self.write_data_validations(&mut xml);
        self.write_hyperlinks(&mut xml);
        self.write_print(&mut xml);
        self.write_drawing(&mut xml);

        xml.push_str("\n</worksheet>");

        Ok(WorksheetParts {
            sheet_xml: xml,
            rels_xml: self.rels_xml(),
        })
    }

    // Stage 1: sheet properties
    fn write_sheet_pr(&self, xml: &mut String) {
        let props = self.sheet.properties();
        if props.is_default() {
            return;
        }
        xml.push_str("\n    <sheetPr");
        if props.filter_mode {
            xml.push_str(" filterMode=\"1\"");
        }
        xml.push('>');
        if !props.summary_below || !props.summary_right {
            xml.push_str("<outlinePr");
            if !props.summary_below {
                xml.push_str(" summaryBelow=\"0\"");
            }
            if !props.summary_right {
                xml.push_str(" summaryRight=\"0\"");
            }
            xml.push_str("/>");
        }
        if props.fit_to_page {
            xml.push_str("<pageSetUpPr fitToPage=\"1\"/>");
        }
        xml.push_str("</sheetPr>");
    }

    // Stage 2: dimension, always present
    fn write_dimension(&self, xml: &mut String) {
        xml.push_str(&format!(
            "\n    <dimension ref=\"{}\"/>",
            self.sheet.dimension_ref()
        ));
    }

    // Stage 3: sheet views, always present
    fn write_sheet_views(&self, xml: &mut String) {
        let view = self.sheet.view();
        xml.push_str("\n    <sheetViews>\n        <sheetView");
        if view.tab_selected {
            xml.push_str(" tabSelected=\"1\"");
        }
        if !view.show_grid_lines {
            xml.push_str(" showGridLines=\"0\"");
        }
        if !view.show_row_col_headers {
            xml.push_str(" showRowColHeaders=\"0\"");
        }
        if view.zoom_scale != 100 {
            xml.push_str(&format!(" zoomScale=\"{}\"", view.zoom_scale));
        }
        xml.push_str(" workbookViewId=\"0\"");

        let pane = view.pane.as_ref();
        if pane.is_none() && view.active_cell.is_none() {
            xml.push_str("/>");
        } else {
            xml.push('>');
            if let Some(pane) = pane {
                xml.push_str("<pane");
                if pane.x_split != 0.0 {
                    xml.push_str(&format!(" xSplit=\"{}\"", pane.x_split));
                }
                if pane.y_split != 0.0 {
                    xml.push_str(&format!(" ySplit=\"{}\"", pane.y_split));
                }
                if let Some(cell) = &pane.top_left_cell {
                    xml.push_str(&format!(" topLeftCell=\"{}\"", cell));
                }
                xml.push_str(&format!(" state=\"{}\"/>", pane.state.as_xlsx()));
            }
            if let Some(cell) = &view.active_cell {
                xml.push_str(&format!(
                    "<selection activeCell=\"{0}\" sqref=\"{0}\"/>",
                    escape_attr(cell)
                ));
            }
            xml.push_str("</sheetView>");
            xml.push_str("\n    </sheetViews>");
            return;
        }
        xml.push_str("\n    </sheetViews>");
    }

    // Stage 4: sheet format properties, always present
    fn write_sheet_format(&self, xml: &mut String) {
        let fmt = self.sheet.format();
        xml.push_str(&format!(
            "\n    <sheetFormatPr defaultRowHeight=\"{}\"",
            fmt.row_height()
        ));
        if fmt.has_custom_row_height() {
            xml.push_str(" customHeight=\"1\"");
        }
        if let Some(width) = fmt.default_col_width {
            xml.push_str(&format!(" defaultColWidth=\"{}\"", width));
        }
        if fmt.outline_level_row > 0 {
            xml.push_str(&format!(" outlineLevelRow=\"{}\"", fmt.outline_level_row));
        }
        if fmt.outline_level_col > 0 {
            xml.push_str(&format!(" outlineLevelCol=\"{}\"", fmt.outline_level_col));
        }
        xml.push_str("/>");
    }

    // Stage 5: column settings
    fn write_cols(&self, xml: &mut String) {
        let columns = self.sheet.columns();
        if columns.is_empty() {
            return;
        }
        xml.push_str("\n    <cols>");
        for col in columns {
            xml.push_str(&format!("\n        <col min=\"{}\" max=\"{}\"", col.min, col.max));
            if let Some(width) = col.width {
                xml.push_str(&format!(" width=\"{}\" customWidth=\"1\"", width));
            }
            if let Some(style) = col.style_id {
                xml.push_str(&format!(" style=\"{}\"", style));
            }
            if col.hidden {
                xml.push_str(" hidden=\"1\"");
            }
            if col.outline_level > 0 {
                xml.push_str(&format!(" outlineLevel=\"{}\"", col.outline_level));
            }
            if col.collapsed {
                xml.push_str(" collapsed=\"1\"");
            }
            if col.best_fit {
                xml.push_str(" bestFit=\"1\"");
            }
            xml.push_str("/>");
        }
        xml.push_str("\n    </cols>");
    }

    // Stage 6: row/cell payload, in bounded batches
    fn write_sheet_data(&self, xml: &mut String) -> XlsxResult<()> {
        let rows: Vec<&Row> = self.sheet.rows().collect();
        if rows.is_empty() {
            xml.push_str("\n    <sheetData/>");
            return Ok(());
        }

        xml.push_str("\n    <sheetData>");
        let mut batches = 0usize;
        for batch in rows.chunks(self.batch_size) {
            if let Some(cancel) = self.cancel {
                if cancel.load(Ordering::Relaxed) {
                    return Err(XlsxError::Cancelled);
                }
            }
            for row in batch {
                self.write_row(xml, row);
            }
            batches += 1;
        }
        xml.push_str("\n    </sheetData>");

        log::debug!(
            "sheet {}: wrote {} rows in {} batches",
            self.sheet.name(),
            rows.len(),
            batches
        );
        Ok(())
    }

    fn write_row(&self, xml: &mut String, row: &Row) {
        let cells = self.sheet.cells_in_row(row.number);

        xml.push_str(&format!("\n        <row r=\"{}\"", row.number));
        if let (Some(first), Some(last)) = (cells.first(), cells.last()) {
            xml.push_str(&format!(
                " spans=\"{}:{}\"",
                first.address.col, last.address.col
            ));
        }
        if let Some(style) = row.style_id {
            xml.push_str(&format!(" s=\"{}\" customFormat=\"1\"", style));
        }
        // sheet-wide custom default height forces the flag on every row
        if let Some(height) = row.height {
            xml.push_str(&format!(" ht=\"{}\" customHeight=\"1\"", height));
        } else if self.sheet.format().has_custom_row_height() {
            xml.push_str(&format!(
                " ht=\"{}\" customHeight=\"1\"",
                self.sheet.format().row_height()
            ));
        }
        if row.hidden {
            xml.push_str(" hidden=\"1\"");
        }
        if row.outline_level > 0 {
            xml.push_str(&format!(" outlineLevel=\"{}\"", row.outline_level));
        }
        if row.collapsed {
            xml.push_str(" collapsed=\"1\"");
        }
        if row.thick_top {
            xml.push_str(" thickTop=\"1\"");
        }
        if row.thick_bottom {
            xml.push_str(" thickBot=\"1\"");
        }

        if cells.is_empty() {
            xml.push_str("/>");
            return;
        }
        xml.push('>');
        for cell in cells {
            write_cell(xml, cell);
        }
        xml.push_str("</row>");
    }

    // Stage 7: sheet protection
    fn write_protection(&self, xml: &mut String) {
        let Some(protection) = self.sheet.protection() else {
            return;
        };
        xml.push_str("\n    <sheetProtection");
        if let Some(hash) = protection.password_hash {
            xml.push_str(&format!(" password=\"{:04X}\"", hash));
        }
        if protection.sheet {
            xml.push_str(" sheet=\"1\"");
        }
        if protection.objects {
            xml.push_str(" objects=\"1\"");
        }
        if protection.scenarios {
            xml.push_str(" scenarios=\"1\"");
        }
        // permission flags: granting one back means clearing its lock
        if protection.format_cells {
            xml.push_str(" formatCells=\"0\"");
        }
        if protection.format_columns {
            xml.push_str(" formatColumns=\"0\"");
        }
        if protection.format_rows {
            xml.push_str(" formatRows=\"0\"");
        }
        if protection.insert_columns {
            xml.push_str(" insertColumns=\"0\"");
        }
        if protection.insert_rows {
            xml.push_str(" insertRows=\"0\"");
        }
        if protection.insert_hyperlinks {
            xml.push_str(" insertHyperlinks=\"0\"");
        }
        if protection.delete_columns {
            xml.push_str(" deleteColumns=\"0\"");
        }
        if protection.delete_rows {
            xml.push_str(" deleteRows=\"0\"");
        }
        if !protection.select_locked_cells {
            xml.push_str(" selectLockedCells=\"1\"");
        }
        if !protection.select_unlocked_cells {
            xml.push_str(" selectUnlockedCells=\"1\"");
        }
        if protection.sort {
            xml.push_str(" sort=\"0\"");
        }
        if protection.auto_filter {
            xml.push_str(" autoFilter=\"0\"");
        }
        if protection.pivot_tables {
            xml.push_str(" pivotTables=\"0\"");
        }
        xml.push_str("/>");
    }

    // Stage 8: autofilter, registering its defined name as a side effect
    fn write_auto_filter(
        &self,
        xml: &mut String,
        defined_names: &mut DefinedNameTable,
    ) -> XlsxResult<()> {
        let Some(filter) = self.sheet.auto_filter() else {
            return Ok(());
        };

        let (start_row, start_col, end_row, end_col) = self.resolve_filter_bounds(filter)?;

        let start = CellAddress::new(start_row, start_col);
        let end = CellAddress::new(end_row, end_col);
        xml.push_str(&format!("\n    <autoFilter ref=\"{}:{}\"/>", start, end));

        // Excel finds the filter range through this hidden name
        let sheet_name = self.sheet.name().replace('\'', "''");
        defined_names.add(
            DefinedName::sheet_scope(
                "_xlnm._FilterDatabase",
                format!(
                    "'{}'!{}:{}",
                    sheet_name,
                    start.to_absolute_string(),
                    end.to_absolute_string()
                ),
                self.sheet_index as u32,
            )
            .hidden(),
        );
        Ok(())
    }

    /// Resolve missing filter bounds from the populated rows.
    ///
    /// The end row is found by scanning forward through consecutive
    /// populated row numbers; the scan is bounded by the last used row so
    /// a misconfigured filter fails instead of walking the full row space.
    fn resolve_filter_bounds(
        &self,
        filter: &gridforge_core::AutoFilter,
    ) -> XlsxResult<(u32, u16, u32, u16)> {
        let start_row = filter.start_row;
        let last_row = self
            .sheet
            .last_used()
            .map(|(r, _)| r)
            .filter(|&r| r >= start_row)
            .ok_or_else(|| {
                XlsxError::UnresolvedAutoFilter(format!(
                    "no data at or below filter start row {}",
                    start_row
                ))
            })?;

        let end_row = match filter.end_row {
            Some(end) => end,
            None => {
                if self.sheet.row(start_row).is_none() {
                    return Err(XlsxError::UnresolvedAutoFilter(format!(
                        "filter start row {} has no data",
                        start_row
                    )));
                }
                let mut row = start_row;
                while row <= last_row && self.sheet.row(row + 1).is_some() {
                    row += 1;
                }
                row
            }
        };

        let (start_col, end_col) = match (filter.start_col, filter.end_col) {
            (Some(start), Some(end)) => (start, end),
            (given_start, given_end) => {
                let header = self.sheet.cells_in_row(start_row);
                let (Some(first), Some(last)) = (header.first(), header.last()) else {
                    return Err(XlsxError::UnresolvedAutoFilter(format!(
                        "filter row {} has no cells to infer columns from",
                        start_row
                    )));
                };
                (
                    given_start.unwrap_or(first.address.col),
                    given_end.unwrap_or(last.address.col),
                )
            }
        };

        Ok((start_row, start_col, end_row, end_col))
    }

    // Stage 9: merged ranges
    fn write_merge_cells(&self, xml: &mut String) {
        let merged = self.sheet.merged_ranges();
        if merged.is_empty() {
            return;
        }
        xml.push_str(&format!("\n    <mergeCells count=\"{}\">", merged.len()));
        for range in merged {
            xml.push_str(&format!(
                "\n        <mergeCell ref=\"{}\"/>",
                range.to_a1_string()
            ));
        }
        xml.push_str("\n    </mergeCells>");
    }

    // Stage 10: conditional formatting, one element per rule
    fn write_conditional_formatting(&self, xml: &mut String) {
        for rule in self.sheet.conditional_formats() {
            if rule.ranges.is_empty() {
                continue;
            }
            let sqref: String = rule
                .ranges
                .iter()
                .map(|r| r.to_a1_string())
                .collect::<Vec<_>>()
                .join(" ");
            xml.push_str(&format!(
                "\n    <conditionalFormatting sqref=\"{}\">",
                sqref
            ));

            let dxf_attr = rule
                .dxf_id
                .map_or(String::new(), |id| format!(" dxfId=\"{}\"", id));
            let stop_attr = if rule.stop_if_true {
                " stopIfTrue=\"1\""
            } else {
                ""
            };
            let priority = rule.priority.max(1);

            match &rule.kind {
                CfRuleKind::CellIs {
                    operator,
                    formula1,
                    formula2,
                } => {
                    xml.push_str(&format!(
                        "\n        <cfRule type=\"cellIs\" operator=\"{}\" priority=\"{}\"{}{}><formula>{}</formula>",
                        operator.as_xlsx(),
                        priority,
                        dxf_attr,
                        stop_attr,
                        escape_text(formula1)
                    ));
                    if let Some(f2) = formula2 {
                        xml.push_str(&format!("<formula>{}</formula>", escape_text(f2)));
                    }
                    xml.push_str("</cfRule>");
                }
                CfRuleKind::Expression { formula } => {
                    xml.push_str(&format!(
                        "\n        <cfRule type=\"expression\" priority=\"{}\"{}{}><formula>{}</formula></cfRule>",
                        priority,
                        dxf_attr,
                        stop_attr,
                        escape_text(formula)
                    ));
                }
            }
            xml.push_str("\n    </conditionalFormatting>");
        }
    }

    // Stage 11: data validations
    fn write_data_validations(&self, xml: &mut String) {
        let validations = self.sheet.validations();
        if validations.is_empty() {
            return;
        }
        xml.push_str(&format!(
            "\n    <dataValidations count=\"{}\">",
            validations.len()
        ));
        for rule in validations.iter() {
            xml.push_str("\n        <dataValidation");
            if let Some(t) = rule.validation_type {
                xml.push_str(&format!(" type=\"{}\"", t.as_xlsx()));
            }
            if let Some(style) = rule.error_style {
                xml.push_str(&format!(" errorStyle=\"{}\"", style.as_xlsx()));
            }
            if let Some(mode) = rule.ime_mode {
                xml.push_str(&format!(" imeMode=\"{}\"", mode.as_xlsx()));
            }
            if let Some(op) = rule.operator {
                xml.push_str(&format!(" operator=\"{}\"", op.as_xlsx()));
            }
            if rule.allow_blank == Some(true) {
                xml.push_str(" allowBlank=\"1\"");
            }
            // the persisted attribute is inverted relative to the option:
            // it appears, as truthy, only when the dropdown is suppressed
            if rule.show_drop_down == Some(false) {
                xml.push_str(" showDropDown=\"1\"");
            }
            if rule.show_input_message == Some(true) {
                xml.push_str(" showInputMessage=\"1\"");
            }
            if rule.show_error_message == Some(true) {
                xml.push_str(" showErrorMessage=\"1\"");
            }
            if let Some(title) = &rule.error_title {
                xml.push_str(&format!(" errorTitle=\"{}\"", escape_attr(title)));
            }
            if let Some(error) = &rule.error {
                xml.push_str(&format!(" error=\"{}\"", escape_attr(error)));
            }
            if let Some(title) = &rule.prompt_title {
                xml.push_str(&format!(" promptTitle=\"{}\"", escape_attr(title)));
            }
            if let Some(prompt) = &rule.prompt {
                xml.push_str(&format!(" prompt=\"{}\"", escape_attr(prompt)));
            }
            xml.push_str(&format!(" sqref=\"{}\"", escape_attr(&rule.sqref)));

            match &rule.formula1 {
                None => xml.push_str("/>"),
                Some(f1) => {
                    xml.push_str(&format!(
                        "><formula1>{}</formula1>",
                        escape_text(&f1.to_quoted())
                    ));
                    if let Some(f2) = &rule.formula2 {
                        xml.push_str(&format!(
                            "<formula2>{}</formula2>",
                            escape_text(&f2.to_quoted())
                        ));
                    }
                    xml.push_str("</dataValidation>");
                }
            }
        }
        xml.push_str("\n    </dataValidations>");
    }

    // Stage 12: hyperlinks
    fn write_hyperlinks(&self, xml: &mut String) {
        let hyperlinks = self.sheet.hyperlinks();
        if hyperlinks.is_empty() {
            return;
        }
        xml.push_str("\n    <hyperlinks>");
        for link in hyperlinks {
            xml.push_str(&format!(
                "\n        <hyperlink ref=\"{}\" r:id=\"rId{}\"",
                escape_attr(&link.address),
                link.rel_index + 1
            ));
            if let Some(tooltip) = &link.tooltip {
                xml.push_str(&format!(" tooltip=\"{}\"", escape_attr(tooltip)));
            }
            xml.push_str("/>");
        }
        xml.push_str("\n    </hyperlinks>");
    }

    // Stage 13: print options, margins, page setup, header/footer
    fn write_print(&self, xml: &mut String) {
        let options = self.sheet.print_options();
        if !options.is_default() {
            xml.push_str("\n    <printOptions");
            if options.horizontal_centered {
                xml.push_str(" horizontalCentered=\"1\"");
            }
            if options.vertical_centered {
                xml.push_str(" verticalCentered=\"1\"");
            }
            if options.headings {
                xml.push_str(" headings=\"1\"");
            }
            if options.grid_lines {
                xml.push_str(" gridLines=\"1\"");
            }
            xml.push_str("/>");
        }

        // pageMargins has no all-default skip
        let margins = self.sheet.margins();
        xml.push_str(&format!(
            "\n    <pageMargins left=\"{}\" right=\"{}\" top=\"{}\" bottom=\"{}\" header=\"{}\" footer=\"{}\"/>",
            margins.left, margins.right, margins.top, margins.bottom, margins.header, margins.footer
        ));

        let setup = self.sheet.page_setup();
        if !setup.is_default() {
            xml.push_str("\n    <pageSetup");
            if let Some(size) = setup.paper_size {
                xml.push_str(&format!(" paperSize=\"{}\"", size));
            }
            if setup.scale != 100 {
                xml.push_str(&format!(" scale=\"{}\"", setup.scale));
            }
            if let Some(w) = setup.fit_to_width {
                xml.push_str(&format!(" fitToWidth=\"{}\"", w));
            }
            if let Some(h) = setup.fit_to_height {
                xml.push_str(&format!(" fitToHeight=\"{}\"", h));
            }
            if let Some(first) = setup.first_page_number {
                xml.push_str(&format!(" firstPageNumber=\"{}\" useFirstPageNumber=\"1\"", first));
            }
            xml.push_str(&format!(
                " orientation=\"{}\"/>",
                if setup.landscape { "landscape" } else { "portrait" }
            ));
        }

        if let Some(hf) = self.sheet.header_footer() {
            if !hf.is_empty() {
                xml.push_str("\n    <headerFooter");
                if hf.different_odd_even {
                    xml.push_str(" differentOddEven=\"1\"");
                }
                if hf.different_first {
                    xml.push_str(" differentFirst=\"1\"");
                }
                xml.push('>');
                if let Some(header) = &hf.odd_header {
                    xml.push_str(&format!("<oddHeader>{}</oddHeader>", escape_text(header)));
                }
                if let Some(footer) = &hf.odd_footer {
                    xml.push_str(&format!("<oddFooter>{}</oddFooter>", escape_text(footer)));
                }
                xml.push_str("</headerFooter>");
            }
        }
    }

    // Stage 14: drawing reference
    fn write_drawing(&self, xml: &mut String) {
        if let Some(rel_index) = self.sheet.drawing_rel() {
            xml.push_str(&format!("\n    <drawing r:id=\"rId{}\"/>", rel_index + 1));
        }
    }

    /// The relationship part, derived purely from list position
    fn rels_xml(&self) -> Option<String> {
        let relationships = self.sheet.relationships();
        if relationships.is_empty() {
            return None;
        }

        let mut xml = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );
        for (i, rel) in relationships.iter().enumerate() {
            let rid = i + 1;
            match rel {
                Relationship::Hyperlink { target } => {
                    xml.push_str(&format!(
                        "\n    <Relationship Id=\"rId{}\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink\" Target=\"{}\" TargetMode=\"External\"/>",
                        rid,
                        escape_attr(target)
                    ));
                }
                Relationship::Drawing => {
                    xml.push_str(&format!(
                        "\n    <Relationship Id=\"rId{}\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/drawing\" Target=\"../drawings/drawing{}.xml\"/>",
                        rid,
                        self.sheet.sheet_id()
                    ));
                }
            }
        }
        xml.push_str("\n</Relationships>");
        Some(xml)
    }
}
