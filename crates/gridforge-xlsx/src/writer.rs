//! XLSX package writer
//!
//! Assembles a workbook into a complete .xlsx archive. Worksheets are
//! serialized first so their side effects (autofilter defined names) are
//! registered before xl/workbook.xml is rendered.

use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use gridforge_core::Workbook;

use crate::error::{XlsxError, XlsxResult};
use crate::styles::styles_xml;
use crate::worksheet::{WorksheetParts, WorksheetSerializer};
use crate::xml::{escape_attr, escape_text};

/// XLSX file writer
pub struct XlsxWriter;

impl XlsxWriter {
    /// Write a workbook to a file path
    pub fn write_file<P: AsRef<Path>>(workbook: &mut Workbook, path: P) -> XlsxResult<()> {
        let file = File::create(path)?;
        Self::write(workbook, file)
    }

    /// Write a workbook to a writer.
    ///
    /// Takes `&mut` because serialization appends to the workbook's
    /// defined-name table; cell and style data is not touched.
    pub fn write<W: Write + Seek>(workbook: &mut Workbook, writer: W) -> XlsxResult<()> {
        if workbook.is_empty() {
            return Err(XlsxError::InvalidFormat(
                "workbook has no worksheets".into(),
            ));
        }

        // Serialize every sheet before any part is written: the filter
        // defined names must exist when workbook.xml is rendered.
        let (sheets, registry) = workbook.split_mut();
        let mut parts: Vec<WorksheetParts> = Vec::with_capacity(sheets.len());
        for (i, sheet) in sheets.iter().enumerate() {
            let part = WorksheetSerializer::new(sheet, i).serialize(&mut registry.defined_names)?;
            parts.push(part);
        }

        let mut zip = zip::ZipWriter::new(writer);
        let options = zip::write::SimpleFileOptions::default();
        let has_shared_strings = !workbook.registry().strings.is_empty();

        // [Content_Types].xml
        zip.start_file("[Content_Types].xml", options)?;
        zip.write_all(Self::content_types_xml(workbook, has_shared_strings).as_bytes())?;

        // _rels/.rels
        zip.start_file("_rels/.rels", options)?;
        zip.write_all(Self::root_rels_xml().as_bytes())?;

        // xl/workbook.xml
        zip.start_file("xl/workbook.xml", options)?;
        zip.write_all(Self::workbook_xml(workbook).as_bytes())?;

        // xl/_rels/workbook.xml.rels
        zip.start_file("xl/_rels/workbook.xml.rels", options)?;
        zip.write_all(Self::workbook_rels_xml(workbook, has_shared_strings).as_bytes())?;

        // xl/styles.xml
        zip.start_file("xl/styles.xml", options)?;
        zip.write_all(styles_xml(&workbook.registry().styles).as_bytes())?;

        // xl/sharedStrings.xml, only when strings were interned
        if has_shared_strings {
            zip.start_file("xl/sharedStrings.xml", options)?;
            zip.write_all(Self::shared_strings_xml(workbook).as_bytes())?;
        }

        // worksheet parts and their relationship parts
        for (i, part) in parts.iter().enumerate() {
            zip.start_file(format!("xl/worksheets/sheet{}.xml", i + 1), options)?;
            zip.write_all(part.sheet_xml.as_bytes())?;

            if let Some(rels) = &part.rels_xml {
                zip.start_file(
                    format!("xl/worksheets/_rels/sheet{}.xml.rels", i + 1),
                    options,
                )?;
                zip.write_all(rels.as_bytes())?;
            }
        }

        zip.finish()?;
        log::debug!(
            "wrote workbook: {} sheets, {} shared strings, {} defined names",
            workbook.sheet_count(),
            workbook.registry().strings.unique_count(),
            workbook.registry().defined_names.len()
        );
        Ok(())
    }

    fn content_types_xml(workbook: &Workbook, has_shared_strings: bool) -> String {
        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
    <Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>"#,
        );

        if has_shared_strings {
            content.push_str(
                r#"
    <Override PartName="/xl/sharedStrings.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sharedStrings+xml"/>"#,
            );
        }

        for i in 0..workbook.sheet_count() {
            content.push_str(&format!(
                r#"
    <Override PartName="/xl/worksheets/sheet{}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
                i + 1
            ));
        }

        content.push_str("\n</Types>");
        content
    }

    fn root_rels_xml() -> &'static str {
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#
    }

    fn workbook_xml(workbook: &Workbook) -> String {
        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
    <sheets>"#,
        );

        for (i, sheet) in workbook.worksheets().enumerate() {
            content.push_str(&format!(
                r#"
        <sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
                escape_attr(sheet.name()),
                sheet.sheet_id(),
                i + 1
            ));
        }
        content.push_str("\n    </sheets>");

        let defined_names = &workbook.registry().defined_names;
        if !defined_names.is_empty() {
            content.push_str("\n    <definedNames>");
            for name in defined_names.iter() {
                content.push_str(&format!(
                    "\n        <definedName name=\"{}\"",
                    escape_attr(&name.name)
                ));
                if let Some(sheet_id) = name.local_sheet_id {
                    content.push_str(&format!(" localSheetId=\"{}\"", sheet_id));
                }
                if name.hidden {
                    content.push_str(" hidden=\"1\"");
                }
                content.push_str(&format!(">{}</definedName>", escape_text(&name.ref_formula)));
            }
            content.push_str("\n    </definedNames>");
        }

        content.push_str("\n</workbook>");
        content
    }

    fn workbook_rels_xml(workbook: &Workbook, has_shared_strings: bool) -> String {
        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );

        for i in 0..workbook.sheet_count() {
            content.push_str(&format!(
                r#"
    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{}.xml"/>"#,
                i + 1,
                i + 1
            ));
        }

        let styles_rid = workbook.sheet_count() + 1;
        content.push_str(&format!(
            r#"
    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#,
            styles_rid
        ));

        if has_shared_strings {
            content.push_str(&format!(
                r#"
    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/sharedStrings" Target="sharedStrings.xml"/>"#,
                styles_rid + 1
            ));
        }

        content.push_str("\n</Relationships>");
        content
    }

    fn shared_strings_xml(workbook: &Workbook) -> String {
        let strings = &workbook.registry().strings;
        let mut content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="{}" uniqueCount="{}">"#,
            strings.total_refs(),
            strings.unique_count()
        );

        for s in strings.iter() {
            // whitespace at the edges must survive the XML round trip
            if s.trim() != s {
                content.push_str(&format!(
                    "\n    <si><t xml:space=\"preserve\">{}</t></si>",
                    escape_text(s)
                ));
            } else {
                content.push_str(&format!("\n    <si><t>{}</t></si>", escape_text(s)));
            }
        }

        content.push_str("\n</sst>");
        content
    }
}
