//! Cell serialization
//!
//! Each cell renders itself into its row's `<row>` element. Value
//! typing follows the `t` attribute rules of SpreadsheetML: shared
//! strings are `t="s"` with an index payload, inline strings are
//! `t="inlineStr"`, booleans `t="b"`, errors `t="e"`; numbers and date
//! serials carry no type attribute.

use gridforge_core::{Cell, CellValue};

use crate::xml::escape_text;

/// Append a cell's `<c>` element to the row body.
///
/// Empty cells are emitted only when they carry a style, so a
/// formatting-only cell survives the round trip.
pub fn write_cell(out: &mut String, cell: &Cell) {
    let cell_ref = cell.address.to_a1_string();
    let style_attr = match cell.style_id {
        Some(s) if s != 0 => format!(" s=\"{}\"", s),
        _ => String::new(),
    };

    match &cell.value {
        CellValue::Number(n) => {
            out.push_str(&format!(
                "<c r=\"{}\"{}><v>{}</v></c>",
                cell_ref, style_attr, n
            ));
        }
        CellValue::Boolean(b) => {
            out.push_str(&format!(
                "<c r=\"{}\"{} t=\"b\"><v>{}</v></c>",
                cell_ref,
                style_attr,
                if *b { 1 } else { 0 }
            ));
        }
        CellValue::Shared(idx) => {
            out.push_str(&format!(
                "<c r=\"{}\"{} t=\"s\"><v>{}</v></c>",
                cell_ref, style_attr, idx
            ));
        }
        CellValue::Inline(s) => {
            out.push_str(&format!(
                "<c r=\"{}\"{} t=\"inlineStr\"><is><t>{}</t></is></c>",
                cell_ref,
                style_attr,
                escape_text(s)
            ));
        }
        CellValue::Date(dt) => {
            out.push_str(&format!(
                "<c r=\"{}\"{}><v>{}</v></c>",
                cell_ref,
                style_attr,
                CellValue::date_to_serial(dt)
            ));
        }
        CellValue::Formula { text, result } => {
            out.push_str(&format!("<c r=\"{}\"{}", cell_ref, style_attr));
            match result.as_deref() {
                Some(CellValue::Inline(s)) => {
                    out.push_str(&format!(
                        " t=\"str\"><f>{}</f><v>{}</v></c>",
                        escape_text(text),
                        escape_text(s)
                    ));
                }
                Some(CellValue::Boolean(b)) => {
                    out.push_str(&format!(
                        " t=\"b\"><f>{}</f><v>{}</v></c>",
                        escape_text(text),
                        if *b { 1 } else { 0 }
                    ));
                }
                Some(CellValue::Number(n)) => {
                    out.push_str(&format!("><f>{}</f><v>{}</v></c>", escape_text(text), n));
                }
                Some(CellValue::Error(e)) => {
                    out.push_str(&format!(
                        " t=\"e\"><f>{}</f><v>{}</v></c>",
                        escape_text(text),
                        e.as_str()
                    ));
                }
                _ => {
                    out.push_str(&format!("><f>{}</f></c>", escape_text(text)));
                }
            }
        }
        CellValue::Error(e) => {
            out.push_str(&format!(
                "<c r=\"{}\"{} t=\"e\"><v>{}</v></c>",
                cell_ref, style_attr, e.as_str()
            ));
        }
        CellValue::Empty => {
            if !style_attr.is_empty() {
                out.push_str(&format!("<c r=\"{}\"{}/>", cell_ref, style_attr));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridforge_core::CellAddress;
    use pretty_assertions::assert_eq;

    fn render(cell: &Cell) -> String {
        let mut out = String::new();
        write_cell(&mut out, cell);
        out
    }

    #[test]
    fn test_number_cell() {
        let cell = Cell::new(CellAddress::new(1, 2), CellValue::Number(42.5));
        assert_eq!(render(&cell), "<c r=\"B1\"><v>42.5</v></c>");
    }

    #[test]
    fn test_shared_string_cell() {
        let cell = Cell::new(CellAddress::new(3, 1), CellValue::Shared(7));
        assert_eq!(render(&cell), "<c r=\"A3\" t=\"s\"><v>7</v></c>");
    }

    #[test]
    fn test_inline_string_escaped() {
        let cell = Cell::new(
            CellAddress::new(1, 1),
            CellValue::Inline("a < b".to_string()),
        );
        assert_eq!(
            render(&cell),
            "<c r=\"A1\" t=\"inlineStr\"><is><t>a &lt; b</t></is></c>"
        );
    }

    #[test]
    fn test_boolean_cell() {
        let cell = Cell::new(CellAddress::new(1, 1), CellValue::Boolean(true));
        assert_eq!(render(&cell), "<c r=\"A1\" t=\"b\"><v>1</v></c>");
    }

    #[test]
    fn test_formula_without_result() {
        let cell = Cell::new(CellAddress::new(2, 1), CellValue::formula("=SUM(B1:B9)"));
        assert_eq!(render(&cell), "<c r=\"A2\"><f>SUM(B1:B9)</f></c>");
    }

    #[test]
    fn test_formula_with_cached_number() {
        let cell = Cell::new(
            CellAddress::new(2, 1),
            CellValue::Formula {
                text: "A1*2".to_string(),
                result: Some(Box::new(CellValue::Number(10.0))),
            },
        );
        assert_eq!(render(&cell), "<c r=\"A2\"><f>A1*2</f><v>10</v></c>");
    }

    #[test]
    fn test_styled_empty_cell_survives() {
        let cell = Cell::styled(CellAddress::new(1, 1), CellValue::Empty, 3);
        assert_eq!(render(&cell), "<c r=\"A1\" s=\"3\"/>");
    }

    #[test]
    fn test_unstyled_empty_cell_skipped() {
        let cell = Cell::new(CellAddress::new(1, 1), CellValue::Empty);
        assert_eq!(render(&cell), "");
    }

    #[test]
    fn test_error_cell() {
        let cell = Cell::new(
            CellAddress::new(1, 1),
            CellValue::Error(gridforge_core::CellErrorValue::Div0),
        );
        assert_eq!(render(&cell), "<c r=\"A1\" t=\"e\"><v>#DIV/0!</v></c>");
    }
}
