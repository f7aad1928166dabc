//! styles.xml generation
//!
//! Renders the registry's interned component tables straight into the
//! stylesheet part. Table order is index order, so the ids cells carry
//! in their `s` attributes line up by construction.

use gridforge_core::registry::StyleRegistry;
use gridforge_core::{Border, BorderEdge, CellFormat, Color, Fill, Font, Underline};

use crate::xml::escape_attr;

/// Render the complete xl/styles.xml part
pub fn styles_xml(styles: &StyleRegistry) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
    );

    // Custom number formats
    let numfmts: Vec<(u32, &str)> = styles.custom_number_formats().collect();
    if !numfmts.is_empty() {
        xml.push_str(&format!("\n  <numFmts count=\"{}\">", numfmts.len()));
        for (id, code) in &numfmts {
            xml.push_str(&format!(
                "\n    <numFmt numFmtId=\"{}\" formatCode=\"{}\"/>",
                id,
                escape_attr(code)
            ));
        }
        xml.push_str("\n  </numFmts>");
    }

    // Fonts
    xml.push_str(&format!("\n  <fonts count=\"{}\">", styles.fonts().len()));
    for font in styles.fonts().iter() {
        xml.push_str("\n    ");
        xml.push_str(&write_font(font));
    }
    xml.push_str("\n  </fonts>");

    // Fills
    xml.push_str(&format!("\n  <fills count=\"{}\">", styles.fills().len()));
    for fill in styles.fills().iter() {
        xml.push_str("\n    ");
        xml.push_str(&write_fill(fill));
    }
    xml.push_str("\n  </fills>");

    // Borders
    xml.push_str(&format!(
        "\n  <borders count=\"{}\">",
        styles.borders().len()
    ));
    for border in styles.borders().iter() {
        xml.push_str("\n    ");
        xml.push_str(&write_border(border));
    }
    xml.push_str("\n  </borders>");

    // cellStyleXfs (required)
    xml.push_str(
        r#"
  <cellStyleXfs count="1">
    <xf numFmtId="0" fontId="0" fillId="0" borderId="0"/>
  </cellStyleXfs>"#,
    );

    // cellXfs
    xml.push_str(&format!(
        "\n  <cellXfs count=\"{}\">",
        styles.cell_formats().len()
    ));
    for format in styles.cell_formats().iter() {
        xml.push_str("\n    ");
        xml.push_str(&write_xf(format));
    }
    xml.push_str("\n  </cellXfs>");

    // cellStyles (required)
    xml.push_str(
        r#"
  <cellStyles count="1">
    <cellStyle name="Normal" xfId="0" builtinId="0"/>
  </cellStyles>
  <dxfs count="0"/>
  <tableStyles count="0" defaultTableStyle="TableStyleMedium9" defaultPivotStyle="PivotStyleLight16"/>"#,
    );

    xml.push_str("\n</styleSheet>");
    xml
}

fn write_color(tag: &str, color: &Color) -> String {
    match color {
        Color::Auto => format!("<{tag} indexed=\"64\"/>"),
        Color::Rgb { r, g, b } => format!("<{tag} rgb=\"FF{:02X}{:02X}{:02X}\"/>", r, g, b),
        Color::Indexed(i) => format!("<{tag} indexed=\"{}\"/>", i),
        Color::Theme { index, tint } => {
            if *tint == 0 {
                format!("<{tag} theme=\"{}\"/>", index)
            } else {
                format!("<{tag} theme=\"{}\" tint=\"{}\"/>", index, (*tint as f64) / 100.0)
            }
        }
    }
}

fn write_font(font: &Font) -> String {
    let mut s = String::from("<font>");
    if font.bold {
        s.push_str("<b/>");
    }
    if font.italic {
        s.push_str("<i/>");
    }
    if font.strikethrough {
        s.push_str("<strike/>");
    }
    match font.underline {
        Underline::None => {}
        Underline::Single => s.push_str("<u/>"),
        Underline::Double => s.push_str("<u val=\"double\"/>"),
    }
    s.push_str(&format!("<sz val=\"{}\"/>", font.size));
    if !matches!(font.color, Color::Auto) {
        s.push_str(&write_color("color", &font.color));
    }
    s.push_str(&format!("<name val=\"{}\"/>", escape_attr(&font.name)));
    s.push_str("</font>");
    s
}

fn write_fill(fill: &Fill) -> String {
    match fill {
        Fill::None => "<fill><patternFill patternType=\"none\"/></fill>".to_string(),
        Fill::Solid { color } => format!(
            "<fill><patternFill patternType=\"solid\">{}<bgColor indexed=\"64\"/></patternFill></fill>",
            write_color("fgColor", color)
        ),
        Fill::Pattern {
            pattern,
            foreground,
            background,
        } => format!(
            "<fill><patternFill patternType=\"{}\">{}{}</patternFill></fill>",
            pattern.as_xlsx(),
            write_color("fgColor", foreground),
            write_color("bgColor", background)
        ),
    }
}

fn write_edge(tag: &str, edge: &Option<BorderEdge>) -> String {
    match edge {
        None => format!("<{tag}/>"),
        Some(edge) => format!(
            "<{tag} style=\"{}\">{}</{tag}>",
            edge.style.as_xlsx(),
            write_color("color", &edge.color)
        ),
    }
}

fn write_border(border: &Border) -> String {
    let mut s = String::from("<border>");
    s.push_str(&write_edge("left", &border.left));
    s.push_str(&write_edge("right", &border.right));
    s.push_str(&write_edge("top", &border.top));
    s.push_str(&write_edge("bottom", &border.bottom));
    s.push_str("<diagonal/>");
    s.push_str("</border>");
    s
}

fn write_xf(format: &CellFormat) -> String {
    let mut s = format!(
        "<xf numFmtId=\"{}\" fontId=\"{}\" fillId=\"{}\" borderId=\"{}\" xfId=\"0\"",
        format.num_fmt_id, format.font_id, format.fill_id, format.border_id
    );
    if format.num_fmt_id != 0 {
        s.push_str(" applyNumberFormat=\"1\"");
    }
    if format.font_id != 0 {
        s.push_str(" applyFont=\"1\"");
    }
    if format.fill_id != 0 {
        s.push_str(" applyFill=\"1\"");
    }
    if format.border_id != 0 {
        s.push_str(" applyBorder=\"1\"");
    }
    match &format.alignment {
        Some(alignment) => {
            s.push_str(" applyAlignment=\"1\">");
            s.push_str("<alignment");
            if let Some(h) = alignment.horizontal {
                s.push_str(&format!(" horizontal=\"{}\"", h.as_xlsx()));
            }
            if let Some(v) = alignment.vertical {
                s.push_str(&format!(" vertical=\"{}\"", v.as_xlsx()));
            }
            if alignment.wrap_text {
                s.push_str(" wrapText=\"1\"");
            }
            s.push_str("/></xf>");
        }
        None => s.push_str("/>"),
    }
    s
}
