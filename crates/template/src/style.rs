//! Style resolution and application

use crate::schema::{SectionElement, Style, TextAlign};
use doc_core::{Alignment, DocumentBuilder, ParagraphRef, RunRef, RunStyle};

/// Left margin of indented values, in twips (second third of the line)
pub const INDENT_POSITION: u32 = 3000;

/// Tab stop at the center of a line, in twips
pub const CENTER_TAB_POSITION: u32 = 4500;

/// Tab stop at the right border of a line, in twips
pub const RIGHT_TAB_POSITION: u32 = 9000;

/// Which half of a section element is being styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementPart {
    Key,
    Value,
}

/// Effective style of an element's key or value
///
/// The element's own override wins as a whole when present; otherwise the
/// section default is used. Fields are never merged.
pub fn resolve<'a>(
    element: &'a SectionElement,
    section_default: &'a Style,
    part: ElementPart,
) -> &'a Style {
    let own = match part {
        ElementPart::Key => element.style_key.as_ref(),
        ElementPart::Value => element.style_value.as_ref(),
    };
    own.unwrap_or(section_default)
}

/// Character formatting carried by a style
pub fn run_style(style: &Style) -> RunStyle {
    RunStyle {
        font_family: style.font_family.clone(),
        font_size: style.font_size,
        color: style.color.clone(),
        bold: style.bold,
        italic: style.italic,
    }
}

/// Apply a style to a run and its paragraph
///
/// A page break requested by any style applied to a paragraph stays set.
pub fn apply_style<D: DocumentBuilder>(
    doc: &mut D,
    paragraph: ParagraphRef,
    run: RunRef,
    style: &Style,
) {
    doc.set_run_style(run, run_style(style));
    doc.set_alignment(paragraph, convert_align(style.text_align));

    if style.start_on_new_page {
        doc.set_page_break(paragraph, true);
    }
}

/// Convert schema TextAlign to doc_core Alignment
pub fn convert_align(align: TextAlign) -> Alignment {
    match align {
        TextAlign::Left => Alignment::Left,
        TextAlign::Center => Alignment::Center,
        TextAlign::Right => Alignment::Right,
        TextAlign::Justify => Alignment::Justify,
    }
}
