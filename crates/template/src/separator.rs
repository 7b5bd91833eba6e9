//! Separator placement
//!
//! Turns a [`Separator`] into document content: literal characters, ordinal
//! markers, line breaks, or a hanging indent with a matching tab stop.

use crate::schema::{Separator, SeparatorValue};
use crate::style::INDENT_POSITION;
use doc_core::{DocumentBuilder, ParagraphRef, RunRef, TabAlignment, TabStop};

impl SeparatorValue {
    /// Literal characters of the separator
    ///
    /// Numbered kinds return their unformatted template, with `%d` standing
    /// in for the ordinal.
    pub fn literal(self) -> &'static str {
        match self {
            SeparatorValue::Comma => ", ",
            SeparatorValue::Colon => ": ",
            SeparatorValue::Semicolon => "; ",
            SeparatorValue::Dot => ". ",
            SeparatorValue::Dash => " - ",
            SeparatorValue::LineBreak => "\n",
            SeparatorValue::Space => " ",
            SeparatorValue::Tab => "    ",
            SeparatorValue::Indent => "",
            SeparatorValue::Bulletpoint => "\u{2022}   ",
            SeparatorValue::NumberedDot => "%d. ",
            SeparatorValue::NumberedParens => "(%d) ",
        }
    }

    /// Whether the separator carries an ordinal
    pub fn is_numbered(self) -> bool {
        matches!(
            self,
            SeparatorValue::NumberedDot | SeparatorValue::NumberedParens
        )
    }

    /// Ordinal marker for a 1-based position, `None` for non-numbered kinds
    pub fn ordinal(self, position: usize) -> Option<String> {
        match self {
            SeparatorValue::NumberedDot => Some(format!("{position}. ")),
            SeparatorValue::NumberedParens => Some(format!("({position}) ")),
            _ => None,
        }
    }
}

/// Text placed in front of an item
///
/// Numbered separators render `list_index + 1` when an index is given and
/// fall back to their raw template otherwise.
pub fn text_before(separator: &Separator, list_index: Option<usize>) -> String {
    list_index
        .and_then(|i| separator.value.ordinal(i + 1))
        .unwrap_or_else(|| separator.value.literal().to_string())
}

/// Append a separator in front of the next text of `run`
pub fn place_before<D: DocumentBuilder>(
    doc: &mut D,
    run: RunRef,
    separator: &Separator,
    list_index: Option<usize>,
) {
    doc.append_text(run, &text_before(separator, list_index));
}

/// Append a separator behind the current text of `run`
///
/// `Indent` shifts the paragraph's left margin and keeps the first line
/// hanging; it needs a paragraph and is a no-op without one.
pub fn place_after<D: DocumentBuilder>(
    doc: &mut D,
    paragraph: Option<ParagraphRef>,
    run: RunRef,
    separator: &Separator,
) {
    match separator.value {
        SeparatorValue::Indent => {
            if let Some(paragraph) = paragraph {
                add_hanging_indent(doc, paragraph, INDENT_POSITION);
                doc.add_tab(run);
            }
        }
        SeparatorValue::LineBreak => doc.add_break(run),
        value => doc.append_text(run, value.literal()),
    }
}

/// Shift the left margin by `amount` twips, leaving the first line unshifted
///
/// A left tab stop at the same offset lets text after a tab on the first
/// line start exactly at the new margin.
pub fn add_hanging_indent<D: DocumentBuilder>(doc: &mut D, paragraph: ParagraphRef, amount: u32) {
    doc.set_indent_left(paragraph, amount);
    doc.set_indent_hanging(paragraph, amount);
    doc.add_tab_stop(paragraph, TabStop::new(amount, TabAlignment::Left));
}
