//! Section rendering
//!
//! Walks the template's sections and renders every element into body
//! paragraphs. A section element owns one paragraph; nested keys and values
//! are rendered into the paragraph of the element that contains them.

use crate::elements::Blank;
use crate::schema::*;
use crate::separator::{place_after, place_before};
use crate::style::{apply_style, resolve, ElementPart};
use doc_core::{DocumentBuilder, ParagraphRef, Region, RunRef};

/// Renders the template title and its sections into the document body
pub struct SectionRenderer<'a> {
    /// The template to render
    template: &'a Template,
}

impl<'a> SectionRenderer<'a> {
    /// Create a new renderer for a template
    pub fn new(template: &'a Template) -> Self {
        Self { template }
    }

    /// Render the template title and all sections
    ///
    /// Every section is followed by one empty paragraph.
    pub fn render<D: DocumentBuilder>(&self, doc: &mut D) {
        render_title(doc, &self.template.title, &self.template.style);

        for section in &self.template.sections {
            log::debug!(
                "Rendering section '{}' ({} elements)",
                section.identifier,
                section.elements.len()
            );
            self.render_section(doc, section);
            doc.create_paragraph(Region::Body);
        }
    }

    /// Render a section title (if shown) and its elements
    pub fn render_section<D: DocumentBuilder>(&self, doc: &mut D, section: &Section) {
        if section.show_title {
            render_title(doc, &section.title, &section.style_title);
        }

        for element in &section.elements {
            render_element(doc, element, &section.style_key, &section.style_value, None);
        }
    }
}

/// Render a title with its style and separator; blank titles are skipped
pub fn render_title<D: DocumentBuilder>(doc: &mut D, title: &str, style: &Style) {
    if title.trim().is_empty() {
        return;
    }

    let paragraph = doc.create_paragraph(Region::Body);
    let run = doc.create_run(paragraph);
    doc.append_text(run, title);
    apply_style(doc, paragraph, run, style);
    place_after(doc, Some(paragraph), run, &style.separator);
}

/// Render key and value of an element
///
/// Top-level elements get a new paragraph; nested elements pass the
/// paragraph of their parent. An element with nothing to display renders
/// nothing.
fn render_element<D: DocumentBuilder>(
    doc: &mut D,
    element: &SectionElement,
    key_default: &Style,
    value_default: &Style,
    paragraph: Option<ParagraphRef>,
) {
    if element.is_blank() {
        return;
    }

    let paragraph = paragraph.unwrap_or_else(|| doc.create_paragraph(Region::Body));

    render_key(doc, paragraph, element, key_default, value_default);
    render_value(doc, paragraph, element, key_default, value_default);
}

/// Render a nested element on the parent's line
///
/// The parent's effective styles become the defaults of the nested element.
fn render_nested<D: DocumentBuilder>(
    doc: &mut D,
    paragraph: ParagraphRef,
    parent: &SectionElement,
    nested: &SectionElement,
    key_default: &Style,
    value_default: &Style,
) {
    render_element(
        doc,
        nested,
        resolve(parent, key_default, ElementPart::Key),
        resolve(parent, value_default, ElementPart::Value),
        Some(paragraph),
    );
}

fn render_key<D: DocumentBuilder>(
    doc: &mut D,
    paragraph: ParagraphRef,
    element: &SectionElement,
    key_default: &Style,
    value_default: &Style,
) {
    if element.key.is_blank() {
        return;
    }

    match &element.key {
        ElementKey::Nested(nested) => {
            render_nested(doc, paragraph, element, nested, key_default, value_default);
        }
        ElementKey::Text(text) => {
            let style = resolve(element, key_default, ElementPart::Key);
            let run = doc.create_run(paragraph);
            doc.append_text(run, text);
            apply_style(doc, paragraph, run, style);
            place_after(doc, Some(paragraph), run, &style.separator);
        }
    }
}

fn render_value<D: DocumentBuilder>(
    doc: &mut D,
    paragraph: ParagraphRef,
    element: &SectionElement,
    key_default: &Style,
    value_default: &Style,
) {
    if element.value.is_blank() {
        return;
    }

    let style = resolve(element, value_default, ElementPart::Value);

    match &element.value {
        ElementValue::Nested(nested) => {
            render_nested(doc, paragraph, element, nested, key_default, value_default);
        }
        ElementValue::NestedList(items) => {
            render_nested_list(doc, paragraph, element, items, key_default, value_default);
        }
        ElementValue::StringList(items) => {
            let run = doc.create_run(paragraph);
            render_string_list(doc, run, items, &style.separator);
            apply_style(doc, paragraph, run, style);
        }
        leaf => {
            let run = doc.create_run(paragraph);
            if let Some(text) = leaf.leaf_text() {
                doc.append_text(run, &text);
            }
            apply_style(doc, paragraph, run, style);
        }
    }
}

/// Render nested list items one per line, with a blank line after the last
fn render_nested_list<D: DocumentBuilder>(
    doc: &mut D,
    paragraph: ParagraphRef,
    parent: &SectionElement,
    items: &[SectionElement],
    key_default: &Style,
    value_default: &Style,
) {
    let value_style = resolve(parent, value_default, ElementPart::Value);
    let last = items.len().saturating_sub(1);

    for (i, item) in items.iter().enumerate() {
        render_nested(doc, paragraph, parent, item, key_default, value_default);

        let run = doc.create_run(paragraph);
        doc.add_break(run);
        if i == last {
            doc.add_break(run);
        }
        apply_style(doc, paragraph, run, value_style);
    }
}

/// Render primitive list items into one run
///
/// In-front separators are numbered by position and every item ends its
/// line, with an extra break after the last one. Behind separators go
/// between items only.
fn render_string_list<D: DocumentBuilder>(
    doc: &mut D,
    run: RunRef,
    items: &[String],
    separator: &Separator,
) {
    let last = items.len().saturating_sub(1);

    for (i, item) in items.iter().enumerate() {
        let is_last = i == last;

        match separator.category {
            SeparatorCategory::InFront => {
                place_before(doc, run, separator, Some(i));
                doc.append_text(run, item);
                doc.add_break(run);
                if is_last {
                    doc.add_break(run);
                }
            }
            SeparatorCategory::Behind => {
                doc.append_text(run, item);
                if !is_last {
                    place_after(doc, None, run, separator);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use doc_core::{Alignment, Document, RunContent};
    use pretty_assertions::assert_eq;

    fn style(separator: Separator) -> Style {
        Style::new("Calibri", 11, separator)
    }

    fn colon() -> Style {
        style(Separator::behind(SeparatorValue::Colon))
    }

    fn comma() -> Style {
        style(Separator::behind(SeparatorValue::Comma))
    }

    fn section(elements: Vec<SectionElement>) -> Section {
        let mut section = Section::new("", colon(), colon(), comma());
        section.elements = elements;
        section
    }

    fn render_section(section: &Section) -> Document {
        let template = Template::new("", colon());
        let mut doc = Document::new();
        SectionRenderer::new(&template).render_section(&mut doc, section);
        doc
    }

    #[test]
    fn test_render_title() {
        let mut doc = Document::new();
        let mut title_style = style(Separator::behind(SeparatorValue::LineBreak));
        title_style.bold = true;
        title_style.text_align = TextAlign::Center;

        render_title(&mut doc, "Curriculum Vitae", &title_style);

        assert_eq!(doc.body.len(), 1);
        let paragraph = &doc.body[0];
        assert_eq!(paragraph.text(), "Curriculum Vitae\n");
        assert_eq!(paragraph.alignment, Some(Alignment::Center));
        assert!(paragraph.runs[0].style.as_ref().unwrap().bold);
    }

    #[test]
    fn test_render_blank_title() {
        let mut doc = Document::new();
        render_title(&mut doc, "", &colon());
        render_title(&mut doc, "  ", &colon());
        assert!(doc.body.is_empty());
    }

    #[test]
    fn test_render_string_element() {
        let doc = render_section(&section(vec![SectionElement::text("Name", "Jane Doe")]));

        assert_eq!(doc.body_text(), vec!["Name: Jane Doe"]);
        assert_eq!(doc.body[0].runs.len(), 2);
    }

    #[test]
    fn test_blank_key_is_skipped() {
        let doc = render_section(&section(vec![SectionElement::text("", "Only value")]));

        assert_eq!(doc.body_text(), vec!["Only value"]);
        assert_eq!(doc.body[0].runs.len(), 1);
    }

    #[test]
    fn test_blank_value_is_skipped() {
        let doc = render_section(&section(vec![SectionElement::text("Only key", "")]));

        assert_eq!(doc.body_text(), vec!["Only key: "]);
        assert_eq!(doc.body[0].runs.len(), 1);
    }

    #[test]
    fn test_blank_element_has_no_paragraph() {
        let doc = render_section(&section(vec![SectionElement::text("", " ")]));
        assert!(doc.body.is_empty());
    }

    #[test]
    fn test_date_values() {
        let born = SectionElement::new(
            "Born",
            ElementValue::Date(NaiveDate::from_ymd_opt(1990, 4, 1).unwrap()),
        );
        let period = SectionElement::new(
            "Period",
            ElementValue::DateRange(DateRange {
                from: NaiveDate::from_ymd_opt(2019, 3, 1).unwrap(),
                to: NaiveDate::from_ymd_opt(2021, 12, 31).unwrap(),
            }),
        );

        let doc = render_section(&section(vec![born, period]));
        assert_eq!(
            doc.body_text(),
            vec!["Born: 1990-04-01", "Period: 03/2019 - 12/2021"]
        );
    }

    #[test]
    fn test_behind_list_has_no_trailing_separator() {
        let doc = render_section(&section(vec![SectionElement::string_list(
            "Tools",
            &["Rust", "Git", "Docker"],
        )]));

        assert_eq!(doc.body_text(), vec!["Tools: Rust, Git, Docker"]);
    }

    #[test]
    fn test_in_front_numbered_list() {
        let element = SectionElement::string_list("Steps", &["A", "B"])
            .with_style_value(style(Separator::in_front(SeparatorValue::NumberedDot)));

        let doc = render_section(&section(vec![element]));

        assert_eq!(doc.body_text(), vec!["Steps: 1. A\n2. B\n\n"]);
        let list_run = &doc.body[0].runs[1];
        assert_eq!(list_run.break_count(), 3);
    }

    #[test]
    fn test_in_front_bullet_list() {
        let element = SectionElement::string_list("", &["One"])
            .with_style_value(style(Separator::in_front(SeparatorValue::Bulletpoint)));

        let doc = render_section(&section(vec![element]));
        assert_eq!(doc.body_text(), vec!["\u{2022}   One\n\n"]);
    }

    #[test]
    fn test_behind_line_break_list() {
        let element = SectionElement::string_list("", &["a", "b"])
            .with_style_value(style(Separator::behind(SeparatorValue::LineBreak)));

        let doc = render_section(&section(vec![element]));
        assert_eq!(doc.body_text(), vec!["a\nb"]);
    }

    #[test]
    fn test_behind_indent_list_is_noop() {
        let element = SectionElement::string_list("", &["a", "b"])
            .with_style_value(style(Separator::behind(SeparatorValue::Indent)));

        let doc = render_section(&section(vec![element]));
        assert_eq!(doc.body_text(), vec!["ab"]);
        assert!(doc.body[0].tab_stops.is_empty());
    }

    #[test]
    fn test_indent_key() {
        let element = SectionElement::text("Role", "Developer")
            .with_style_key(style(Separator::behind(SeparatorValue::Indent)));

        let doc = render_section(&section(vec![element]));
        let paragraph = &doc.body[0];
        assert_eq!(paragraph.text(), "Role\tDeveloper");
        assert_eq!(paragraph.indent_left, Some(crate::style::INDENT_POSITION));
        assert_eq!(paragraph.indent_hanging, Some(crate::style::INDENT_POSITION));
        assert_eq!(paragraph.tab_stops.len(), 1);
    }

    #[test]
    fn test_nested_key_shares_paragraph() {
        let nested_key = SectionElement::text("", "Nested Name");
        let element = SectionElement::new(nested_key, ElementValue::from("Value"));

        let doc = render_section(&section(vec![element]));

        assert_eq!(doc.body.len(), 1);
        // No separator follows a nested key
        assert_eq!(doc.body_text(), vec!["Nested NameValue"]);
    }

    #[test]
    fn test_nested_value_list() {
        let element = SectionElement::new(
            "Projects",
            ElementValue::NestedList(vec![
                SectionElement::text("Role", "Developer"),
                SectionElement::text("Client", "ACME"),
            ]),
        );

        let doc = render_section(&section(vec![element]));

        assert_eq!(doc.body.len(), 1);
        assert_eq!(
            doc.body_text(),
            vec!["Projects: Role: Developer\nClient: ACME\n\n"]
        );
        let breaks: usize = doc.body[0].runs.iter().map(|r| r.break_count()).sum();
        assert_eq!(breaks, 3);
    }

    #[test]
    fn test_nested_uses_parent_effective_style() {
        let parent_value = style(Separator::behind(SeparatorValue::Dash));
        let nested = SectionElement::string_list("", &["x", "y"]);
        let element = SectionElement::new("", ElementValue::Nested(Box::new(nested)))
            .with_style_value(parent_value);

        let doc = render_section(&section(vec![element]));
        assert_eq!(doc.body_text(), vec!["x - y"]);
    }

    #[test]
    fn test_nested_own_style_wins() {
        let mut own = style(Separator::behind(SeparatorValue::Semicolon));
        own.font_family = "Courier".to_string();
        let nested = SectionElement::string_list("", &["x", "y"]).with_style_value(own);
        let element = SectionElement::new("", ElementValue::Nested(Box::new(nested)));

        let doc = render_section(&section(vec![element]));
        assert_eq!(doc.body_text(), vec!["x; y"]);
        assert_eq!(
            doc.body[0].runs[0].style.as_ref().unwrap().font_family,
            "Courier"
        );
    }

    #[test]
    fn test_deep_nesting_terminates() {
        let mut element = SectionElement::text("leaf", "value");
        for depth in 0..64 {
            element = SectionElement::new(
                format!("level {depth}").as_str(),
                ElementValue::Nested(Box::new(element)),
            );
        }

        let doc = render_section(&section(vec![element]));
        assert_eq!(doc.body.len(), 1);
        assert_eq!(doc.body[0].runs.len(), 66);
        assert!(doc.body[0].text().ends_with("leaf: value"));
    }

    #[test]
    fn test_render_sections_with_spacing() {
        let mut template = Template::new("CV", colon());
        let mut hidden = section(vec![SectionElement::text("A", "1")]);
        hidden.title = "Hidden".to_string();
        hidden.show_title = false;
        let mut shown = section(vec![SectionElement::text("B", "2")]);
        shown.title = "Shown".to_string();
        template.add_section(hidden).add_section(shown);

        let mut doc = Document::new();
        SectionRenderer::new(&template).render(&mut doc);

        assert_eq!(
            doc.body_text(),
            vec!["CV: ", "A: 1", "", "Shown: ", "B: 2", ""]
        );
        assert!(doc.body[2].runs.is_empty());
    }

    #[test]
    fn test_list_run_contents() {
        let element = SectionElement::string_list("", &["A"])
            .with_style_value(style(Separator::in_front(SeparatorValue::NumberedParens)));

        let doc = render_section(&section(vec![element]));
        assert_eq!(
            doc.body[0].runs[0].contents,
            vec![
                RunContent::Text("(1) ".to_string()),
                RunContent::Text("A".to_string()),
                RunContent::Break,
                RunContent::Break,
            ]
        );
    }
}
