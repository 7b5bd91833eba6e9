//! Template JSON schema types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Embedded JSON Schema for template validation
/// This schema can be used by IDEs and validators for template authoring
pub const TEMPLATE_SCHEMA: &str = include_str!("../data/template-schema.json");

/// Root template structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Document title, rendered first (skipped when blank)
    #[serde(default)]
    pub title: String,

    /// Global style, used for the template title
    pub style: Style,

    /// Sections in document order
    #[serde(default)]
    pub sections: Vec<Section>,

    /// Page header
    #[serde(default)]
    pub header: Option<Header>,

    /// Page footer
    #[serde(default)]
    pub footer: Option<Footer>,
}

impl Template {
    /// Create an empty template with a title and global style
    pub fn new(title: &str, style: Style) -> Self {
        Self {
            title: title.to_string(),
            style,
            sections: Vec::new(),
            header: None,
            footer: None,
        }
    }

    /// Append a section
    pub fn add_section(&mut self, section: Section) -> &mut Self {
        self.sections.push(section);
        self
    }

    /// Set the page header
    pub fn set_header(&mut self, header: Header) -> &mut Self {
        self.header = Some(header);
        self
    }

    /// Set the page footer
    pub fn set_footer(&mut self, footer: Footer) -> &mut Self {
        self.footer = Some(footer);
        self
    }
}

fn default_show_title() -> bool {
    true
}

/// A titled group of section elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub identifier: String,

    #[serde(default)]
    pub title: String,

    #[serde(rename = "showTitle")]
    #[serde(default = "default_show_title")]
    pub show_title: bool,

    /// Style of the section title
    #[serde(rename = "styleTitle")]
    pub style_title: Style,

    /// Default style of element keys
    #[serde(rename = "styleKey")]
    pub style_key: Style,

    /// Default style of element values
    #[serde(rename = "styleValue")]
    pub style_value: Style,

    #[serde(default)]
    pub elements: Vec<SectionElement>,
}

impl Section {
    pub fn new(title: &str, style_title: Style, style_key: Style, style_value: Style) -> Self {
        Self {
            identifier: String::new(),
            title: title.to_string(),
            show_title: true,
            style_title,
            style_key,
            style_value,
            elements: Vec::new(),
        }
    }

    /// Append an element
    pub fn with_element(mut self, element: SectionElement) -> Self {
        self.elements.push(element);
        self
    }
}

/// Element type discriminant as it appears in JSON (`"type"`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementKind {
    String,
    Date,
    DateRange,
    StringList,
    Nested,
}

/// Key of a section element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElementKey {
    Text(String),
    Nested(Box<SectionElement>),
}

impl Default for ElementKey {
    fn default() -> Self {
        ElementKey::Text(String::new())
    }
}

impl From<&str> for ElementKey {
    fn from(text: &str) -> Self {
        ElementKey::Text(text.to_string())
    }
}

impl From<SectionElement> for ElementKey {
    fn from(element: SectionElement) -> Self {
        ElementKey::Nested(Box::new(element))
    }
}

/// Start and end of a period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Value of a section element
///
/// The variant is fixed by the element's `type` discriminant when the
/// template is parsed. It serializes without the discriminant, which is
/// written next to it by the owning element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ElementValue {
    Text(String),
    Date(NaiveDate),
    DateRange(DateRange),
    StringList(Vec<String>),
    Nested(Box<SectionElement>),
    NestedList(Vec<SectionElement>),
}

impl ElementValue {
    /// The JSON discriminant for this value
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementValue::Text(_) => ElementKind::String,
            ElementValue::Date(_) => ElementKind::Date,
            ElementValue::DateRange(_) => ElementKind::DateRange,
            ElementValue::StringList(_) => ElementKind::StringList,
            ElementValue::Nested(_) | ElementValue::NestedList(_) => ElementKind::Nested,
        }
    }
}

impl From<&str> for ElementValue {
    fn from(text: &str) -> Self {
        ElementValue::Text(text.to_string())
    }
}

/// A key/value pair with optional style overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSectionElement", into = "EncodedSectionElement")]
pub struct SectionElement {
    pub identifier: String,

    /// Validation metadata, not used when rendering
    pub unique: bool,

    /// Validation metadata, not used when rendering
    pub required: bool,

    pub key: ElementKey,

    pub value: ElementValue,

    /// Overrides the section's key style
    pub style_key: Option<Style>,

    /// Overrides the section's value style
    pub style_value: Option<Style>,
}

impl SectionElement {
    /// Create an element without style overrides
    pub fn new(key: impl Into<ElementKey>, value: ElementValue) -> Self {
        Self {
            identifier: String::new(),
            unique: false,
            required: false,
            key: key.into(),
            value,
            style_key: None,
            style_value: None,
        }
    }

    /// Create a plain string element
    pub fn text(key: &str, value: &str) -> Self {
        Self::new(key, ElementValue::from(value))
    }

    /// Create a string list element
    pub fn string_list(key: &str, values: &[&str]) -> Self {
        Self::new(
            key,
            ElementValue::StringList(values.iter().map(|v| v.to_string()).collect()),
        )
    }

    pub fn with_style_key(mut self, style: Style) -> Self {
        self.style_key = Some(style);
        self
    }

    pub fn with_style_value(mut self, style: Style) -> Self {
        self.style_value = Some(style);
        self
    }
}

/// Wire representation of [`SectionElement`]
///
/// The value shape depends on `type`, so it is kept as raw JSON here and
/// converted into a typed [`ElementValue`] in one place.
#[derive(Debug, Clone, Deserialize)]
struct RawSectionElement {
    #[serde(rename = "type")]
    kind: ElementKind,

    #[serde(default)]
    identifier: String,

    #[serde(default)]
    unique: bool,

    #[serde(default)]
    required: bool,

    #[serde(default)]
    key: ElementKey,

    #[serde(default)]
    value: serde_json::Value,

    #[serde(rename = "styleKey")]
    #[serde(default)]
    style_key: Option<Style>,

    #[serde(rename = "styleValue")]
    #[serde(default)]
    style_value: Option<Style>,
}

/// Serialized form of [`SectionElement`], with its `type` discriminant
#[derive(Debug, Clone, Serialize)]
struct EncodedSectionElement {
    #[serde(rename = "type")]
    kind: ElementKind,

    identifier: String,

    unique: bool,

    required: bool,

    key: ElementKey,

    value: ElementValue,

    #[serde(rename = "styleKey")]
    #[serde(skip_serializing_if = "Option::is_none")]
    style_key: Option<Style>,

    #[serde(rename = "styleValue")]
    #[serde(skip_serializing_if = "Option::is_none")]
    style_value: Option<Style>,
}

impl TryFrom<RawSectionElement> for SectionElement {
    type Error = String;

    fn try_from(raw: RawSectionElement) -> std::result::Result<Self, Self::Error> {
        let value = decode_value(raw.kind, raw.value).map_err(|e| {
            format!(
                "Invalid value for element '{}' of type {:?}: {}",
                raw.identifier, raw.kind, e
            )
        })?;

        Ok(Self {
            identifier: raw.identifier,
            unique: raw.unique,
            required: raw.required,
            key: raw.key,
            value,
            style_key: raw.style_key,
            style_value: raw.style_value,
        })
    }
}

impl From<SectionElement> for EncodedSectionElement {
    fn from(element: SectionElement) -> Self {
        let kind = element.value.kind();
        Self {
            kind,
            identifier: element.identifier,
            unique: element.unique,
            required: element.required,
            key: element.key,
            value: element.value,
            style_key: element.style_key,
            style_value: element.style_value,
        }
    }
}

/// Convert a raw JSON value into the variant its discriminant declares
fn decode_value(
    kind: ElementKind,
    value: serde_json::Value,
) -> std::result::Result<ElementValue, serde_json::Error> {
    use serde_json::Value;

    Ok(match kind {
        ElementKind::String => match value {
            Value::Null => ElementValue::Text(String::new()),
            other => ElementValue::Text(serde_json::from_value(other)?),
        },
        ElementKind::Date => ElementValue::Date(serde_json::from_value(value)?),
        ElementKind::DateRange => ElementValue::DateRange(serde_json::from_value(value)?),
        ElementKind::StringList => match value {
            Value::Null => ElementValue::StringList(Vec::new()),
            other => ElementValue::StringList(serde_json::from_value(other)?),
        },
        ElementKind::Nested => match value {
            Value::Array(_) => ElementValue::NestedList(serde_json::from_value(value)?),
            other => ElementValue::Nested(Box::new(serde_json::from_value(other)?)),
        },
    })
}

/// Text alignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    #[serde(alias = "LEFT")]
    Left,
    #[serde(alias = "CENTER")]
    Center,
    #[serde(alias = "RIGHT")]
    Right,
    #[serde(alias = "JUSTIFY", alias = "BOTH", alias = "both")]
    Justify,
}

/// Where a separator goes relative to the text it decorates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeparatorCategory {
    #[serde(alias = "IN_FRONT", alias = "in-front")]
    InFront,
    #[serde(alias = "BEHIND")]
    Behind,
}

/// Kind of separator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeparatorValue {
    #[serde(alias = "COMMA")]
    Comma,
    #[serde(alias = "COLON")]
    Colon,
    #[serde(alias = "SEMICOLON")]
    Semicolon,
    #[serde(alias = "DOT")]
    Dot,
    #[serde(alias = "DASH")]
    Dash,
    #[serde(alias = "LINE_BREAK", alias = "line-break")]
    LineBreak,
    #[serde(alias = "SPACE")]
    Space,
    #[serde(alias = "TAB")]
    Tab,
    #[serde(alias = "INDENT")]
    Indent,
    #[serde(alias = "BULLETPOINT")]
    Bulletpoint,
    #[serde(alias = "NUMBER_AND_DOT", alias = "numbered-dot")]
    NumberedDot,
    #[serde(
        alias = "NUMBER_AND_PARANTHESES",
        alias = "NUMBER_AND_PARENTHESES",
        alias = "numbered-parens"
    )]
    NumberedParens,
}

/// A decoration placed before or after a key or list item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Separator {
    pub value: SeparatorValue,
    pub category: SeparatorCategory,
}

impl Separator {
    pub fn new(value: SeparatorValue, category: SeparatorCategory) -> Self {
        Self { value, category }
    }

    pub fn behind(value: SeparatorValue) -> Self {
        Self::new(value, SeparatorCategory::Behind)
    }

    pub fn in_front(value: SeparatorValue) -> Self {
        Self::new(value, SeparatorCategory::InFront)
    }
}

fn default_color() -> String {
    "000000".to_string()
}

/// Full style of a title, key, value or footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    #[serde(rename = "fontFamily")]
    pub font_family: String,

    /// Font size in points
    #[serde(rename = "fontSize")]
    pub font_size: u32,

    /// Hex color, 3 or 6 digits, without '#'
    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default)]
    pub bold: bool,

    #[serde(default)]
    pub italic: bool,

    #[serde(rename = "textAlign")]
    #[serde(default)]
    pub text_align: TextAlign,

    #[serde(rename = "startOnNewPage")]
    #[serde(default)]
    pub start_on_new_page: bool,

    pub separator: Separator,
}

impl Style {
    /// Create a regular, black, left-aligned style
    pub fn new(font_family: &str, font_size: u32, separator: Separator) -> Self {
        Self {
            font_family: font_family.to_string(),
            font_size,
            color: default_color(),
            bold: false,
            italic: false,
            text_align: TextAlign::Left,
            start_on_new_page: false,
            separator,
        }
    }
}

/// Page header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Path of the logo image (png or jpeg)
    pub logo: String,
}

/// Page footer with three independently sized columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    #[serde(rename = "leftSection")]
    #[serde(default)]
    pub left_section: Vec<String>,

    #[serde(rename = "middleSection")]
    #[serde(default)]
    pub middle_section: Vec<String>,

    #[serde(rename = "rightSection")]
    #[serde(default)]
    pub right_section: Vec<String>,

    pub style: Style,
}
