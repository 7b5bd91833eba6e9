//! Leaf text and blank checks of element keys and values
//!
//! Rendering skips anything blank. Leaf values are formatted here; nested
//! elements are handled by the section renderer.

use crate::schema::{DateRange, ElementKey, ElementValue, SectionElement};
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Format of single dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Keys, values and elements with nothing to display
pub trait Blank {
    /// Whether nothing but whitespace would be displayed
    fn is_blank(&self) -> bool;
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}/{} - {:02}/{}",
            self.from.month(),
            self.from.year(),
            self.to.month(),
            self.to.year()
        )
    }
}

/// Format a single date
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

impl ElementValue {
    /// Text of a single-run value; `None` for lists and nested elements
    pub fn leaf_text(&self) -> Option<String> {
        match self {
            ElementValue::Text(text) => Some(text.clone()),
            ElementValue::Date(date) => Some(format_date(date)),
            ElementValue::DateRange(range) => Some(range.to_string()),
            ElementValue::StringList(_)
            | ElementValue::Nested(_)
            | ElementValue::NestedList(_) => None,
        }
    }
}

impl Blank for ElementKey {
    fn is_blank(&self) -> bool {
        match self {
            ElementKey::Text(text) => text.trim().is_empty(),
            ElementKey::Nested(element) => element.is_blank(),
        }
    }
}

impl Blank for ElementValue {
    fn is_blank(&self) -> bool {
        match self {
            ElementValue::Text(text) => text.trim().is_empty(),
            ElementValue::Date(_) | ElementValue::DateRange(_) => false,
            ElementValue::StringList(items) => items.iter().all(|i| i.trim().is_empty()),
            ElementValue::Nested(element) => element.is_blank(),
            ElementValue::NestedList(elements) => elements.iter().all(|e| e.is_blank()),
        }
    }
}

impl Blank for SectionElement {
    fn is_blank(&self) -> bool {
        self.key.is_blank() && self.value.is_blank()
    }
}
