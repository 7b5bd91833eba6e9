//! Example profiles
//!
//! Fills every element value of a template with placeholder content so the
//! template can be previewed before real data exists.

use crate::schema::{DateRange, ElementKey, ElementValue, SectionElement, Template};
use chrono::NaiveDate;

/// Placeholder for string values
pub const EXAMPLE_STRING: &str = "Example text";

/// Placeholder for string list values
pub const EXAMPLE_LIST: [&str; 3] = ["Example item 1", "Example item 2", "Example item 3"];

impl Template {
    /// Replace every element value with placeholder content
    ///
    /// Dates and date ranges are set to `today`. Keys, styles and the
    /// structure of nested elements are left untouched.
    pub fn fill_example_values(&mut self, today: NaiveDate) {
        for section in &mut self.sections {
            for element in &mut section.elements {
                element.fill_example_value(today);
            }
        }
    }

    /// Copy of the template filled with placeholders dated today
    pub fn example_profile(&self) -> Template {
        let mut example = self.clone();
        example.fill_example_values(chrono::Local::now().date_naive());
        example
    }
}

impl SectionElement {
    /// Replace the value (and the values of nested elements) with placeholders
    pub fn fill_example_value(&mut self, today: NaiveDate) {
        if let ElementKey::Nested(nested) = &mut self.key {
            nested.fill_example_value(today);
        }

        match &mut self.value {
            ElementValue::Text(text) => *text = EXAMPLE_STRING.to_string(),
            ElementValue::Date(date) => *date = today,
            ElementValue::DateRange(range) => {
                *range = DateRange {
                    from: today,
                    to: today,
                }
            }
            ElementValue::StringList(items) => {
                *items = EXAMPLE_LIST.iter().map(|item| item.to_string()).collect()
            }
            ElementValue::Nested(nested) => nested.fill_example_value(today),
            ElementValue::NestedList(items) => {
                for item in items {
                    item.fill_example_value(today);
                }
            }
        }
    }
}
