//! Template validation
//!
//! Catches configuration errors before anything is rendered, so a failed
//! render never leaves a half-built document behind.

use crate::schema::{ElementKey, ElementValue, SectionElement, Style, Template};
use crate::{Result, TemplateError};
use doc_core::PictureFormat;

/// Smallest font size accepted, in points
pub const MIN_FONT_SIZE: u32 = 5;

impl Template {
    /// Check every style and the header of the template
    ///
    /// Errors name the offending field, e.g. `sections[1].styleKey`. A logo
    /// whose suffix is neither png nor jpeg is reported as
    /// [`TemplateError::UnsupportedImageFormat`].
    pub fn validate(&self) -> Result<()> {
        validate_style(&self.style, "style")?;

        for (i, section) in self.sections.iter().enumerate() {
            let path = format!("sections[{i}]");
            validate_style(&section.style_title, &format!("{path}.styleTitle"))?;
            validate_style(&section.style_key, &format!("{path}.styleKey"))?;
            validate_style(&section.style_value, &format!("{path}.styleValue"))?;

            for (j, element) in section.elements.iter().enumerate() {
                validate_element(element, &format!("{path}.elements[{j}]"))?;
            }
        }

        if let Some(header) = &self.header {
            if header.logo.trim().is_empty() {
                return Err(TemplateError::ValidationError(
                    "header.logo: path is blank".to_string(),
                ));
            }

            PictureFormat::from_file_name(&header.logo)
                .map_err(|_| TemplateError::UnsupportedImageFormat(header.logo.clone()))?;
        }

        if let Some(footer) = &self.footer {
            validate_style(&footer.style, "footer.style")?;
        }

        Ok(())
    }
}

fn validate_element(element: &SectionElement, path: &str) -> Result<()> {
    if let Some(style) = &element.style_key {
        validate_style(style, &format!("{path}.styleKey"))?;
    }
    if let Some(style) = &element.style_value {
        validate_style(style, &format!("{path}.styleValue"))?;
    }

    if let ElementKey::Nested(nested) = &element.key {
        validate_element(nested, &format!("{path}.key"))?;
    }

    match &element.value {
        ElementValue::Nested(nested) => validate_element(nested, &format!("{path}.value")),
        ElementValue::NestedList(items) => items
            .iter()
            .enumerate()
            .try_for_each(|(i, item)| validate_element(item, &format!("{path}.value[{i}]"))),
        _ => Ok(()),
    }
}

fn validate_style(style: &Style, path: &str) -> Result<()> {
    if style.font_family.trim().is_empty() {
        return Err(TemplateError::ValidationError(format!(
            "{path}.fontFamily: font family is blank"
        )));
    }

    if style.font_size < MIN_FONT_SIZE {
        return Err(TemplateError::ValidationError(format!(
            "{path}.fontSize: {} is smaller than {MIN_FONT_SIZE}",
            style.font_size
        )));
    }

    if !is_hex_color(&style.color) {
        return Err(TemplateError::ValidationError(format!(
            "{path}.color: '{}' is not a 3 or 6 digit hex color",
            style.color
        )));
    }

    Ok(())
}

fn is_hex_color(color: &str) -> bool {
    matches!(color.len(), 3 | 6) && color.chars().all(|c| c.is_ascii_hexdigit())
}
