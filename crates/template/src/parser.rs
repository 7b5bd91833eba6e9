//! Template JSON parsing

use crate::{Result, Template, TemplateError};
use std::path::Path;

/// Parse a template from JSON string
pub fn parse_template(json: &str) -> Result<Template> {
    serde_json::from_str(json).map_err(|e| TemplateError::ParseError(e.to_string()))
}

/// Read and parse a template file
pub fn parse_template_file(path: impl AsRef<Path>) -> Result<Template> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| {
        TemplateError::ParseError(format!("Failed to read {}: {e}", path.display()))
    })?;
    parse_template(&json)
}

/// Serialize a template back to pretty-printed JSON
pub fn template_to_json(template: &Template) -> Result<String> {
    Ok(serde_json::to_string_pretty(template)?)
}
