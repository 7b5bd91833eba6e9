//! Template Engine - JSON template parsing and rendering
//!
//! This crate provides:
//! - Template JSON schema types (sections, elements, styles, separators)
//! - Template parsing and validation
//! - Section rendering into a word-processing document model
//! - Header (logo) and three-column footer rendering
//! - Example profiles filled with placeholder values
//!
//! # Example
//!
//! ```ignore
//! use template::{parse_template, TemplateRenderer};
//!
//! let template = parse_template(template_json)?;
//! let document = TemplateRenderer::new(&template).render_document()?;
//! let model_json = document.to_json()?;
//! ```

pub mod elements;
mod example;
pub mod header_footer;
pub mod parser;
mod renderer;
mod schema;
pub mod section;
pub mod separator;
pub mod style;
mod validate;

pub use example::{EXAMPLE_LIST, EXAMPLE_STRING};
pub use header_footer::{FsResourceLoader, HeaderFooterRenderer, ResourceLoader};
pub use parser::{parse_template, parse_template_file, template_to_json};
pub use renderer::TemplateRenderer;
pub use schema::*;
pub use section::SectionRenderer;

// Re-export the embedded schema
pub use schema::TEMPLATE_SCHEMA;

use thiserror::Error;

/// Errors that can occur during template processing
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to parse template: {0}")]
    ParseError(String),

    #[error("Invalid template: {0}")]
    ValidationError(String),

    #[error("Unknown picture format of file {0}. Use either png or jpeg.")]
    UnsupportedImageFormat(String),

    #[error("Document error: {0}")]
    DocError(#[from] doc_core::DocError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_image_format_message() {
        let err = TemplateError::UnsupportedImageFormat("logo.gif".to_string());
        assert_eq!(
            err.to_string(),
            "Unknown picture format of file logo.gif. Use either png or jpeg."
        );
    }

    #[test]
    fn test_doc_error_converts() {
        let err: TemplateError = doc_core::DocError::ImageError("bad".to_string()).into();
        assert!(matches!(err, TemplateError::DocError(_)));
    }
}
