//! Doc Core - In-memory word-processing document model
//!
//! This crate provides:
//! - A paragraph/run document model with header and footer regions
//! - The [`DocumentBuilder`] capability trait renderers write through
//! - Picture extents in English Metric Units (EMU)
//! - Picture format detection and validation (JPEG, PNG)
//!
//! The model is the hand-off point to an external writer: it derives
//! `Serialize` so a downstream OOXML serializer can consume it as-is.
//!
//! # Example
//!
//! ```ignore
//! use doc_core::{Document, DocumentBuilder, Region};
//!
//! let mut doc = Document::new();
//! let paragraph = doc.create_paragraph(Region::Body);
//! let run = doc.create_run(paragraph);
//! doc.append_text(run, "Hello, World!");
//! assert_eq!(doc.body_text(), vec!["Hello, World!"]);
//! ```

mod builder;
mod document;
mod picture;
pub mod units;

pub use builder::{DocumentBuilder, ParagraphRef, Region, RunRef};
pub use document::{
    Document, HeaderFooter, HeaderFooterType, Paragraph, Picture, Run, RunContent, RunStyle,
    TabAlignment, TabStop,
};
pub use picture::{picture_dimensions, PictureDimensions, PictureFormat};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while building a document
#[derive(Debug, Error)]
pub enum DocError {
    #[error("Image error: {0}")]
    ImageError(String),

    #[error("Unsupported picture format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for document operations
pub type Result<T> = std::result::Result<T, DocError>;

/// Paragraph alignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_default() {
        assert_eq!(Alignment::default(), Alignment::Left);
    }

    #[test]
    fn test_alignment_serializes_lowercase() {
        let json = serde_json::to_string(&Alignment::Justify).unwrap();
        assert_eq!(json, "\"justify\"");
    }
}
