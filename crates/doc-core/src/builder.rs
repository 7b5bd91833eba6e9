//! Document building capabilities
//!
//! Renderers never touch the document model directly. They work through
//! [`DocumentBuilder`], addressing paragraphs and runs by the handles returned
//! when those were created.

use crate::document::{HeaderFooterType, RunStyle, TabStop};
use crate::{Alignment, PictureFormat, Result};
use serde::{Deserialize, Serialize};

/// A region of the document paragraphs can be created in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// Main document body
    Body,
    /// Header region (index into the document's headers)
    Header(usize),
    /// Footer region (index into the document's footers)
    Footer(usize),
}

/// Handle to a paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParagraphRef {
    pub region: Region,
    pub index: usize,
}

/// Handle to a run inside a paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunRef {
    pub paragraph: ParagraphRef,
    pub index: usize,
}

/// The capability surface a page-oriented document writer offers
///
/// Handles passed to these methods must come from the same builder.
/// Passing a foreign handle is a programming error and may panic.
pub trait DocumentBuilder {
    /// Append a new, empty paragraph to a region
    fn create_paragraph(&mut self, region: Region) -> ParagraphRef;

    /// Append a new, empty run to a paragraph
    fn create_run(&mut self, paragraph: ParagraphRef) -> RunRef;

    /// Append text to a run
    fn append_text(&mut self, run: RunRef, text: &str);

    /// Append a line break to a run
    fn add_break(&mut self, run: RunRef);

    /// Append a tab character to a run
    fn add_tab(&mut self, run: RunRef);

    /// Set font family, size, color, bold and italic of a run
    fn set_run_style(&mut self, run: RunRef, style: RunStyle);

    /// Set paragraph alignment
    fn set_alignment(&mut self, paragraph: ParagraphRef, alignment: Alignment);

    /// Set whether the paragraph starts on a new page
    fn set_page_break(&mut self, paragraph: ParagraphRef, page_break: bool);

    /// Set the left indent in twips
    fn set_indent_left(&mut self, paragraph: ParagraphRef, twips: u32);

    /// Set the hanging indent of the first line in twips
    fn set_indent_hanging(&mut self, paragraph: ParagraphRef, twips: u32);

    /// Register a tab stop on a paragraph
    fn add_tab_stop(&mut self, paragraph: ParagraphRef, tab_stop: TabStop);

    /// Set spacing after the paragraph in twips
    fn set_spacing_after(&mut self, paragraph: ParagraphRef, twips: u32);

    /// Embed a picture into a run
    ///
    /// # Arguments
    /// * `data` - Image file bytes
    /// * `format` - Declared picture format
    /// * `width` - Display width in EMU
    /// * `height` - Display height in EMU
    fn add_picture(
        &mut self,
        run: RunRef,
        data: Vec<u8>,
        format: PictureFormat,
        width: u32,
        height: u32,
    ) -> Result<()>;

    /// Create a header region applied according to `kind`
    fn create_header(&mut self, kind: HeaderFooterType) -> Region;

    /// Create a footer region applied according to `kind`
    fn create_footer(&mut self, kind: HeaderFooterType) -> Region;
}
