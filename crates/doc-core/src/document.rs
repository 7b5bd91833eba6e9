//! In-memory document model

use crate::builder::{DocumentBuilder, ParagraphRef, Region, RunRef};
use crate::picture::{picture_dimensions, PictureDimensions};
use crate::{Alignment, PictureFormat, Result};
use serde::{Deserialize, Serialize};

/// Which pages a header or footer applies to
///
/// Regions are only ever applied uniformly, so `Default` is the sole policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderFooterType {
    /// All pages not covered by a more specific region
    #[default]
    Default,
}

/// Tab stop alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabAlignment {
    Left,
    Center,
    Right,
}

/// A tab stop on a paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabStop {
    /// Position in twips from the left margin
    pub position: u32,
    /// Alignment of text following the tab
    pub alignment: TabAlignment,
}

impl TabStop {
    pub fn new(position: u32, alignment: TabAlignment) -> Self {
        Self {
            position,
            alignment,
        }
    }
}

/// Character formatting of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStyle {
    pub font_family: String,
    /// Font size in points
    pub font_size: u32,
    /// Hex RGB color without leading '#'
    pub color: String,
    pub bold: bool,
    pub italic: bool,
}

/// An embedded picture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub format: PictureFormat,
    /// Encoded image bytes, base64 in JSON
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
    /// Pixel dimensions of the source image
    pub pixels: PictureDimensions,
    /// Display width in EMU
    pub width: u32,
    /// Display height in EMU
    pub height: u32,
}

mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD as BASE64_STD, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&BASE64_STD.encode(data))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        BASE64_STD
            .decode(encoded)
            .map_err(serde::de::Error::custom)
    }
}

/// A piece of run content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum RunContent {
    Text(String),
    Break,
    Tab,
    Picture(Picture),
}

/// A run of uniformly formatted content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    #[serde(default)]
    pub style: Option<RunStyle>,
    pub contents: Vec<RunContent>,
}

impl Run {
    /// Flatten the run to text (tabs as `\t`, breaks as `\n`, pictures omitted)
    pub fn text(&self) -> String {
        let mut text = String::new();
        for content in &self.contents {
            match content {
                RunContent::Text(t) => text.push_str(t),
                RunContent::Break => text.push('\n'),
                RunContent::Tab => text.push('\t'),
                RunContent::Picture(_) => {}
            }
        }
        text
    }

    /// Pictures embedded in this run
    pub fn pictures(&self) -> impl Iterator<Item = &Picture> {
        self.contents.iter().filter_map(|c| match c {
            RunContent::Picture(p) => Some(p),
            _ => None,
        })
    }

    /// Number of line breaks in this run
    pub fn break_count(&self) -> usize {
        self.contents
            .iter()
            .filter(|c| matches!(c, RunContent::Break))
            .count()
    }
}

/// A paragraph with its properties
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub runs: Vec<Run>,
    #[serde(default)]
    pub alignment: Option<Alignment>,
    #[serde(default)]
    pub page_break: bool,
    /// Left indent in twips
    #[serde(default)]
    pub indent_left: Option<u32>,
    /// Hanging indent of the first line in twips
    #[serde(default)]
    pub indent_hanging: Option<u32>,
    #[serde(default)]
    pub tab_stops: Vec<TabStop>,
    /// Spacing after in twips
    #[serde(default)]
    pub spacing_after: Option<u32>,
}

impl Paragraph {
    /// Concatenated text of all runs
    pub fn text(&self) -> String {
        self.runs.iter().map(Run::text).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|r| r.contents.is_empty())
    }
}

/// Header or footer region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderFooter {
    pub kind: HeaderFooterType,
    pub paragraphs: Vec<Paragraph>,
}

impl HeaderFooter {
    /// All pictures in the region
    pub fn pictures(&self) -> impl Iterator<Item = &Picture> {
        self.paragraphs
            .iter()
            .flat_map(|p| p.runs.iter())
            .flat_map(|r| r.pictures())
    }
}

/// Word-processing document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub body: Vec<Paragraph>,
    #[serde(default)]
    pub headers: Vec<HeaderFooter>,
    #[serde(default)]
    pub footers: Vec<HeaderFooter>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of every body paragraph, in order
    pub fn body_text(&self) -> Vec<String> {
        self.body.iter().map(Paragraph::text).collect()
    }

    /// Header applied according to `kind`
    pub fn header(&self, kind: HeaderFooterType) -> Option<&HeaderFooter> {
        self.headers.iter().find(|h| h.kind == kind)
    }

    /// Footer applied according to `kind`
    pub fn footer(&self, kind: HeaderFooterType) -> Option<&HeaderFooter> {
        self.footers.iter().find(|f| f.kind == kind)
    }

    /// Look up a paragraph by handle
    pub fn paragraph(&self, paragraph: ParagraphRef) -> &Paragraph {
        let paragraphs = match paragraph.region {
            Region::Body => &self.body,
            Region::Header(i) => &self.headers[i].paragraphs,
            Region::Footer(i) => &self.footers[i].paragraphs,
        };
        &paragraphs[paragraph.index]
    }

    /// Look up a run by handle
    pub fn run(&self, run: RunRef) -> &Run {
        &self.paragraph(run.paragraph).runs[run.index]
    }

    /// Serialize the document model to JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    fn paragraphs_mut(&mut self, region: Region) -> &mut Vec<Paragraph> {
        match region {
            Region::Body => &mut self.body,
            Region::Header(i) => &mut self.headers[i].paragraphs,
            Region::Footer(i) => &mut self.footers[i].paragraphs,
        }
    }

    fn paragraph_mut(&mut self, paragraph: ParagraphRef) -> &mut Paragraph {
        &mut self.paragraphs_mut(paragraph.region)[paragraph.index]
    }

    fn run_mut(&mut self, run: RunRef) -> &mut Run {
        &mut self.paragraph_mut(run.paragraph).runs[run.index]
    }
}

impl DocumentBuilder for Document {
    fn create_paragraph(&mut self, region: Region) -> ParagraphRef {
        let paragraphs = self.paragraphs_mut(region);
        paragraphs.push(Paragraph::default());
        ParagraphRef {
            region,
            index: paragraphs.len() - 1,
        }
    }

    fn create_run(&mut self, paragraph: ParagraphRef) -> RunRef {
        let runs = &mut self.paragraph_mut(paragraph).runs;
        runs.push(Run::default());
        RunRef {
            paragraph,
            index: runs.len() - 1,
        }
    }

    fn append_text(&mut self, run: RunRef, text: &str) {
        self.run_mut(run)
            .contents
            .push(RunContent::Text(text.to_string()));
    }

    fn add_break(&mut self, run: RunRef) {
        self.run_mut(run).contents.push(RunContent::Break);
    }

    fn add_tab(&mut self, run: RunRef) {
        self.run_mut(run).contents.push(RunContent::Tab);
    }

    fn set_run_style(&mut self, run: RunRef, style: RunStyle) {
        self.run_mut(run).style = Some(style);
    }

    fn set_alignment(&mut self, paragraph: ParagraphRef, alignment: Alignment) {
        self.paragraph_mut(paragraph).alignment = Some(alignment);
    }

    fn set_page_break(&mut self, paragraph: ParagraphRef, page_break: bool) {
        self.paragraph_mut(paragraph).page_break = page_break;
    }

    fn set_indent_left(&mut self, paragraph: ParagraphRef, twips: u32) {
        self.paragraph_mut(paragraph).indent_left = Some(twips);
    }

    fn set_indent_hanging(&mut self, paragraph: ParagraphRef, twips: u32) {
        self.paragraph_mut(paragraph).indent_hanging = Some(twips);
    }

    fn add_tab_stop(&mut self, paragraph: ParagraphRef, tab_stop: TabStop) {
        self.paragraph_mut(paragraph).tab_stops.push(tab_stop);
    }

    fn set_spacing_after(&mut self, paragraph: ParagraphRef, twips: u32) {
        self.paragraph_mut(paragraph).spacing_after = Some(twips);
    }

    fn add_picture(
        &mut self,
        run: RunRef,
        data: Vec<u8>,
        format: PictureFormat,
        width: u32,
        height: u32,
    ) -> Result<()> {
        let pixels = picture_dimensions(&data, format)?;
        log::debug!(
            "Embedding {:?} picture ({}x{} px) at {}x{} EMU",
            format,
            pixels.width,
            pixels.height,
            width,
            height
        );

        self.run_mut(run).contents.push(RunContent::Picture(Picture {
            format,
            data,
            pixels,
            width,
            height,
        }));
        Ok(())
    }

    fn create_header(&mut self, kind: HeaderFooterType) -> Region {
        self.headers.push(HeaderFooter {
            kind,
            paragraphs: Vec::new(),
        });
        Region::Header(self.headers.len() - 1)
    }

    fn create_footer(&mut self, kind: HeaderFooterType) -> Region {
        self.footers.push(HeaderFooter {
            kind,
            paragraphs: Vec::new(),
        });
        Region::Footer(self.footers.len() - 1)
    }
}
