//! Header and footer rendering
//!
//! The header shows the template's logo right-aligned on every page. The
//! footer lays out three text columns (left, middle, right) line by line,
//! aligned with two tab stops.

use crate::schema::{Footer, Header, Template};
use crate::style::{convert_align, run_style, CENTER_TAB_POSITION, RIGHT_TAB_POSITION};
use crate::{Result, TemplateError};
use doc_core::units::cm_to_emu;
use doc_core::{
    Alignment, DocumentBuilder, HeaderFooterType, PictureFormat, Region, RunRef, TabAlignment,
    TabStop,
};

/// Width of the header logo in centimeters
pub const LOGO_WIDTH_CM: f64 = 3.53;

/// Height of the header logo in centimeters
pub const LOGO_HEIGHT_CM: f64 = 0.9;

/// Text shown in place of a logo that could not be read
pub const LOGO_PLACEHOLDER: &str = "Failed to load logo.";

/// Source of resource files referenced by a template
pub trait ResourceLoader {
    /// Read the bytes of the resource at `path`
    fn load(&self, path: &str) -> std::io::Result<Vec<u8>>;
}

/// Loads resources from the local file system
#[derive(Debug, Clone, Copy, Default)]
pub struct FsResourceLoader;

impl ResourceLoader for FsResourceLoader {
    fn load(&self, path: &str) -> std::io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

/// Header and footer renderer
pub struct HeaderFooterRenderer<'a> {
    /// The template to render
    template: &'a Template,
    /// Where the logo is read from
    loader: &'a dyn ResourceLoader,
}

impl<'a> HeaderFooterRenderer<'a> {
    /// Create a new renderer for a template
    pub fn new(template: &'a Template, loader: &'a dyn ResourceLoader) -> Self {
        Self { template, loader }
    }

    /// Add header and footer regions applying to every page
    ///
    /// Regions are only created for what the template defines.
    pub fn render<D: DocumentBuilder>(&self, doc: &mut D) -> Result<()> {
        if let Some(header) = &self.template.header {
            let region = doc.create_header(HeaderFooterType::Default);
            self.render_header(doc, region, header)?;
        }

        if let Some(footer) = &self.template.footer {
            let region = doc.create_footer(HeaderFooterType::Default);
            render_footer(doc, region, footer);
        }

        Ok(())
    }

    /// Add the logo to a header region
    ///
    /// An unsupported file suffix or corrupt image data fails the render.
    /// A logo that cannot be read is replaced by [`LOGO_PLACEHOLDER`].
    fn render_header<D: DocumentBuilder>(
        &self,
        doc: &mut D,
        region: Region,
        header: &Header,
    ) -> Result<()> {
        let paragraph = doc.create_paragraph(region);
        doc.set_alignment(paragraph, Alignment::Right);

        let format = PictureFormat::from_file_name(&header.logo)
            .map_err(|_| TemplateError::UnsupportedImageFormat(header.logo.clone()))?;

        let run = doc.create_run(paragraph);
        match self.loader.load(&header.logo) {
            Ok(data) => {
                doc.add_picture(
                    run,
                    data,
                    format,
                    cm_to_emu(LOGO_WIDTH_CM),
                    cm_to_emu(LOGO_HEIGHT_CM),
                )?;
            }
            Err(e) => {
                log::warn!("Failed to load logo {}: {e}", header.logo);
                doc.append_text(run, LOGO_PLACEHOLDER);
            }
        }

        Ok(())
    }
}

/// Lay out the footer columns in a footer region
///
/// One empty paragraph is placed above the first line. Each line holds the
/// entries of all columns at that index, separated by tabs.
pub fn render_footer<D: DocumentBuilder>(doc: &mut D, region: Region, footer: &Footer) {
    doc.create_paragraph(region);

    let line_count = footer
        .left_section
        .len()
        .max(footer.middle_section.len())
        .max(footer.right_section.len());

    for i in 0..line_count {
        let paragraph = doc.create_paragraph(region);
        let run = doc.create_run(paragraph);

        doc.add_tab_stop(
            paragraph,
            TabStop::new(CENTER_TAB_POSITION, TabAlignment::Center),
        );
        doc.add_tab_stop(
            paragraph,
            TabStop::new(RIGHT_TAB_POSITION, TabAlignment::Center),
        );
        doc.set_spacing_after(paragraph, 0);

        add_footer_text(doc, run, &footer.left_section, i, true);
        add_footer_text(doc, run, &footer.middle_section, i, true);
        add_footer_text(doc, run, &footer.right_section, i, false);

        // Page breaks have no meaning inside a footer
        doc.set_run_style(run, run_style(&footer.style));
        doc.set_alignment(paragraph, convert_align(footer.style.text_align));
    }
}

/// Add the column entry at `index` (if any), then optionally a tab
fn add_footer_text<D: DocumentBuilder>(
    doc: &mut D,
    run: RunRef,
    column: &[String],
    index: usize,
    add_tab: bool,
) {
    if let Some(text) = column.get(index) {
        doc.append_text(run, text);
    }

    if add_tab {
        doc.add_tab(run);
    }
}
