//! Template rendering

use crate::header_footer::{FsResourceLoader, HeaderFooterRenderer, ResourceLoader};
use crate::schema::Template;
use crate::section::SectionRenderer;
use crate::Result;
use doc_core::{Document, DocumentBuilder};

/// Template renderer
///
/// Renders the body content first, then the page header and footer, into a
/// single document.
pub struct TemplateRenderer<'a> {
    /// The template to render
    template: &'a Template,
    /// Source of the header logo
    loader: &'a dyn ResourceLoader,
}

impl<'a> TemplateRenderer<'a> {
    /// Create a new renderer reading resources from the file system
    pub fn new(template: &'a Template) -> Self {
        Self {
            template,
            loader: &FsResourceLoader,
        }
    }

    /// Set the resource loader used for the header logo
    pub fn with_loader(mut self, loader: &'a dyn ResourceLoader) -> Self {
        self.loader = loader;
        self
    }

    /// Render the template into a document
    ///
    /// On error the document may hold partial content and must be discarded.
    pub fn render<D: DocumentBuilder>(&self, doc: &mut D) -> Result<()> {
        self.template.validate()?;

        log::debug!(
            "Rendering template '{}' ({} sections)",
            self.template.title,
            self.template.sections.len()
        );

        SectionRenderer::new(self.template).render(doc);
        HeaderFooterRenderer::new(self.template, self.loader).render(doc)?;

        Ok(())
    }

    /// Render the template into a new in-memory document
    pub fn render_document(&self) -> Result<Document> {
        let mut doc = Document::new();
        self.render(&mut doc)?;
        Ok(doc)
    }
}

impl Template {
    /// Render with the file system as resource source
    pub fn render(&self) -> Result<Document> {
        TemplateRenderer::new(self).render_document()
    }
}
