use crate::view::{
    ArticleView, BackCoverView, CoverView, DocumentView, Hrefs, IndexView, StylesheetView,
};
use folio_core::{PaginatedDocument, Section};
use folio_render_core::{DocumentRenderer, OutputFormat, PageDirectives, RenderError};
use folio_traits::AssetProvider;
use handlebars::Handlebars;
use std::io::Write;
use std::sync::Arc;

const TEMPLATES: &[(&str, &str)] = &[
    ("document", include_str!("../templates/document.hbs")),
    ("cover", include_str!("../templates/cover.hbs")),
    ("index", include_str!("../templates/index.hbs")),
    ("article", include_str!("../templates/article.hbs")),
    ("back-cover", include_str!("../templates/back_cover.hbs")),
    ("stylesheet", include_str!("../templates/magazine.css.hbs")),
];

/// Renders a paginated document as one HTML file with paged-media CSS.
///
/// Article bodies are inserted verbatim; they are expected to be sanitized
/// HTML already. Every other value is escaped.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    registry: Handlebars<'static>,
    assets: Option<Arc<dyn AssetProvider>>,
}

impl HtmlRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);
        for (name, source) in TEMPLATES {
            registry.register_template_string(name, *source)?;
        }
        Ok(Self {
            registry,
            assets: None,
        })
    }

    /// Resolves image locators through `provider` instead of writing them as-is.
    pub fn with_asset_provider(mut self, provider: Arc<dyn AssetProvider>) -> Self {
        self.assets = Some(provider);
        self
    }

    fn render_body(&self, document: &PaginatedDocument) -> Result<String, RenderError> {
        let hrefs = Hrefs::new(self.assets.as_deref());
        let mut body = String::new();
        for section in &document.document().sections {
            let html = match section {
                Section::Cover(cover) => self
                    .registry
                    .render("cover", &CoverView::new(cover, &hrefs))?,
                Section::Index(index) => self.registry.render("index", &IndexView::from(index))?,
                Section::Article(article) => self
                    .registry
                    .render("article", &ArticleView::new(article, &hrefs))?,
                Section::BackCover(back) => self.registry.render(
                    "back-cover",
                    &BackCoverView {
                        image: hrefs.href(&back.image),
                    },
                )?,
            };
            body.push_str(&html);
        }
        Ok(body)
    }
}

impl DocumentRenderer for HtmlRenderer {
    fn render(
        &self,
        document: &PaginatedDocument,
        directives: &PageDirectives,
        out: &mut dyn Write,
    ) -> Result<(), RenderError> {
        let stylesheet = self
            .registry
            .render("stylesheet", &StylesheetView::from(directives))?;
        let title = document
            .document()
            .cover()
            .map(|c| c.title.clone())
            .unwrap_or_default();
        let view = DocumentView {
            title,
            edition_number: document.document().edition_number,
            stylesheet,
            body: self.render_body(document)?,
        };
        self.registry.render_to_write("document", &view, &mut *out)?;
        log::debug!(
            "Rendered {} section(s) of edition {} as HTML",
            document.document().sections.len(),
            document.document().edition_number
        );
        Ok(())
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Html
    }

    fn name(&self) -> &'static str {
        "HtmlRenderer"
    }
}
