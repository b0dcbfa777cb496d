use crate::error::RenderError;
use crate::types::{OutputFormat, PageDirectives};
use folio_core::PaginatedDocument;
use std::io::Write;

/// A backend that turns a paginated document into a final artifact.
///
/// Renderers never reorder sections or recompute page numbers; they write
/// what the document and its furniture already say.
pub trait DocumentRenderer: Send + Sync {
    fn render(
        &self,
        document: &PaginatedDocument,
        directives: &PageDirectives,
        out: &mut dyn Write,
    ) -> Result<(), RenderError>;

    fn format(&self) -> OutputFormat;

    fn name(&self) -> &'static str;
}
