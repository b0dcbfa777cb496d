use crate::error::RenderError;
use crate::traits::DocumentRenderer;
use crate::types::{OutputFormat, PageDirectives};
use folio_core::PaginatedDocument;
use serde::Serialize;
use std::io::Write;

/// Writes the resolved document, its page states and the page directives
/// as pretty-printed JSON.
#[derive(Debug, Clone, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    directives: &'a PageDirectives,
    #[serde(flatten)]
    paginated: &'a PaginatedDocument,
}

impl DocumentRenderer for JsonRenderer {
    fn render(
        &self,
        document: &PaginatedDocument,
        directives: &PageDirectives,
        out: &mut dyn Write,
    ) -> Result<(), RenderError> {
        let output = JsonOutput {
            directives,
            paginated: document,
        };
        serde_json::to_writer_pretty(&mut *out, &output)?;
        out.write_all(b"\n")?;
        log::debug!("Wrote JSON for edition {}", document.document().edition_number);
        Ok(())
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }

    fn name(&self) -> &'static str {
        "JsonRenderer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::DocumentAssembler;
    use folio_layout::ReportedPaginator;
    use folio_style::StyleMap;
    use folio_types::{Article, Edition};
    use std::sync::Arc;

    #[test]
    fn writes_document_and_pages() {
        let edition = Edition::new(1, "capa.jpg", "fim.jpg")
            .with_article(Article::new("Olá", "Humor", "<p>x</p>"));
        let doc = DocumentAssembler::new(Arc::new(StyleMap::builtin()))
            .assemble(&edition)
            .unwrap();
        let paginated =
            PaginatedDocument::paginate(doc, &ReportedPaginator::new(vec![1, 1, 2, 1])).unwrap();

        let mut out = Vec::new();
        JsonRenderer::new()
            .render(&paginated, &PageDirectives::default(), &mut out)
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(json["document"]["sections"][2]["kind"], "article");
        assert_eq!(json["document"]["sections"][1]["entries"][0]["pageNumber"], 2);
        assert_eq!(json["furniture"]["pages"][3]["state"]["label"], "Humor");
        assert_eq!(json["directives"]["runningHeader"], true);
    }
}
