//! A logical document joined with its page furniture.
//!
//! Once page counts are known, the index gets real page numbers and cover
//! highlights that asked for one (`?` or no reference) get `pág. N`.

use crate::document::{LogicalDocument, Section};
use crate::error::AssemblyError;
use folio_layout::{LayoutError, PageFurniture, Paginator, PhysicalPage};
use folio_types::Highlight;
use serde::Serialize;
use std::collections::HashMap;

/// Placeholder reference for a highlight whose page is not known.
pub const UNKNOWN_PAGE: &str = "?";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedDocument {
    document: LogicalDocument,
    furniture: PageFurniture,
}

impl PaginatedDocument {
    /// Computes the furniture of `document` with `paginator`, then resolves page references.
    pub fn paginate<P: Paginator + ?Sized>(
        document: LogicalDocument,
        paginator: &P,
    ) -> Result<Self, AssemblyError> {
        let furniture = PageFurniture::compute(&document.flow(), paginator)?;
        Self::new(document, furniture)
    }

    pub fn new(
        mut document: LogicalDocument,
        furniture: PageFurniture,
    ) -> Result<Self, AssemblyError> {
        if furniture.block_count() != document.sections.len() {
            return Err(LayoutError::CountMismatch {
                reported: furniture.block_count(),
                expected: document.sections.len(),
            }
            .into());
        }

        let mut starts: HashMap<String, usize> = HashMap::new();
        let mut by_title: HashMap<String, usize> = HashMap::new();
        for (index, section) in document.sections.iter().enumerate() {
            if let Section::Article(article) = section
                && let Some(page) = furniture.start_page_of_block(index)
            {
                starts.insert(article.slug.as_str().to_string(), page);
                by_title.entry(article.title.clone()).or_insert(page);
            }
        }

        for section in &mut document.sections {
            match section {
                Section::Index(index) => {
                    for entry in &mut index.entries {
                        entry.page_number = starts.get(entry.slug.as_str()).copied();
                    }
                }
                Section::Cover(cover) => {
                    for highlight in &mut cover.highlights {
                        if let ReferenceCheck::Disagrees { stated, computed } =
                            resolve_highlight(highlight, &by_title)
                        {
                            log::warn!(
                                "Cover highlight '{}' says page {} but the article starts on page {}",
                                highlight.title,
                                stated,
                                computed
                            );
                        }
                    }
                }
                _ => {}
            }
        }

        log::info!(
            "Paginated edition {}: {} page(s), {} numbered",
            document.edition_number,
            furniture.page_count(),
            furniture.main_page_count()
        );
        Ok(Self {
            document,
            furniture,
        })
    }

    pub fn document(&self) -> &LogicalDocument {
        &self.document
    }

    pub fn furniture(&self) -> &PageFurniture {
        &self.furniture
    }

    pub fn pages(&self) -> &[PhysicalPage] {
        self.furniture.pages()
    }

    pub fn into_parts(self) -> (LogicalDocument, PageFurniture) {
        (self.document, self.furniture)
    }
}

/// What happened to one cover highlight's page reference.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ReferenceCheck {
    Filled,
    Unresolved,
    Kept,
    Disagrees { stated: usize, computed: usize },
}

/// Fills a missing reference, or cross-checks a supplied one.
fn resolve_highlight(
    highlight: &mut Highlight,
    pages: &HashMap<String, usize>,
) -> ReferenceCheck {
    let computed = pages.get(&highlight.title).copied();
    let supplied = highlight
        .page_reference
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty() && *r != UNKNOWN_PAGE)
        .map(str::to_string);

    match (supplied, computed) {
        (None, Some(page)) => {
            highlight.page_reference = Some(format!("pág. {page}"));
            ReferenceCheck::Filled
        }
        (None, None) => {
            highlight.page_reference = Some(UNKNOWN_PAGE.to_string());
            ReferenceCheck::Unresolved
        }
        (Some(literal), Some(computed)) => match first_number(&literal) {
            Some(stated) if stated != computed => ReferenceCheck::Disagrees { stated, computed },
            _ => ReferenceCheck::Kept,
        },
        (Some(_), None) => ReferenceCheck::Kept,
    }
}

fn first_number(s: &str) -> Option<usize> {
    let digits: String = s
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::DocumentAssembler;
    use folio_layout::ReportedPaginator;
    use folio_style::StyleMap;
    use folio_types::{Article, Edition};
    use std::sync::Arc;

    fn document() -> LogicalDocument {
        let edition = Edition::new(3, "capa.jpg", "fim.jpg")
            .with_highlight(Highlight::new("Segundo"))
            .with_highlight(Highlight::new("Segundo").with_page_reference("pág. 9"))
            .with_highlight(Highlight::new("Inexistente").with_page_reference("?"))
            .with_article(Article::new("Primeiro", "Fatos", "<p>a</p>"))
            .with_article(Article::new("Segundo", "Humor", "<p>b</p>"));
        DocumentAssembler::new(Arc::new(StyleMap::builtin()))
            .assemble(&edition)
            .unwrap()
    }

    #[test]
    fn fills_index_page_numbers() {
        // cover, index (2 pages), Primeiro (3 pages), Segundo, back cover
        let paginator = ReportedPaginator::new(vec![1, 2, 3, 1, 1]);
        let paginated = PaginatedDocument::paginate(document(), &paginator).unwrap();
        let pages: Vec<Option<usize>> = paginated
            .document()
            .toc()
            .iter()
            .map(|e| e.page_number)
            .collect();
        assert_eq!(pages, vec![Some(3), Some(6)]);
    }

    #[test]
    fn resolves_and_keeps_highlight_references() {
        let paginator = ReportedPaginator::new(vec![1, 2, 3, 1, 1]);
        let paginated = PaginatedDocument::paginate(document(), &paginator).unwrap();
        let refs: Vec<Option<&str>> = paginated
            .document()
            .cover()
            .unwrap()
            .highlights
            .iter()
            .map(|h| h.page_reference.as_deref())
            .collect();
        assert_eq!(refs, vec![Some("pág. 6"), Some("pág. 9"), Some("?")]);
    }

    #[test]
    fn rejects_furniture_for_another_document() {
        let doc = document();
        let furniture = PageFurniture::compute(
            &doc.flow()[..3],
            &ReportedPaginator::new(vec![1, 1, 1]),
        )
        .unwrap();
        let err = PaginatedDocument::new(doc, furniture).unwrap_err();
        assert_eq!(
            err,
            AssemblyError::Layout(LayoutError::CountMismatch {
                reported: 3,
                expected: 5
            })
        );
    }

    #[test]
    fn disagreeing_literal_is_kept_and_flagged() {
        let pages = HashMap::from([("Segundo".to_string(), 6)]);

        let mut stale = Highlight::new("Segundo").with_page_reference("pág. 9");
        assert_eq!(
            resolve_highlight(&mut stale, &pages),
            ReferenceCheck::Disagrees {
                stated: 9,
                computed: 6
            }
        );
        assert_eq!(stale.page_reference.as_deref(), Some("pág. 9"));

        let mut agreeing = Highlight::new("Segundo").with_page_reference("p. 6");
        assert_eq!(resolve_highlight(&mut agreeing, &pages), ReferenceCheck::Kept);
        assert_eq!(agreeing.page_reference.as_deref(), Some("p. 6"));
    }

    #[test]
    fn missing_references_are_filled_or_marked_unknown() {
        let pages = HashMap::from([("Segundo".to_string(), 6)]);

        let mut open = Highlight::new("Segundo").with_page_reference("?");
        assert_eq!(resolve_highlight(&mut open, &pages), ReferenceCheck::Filled);
        assert_eq!(open.page_reference.as_deref(), Some("pág. 6"));

        let mut orphan = Highlight::new("Sem artigo");
        assert_eq!(resolve_highlight(&mut orphan, &pages), ReferenceCheck::Unresolved);
        assert_eq!(orphan.page_reference.as_deref(), Some("?"));
    }

    #[test]
    fn parses_first_number() {
        assert_eq!(first_number("pág. 12"), Some(12));
        assert_eq!(first_number("p. 3-4"), Some(3));
        assert_eq!(first_number("?"), None);
    }
}
