use crate::document::{
    ArticleSection, BackCoverSection, CoverSection, IndexSection, LogicalDocument, Section,
    css_class_for,
};
use crate::error::AssemblyError;
use crate::toc::TocBuilder;
use crate::validate::validate_articles;
use folio_style::{StyleMap, StyleResolver};
use folio_types::Edition;
use log::{debug, info, warn};
use std::sync::Arc;

/// Builds the section sequence of an edition.
///
/// The style map is shared read-only, so one assembler (or many clones of
/// it) can serve any number of editions concurrently.
#[derive(Debug, Clone)]
pub struct DocumentAssembler {
    resolver: StyleResolver,
}

impl DocumentAssembler {
    pub fn new(styles: Arc<StyleMap>) -> Self {
        Self {
            resolver: StyleResolver::new(styles),
        }
    }

    pub fn resolver(&self) -> &StyleResolver {
        &self.resolver
    }

    /// Validates the edition, then builds cover, index, articles and back cover.
    ///
    /// Identical input always produces an identical document. An edition
    /// without articles is valid and yields an empty index.
    pub fn assemble(&self, edition: &Edition) -> Result<LogicalDocument, AssemblyError> {
        validate_articles(&edition.articles)?;
        let toc = TocBuilder::build(&edition.articles)?;

        let mut sections = Vec::with_capacity(edition.articles.len() + 3);
        sections.push(Section::Cover(CoverSection {
            image: edition.cover_image.clone(),
            title: edition.display_title(),
            subtitle: edition.subtitle.clone(),
            logo: edition.logo.clone(),
            highlights: edition.highlights.clone(),
        }));
        sections.push(Section::Index(IndexSection {
            entries: toc.clone(),
        }));

        let mut fallback_types: Vec<String> = Vec::new();
        for (article, entry) in edition.articles.iter().zip(toc) {
            let resolved = self.resolver.resolve_with_source(&article.article_type);
            if resolved.is_fallback() && !fallback_types.contains(&article.article_type) {
                warn!(
                    "No style for article type '{}' (first seen on '{}'); using the default style",
                    article.article_type, article.title
                );
                fallback_types.push(article.article_type.clone());
            }
            debug!(
                "Article '{}' -> #{} ({} column(s), {})",
                article.title,
                entry.slug,
                resolved.params.columns,
                resolved.params.accent
            );
            sections.push(Section::Article(ArticleSection {
                slug: entry.slug,
                title: article.title.clone(),
                article_type: article.article_type.clone(),
                css_class: css_class_for(&article.article_type),
                style: resolved.params,
                style_source: resolved.source,
                author: article.author.clone(),
                body: article.body.clone(),
            }));
        }

        sections.push(Section::BackCover(BackCoverSection {
            image: edition.back_cover_image.clone(),
        }));

        info!(
            "Assembled edition {} with {} article(s)",
            edition.number,
            edition.articles.len()
        );
        Ok(LogicalDocument {
            edition_number: edition.number,
            sections,
            fallback_types,
        })
    }
}
