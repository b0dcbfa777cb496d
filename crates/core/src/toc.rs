//! Anchor slugs and the edition index.

use crate::error::AssemblyError;
use folio_types::{Article, Slug, TocEntry};
use std::collections::HashMap;

/// Only this many leading characters of a title feed the slug, which keeps
/// anchors short for long headlines.
pub const SLUG_SOURCE_CHARS: usize = 60;

/// Derives the anchor slug of an article from its explicit id, or its title.
///
/// The result contains only lowercase ASCII letters, digits and `-`. It may
/// be empty when the source has no usable characters.
pub fn derive_slug(article: &Article) -> String {
    let source = match article.id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id,
        _ => article.title.as_str(),
    };
    let head: String = source.chars().take(SLUG_SOURCE_CHARS).collect();
    slug::slugify(head)
}

pub struct TocBuilder;

impl TocBuilder {
    /// One entry per article, in edition order.
    ///
    /// Two articles resolving to the same slug are rejected, naming both.
    pub fn build(articles: &[Article]) -> Result<Vec<TocEntry>, AssemblyError> {
        let mut seen: HashMap<String, usize> = HashMap::with_capacity(articles.len());
        let mut entries = Vec::with_capacity(articles.len());

        for (i, article) in articles.iter().enumerate() {
            let slug = derive_slug(article);
            if slug.is_empty() {
                return Err(AssemblyError::EmptySlug {
                    position: i + 1,
                    title: article.title.clone(),
                });
            }
            if let Some(&first) = seen.get(&slug) {
                return Err(AssemblyError::SlugCollision {
                    slug: Slug::from(slug),
                    first_title: articles[first].title.clone(),
                    first_position: first + 1,
                    second_title: article.title.clone(),
                    second_position: i + 1,
                });
            }
            seen.insert(slug.clone(), i);
            entries.push(TocEntry::new(Slug::from(slug), article.title.clone()));
        }

        Ok(entries)
    }
}
