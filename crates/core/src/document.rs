//! The logical document: an ordered list of page-level sections.

use crate::text::paragraph_lengths;
use folio_layout::{BlockContent, FlowBlock, PageContext};
use folio_style::{StyleParams, StyleSource};
use folio_types::{AssetRef, Author, Highlight, Slug, TocEntry};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverSection {
    pub image: AssetRef,
    pub title: String,
    pub subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<AssetRef>,
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexSection {
    pub entries: Vec<TocEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSection {
    pub slug: Slug,
    pub title: String,
    pub article_type: String,
    /// Cosmetic class name derived from the type. Never used for style lookup.
    pub css_class: String,
    pub style: StyleParams,
    pub style_source: StyleSource,
    pub author: Author,
    /// Pre-rendered HTML, passed through untouched.
    pub body: String,
}

impl ArticleSection {
    /// The running-header label set at the start of this article.
    pub fn marker(&self) -> &str {
        &self.article_type
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackCoverSection {
    pub image: AssetRef,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Section {
    Cover(CoverSection),
    Index(IndexSection),
    Article(ArticleSection),
    BackCover(BackCoverSection),
}

impl Section {
    pub fn kind(&self) -> &'static str {
        match self {
            Section::Cover(_) => "cover",
            Section::Index(_) => "index",
            Section::Article(_) => "article",
            Section::BackCover(_) => "back-cover",
        }
    }

    /// How the paginator sees this section.
    pub fn flow_block(&self) -> FlowBlock {
        match self {
            Section::Cover(_) | Section::BackCover(_) => FlowBlock::cover(),
            Section::Index(index) => FlowBlock::listing(index.entries.len()),
            Section::Article(article) => FlowBlock {
                context: PageContext::Main,
                marker: Some(article.marker().to_string()),
                content: BlockContent::Text {
                    heading: true,
                    columns: article.style.columns,
                    paragraphs: paragraph_lengths(&article.body),
                },
            },
        }
    }
}

/// Fully resolved edition, ready for pagination and rendering.
///
/// Sections are always cover, index, the articles in edition order, then the
/// back cover.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicalDocument {
    pub edition_number: u32,
    pub sections: Vec<Section>,
    /// Article types that had no style map entry, in first-seen order.
    pub fallback_types: Vec<String>,
}

impl LogicalDocument {
    pub fn flow(&self) -> Vec<FlowBlock> {
        self.sections.iter().map(Section::flow_block).collect()
    }

    pub fn cover(&self) -> Option<&CoverSection> {
        self.sections.iter().find_map(|s| match s {
            Section::Cover(c) => Some(c),
            _ => None,
        })
    }

    pub fn toc(&self) -> &[TocEntry] {
        self.sections
            .iter()
            .find_map(|s| match s {
                Section::Index(i) => Some(i.entries.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    pub fn articles(&self) -> impl Iterator<Item = &ArticleSection> {
        self.sections.iter().filter_map(|s| match s {
            Section::Article(a) => Some(a),
            _ => None,
        })
    }

    pub fn article_count(&self) -> usize {
        self.articles().count()
    }

    /// Every asset locator the document references, in section order.
    pub fn asset_refs(&self) -> Vec<&AssetRef> {
        let mut refs = Vec::new();
        for section in &self.sections {
            match section {
                Section::Cover(c) => {
                    refs.push(&c.image);
                    refs.extend(c.logo.as_ref());
                }
                Section::Article(a) => refs.extend(a.author.photo_url.as_ref()),
                Section::BackCover(b) => refs.push(&b.image),
                Section::Index(_) => {}
            }
        }
        refs
    }
}

/// Lowercases the type and joins its words with `-`.
pub fn css_class_for(article_type: &str) -> String {
    article_type
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_class_keeps_accents() {
        assert_eq!(css_class_for("Divulgação científica"), "divulgação-científica");
        assert_eq!(css_class_for("Contra-apologética"), "contra-apologética");
        assert_eq!(css_class_for("Fatos"), "fatos");
    }

    fn article(columns: u8) -> Section {
        Section::Article(ArticleSection {
            slug: Slug::new("a"),
            title: "A".to_string(),
            article_type: "Humor".to_string(),
            css_class: "humor".to_string(),
            style: StyleParams { columns, ..StyleParams::FALLBACK },
            style_source: StyleSource::Mapped,
            author: Author::default(),
            body: "<p>um</p><p>dois</p>".to_string(),
        })
    }

    #[test]
    fn article_block_carries_marker_and_columns() {
        let block = article(2).flow_block();
        assert_eq!(block.context, PageContext::Main);
        assert_eq!(block.marker.as_deref(), Some("Humor"));
        assert_eq!(
            block.content,
            BlockContent::Text {
                heading: true,
                columns: 2,
                paragraphs: vec![2, 4]
            }
        );
    }

    #[test]
    fn covers_are_outside_the_main_context() {
        let back = Section::BackCover(BackCoverSection {
            image: AssetRef::new("fim.jpg"),
        });
        assert_eq!(back.flow_block().context, PageContext::Cover);
        assert!(back.flow_block().marker.is_none());
        assert_eq!(back.kind(), "back-cover");
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(article(1)).unwrap();
        assert_eq!(json["kind"], "article");
        assert_eq!(json["style"]["accent"], "#333333");
        assert_eq!(json["styleSource"], "mapped");
    }
}
