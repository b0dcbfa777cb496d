//! Template contexts built from a paginated document.

use folio_core::{ArticleSection, CoverSection, IndexSection};
use folio_render_core::PageDirectives;
use folio_traits::AssetProvider;
use folio_types::AssetRef;
use serde::Serialize;

/// Turns asset locators into hrefs, through a provider when one is set.
pub(crate) struct Hrefs<'a> {
    provider: Option<&'a dyn AssetProvider>,
}

impl<'a> Hrefs<'a> {
    pub(crate) fn new(provider: Option<&'a dyn AssetProvider>) -> Self {
        Self { provider }
    }

    pub(crate) fn href(&self, asset: &AssetRef) -> String {
        match self.provider {
            None => asset.as_str().to_string(),
            Some(provider) => provider.resolve_href(asset).unwrap_or_else(|e| {
                log::warn!("{} ({}): keeping the raw locator", e, provider.name());
                asset.as_str().to_string()
            }),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StylesheetView {
    pub size: String,
    pub margin: String,
    pub running_header: bool,
    pub header_height: f32,
}

impl From<&PageDirectives> for StylesheetView {
    fn from(d: &PageDirectives) -> Self {
        Self {
            size: d.main.size.to_css(),
            margin: d.main.margins.to_css(),
            running_header: d.running_header,
            header_height: d.header_height,
        }
    }
}

#[derive(Serialize)]
pub(crate) struct HighlightView<'a> {
    pub title: &'a str,
    pub page: &'a str,
}

#[derive(Serialize)]
pub(crate) struct CoverView<'a> {
    pub image: String,
    pub title: &'a str,
    pub subtitle: &'a str,
    pub logo: Option<String>,
    pub highlights: Vec<HighlightView<'a>>,
}

impl<'a> CoverView<'a> {
    pub(crate) fn new(cover: &'a CoverSection, hrefs: &Hrefs<'_>) -> Self {
        Self {
            image: hrefs.href(&cover.image),
            title: &cover.title,
            subtitle: &cover.subtitle,
            logo: cover.logo.as_ref().map(|l| hrefs.href(l)),
            highlights: cover
                .highlights
                .iter()
                .map(|h| HighlightView {
                    title: &h.title,
                    page: h.page_reference.as_deref().unwrap_or("?"),
                })
                .collect(),
        }
    }
}

#[derive(Serialize)]
pub(crate) struct IndexEntryView<'a> {
    pub slug: &'a str,
    pub title: &'a str,
    pub page: Option<usize>,
}

#[derive(Serialize)]
pub(crate) struct IndexView<'a> {
    pub entries: Vec<IndexEntryView<'a>>,
}

impl<'a> From<&'a IndexSection> for IndexView<'a> {
    fn from(index: &'a IndexSection) -> Self {
        Self {
            entries: index
                .entries
                .iter()
                .map(|e| IndexEntryView {
                    slug: e.slug.as_str(),
                    title: &e.title,
                    page: e.page_number,
                })
                .collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthorView<'a> {
    pub name: &'a str,
    pub bio: Option<&'a str>,
    pub photo: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ArticleView<'a> {
    pub slug: &'a str,
    pub title: &'a str,
    pub article_type: &'a str,
    pub css_class: &'a str,
    pub accent: String,
    pub columns: u8,
    pub align: &'static str,
    pub author: Option<AuthorView<'a>>,
    pub body: &'a str,
}

impl<'a> ArticleView<'a> {
    pub(crate) fn new(article: &'a ArticleSection, hrefs: &Hrefs<'_>) -> Self {
        let author = &article.author;
        let has_author = !author.name.trim().is_empty();
        Self {
            slug: article.slug.as_str(),
            title: &article.title,
            article_type: &article.article_type,
            css_class: &article.css_class,
            accent: article.style.accent.to_hex(),
            columns: article.style.columns,
            align: article.style.align.as_css(),
            author: has_author.then(|| AuthorView {
                name: &author.name,
                bio: author.bio.as_deref(),
                photo: author.photo_url.as_ref().map(|p| hrefs.href(p)),
            }),
            body: &article.body,
        }
    }
}

#[derive(Serialize)]
pub(crate) struct BackCoverView {
    pub image: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DocumentView {
    pub title: String,
    pub edition_number: u32,
    pub stylesheet: String,
    pub body: String,
}
