//! The edition input model.
//!
//! These values are owned by the content source and treated as immutable by
//! the layout crates. Required text fields default to empty on
//! deserialization so that a missing field surfaces as a positional
//! validation error during assembly rather than as a parse failure.

use crate::ids::AssetRef;
use serde::{Deserialize, Serialize};

/// One complete issue: cover assets, highlights and the ordered articles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edition {
    pub number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: String,
    pub cover_image: AssetRef,
    pub back_cover_image: AssetRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<AssetRef>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    /// Reading order. The index and the article sections follow it exactly.
    #[serde(default)]
    pub articles: Vec<Article>,
}

impl Edition {
    pub fn new(number: u32, cover_image: impl Into<AssetRef>, back_cover_image: impl Into<AssetRef>) -> Self {
        Self {
            number,
            title: None,
            subtitle: String::new(),
            cover_image: cover_image.into(),
            back_cover_image: back_cover_image.into(),
            logo: None,
            highlights: Vec::new(),
            articles: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn with_logo(mut self, logo: impl Into<AssetRef>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    pub fn with_highlight(mut self, highlight: Highlight) -> Self {
        self.highlights.push(highlight);
        self
    }

    pub fn with_article(mut self, article: Article) -> Self {
        self.articles.push(article);
        self
    }

    /// The title shown on the cover band: the edition title, or `Edição nº N`.
    pub fn display_title(&self) -> String {
        match self.title.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => format!("Edição nº {}", self.number),
        }
    }
}

/// A cover teaser. Cosmetic: only the cover renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub title: String,
    /// Caller-supplied reference such as `pág. 5`. `None` or `?` means "unknown".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_reference: Option<String>,
}

impl Highlight {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            page_reference: None,
        }
    }

    pub fn with_page_reference(mut self, reference: impl Into<String>) -> Self {
        self.page_reference = Some(reference.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<AssetRef>,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bio: None,
            photo_url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub title: String,
    /// Genre/section tag, matched exactly against the style map.
    #[serde(default, rename = "type")]
    pub article_type: String,
    /// Optional explicit identifier; when present it is slugified instead of the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub author: Author,
    /// Pre-rendered rich content (HTML).
    #[serde(default)]
    pub body: String,
}

impl Article {
    pub fn new(title: impl Into<String>, article_type: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            article_type: article_type.into(),
            id: None,
            author: Author::default(),
            body: body.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_author(mut self, author: Author) -> Self {
        self.author = author;
        self
    }
}
