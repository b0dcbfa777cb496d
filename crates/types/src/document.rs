use crate::ids::Slug;
use serde::Serialize;

/// An entry in the edition index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TocEntry {
    /// The anchor of the article this entry links to.
    pub slug: Slug,
    /// The article title, as displayed.
    pub title: String,
    /// The page the article starts on. Only known after pagination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<usize>,
}

impl TocEntry {
    pub fn new(slug: Slug, title: impl Into<String>) -> Self {
        Self {
            slug,
            title: title.into(),
            page_number: None,
        }
    }
}
