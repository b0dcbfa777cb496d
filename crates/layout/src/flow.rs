//! The paginator's view of a document: one block per logical section.

use serde::Serialize;

/// Which page context a block is set in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageContext {
    /// Cover and back cover. No header, outside the page counter.
    Cover,
    /// Numbered pages carrying the running header.
    Main,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum BlockContent {
    /// A single full-page image.
    FullBleed,
    /// A heading followed by one line per entry.
    Listing { entries: usize },
    /// Running text set in `columns` columns below a title band.
    Text {
        heading: bool,
        columns: u8,
        /// Visible character count of each paragraph.
        paragraphs: Vec<usize>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowBlock {
    pub context: PageContext,
    /// Label that becomes the running header from this block's first page on.
    pub marker: Option<String>,
    pub content: BlockContent,
}

impl FlowBlock {
    pub fn cover() -> Self {
        Self {
            context: PageContext::Cover,
            marker: None,
            content: BlockContent::FullBleed,
        }
    }

    pub fn listing(entries: usize) -> Self {
        Self {
            context: PageContext::Main,
            marker: None,
            content: BlockContent::Listing { entries },
        }
    }

    pub fn text(columns: u8, paragraphs: Vec<usize>) -> Self {
        Self {
            context: PageContext::Main,
            marker: None,
            content: BlockContent::Text {
                heading: true,
                columns,
                paragraphs,
            },
        }
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    pub fn is_main(&self) -> bool {
        self.context == PageContext::Main
    }
}
