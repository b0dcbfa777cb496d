//! Running page furniture: page numbers and the section label in the header.
//!
//! [`PageFurniture::compute`] walks the physical pages once, front to back,
//! carrying two pieces of state: the number the next main page receives and
//! the label set by the most recent marker. Cover pages sit outside both.

use crate::flow::{FlowBlock, PageContext};
use crate::paginator::Paginator;
use crate::LayoutError;
use serde::Serialize;

/// Header contents of one numbered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageState {
    /// 1-based, continuous across all main pages.
    pub page_number: usize,
    /// Label of the nearest preceding marker. `None` before the first one.
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalPage {
    /// 0-based position among all pages of the output, covers included.
    pub sheet: usize,
    /// Index of the block this page belongs to.
    pub block: usize,
    /// `None` on cover pages.
    pub state: Option<PageState>,
}

/// Where a block begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockStart {
    pub sheet: usize,
    pub page_count: usize,
    pub page_number: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageFurniture {
    pages: Vec<PhysicalPage>,
    starts: Vec<BlockStart>,
}

impl PageFurniture {
    pub fn compute<P: Paginator + ?Sized>(
        blocks: &[FlowBlock],
        paginator: &P,
    ) -> Result<Self, LayoutError> {
        if let Some(reported) = paginator.expected_blocks()
            && reported != blocks.len()
        {
            return Err(LayoutError::CountMismatch {
                reported,
                expected: blocks.len(),
            });
        }

        let mut next_page_number = 1;
        let mut current_label: Option<String> = None;
        let mut pages = Vec::new();
        let mut starts = Vec::with_capacity(blocks.len());

        for (index, block) in blocks.iter().enumerate() {
            let count = paginator.page_count(index, block)?;
            if count == 0 {
                return Err(LayoutError::EmptyBlock(index));
            }

            let first_sheet = pages.len();
            let mut first_number = None;
            for offset in 0..count {
                let state = match block.context {
                    PageContext::Cover => None,
                    PageContext::Main => {
                        // The marker lands on the first page of its block.
                        if offset == 0
                            && let Some(marker) = &block.marker
                        {
                            current_label = Some(marker.clone());
                        }
                        let state = PageState {
                            page_number: next_page_number,
                            label: current_label.clone(),
                        };
                        next_page_number += 1;
                        Some(state)
                    }
                };
                if offset == 0 {
                    first_number = state.as_ref().map(|s| s.page_number);
                }
                pages.push(PhysicalPage {
                    sheet: pages.len(),
                    block: index,
                    state,
                });
            }

            log::debug!(
                "Block {} spans {} page(s) from sheet {}",
                index,
                count,
                first_sheet
            );
            starts.push(BlockStart {
                sheet: first_sheet,
                page_count: count,
                page_number: first_number,
            });
        }

        Ok(Self { pages, starts })
    }

    pub fn pages(&self) -> &[PhysicalPage] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Pages inside the running counter.
    pub fn main_page_count(&self) -> usize {
        self.pages.iter().filter(|p| p.state.is_some()).count()
    }

    pub fn block_count(&self) -> usize {
        self.starts.len()
    }

    pub fn block_start(&self, block: usize) -> Option<&BlockStart> {
        self.starts.get(block)
    }

    /// Page number shown on the first page of `block`, if it is numbered.
    pub fn start_page_of_block(&self, block: usize) -> Option<usize> {
        self.starts.get(block).and_then(|s| s.page_number)
    }
}
