//! Page counting strategies.
//!
//! A [`Paginator`] answers one question: how many physical pages does a block
//! occupy? The furniture pass only needs that count to number pages and
//! propagate labels, so the same pass works with an estimate computed from
//! [`LayoutConfig`] or with counts reported back by a real rendering engine.

use crate::algorithms::pagination::{check_fit, lines_that_fit};
use crate::config::LayoutConfig;
use crate::flow::{BlockContent, FlowBlock};
use crate::LayoutError;

pub trait Paginator {
    /// Physical pages occupied by `block`, which sits at `index` in the flow.
    /// Always at least one.
    fn page_count(&self, index: usize, block: &FlowBlock) -> Result<usize, LayoutError>;

    /// Number of blocks this paginator knows about, if it is fixed up front.
    fn expected_blocks(&self) -> Option<usize> {
        None
    }
}

/// Estimates page counts by flowing lines into columns.
#[derive(Debug, Clone)]
pub struct EstimatingPaginator {
    config: LayoutConfig,
}

/// Cursor into the column currently being filled.
struct ColumnCursor {
    pages: usize,
    column: u8,
    y: f32,
}

impl EstimatingPaginator {
    pub fn new(config: LayoutConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    fn listing_pages(&self, index: usize, entries: usize) -> Result<usize, LayoutError> {
        let height = self.config.column_height();
        let heading = self.config.index_heading_height;
        let entry = self.config.index_entry_height;
        if check_fit(0.0, heading + entry, height).should_break {
            return Err(LayoutError::ElementTooLarge {
                block: index,
                needed: heading + entry,
                available: height,
            });
        }

        let first_page = lines_that_fit(height - heading, entry);
        if entries <= first_page {
            return Ok(1);
        }
        let per_page = lines_that_fit(height, entry);
        Ok(1 + (entries - first_page).div_ceil(per_page))
    }

    fn text_pages(
        &self,
        index: usize,
        heading: bool,
        columns: u8,
        paragraphs: &[usize],
    ) -> Result<usize, LayoutError> {
        let config = &self.config;
        let height = config.column_height();
        let line = config.line_advance();
        let columns = columns.max(1);
        let per_line = config.chars_per_line(columns);

        // The title band spans every column of the first page.
        let top = if heading { config.article_heading_height } else { 0.0 };
        if check_fit(top, line, height).should_break {
            return Err(LayoutError::ElementTooLarge {
                block: index,
                needed: top + line,
                available: height,
            });
        }

        let mut cursor = ColumnCursor { pages: 1, column: 0, y: top };
        let advance = |cursor: &mut ColumnCursor| {
            cursor.column += 1;
            if cursor.column == columns {
                cursor.column = 0;
                cursor.pages += 1;
                cursor.y = 0.0;
            } else if cursor.pages == 1 {
                cursor.y = top;
            } else {
                cursor.y = 0.0;
            }
        };

        for &chars in paragraphs {
            let mut lines = chars.div_ceil(per_line).max(1);
            while lines > 0 {
                let fit = check_fit(cursor.y, line, height);
                if fit.should_break {
                    advance(&mut cursor);
                    continue;
                }
                let take = lines.min(lines_that_fit(fit.remaining_height, line).max(1));
                cursor.y += take as f32 * line;
                lines -= take;
            }
            // Paragraph spacing, one blank line.
            cursor.y += line;
        }

        // The author box is kept whole; it moves to a fresh column if needed.
        let author = config.author_box_height;
        if author > 0.0 {
            while cursor.y > 0.0 && check_fit(cursor.y, author, height).should_break {
                advance(&mut cursor);
            }
            if check_fit(cursor.y, author, height).should_break {
                return Err(LayoutError::ElementTooLarge {
                    block: index,
                    needed: author,
                    available: height,
                });
            }
        }

        Ok(cursor.pages)
    }
}

impl Paginator for EstimatingPaginator {
    fn page_count(&self, index: usize, block: &FlowBlock) -> Result<usize, LayoutError> {
        let pages = match &block.content {
            BlockContent::FullBleed => 1,
            BlockContent::Listing { entries } => self.listing_pages(index, *entries)?,
            BlockContent::Text {
                heading,
                columns,
                paragraphs,
            } => self.text_pages(index, *heading, *columns, paragraphs)?,
        };
        log::trace!("Block {} estimated at {} page(s)", index, pages);
        Ok(pages)
    }
}

/// Page counts measured by a rendering backend, one per block in flow order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportedPaginator {
    counts: Vec<usize>,
}

impl ReportedPaginator {
    pub fn new(counts: Vec<usize>) -> Self {
        Self { counts }
    }
}

impl Paginator for ReportedPaginator {
    fn page_count(&self, index: usize, _block: &FlowBlock) -> Result<usize, LayoutError> {
        match self.counts.get(index) {
            Some(0) => Err(LayoutError::EmptyBlock(index)),
            Some(&n) => Ok(n),
            None => Err(LayoutError::CountMismatch {
                reported: self.counts.len(),
                expected: index + 1,
            }),
        }
    }

    fn expected_blocks(&self) -> Option<usize> {
        Some(self.counts.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_style::{Margins, PageLayout, PageSize};

    // 100pt column, 10pt lines, 10 characters per line in one column.
    fn tiny() -> LayoutConfig {
        LayoutConfig {
            page: PageLayout {
                size: PageSize::Custom { width: 100.0, height: 100.0 },
                margins: Margins::zero(),
            },
            header_height: 0.0,
            font_size: 10.0,
            line_height: 1.0,
            glyph_width_em: 1.0,
            column_gap: 0.0,
            article_heading_height: 20.0,
            author_box_height: 0.0,
            index_heading_height: 20.0,
            index_entry_height: 10.0,
        }
    }

    fn paginator(config: LayoutConfig) -> EstimatingPaginator {
        EstimatingPaginator::new(config).unwrap()
    }

    #[test]
    fn full_bleed_is_one_page() {
        assert_eq!(paginator(tiny()).page_count(0, &FlowBlock::cover()).unwrap(), 1);
    }

    #[test]
    fn empty_article_still_takes_a_page() {
        let block = FlowBlock::text(1, vec![]);
        assert_eq!(paginator(tiny()).page_count(0, &block).unwrap(), 1);
    }

    #[test]
    fn text_overflows_onto_following_pages() {
        // 8 lines fit below the heading; 60 chars is 6 lines + 1 spacing line.
        let p = paginator(tiny());
        assert_eq!(p.page_count(0, &FlowBlock::text(1, vec![60])).unwrap(), 1);
        // 150 chars = 15 lines: 8 on page one, 7 on page two.
        assert_eq!(p.page_count(0, &FlowBlock::text(1, vec![150])).unwrap(), 2);
    }

    #[test]
    fn second_column_starts_below_the_heading() {
        // Two columns of 5 characters per line, 8 lines each below the heading.
        let p = paginator(tiny());
        assert_eq!(p.page_count(0, &FlowBlock::text(2, vec![80])).unwrap(), 1);
        assert_eq!(p.page_count(0, &FlowBlock::text(2, vec![85])).unwrap(), 2);
    }

    #[test]
    fn author_box_can_push_to_new_page() {
        let config = LayoutConfig {
            author_box_height: 30.0,
            ..tiny()
        };
        // 70 chars = 7 lines + spacing fills the page below the heading.
        let block = FlowBlock::text(1, vec![70]);
        assert_eq!(paginator(tiny()).page_count(0, &block).unwrap(), 1);
        assert_eq!(paginator(config).page_count(0, &block).unwrap(), 2);
    }

    #[test]
    fn listing_packs_entries_after_heading() {
        let p = paginator(tiny());
        assert_eq!(p.page_count(0, &FlowBlock::listing(0)).unwrap(), 1);
        assert_eq!(p.page_count(0, &FlowBlock::listing(8)).unwrap(), 1);
        assert_eq!(p.page_count(0, &FlowBlock::listing(9)).unwrap(), 2);
        assert_eq!(p.page_count(0, &FlowBlock::listing(28)).unwrap(), 3);
    }

    #[test]
    fn oversized_heading_is_an_error() {
        let config = LayoutConfig {
            article_heading_height: 95.0,
            ..tiny()
        };
        let err = paginator(config)
            .page_count(3, &FlowBlock::text(1, vec![10]))
            .unwrap_err();
        assert!(matches!(err, LayoutError::ElementTooLarge { block: 3, .. }));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = LayoutConfig {
            line_height: -1.0,
            ..tiny()
        };
        assert!(EstimatingPaginator::new(config).is_err());
    }

    #[test]
    fn reported_counts_are_returned_by_index() {
        let p = ReportedPaginator::new(vec![1, 3, 0]);
        let block = FlowBlock::listing(1);
        assert_eq!(p.page_count(1, &block).unwrap(), 3);
        assert_eq!(p.page_count(2, &block), Err(LayoutError::EmptyBlock(2)));
        assert!(matches!(
            p.page_count(3, &block),
            Err(LayoutError::CountMismatch { reported: 3, .. })
        ));
        assert_eq!(p.expected_blocks(), Some(3));
    }
}
