//! # folio-core
//!
//! Turns an [`Edition`] into a fully resolved, renderer-agnostic document:
//! - **validate**: required-field checks, run before anything is built
//! - **toc**: anchor slugs and the ordered index
//! - **assembler**: cover, index, articles and back cover in print order
//! - **paginated**: page numbers fed back into the index and cover highlights
//!
//! Nothing here touches the filesystem or the network. Page counts come from
//! a [`Paginator`](layout::Paginator), which may be an estimate or the report
//! of a real rendering backend.

// Re-export foundation crates
pub use folio_layout as layout;
pub use folio_style as style;
pub use folio_types as types;

pub mod assembler;
pub mod document;
pub mod error;
pub mod paginated;
pub mod text;
pub mod toc;
pub mod validate;

use folio_style::StyleMap;
use folio_types::Edition;
use std::sync::Arc;

pub use assembler::DocumentAssembler;
pub use document::{
    ArticleSection, BackCoverSection, CoverSection, IndexSection, LogicalDocument, Section,
};
pub use error::{AssemblyError, RequiredField};
pub use paginated::PaginatedDocument;
pub use toc::TocBuilder;

/// Assembles `edition` with a one-off assembler.
pub fn assemble(edition: &Edition, styles: Arc<StyleMap>) -> Result<LogicalDocument, AssemblyError> {
    DocumentAssembler::new(styles).assemble(edition)
}
