//! Folio lays out one magazine edition as a paged document.
//!
//! An [`Edition`] goes through three stages:
//!
//! 1. **Assembly** (`folio-core`): validation, style resolution, table of
//!    contents, and the fixed section order cover, index, articles, back cover.
//! 2. **Pagination** (`folio-layout`): page counts per section, page numbers
//!    and running labels, page references in the index and on the cover.
//! 3. **Rendering** (`folio-render-*`): paged-media HTML or a JSON dump.
//!
//! The [`Pipeline`] wires the stages together and fans batches out over an
//! executor.

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{OutputFormat, Pipeline, PipelineBuilder, load_layout_config};

pub use folio_core::{
    AssemblyError, DocumentAssembler, LogicalDocument, PaginatedDocument, Section, TocBuilder,
};
pub use folio_executor::ExecutorImpl;
pub use folio_layout::{LayoutConfig, PageFurniture, PageState};
pub use folio_source::{
    CurateOptions, EditionSource, JsonEditionFile, SnapshotStore, VecEditionSource,
};
pub use folio_style::{StyleMap, StyleParams, StyleResolver};
pub use folio_types::{Article, AssetRef, Author, Edition, Highlight, TocEntry};
