use folio_core::DocumentAssembler;
use folio_layout::EstimatingPaginator;
use folio_render_core::{DocumentRenderer, PageDirectives};
use folio_traits::AssetProvider;
use std::sync::Arc;

/// Shared, read-only state of a pipeline.
///
/// Created once by the `PipelineBuilder` and handed to every worker of a
/// batch behind an `Arc`. Nothing in here is mutated after construction.
pub(crate) struct PipelineContext {
    pub assembler: DocumentAssembler,
    pub paginator: EstimatingPaginator,
    pub renderer: Box<dyn DocumentRenderer>,
    pub directives: PageDirectives,
    /// Set when an asset root is configured; enables the missing-asset check.
    pub assets: Option<Arc<dyn AssetProvider>>,
}
