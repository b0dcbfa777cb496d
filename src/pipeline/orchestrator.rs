// src/pipeline/orchestrator.rs
use super::context::PipelineContext;
use crate::error::PipelineError;
use folio_core::{LogicalDocument, PaginatedDocument};
use folio_executor::{Executor, ExecutorImpl};
use folio_layout::{Paginator, ReportedPaginator};
use folio_render_core::OutputFormat;
use folio_source::EditionSource;
use folio_types::Edition;
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// The edition pipeline: assemble, paginate, render.
///
/// Cheap to clone; clones share the same read-only context.
#[derive(Clone)]
pub struct Pipeline {
    context: Arc<PipelineContext>,
    executor: ExecutorImpl,
}

impl PipelineContext {
    fn assemble_with(
        &self,
        edition: &Edition,
        paginator: &dyn Paginator,
    ) -> Result<PaginatedDocument, PipelineError> {
        let document = self.assembler.assemble(edition)?;
        self.check_assets(&document);
        Ok(PaginatedDocument::paginate(document, paginator)?)
    }

    fn render(
        &self,
        document: &PaginatedDocument,
        out: &mut dyn Write,
    ) -> Result<(), PipelineError> {
        let start = Instant::now();
        self.renderer.render(document, &self.directives, out)?;
        debug!(
            "[{}] Rendered edition {} in {:.2?}",
            self.renderer.name(),
            document.document().edition_number,
            start.elapsed()
        );
        Ok(())
    }

    fn generate(&self, edition: &Edition, out: &mut dyn Write) -> Result<(), PipelineError> {
        let document = self.assemble_with(edition, &self.paginator)?;
        self.render(&document, out)
    }

    /// Logs every local asset that cannot be found. Never fails the build.
    fn check_assets(&self, document: &LogicalDocument) {
        let Some(assets) = &self.assets else {
            return;
        };
        let refs = document.asset_refs();
        let missing = assets.missing(&refs);
        for asset in &missing {
            warn!(
                "Edition {}: asset '{}' not found ({})",
                document.edition_number,
                asset,
                assets.name()
            );
        }
        debug!(
            "Checked {} asset reference(s), {} missing",
            refs.len(),
            missing.len()
        );
    }
}

impl Pipeline {
    pub(crate) fn new(context: PipelineContext, executor: ExecutorImpl) -> Self {
        Self {
            context: Arc::new(context),
            executor,
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        self.context.renderer.format()
    }

    /// Assembles and paginates an edition with estimated page counts.
    pub fn assemble(&self, edition: &Edition) -> Result<PaginatedDocument, PipelineError> {
        self.context.assemble_with(edition, &self.context.paginator)
    }

    /// Assembles an edition using page counts measured by a typesetter,
    /// one per section in document order.
    pub fn assemble_with_page_counts(
        &self,
        edition: &Edition,
        page_counts: Vec<usize>,
    ) -> Result<PaginatedDocument, PipelineError> {
        self.context
            .assemble_with(edition, &ReportedPaginator::new(page_counts))
    }

    /// Renders an already paginated document.
    pub fn render(
        &self,
        document: &PaginatedDocument,
        out: &mut dyn Write,
    ) -> Result<(), PipelineError> {
        self.context.render(document, out)
    }

    /// Assembles, paginates and renders one edition into `out`.
    pub fn generate(&self, edition: &Edition, out: &mut dyn Write) -> Result<(), PipelineError> {
        self.context.generate(edition, out)
    }

    /// Like `generate`, writing to a file. Nothing is created when assembly fails.
    pub fn generate_to_file<P: AsRef<Path>>(
        &self,
        edition: &Edition,
        path: P,
    ) -> Result<(), PipelineError> {
        let path = path.as_ref();
        let document = self.assemble(edition)?;
        let mut writer = BufWriter::new(File::create(path)?);
        self.context.render(&document, &mut writer)?;
        writer.flush()?;
        info!("Wrote edition {} to {}", edition.number, path.display());
        Ok(())
    }

    /// Generates several editions on the configured executor.
    ///
    /// Each edition succeeds or fails on its own; results come back in
    /// input order.
    pub fn generate_batch(&self, editions: Vec<Edition>) -> Vec<Result<Vec<u8>, PipelineError>> {
        let start = Instant::now();
        let count = editions.len();
        info!(
            "Generating {} edition(s) on {} ({} worker(s))",
            count,
            self.executor.name(),
            self.executor.parallelism()
        );

        let context = Arc::clone(&self.context);
        let results = self.executor.execute_all_fallible(editions, move |edition| {
            let mut buffer = Vec::new();
            context.generate(&edition, &mut buffer)?;
            Ok(buffer)
        });

        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            warn!("{} of {} edition(s) failed", failed, count);
        }
        info!("Batch finished in {:.2?}", start.elapsed());
        results
    }

    /// Drains an edition source and generates every edition it yields.
    ///
    /// An edition the source fails to produce is reported at its position;
    /// the rest go through `generate_batch`.
    pub fn generate_source(
        &self,
        source: &mut dyn EditionSource,
    ) -> Vec<Result<Vec<u8>, PipelineError>> {
        let mut loaded = Vec::with_capacity(source.size_hint().unwrap_or(0));
        while let Some(item) = source.next_edition() {
            loaded.push(item);
        }

        let editions: Vec<Edition> = loaded
            .iter()
            .filter_map(|item| item.as_ref().ok().cloned())
            .collect();
        let mut generated = self.generate_batch(editions).into_iter();

        loaded
            .into_iter()
            .map(|item| match item {
                Ok(_) => generated.next().unwrap_or_else(|| {
                    Err(PipelineError::Config("batch returned fewer results than editions".into()))
                }),
                Err(e) => Err(e.into()),
            })
            .collect()
    }
}
