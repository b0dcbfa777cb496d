// src/pipeline/builder.rs
use super::config::{OutputFormat, load_layout_config};
use super::context::PipelineContext;
use super::orchestrator::Pipeline;
use crate::error::PipelineError;
use folio_core::DocumentAssembler;
use folio_executor::{Executor, ExecutorImpl};
use folio_layout::{EstimatingPaginator, LayoutConfig};
use folio_render_core::{DocumentRenderer, JsonRenderer, PageDirectives};
use folio_render_html::HtmlRenderer;
use folio_resource::FilesystemAssetProvider;
use folio_style::StyleMap;
use folio_traits::AssetProvider;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A builder for creating a `Pipeline`.
#[derive(Default)]
pub struct PipelineBuilder {
    styles: Option<Arc<StyleMap>>,
    layout: LayoutConfig,
    format: OutputFormat,
    executor: Option<ExecutorImpl>,
    asset_root: Option<PathBuf>,
    asset_provider: Option<Arc<dyn AssetProvider>>,
}

impl PipelineBuilder {
    /// Creates a builder with the stock style map, default layout and HTML output.
    pub fn new() -> Self {
        Default::default()
    }

    /// Uses `styles` to resolve article types. Accepts an owned map or a
    /// shared `Arc<StyleMap>`.
    pub fn with_style_map(mut self, styles: impl Into<Arc<StyleMap>>) -> Self {
        self.styles = Some(styles.into());
        self
    }

    /// Loads the style map from a JSON file.
    pub fn with_style_map_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        self.styles = Some(Arc::new(StyleMap::from_file(path)?));
        Ok(self)
    }

    pub fn with_layout_config(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Loads the layout geometry from a JSON file.
    pub fn with_layout_config_file<P: AsRef<Path>>(
        mut self,
        path: P,
    ) -> Result<Self, PipelineError> {
        self.layout = load_layout_config(path)?;
        Ok(self)
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Selects the executor used by `Pipeline::generate_batch`.
    pub fn with_executor(mut self, executor: ExecutorImpl) -> Self {
        self.executor = Some(executor);
        self
    }

    /// Sizes the global worker pool used for batches. Has no effect once the
    /// pool is running. `0` picks one worker per core.
    #[cfg(feature = "rayon-executor")]
    pub fn with_worker_count(self, num_threads: usize) -> Self {
        let threads = if num_threads == 0 {
            num_cpus::get().max(1)
        } else {
            num_threads
        };
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
        {
            log::warn!("[RAYON] Failed to configure global thread pool: {}. Using default.", e);
        } else {
            log::debug!("[RAYON] Configured global thread pool with {} threads", threads);
        }
        self
    }

    /// Checks local assets under `root` and resolves them for the output.
    pub fn with_asset_root<P: AsRef<Path>>(mut self, root: P) -> Self {
        self.asset_root = Some(root.as_ref().to_path_buf());
        self
    }

    /// Like `with_asset_root`, with any provider. Takes precedence over an asset root.
    pub fn with_asset_provider(mut self, provider: Arc<dyn AssetProvider>) -> Self {
        self.asset_provider = Some(provider);
        self
    }

    /// Consumes the builder and creates the `Pipeline`.
    pub fn build(self) -> Result<Pipeline, PipelineError> {
        let styles = self.styles.unwrap_or_else(|| Arc::new(StyleMap::builtin()));
        let paginator = EstimatingPaginator::new(self.layout)?;

        let assets: Option<Arc<dyn AssetProvider>> = match (self.asset_provider, self.asset_root)
        {
            (Some(provider), _) => Some(provider),
            (None, Some(root)) => Some(Arc::new(FilesystemAssetProvider::new(root))),
            (None, None) => None,
        };

        let renderer: Box<dyn DocumentRenderer> = match self.format {
            OutputFormat::Html => {
                let html = HtmlRenderer::new()?;
                match &assets {
                    Some(provider) => Box::new(html.with_asset_provider(Arc::clone(provider))),
                    None => Box::new(html),
                }
            }
            OutputFormat::Json => Box::new(JsonRenderer::new()),
        };

        let executor = self.executor.unwrap_or_default();
        log::info!(
            "Pipeline ready: {} style type(s), {} output, {} executor",
            styles.len(),
            renderer.format(),
            executor.name()
        );

        let context = PipelineContext {
            assembler: DocumentAssembler::new(styles),
            paginator,
            renderer,
            directives: PageDirectives::from(&self.layout),
            assets,
        };
        Ok(Pipeline::new(context, executor))
    }
}

