// src/error.rs
use folio_core::AssemblyError;
use folio_layout::LayoutError;
use folio_render_core::RenderError;
use folio_source::SourceError;
use folio_style::StyleLoadError;
use folio_traits::AssetError;
use thiserror::Error;

/// A comprehensive error type for the entire edition pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Assembly failed: {0}")]
    Assembly(#[from] AssemblyError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Loading content failed: {0}")]
    Source(#[from] SourceError),

    #[error("Style map is invalid: {0}")]
    StyleLoad(#[from] StyleLoadError),

    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
