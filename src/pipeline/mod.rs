//! Edition pipeline orchestration.
//!
//! - [`PipelineBuilder`]: Fluent builder for constructing pipelines
//! - [`Pipeline`]: Assembles, paginates and renders editions, alone or in batches
//! - [`OutputFormat`]: Selects the rendering backend
//!
//! # Example
//!
//! ```ignore
//! use folio::{OutputFormat, PipelineBuilder};
//!
//! let pipeline = PipelineBuilder::new()
//!     .with_style_map_file("estilos.json")?
//!     .with_output_format(OutputFormat::Html)
//!     .with_asset_root("assets")
//!     .build()?;
//!
//! pipeline.generate_to_file(&edition, "edicao.html")?;
//! ```

mod builder;
pub mod config;
mod context;
mod orchestrator;

pub use builder::PipelineBuilder;
pub use config::{OutputFormat, load_layout_config};
pub use orchestrator::Pipeline;
